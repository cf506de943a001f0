use clap::{Parser, Subcommand};
use docatlas::{assemble, discover, fetch, output};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "docatlas")]
#[command(about = "Route assembler for multi-version documentation sites")]
#[command(long_about = "\
Route assembler for multi-version documentation sites

Each docset version is a source instance: a directory with a config.json
(title, version label, sidebar) next to its markdown content. docatlas joins
all declared instances into a routes.json manifest for the HTML renderer.

Project structure:

  sources.toml                 # declares instances and remote assets
  docs/
  ├── v1/
  │   ├── config.json          # {\"title\", \"version\", \"sidebar\": {...}}
  │   ├── index.md             # → /v1/
  │   └── guides/setup.mdx     # → /v1/guides/setup/
  └── v2/
      ├── config.json
      └── index.md             # → /v2/

Instances declaring the same remote (e.g. remote = \"org/repo\") are versions
of one docset and share a version switcher; instances without a remote are
standalone.")]
#[command(version = version_string())]
struct Cli {
    /// Project root directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Sources manifest, relative to the project root
    #[arg(long, default_value = "sources.toml", global = true)]
    manifest: PathBuf,

    /// Output route manifest
    #[arg(long, default_value = "routes.json", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (discovery snapshot)
    #[arg(long, default_value = ".docatlas-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk declared sources into a discovery snapshot
    Discover,
    /// Assemble routes from an existing discovery snapshot
    Assemble,
    /// Run the full pipeline: fetch → discover → assemble
    Build,
    /// Validate sources and configs without writing anything
    Check,
    /// Download declared remote assets only
    Fetch,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let manifest_path = cli.root.join(&cli.manifest);

    match cli.command {
        Command::Discover => {
            let manifest = discover::load_manifest(&manifest_path)?;
            let snapshot = discover::discover(&cli.root, &manifest)?;
            write_snapshot(&cli.temp_dir, &snapshot)?;
            output::print_discover_output(&snapshot);
        }
        Command::Assemble => {
            let snapshot = read_snapshot(&cli.temp_dir)?;
            let routes = assemble::assemble(&snapshot)?;
            write_routes(&cli.output, &routes)?;
            output::print_routes_output(&routes);
        }
        Command::Build => {
            let manifest = discover::load_manifest(&manifest_path)?;

            if !manifest.assets.is_empty() {
                println!("==> Fetching {} remote asset(s)", manifest.assets.len());
                fetch::fetch_assets(&cli.root, &manifest.assets)?;
            }

            println!("==> Stage 1: Discovering {}", cli.root.display());
            let snapshot = discover::discover(&cli.root, &manifest)?;
            write_snapshot(&cli.temp_dir, &snapshot)?;
            output::print_discover_output(&snapshot);

            println!("==> Stage 2: Assembling routes → {}", cli.output.display());
            let routes = assemble::assemble(&snapshot)?;
            write_routes(&cli.output, &routes)?;
            output::print_routes_output(&routes);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", manifest_path.display());
            let manifest = discover::load_manifest(&manifest_path)?;
            let snapshot = discover::discover(&cli.root, &manifest)?;
            output::print_discover_output(&snapshot);
            // Assembly exercises config parsing and sidebar shape checks
            let routes = assemble::assemble(&snapshot)?;
            println!("==> {} route(s) valid", routes.len());
        }
        Command::Fetch => {
            let manifest = discover::load_manifest(&manifest_path)?;
            let written = fetch::fetch_assets(&cli.root, &manifest.assets)?;
            for path in &written {
                println!("Fetched {}", path.display());
            }
        }
    }

    Ok(())
}

fn write_snapshot(
    temp_dir: &Path,
    snapshot: &discover::Snapshot,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let path = temp_dir.join("discovery.json");
    std::fs::write(&path, serde_json::to_string_pretty(snapshot)?)?;
    Ok(())
}

fn read_snapshot(temp_dir: &Path) -> Result<discover::Snapshot, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(temp_dir.join("discovery.json"))?;
    Ok(serde_json::from_str(&content)?)
}

fn write_routes(
    output: &Path,
    routes: &[docatlas::types::Route],
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, serde_json::to_string_pretty(routes)?)?;
    Ok(())
}
