use clap::{Parser, Subcommand};
use docpages::config::{self, DEFAULT_CONFIG_FILE};
use docpages::{generate, modules, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shared flag for commands with a machine-readable form.
#[derive(clap::Args, Clone, Default)]
struct JsonArgs {
    /// Print JSON instead of progress lines
    #[arg(long)]
    json: bool,
}

fn version_string() -> &'static str {
    if env!("DOCPAGES_RELEASE_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    match env!("DOCPAGES_GIT_HASH") {
        "" => "dev@unknown",
        // Leaked once at startup
        hash => Box::leak(format!("dev@{hash}").into_boxed_str()),
    }
}

#[derive(Parser)]
#[command(name = "docpages")]
#[command(about = "Generate static HTML pages from module documentation folders")]
#[command(long_about = "\
Generate static HTML pages from module documentation folders

Every module in the built-in table maps a folder under the docs root to a
page under the output root:

  docs/
  ├── bpi-core/
  │   └── README.md        # optional; '## Overview' section is extracted
  └── bpci-enterprise/     # folder without README gets fallback text

  website/docs/
  ├── bpi-core/index.html
  └── bpci-enterprise/index.html

Modules whose folder is missing are skipped with a warning.

Run 'docpages gen-config' to print a documented docpages.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file (default: docpages.toml, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Folder holding one documentation folder per module
    #[arg(long, env = "DOCPAGES_DOCS_ROOT", global = true)]
    docs_root: Option<PathBuf>,

    /// Folder receiving the generated pages
    #[arg(long, env = "DOCPAGES_OUTPUT", global = true)]
    output: Option<PathBuf>,

    /// Log progress details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one page per module (default)
    Build(JsonArgs),
    /// Report which module folders and READMEs exist, without writing
    Check,
    /// Print the built-in module table
    List(JsonArgs),
    /// Print a stock docpages.toml with all options documented
    GenConfig,
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO, otherwise RUST_LOG decides
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let command = cli.command.unwrap_or(Command::Build(JsonArgs::default()));

    match command {
        Command::Build(args) => {
            let site_config = resolve_config(cli.config, cli.docs_root, cli.output)?;
            if args.json {
                let summary = generate::generate_all(&site_config, |_, _| {})?;
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "==> Generating {} \u{2192} {}",
                    site_config.docs_root.display(),
                    site_config.output_root.display()
                );
                let summary = generate::generate_all(&site_config, output::print_outcome)?;
                output::print_summary(&summary);
            }
        }
        Command::Check => {
            let site_config = resolve_config(cli.config, cli.docs_root, cli.output)?;
            println!("==> Checking {}", site_config.docs_root.display());
            let statuses = generate::check(&site_config, modules::MODULES);
            output::print_check_output(&statuses);
        }
        Command::List(args) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(modules::MODULES)?);
            } else {
                output::print_module_table(modules::MODULES);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Layer the config file, then env/flag path overrides.
///
/// An explicitly named config file must exist; the default one is optional.
fn resolve_config(
    config_path: Option<PathBuf>,
    docs_root: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<config::DocsConfig, config::ConfigError> {
    let required = config_path.is_some();
    let path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let site_config = config::load_config(&path, required)?.with_overrides(docs_root, output);
    site_config.validate()?;
    Ok(site_config)
}
