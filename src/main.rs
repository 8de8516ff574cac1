use clap::{Parser, Subcommand};
use sackhe_site::{config, content, generate, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "sackhe-site")]
#[command(about = "Static site generator for the Sackhe Technologies brochure site")]
#[command(long_about = "\
Static site generator for the Sackhe Technologies brochure site

All copy lives in the compiled-in content registry. The source directory only
holds optional overrides:

  site/
  ├── config.toml          # Animation, transition, contact and color settings
  └── assets/              # Logos, images, favicon → copied to dist/assets/

Output:

  dist/
  ├── index.html           # Home
  ├── about/index.html     # One directory per page
  ├── style.<hash>.css     # Fingerprinted stylesheet
  ├── site.<hash>.js       # Reveal, transition and contact-form runtime
  ├── assets/
  └── site-manifest.json   # What the build wrote

Set RUST_LOG=info (or debug) for build diagnostics.

Run 'sackhe-site gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site source directory (config.toml and assets/)
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page, the stylesheet and the runtime into the output directory
    Build,
    /// Validate the content registry and config without writing anything
    Check,
    /// Print the content registry
    Content {
        /// Emit the registry as JSON instead of the inventory
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Building {} → {}", cli.source.display(), cli.output.display());
            let report = generate::generate(&cli.source, &cli.output, &site_config)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let registry = content::registry();
            registry.validate()?;
            let site_config = config::load_config(&cli.source)?;
            let config_file = cli.source.join("config.toml");
            let config_file = config_file.exists().then_some(config_file.as_path());
            output::print_check_output(registry, &site_config, config_file);
        }
        Command::Content { json } => {
            let registry = content::registry();
            if json {
                println!("{}", serde_json::to_string_pretty(registry)?);
            } else {
                output::print_content_output(registry);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
