//! acme-extract - write PEM files for a domain from an ACME acme.json store
//!
//! Configured through DOMAIN, RESOLVER_NAME, ACME_JSON_PATH and OUT_DIR.

use acme_extract::cli::Cli;
use acme_extract::config::Settings;
use acme_extract::utils::Result;
use acme_extract::{extract, output};
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging; stdout is reserved for the summary
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::from_cli(cli)?;
    tracing::debug!(
        "Extracting {:?} from resolver {}",
        settings.domains,
        settings.resolver_name
    );

    let report = extract::run(&settings)?;
    output::print_report(&report, cli.format)
}
