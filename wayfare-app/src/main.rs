use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wayfare_common::observability::{LogConfig, init_logging};
use wayfare_config::{DEFAULT_CONFIG_FILE, WayfareConfig, WayfareConfigLoader};
use wayfare_web::{ExtractionReport, TourRecord, extract_tour_with_report, scrape_tour_with_report};

mod render;
mod settings;

#[derive(Parser)]
#[command(name = "wayfare", about = "Extract day-by-day itineraries from Flight Centre tour pages")]
struct Cli {
    /// Config file (defaults to ./wayfare.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Mirror debug logs to stderr and print discard counts
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a tour page and extract its itinerary
    Scrape {
        url: String,
        /// Write the JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write the JSON to tour_data_<id>.json in the configured output dir
        #[arg(long)]
        save: bool,
    },
    /// Extract from a saved HTML page, without network access
    Parse {
        file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List example tour URLs
    Examples,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let cfg = load_config(cli.config.as_deref())?;

    init_logging(LogConfig {
        app_name: "wayfare",
        emit_stderr: cli.verbose,
        default_filter: if cli.verbose { "debug" } else { "info" },
        ..LogConfig::default()
    })?;

    match cli.command {
        Commands::Scrape { url, output, save } => {
            if !render::is_tour_url(&url) {
                tracing::warn!(%url, "url outside the tour site");
                eprintln!(
                    "Warning: {url} does not start with {}; extraction may find nothing.",
                    render::TOUR_URL_PREFIX
                );
            }

            let session = settings::build_session(&cfg.fetch)?;
            let (record, report) = match scrape_tour_with_report(&session, &url).await {
                Ok(found) => found,
                Err(err) => {
                    eprintln!("{}", render::FETCH_HINT);
                    return Err(render::scrape_failure(err));
                }
            };

            let target = output.or_else(|| save.then(|| cfg.output.dir.join(render::download_file_name(&url))));
            emit(&record, &report, target.as_deref(), cli.verbose)
        }
        Commands::Parse { file, output } => {
            let markup = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let (record, report) = extract_tour_with_report(&markup);
            emit(&record, &report, output.as_deref(), cli.verbose)
        }
        Commands::Examples => {
            for (i, url) in render::EXAMPLE_URLS.iter().enumerate() {
                println!("Example {}: {url}", i + 1);
            }
            Ok(())
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<WayfareConfig> {
    let loader = match explicit {
        Some(path) => WayfareConfigLoader::new().with_file(path),
        None => WayfareConfigLoader::new().with_optional_file(DEFAULT_CONFIG_FILE),
    };
    loader.load().context("failed to load configuration")
}

/// JSON on stdout, preview on stderr, optional file copy.
fn emit(
    record: &TourRecord,
    report: &ExtractionReport,
    target: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let json = record.to_pretty_json().context("failed to serialize tour record")?;
    println!("{json}");

    eprint!("{}", render::preview(record, verbose.then_some(report)));

    if let Some(path) = target {
        let written = render::write_json(path, &json)?;
        tracing::info!(path = %written.display(), "tour.saved");
        eprintln!("Saved {}", written.display());
    }
    Ok(())
}
