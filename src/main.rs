use clap::Parser;
use holocron::catalog::SwapiClient;
use holocron::core::config::{self, CliOverrides};
use holocron::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "holocron", about = "Terminal browser for the Star Wars API")]
struct Args {
    /// Category to open with: people, planets or starships
    #[arg(short, long)]
    category: Option<String>,

    /// Color theme: light or dark
    #[arg(short, long)]
    theme: Option<String>,

    /// Catalog base URL (e.g. https://swapi.dev/api)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to holocron.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("holocron.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable config file: {}", e);
        config::HolocronConfig::default()
    });
    let cli = CliOverrides {
        category: args.category,
        theme: args.theme,
        base_url: args.base_url,
    };
    let resolved = match config::resolve(&file_config, &cli) {
        Ok(resolved) => resolved,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("holocron: {e}");
            std::process::exit(2);
        }
    };

    log::info!(
        "Holocron starting up: category={}, theme={}, base_url={}",
        resolved.category,
        resolved.theme,
        resolved.base_url
    );

    let catalog = Arc::new(SwapiClient::new(
        Some(resolved.base_url.clone()),
        Some(resolved.timeout),
    ));

    tui::run(resolved, catalog)
}
