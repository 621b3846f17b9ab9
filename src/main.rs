use std::fs::File;
use std::process::ExitCode;

use addytui::core::config::{self, AddyConfig};
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "addytui", version, about = "Terminal UI for addy.io email aliases")]
struct Args {}

#[tokio::main]
async fn main() -> ExitCode {
    let _args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("addytui: {e}, using defaults");
        AddyConfig::default()
    });
    let resolved = config::resolve(&file_config);

    // File logger: the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("addytui starting up against {}", resolved.base_url);

    match addytui::tui::run(resolved) {
        Ok(()) => {
            log::info!("addytui exiting");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("addytui aborting: {}", e);
            eprintln!("addytui: {e}");
            ExitCode::FAILURE
        }
    }
}
