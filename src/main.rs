use clap::Parser;
use roam::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "roam", about = "Country and attraction explorer")]
struct Args {
    /// Country-list endpoint (overrides config file and ROAM_ENDPOINT)
    #[arg(short, long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to roam.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("roam.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Config load failed, using defaults: {}", e);
            config::RoamConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.endpoint.as_deref());

    log::info!("Roam starting up with endpoint: {}", resolved.endpoint);

    roam::tui::run(resolved)
}
