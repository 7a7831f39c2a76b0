use anyhow::Result;
use rentscout::{config::Config, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    // `--generate-config` writes a commented default config and exits
    if std::env::args().any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;

    if config.logging.enabled {
        logger::init_file_logging()?;
    }

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
