use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::Mutex;

use bloglist::{
    infrastructure::{
        api::{BlogApi, HttpBlogApi},
        cli::Cli,
        config::Config,
        storage::SessionStore,
        tui::{real::RealTui, TuiLike},
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // Load configuration (file-based), CLI wins for the service URL
    let config = Config::new()?.with_api_url(args.api_url);
    log::info!("blog service at {}", config.api.base_url);

    let api: Arc<dyn BlogApi> = Arc::new(HttpBlogApi::new(&config.api)?);
    let sessions = SessionStore::in_data_dir();

    let mut runner = {
        let tui: Arc<Mutex<dyn TuiLike + Send>> = Arc::new(Mutex::new(
            RealTui::new()?
                .tick_rate(args.tick_rate)
                .frame_rate(args.frame_rate),
        ));
        AppRunner::new_with_real(config, tui, api, sessions)?
    };
    runner.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
