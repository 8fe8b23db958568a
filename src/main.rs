//! Pontual - a terminal punch clock
//!
//! This is the main entry point for the pontual application.

use chrono::Local;
use tokio::io::{stdin, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pontual::{
    config::Config,
    state::CountdownController,
    utils::shutdown_signal,
    view::{Form, Session},
};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout carries only the form
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pontual={}", config.log_level())));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(run(config));

    // A pending stdin read cannot be cancelled; don't wait for it
    runtime.shutdown_background();
    result
}

async fn run(config: Config) -> anyhow::Result<()> {
    let arrival = config.initial_arrival(Local::now());
    info!("Starting pontual v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: arrival={}, start={}, json={}",
          arrival.format("%H:%M"), config.start, config.json);

    let form = Form::new(CountdownController::new(), arrival);
    if config.start {
        form.press_button();
    }

    let mut session = Session::new(form, std::io::stdout(), config.output());
    session.run(BufReader::new(stdin()), shutdown_signal()).await?;

    info!("Shutdown complete");
    Ok(())
}
