//! tube-tutor — console entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Init logger at the configured level
//!   4. Build the LLM provider
//!   5. Run the console until /exit, EOF or Ctrl-C

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use tube_tutor::{config, console, error::AppError, guide::Guide, logger};

#[tokio::main]
async fn main() {
    let code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    };
    // A pending stdin read would otherwise keep the runtime alive on drop.
    std::process::exit(code);
}

async fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let config = config::load()?;
    logger::init(&config.log_level)?;

    info!(
        log_level = %config.log_level,
        provider = %config.llm.provider,
        model = %config.llm.openai.model,
        video_count = config.guide.video_count,
        summary_concurrency = config.guide.summary_concurrency,
        "config loaded"
    );

    let guide = Guide::from_config(&config)?;
    if config.llm.provider == "dummy" {
        warn!("dummy provider active — replies are echoes, not model output");
    }

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    console::Console::new(guide)
        .interactive(console::is_interactive_tty())
        .run(shutdown)
        .await
}
