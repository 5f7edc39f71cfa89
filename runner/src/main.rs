mod broadcaster;
mod config;

use std::path::PathBuf;

use clap::Parser;
use snake_common::games::snake::{SessionCommand, SnakeSession, SnakeSessionState};
use snake_common::{log, logger};
use tokio::sync::mpsc;

use broadcaster::LoggingBroadcaster;
use config::get_config_manager;

#[derive(Parser)]
#[command(name = "snake_runner")]
struct Args {
    /// YAML config; defaults to snake_runner_config.yaml next to the binary.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the seed from the config.
    #[arg(long)]
    seed: Option<u64>,
    /// Overrides the tick limit from the config.
    #[arg(long)]
    max_ticks: Option<u64>,
    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config);
    let config = match config_manager.get_config() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config: {}", e);
            return Err(e.into());
        }
    };

    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    let max_ticks = args.max_ticks.unwrap_or(config.max_ticks).max(1);

    log!(
        "Starting {} map on a {} board at {}ms per tick, bot {:?}, seed {}",
        config.session.map,
        config.session.board_size.cells(),
        config.session.initial_speed.millis(),
        config.bot,
        seed
    );

    let session_state =
        SnakeSessionState::create(config.session, seed, Some(config.high_score)).with_bot(config.bot);

    let (command_tx, command_rx) = mpsc::channel(16);
    let broadcaster = LoggingBroadcaster::new(command_tx.clone(), max_ticks, config.log_every);

    let ctrl_c_tx = command_tx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log!("Shutdown signal received, quitting session...");
            let _ = ctrl_c_tx.send(SessionCommand::Quit).await;
        }
    });

    let summary = SnakeSession::run(session_state, command_rx, broadcaster).await;

    if summary.high_score > config.high_score {
        config_manager.update_config(|config| config.high_score = summary.high_score)?;
        log!("New high score {} saved", summary.high_score);
    }

    Ok(())
}
