use tokio::sync::mpsc;

use snake_common::games::GameBroadcaster;
use snake_common::games::snake::{GameOverSummary, SessionCommand, SnakeSnapshot};
use snake_common::log;

/// Logs session progress and quits the session once the tick limit is hit.
#[derive(Clone)]
pub struct LoggingBroadcaster {
    commands: mpsc::Sender<SessionCommand>,
    max_ticks: u64,
    log_every: u64,
}

impl LoggingBroadcaster {
    pub fn new(commands: mpsc::Sender<SessionCommand>, max_ticks: u64, log_every: u64) -> Self {
        Self {
            commands,
            max_ticks,
            log_every: log_every.max(1),
        }
    }
}

impl GameBroadcaster for LoggingBroadcaster {
    async fn broadcast_state(&self, tick: u64, snapshot: SnakeSnapshot) {
        if tick % self.log_every == 0 {
            log!(
                "Tick {}: head {} heading {:?}, length {}, food {}, score {}, speed {}ms",
                tick,
                snapshot.snake.last().copied().unwrap_or_default(),
                snapshot.direction,
                snapshot.snake.len(),
                snapshot.food,
                snapshot.score,
                snapshot.speed
            );
        }

        if tick == self.max_ticks {
            log!("Tick limit {} reached", self.max_ticks);
            if let Err(e) = self.commands.send(SessionCommand::Quit).await {
                log!("Failed to request quit: {}", e);
            }
        }
    }

    async fn broadcast_game_over(&self, summary: GameOverSummary) {
        match summary.reason {
            Some(reason) => log!(
                "Game over after {} ticks: {}. Score {}, high score {}",
                summary.ticks,
                reason,
                summary.score,
                summary.high_score
            ),
            None => log!(
                "Session ended after {} ticks. Score {}, high score {}",
                summary.ticks,
                summary.score,
                summary.high_score
            ),
        }
    }
}
