use std::future::Future;

use super::snake::{GameOverSummary, SnakeSnapshot};

/// Sink for everything a renderer needs to draw a session.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, tick: u64, snapshot: SnakeSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(&self, summary: GameOverSummary) -> impl Future<Output = ()> + Send;
}
