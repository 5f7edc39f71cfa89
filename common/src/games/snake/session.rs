use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, Notify, mpsc};

use crate::log;
use crate::games::{GameBroadcaster, SchedulerState, SessionRng, TickControl, TickScheduler};
use super::bot_controller::{BotController, BotType};
use super::game_state::{SnakeGameState, TickOutcome};
use super::settings::SnakeSessionSettings;
use super::types::{DeathReason, Direction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Turn(Direction),
    TogglePause,
    Restart,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub score: u32,
    pub high_score: u32,
    /// `None` when the session was quit before the snake died.
    pub reason: Option<DeathReason>,
    pub ticks: u64,
}

#[derive(Clone)]
pub struct SnakeSessionState {
    pub game_state: Arc<Mutex<SnakeGameState>>,
    pub tick: Arc<Mutex<u64>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub bot: Option<BotType>,
    pub tick_interval: Duration,
}

impl SnakeSessionState {
    pub fn create(
        settings: SnakeSessionSettings,
        seed: u64,
        restored_high_score: Option<u32>,
    ) -> Self {
        let mut rng = SessionRng::new(seed);
        let game_state = SnakeGameState::new(settings, restored_high_score, &mut rng);

        Self {
            tick_interval: game_state.tick_interval(),
            game_state: Arc::new(Mutex::new(game_state)),
            tick: Arc::new(Mutex::new(0u64)),
            rng: Arc::new(Mutex::new(rng)),
            bot: None,
        }
    }

    /// Lets a bot steer instead of turn commands.
    pub fn with_bot(mut self, bot: BotType) -> Self {
        self.bot = Some(bot);
        self
    }
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives the session until the snake dies or `Quit` arrives.
    pub async fn run(
        session_state: SnakeSessionState,
        mut commands: mpsc::Receiver<SessionCommand>,
        broadcaster: impl GameBroadcaster,
    ) -> GameOverSummary {
        let finished = Arc::new(Notify::new());

        let mut scheduler = TickScheduler::start(session_state.tick_interval, {
            let session_state = session_state.clone();
            let broadcaster = broadcaster.clone();
            let finished = Arc::clone(&finished);
            move || {
                let session_state = session_state.clone();
                let broadcaster = broadcaster.clone();
                let finished = Arc::clone(&finished);
                async move {
                    let control = Self::run_tick(&session_state, &broadcaster).await;
                    if control == TickControl::Stop {
                        finished.notify_one();
                    }
                    control
                }
            }
        })
        .with_clear_hook(|| log!("Session cleared"));

        let mut commands_open = true;

        loop {
            tokio::select! {
                biased;
                _ = finished.notified() => break,
                command = commands.recv(), if commands_open => {
                    match command {
                        Some(SessionCommand::Quit) => {
                            log!("Session quit");
                            break;
                        }
                        Some(command) => {
                            Self::handle_command(&session_state, &scheduler, command).await;
                        }
                        None => commands_open = false,
                    }
                }
            }
        }

        scheduler.stop().await;

        let summary = build_game_over_summary(&session_state).await;
        broadcaster.broadcast_game_over(summary.clone()).await;
        summary
    }

    async fn run_tick(
        session_state: &SnakeSessionState,
        broadcaster: &impl GameBroadcaster,
    ) -> TickControl {
        let mut game_state = session_state.game_state.lock().await;
        let mut rng = session_state.rng.lock().await;

        if let Some(bot) = session_state.bot
            && let Some(direction) = BotController::calculate_move(bot, &game_state, &mut rng)
        {
            game_state.set_direction(direction);
        }

        let previous_speed = game_state.speed();
        let outcome = match game_state.tick(&mut rng) {
            Ok(outcome) => outcome,
            Err(e) => {
                log!("Tick failed: {}", e);
                return TickControl::Stop;
            }
        };
        drop(rng);

        let tick_value = {
            let mut tick = session_state.tick.lock().await;
            *tick += 1;
            *tick
        };

        let snapshot = game_state.snapshot();
        let speed = game_state.speed();
        drop(game_state);

        broadcaster.broadcast_state(tick_value, snapshot).await;

        match outcome {
            TickOutcome::GameOver(_) => TickControl::Stop,
            _ if speed != previous_speed => TickControl::ChangeInterval(Duration::from_millis(u64::from(speed))),
            _ => TickControl::Continue,
        }
    }

    pub async fn handle_command(
        session_state: &SnakeSessionState,
        scheduler: &TickScheduler,
        command: SessionCommand,
    ) {
        match command {
            SessionCommand::Turn(direction) => {
                let mut game_state = session_state.game_state.lock().await;
                if !game_state.set_direction(direction) {
                    log!("Ignored turn {:?} while heading {:?}", direction, game_state.direction());
                }
            }
            SessionCommand::TogglePause => {
                if scheduler.is_paused() {
                    scheduler.resume();
                } else {
                    scheduler.pause();
                }
            }
            SessionCommand::Restart => {
                let mut game_state = session_state.game_state.lock().await;
                // a finished session keeps its result for the summary
                if game_state.is_game_over() || scheduler.state() == SchedulerState::Stopped {
                    log!("Ignored restart after game over");
                    return;
                }
                let mut rng = session_state.rng.lock().await;
                game_state.restart(&mut rng);
                scheduler.set_interval(game_state.tick_interval());
                scheduler.resume();
                log!("Session restarted");
            }
            SessionCommand::Quit => {}
        }
    }
}

async fn build_game_over_summary(session_state: &SnakeSessionState) -> GameOverSummary {
    let game_state = session_state.game_state.lock().await;
    let ticks = *session_state.tick.lock().await;

    GameOverSummary {
        score: game_state.scores().score(),
        high_score: game_state.scores().high_score(),
        reason: game_state.death_reason(),
        ticks,
    }
}
