mod broadcaster;
mod scheduler;
mod session_rng;

pub mod snake;

pub use broadcaster::GameBroadcaster;
pub use scheduler::{SchedulerState, TickControl, TickScheduler};
pub use session_rng::SessionRng;
