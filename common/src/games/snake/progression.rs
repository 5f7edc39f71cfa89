/// Speed never drops below this many milliseconds per tick.
pub const MIN_THRESHOLD_SPEED: u32 = 100;
pub const SPEED_STEP: u32 = 20;
pub const SCORE_STEP: u32 = 5;

/// Shortens the tick interval by [`SPEED_STEP`] every [`SCORE_STEP`] points.
/// The guard looks at the speed before the decrement, so a step landing
/// exactly on the threshold is still taken.
pub fn speed_increment(speed: u32, score: u32) -> u32 {
    if speed > MIN_THRESHOLD_SPEED && score > 0 && score % SCORE_STEP == 0 {
        speed - SPEED_STEP
    } else {
        speed
    }
}
