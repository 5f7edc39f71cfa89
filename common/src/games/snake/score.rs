/// Current score and the best score carried between sessions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    score: u32,
    high_score: u32,
}

impl ScoreBoard {
    /// Starts at zero with a high score restored from storage, 0 when absent.
    pub fn new(restored_high_score: Option<u32>) -> Self {
        Self {
            score: 0,
            high_score: restored_high_score.unwrap_or(0),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// One food eaten. Returns the new score.
    pub fn record_food(&mut self) -> u32 {
        self.score += 1;
        self.high_score = self.high_score.max(self.score);
        self.score
    }

    pub fn is_high_score(&self) -> bool {
        self.score > 0 && self.score == self.high_score
    }

    /// Zeroes the score for a new session. The high score stays.
    pub fn reset(&mut self) {
        self.score = 0;
    }

    /// Forgets the stored best, including any points from the current game.
    pub fn clear_high_score(&mut self) {
        self.high_score = 0;
    }
}
