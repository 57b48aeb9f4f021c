//! Player progress: score, click stats and play time

use serde::Serialize;

use crate::tuning::Tuning;

/// Everything the player has earned in the current game.
///
/// Owned by the session and reset on every new game. Fields are only written
/// by the economy and scoring code inside this crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerProgress {
    /// Never negative; fractional from auto-clicker accrual
    pub(crate) score: f64,
    /// Base value of a planet click (>= 1)
    pub(crate) click_power: u32,
    /// Applied to every click and to auto-clickers (>= 1)
    pub(crate) click_multiplier: f64,
    /// Percent; uncapped
    pub(crate) crit_chance: u32,
    pub(crate) crit_power: f64,
    pub(crate) auto_clickers: u32,
    /// Seconds spent in the Playing mode
    pub(crate) time_played: f64,
}

impl PlayerProgress {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            score: 0.0,
            click_power: 1,
            click_multiplier: 1.0,
            crit_chance: 0,
            crit_power: tuning.base_crit_power,
            auto_clickers: 0,
            time_played: 0.0,
        }
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn click_power(&self) -> u32 {
        self.click_power
    }

    pub fn click_multiplier(&self) -> f64 {
        self.click_multiplier
    }

    pub fn crit_chance(&self) -> u32 {
        self.crit_chance
    }

    pub fn crit_power(&self) -> f64 {
        self.crit_power
    }

    pub fn auto_clickers(&self) -> u32 {
        self.auto_clickers
    }

    pub fn time_played(&self) -> f64 {
        self.time_played
    }

    /// Click value before any crit/lucky roll
    #[inline]
    pub fn base_click_value(&self) -> f64 {
        self.click_power as f64 * self.click_multiplier
    }

    pub(crate) fn earn(&mut self, amount: f64) {
        if amount > 0.0 {
            self.score += amount;
        }
    }

    /// Deduct a price the caller already checked is affordable
    pub(crate) fn spend(&mut self, price: u64) {
        self.score = (self.score - price as f64).max(0.0);
    }

    pub(crate) fn advance_clock(&mut self, dt: f64) {
        self.time_played += dt.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let progress = PlayerProgress::new(&Tuning::default());
        assert_eq!(progress.score(), 0.0);
        assert_eq!(progress.click_power(), 1);
        assert_eq!(progress.click_multiplier(), 1.0);
        assert_eq!(progress.crit_chance(), 0);
        assert_eq!(progress.crit_power(), 2.0);
        assert_eq!(progress.base_click_value(), 1.0);
    }

    #[test]
    fn test_score_never_goes_negative() {
        let mut progress = PlayerProgress::new(&Tuning::default());
        progress.earn(10.0);
        progress.earn(-50.0);
        assert_eq!(progress.score(), 10.0);
        progress.spend(25);
        assert_eq!(progress.score(), 0.0);
    }
}
