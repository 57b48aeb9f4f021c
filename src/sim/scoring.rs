//! Click scoring and passive auto-clicker income
//!
//! Hit-testing happens in the session; by the time these run the click is
//! known to have landed on its target.

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use super::progress::PlayerProgress;
use super::upgrades::{UpgradeKind, Upgrades};
use crate::tuning::Tuning;

/// Something that can be clicked for score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClickTarget {
    Planet,
    SpecialEvent,
}

/// Score awarded by a single click
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClickOutcome {
    pub target: ClickTarget,
    /// Pointer position
    pub pos: Vec2,
    /// Score added
    pub value: f64,
    pub critical: bool,
    pub lucky: bool,
}

/// Uniform roll in `[1, 100]` against a percent chance
#[inline]
fn roll_percent<R: Rng>(rng: &mut R, chance: u32) -> bool {
    rng.random_range(1..=100u32) <= chance
}

/// Score a planet click and add it to the player's score.
///
/// The crit roll always happens; the lucky roll only once a Lucky Strike is
/// owned. Both multipliers can land on the same click.
pub fn register_planet_click<R: Rng>(
    progress: &mut PlayerProgress,
    upgrades: &Upgrades,
    tuning: &Tuning,
    pos: Vec2,
    rng: &mut R,
) -> ClickOutcome {
    let mut value = progress.base_click_value();

    let critical = roll_percent(rng, progress.crit_chance);
    if critical {
        value *= progress.crit_power;
    }

    let lucky = upgrades.owned(UpgradeKind::LuckyStrike) > 0 && roll_percent(rng, tuning.lucky_chance);
    if lucky {
        value *= tuning.lucky_factor;
    }

    if critical || lucky {
        log::debug!("Planet click: {value} (crit={critical}, lucky={lucky})");
    }

    progress.earn(value);

    ClickOutcome {
        target: ClickTarget::Planet,
        pos,
        value,
        critical,
        lucky,
    }
}

/// Award the flat bonus-orb reward. No crit or lucky rolls apply.
pub fn register_event_click(progress: &mut PlayerProgress, tuning: &Tuning, pos: Vec2) -> ClickOutcome {
    let value = tuning.event_reward_factor * progress.base_click_value();
    progress.earn(value);

    ClickOutcome {
        target: ClickTarget::SpecialEvent,
        pos,
        value,
        critical: false,
        lucky: false,
    }
}

/// Burst particles released by one planet click
pub fn burst_count(upgrades: &Upgrades, tuning: &Tuning) -> usize {
    let boosts = upgrades.owned(UpgradeKind::ParticleBoost) as usize;
    tuning.burst_base_count + tuning.burst_per_boost * boosts
}

/// Auto-clicker rate multiplier from Time Warp
pub fn time_warp_factor(upgrades: &Upgrades, tuning: &Tuning) -> f64 {
    1.0 + tuning.time_warp_bonus * upgrades.owned(UpgradeKind::TimeWarp) as f64
}

/// Auto-clicker income per second at the current stats
pub fn income_per_second(progress: &PlayerProgress, upgrades: &Upgrades, tuning: &Tuning) -> f64 {
    progress.auto_clickers as f64 * progress.click_multiplier * time_warp_factor(upgrades, tuning)
}

/// Accrue `dt` seconds of auto-clicker income. Returns the amount added.
pub fn accrue(progress: &mut PlayerProgress, upgrades: &Upgrades, tuning: &Tuning, dt: f64) -> f64 {
    if progress.auto_clickers == 0 || dt <= 0.0 {
        return 0.0;
    }
    let gained = income_per_second(progress, upgrades, tuning) * dt;
    progress.earn(gained);
    gained
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rich() -> (PlayerProgress, Upgrades) {
        let mut progress = PlayerProgress::new(&Tuning::default());
        progress.earn(1e12);
        (progress, Upgrades::default())
    }

    #[test]
    fn test_plain_click_is_exact() {
        let tuning = Tuning::default();
        let mut progress = PlayerProgress::new(&tuning);
        let upgrades = Upgrades::default();
        let mut rng = Pcg32::seed_from_u64(7);

        for _ in 0..200 {
            let before = progress.score();
            let click = register_planet_click(&mut progress, &upgrades, &tuning, Vec2::ZERO, &mut rng);
            assert!(!click.critical && !click.lucky);
            assert_eq!(progress.score() - before, 1.0);
        }
    }

    #[test]
    fn test_guaranteed_crit_and_lucky_stack() {
        let tuning = Tuning {
            lucky_chance: 100,
            ..Tuning::default()
        };
        let (mut progress, mut upgrades) = rich();
        upgrades.purchase(UpgradeKind::LuckyStrike, &mut progress, &tuning).unwrap();
        progress.crit_chance = 100;
        progress.click_power = 3;
        let mut rng = Pcg32::seed_from_u64(1);

        let click = register_planet_click(&mut progress, &upgrades, &tuning, Vec2::ZERO, &mut rng);
        assert!(click.critical);
        assert!(click.lucky);
        assert_eq!(click.value, 3.0 * 2.0 * 5.0);
    }

    #[test]
    fn test_lucky_needs_ownership() {
        let tuning = Tuning {
            lucky_chance: 100,
            ..Tuning::default()
        };
        let mut progress = PlayerProgress::new(&tuning);
        let upgrades = Upgrades::default();
        let mut rng = Pcg32::seed_from_u64(3);

        let click = register_planet_click(&mut progress, &upgrades, &tuning, Vec2::ZERO, &mut rng);
        assert!(!click.lucky);
        assert_eq!(click.value, 1.0);
    }

    #[test]
    fn test_crit_rate_roughly_matches_chance() {
        let tuning = Tuning::default();
        let mut progress = PlayerProgress::new(&tuning);
        progress.crit_chance = 25;
        let upgrades = Upgrades::default();
        let mut rng = Pcg32::seed_from_u64(42);

        let crits = (0..10_000)
            .filter(|_| register_planet_click(&mut progress, &upgrades, &tuning, Vec2::ZERO, &mut rng).critical)
            .count();
        assert!((2_000..3_000).contains(&crits), "crits: {crits}");
    }

    #[test]
    fn test_event_click_is_flat() {
        let tuning = Tuning::default();
        let mut progress = PlayerProgress::new(&tuning);
        progress.click_power = 2;
        progress.click_multiplier = 1.5;
        progress.crit_chance = 100;

        let click = register_event_click(&mut progress, &tuning, Vec2::new(10.0, 10.0));
        assert_eq!(click.target, ClickTarget::SpecialEvent);
        assert_eq!(click.value, 300.0);
        assert_eq!(progress.score(), 300.0);
    }

    #[test]
    fn test_accrue_with_time_warp() {
        let tuning = Tuning::default();
        let (mut progress, mut upgrades) = rich();
        upgrades.purchase(UpgradeKind::TimeWarp, &mut progress, &tuning).unwrap();
        progress.auto_clickers = 2;
        progress.click_multiplier = 1.5;

        let before = progress.score();
        let gained = accrue(&mut progress, &upgrades, &tuning, 0.5);
        assert!((gained - 2.0 * 0.5 * 1.5 * 1.2).abs() < 1e-9);
        assert!((progress.score() - before - gained).abs() < 1e-3);
    }

    #[test]
    fn test_accrue_without_auto_clickers() {
        let tuning = Tuning::default();
        let mut progress = PlayerProgress::new(&tuning);
        assert_eq!(accrue(&mut progress, &Upgrades::default(), &tuning, 10.0), 0.0);
        assert_eq!(progress.score(), 0.0);
    }

    #[test]
    fn test_burst_count_scales_with_boost() {
        let tuning = Tuning::default();
        let (mut progress, mut upgrades) = rich();
        assert_eq!(burst_count(&upgrades, &tuning), 10);
        upgrades.purchase(UpgradeKind::ParticleBoost, &mut progress, &tuning).unwrap();
        upgrades.purchase(UpgradeKind::ParticleBoost, &mut progress, &tuning).unwrap();
        assert_eq!(burst_count(&upgrades, &tuning), 20);
    }
}
