//! Data-driven game balance
//!
//! Every number the simulation uses to score clicks, schedule the bonus orb and
//! size particle bursts lives here, so a balance pass never touches sim code.
//! Missing JSON fields fall back to the shipped defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Clickable radius of the planet
    pub planet_radius: f32,
    /// Clickable radius of the bonus orb (also its inset from the play-area edges)
    pub event_radius: f32,
    /// Seconds of play between bonus orb activations
    pub event_interval_secs: f64,
    /// Seconds the orb stays clickable
    pub event_duration_secs: f32,
    /// Orb reward = factor * click_power * click_multiplier
    pub event_reward_factor: f64,
    /// Particles released when the orb is captured
    pub event_burst_count: usize,
    /// Orb capture particle size and lifetime (seconds)
    pub event_burst_size: f32,
    pub event_burst_lifetime: f32,

    /// Burst particles per planet click, before Particle Boost
    pub burst_base_count: usize,
    /// Extra burst particles per Particle Boost owned
    pub burst_per_boost: usize,

    /// Click Multiplier upgrade factor
    pub multiplier_step: f64,
    /// Critical Chance upgrade increment (percent)
    pub crit_chance_step: u32,
    /// Crit power before and after the Critical Power upgrade
    pub base_crit_power: f64,
    pub upgraded_crit_power: f64,

    /// Lucky Strike roll (percent) and click factor
    pub lucky_chance: u32,
    pub lucky_factor: f64,

    /// Auto-clicker rate bonus per Time Warp owned
    pub time_warp_bonus: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            planet_radius: PLANET_RADIUS,
            event_radius: EVENT_RADIUS,
            event_interval_secs: EVENT_INTERVAL_SECS,
            event_duration_secs: EVENT_DURATION_SECS,
            event_reward_factor: 100.0,
            event_burst_count: 30,
            event_burst_size: 5.0,
            event_burst_lifetime: 1.0,

            burst_base_count: 10,
            burst_per_boost: 5,

            multiplier_step: 1.5,
            crit_chance_step: 5,
            base_crit_power: 2.0,
            upgraded_crit_power: 3.0,

            lucky_chance: 10,
            lucky_factor: 5.0,

            time_warp_bonus: 0.2,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
