//! Bonus orb scheduler
//!
//! Inactive -> Active once `interval` seconds of play have passed since the
//! previous activation. Active -> Inactive when the countdown runs out (no
//! reward) or when the orb is clicked. Only advanced while Playing.

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use crate::inset_range;
use crate::tuning::Tuning;

/// State change produced by [`SpecialEvent::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum EventTransition {
    Activated { pos: Vec2 },
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecialEvent {
    active: bool,
    pos: Vec2,
    /// Seconds left to click; meaningful only while active
    remaining: f32,
    /// `time_played` at the most recent activation
    last_activation: f64,
}

impl Default for SpecialEvent {
    fn default() -> Self {
        Self {
            active: false,
            pos: Vec2::ZERO,
            remaining: 0.0,
            last_activation: 0.0,
        }
    }
}

impl SpecialEvent {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn last_activation(&self) -> f64 {
        self.last_activation
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Step the scheduler after `time_played` has already absorbed `dt`.
    ///
    /// The activating tick does not also count down.
    pub fn advance<R: Rng>(
        &mut self,
        time_played: f64,
        dt: f32,
        viewport: Vec2,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<EventTransition> {
        if !self.active {
            if time_played - self.last_activation < tuning.event_interval_secs {
                return None;
            }
            let (min_x, max_x) = inset_range(viewport.x, tuning.event_radius);
            let (min_y, max_y) = inset_range(viewport.y, tuning.event_radius);
            self.pos = Vec2::new(rng.random_range(min_x..=max_x), rng.random_range(min_y..=max_y));
            self.active = true;
            self.remaining = tuning.event_duration_secs;
            self.last_activation = time_played;
            log::info!(
                "Bonus orb appeared at ({:.0}, {:.0}) for {}s",
                self.pos.x,
                self.pos.y,
                self.remaining
            );
            return Some(EventTransition::Activated { pos: self.pos });
        }

        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.active = false;
            self.remaining = 0.0;
            log::info!("Bonus orb expired");
            return Some(EventTransition::Expired);
        }
        None
    }

    /// Whether an active orb of `radius` covers `point`
    pub fn contains(&self, point: Vec2, radius: f32) -> bool {
        self.active && self.pos.distance(point) <= radius
    }

    /// Deactivate after a successful click. Returns where the orb was.
    pub fn consume(&mut self) -> Option<Vec2> {
        if !self.active {
            return None;
        }
        self.active = false;
        self.remaining = 0.0;
        log::info!("Bonus orb captured");
        Some(self.pos)
    }

    /// Indicator radius, pulsing with play time
    pub fn pulse_radius(&self, time_played: f64, radius: f32) -> f32 {
        radius + 25.0 + 5.0 * (time_played * 5.0).sin() as f32
    }

    /// Whole seconds left, for the countdown label
    pub fn seconds_left(&self) -> u32 {
        self.remaining.max(0.0) as u32
    }
}
