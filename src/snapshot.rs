//! Render snapshot: everything a renderer needs to draw one frame
//!
//! Borrowed from the session after the tick's updates, so drawing can never
//! mutate game state.

use glam::Vec2;
use serde::Serialize;

use crate::Color;
use crate::colors::{GRAY, GREEN};
use crate::consts::FRAME_RATE;
use crate::layout::{Layout, Rect};
use crate::sim::effects::{Effect, Star};
use crate::sim::progress::PlayerProgress;
use crate::sim::session::{GameMode, GameSession};
use crate::sim::upgrades::UpgradeKind;

/// Particle alpha from its remaining lifetime (seconds)
#[inline]
pub fn opacity(remaining: f32) -> u8 {
    (remaining * FRAME_RATE * 6.0).clamp(0.0, 255.0) as u8
}

/// One shop button
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpgradeView {
    pub kind: UpgradeKind,
    pub name: &'static str,
    pub description: &'static str,
    pub owned: u32,
    pub cost: u64,
    /// Drawn highlighted when the score covers the cost
    pub affordable: bool,
    pub button: Rect,
}

impl UpgradeView {
    pub fn button_color(&self) -> Color {
        if self.affordable {
            GREEN
        } else {
            GRAY
        }
    }

    pub fn label_lines(&self) -> [String; 3] {
        [
            format!("{} ({})", self.name, self.cost),
            format!("Owned: {}", self.owned),
            self.description.to_string(),
        ]
    }
}

/// The bonus orb indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventView {
    pub active: bool,
    pub pos: Vec2,
    pub remaining: f32,
    pub seconds_left: u32,
    pub pulse_radius: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub mode: GameMode,
    pub layout: &'a Layout,
    pub progress: &'a PlayerProgress,
    pub upgrades: Vec<UpgradeView>,
    pub event: EventView,
    pub ambient: &'a [Effect],
    pub bursts: &'a [Effect],
    pub stars: &'a [Star],
}

impl<'a> Snapshot<'a> {
    pub fn of(session: &'a GameSession) -> Self {
        let progress = session.progress();
        let layout = session.layout();
        let tuning = session.tuning();
        let event = session.event();

        let upgrades = session
            .upgrades()
            .iter()
            .map(|(def, state)| UpgradeView {
                kind: def.kind,
                name: def.name,
                description: def.description,
                owned: state.owned(),
                cost: state.cost(),
                affordable: progress.score() >= state.cost() as f64,
                button: layout.upgrade_button(def.kind),
            })
            .collect();

        Self {
            mode: session.mode(),
            layout,
            progress,
            upgrades,
            event: EventView {
                active: event.is_active(),
                pos: event.pos(),
                remaining: event.remaining(),
                seconds_left: event.seconds_left(),
                pulse_radius: event.pulse_radius(progress.time_played(), tuning.event_radius),
            },
            ambient: session.effects().ambient(),
            bursts: session.effects().bursts(),
            stars: session.effects().stars(),
        }
    }

    /// Stat lines for the top-left HUD
    pub fn hud_lines(&self) -> Vec<String> {
        let p = self.progress;
        let secs = p.time_played().max(0.0) as u64;
        vec![
            format!("Score: {}", p.score().floor() as u64),
            format!("Click Power: {} x{:.1}", p.click_power(), p.click_multiplier()),
            format!("Crit: {}% (x{})", p.crit_chance(), p.crit_power()),
            format!("Auto-Clickers: {}", p.auto_clickers()),
            format!("Play Time: {}m {}s", secs / 60, secs % 60),
        ]
    }

    /// JSON form for renderers living outside the process (e.g. a browser canvas)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
