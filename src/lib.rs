//! Cosmic Clicker - simulation and progression engine for a planet-clicking idle game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (economy, scoring, special events, effects, session)
//! - `layout`: Pure viewport layout and hit-testing
//! - `input`: Normalized input event stream consumed by the session
//! - `snapshot`: Read-only view of the session handed to the renderer
//! - `tuning`: Data-driven game balance
//! - `settings`: Visual quality preferences

pub mod input;
pub mod layout;
pub mod settings;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use input::{InputEvent, Key};
pub use layout::{Circle, Layout, Rect};
pub use settings::{QualityPreset, Settings};
pub use snapshot::Snapshot;
pub use tuning::Tuning;

/// RGB color triple
pub type Color = [u8; 3];

/// Game configuration constants
pub mod consts {
    /// Frame period of the reference driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Source particles were tuned per frame at this rate
    pub const FRAME_RATE: f32 = 60.0;

    /// Default play area
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;

    /// Clickable radii
    pub const PLANET_RADIUS: f32 = 50.0;
    pub const EVENT_RADIUS: f32 = 30.0;

    /// Special event cadence (7 minutes of play) and click window
    pub const EVENT_INTERVAL_SECS: f64 = 420.0;
    pub const EVENT_DURATION_SECS: f32 = 10.0;

    /// Background stars at the default quality preset
    pub const STAR_COUNT: usize = 200;
}

/// Palette shared by the simulation and any renderer
pub mod colors {
    use crate::Color;

    pub const WHITE: Color = [255, 255, 255];
    pub const BLUE: Color = [0, 100, 255];
    pub const GREEN: Color = [0, 255, 100];
    pub const RED: Color = [255, 50, 50];
    pub const YELLOW: Color = [255, 255, 0];
    pub const PURPLE: Color = [180, 0, 180];
    pub const ORANGE: Color = [255, 150, 0];
    pub const GRAY: Color = [100, 100, 100];
    pub const SPECIAL_ORB: Color = [255, 215, 0];

    /// Random pick list for ambient click particles
    pub const PARTICLE_PALETTE: [Color; 7] = [WHITE, BLUE, GREEN, RED, YELLOW, PURPLE, ORANGE];
}

/// Sampling bounds for a coordinate inset by `margin` from both ends of `[0, extent]`.
///
/// Collapses to the midpoint when the extent is too small to honor the inset.
#[inline]
pub fn inset_range(extent: f32, margin: f32) -> (f32, f32) {
    if extent < 2.0 * margin {
        let mid = extent.max(0.0) / 2.0;
        (mid, mid)
    } else {
        (margin, extent - margin)
    }
}
