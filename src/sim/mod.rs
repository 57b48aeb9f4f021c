//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied elapsed time only
//! - Seeded RNG only
//! - One owner (`GameSession`) for every piece of mutable state
//! - No rendering or platform dependencies

pub mod effects;
pub mod event;
pub mod outcome;
pub mod progress;
pub mod scoring;
pub mod session;
pub mod tick;
pub mod upgrades;

pub use effects::{Effect, EffectKind, EffectPools, Spawn, Star};
pub use event::{EventTransition, SpecialEvent};
pub use outcome::{Outcome, Rejection};
pub use progress::PlayerProgress;
pub use scoring::{ClickOutcome, ClickTarget};
pub use session::{Advance, GameMode, GameSession};
pub use tick::{TickInput, TickReport, tick};
pub use upgrades::{CATALOG, Purchase, UPGRADE_COUNT, UpgradeDef, UpgradeKind, UpgradeState, Upgrades};
