//! Results of session actions
//!
//! Nothing in the game is fatal. Every action either reports what it did or
//! why it was turned down, so a rejected click is never mistaken for a
//! successful one.

use std::fmt;

use glam::Vec2;
use serde::Serialize;

use super::scoring::ClickOutcome;
use super::session::GameMode;
use super::upgrades::Purchase;

/// What an accepted action did
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Outcome {
    /// Menu -> Playing with fresh progress
    Started,
    /// Playing -> Paused
    Paused,
    /// Paused -> Playing
    Resumed,
    /// Paused -> Menu, the game is abandoned
    ReturnedToMenu,
    /// Session terminated
    Quit,
    /// A planet or bonus orb click landed
    Clicked(ClickOutcome),
    Purchased(Purchase),
    Resized { viewport: Vec2 },
    /// The shell should toggle fullscreen
    FullscreenToggled,
    /// Input with no binding in the current mode
    Ignored,
}

/// Why an action was turned down. No state changes when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Rejection {
    /// Score is below the upgrade's current price
    InsufficientFunds { cost: u64, score: f64 },
    /// Pointer landed on nothing clickable
    Miss,
    /// Action not available in this mode
    WrongMode { mode: GameMode },
    /// Session already quit
    Terminated,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::InsufficientFunds { cost, score } => {
                write!(f, "insufficient funds: need {cost}, have {}", score.floor())
            }
            Rejection::Miss => write!(f, "click missed every target"),
            Rejection::WrongMode { mode } => write!(f, "not available while {}", mode.as_str()),
            Rejection::Terminated => write!(f, "session has quit"),
        }
    }
}

impl std::error::Error for Rejection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() {
        let err = Rejection::InsufficientFunds {
            cost: 15,
            score: 14.7,
        };
        assert_eq!(err.to_string(), "insufficient funds: need 15, have 14");
        let err = Rejection::WrongMode {
            mode: GameMode::Paused,
        };
        assert_eq!(err.to_string(), "not available while paused");
    }
}
