//! Per-frame tick
//!
//! One tick drains the frame's input events in arrival order, then advances
//! time once. The caller renders from a snapshot afterwards. Nothing inside a
//! tick blocks or yields.

use super::outcome::{Outcome, Rejection};
use super::session::{Advance, GameSession};
use crate::input::InputEvent;

/// Input events collected since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

/// Everything that happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// One result per input event, same order
    pub results: Vec<Result<Outcome, Rejection>>,
    pub advance: Advance,
}

impl TickReport {
    /// The shell should stop its loop
    pub fn quit(&self) -> bool {
        self.results.iter().any(|r| matches!(r, Ok(Outcome::Quit)))
    }

    /// The shell should toggle fullscreen
    pub fn fullscreen_requested(&self) -> bool {
        self.results
            .iter()
            .filter(|r| matches!(r, Ok(Outcome::FullscreenToggled)))
            .count()
            % 2
            == 1
    }
}

/// Advance the session by one frame
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) -> TickReport {
    let results = input.events.iter().map(|event| session.handle(event)).collect();
    let advance = session.advance(dt);
    TickReport { results, advance }
}
