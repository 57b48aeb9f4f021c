//! Normalized input events
//!
//! The windowing shell translates its native events into these before handing
//! them to the session. Pointer positions are in play-area pixels, origin at
//! the top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Keys the session reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// `P`: toggle pause while in a game
    Pause,
    /// `Esc`: pause/resume in a game, quit from the menu
    Escape,
    /// `F11`: ask the shell to toggle fullscreen
    Fullscreen,
    /// Anything unbound
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Primary button pressed at a play-area position
    PointerDown(Vec2),
    KeyPress(Key),
    /// Play area resized
    Resize { width: f32, height: f32 },
    /// Window closed
    Quit,
}
