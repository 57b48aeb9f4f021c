//! Cosmic Clicker entry point
//!
//! Runs a headless scripted session on a fixed 60 Hz clock and logs how it
//! progresses. A windowed shell drives the same `tick` call with real input
//! and draws the snapshot instead.
//!
//! Usage: `cosmic-clicker [tuning.json]`
//! Environment: `COSMIC_CLICKER_SEED`, `COSMIC_CLICKER_QUALITY`, `RUST_LOG`

use std::time::{SystemTime, UNIX_EPOCH};

use cosmic_clicker::consts::SIM_DT;
use cosmic_clicker::sim::{GameMode, GameSession, TickInput, tick};
use cosmic_clicker::{InputEvent, Key, QualityPreset, Settings, Tuning};

/// Frames of play (a little over one bonus-orb interval)
const DEMO_FRAMES: u32 = 60 * 430;
/// The scripted player acts every this many frames
const ACT_EVERY: u32 = 6;
/// Pause window in the middle of the run
const PAUSE_AT: u32 = DEMO_FRAMES / 2;
const PAUSE_FRAMES: u32 = 120;
/// HUD log cadence
const LOG_EVERY: u32 = 60 * 30;

fn load_tuning() -> Tuning {
    let Some(path) = std::env::args().nth(1) else {
        return Tuning::default();
    };
    let json = match std::fs::read_to_string(&path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Cannot read tuning file {path}: {e}; using defaults");
            return Tuning::default();
        }
    };
    match Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {path}");
            tuning
        }
        Err(e) => {
            log::warn!("Invalid tuning file {path}: {e}; using defaults");
            Tuning::default()
        }
    }
}

fn load_settings() -> Settings {
    std::env::var("COSMIC_CLICKER_QUALITY")
        .ok()
        .and_then(|s| QualityPreset::from_str(&s))
        .map(Settings::from_preset)
        .unwrap_or_default()
}

fn pick_seed() -> u64 {
    std::env::var("COSMIC_CLICKER_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
}

/// The scripted player's input for `frame`, decided from the current state
fn scripted_input(session: &GameSession, frame: u32) -> TickInput {
    let mut input = TickInput::default();
    let layout = session.layout();

    match session.mode() {
        GameMode::Menu if frame > DEMO_FRAMES => {
            input.push(InputEvent::PointerDown(layout.quit_button.center()));
        }
        GameMode::Menu => {
            input.push(InputEvent::PointerDown(layout.start_button.center()));
        }
        GameMode::Paused if frame > DEMO_FRAMES => {
            input.push(InputEvent::PointerDown(layout.menu_button.center()));
        }
        GameMode::Paused => {
            if frame >= PAUSE_AT + PAUSE_FRAMES {
                input.push(InputEvent::PointerDown(layout.resume_button.center()));
            }
        }
        GameMode::Playing => {
            if frame >= DEMO_FRAMES || frame == PAUSE_AT {
                input.push(InputEvent::KeyPress(Key::Escape));
            } else if session.event().is_active() {
                input.push(InputEvent::PointerDown(session.event().pos()));
            } else if frame % ACT_EVERY == 0 {
                // Cheapest affordable upgrade first, otherwise keep clicking
                let score = session.progress().score();
                let target = session
                    .upgrades()
                    .iter()
                    .filter(|(_, state)| state.cost() as f64 <= score)
                    .min_by_key(|(_, state)| state.cost())
                    .map(|(def, _)| layout.upgrade_button(def.kind).center())
                    .unwrap_or(layout.planet.center);
                input.push(InputEvent::PointerDown(target));
            }
        }
    }
    input
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = pick_seed();
    let settings = load_settings();
    log::info!(
        "Cosmic Clicker (headless) starting, seed {seed}, quality {}",
        settings.quality.as_str()
    );

    let mut session = GameSession::new(seed, load_tuning(), settings);
    let mut frame = 0u32;

    while session.is_running() {
        let input = scripted_input(&session, frame);
        let report = tick(&mut session, &input, SIM_DT);

        for result in &report.results {
            if let Err(rejection) = result {
                log::debug!("frame {frame}: {rejection}");
            }
        }
        if report.fullscreen_requested() {
            log::info!("Fullscreen toggle requested (no window in headless mode)");
        }

        if frame % LOG_EVERY == 0 || report.quit() {
            let snapshot = session.snapshot();
            log::info!("{}", snapshot.hud_lines().join(" | "));
            if report.quit() {
                match snapshot.to_json() {
                    Ok(json) => log::debug!("Final snapshot: {json}"),
                    Err(e) => log::warn!("Snapshot serialization failed: {e}"),
                }
            }
        }

        frame += 1;
        if frame > DEMO_FRAMES + 60 && session.is_running() {
            log::warn!("Script did not reach the quit button, terminating");
            session.terminate();
        }
    }

    log::info!("Exited after {frame} frames");
}
