//! Game session: mode state machine and the single owner of all game state
//!
//! ```text
//!   Menu --start--> Playing <--toggle-pause--> Paused --return-to-menu--> Menu
//!   Menu / Paused --quit--> terminated        (window close: from anywhere)
//! ```
//!
//! Only Playing advances time. Paused keeps every piece of state frozen so it
//! can still be drawn behind the pause overlay.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::effects::{EffectKind, EffectPools, Spawn};
use super::event::{EventTransition, SpecialEvent};
use super::outcome::{Outcome, Rejection};
use super::progress::PlayerProgress;
use super::scoring;
use super::upgrades::{UpgradeKind, Upgrades};
use crate::colors::SPECIAL_ORB;
use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::input::{InputEvent, Key};
use crate::layout::{Layout, MenuButton, PauseButton};
use crate::settings::Settings;
use crate::snapshot::Snapshot;
use crate::tuning::Tuning;

/// Top-level mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameMode {
    Menu,
    Playing,
    Paused,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Menu => "in the menu",
            GameMode::Playing => "playing",
            GameMode::Paused => "paused",
        }
    }
}

/// What one call to [`GameSession::advance`] changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Advance {
    /// Auto-clicker income added this step
    pub accrued: f64,
    pub event: Option<EventTransition>,
}

/// Complete game state for one process run
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: GameMode,
    running: bool,
    progress: PlayerProgress,
    upgrades: Upgrades,
    event: SpecialEvent,
    effects: EffectPools,
    layout: Layout,
    tuning: Tuning,
    settings: Settings,
    seed: u64,
    rng: Pcg32,
}

impl GameSession {
    /// New session in the menu, laid out for the default play area
    pub fn new(seed: u64, tuning: Tuning, settings: Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let viewport = Vec2::new(DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let effects = EffectPools::new(&settings, viewport, &mut rng);

        Self {
            mode: GameMode::Menu,
            running: true,
            progress: PlayerProgress::new(&tuning),
            upgrades: Upgrades::default(),
            event: SpecialEvent::default(),
            effects,
            layout: Layout::new(viewport, tuning.planet_radius),
            tuning,
            settings,
            seed,
            rng,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// False once the player has quit
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn progress(&self) -> &PlayerProgress {
        &self.progress
    }

    pub fn upgrades(&self) -> &Upgrades {
        &self.upgrades
    }

    pub fn event(&self) -> &SpecialEvent {
        &self.event
    }

    pub fn effects(&self) -> &EffectPools {
        &self.effects
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn viewport(&self) -> Vec2 {
        self.layout.viewport
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::of(self)
    }

    fn ensure_running(&self) -> Result<(), Rejection> {
        if self.running {
            Ok(())
        } else {
            Err(Rejection::Terminated)
        }
    }

    fn require(&self, mode: GameMode) -> Result<(), Rejection> {
        self.ensure_running()?;
        if self.mode == mode {
            Ok(())
        } else {
            Err(Rejection::WrongMode { mode: self.mode })
        }
    }

    fn reject<T>(&self, rejection: Rejection) -> Result<T, Rejection> {
        log::debug!("Rejected: {rejection}");
        Err(rejection)
    }

    /// Menu -> Playing with everything reset to a fresh game
    pub fn start(&mut self) -> Result<Outcome, Rejection> {
        if let Err(e) = self.require(GameMode::Menu) {
            return self.reject(e);
        }

        self.progress = PlayerProgress::new(&self.tuning);
        self.upgrades.reset();
        self.event.reset();
        self.effects.clear();
        self.mode = GameMode::Playing;

        log::info!("New game started");
        Ok(Outcome::Started)
    }

    /// Playing <-> Paused
    pub fn toggle_pause(&mut self) -> Result<Outcome, Rejection> {
        if let Err(e) = self.ensure_running() {
            return self.reject(e);
        }
        match self.mode {
            GameMode::Playing => {
                self.mode = GameMode::Paused;
                log::info!("Paused at {:.1}s", self.progress.time_played);
                Ok(Outcome::Paused)
            }
            GameMode::Paused => {
                self.mode = GameMode::Playing;
                log::info!("Resumed");
                Ok(Outcome::Resumed)
            }
            GameMode::Menu => self.reject(Rejection::WrongMode { mode: self.mode }),
        }
    }

    /// Paused -> Menu; the running game is abandoned
    pub fn return_to_menu(&mut self) -> Result<Outcome, Rejection> {
        if let Err(e) = self.require(GameMode::Paused) {
            return self.reject(e);
        }
        self.mode = GameMode::Menu;
        log::info!("Returned to menu (score {:.0} abandoned)", self.progress.score);
        Ok(Outcome::ReturnedToMenu)
    }

    /// Explicit quit, offered from the menu and the pause overlay
    pub fn quit(&mut self) -> Result<Outcome, Rejection> {
        if let Err(e) = self.ensure_running() {
            return self.reject(e);
        }
        if self.mode == GameMode::Playing {
            return self.reject(Rejection::WrongMode { mode: self.mode });
        }
        Ok(self.terminate())
    }

    /// Window closed: stop regardless of mode
    pub fn terminate(&mut self) -> Outcome {
        if self.running {
            self.running = false;
            log::info!("Session terminated");
        }
        Outcome::Quit
    }

    /// Buy one copy of an upgrade
    pub fn purchase(&mut self, kind: UpgradeKind) -> Result<Outcome, Rejection> {
        if let Err(e) = self.require(GameMode::Playing) {
            return self.reject(e);
        }
        match self.upgrades.purchase(kind, &mut self.progress, &self.tuning) {
            Ok(purchase) => Ok(Outcome::Purchased(purchase)),
            Err(e) => self.reject(e),
        }
    }

    /// Resolve a click in the playing field: planet, then bonus orb, then shop
    pub fn click(&mut self, pos: Vec2) -> Result<Outcome, Rejection> {
        if let Err(e) = self.require(GameMode::Playing) {
            return self.reject(e);
        }

        if self.layout.planet.contains(pos) {
            let click = scoring::register_planet_click(
                &mut self.progress,
                &self.upgrades,
                &self.tuning,
                pos,
                &mut self.rng,
            );
            let count = scoring::burst_count(&self.upgrades, &self.tuning);
            let center = self.layout.planet.center;
            self.effects
                .spawn_many(EffectKind::Burst, center, count, Spawn::default(), &mut self.rng);
            self.effects
                .spawn(EffectKind::Ambient, pos, Spawn::default(), &mut self.rng);
            return Ok(Outcome::Clicked(click));
        }

        if self.event.contains(pos, self.tuning.event_radius) {
            let click = scoring::register_event_click(&mut self.progress, &self.tuning, pos);
            if let Some(orb) = self.event.consume() {
                let spawn = Spawn::default()
                    .with_color(SPECIAL_ORB)
                    .with_size(self.tuning.event_burst_size)
                    .with_lifetime(self.tuning.event_burst_lifetime);
                self.effects.spawn_many(
                    EffectKind::Burst,
                    orb,
                    self.tuning.event_burst_count,
                    spawn,
                    &mut self.rng,
                );
            }
            log::info!("Bonus orb worth {:.0}", click.value);
            return Ok(Outcome::Clicked(click));
        }

        if let Some(kind) = self.layout.hit_upgrade(pos) {
            return self.purchase(kind);
        }

        self.reject(Rejection::Miss)
    }

    /// Route a pointer press according to the current mode
    pub fn pointer_down(&mut self, pos: Vec2) -> Result<Outcome, Rejection> {
        if let Err(e) = self.ensure_running() {
            return self.reject(e);
        }
        match self.mode {
            GameMode::Menu => match self.layout.hit_menu(pos) {
                Some(MenuButton::Start) => self.start(),
                Some(MenuButton::Quit) => self.quit(),
                None => self.reject(Rejection::Miss),
            },
            GameMode::Playing => self.click(pos),
            GameMode::Paused => match self.layout.hit_pause(pos) {
                Some(PauseButton::Resume) => self.toggle_pause(),
                Some(PauseButton::MainMenu) => self.return_to_menu(),
                None => self.reject(Rejection::Miss),
            },
        }
    }

    pub fn key_press(&mut self, key: Key) -> Result<Outcome, Rejection> {
        if let Err(e) = self.ensure_running() {
            return self.reject(e);
        }
        match key {
            Key::Pause => self.toggle_pause(),
            Key::Escape if self.mode == GameMode::Menu => self.quit(),
            Key::Escape => self.toggle_pause(),
            Key::Fullscreen => Ok(Outcome::FullscreenToggled),
            Key::Other => Ok(Outcome::Ignored),
        }
    }

    /// Re-layout for a new play-area size
    pub fn resize(&mut self, width: f32, height: f32) -> Result<Outcome, Rejection> {
        if let Err(e) = self.ensure_running() {
            return self.reject(e);
        }
        let viewport = Vec2::new(width.max(0.0), height.max(0.0));
        self.layout = Layout::new(viewport, self.tuning.planet_radius);
        log::debug!("Viewport resized to {}x{}", viewport.x, viewport.y);
        Ok(Outcome::Resized { viewport })
    }

    /// Apply one input event
    pub fn handle(&mut self, event: &InputEvent) -> Result<Outcome, Rejection> {
        match *event {
            InputEvent::PointerDown(pos) => self.pointer_down(pos),
            InputEvent::KeyPress(key) => self.key_press(key),
            InputEvent::Resize { width, height } => self.resize(width, height),
            InputEvent::Quit => Ok(self.terminate()),
        }
    }

    /// Advance game time by `dt` seconds. Does nothing outside Playing.
    pub fn advance(&mut self, dt: f32) -> Advance {
        if !self.running || self.mode != GameMode::Playing {
            return Advance::default();
        }
        let dt = dt.max(0.0);

        self.progress.advance_clock(dt as f64);
        let accrued = scoring::accrue(&mut self.progress, &self.upgrades, &self.tuning, dt as f64);
        let event = self.event.advance(
            self.progress.time_played,
            dt,
            self.layout.viewport,
            &self.tuning,
            &mut self.rng,
        );
        self.effects.advance(dt, self.layout.viewport, &mut self.rng);

        Advance { accrued, event }
    }
}
