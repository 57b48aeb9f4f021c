//! Visual effect pools: click particles, planet bursts and the starfield
//!
//! Purely cosmetic. Nothing here feeds back into score or progression, and no
//! other module mutates these entities. Units are seconds and pixels per
//! second; the default ranges are per-frame values converted at 60 Hz.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use crate::colors::{PARTICLE_PALETTE, WHITE};
use crate::consts::FRAME_RATE;
use crate::settings::Settings;
use crate::Color;

/// Which pool a particle lives in (and how its defaults are rolled)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EffectKind {
    /// Slow random drift at the pointer
    Ambient,
    /// Radial spray from a point
    Burst,
}

/// Optional overrides for a spawn; unset fields are randomized
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spawn {
    pub color: Option<Color>,
    pub size: Option<f32>,
    /// Seconds
    pub lifetime: Option<f32>,
}

impl Spawn {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_lifetime(mut self, lifetime: f32) -> Self {
        self.lifetime = Some(lifetime);
        self
    }
}

/// A particle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Effect {
    pos: Vec2,
    vel: Vec2,
    color: Color,
    size: f32,
    /// Seconds until reaped; drives render opacity
    remaining: f32,
}

impl Effect {
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

/// A background star falling down the screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    /// Pixels per second
    pub speed: f32,
}

/// Lifetime in seconds from a 20-40 frame range
fn default_lifetime<R: Rng>(rng: &mut R) -> f32 {
    rng.random_range(20..=40u32) as f32 / FRAME_RATE
}

fn roll_star<R: Rng>(viewport: Vec2, rng: &mut R) -> Star {
    Star {
        pos: Vec2::new(
            rng.random_range(0.0..=viewport.x.max(0.0)),
            rng.random_range(0.0..=viewport.y.max(0.0)),
        ),
        size: rng.random_range(1..=3u32) as f32,
        speed: rng.random_range(0.5..2.0f32) * FRAME_RATE,
    }
}

/// Owner of every cosmetic entity
#[derive(Debug, Clone, Serialize)]
pub struct EffectPools {
    ambient: Vec<Effect>,
    bursts: Vec<Effect>,
    stars: Vec<Star>,
    /// Per-pool cap from settings
    capacity: usize,
}

impl EffectPools {
    pub fn new<R: Rng>(settings: &Settings, viewport: Vec2, rng: &mut R) -> Self {
        let stars = (0..settings.star_count())
            .map(|_| roll_star(viewport, rng))
            .collect();
        Self {
            ambient: Vec::new(),
            bursts: Vec::new(),
            stars,
            capacity: settings.max_particles(),
        }
    }

    pub fn ambient(&self) -> &[Effect] {
        &self.ambient
    }

    pub fn bursts(&self) -> &[Effect] {
        &self.bursts
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn pool(&self, kind: EffectKind) -> &[Effect] {
        match kind {
            EffectKind::Ambient => &self.ambient,
            EffectKind::Burst => &self.bursts,
        }
    }

    /// Live particles across both pools
    pub fn len(&self) -> usize {
        self.ambient.len() + self.bursts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every particle. Stars are scenery and stay.
    pub fn clear(&mut self) {
        self.ambient.clear();
        self.bursts.clear();
    }

    /// Add one particle. Returns false when its pool is full.
    pub fn spawn<R: Rng>(&mut self, kind: EffectKind, pos: Vec2, spawn: Spawn, rng: &mut R) -> bool {
        let capacity = self.capacity;
        let pool = match kind {
            EffectKind::Ambient => &mut self.ambient,
            EffectKind::Burst => &mut self.bursts,
        };
        if pool.len() >= capacity {
            log::trace!("{kind:?} pool full ({capacity}), dropping particle");
            return false;
        }

        let effect = match kind {
            EffectKind::Ambient => Effect {
                pos,
                vel: Vec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0)) * FRAME_RATE,
                color: spawn
                    .color
                    .unwrap_or_else(|| *PARTICLE_PALETTE.choose(rng).unwrap_or(&WHITE)),
                size: spawn.size.unwrap_or_else(|| rng.random_range(2..=5u32) as f32),
                remaining: spawn.lifetime.unwrap_or_else(|| default_lifetime(rng)),
            },
            EffectKind::Burst => {
                let angle = rng.random_range(0.0..TAU);
                let speed = rng.random_range(1.0..3.0f32) * FRAME_RATE;
                Effect {
                    pos,
                    vel: Vec2::from_angle(angle) * speed,
                    color: spawn.color.unwrap_or_else(|| {
                        [
                            rng.random_range(100..=200),
                            rng.random_range(100..=200),
                            rng.random_range(200..=255),
                        ]
                    }),
                    size: spawn.size.unwrap_or_else(|| rng.random_range(2..=4u32) as f32),
                    remaining: spawn.lifetime.unwrap_or_else(|| default_lifetime(rng)),
                }
            }
        };
        pool.push(effect);
        true
    }

    /// Spawn `count` particles with the same overrides. Returns how many fit.
    pub fn spawn_many<R: Rng>(
        &mut self,
        kind: EffectKind,
        pos: Vec2,
        count: usize,
        spawn: Spawn,
        rng: &mut R,
    ) -> usize {
        (0..count)
            .take_while(|_| self.spawn(kind, pos, spawn, rng))
            .count()
    }

    /// Move everything by `dt` seconds and reap expired particles
    pub fn advance<R: Rng>(&mut self, dt: f32, viewport: Vec2, rng: &mut R) {
        for pool in [&mut self.ambient, &mut self.bursts] {
            for effect in pool.iter_mut() {
                effect.pos += effect.vel * dt;
                effect.remaining -= dt;
            }
            pool.retain(|e| e.remaining > 0.0);
        }

        for star in &mut self.stars {
            star.pos.y += star.speed * dt;
            if star.pos.y > viewport.y {
                star.pos.y = 0.0;
                star.pos.x = rng.random_range(0.0..=viewport.x.max(0.0));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::QualityPreset;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    fn pools(rng: &mut Pcg32) -> EffectPools {
        EffectPools::new(&Settings::default(), VIEWPORT, rng)
    }

    #[test]
    fn test_defaults_stay_in_range() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut fx = pools(&mut rng);
        fx.spawn_many(EffectKind::Ambient, Vec2::ZERO, 100, Spawn::default(), &mut rng);
        fx.spawn_many(EffectKind::Burst, Vec2::ZERO, 100, Spawn::default(), &mut rng);

        for e in fx.ambient() {
            assert!((2.0..=5.0).contains(&e.size()));
            assert!(e.remaining() >= 20.0 / 60.0 && e.remaining() <= 40.0 / 60.0);
            assert!(e.vel().x.abs() <= 60.0 && e.vel().y.abs() <= 60.0);
            assert!(PARTICLE_PALETTE.contains(&e.color()));
        }
        for e in fx.bursts() {
            assert!((2.0..=4.0).contains(&e.size()));
            let speed = e.vel().length();
            assert!((59.9..=180.1).contains(&speed), "speed {speed}");
            assert!(e.color()[2] >= 200);
        }
    }

    #[test]
    fn test_overrides_win() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut fx = pools(&mut rng);
        let spawn = Spawn::default()
            .with_color([1, 2, 3])
            .with_size(9.0)
            .with_lifetime(2.0);
        assert!(fx.spawn(EffectKind::Burst, Vec2::new(5.0, 5.0), spawn, &mut rng));
        let e = &fx.bursts()[0];
        assert_eq!(e.color(), [1, 2, 3]);
        assert_eq!(e.size(), 9.0);
        assert_eq!(e.remaining(), 2.0);
        assert_eq!(e.pos(), Vec2::new(5.0, 5.0));
        assert!(fx.ambient().is_empty());
    }

    #[test]
    fn test_capacity_caps_each_pool() {
        let mut rng = Pcg32::seed_from_u64(3);
        let settings = Settings::from_preset(QualityPreset::Low);
        let mut fx = EffectPools::new(&settings, VIEWPORT, &mut rng);

        let spawned = fx.spawn_many(EffectKind::Ambient, Vec2::ZERO, 150, Spawn::default(), &mut rng);
        assert_eq!(spawned, 100);
        assert_eq!(fx.ambient().len(), 100);
        assert_eq!(fx.spawn_many(EffectKind::Burst, Vec2::ZERO, 10, Spawn::default(), &mut rng), 10);
    }

    #[test]
    fn test_disabled_particles_spawn_nothing() {
        let mut rng = Pcg32::seed_from_u64(4);
        let settings = Settings {
            particles: false,
            ..Settings::default()
        };
        let mut fx = EffectPools::new(&settings, VIEWPORT, &mut rng);
        assert!(!fx.spawn(EffectKind::Ambient, Vec2::ZERO, Spawn::default(), &mut rng));
        assert!(fx.is_empty());
    }

    #[test]
    fn test_clear_keeps_stars() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut fx = pools(&mut rng);
        fx.spawn_many(EffectKind::Burst, Vec2::ZERO, 5, Spawn::default(), &mut rng);
        fx.clear();
        assert!(fx.is_empty());
        assert_eq!(fx.stars().len(), 200);
    }

    #[test]
    fn test_stars_wrap_to_top() {
        let mut rng = Pcg32::seed_from_u64(6);
        let mut fx = pools(&mut rng);
        for _ in 0..600 {
            fx.advance(1.0 / 60.0, VIEWPORT, &mut rng);
            for star in fx.stars() {
                assert!(star.pos.y >= 0.0 && star.pos.y <= VIEWPORT.y);
                assert!(star.pos.x >= 0.0 && star.pos.x <= VIEWPORT.x);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_effect_lives_exactly_its_lifetime(ticks in 1u32..40, seed in any::<u64>()) {
            let dt = 0.25f32;
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut fx = pools(&mut rng);
            let spawn = Spawn::default().with_lifetime(ticks as f32 * dt);
            fx.spawn(EffectKind::Burst, Vec2::new(400.0, 300.0), spawn, &mut rng);

            for _ in 0..ticks - 1 {
                let before = fx.bursts()[0].clone();
                fx.advance(dt, VIEWPORT, &mut rng);
                prop_assert_eq!(fx.bursts().len(), 1);
                let after = &fx.bursts()[0];
                prop_assert_eq!(after.pos(), before.pos() + before.vel() * dt);
                prop_assert_eq!(after.remaining(), before.remaining() - dt);
            }

            fx.advance(dt, VIEWPORT, &mut rng);
            prop_assert!(fx.bursts().is_empty());
        }
    }
}
