//! Upgrade catalog and purchase economy
//!
//! Every upgrade's price follows `round(base_cost * growth ^ owned)`. Buying
//! one deducts the current price, bumps the owned count, reprices it and then
//! applies the upgrade's effect exactly once.

use serde::Serialize;

use super::outcome::Rejection;
use super::progress::PlayerProgress;
use crate::tuning::Tuning;

/// Number of upgrades in the catalog
pub const UPGRADE_COUNT: usize = 8;

/// What an upgrade does when bought
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum UpgradeKind {
    AutoClicker,
    ClickPower,
    ClickMultiplier,
    CritChance,
    CritPower,
    ParticleBoost,
    TimeWarp,
    LuckyStrike,
}

impl UpgradeKind {
    /// Catalog order (also button order)
    pub const ALL: [UpgradeKind; UPGRADE_COUNT] = [
        UpgradeKind::AutoClicker,
        UpgradeKind::ClickPower,
        UpgradeKind::ClickMultiplier,
        UpgradeKind::CritChance,
        UpgradeKind::CritPower,
        UpgradeKind::ParticleBoost,
        UpgradeKind::TimeWarp,
        UpgradeKind::LuckyStrike,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn definition(self) -> &'static UpgradeDef {
        &CATALOG[self.index()]
    }
}

/// Immutable catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UpgradeDef {
    pub kind: UpgradeKind,
    pub name: &'static str,
    pub base_cost: u64,
    /// Price multiplier per copy owned
    pub growth: f64,
    pub description: &'static str,
}

impl UpgradeDef {
    /// Price of the next copy when `owned` copies are already held
    pub fn cost_at(&self, owned: u32) -> u64 {
        let owned = i32::try_from(owned).unwrap_or(i32::MAX);
        // Float-to-int casts saturate, so runaway prices pin at u64::MAX
        (self.base_cost as f64 * self.growth.powi(owned)).round() as u64
    }
}

pub const CATALOG: [UpgradeDef; UPGRADE_COUNT] = [
    UpgradeDef {
        kind: UpgradeKind::AutoClicker,
        name: "Auto-Clicker",
        base_cost: 15,
        growth: 1.5,
        description: "Generates 1 click per second",
    },
    UpgradeDef {
        kind: UpgradeKind::ClickPower,
        name: "Click Power",
        base_cost: 50,
        growth: 1.8,
        description: "+1 base click power",
    },
    UpgradeDef {
        kind: UpgradeKind::ClickMultiplier,
        name: "Click Multiplier",
        base_cost: 100,
        growth: 2.0,
        description: "Multiply all clicks by 1.5x",
    },
    UpgradeDef {
        kind: UpgradeKind::CritChance,
        name: "Critical Chance",
        base_cost: 75,
        growth: 1.7,
        description: "+5% chance for critical hits",
    },
    UpgradeDef {
        kind: UpgradeKind::CritPower,
        name: "Critical Power",
        base_cost: 150,
        growth: 2.2,
        description: "Critical hits do 3x damage",
    },
    UpgradeDef {
        kind: UpgradeKind::ParticleBoost,
        name: "Particle Boost",
        base_cost: 200,
        growth: 1.9,
        description: "More particles per click",
    },
    UpgradeDef {
        kind: UpgradeKind::TimeWarp,
        name: "Time Warp",
        base_cost: 300,
        growth: 2.5,
        description: "Auto-clickers work 20% faster",
    },
    UpgradeDef {
        kind: UpgradeKind::LuckyStrike,
        name: "Lucky Strikes",
        base_cost: 250,
        growth: 2.0,
        description: "10% chance for 5x clicks",
    },
];

/// Mutable per-upgrade state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpgradeState {
    owned: u32,
    cost: u64,
}

impl UpgradeState {
    fn fresh(def: &UpgradeDef) -> Self {
        Self {
            owned: 0,
            cost: def.cost_at(0),
        }
    }

    pub fn owned(&self) -> u32 {
        self.owned
    }

    /// Price of the next copy
    pub fn cost(&self) -> u64 {
        self.cost
    }
}

/// A completed purchase
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Purchase {
    pub kind: UpgradeKind,
    /// Score deducted
    pub price: u64,
    /// Copies owned after the purchase
    pub owned: u32,
    pub next_cost: u64,
}

/// Owned counts and prices for the whole catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Upgrades {
    states: [UpgradeState; UPGRADE_COUNT],
}

impl Default for Upgrades {
    fn default() -> Self {
        Self {
            states: CATALOG.map(|def| UpgradeState::fresh(&def)),
        }
    }
}

impl Upgrades {
    pub fn state(&self, kind: UpgradeKind) -> UpgradeState {
        self.states[kind.index()]
    }

    pub fn owned(&self, kind: UpgradeKind) -> u32 {
        self.states[kind.index()].owned
    }

    pub fn cost(&self, kind: UpgradeKind) -> u64 {
        self.states[kind.index()].cost
    }

    /// Catalog entries paired with their current state, in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&'static UpgradeDef, UpgradeState)> + '_ {
        CATALOG.iter().zip(self.states.iter().copied())
    }

    /// Back to zero owned at base prices
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Buy one copy of `kind`, paying from `progress`.
    ///
    /// Fails without touching any state when the score cannot cover the price.
    pub fn purchase(
        &mut self,
        kind: UpgradeKind,
        progress: &mut PlayerProgress,
        tuning: &Tuning,
    ) -> Result<Purchase, Rejection> {
        let def = kind.definition();
        let state = &mut self.states[kind.index()];
        let price = state.cost;

        if progress.score() < price as f64 {
            return Err(Rejection::InsufficientFunds {
                cost: price,
                score: progress.score(),
            });
        }

        progress.spend(price);
        state.owned = state.owned.saturating_add(1);
        state.cost = def.cost_at(state.owned);

        apply_effect(kind, progress, tuning);

        log::info!(
            "Bought {} #{} for {} (next {})",
            def.name,
            state.owned,
            price,
            state.cost
        );

        Ok(Purchase {
            kind,
            price,
            owned: state.owned,
            next_cost: state.cost,
        })
    }
}

/// Apply one copy's effect. Particle Boost, Time Warp and Lucky Strike are read
/// from the owned counts by the scoring engine instead.
fn apply_effect(kind: UpgradeKind, progress: &mut PlayerProgress, tuning: &Tuning) {
    match kind {
        UpgradeKind::AutoClicker => progress.auto_clickers += 1,
        UpgradeKind::ClickPower => progress.click_power += 1,
        UpgradeKind::ClickMultiplier => progress.click_multiplier *= tuning.multiplier_step,
        // No cap: crit chance may pass 100%
        UpgradeKind::CritChance => progress.crit_chance += tuning.crit_chance_step,
        // Sets rather than stacks; later copies only raise the price
        UpgradeKind::CritPower => progress.crit_power = tuning.upgraded_crit_power,
        UpgradeKind::ParticleBoost | UpgradeKind::TimeWarp | UpgradeKind::LuckyStrike => {}
    }
}
