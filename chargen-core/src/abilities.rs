//! The six core abilities and the point budget used to build them.
//!
//! Every ability starts from a baseline of 5. A character gets 5 extra
//! points to spread around, so a freshly built set always sums to 35.
//! Raising an ability above its current value costs points from the pool;
//! lowering it refunds them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MIN_ABILITY_VALUE: u8 = 1;
pub const MAX_ABILITY_VALUE: u8 = 10;
pub const DEFAULT_ABILITY_VALUE: u8 = 5;
pub const ABILITY_POINT_BUDGET: u8 = 5;

/// Sum a validated ability set must reach at construction.
pub const REQUIRED_ABILITY_TOTAL: i32 =
    6 * DEFAULT_ABILITY_VALUE as i32 + ABILITY_POINT_BUDGET as i32;

/// Errors from building or changing abilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbilityError {
    #[error("ability {ability} value {value} must be in range [1, 10]")]
    OutOfRange { ability: Ability, value: i32 },

    #[error("total ability points ({total}) must equal 35 (6×5 base + 5 bonus points)")]
    BudgetMismatch { total: i32 },

    #[error("insufficient points in pool: need {needed}, have {available}")]
    InsufficientBudget { needed: i32, available: u8 },

    #[error("unknown ability: {0}")]
    UnknownAbility(String),
}

// ============================================================================
// Ability
// ============================================================================

/// The six abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ability {
    Strength,
    Luck,
    Charisma,
    Agility,
    Perception,
    Intelligence,
}

impl Ability {
    /// Lowercase name used on the wire and in messages.
    pub fn name(&self) -> &'static str {
        match self {
            Ability::Strength => "strength",
            Ability::Luck => "luck",
            Ability::Charisma => "charisma",
            Ability::Agility => "agility",
            Ability::Perception => "perception",
            Ability::Intelligence => "intelligence",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Luck => "Luck",
            Ability::Charisma => "Charisma",
            Ability::Agility => "Agility",
            Ability::Perception => "Perception",
            Ability::Intelligence => "Intelligence",
        }
    }

    pub fn all() -> [Ability; 6] {
        [
            Ability::Strength,
            Ability::Luck,
            Ability::Charisma,
            Ability::Agility,
            Ability::Perception,
            Ability::Intelligence,
        ]
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ability {
    type Err = AbilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ability::all()
            .into_iter()
            .find(|ability| ability.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AbilityError::UnknownAbility(s.to_string()))
    }
}

// ============================================================================
// Raw scores
// ============================================================================

/// Six raw ability values with no rules attached.
///
/// Used for incoming requests, for item bonuses, and as a read-only
/// snapshot of an [`Abilities`] set. Missing fields deserialize as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityScores {
    pub strength: i32,
    pub luck: i32,
    pub charisma: i32,
    pub agility: i32,
    pub perception: i32,
    pub intelligence: i32,
}

impl AbilityScores {
    pub fn new(
        strength: i32,
        luck: i32,
        charisma: i32,
        agility: i32,
        perception: i32,
        intelligence: i32,
    ) -> Self {
        Self {
            strength,
            luck,
            charisma,
            agility,
            perception,
            intelligence,
        }
    }

    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Luck => self.luck,
            Ability::Charisma => self.charisma,
            Ability::Agility => self.agility,
            Ability::Perception => self.perception,
            Ability::Intelligence => self.intelligence,
        }
    }

    pub fn set(&mut self, ability: Ability, value: i32) {
        match ability {
            Ability::Strength => self.strength = value,
            Ability::Luck => self.luck = value,
            Ability::Charisma => self.charisma = value,
            Ability::Agility => self.agility = value,
            Ability::Perception => self.perception = value,
            Ability::Intelligence => self.intelligence = value,
        }
    }

    pub fn total(&self) -> i32 {
        Ability::all().iter().map(|&a| self.get(a)).sum()
    }
}

// ============================================================================
// Abilities
// ============================================================================

/// Record of a successful ability change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityChange {
    pub ability: Ability,
    pub from: u8,
    pub to: u8,
    /// Pool balance after the change.
    pub points_pool: u8,
}

/// A character's abilities with their unspent point pool.
///
/// Values stay within [1, 10] and the pool never goes negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abilities {
    points_pool: u8,
    strength: u8,
    luck: u8,
    charisma: u8,
    agility: u8,
    perception: u8,
    intelligence: u8,
}

impl Default for Abilities {
    /// Every ability at the baseline with the whole budget unspent.
    fn default() -> Self {
        Self {
            points_pool: ABILITY_POINT_BUDGET,
            strength: DEFAULT_ABILITY_VALUE,
            luck: DEFAULT_ABILITY_VALUE,
            charisma: DEFAULT_ABILITY_VALUE,
            agility: DEFAULT_ABILITY_VALUE,
            perception: DEFAULT_ABILITY_VALUE,
            intelligence: DEFAULT_ABILITY_VALUE,
        }
    }
}

impl Abilities {
    /// Build a validated ability set.
    ///
    /// Each value must be in [1, 10] and the six must sum to
    /// [`REQUIRED_ABILITY_TOTAL`].
    pub fn new(
        strength: i32,
        luck: i32,
        charisma: i32,
        agility: i32,
        perception: i32,
        intelligence: i32,
    ) -> Result<Self, AbilityError> {
        Self::from_scores(&AbilityScores::new(
            strength,
            luck,
            charisma,
            agility,
            perception,
            intelligence,
        ))
    }

    /// Same as [`Abilities::new`], taking the values as a record.
    pub fn from_scores(scores: &AbilityScores) -> Result<Self, AbilityError> {
        let mut abilities = Self::default();
        for ability in Ability::all() {
            let value = checked_value(ability, scores.get(ability))?;
            abilities.store(ability, value);
        }

        let total = scores.total();
        if total != REQUIRED_ABILITY_TOTAL {
            return Err(AbilityError::BudgetMismatch { total });
        }

        let spent: i32 = Ability::all()
            .iter()
            .map(|&a| scores.get(a) - i32::from(DEFAULT_ABILITY_VALUE))
            .sum();
        // The sum check pins this at exactly zero.
        abilities.points_pool = (i32::from(ABILITY_POINT_BUDGET) - spent).max(0) as u8;

        Ok(abilities)
    }

    pub fn get(&self, ability: Ability) -> u8 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Luck => self.luck,
            Ability::Charisma => self.charisma,
            Ability::Agility => self.agility,
            Ability::Perception => self.perception,
            Ability::Intelligence => self.intelligence,
        }
    }

    pub fn strength(&self) -> u8 {
        self.strength
    }

    pub fn luck(&self) -> u8 {
        self.luck
    }

    pub fn charisma(&self) -> u8 {
        self.charisma
    }

    pub fn agility(&self) -> u8 {
        self.agility
    }

    pub fn perception(&self) -> u8 {
        self.perception
    }

    pub fn intelligence(&self) -> u8 {
        self.intelligence
    }

    /// Points still available to spend.
    pub fn points_pool(&self) -> u8 {
        self.points_pool
    }

    /// Snapshot of all six values.
    pub fn scores(&self) -> AbilityScores {
        let mut scores = AbilityScores::default();
        for ability in Ability::all() {
            scores.set(ability, i32::from(self.get(ability)));
        }
        scores
    }

    /// Change an ability by `delta` points, paying from or refunding to the pool.
    pub fn adjust(&mut self, ability: Ability, delta: i32) -> Result<AbilityChange, AbilityError> {
        let target = i32::from(self.get(ability)).saturating_add(delta);
        self.reprice(ability, target)
    }

    /// Set an ability to an absolute value, paying from or refunding to the pool.
    pub fn set(&mut self, ability: Ability, value: i32) -> Result<AbilityChange, AbilityError> {
        self.reprice(ability, value)
    }

    /// Check every value is in range. The budget is not re-checked here;
    /// it is enforced when values change.
    pub fn validate(&self) -> Result<(), AbilityError> {
        for ability in Ability::all() {
            checked_value(ability, i32::from(self.get(ability)))?;
        }
        Ok(())
    }

    fn reprice(&mut self, ability: Ability, target: i32) -> Result<AbilityChange, AbilityError> {
        let value = checked_value(ability, target)?;
        let current = self.get(ability);

        // Cost is measured from the baseline, so the baseline cancels out.
        let cost = i32::from(value) - i32::from(current);
        let available = self.points_pool;
        if cost > i32::from(available) {
            return Err(AbilityError::InsufficientBudget {
                needed: cost,
                available,
            });
        }

        self.store(ability, value);
        // Non-negative by the check above; bounded by 5 + 6×4.
        self.points_pool = (i32::from(available) - cost) as u8;

        Ok(AbilityChange {
            ability,
            from: current,
            to: value,
            points_pool: self.points_pool,
        })
    }

    fn store(&mut self, ability: Ability, value: u8) {
        match ability {
            Ability::Strength => self.strength = value,
            Ability::Luck => self.luck = value,
            Ability::Charisma => self.charisma = value,
            Ability::Agility => self.agility = value,
            Ability::Perception => self.perception = value,
            Ability::Intelligence => self.intelligence = value,
        }
    }
}

impl fmt::Display for Abilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for ability in Ability::all() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", ability.label(), self.get(ability))?;
            first = false;
        }
        Ok(())
    }
}

fn checked_value(ability: Ability, value: i32) -> Result<u8, AbilityError> {
    let range = i32::from(MIN_ABILITY_VALUE)..=i32::from(MAX_ABILITY_VALUE);
    if range.contains(&value) {
        Ok(value as u8)
    } else {
        Err(AbilityError::OutOfRange { ability, value })
    }
}
