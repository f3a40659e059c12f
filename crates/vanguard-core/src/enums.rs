//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// What controls an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    /// The player's character (input-driven brain).
    Player,
    /// A hostile mob (AI brain).
    Monster,
}

/// Who is allowed to cast a skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CasterTag {
    Player,
    Monster,
    #[default]
    Both,
}

impl CasterTag {
    /// Whether an actor of the given kind may cast a skill with this tag.
    pub fn allows(&self, kind: ActorKind) -> bool {
        match self {
            CasterTag::Both => true,
            CasterTag::Player => kind == ActorKind::Player,
            CasterTag::Monster => kind == ActorKind::Monster,
        }
    }
}

/// Damage channel. Hit checks and damage mitigation resolve per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    #[default]
    Physical,
    Magic,
}

/// A queryable stat dimension on an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Attack,
    Defense,
    Accuracy,
    Evasion,
    MaxHealth,
    MoveSpeed,
}

/// Which layer of an actor's stat stack feeds a formula.
///
/// Pure selector, no state. The stack is layered bottom-up:
/// invested levels, then equipment, then buffs/debuffs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatValueSource {
    /// Raw invested-level sum, before any gear.
    Invested,
    /// Post-equipment value, before buffs/debuffs.
    BaseFinal,
    /// Fully resolved value including active status effects.
    #[default]
    FinalWithStatus,
}

/// Status effect category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusEffectKind {
    /// Target cannot act while stunned.
    Stun,
    /// Reduces move speed.
    Slow,
    /// Reduces attack.
    Weaken,
    /// Periodic damage over the duration.
    Burn,
}

/// Reward category for one combat-kill or offline resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardKind {
    Gold,
    Exp,
    Item,
}
