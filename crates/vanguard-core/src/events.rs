//! Events emitted by the simulation for host feedback (UI, audio).

use serde::{Deserialize, Serialize};

use crate::enums::{DamageType, StatusEffectKind};
use crate::skill::SkillId;
use crate::types::ActorId;

/// Typed per-tick event stream carried on each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// An actor acquired a target and began engaging.
    EngageStart { actor: ActorId, target: ActorId },
    /// An attack failed its hit check. No damage, no status.
    AttackMissed { attacker: ActorId, target: ActorId },
    /// A connected hit dealt damage.
    DamageDealt {
        attacker: ActorId,
        target: ActorId,
        amount: i64,
        damage_type: DamageType,
        /// Set when the damage came from a skill rather than a basic attack.
        skill: Option<SkillId>,
    },
    /// An on-hit status effect landed.
    StatusApplied {
        target: ActorId,
        kind: StatusEffectKind,
        duration_secs: f64,
    },
    ActorDied { actor: ActorId },
    /// A kill paid out. Amounts summarize the resolved bundle.
    RewardGranted {
        source: ActorId,
        gold: i64,
        exp: i64,
        item_kinds: u32,
    },
    MonsterSpawned { actor: ActorId },
}
