//! Combat intents — one-shot declarative decisions produced by brains.

use serde::{Deserialize, Serialize};

use crate::skill::SkillId;
use crate::types::ActorId;

/// A brain's decision for one cycle: who to target, whether to engage,
/// and which skill (if any) to request. Produced fresh every decision
/// cycle and consumed by exactly one execution strategy.
///
/// Invariant: `engage == true` implies `target.is_some()`. The
/// constructors are the only way to build an engaging intent, so the
/// invariant holds by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatIntent {
    pub target: Option<ActorId>,
    pub engage: bool,
    pub requested_skill: Option<SkillId>,
}

impl CombatIntent {
    /// The empty intent: no target, no engagement.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Engage a target with a basic attack.
    pub fn engage(target: ActorId) -> Self {
        Self {
            target: Some(target),
            engage: true,
            requested_skill: None,
        }
    }

    /// Engage a target with a specific skill.
    pub fn engage_with_skill(target: ActorId, skill: SkillId) -> Self {
        Self {
            target: Some(target),
            engage: true,
            requested_skill: Some(skill),
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.engage
    }
}
