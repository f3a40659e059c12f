//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::skill::SkillId;

/// A screen-space pointer location, as delivered by the host's input
/// layer. Resolution into a world-space target happens inside the sim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin a battle on the given stage.
    StartBattle { stage_index: i32 },
    /// Tap/click at a screen position; resolved to a monster target.
    TapAt { point: ScreenPoint },
    /// Request a skill cast against the current target.
    CastSkill { skill_id: SkillId },
    /// Drop the current target and stop engaging.
    ClearTarget,
    Pause,
    Resume,
}
