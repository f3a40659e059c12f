//! Battle snapshot — the complete visible state produced each tick.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{ActorKind, StatusEffectKind};
use crate::events::CombatEvent;
use crate::types::{ActorId, Position, SimTime};

/// Complete simulation state handed to the host after each tick.
/// Serializes stably (ordered maps) so equal states produce equal JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub time: SimTime,
    pub paused: bool,
    pub stage_index: i32,
    pub actors: Vec<ActorView>,
    pub wallet: WalletView,
    pub events: Vec<CombatEvent>,
}

/// One actor as visible to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorView {
    pub id: ActorId,
    pub kind: ActorKind,
    pub position: Position,
    pub health: i64,
    pub max_health: i64,
    pub alive: bool,
    pub target: Option<ActorId>,
    pub statuses: Vec<StatusEffectKind>,
}

/// Accumulated economy totals for the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalletView {
    pub gold: i64,
    pub exp: i64,
    /// Item counts keyed by item id. BTreeMap for stable serialization.
    pub items: BTreeMap<String, i64>,
}
