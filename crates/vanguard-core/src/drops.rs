//! Drop table designer data — per-monster reward authoring.

use serde::{Deserialize, Serialize};

/// One potential item drop. Each entry is an independent Bernoulli
/// trial: entries are not mutually exclusive and are never renormalized
/// against each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDropEntry {
    pub item_id: String,
    /// Drop probability in [0,1]. Out-of-range authoring is clamped at
    /// resolution time, not rejected.
    pub chance: f64,
    pub count_min: i64,
    pub count_max: i64,
}

/// Immutable per-monster drop table.
///
/// Gold and gems are authored as expected-value ranges; exp as an
/// integer range. The gem range is part of the schema for the shop
/// pipeline but the combat resolver does not pay gems.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DropTable {
    pub gold_ev_min: f64,
    pub gold_ev_max: f64,
    #[serde(default)]
    pub gem_ev_min: f64,
    #[serde(default)]
    pub gem_ev_max: f64,
    pub exp_min: i64,
    pub exp_max: i64,
    #[serde(default)]
    pub entries: Vec<ItemDropEntry>,
}
