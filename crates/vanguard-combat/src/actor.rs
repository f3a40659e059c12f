//! The actor query port.
//!
//! Combat code never touches the ECS directly; it reads combatants
//! through this surface. The simulation implements it over its
//! component rows, tests implement it over plain structs.

use vanguard_core::enums::{ActorKind, StatKind, StatValueSource};
use vanguard_core::types::{ActorId, Position};

/// Read-only view of one combatant.
pub trait Combatant {
    fn id(&self) -> ActorId;
    fn kind(&self) -> ActorKind;
    fn is_alive(&self) -> bool;
    /// Resolve a stat at the requested layer of the stat stack.
    fn stat(&self, stat: StatKind, source: StatValueSource) -> f64;
    fn position(&self) -> Position;
}
