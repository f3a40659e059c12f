//! Combat resolution pipeline.
//!
//! Pure functions and small strategy objects that decide hits, compute
//! damage, and produce intents. No ECS dependency — everything operates
//! on the `Combatant` port and plain context data, so the same code is
//! exercised by the simulation and by unit tests without a world.

pub mod actor;
pub mod brain;
pub mod damage;
pub mod hit;
pub mod scaling;
pub mod status;
pub mod strategy;

#[cfg(test)]
mod tests;
