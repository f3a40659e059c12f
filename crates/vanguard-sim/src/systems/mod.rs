//! Simulation systems, run in a fixed order each tick by the engine.

pub mod cleanup;
pub mod combat;
pub mod decision;
pub mod loot;
pub mod movement;
pub mod snapshot;
pub mod status;
