//! Simulation layer — scheduler, fixed-step clock, and the battle engine.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player
//! commands, runs all systems in a fixed order, and produces
//! `BattleSnapshot`s. Completely headless, enabling deterministic
//! testing: same seed and same command stream = same snapshot stream.

pub mod clock;
pub mod components;
pub mod engine;
pub mod picker;
pub mod scheduler;
pub mod systems;
pub mod world_setup;
