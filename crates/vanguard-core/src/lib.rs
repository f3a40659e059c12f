//! Core types and definitions for the VANGUARD simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! designer data records, intents, rewards, commands, events, snapshots,
//! and constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod constants;
pub mod data;
pub mod drops;
pub mod enums;
pub mod events;
pub mod intent;
pub mod offline;
pub mod rewards;
pub mod rng;
pub mod skill;
pub mod state;
pub mod types;
