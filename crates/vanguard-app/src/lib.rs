//! Headless host for the Vanguard simulation core.
//!
//! Owns the game loop thread, bundled designer data, and the startup
//! offline-progress settlement. Rendering, input capture, and
//! persistence are out of scope; the host prints snapshot summaries
//! and reads commands from stdin.

pub mod assets;
pub mod autopilot;
pub mod game_loop;
pub mod offline;
pub mod state;
