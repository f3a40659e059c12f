//! Command protocol between the stdin reader and the game loop thread.

use vanguard_core::commands::PlayerCommand;

/// Commands sent from the host's input layer to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}
