//! Core Connect Four game logic: board representation, seats, the per-game
//! state machine, and the engine that owns the current game.

mod board;
mod engine;
mod player;
mod state;

pub use board::{
    Board, Cell, Dimensions, MoveError, Position, DEFAULT_HEIGHT, DEFAULT_WIDTH, WIN_LENGTH,
};
pub use engine::{GameEngine, Phase};
pub use player::{Players, Seat};
pub use state::{DropResult, GameOutcome, GameState, IgnoredReason};
