pub mod board;
pub mod engine;
pub mod uci;

pub use board::{Color, Move, Piece, Position, Square};
pub use engine::{EngineClient, EngineConfig, EngineError, EngineMove, EngineProcess};
