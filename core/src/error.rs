use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board configuration: {height}x{width} with {mines} mines")]
    InvalidConfig {
        height: Coord,
        width: Coord,
        mines: CellCount,
    },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Duplicate mine coordinates")]
    DuplicateMine,
    #[error("Mine layout does not match the board configuration")]
    LayoutMismatch,
    #[error("Invalid mark kind {0}, expected 1 (flag) or 2 (question)")]
    InvalidMarkKind(u8),
    #[error("Unknown mark kind, expected flag or question")]
    UnknownMarkKind,
    #[error("Unknown difficulty, expected beginner, intermediate or advanced")]
    UnknownDifficulty,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Game still in progress")]
    NotFinished,
}

pub type Result<T> = core::result::Result<T, GameError>;
