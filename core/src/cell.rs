use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Revealed,
    Flagged,
    Questioned,
}

impl CellState {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub const fn is_marked(self) -> bool {
        matches!(self, Self::Flagged | Self::Questioned)
    }
}

/// One grid position. Mine placement and adjacency are fixed at setup, only `state` moves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    has_mine: bool,
    adjacent_mines: u8,
    state: CellState,
}

impl Cell {
    pub(crate) const fn new(has_mine: bool, adjacent_mines: u8) -> Self {
        Self {
            has_mine,
            adjacent_mines,
            state: CellState::Hidden,
        }
    }

    pub const fn has_mine(self) -> bool {
        self.has_mine
    }

    /// Number of mines among the neighbors, only meaningful when the cell has no mine.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    pub const fn state(self) -> CellState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }
}

/// Annotation a player can put on an unrevealed cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkKind {
    Flag,
    Question,
}

impl MarkKind {
    pub const fn cell_state(self) -> CellState {
        match self {
            Self::Flag => CellState::Flagged,
            Self::Question => CellState::Questioned,
        }
    }
}

/// Numeric kinds as typed at the prompt: 1 is a flag, 2 a question mark.
impl TryFrom<u8> for MarkKind {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Flag),
            2 => Ok(Self::Question),
            other => Err(GameError::InvalidMarkKind(other)),
        }
    }
}

impl FromStr for MarkKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "f" | "flag" => Ok(Self::Flag),
            "q" | "question" => Ok(Self::Question),
            _ => match s.parse::<u8>() {
                Ok(value) => Self::try_from(value),
                Err(_) => Err(GameError::UnknownMarkKind),
            },
        }
    }
}
