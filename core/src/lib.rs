#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use render::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod render;
mod types;

/// Board dimensions and mine count, always satisfying `0 < mines < height * width`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    height: Coord,
    width: Coord,
    mines: CellCount,
}

impl BoardConfig {
    pub(crate) const fn new_unchecked(height: Coord, width: Coord, mines: CellCount) -> Self {
        Self {
            height,
            width,
            mines,
        }
    }

    pub fn new(height: Coord, width: Coord, mines: CellCount) -> Result<Self> {
        if height == 0 || width == 0 || mines == 0 || mines >= mult(height, width) {
            return Err(GameError::InvalidConfig {
                height,
                width,
                mines,
            });
        }
        Ok(Self::new_unchecked(height, width, mines))
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    /// `(height, width)`, the bounds every coordinate is checked against.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.height, self.width)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl From<Difficulty> for BoardConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

/// The classic presets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub const fn config(self) -> BoardConfig {
        match self {
            Self::Beginner => BoardConfig::new_unchecked(9, 9, 10),
            Self::Intermediate => BoardConfig::new_unchecked(16, 16, 40),
            Self::Advanced => BoardConfig::new_unchecked(16, 30, 99),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s))
            .ok_or(GameError::UnknownDifficulty)
    }
}

/// Where the mines are. Fixed once built, never exposed to players before the game ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_coords: Vec<Coord2>,
}

impl MineLayout {
    /// Fails with `InvalidConfig` when the mask does not fit `Coord` dimensions or
    /// holds more than `CellCount::MAX` mines.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let mines = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        let (Ok(_), Ok(width), Ok(_)) = (
            Coord::try_from(rows),
            Coord::try_from(cols),
            CellCount::try_from(mines),
        ) else {
            return Err(GameError::InvalidConfig {
                height: rows.try_into().unwrap_or(Coord::MAX),
                width: cols.try_into().unwrap_or(Coord::MAX),
                mines: mines.try_into().unwrap_or(CellCount::MAX),
            });
        };

        let mine_coords = mine_mask
            .iter()
            .enumerate()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|(index, _)| coords_from_index(index, width))
            .collect();
        Ok(Self {
            mine_mask,
            mine_coords,
        })
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::InvalidCoords);
            }
            let slot = &mut mine_mask[coords.to_nd_index()];
            if *slot {
                return Err(GameError::DuplicateMine);
            }
            *slot = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Layout has exactly the dimensions and mine count of `config`.
    pub fn check_config(&self, config: BoardConfig) -> Result<()> {
        if self.size() == config.size() && self.mine_count() == config.mines() {
            Ok(())
        } else {
            Err(GameError::LayoutMismatch)
        }
    }

    pub fn size(&self) -> Coord2 {
        // dimensions are bounded by `from_mine_mask`
        let (rows, cols) = self.mine_mask.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (height, width) = self.size();
        mult(height, width)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_coords.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    /// Mine coordinates in row-major order.
    pub fn mine_coords(&self) -> &[Coord2] {
        &self.mine_coords
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Result of a player reveal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Target was already revealed, nothing moved.
    NoChange,
    /// Safe reveal, the game goes on.
    Continue,
    Lost,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Continue => true,
            Lost => true,
            Won => true,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}
