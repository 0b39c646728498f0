use alloc::vec::Vec;
use core::num::Saturating;
use hashbrown::HashSet;
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameOutcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single game, from mine placement until it is won or lost.
///
/// Serialized boards are snapshots of a game in progress. Deserializing one trusts the
/// snapshot as is: the counters and cell states are not re-checked against the layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    mine_layout: MineLayout,
    cells: Array2<Cell>,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    outcome: GameOutcome,
    triggered_mine: Option<Coord2>,
}

impl Board {
    /// Random board, mines drawn from `seed`.
    pub fn new(height: Coord, width: Coord, mines: CellCount, seed: u64) -> Result<Self> {
        let config = BoardConfig::new(height, width, mines)?;
        Self::with_generator(config, RandomMineGenerator::new(seed))
    }

    /// Fails with `LayoutMismatch` if the generated layout does not match `config`,
    /// so `config()` always equals the requested one.
    pub fn with_generator(config: BoardConfig, generator: impl MineGenerator) -> Result<Self> {
        let mine_layout = generator.generate(config)?;
        mine_layout.check_config(config)?;
        Self::from_layout(mine_layout)
    }

    pub fn from_layout(mine_layout: MineLayout) -> Result<Self> {
        let (height, width) = mine_layout.size();
        BoardConfig::new(height, width, mine_layout.mine_count())?;

        let cells = Array2::from_shape_fn(mine_layout.size().to_nd_index(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            if mine_layout.contains_mine(coords) {
                Cell::new(true, 0)
            } else {
                Cell::new(false, mine_layout.adjacent_mine_count(coords))
            }
        });

        Ok(Self {
            mine_layout,
            cells,
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            outcome: Default::default(),
            triggered_mine: None,
        })
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn config(&self) -> BoardConfig {
        let (height, width) = self.size();
        BoardConfig::new_unchecked(height, width, self.total_mines())
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    /// Mines not yet accounted for by a flag, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.mine_layout.mine_count() as isize) - (self.flagged_count.0 as isize)
    }

    /// Safe cells revealed so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn cells(&self) -> ArrayView2<'_, Cell> {
        self.cells.view()
    }

    /// The mine that ended the game, if one did.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn mine_coords(&self) -> &[Coord2] {
        self.mine_layout.mine_coords()
    }

    /// Puts a flag or question mark on an unrevealed cell, replacing any previous mark.
    pub fn mark(&mut self, coords: Coord2, kind: MarkKind) -> Result<MarkOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;
        self.check_not_finished()?;

        let previous = self.cells[coords.to_nd_index()].state();
        if previous.is_revealed() {
            return Ok(MarkOutcome::NoChange);
        }

        self.set_state(coords, kind.cell_state());
        log::debug!("Marked {:?} as {:?}", coords, kind);
        Ok(MarkOutcome::Changed)
    }

    /// Clears a flag or question mark. Revealed cells stay revealed.
    pub fn unmark(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;
        self.check_not_finished()?;

        if !self.cells[coords.to_nd_index()].state().is_marked() {
            return Ok(MarkOutcome::NoChange);
        }

        self.set_state(coords, CellState::Hidden);
        log::debug!("Unmarked {:?}", coords);
        Ok(MarkOutcome::Changed)
    }

    /// Reveals a cell and, when it borders no mine, the whole connected region around it.
    ///
    /// Marks do not protect a cell: flagged and questioned cells are revealed like hidden ones.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;
        self.check_not_finished()?;

        if self.cells[coords.to_nd_index()].state().is_revealed() {
            return Ok(RevealOutcome::NoChange);
        }

        if !self.reveal_one(coords) {
            log::debug!("Hit mine at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.end_game(GameOutcome::Lost);
            return Ok(RevealOutcome::Lost);
        }

        let adjacent_mines = self.cells[coords.to_nd_index()].adjacent_mines();
        log::debug!("Revealed {:?}, adjacent mines: {}", coords, adjacent_mines);
        if adjacent_mines == 0 {
            let opened = self.cascade(coords);
            log::debug!("Cascade from {:?} opened {} more cells", coords, opened);
        }

        Ok(self.evaluate_outcome())
    }

    /// Shows every mine, for the end-of-game board.
    pub fn reveal_mines(&mut self) -> Result<()> {
        if !self.is_finished() {
            return Err(GameError::NotFinished);
        }

        for coords in self.mine_layout.mine_coords().to_vec() {
            self.set_state(coords, CellState::Revealed);
        }
        Ok(())
    }

    /// Flips one unrevealed cell to revealed, returns whether it was safe.
    fn reveal_one(&mut self, coords: Coord2) -> bool {
        self.set_state(coords, CellState::Revealed);
        let safe = !self.cells[coords.to_nd_index()].has_mine();
        if safe {
            self.revealed_count += 1;
        }
        safe
    }

    /// Depth-first flood from a zero cell, returns how many cells it revealed.
    ///
    /// Coordinates enter `visited` when pushed, so each one is processed at most once.
    fn cascade(&mut self, origin: Coord2) -> usize {
        let bounds = self.size();
        let mut visited: HashSet<Coord2> = [origin].into_iter().collect();
        let mut to_visit: Vec<Coord2> = Vec::new();
        let mut opened = 0;

        Self::push_unvisited(origin, bounds, &mut visited, &mut to_visit);

        while let Some(visit_coords) = to_visit.pop() {
            let cell = self.cells[visit_coords.to_nd_index()];
            if cell.state().is_revealed() {
                continue;
            }

            // neighbors of a zero cell never hold a mine
            let safe = self.reveal_one(visit_coords);
            debug_assert!(safe, "cascade reached mine at {visit_coords:?}");
            opened += 1;
            log::trace!(
                "Cascade opened {:?}, adjacent mines: {}",
                visit_coords,
                cell.adjacent_mines()
            );

            if cell.adjacent_mines() == 0 {
                Self::push_unvisited(visit_coords, bounds, &mut visited, &mut to_visit);
            }
        }

        opened
    }

    fn push_unvisited(
        coords: Coord2,
        bounds: Coord2,
        visited: &mut HashSet<Coord2>,
        to_visit: &mut Vec<Coord2>,
    ) {
        let next = surrounding(coords, bounds, Some(&*visited));
        visited.extend(next.iter().copied());
        to_visit.extend(next);
    }

    fn evaluate_outcome(&mut self) -> RevealOutcome {
        if self.revealed_count.0 == self.mine_layout.safe_cell_count() {
            self.end_game(GameOutcome::Won);
        }

        match self.outcome {
            GameOutcome::InProgress => RevealOutcome::Continue,
            GameOutcome::Won => RevealOutcome::Won,
            GameOutcome::Lost => RevealOutcome::Lost,
        }
    }

    fn end_game(&mut self, outcome: GameOutcome) {
        if self.outcome.is_finished() {
            return;
        }

        log::debug!("Game ended: {:?}", outcome);
        self.outcome = outcome;
    }

    /// Single place cell states change, keeps the flag counter in step.
    fn set_state(&mut self, coords: Coord2, state: CellState) {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.state() == CellState::Flagged {
            self.flagged_count -= 1;
        }
        if state == CellState::Flagged {
            self.flagged_count += 1;
        }
        cell.set_state(state);
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.outcome.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
