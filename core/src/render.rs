use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a player is allowed to see of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbol {
    Hidden,
    Flag,
    Question,
    Mine,
    Digit(u8),
}

impl From<Cell> for Symbol {
    fn from(cell: Cell) -> Self {
        match cell.state() {
            CellState::Hidden => Self::Hidden,
            CellState::Flagged => Self::Flag,
            CellState::Questioned => Self::Question,
            CellState::Revealed if cell.has_mine() => Self::Mine,
            CellState::Revealed => Self::Digit(cell.adjacent_mines()),
        }
    }
}

impl Symbol {
    pub fn glyph(self, glyphs: GlyphSet) -> &'static str {
        let table = glyphs.table();
        match self {
            Self::Hidden => table.hidden,
            Self::Flag => table.flag,
            Self::Question => table.question,
            Self::Mine => table.mine,
            Self::Digit(count) => table.digits[usize::from(count).min(MAX_NEIGHBORS)],
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlyphSet {
    #[default]
    Emoji,
    Ascii,
}

impl GlyphSet {
    fn table(self) -> &'static GlyphTable {
        match self {
            Self::Emoji => &EMOJI,
            Self::Ascii => &ASCII,
        }
    }
}

struct GlyphTable {
    hidden: &'static str,
    flag: &'static str,
    question: &'static str,
    mine: &'static str,
    digits: [&'static str; MAX_NEIGHBORS + 1],
    /// Terminal columns one glyph occupies.
    width: usize,
    separator: &'static str,
}

static EMOJI: GlyphTable = GlyphTable {
    hidden: "🟩",
    flag: "⭕",
    question: "❔",
    mine: "💣",
    digits: [
        "0️⃣", "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣",
    ],
    width: 2,
    separator: "",
};

static ASCII: GlyphTable = GlyphTable {
    hidden: "#",
    flag: "F",
    question: "?",
    mine: "*",
    digits: [".", "1", "2", "3", "4", "5", "6", "7", "8"],
    width: 1,
    separator: " ",
};

impl Board {
    /// Player view of the whole board, one symbol per cell.
    pub fn render(&self) -> Array2<Symbol> {
        self.cells().map(|&cell| Symbol::from(cell))
    }

    pub fn symbol_at(&self, coords: Coord2) -> Result<Symbol> {
        self.cell_at(coords).map(Symbol::from)
    }

    pub fn display(&self, glyphs: GlyphSet) -> BoardDisplay<'_> {
        BoardDisplay {
            board: self,
            glyphs,
            axes: false,
        }
    }
}

/// Prints a board one row per line.
#[derive(Copy, Clone)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    glyphs: GlyphSet,
    axes: bool,
}

impl BoardDisplay<'_> {
    /// Adds row and column numbers (column numbers wrap every ten).
    pub fn with_axes(mut self) -> Self {
        self.axes = true;
        self
    }
}

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = self.glyphs.table();
        let (height, width) = self.board.size();

        if self.axes {
            f.write_str("    ")?;
            for col in 0..width {
                write!(f, "{:<w$}{}", col % 10, table.separator, w = table.width)?;
            }
            writeln!(f)?;
        }

        for (row, cells) in self.board.cells().outer_iter().enumerate() {
            if self.axes {
                write!(f, "{row:>3} ")?;
            }
            for &cell in cells.iter() {
                write!(f, "{}{}", Symbol::from(cell).glyph(self.glyphs), table.separator)?;
            }
            if row + 1 < usize::from(height) {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_layout(MineLayout::from_mine_coords(size, mines).unwrap()).unwrap()
    }

    #[test]
    fn fresh_board_renders_hidden() {
        let board = board((2, 3), &[(1, 1)]);

        assert!(board.render().iter().all(|&symbol| symbol == Symbol::Hidden));
        assert_eq!(board.render().dim(), (2, 3));
    }

    #[test]
    fn symbols_follow_cell_state() {
        let mut board = board((2, 3), &[(1, 1)]);
        board.mark((0, 0), MarkKind::Flag).unwrap();
        board.mark((0, 2), MarkKind::Question).unwrap();
        board.reveal((0, 1)).unwrap();

        assert_eq!(board.symbol_at((0, 0)), Ok(Symbol::Flag));
        assert_eq!(board.symbol_at((0, 1)), Ok(Symbol::Digit(1)));
        assert_eq!(board.symbol_at((0, 2)), Ok(Symbol::Question));
        assert_eq!(board.symbol_at((1, 1)), Ok(Symbol::Hidden));
        assert_eq!(board.symbol_at((2, 0)), Err(GameError::InvalidCoords));

        board.reveal((1, 1)).unwrap();
        assert_eq!(board.symbol_at((1, 1)), Ok(Symbol::Mine));
    }

    #[test]
    fn render_has_no_side_effects() {
        let mut board = board((3, 3), &[(0, 0)]);
        board.reveal((2, 2)).unwrap();
        let before = board.clone();

        let _ = board.render();
        let _ = board.display(GlyphSet::Emoji).to_string();

        assert_eq!(board, before);
    }

    #[test]
    fn ascii_display_prints_rows() {
        let mut board = board((3, 3), &[(0, 0)]);
        board.mark((0, 0), MarkKind::Flag).unwrap();
        board.reveal((2, 2)).unwrap();

        assert_eq!(
            board.display(GlyphSet::Ascii).to_string(),
            "F 1 . \n1 1 . \n. . . "
        );
    }

    #[test]
    fn ascii_display_with_axes() {
        let board = board((2, 2), &[(0, 0)]);

        assert_eq!(
            board.display(GlyphSet::Ascii).with_axes().to_string(),
            "    0 1 \n  0 # # \n  1 # # "
        );
    }

    #[test]
    fn emoji_display_shows_mines_after_loss() {
        let mut board = board((1, 3), &[(0, 0)]);
        board.reveal((0, 0)).unwrap();
        board.reveal_mines().unwrap();

        assert_eq!(board.display(GlyphSet::Emoji).to_string(), "💣🟩🟩");
    }
}
