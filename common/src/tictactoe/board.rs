use crate::tictactoe::input::MoveError;
use crate::tictactoe::mark::Mark;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

pub const BOARD_WIDTH: usize = 3;
pub const CELL_COUNT: usize = BOARD_WIDTH * BOARD_WIDTH;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked {
        mark: Mark,
    },
}

impl Cell {
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked { mark } => Some(*mark),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Marked { mark } => write!(f, "{}", mark),
        }
    }
}

// Row-major position on the board:
//  0 | 1 | 2
//  3 | 4 | 5
//  6 | 7 | 8
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "usize", into = "usize")]
pub struct CellIndex(usize);

impl CellIndex {
    pub fn new(index: usize) -> Result<Self, MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfRange(index));
        }
        Ok(CellIndex(index))
    }

    // Only for the compile-time line table below
    const fn at(index: usize) -> Self {
        CellIndex(index)
    }

    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..CELL_COUNT).map(CellIndex)
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn row(&self) -> usize {
        self.0 / BOARD_WIDTH
    }

    pub fn column(&self) -> usize {
        self.0 % BOARD_WIDTH
    }
}

impl TryFrom<usize> for CellIndex {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        CellIndex::new(index)
    }
}

impl From<CellIndex> for usize {
    fn from(index: CellIndex) -> usize {
        index.0
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub type Line = [CellIndex; 3];

// Checked in this order; the first complete line wins.
pub const LINES: [Line; 8] = [
    // rows
    [CellIndex::at(0), CellIndex::at(1), CellIndex::at(2)],
    [CellIndex::at(3), CellIndex::at(4), CellIndex::at(5)],
    [CellIndex::at(6), CellIndex::at(7), CellIndex::at(8)],
    // columns
    [CellIndex::at(0), CellIndex::at(3), CellIndex::at(6)],
    [CellIndex::at(1), CellIndex::at(4), CellIndex::at(7)],
    [CellIndex::at(2), CellIndex::at(5), CellIndex::at(8)],
    // diagonals
    [CellIndex::at(0), CellIndex::at(4), CellIndex::at(8)],
    [CellIndex::at(2), CellIndex::at(4), CellIndex::at(6)],
];

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Board([Cell; CELL_COUNT]);

impl Board {
    pub fn new(cells: [Cell; CELL_COUNT]) -> Self {
        Board(cells)
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.0
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|cell| !cell.is_empty())
    }

    pub fn count_marks(&self, mark: Mark) -> usize {
        self.0.iter().filter(|cell| cell.mark() == Some(mark)).count()
    }

    // Callers outside the engine cannot overwrite cells
    pub(crate) fn place(&mut self, index: CellIndex, mark: Mark) -> Result<(), MoveError> {
        let cell = &mut self.0[index.get()];
        if !cell.is_empty() {
            return Err(MoveError::Occupied(index));
        }
        *cell = Cell::Marked { mark };
        Ok(())
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.0[index.get()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .0
            .chunks(BOARD_WIDTH)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.to_string())
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<String>>();
        write!(f, "{}", rows.join("\n"))
    }
}
