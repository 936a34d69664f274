// --- File: grid.rs ---
use crate::constants::{ALIVE, DEAD};
use crate::tiling::Region;
use std::fmt;
use std::ops::{Index, IndexMut};

// --- Errors ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    Empty,
    NotSquare { row: usize, len: usize, expected: usize },
    InvalidState { row: usize, col: usize, value: u8 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "grid must have at least one row"),
            GridError::NotSquare { row, len, expected } => write!(
                f,
                "row {} has {} cells, expected {} for a square grid",
                row, len, expected
            ),
            GridError::InvalidState { row, col, value } => write!(
                f,
                "cell ({}, {}) holds {}, expected {} or {}",
                row, col, value, DEAD, ALIVE
            ),
        }
    }
}

impl std::error::Error for GridError {}

// --- Grid ---

// Row-major, fixed size. Out-of-range coordinates panic like slice indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![DEAD; size * size],
        }
    }

    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }
        let mut grid = Self::new(size);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: cells.len(),
                    expected: size,
                });
            }
            for (col, &value) in cells.iter().enumerate() {
                if value != DEAD && value != ALIVE {
                    return Err(GridError::InvalidState { row, col, value });
                }
            }
            grid.row_mut(row).copy_from_slice(cells);
        }
        Ok(grid)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.size,
            self.size
        );
        row * self.size + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[self.offset(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, state: u8) {
        let offset = self.offset(row, col);
        self.cells[offset] = state;
    }

    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [u8] {
        let start = row * self.size;
        &mut self.cells[start..start + self.size]
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    // Crate-internal: the tile scheduler carves disjoint views out of this.
    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == ALIVE).count()
    }

    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row + 1 == self.size || col + 1 == self.size
    }

    pub fn interior(&self) -> Region {
        Region::interior(self.size)
    }

    pub fn copy_from(&mut self, other: &Grid) {
        assert_eq!(
            self.size, other.size,
            "cannot copy a {}x{} grid into a {}x{} grid",
            other.size, other.size, self.size, self.size
        );
        self.cells.copy_from_slice(&other.cells);
    }

    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = u8;

    fn index(&self, (row, col): (usize, usize)) -> &u8 {
        &self.cells[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut u8 {
        let offset = self.offset(row, col);
        &mut self.cells[offset]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for &cell in self.row(row) {
                f.write_str(if cell == ALIVE { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
