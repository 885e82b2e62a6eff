//! Reads an ASCII minefield (`X` = mine, `O` = empty) and annotates every
//! empty cell with the number of mines adjacent to it.
//!
//! The pipeline is three linear passes over a [`Field`]: parse the text into
//! cells, link each mine to its in-bounds empty neighbours, then bump the
//! count of every linked cell once per adjacency edge. Rendering is the
//! [`Display`] impl.
//!
//! ```
//! use minecount::Field;
//!
//! let mut field = Field::from_text(2, "XO\nOO");
//! field.annotate().unwrap();
//! assert_eq!(field.to_string(), "X 1\n1 1");
//! ```
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::io::{self, BufRead};

use itertools::Itertools;
use thiserror::Error;
use tracing::debug;

use internal_util::neighbours;
mod internal_util;
pub mod util;

/// Grid side length used by the command-line tool when `--size` is not given.
pub const DEFAULT_SIZE: usize = 8;

/// Input and output marker for a mine.
const MINE_CHAR: char = 'X';
/// Input marker for an empty cell.
const EMPTY_CHAR: char = 'O';
/// Rendered in place of positions the input never populated.
const UNSET_CHAR: char = '.';

/// A single cell of a [`Field`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// An empty cell holding the number of mines adjacent to it.
    Empty {
        count: usize,
    },
    /// A mine, holding the positions of the empty cells adjacent to it.
    ///
    /// The links are filled in by [`Field::annotate`]. They are plain
    /// `(row, col)` indices into the owning [`Field`], never owned data;
    /// the field outlives every link.
    Mine {
        links: Vec<(usize, usize)>,
    },
}

/// Errors produced by operations on a [`Field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// [`Field::annotate`] was called on a field that had already been
    /// annotated. Running the passes again would inflate every count, so
    /// the second call is rejected instead of silently tolerated.
    #[error("field has already been annotated")]
    AlreadyAnnotated,
}

/// A square minefield of side `size`.
///
/// Cell storage is keyed by `(row, col)`; a position absent from the map was
/// never populated by the input (short line, missing row) and renders as
/// `.`. The field owns every cell, plus the positions of all mines in input
/// scan order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    size: usize,
    cells: HashMap<(usize, usize), Cell>,
    mines: Vec<(usize, usize)>,
    annotated: bool,
}

impl Field {
    /// Create a field of the given side length with every position unset.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: HashMap::new(),
            mines: Vec::new(),
            annotated: false,
        }
    }

    /// Parse a field from a reader.
    ///
    /// Each line of input is one row. Within a line, only `X` and `O`
    /// consume a column index; every other character (whitespace included)
    /// is skipped without consuming one. Blank lines still consume a row
    /// index. Rows and columns beyond `size` are ignored, and positions the
    /// input never reaches are left unset. Malformed content is therefore
    /// never an error; only the reader itself can fail.
    ///
    /// # Errors
    ///
    /// Propagates any [`io::Error`] raised while reading lines.
    pub fn from_reader(size: usize, reader: impl BufRead) -> io::Result<Self> {
        let mut field = Self::new(size);
        for (row, line) in reader.lines().enumerate() {
            field.scan_line(row, &line?);
        }
        debug!(
            size,
            mines = field.mines.len(),
            cells = field.cells.len(),
            "parsed field from reader"
        );
        Ok(field)
    }

    /// Parse a field from in-memory text. Same scanning rules as
    /// [`Field::from_reader`].
    #[must_use]
    pub fn from_text(size: usize, text: &str) -> Self {
        let mut field = Self::new(size);
        for (row, line) in text.lines().enumerate() {
            field.scan_line(row, line);
        }
        debug!(
            size,
            mines = field.mines.len(),
            cells = field.cells.len(),
            "parsed field from text"
        );
        field
    }

    fn scan_line(&mut self, row: usize, line: &str) {
        if row >= self.size {
            return;
        }
        let mut col = 0;
        for c in line.chars() {
            match c {
                MINE_CHAR => {
                    if col < self.size {
                        self.cells.insert(
                            (row, col),
                            Cell::Mine {
                                links: Vec::new(),
                            },
                        );
                        self.mines.push((row, col));
                    }
                    col += 1;
                },
                EMPTY_CHAR => {
                    if col < self.size {
                        self.cells.insert(
                            (row, col),
                            Cell::Empty {
                                count: 0,
                            },
                        );
                    }
                    col += 1;
                },
                _ => {},
            }
        }
    }

    /// Run the link and tally passes, exactly once.
    ///
    /// Linking records, per mine, the in-bounds empty neighbours
    /// (out-of-bounds, unset and mine neighbours are skipped); tallying then
    /// bumps each linked cell's count by one per edge. Mine order never
    /// affects the result.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::AlreadyAnnotated`] on a second call, leaving
    /// all counts untouched.
    pub fn annotate(&mut self) -> Result<(), FieldError> {
        if self.annotated {
            return Err(FieldError::AlreadyAnnotated);
        }
        self.link_mines();
        self.tally_counts();
        self.annotated = true;
        Ok(())
    }

    /// Structural pass: no counts are touched here.
    fn link_mines(&mut self) {
        for &pos in &self.mines {
            let links = neighbours(pos, self.size)
                .filter(|n| matches!(self.cells.get(n), Some(Cell::Empty { .. })))
                .collect_vec();
            debug!(?pos, links = links.len(), "linked mine");
            if let Some(Cell::Mine {
                links: slot,
            }) = self.cells.get_mut(&pos)
            {
                *slot = links;
            }
        }
    }

    /// Accumulation pass: one increment per mine-empty adjacency edge.
    fn tally_counts(&mut self) {
        let mut increments = 0_usize;
        for mine in &self.mines {
            let links = match self.cells.get(mine) {
                Some(Cell::Mine {
                    links,
                }) => links.clone(),
                _ => continue,
            };
            for link in links {
                if let Some(Cell::Empty {
                    count,
                }) = self.cells.get_mut(&link)
                {
                    *count += 1;
                    increments += 1;
                }
            }
        }
        debug!(increments, "tallied counts");
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The cell at `(row, col)`, or `None` if the position is unset or out
    /// of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(&(row, col))
    }

    /// Positions of all mines, in input scan order.
    #[must_use]
    pub fn mines(&self) -> &[(usize, usize)] {
        &self.mines
    }
}

impl Display for Field {
    /// One row per line, tokens joined by a single space, no trailing
    /// newline. Mines render as `X`, empty cells as their decimal count,
    /// unset positions as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|col| match self.cells.get(&(row, col)) {
                        Some(Cell::Mine { .. }) => MINE_CHAR.to_string(),
                        Some(Cell::Empty {
                            count,
                        }) => count.to_string(),
                        None => UNSET_CHAR.to_string(),
                    })
                    .join(" ")
            })
            .join("\n");
        f.write_str(&grid)
    }
}
