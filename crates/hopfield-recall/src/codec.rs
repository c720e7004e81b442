//! Grid ⇄ bipolar vector conversion
//!
//! A [`Grid`] is the symbolic, human-facing form of a pattern; a
//! [`BipolarVector`] is its numeric form. [`encode`] flattens row-major with
//! `Active → +1`, `Inactive → -1`; [`decode`] reverses it.
//!
//! In text form an active cell is `#` and an inactive cell is `.`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RecallError, Result};
use crate::vector::BipolarVector;

/// Text symbol for [`Cell::Active`].
pub const ACTIVE_SYMBOL: char = '#';

/// Text symbol for [`Cell::Inactive`].
pub const INACTIVE_SYMBOL: char = '.';

/// One of the two symbolic cell states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Active,
    Inactive,
}

impl Cell {
    /// Bipolar value of the cell.
    #[inline]
    pub fn spin(self) -> i8 {
        match self {
            Cell::Active => 1,
            Cell::Inactive => -1,
        }
    }

    /// Cell for a spin; any positive value is active.
    #[inline]
    pub fn from_spin(spin: i8) -> Self {
        if spin > 0 {
            Cell::Active
        } else {
            Cell::Inactive
        }
    }

    /// Text symbol of the cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Active => ACTIVE_SYMBOL,
            Cell::Inactive => INACTIVE_SYMBOL,
        }
    }

    /// Parse a text symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ACTIVE_SYMBOL => Some(Cell::Active),
            INACTIVE_SYMBOL => Some(Cell::Inactive),
            _ => None,
        }
    }
}

/// Rectangular array of cells, stored row by row.
///
/// A `Grid` may be built ragged; [`encode`] is where the shape invariant is
/// enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Wrap rows as-is.
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Parse `#`/`.` text, one row per line.
    ///
    /// Surrounding whitespace on each line is ignored and blank lines are
    /// skipped. Rows of differing width are accepted here and rejected by
    /// [`encode`].
    ///
    /// # Errors
    ///
    /// [`RecallError::InvalidSymbol`] for any other character,
    /// [`RecallError::EmptyGrid`] when no rows remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hopfield_recall::codec::Grid;
    ///
    /// let grid = Grid::parse("#.\n.#").unwrap();
    /// assert_eq!(grid.height(), 2);
    /// assert_eq!(grid.width(), 2);
    /// assert_eq!(grid.to_string(), "#.\n.#");
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row_idx = rows.len();
            let row = line
                .chars()
                .enumerate()
                .map(|(col, symbol)| {
                    Cell::from_symbol(symbol).ok_or(RecallError::InvalidSymbol {
                        row: row_idx,
                        col,
                        symbol,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(RecallError::EmptyGrid);
        }
        Ok(Self { rows })
    }

    /// Build a grid from string rows, e.g. `["##", "##"]`.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let joined = lines
            .iter()
            .map(|l| l.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        Self::parse(&joined)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the first row (0 for an empty grid).
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Borrow the rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of active cells.
    pub fn active_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Active)
            .count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Flatten a grid row-major into a bipolar vector.
///
/// # Errors
///
/// [`RecallError::EmptyGrid`] if the grid has no rows or a zero-width first
/// row; [`RecallError::Shape`] if any row's width differs from the first.
/// The shape check completes before any output is built.
///
/// # Examples
///
/// ```rust
/// use hopfield_recall::codec::{encode, Grid};
///
/// let grid = Grid::from_lines(&["##", "##"]).unwrap();
/// assert_eq!(encode(&grid).unwrap().as_slice(), &[1, 1, 1, 1]);
/// ```
pub fn encode(grid: &Grid) -> Result<BipolarVector> {
    let width = grid.width();
    if grid.height() == 0 || width == 0 {
        return Err(RecallError::EmptyGrid);
    }

    if let Some((row, r)) = grid
        .rows
        .iter()
        .enumerate()
        .find(|(_, r)| r.len() != width)
    {
        return Err(RecallError::Shape {
            row,
            expected: width,
            actual: r.len(),
        });
    }

    let spins = grid.rows.iter().flatten().map(|c| c.spin()).collect();
    Ok(BipolarVector::from_spins_unchecked(spins))
}

/// Reshape a bipolar vector into `height` rows of `width` cells.
///
/// # Errors
///
/// [`RecallError::EmptyGrid`] if either dimension is zero;
/// [`RecallError::DimensionMismatch`] if `vector.len() != height * width`
/// (an overflowing product is reported as `usize::MAX`).
pub fn decode(vector: &BipolarVector, height: usize, width: usize) -> Result<Grid> {
    if height == 0 || width == 0 {
        return Err(RecallError::EmptyGrid);
    }
    let expected = height.checked_mul(width).unwrap_or(usize::MAX);
    if vector.len() != expected {
        return Err(RecallError::DimensionMismatch {
            expected,
            actual: vector.len(),
        });
    }

    let rows = vector
        .as_slice()
        .chunks(width)
        .map(|chunk| chunk.iter().map(|&s| Cell::from_spin(s)).collect())
        .collect();
    Ok(Grid::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_all_active() {
        let grid = Grid::from_lines(&["##", "##"]).unwrap();
        let v = encode(&grid).unwrap();
        assert_eq!(v.as_slice(), &[1, 1, 1, 1]);
    }

    #[test]
    fn test_encode_row_major() {
        let grid = Grid::from_lines(&["#..", "..#"]).unwrap();
        let v = encode(&grid).unwrap();
        assert_eq!(v.as_slice(), &[1, -1, -1, -1, -1, 1]);
    }

    #[test]
    fn test_encode_ragged_grid() {
        let grid = Grid::from_lines(&["###", "##", "###"]).unwrap();
        assert_eq!(
            encode(&grid),
            Err(RecallError::Shape {
                row: 1,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_encode_empty_grid() {
        assert_eq!(encode(&Grid::new(Vec::new())), Err(RecallError::EmptyGrid));
        assert_eq!(
            encode(&Grid::new(vec![Vec::new()])),
            Err(RecallError::EmptyGrid)
        );
    }

    #[test]
    fn test_decode_round_trip() {
        let grid = Grid::from_lines(&["#.#.", ".#.#", "####"]).unwrap();
        let v = encode(&grid).unwrap();
        let back = decode(&v, grid.height(), grid.width()).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_decode_length_mismatch() {
        let v = BipolarVector::new(vec![1, -1, 1]).unwrap();
        assert_eq!(
            decode(&v, 2, 2),
            Err(RecallError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_decode_overflowing_shape() {
        let v = BipolarVector::new(vec![1, -1]).unwrap();
        assert_eq!(
            decode(&v, usize::MAX, 2),
            Err(RecallError::DimensionMismatch {
                expected: usize::MAX,
                actual: 2
            })
        );
    }

    #[test]
    fn test_decode_zero_dimension() {
        let v = BipolarVector::new(vec![1]).unwrap();
        assert_eq!(decode(&v, 0, 1), Err(RecallError::EmptyGrid));
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let result = Grid::parse("##\n#x");
        assert_eq!(
            result,
            Err(RecallError::InvalidSymbol {
                row: 1,
                col: 1,
                symbol: 'x'
            })
        );
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let grid = Grid::parse("\n  #.  \n\n.#\n").unwrap();
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.to_string(), "#.\n.#");
    }

    #[test]
    fn test_parse_empty_text() {
        assert_eq!(Grid::parse("\n \n"), Err(RecallError::EmptyGrid));
    }

    #[test]
    fn test_active_count() {
        let grid = Grid::from_lines(&["#.", "##"]).unwrap();
        assert_eq!(grid.active_count(), 3);
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::from_symbol('#'), Some(Cell::Active));
        assert_eq!(Cell::from_symbol('.'), Some(Cell::Inactive));
        assert_eq!(Cell::from_symbol('o'), None);
        assert_eq!(Cell::from_spin(-1).symbol(), '.');
    }
}
