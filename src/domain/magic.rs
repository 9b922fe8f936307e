//! Magic squares: Siamese-method generator and validator

use std::fmt;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// Common line sum of an order-`n` magic square holding `1..=n²`.
pub fn magic_constant(order: usize) -> i64 {
    let n = order as i64;
    n * (n * n + 1) / 2
}

fn checked_sum(values: impl IntoIterator<Item = i64>) -> DomainResult<i64> {
    values
        .into_iter()
        .try_fold(0i64, |acc, v| acc.checked_add(v).ok_or(DomainError::SumOverflow))
}

/// Row, column and diagonal sums of a square grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sums {
    pub rows: Vec<i64>,
    pub cols: Vec<i64>,
    /// Top-left to bottom-right
    pub diagonal: i64,
    /// Top-right to bottom-left
    pub anti_diagonal: i64,
}

impl Sums {
    fn of(rows: &[Vec<i64>]) -> DomainResult<Self> {
        let n = rows.len();
        let row_sums = rows
            .iter()
            .map(|r| checked_sum(r.iter().copied()))
            .collect::<DomainResult<Vec<_>>>()?;
        let col_sums = (0..n)
            .map(|c| checked_sum(rows.iter().map(|r| r[c])))
            .collect::<DomainResult<Vec<_>>>()?;
        let diagonal = checked_sum((0..n).map(|i| rows[i][i]))?;
        let anti_diagonal = checked_sum((0..n).map(|i| rows[i][n - 1 - i]))?;
        Ok(Self {
            rows: row_sums,
            cols: col_sums,
            diagonal,
            anti_diagonal,
        })
    }

    /// All rows equal, all columns equal, and both diagonals equal the row sum.
    pub fn is_magic(&self) -> bool {
        let Some(&target) = self.rows.first() else {
            return false;
        };
        let rows = self.rows.iter().all_equal();
        let cols = self.cols.iter().all_equal();
        rows && cols && self.diagonal == target && self.anti_diagonal == target
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Magic,
    NotMagic,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Magic => f.write_str("Magic"),
            Verdict::NotMagic => f.write_str("Not magic"),
        }
    }
}

/// Outcome of checking a grid for the magic property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicReport {
    pub sums: Sums,
    pub verdict: Verdict,
}

impl From<Sums> for MagicReport {
    fn from(sums: Sums) -> Self {
        let verdict = if sums.is_magic() {
            Verdict::Magic
        } else {
            Verdict::NotMagic
        };
        Self { sums, verdict }
    }
}

/// Checks an arbitrary grid. Fails if it is empty, not square, or a line sum
/// does not fit in an `i64`.
pub fn validate(rows: &[Vec<i64>]) -> DomainResult<MagicReport> {
    check_square(rows)?;
    let report = MagicReport::from(Sums::of(rows)?);
    debug!("validate: order={} verdict={}", rows.len(), report.verdict);
    Ok(report)
}

fn check_square(rows: &[Vec<i64>]) -> DomainResult<()> {
    let expected = rows.len();
    if expected == 0 {
        return Err(DomainError::EmptyGrid);
    }
    match rows.iter().position(|r| r.len() != expected) {
        Some(row) => Err(DomainError::NotSquare {
            row,
            len: rows[row].len(),
            expected,
        }),
        None => Ok(()),
    }
}

/// A square grid of integers, owned by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicSquare {
    cells: Vec<Vec<i64>>,
}

impl MagicSquare {
    /// Fills an odd-order grid with `1..=n²` using the Siamese method.
    ///
    /// Starts in the middle column of the last row and steps diagonally
    /// down-right with wraparound. When that cell is taken it moves one row
    /// up instead, wrapping row 0 to row n-1.
    #[instrument(level = "debug")]
    pub fn siamese(order: usize) -> DomainResult<Self> {
        if order == 0 {
            return Err(DomainError::EmptyOrder);
        }
        if order % 2 == 0 {
            return Err(DomainError::EvenOrder(order));
        }

        let n = order;
        let mut cells = vec![vec![0i64; n]; n];
        let (mut row, mut col) = (n - 1, n / 2);

        for k in 1..=n * n {
            cells[row][col] = k as i64;
            let (next_row, next_col) = ((row + 1) % n, (col + 1) % n);
            if cells[next_row][next_col] == 0 {
                row = next_row;
                col = next_col;
            } else {
                row = (row + n - 1) % n;
            }
        }

        Ok(Self { cells })
    }

    /// Wraps caller-supplied rows, rejecting empty or ragged grids.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> DomainResult<Self> {
        check_square(&rows)?;
        Ok(Self { cells: rows })
    }

    pub fn order(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> &[Vec<i64>] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn magic_constant(&self) -> i64 {
        magic_constant(self.order())
    }

    pub fn sums(&self) -> DomainResult<Sums> {
        Sums::of(&self.cells)
    }

    pub fn validate(&self) -> DomainResult<MagicReport> {
        self.sums().map(MagicReport::from)
    }

    /// One line per row, each cell right-aligned to `cell_width` and followed by a space.
    pub fn show(&self, cell_width: usize) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|v| format!("{:>width$} ", v, width = cell_width))
                    .collect::<String>()
            })
            .join("\n")
    }
}

impl fmt::Display for MagicSquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show(3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_order_three_when_siamese_then_matches_known_square() {
        let square = MagicSquare::siamese(3).unwrap();
        assert_eq!(
            square.rows(),
            &[vec![4, 9, 2], vec![3, 5, 7], vec![8, 1, 6]]
        );
    }

    #[test]
    fn given_order_one_when_siamese_then_single_cell() {
        let square = MagicSquare::siamese(1).unwrap();
        assert_eq!(square.rows(), &[vec![1]]);
        assert_eq!(square.validate().unwrap().verdict, Verdict::Magic);
    }

    #[test]
    fn given_even_or_zero_order_when_siamese_then_error() {
        assert_eq!(MagicSquare::siamese(4), Err(DomainError::EvenOrder(4)));
        assert_eq!(MagicSquare::siamese(0), Err(DomainError::EmptyOrder));
    }

    #[test]
    fn given_equal_rows_and_cols_but_bad_diagonal_when_validate_then_not_magic() {
        // Latin square: rows and columns agree, diagonals do not.
        let rows = vec![vec![1, 2, 3], vec![2, 3, 1], vec![3, 1, 2]];
        let report = validate(&rows).unwrap();
        assert_eq!(report.sums.rows, vec![6, 6, 6]);
        assert_eq!(report.sums.cols, vec![6, 6, 6]);
        assert_eq!(report.sums.diagonal, 6);
        assert_eq!(report.sums.anti_diagonal, 9);
        assert_eq!(report.verdict, Verdict::NotMagic);
    }

    #[test]
    fn given_ragged_grid_when_validate_then_not_square() {
        let rows = vec![vec![1, 2], vec![3]];
        assert_eq!(
            validate(&rows),
            Err(DomainError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(validate(&[]), Err(DomainError::EmptyGrid));
    }

    #[test]
    fn given_cells_near_i64_max_when_validate_then_sum_overflow() {
        let rows = vec![vec![i64::MAX, 1], vec![1, 1]];
        assert_eq!(validate(&rows), Err(DomainError::SumOverflow));

        let square = MagicSquare::from_rows(vec![vec![i64::MIN, -1], vec![0, 0]]).unwrap();
        assert_eq!(square.validate(), Err(DomainError::SumOverflow));
    }

    #[test]
    fn given_square_when_show_then_right_aligned_cells() {
        let square = MagicSquare::siamese(3).unwrap();
        assert_eq!(square.show(3), "  4   9   2 \n  3   5   7 \n  8   1   6 ");
    }
}
