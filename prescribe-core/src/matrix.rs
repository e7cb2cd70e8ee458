//! Alignment matrix builder
//!
//! Fills the weighted Levenshtein cost table together with a parallel table of
//! the operation that produced each optimum. When several candidates tie the
//! winner is chosen in the order Insert, Delete, then Replace/Match.

use crate::error::{AlignError, AlignResult};
use crate::types::{CostConfig, Operation};
use serde::{Deserialize, Serialize};

/// Dense row-major grid.
///
/// Deserialization goes through [`Grid::from_cells`], so a grid whose cell
/// count disagrees with its dimensions is rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid<T>", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

#[derive(Deserialize)]
struct RawGrid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = String;

    fn try_from(raw: RawGrid<T>) -> Result<Self, Self::Error> {
        let (rows, cols, len) = (raw.rows, raw.cols, raw.cells.len());
        Grid::from_cells(raw.rows, raw.cols, raw.cells)
            .ok_or_else(|| format!("{} cells do not fill a {}x{} grid", len, rows, cols))
    }
}

impl<T: Clone> Grid<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }
}

impl<T> Grid<T> {
    /// Wrap existing row-major cells. Returns `None` for an empty grid or if
    /// the cell count does not match the dimensions.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<T>) -> Option<Self> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols) != Some(cells.len()) {
            return None;
        }
        Some(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            self.cells.get(row * self.cols..(row + 1) * self.cols)
        } else {
            None
        }
    }

    fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.cols + col] = value;
    }
}

impl<T: Copy> Grid<T> {
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }
}

pub type CostMatrix = Grid<u32>;
pub type ActionMatrix = Grid<Operation>;

/// Both tables produced for one (original, final) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentMatrix {
    costs: CostMatrix,
    actions: ActionMatrix,
}

impl AlignmentMatrix {
    pub fn cost_matrix(&self) -> &CostMatrix {
        &self.costs
    }

    pub fn action_matrix(&self) -> &ActionMatrix {
        &self.actions
    }

    pub fn into_action_matrix(self) -> ActionMatrix {
        self.actions
    }

    /// Minimum cost of the whole transformation, the bottom-right cell.
    pub fn distance(&self) -> u32 {
        self.costs.at(self.costs.rows - 1, self.costs.cols - 1)
    }
}

/// Build the cost and action matrices using `equals` to compare elements.
pub fn build<E, F>(
    original: &[E],
    target: &[E],
    costs: &CostConfig,
    equals: F,
) -> AlignResult<AlignmentMatrix>
where
    F: Fn(&E, &E) -> bool,
{
    costs.validate()?;

    let rows = original.len() + 1;
    let cols = target.len() + 1;
    log::debug!("Building {}x{} alignment matrix", rows, cols);

    // Candidates are summed in u64; only a cell value that does not fit is an error.
    let fit = |value: u64| {
        u32::try_from(value).map_err(|_| {
            AlignError::invalid_costs(format!(
                "costs overflow a {}x{} matrix (cell value {})",
                rows, cols, value
            ))
        })
    };

    let mut matrix = Grid::filled(rows, cols, 0u32);
    let mut actions = Grid::filled(rows, cols, Operation::Delete);

    for i in 0..rows {
        matrix.set(i, 0, fit(u64::from(costs.delete_cost) * i as u64)?);
        actions.set(i, 0, Operation::Delete);
    }

    for j in 0..cols {
        matrix.set(0, j, fit(u64::from(costs.insert_cost) * j as u64)?);
        actions.set(0, j, Operation::Insert);
    }

    for (i, source) in original.iter().enumerate().map(|(i, e)| (i + 1, e)) {
        for (j, wanted) in target.iter().enumerate().map(|(j, e)| (j + 1, e)) {
            let diagonal_op = if equals(source, wanted) {
                Operation::Match
            } else {
                Operation::Replace
            };

            let insert = u64::from(matrix.at(i, j - 1)) + u64::from(costs.insert_cost);
            let delete = u64::from(matrix.at(i - 1, j)) + u64::from(costs.delete_cost);
            let diagonal =
                u64::from(matrix.at(i - 1, j - 1)) + u64::from(costs.cost_of(diagonal_op));

            let optimal = insert.min(delete).min(diagonal);
            let action = if optimal == insert {
                Operation::Insert
            } else if optimal == delete {
                Operation::Delete
            } else {
                diagonal_op
            };

            matrix.set(i, j, fit(optimal)?);
            actions.set(i, j, action);
        }
    }

    Ok(AlignmentMatrix {
        costs: matrix,
        actions,
    })
}

/// [`build`] with element equality.
pub fn build_matrix<E: PartialEq>(
    original: &[E],
    target: &[E],
    costs: &CostConfig,
) -> AlignResult<AlignmentMatrix> {
    build(original, target, costs, |a, b| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_borders() {
        let m = build_matrix(&chars("abc"), &chars("wxyz"), &CostConfig::default()).unwrap();
        let costs = m.cost_matrix();
        assert_eq!(costs.rows(), 4);
        assert_eq!(costs.cols(), 5);
        assert_eq!(costs.row(0), Some(&[0, 3, 6, 9, 12][..]));
        assert_eq!(costs.row(4), None);
        for i in 0..4 {
            assert_eq!(costs.get(i, 0), Some(&(2 * i as u32)));
            if i > 0 {
                assert_eq!(m.action_matrix().get(i, 0), Some(&Operation::Delete));
            }
        }
        for j in 0..5 {
            assert_eq!(m.action_matrix().get(0, j), Some(&Operation::Insert));
        }
    }

    #[test]
    fn test_empty_sequences() {
        let empty: Vec<char> = Vec::new();
        let m = build_matrix(&empty, &empty, &CostConfig::default()).unwrap();
        assert_eq!(m.distance(), 0);
        assert_eq!(m.cost_matrix().rows(), 1);
        assert_eq!(m.cost_matrix().cols(), 1);

        let m = build_matrix(&empty, &chars("abc"), &CostConfig::default()).unwrap();
        assert_eq!(m.distance(), 9);

        let m = build_matrix(&chars("abc"), &empty, &CostConfig::default()).unwrap();
        assert_eq!(m.distance(), 6);
    }

    #[test]
    fn test_tie_prefers_insert_then_delete() {
        // (2,1) ties Delete and Match, (1,2) ties Insert and Match
        let m = build_matrix(&chars("aa"), &chars("aa"), &CostConfig::default()).unwrap();
        let actions = m.action_matrix();
        assert_eq!(actions.get(2, 1), Some(&Operation::Delete));
        assert_eq!(actions.get(1, 2), Some(&Operation::Insert));
        assert_eq!(actions.get(1, 1), Some(&Operation::Match));
        assert_eq!(actions.get(2, 2), Some(&Operation::Match));
        assert_eq!(m.distance(), 0);
    }

    #[test]
    fn test_three_way_tie_picks_insert() {
        let m = build_matrix(&chars("ab"), &chars("ba"), &CostConfig::unit()).unwrap();
        assert_eq!(m.cost_matrix().get(2, 2), Some(&2));
        assert_eq!(m.action_matrix().get(2, 2), Some(&Operation::Insert));
    }

    #[test]
    fn test_custom_equality() {
        let case_insensitive = |a: &char, b: &char| a.eq_ignore_ascii_case(b);
        let m = build(&chars("Cat"), &chars("cAT"), &CostConfig::default(), case_insensitive).unwrap();
        assert_eq!(m.distance(), 0);
    }

    #[test]
    fn test_rejects_invalid_costs() {
        let costs = CostConfig::unit().with_match_cost(5);
        assert!(build_matrix(&chars("a"), &chars("a"), &costs).is_err());
    }

    #[test]
    fn test_build_is_pure() {
        let a = chars("electrical engineering");
        let b = chars("computer science");
        let first = build_matrix(&a, &b, &CostConfig::default()).unwrap();
        let second = build_matrix(&a, &b, &CostConfig::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_grid_from_cells() {
        assert!(Grid::from_cells(2, 2, vec![0u32; 3]).is_none());
        assert!(Grid::<u32>::from_cells(0, 3, Vec::new()).is_none());
        let grid = Grid::from_cells(1, 3, vec![1u32, 2, 3]).unwrap();
        assert_eq!(grid.get(0, 2), Some(&3));
        assert_eq!(grid.get(1, 0), None);
        assert_eq!(grid.row(1), None);
    }

    #[test]
    fn test_deserialize_rejects_short_grid() {
        let short = serde_json::from_str::<ActionMatrix>(r#"{"rows":2,"cols":2,"cells":["Insert"]}"#);
        assert!(short.is_err());

        let empty = serde_json::from_str::<CostMatrix>(r#"{"rows":0,"cols":0,"cells":[]}"#);
        assert!(empty.is_err());

        let grid: CostMatrix = serde_json::from_str(r#"{"rows":1,"cols":2,"cells":[0,3]}"#).unwrap();
        assert_eq!(grid.row(0), Some(&[0, 3][..]));
    }

    #[test]
    fn test_match_cost_counts_along_the_diagonal() {
        let costs = CostConfig::default().with_match_cost(1);
        let m = build_matrix(&chars("aa"), &chars("aa"), &costs).unwrap();
        assert_eq!(m.distance(), 2);
        assert_eq!(m.action_matrix().get(2, 2), Some(&Operation::Match));
        assert_eq!(m.action_matrix().get(1, 1), Some(&Operation::Match));
    }

    #[test]
    fn test_overflowing_costs_rejected() {
        let huge = 1u32 << 31;
        let costs = CostConfig::default()
            .with_replace_cost(huge)
            .with_insert_cost(huge)
            .with_delete_cost(huge);
        assert!(matches!(
            build_matrix(&chars("ab"), &chars(""), &costs),
            Err(AlignError::InvalidCosts { .. })
        ));

        // One step at the limit still fits
        let m = build_matrix(&chars("a"), &chars(""), &costs).unwrap();
        assert_eq!(m.distance(), huge);
    }
}
