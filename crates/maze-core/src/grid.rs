//! A rectangular maze grid of [`Cell`] values.
//!
//! Cells are stored row-major in a single `Vec`. A [`Grid`] compares by
//! content; callers that need a scratch copy clone it.

use crate::cell::Cell;
use crate::geom::Position;
use std::fmt;
use std::ops::Index;

/// A position query fell outside the grid.
///
/// This is a contract violation by the caller rather than a runtime
/// condition to recover from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    pub pos: Position,
    pub rows: i32,
    pub cols: i32,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position {} is outside the {}x{} grid",
            self.pos, self.rows, self.cols
        )
    }
}

impl std::error::Error for OutOfBounds {}

/// A 2D maze grid with fixed extents `rows` x `cols`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr")
)]
pub struct Grid {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
}

/// Unchecked wire form of [`Grid`]; deserialization goes through
/// [`Grid::from_cells`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    rows: i32,
    cols: i32,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = String;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let GridRepr { rows, cols, cells } = repr;
        let len = cells.len();
        Grid::from_cells(rows, cols, cells)
            .ok_or_else(|| format!("{len} cells do not fill a {rows}x{cols} grid"))
    }
}

impl Grid {
    /// Number of cells in a `rows` x `cols` grid, or `None` if an extent is
    /// negative or the product does not fit in `usize`.
    pub fn cell_count(rows: i32, cols: i32) -> Option<usize> {
        let rows = usize::try_from(rows).ok()?;
        let cols = usize::try_from(cols).ok()?;
        rows.checked_mul(cols)
    }

    /// Create a new grid filled with [`Cell::Free`].
    ///
    /// Negative extents are clamped to zero.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let Some(len) = Self::cell_count(rows, cols) else {
            panic!("a {rows}x{cols} grid does not fit in memory");
        };
        Self {
            rows,
            cols,
            cells: vec![Cell::Free; len],
        }
    }

    /// Build a grid from row-major cells.
    ///
    /// Returns `None` if an extent is negative or `cells.len()` is not
    /// `rows * cols`.
    pub fn from_cells(rows: i32, cols: i32, cells: Vec<Cell>) -> Option<Self> {
        if Self::cell_count(rows, cols) != Some(cells.len()) {
            return None;
        }
        Some(Self { rows, cols, cells })
    }

    /// Build a grid by calling `f` on every position in row-major order.
    pub fn from_fn(rows: i32, cols: i32, mut f: impl FnMut(Position) -> Cell) -> Self {
        let mut grid = Self::new(rows, cols);
        let cols = grid.cols.max(1) as usize;
        for (i, cell) in grid.cells.iter_mut().enumerate() {
            *cell = f(Position::new((i / cols) as i32, (i % cols) as i32));
        }
        grid
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `pos` lies inside `[0, rows) x [0, cols)`.
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    /// Row-major index of `pos`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some(pos.row as usize * self.cols as usize + pos.col as usize)
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn position_of(&self, idx: usize) -> Position {
        let cols = self.cols.max(1) as usize;
        Position::new((idx / cols) as i32, (idx % cols) as i32)
    }

    fn out_of_bounds(&self, pos: Position) -> OutOfBounds {
        OutOfBounds {
            pos,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Get the cell at a position, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, pos: Position) -> Option<Cell> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Get the cell at a position, failing with [`OutOfBounds`].
    pub fn cell_at(&self, pos: Position) -> Result<Cell, OutOfBounds> {
        self.at(pos).ok_or_else(|| self.out_of_bounds(pos))
    }

    /// Set the cell at a position.
    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<(), OutOfBounds> {
        let i = self.index_of(pos).ok_or_else(|| self.out_of_bounds(pos))?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Fill the entire grid with the given cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// True iff `pos` is in bounds and not an obstacle.
    #[inline]
    pub fn is_traversable(&self, pos: Position) -> bool {
        self.at(pos).is_some_and(Cell::is_traversable)
    }

    /// Traversable 4-neighbours of `pos` in north, south, west, east order.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(pos, &mut buf);
        buf
    }

    /// Like [`neighbors`](Self::neighbors) but appends into `buf`.
    pub fn neighbors_into(&self, pos: Position, buf: &mut Vec<Position>) {
        for n in pos.neighbors_4() {
            if self.is_traversable(n) {
                buf.push(n);
            }
        }
    }

    /// First position holding `cell` in row-major order.
    pub fn locate(&self, cell: Cell) -> Option<Position> {
        self.cells
            .iter()
            .position(|&c| c == cell)
            .map(|i| self.position_of(i))
    }

    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over `(Position, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (self.position_of(i), c))
    }

    /// Borrow one row of cells. Returns `None` if `row` is out of range.
    pub fn row(&self, row: i32) -> Option<&[Cell]> {
        if row < 0 || row >= self.rows {
            return None;
        }
        let cols = self.cols as usize;
        let start = row as usize * cols;
        Some(&self.cells[start..start + cols])
    }

    /// Iterate over the rows as cell slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols.max(1) as usize)
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    /// Panics if `pos` is out of bounds.
    fn index(&self, pos: Position) -> &Cell {
        match self.index_of(pos) {
            Some(i) => &self.cells[i],
            None => panic!("{}", self.out_of_bounds(pos)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn new_is_all_free() {
        let g = Grid::new(3, 4);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 4);
        assert_eq!(g.len(), 12);
        assert_eq!(g.count(Cell::Free), 12);
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::new(4, 4);
        g.set(p(2, 3), Cell::Obstacle).unwrap();
        assert_eq!(g.at(p(2, 3)), Some(Cell::Obstacle));
        assert_eq!(g[p(2, 3)], Cell::Obstacle);
        assert_eq!(g.at(p(0, 0)), Some(Cell::Free));
        assert_eq!(g.at(p(4, 0)), None);
    }

    #[test]
    fn cell_at_out_of_bounds() {
        let g = Grid::new(2, 3);
        let err = g.cell_at(p(-1, 0)).unwrap_err();
        assert_eq!(
            err,
            OutOfBounds {
                pos: p(-1, 0),
                rows: 2,
                cols: 3
            }
        );
        assert!(g.cell_at(p(1, 3)).is_err());
        assert!(g.cell_at(p(1, 2)).is_ok());
    }

    #[test]
    fn set_out_of_bounds_fails() {
        let mut g = Grid::new(2, 2);
        assert!(g.set(p(2, 0), Cell::Start).is_err());
        assert_eq!(g.count(Cell::Start), 0);
    }

    #[test]
    #[should_panic(expected = "outside the 2x2 grid")]
    fn index_panics_out_of_bounds() {
        let g = Grid::new(2, 2);
        let _ = g[p(0, 2)];
    }

    #[test]
    fn traversable() {
        let mut g = Grid::new(2, 2);
        g.set(p(0, 1), Cell::Obstacle).unwrap();
        g.set(p(1, 1), Cell::End).unwrap();
        assert!(g.is_traversable(p(0, 0)));
        assert!(!g.is_traversable(p(0, 1)));
        assert!(g.is_traversable(p(1, 1)));
        assert!(!g.is_traversable(p(-1, 0)));
        assert!(!g.is_traversable(p(0, 2)));
    }

    #[test]
    fn neighbors_order_and_filtering() {
        let mut g = Grid::new(3, 3);
        assert_eq!(
            g.neighbors(p(1, 1)),
            vec![p(0, 1), p(2, 1), p(1, 0), p(1, 2)]
        );
        g.set(p(2, 1), Cell::Obstacle).unwrap();
        assert_eq!(g.neighbors(p(1, 1)), vec![p(0, 1), p(1, 0), p(1, 2)]);
        // Corner: north and west fall off the grid.
        assert_eq!(g.neighbors(p(0, 0)), vec![p(1, 0), p(0, 1)]);
    }

    #[test]
    fn locate_first_in_row_major() {
        let mut g = Grid::new(3, 3);
        assert_eq!(g.locate(Cell::Start), None);
        g.set(p(2, 0), Cell::End).unwrap();
        g.set(p(1, 2), Cell::End).unwrap();
        assert_eq!(g.locate(Cell::End), Some(p(1, 2)));
        assert_eq!(g.count(Cell::End), 2);
    }

    #[test]
    fn iter_row_major() {
        let mut g = Grid::new(2, 3);
        g.set(p(0, 1), Cell::Start).unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (p(0, 1), Cell::Start));
        assert_eq!(items[3], (p(1, 0), Cell::Free));
    }

    #[test]
    fn rows_as_slices() {
        let mut g = Grid::new(2, 2);
        g.set(p(1, 0), Cell::Obstacle).unwrap();
        assert_eq!(g.row(1), Some(&[Cell::Obstacle, Cell::Free][..]));
        assert_eq!(g.row(2), None);
        assert_eq!(g.iter_rows().count(), 2);
    }

    #[test]
    fn from_cells_checks_length() {
        assert!(Grid::from_cells(2, 2, vec![Cell::Free; 3]).is_none());
        assert!(Grid::from_cells(-2, -2, vec![Cell::Free; 4]).is_none());
        let g = Grid::from_cells(1, 2, vec![Cell::Start, Cell::End]).unwrap();
        assert_eq!(g.locate(Cell::End), Some(p(0, 1)));
    }

    #[test]
    fn cell_count_does_not_wrap() {
        assert_eq!(Grid::cell_count(3, 4), Some(12));
        assert_eq!(Grid::cell_count(0, 7), Some(0));
        assert_eq!(Grid::cell_count(-1, 7), None);
        // Past i32::MAX, which an i32 product would wrap.
        #[cfg(target_pointer_width = "64")]
        assert_eq!(Grid::cell_count(50_000, 50_000), Some(2_500_000_000));
    }

    #[test]
    fn from_fn_visits_row_major() {
        let mut seen = Vec::new();
        let g = Grid::from_fn(2, 3, |pos| {
            seen.push(pos);
            if pos == p(1, 2) { Cell::End } else { Cell::Free }
        });
        assert_eq!(seen.len(), 6);
        assert_eq!(seen[3], p(1, 0));
        assert_eq!(g.locate(Cell::End), Some(p(1, 2)));
        assert_eq!(g.index_of(p(1, 2)), Some(5));
    }
}
