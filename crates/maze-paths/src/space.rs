use maze_core::{Grid, Position};

// ---------------------------------------------------------------------------
// Internal node record for A* searches
// ---------------------------------------------------------------------------

/// Per-position search state, owned by a single search invocation.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) seen: bool,
    pub(crate) closed: bool,
}

/// Parent sentinel for the start node.
pub(crate) const NO_PARENT: usize = usize::MAX;

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: NO_PARENT,
            seen: false,
            closed: false,
        }
    }
}

/// Frontier entry: node index ordered by `f`, ties broken by insertion order.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the entry pushed earliest.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// The rectangle `[0, rows) x [0, cols)` a search runs over.
///
/// `SearchSpace` only knows extents and the flat-index mapping. Every query
/// allocates its own working state and drops it on return, so a space can be
/// shared freely and calls never influence each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSpace {
    rows: i32,
    cols: i32,
}

impl SearchSpace {
    /// Create a search space with the given extents. Negative extents are
    /// clamped to zero.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
        }
    }

    /// The search space covering `grid`.
    pub fn of(grid: &Grid) -> Self {
        Self::new(grid.rows(), grid.cols())
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

    /// Total number of positions.
    #[inline]
    pub fn len(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the space holds no positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Position` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Position) -> Option<usize> {
        if p.row < 0 || p.row >= self.rows || p.col < 0 || p.col >= self.cols {
            return None;
        }
        Some((p.row as usize) * (self.cols as usize) + p.col as usize)
    }

    /// Convert a flat index back to a `Position`.
    #[inline]
    pub(crate) fn position(&self, idx: usize) -> Position {
        let cols = self.cols as usize;
        Position::new((idx / cols) as i32, (idx % cols) as i32)
    }
}
