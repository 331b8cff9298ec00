//! Grid sizing.
//!
//! The board deals `cols * rows` slots. Both dimensions are clamped to
//! `[2, 10]` on every mutation, so a grid can never degenerate below a
//! 2×2 deal or exceed what fits a screen. The square-cell computation is
//! the only layout math the engine carries; pixel placement is the
//! presentation layer's job.

use serde::{Deserialize, Serialize};

/// Smallest allowed dimension.
pub const MIN_DIM: u32 = 2;
/// Largest allowed dimension.
pub const MAX_DIM: u32 = 10;

/// Clamped grid dimensions.
///
/// ```
/// use pairup::grid::GridSize;
///
/// let grid = GridSize::new(50, 1);
/// assert_eq!((grid.cols(), grid.rows()), (10, 2));
/// assert_eq!(grid.cell_count(), 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    cols: u32,
    rows: u32,
}

impl GridSize {
    /// Create a grid, clamping both dimensions to `[MIN_DIM, MAX_DIM]`.
    #[must_use]
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols: cols.clamp(MIN_DIM, MAX_DIM),
            rows: rows.clamp(MIN_DIM, MAX_DIM),
        }
    }

    /// Column count.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Row count.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Set the column count, clamped.
    pub fn set_cols(&mut self, cols: u32) {
        self.cols = cols.clamp(MIN_DIM, MAX_DIM);
    }

    /// Set the row count, clamped.
    pub fn set_rows(&mut self, rows: u32) {
        self.rows = rows.clamp(MIN_DIM, MAX_DIM);
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        (self.cols * self.rows) as usize
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(MIN_DIM, MIN_DIM)
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

/// Padding around the grid container, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Insets {
    /// Left padding.
    pub left: f32,
    /// Right padding.
    pub right: f32,
    /// Top padding.
    pub top: f32,
    /// Bottom padding.
    pub bottom: f32,
}

/// Side length of the largest square cell that fits the container.
///
/// Spacing is applied between cells only; the result is floored to whole
/// pixels and never negative.
#[must_use]
pub fn square_cell_size(
    grid: GridSize,
    container_width: f32,
    container_height: f32,
    spacing: (f32, f32),
    padding: Insets,
) -> f32 {
    let cols = grid.cols() as f32;
    let rows = grid.rows() as f32;

    let avail_w = container_width - padding.left - padding.right - spacing.0 * (cols - 1.0);
    let avail_h = container_height - padding.top - padding.bottom - spacing.1 * (rows - 1.0);

    let cell_w = avail_w / cols;
    let cell_h = avail_h / rows;

    cell_w.min(cell_h).max(0.0).floor()
}
