use crate::foundation::core::{Point, Region};
use crate::pipeline::filter::Cell;
use crate::pipeline::grid::ROW_WIDTH;

/// Edge length of one cell's square, in canvas pixels.
pub const CELL_SIZE: u32 = 50;

impl Region {
    /// Square covering grid position `index` (row-major, [`ROW_WIDTH`] columns).
    ///
    /// Indices past the fifth row land below a 250px canvas; they are not clipped here.
    /// Coordinates saturate at `u32::MAX`, so absurd indices yield a degenerate region
    /// instead of wrapping back onto the canvas.
    pub fn for_cell_index(index: usize) -> Self {
        // column < ROW_WIDTH, so the cast is lossless.
        let column = (index % ROW_WIDTH) as u32;
        let row = u32::try_from(index / ROW_WIDTH).unwrap_or(u32::MAX);
        let top_left = Point::new(column * CELL_SIZE, row.saturating_mul(CELL_SIZE));
        Self {
            top_left,
            bottom_right: Point::new(
                top_left.x + CELL_SIZE,
                top_left.y.saturating_add(CELL_SIZE),
            ),
        }
    }
}

/// One region per cell, in cell order.
pub fn layout_regions(cells: &[Cell]) -> Vec<Region> {
    cells
        .iter()
        .map(|cell| Region::for_cell_index(cell.index))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/layout.rs"]
mod tests;
