use crate::pipeline::grid::Grid;

/// A grid byte that survived the parity filter, with its original linear position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Cell {
    /// The (odd) grid byte.
    pub value: u8,
    /// Linear position in the grid.
    pub index: usize,
}

/// Keep odd-valued grid bytes in ascending index order.
pub fn odd_cells(grid: &Grid) -> Vec<Cell> {
    grid.as_bytes()
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value % 2 == 1)
        .map(|(index, &value)| Cell { value, index })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/filter.rs"]
mod tests;
