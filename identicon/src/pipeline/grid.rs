/// Cells per grid row; each expanded window becomes one row.
pub const ROW_WIDTH: usize = 5;

const WINDOW: usize = 3;

/// Mirror-symmetric byte grid, row-major with [`ROW_WIDTH`] cells per row.
///
/// Every row is a palindrome `[b0, b1, b2, b1, b0]`; column 2 is the axis of symmetry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Grid(Vec<u8>);

impl Grid {
    /// All cells, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of cells; always a multiple of [`ROW_WIDTH`].
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no window was expanded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of [`ROW_WIDTH`]-cell rows.
    pub fn row_count(&self) -> usize {
        self.0.len() / ROW_WIDTH
    }

    /// Iterate rows of [`ROW_WIDTH`] cells.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.0.chunks_exact(ROW_WIDTH)
    }
}

/// Expand a digest into a [`Grid`].
///
/// Walks `bytes` in non-overlapping 3-byte windows. A window is only taken while one further
/// byte of lookahead also fits (`start + 3 <= len - 1`), so the final byte never starts or
/// completes a window on its own. A 16-byte digest yields windows at 0, 3, 6, 9 and 12.
pub fn expand_grid(bytes: &[u8]) -> Grid {
    let windows = bytes.len().saturating_sub(1) / WINDOW;
    let mut cells = Vec::with_capacity(windows * ROW_WIDTH);

    let mut start = 0;
    while start + WINDOW < bytes.len() {
        let [b0, b1, b2] = [bytes[start], bytes[start + 1], bytes[start + 2]];
        cells.extend_from_slice(&[b0, b1, b2, b1, b0]);
        start += WINDOW;
    }

    Grid(cells)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/grid.rs"]
mod tests;
