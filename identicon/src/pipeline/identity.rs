use crate::foundation::core::{Region, Rgb8};
use crate::pipeline::digest::{Digest, digest};
use crate::pipeline::filter::{Cell, odd_cells};
use crate::pipeline::grid::{Grid, expand_grid};
use crate::pipeline::layout::layout_regions;

/// Everything derived for one name, filled in one field per stage.
///
/// Created by [`Identity::hash_input`] (name + digest); the remaining fields hold their empty
/// defaults until the corresponding stage in [`STAGES`] has run.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Identity {
    /// The input name; also the base name of the output file.
    pub name: String,
    /// MD5 of the name's bytes.
    pub digest: Digest,
    /// Digest bytes `[0, 3)`.
    pub color: Rgb8,
    /// Mirror-symmetric expansion of the digest.
    pub grid: Grid,
    /// Odd-valued grid bytes with their grid indices.
    pub cells: Vec<Cell>,
    /// One square per cell, same order.
    pub regions: Vec<Region>,
}

/// A pipeline stage: takes the record, sets one field, hands it back.
pub type Stage = fn(Identity) -> Identity;

/// Stages that follow hashing, in application order.
pub const STAGES: [Stage; 4] = [colour, build_grid, filter_odd_cells, build_regions];

impl Identity {
    /// Digest stage: start a record from raw input bytes.
    pub fn hash_input(input: &[u8]) -> Self {
        Self {
            name: String::from_utf8_lossy(input).into_owned(),
            digest: digest(input),
            color: Rgb8::default(),
            grid: Grid::default(),
            cells: Vec::new(),
            regions: Vec::new(),
        }
    }

    /// Run the full pipeline for `name`.
    #[tracing::instrument(level = "debug")]
    pub fn derive(name: &str) -> Self {
        let identity = pipe(Self::hash_input(name.as_bytes()), &STAGES);
        tracing::debug!(
            digest = %identity.digest.to_hex(),
            color = %identity.color.to_hex(),
            grid_len = identity.grid.len(),
            cells = identity.cells.len(),
            "derived identity"
        );
        identity
    }
}

/// Apply `stages` left to right.
pub fn pipe(identity: Identity, stages: &[Stage]) -> Identity {
    stages.iter().fold(identity, |acc, stage| stage(acc))
}

/// Palette stage: sets [`Identity::color`] from the digest.
pub fn colour(mut identity: Identity) -> Identity {
    identity.color = Rgb8::from_digest(&identity.digest);
    identity
}

/// Grid stage: sets [`Identity::grid`] from the digest.
pub fn build_grid(mut identity: Identity) -> Identity {
    identity.grid = expand_grid(identity.digest.as_bytes());
    identity
}

/// Filter stage: sets [`Identity::cells`] from the grid.
pub fn filter_odd_cells(mut identity: Identity) -> Identity {
    identity.cells = odd_cells(&identity.grid);
    identity
}

/// Layout stage: sets [`Identity::regions`] from the cells.
pub fn build_regions(mut identity: Identity) -> Identity {
    identity.regions = layout_regions(&identity.cells);
    identity
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/identity.rs"]
mod tests;
