//! Deterministic identicons.
//!
//! A name is turned into a small, left-right mirror-symmetric pattern of colored squares and
//! rasterized to a PNG. Derivation is a fixed sequence of pure stages over one [`Identity`]
//! record:
//!
//! 1. **Digest**: name bytes -> 16-byte MD5 ([`Identity::hash_input`])
//! 2. **Palette**: digest bytes `[0, 3)` -> RGB color
//! 3. **Grid**: digest -> rows of `[b0, b1, b2, b1, b0]`
//! 4. **Filter**: keep odd grid bytes with their indices
//! 5. **Layout**: grid index -> 50x50 square on a 5-column grid
//!
//! Rendering ([`CpuBackend`]) and output ([`write_png`]) sit downstream and are the only
//! fallible parts. [`generate()`] runs everything for one name.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod generate;
mod pipeline;

/// PNG encoding.
pub mod encode;
/// Rasterization backends.
pub mod render;

pub use crate::encode::png::{ensure_parent_dir, png_path, write_png};
pub use crate::foundation::core::{Canvas, Point, Rect, Region, Rgb8};
pub use crate::foundation::error::{IdenticonError, IdenticonResult};
pub use crate::generate::{GenerateOpts, Generated, generate};
pub use crate::pipeline::digest::{DIGEST_LEN, Digest, digest};
pub use crate::pipeline::filter::{Cell, odd_cells};
pub use crate::pipeline::grid::{Grid, ROW_WIDTH, expand_grid};
pub use crate::pipeline::identity::{
    Identity, STAGES, Stage, build_grid, build_regions, colour, filter_odd_cells, pipe,
};
pub use crate::pipeline::layout::{CELL_SIZE, layout_regions};
pub use crate::render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend,
};
pub use crate::render::cpu::CpuBackend;
