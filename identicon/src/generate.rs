use std::path::PathBuf;

use crate::encode::png::{png_path, write_png};
use crate::foundation::error::IdenticonResult;
use crate::pipeline::identity::Identity;
use crate::render::backend::{BackendKind, RenderSettings, create_backend};

/// Options for [`generate`].
#[derive(Clone, Debug)]
pub struct GenerateOpts {
    /// Directory receiving `<name>.png`.
    pub out_dir: PathBuf,
    /// Canvas size and background.
    pub settings: RenderSettings,
    /// Raster backend.
    pub backend: BackendKind,
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            settings: RenderSettings::default(),
            backend: BackendKind::Cpu,
        }
    }
}

/// Result of a successful [`generate`] run.
#[derive(Clone, Debug)]
pub struct Generated {
    /// The fully derived identity.
    pub identity: Identity,
    /// Where the PNG was written.
    pub path: PathBuf,
}

/// Derive, render and write the identicon for `name`.
///
/// Nothing is written unless the name is usable as a file name and rendering succeeded.
/// Only `opts.out_dir` (and its ancestors) is ever created.
#[tracing::instrument(skip(opts), fields(out_dir = %opts.out_dir.display()))]
pub fn generate(name: &str, opts: &GenerateOpts) -> IdenticonResult<Generated> {
    let path = png_path(&opts.out_dir, name)?;
    let identity = Identity::derive(name);

    let mut backend = create_backend(opts.backend, &opts.settings)?;
    let frame = backend.render(&identity)?;

    write_png(&frame, &path)?;
    tracing::info!(path = %path.display(), cells = identity.cells.len(), "wrote identicon");

    Ok(Generated { identity, path })
}
