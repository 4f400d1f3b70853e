use std::path::{Component, Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{IdenticonError, IdenticonResult};
use crate::render::backend::FrameRGBA;

/// `<out_dir>/<name>.png`.
///
/// `name` must stay a single file name inside `out_dir`: names containing a path separator
/// (`/` or `\`) or a NUL byte are rejected.
pub fn png_path(out_dir: &Path, name: &str) -> IdenticonResult<PathBuf> {
    let invalid = || {
        IdenticonError::validation(format!(
            "name '{}' cannot be used as a file name",
            name.escape_default()
        ))
    };
    if name.contains(['/', '\\', '\0']) {
        return Err(invalid());
    }

    let file_name = format!("{name}.png");
    let mut components = Path::new(&file_name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(out_dir.join(file_name)),
        _ => Err(invalid()),
    }
}

/// Create `path`'s parent directory if it is missing.
pub fn ensure_parent_dir(path: &Path) -> IdenticonResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Encode `frame` as an RGBA8 PNG at `path`, replacing any existing file.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn write_png(frame: &FrameRGBA, path: &Path) -> IdenticonResult<()> {
    ensure_parent_dir(path)?;

    let straight;
    let data = if frame.premultiplied {
        straight = unpremultiply_rgba8(&frame.data);
        &straight
    } else {
        &frame.data
    };

    image::save_buffer_with_format(
        path,
        data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;

    tracing::debug!(bytes = data.len(), "wrote png");
    Ok(())
}

pub(crate) fn unpremultiply_rgba8(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    for px in out.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        match a {
            0 => px[..3].fill(0),
            255 => {}
            _ => {
                for c in &mut px[..3] {
                    *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
                }
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
