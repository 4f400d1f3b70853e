use crate::foundation::core::Rgb8;
use crate::pipeline::digest::Digest;

impl Rgb8 {
    /// The identicon color: digest bytes `[0, 3)` read as `(r, g, b)`.
    pub fn from_digest(digest: &Digest) -> Self {
        let [r, g, b, ..] = digest.0;
        Self { r, g, b }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/palette.rs"]
mod tests;
