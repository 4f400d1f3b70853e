use md5::{Digest as _, Md5};

/// Length in bytes of an MD5 digest.
pub const DIGEST_LEN: usize = 16;

/// 128-bit MD5 digest of an identity name. The sole source of variation in an identicon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Digest(
    /// Raw digest bytes.
    pub [u8; DIGEST_LEN],
);

impl Digest {
    /// Borrow the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex, 32 chars.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl serde::Serialize for Digest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Hash arbitrary bytes (including the empty sequence) into a [`Digest`].
pub fn digest(input: &[u8]) -> Digest {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&Md5::digest(input));
    Digest(out)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/digest.rs"]
mod tests;
