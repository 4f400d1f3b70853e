use super::*;
use crate::pipeline::digest::digest;

#[test]
fn takes_first_three_digest_bytes() {
    let mut bytes = [0u8; 16];
    bytes[..4].copy_from_slice(&[1, 2, 3, 4]);
    assert_eq!(Rgb8::from_digest(&Digest(bytes)), Rgb8::new(1, 2, 3));
}

#[test]
fn known_name_color() {
    let c = Rgb8::from_digest(&digest(b"zhansultan"));
    assert_eq!(c, Rgb8::new(129, 231, 200));
    assert_eq!(c.to_hex(), "#81e7c8");
}
