//! NIST P-256 group tests.

#[macro_use]
mod common;

use ecgroup::P256;
use hex_literal::hex;

const UNCOMPRESSED_BASEPOINT: &[u8] = &hex!(
    "04 6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296
        4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5"
);

const COMPRESSED_BASEPOINT: &[u8] =
    &hex!("03 6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296");

test_group_law!(P256, 32);

#[test]
fn uncompressed_round_trip() {
    let point = P256.decode_any(UNCOMPRESSED_BASEPOINT).unwrap();
    assert_eq!(point, P256.base_point());
    assert_eq!(P256.encode_uncompressed(&point), UNCOMPRESSED_BASEPOINT);
}

#[test]
fn compressed_round_trip() {
    let point = P256.decode(COMPRESSED_BASEPOINT).unwrap();
    assert_eq!(point, P256.base_point());
    assert_eq!(P256.encode(&point), COMPRESSED_BASEPOINT);
}

#[test]
fn uncompressed_to_compressed() {
    let point = P256.decode_any(UNCOMPRESSED_BASEPOINT).unwrap();
    assert_eq!(P256.encode(&point), COMPRESSED_BASEPOINT);
}

#[test]
fn negation() {
    let g = P256.base_point();
    assert_eq!(P256.negate(&P256.negate(&g)), g);

    // negation flips the parity tag
    assert_eq!(P256.encode(&P256.negate(&g))[0], 0x02);
}
