//! NIST P-521 group tests.

#[macro_use]
mod common;

use ecgroup::{DecodeError, Error, NistP521, P521, VerifiedPoint};
use hex_literal::hex;

const KAT_SCALAR: &[u8] = &hex!(
    "01e5f8e1c393587e9a5c1e69d48df6875aa2bc95944413ff835f94671f43cdf9"
    "38b4464aab3ae565b6de59c21b14326d3bfddc6b4bdcdfda9a061b206d159c40"
    "d959"
);

const KAT_X: &[u8] = &hex!(
    "01c877c1a9aca747b44817d61d9a307a3a50243f9920dbdac9f1317557c75cfd"
    "8625b2d549797688a1498c611f9f6a0a4fa828e667263e69510a25caed697581"
    "56f1"
);

const KAT_Y: &[u8] = &hex!(
    "001385b7eaaf883dbc5b71f8af3c60c576b48e70e1a5f6d1862b9dafac14a750"
    "38bca9b5baf41ad2d96c22e55a192f3c8516187166ee0b154d08b66ed8b6f654"
    "a645"
);

const KAT_COMPRESSED: &str = "0301c877c1a9aca747b44817d61d9a307a3a50243f9920dbdac9f1317557c75cfd\
     8625b2d549797688a1498c611f9f6a0a4fa828e667263e69510a25caed69758156f1";

const COMPRESSED_BASEPOINT: &[u8] = &hex!(
    "02 00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d
        3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5
        bd66"
);

test_group_law!(P521, 66);

fn kat_point() -> Point {
    P521.point_from_coordinates(BigUint::from_bytes_be(KAT_X), BigUint::from_bytes_be(KAT_Y))
}

#[test]
fn known_answer() {
    let q = P521.multiply_base(&BigUint::from_bytes_be(KAT_SCALAR));
    assert_eq!(q, kat_point());
    assert_eq!(P521.to_hex(&q), KAT_COMPRESSED);
}

#[test]
fn encode_is_deterministic() {
    let encoded = P521.encode(&kat_point());
    assert_eq!(encoded.len(), 67);
    assert_eq!(base16ct::lower::encode_string(&encoded), KAT_COMPRESSED);
    assert_eq!(P521.encode(&kat_point()), encoded);
}

#[test]
fn decode_fixture_is_on_curve() {
    let point = P521.from_hex(KAT_COMPRESSED).unwrap();
    assert_eq!(point, kat_point());
    assert!(P521.is_on_curve(&point));

    // mixed case is accepted
    let upper = KAT_COMPRESSED.to_uppercase();
    assert_eq!(P521.from_hex(&upper), Ok(point));
}

#[test]
fn compressed_base_point() {
    assert_eq!(P521.encode(&P521.base_point()), COMPRESSED_BASEPOINT);
    assert_eq!(P521.decode(COMPRESSED_BASEPOINT), Ok(P521.base_point()));
}

#[test]
fn random_scalars() {
    // full 521-bit scalars, which may exceed the group order
    for _ in 0..4 {
        let k = common::random_scalar(521);
        let q = P521.multiply_base(&k);
        assert!(P521.is_on_curve(&q));
        assert_eq!(P521.decode(&P521.encode(&q)), Ok(q));
    }
}

#[test]
fn identity_encoding() {
    assert_eq!(P521.encode(&Point::Identity), [0x00]);
    assert_eq!(P521.decode(&[0x00]), Ok(Point::Identity));
    assert_eq!(P521.to_hex(&Point::Identity), "00");
    assert_eq!(P521.to_hex_pair(&Point::Identity), None);
}

#[test]
fn zero_pair_is_not_identity() {
    let zero = P521.point_from_coordinates(BigUint::from(0u32), BigUint::from(0u32));
    assert!(!P521.is_on_curve(&zero));
    assert!(!P521.equals(&zero, &P521.identity()));
    assert_eq!(P521.verify(zero), Err(Error::InvalidPoint));
}

#[test]
fn order_annihilates_base_point() {
    let g = P521.base_point();
    let n = P521.order();
    assert_eq!(P521.scalar_multiply(n, &g), Point::Identity);
    assert_eq!(P521.scalar_multiply(&(n + 1u32), &g), g);
    assert_eq!(P521.scalar_multiply(&(n - 1u32), &g), P521.negate(&g));
}

#[test]
fn decode_wrong_length() {
    let short = &COMPRESSED_BASEPOINT[..66];
    assert_eq!(
        P521.decode(short),
        Err(DecodeError::InvalidLength {
            expected: 67,
            actual: 66
        })
    );

    assert_eq!(
        P521.decode(&[]),
        Err(DecodeError::InvalidLength {
            expected: 67,
            actual: 0
        })
    );
}

#[test]
fn decode_bad_tag() {
    let mut bytes = COMPRESSED_BASEPOINT.to_vec();
    // 0x00 and 0x04 are valid SEC1 tags, but not at this length
    for tag in [0x00, 0x01, 0x04, 0x05, 0x06, 0xff] {
        bytes[0] = tag;
        assert_eq!(P521.decode(&bytes), Err(DecodeError::InvalidTag(tag)));
    }
}

#[test]
fn decode_x_without_root() {
    // x³ - 3x + b is a non-residue for x = 3
    let mut bytes = [0u8; 67];
    bytes[0] = 0x02;
    bytes[66] = 0x03;
    assert_eq!(P521.decode(&bytes), Err(DecodeError::NotOnCurve));
}

#[test]
fn decode_x_out_of_range() {
    let mut bytes = vec![0x02];
    bytes.extend_from_slice(&P521.modulus().to_bytes_be());
    assert_eq!(bytes.len(), 67);
    assert_eq!(P521.decode(&bytes), Err(DecodeError::CoordinateOutOfRange));

    let all_ones = [0xffu8; 67];
    assert_eq!(P521.decode(&all_ones), Err(DecodeError::InvalidTag(0xff)));
}

#[test]
fn decode_bad_hex() {
    assert_eq!(P521.from_hex("zz"), Err(DecodeError::InvalidHex));
    assert_eq!(P521.from_hex("030"), Err(DecodeError::InvalidHex));
}

#[test]
fn decode_uncompressed_off_curve() {
    let mut bytes = P521.encode_uncompressed(&P521.base_point());
    let last = bytes.len() - 1;
    bytes[last] ^= 1;
    assert_eq!(P521.decode_any(&bytes), Err(DecodeError::NotOnCurve));
}

#[test]
fn diagnostics() {
    let (x, y) = P521.to_hex_pair(&kat_point()).unwrap();
    assert_eq!(x, base16ct::lower::encode_string(KAT_X).trim_start_matches('0'));
    assert!(y.starts_with("1385b7ea"));
    assert_eq!(
        P521.describe(&kat_point()),
        format!("Compressed elliptic curve point is {KAT_COMPRESSED}")
    );
}

#[test]
fn verified_point() {
    let q = VerifiedPoint::<NistP521>::try_from(kat_point()).unwrap();
    assert_eq!(q.to_string(), KAT_COMPRESSED);
    assert_eq!(P521.decode_verified(&q.to_bytes()), Ok(q.clone()));

    let k = BigUint::from_bytes_be(KAT_SCALAR);
    assert_eq!(&VerifiedPoint::<NistP521>::generator() * &k, q);

    let err = P521.decode_verified(&[0x07]).unwrap_err();
    assert_eq!(err, Error::Decode(DecodeError::InvalidTag(0x07)));
}
