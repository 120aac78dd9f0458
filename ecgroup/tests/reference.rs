//! Differential tests against the RustCrypto `p521` crate.

use ecgroup::{BigUint, P521};
use p521::{
    elliptic_curve::{ff::PrimeField, sec1::ToEncodedPoint},
    FieldBytes, ProjectivePoint, Scalar,
};
use proptest::prelude::*;

/// Reduce 66 random bytes to a canonical `p521` scalar.
fn reference_scalar(bytes: &[u8; 66]) -> (BigUint, Scalar) {
    let k = BigUint::from_bytes_be(bytes) % P521.order();

    let mut repr = [0u8; 66];
    let k_bytes = k.to_bytes_be();
    repr[66 - k_bytes.len()..].copy_from_slice(&k_bytes);

    let scalar = Scalar::from_repr(FieldBytes::clone_from_slice(&repr)).unwrap();
    (k, scalar)
}

fn reference_encoding(scalar: Scalar, compress: bool) -> Vec<u8> {
    (ProjectivePoint::GENERATOR * scalar)
        .to_affine()
        .to_encoded_point(compress)
        .as_bytes()
        .to_vec()
}

#[test]
fn base_point() {
    let mut one = [0u8; 66];
    one[65] = 1;

    let (k, scalar) = reference_scalar(&one);
    assert_eq!(P521.multiply_base(&k), P521.base_point());
    assert_eq!(
        P521.encode_uncompressed(&P521.base_point()),
        reference_encoding(scalar, false)
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn scalar_multiplication(
        head in any::<[u8; 32]>(),
        tail in any::<[u8; 32]>(),
        last in any::<[u8; 2]>(),
    ) {
        let mut bytes = [0u8; 66];
        bytes[..32].copy_from_slice(&head);
        bytes[32..64].copy_from_slice(&tail);
        bytes[64..].copy_from_slice(&last);

        let (k, scalar) = reference_scalar(&bytes);
        let q = P521.multiply_base(&k);

        assert_eq!(P521.encode(&q), reference_encoding(scalar, true));
        assert_eq!(P521.encode_uncompressed(&q), reference_encoding(scalar, false));
    }
}
