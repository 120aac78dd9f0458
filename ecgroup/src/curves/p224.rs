//! NIST P-224 (secp224r1).
//!
//! The field modulus is `≡ 1 (mod 4)`, so square roots go through
//! Tonelli–Shanks.

use crate::{DomainParams, PrimeCurveParams, point_arithmetic::EquationAIsMinusThree};
use generic_array::typenum::U28;
use hex_literal::hex;
use once_cell::sync::Lazy;

/// NIST P-224 elliptic curve.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NistP224;

impl PrimeCurveParams for NistP224 {
    /// 224-bit (28-byte)
    type FieldBytesSize = U28;

    type PointArithmetic = EquationAIsMinusThree;

    const NAME: &'static str = "secp224r1";

    const MODULUS: &'static [u8] =
        &hex!("ffffffffffffffffffffffffffffffff000000000000000000000001");

    /// a = -3
    const EQUATION_A: &'static [u8] =
        &hex!("fffffffffffffffffffffffffffffffefffffffffffffffffffffffe");

    const EQUATION_B: &'static [u8] =
        &hex!("b4050a850c04b3abf54132565044b0b7d7bfd8ba270b39432355ffb4");

    const GENERATOR: (&'static [u8], &'static [u8]) = (
        &hex!("b70e0cbd6bb4bf7f321390b94a03c1d356c21122343280d6115c1d21"),
        &hex!("bd376388b5f723fb4c22dfe6cd4375a05a07476444d5819985007e34"),
    );

    const ORDER: &'static [u8] =
        &hex!("ffffffffffffffffffffffffffff16a2e0b8f03e13dd29455c5c2a3d");

    fn domain() -> &'static DomainParams {
        static DOMAIN: Lazy<DomainParams> = Lazy::new(DomainParams::new::<NistP224>);
        &DOMAIN
    }
}
