//! secp256k1 (K-256).

use crate::{DomainParams, PrimeCurveParams, point_arithmetic::EquationAIsGeneric};
use generic_array::typenum::U32;
use hex_literal::hex;
use once_cell::sync::Lazy;

/// secp256k1 (K-256) elliptic curve.
///
/// Specified in Certicom's SECG in "SEC 2: Recommended Elliptic Curve Domain
/// Parameters": <https://www.secg.org/sec2-v2.pdf>
///
/// Its equation is `y² = x³ + 7` over a ~256-bit prime field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Secp256k1;

impl PrimeCurveParams for Secp256k1 {
    /// 256-bit (32-byte)
    type FieldBytesSize = U32;

    type PointArithmetic = EquationAIsGeneric;

    const NAME: &'static str = "secp256k1";

    const MODULUS: &'static [u8] =
        &hex!("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");

    const EQUATION_A: &'static [u8] = &[0];

    const EQUATION_B: &'static [u8] = &[7];

    const GENERATOR: (&'static [u8], &'static [u8]) = (
        &hex!("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"),
        &hex!("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8"),
    );

    const ORDER: &'static [u8] =
        &hex!("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

    fn domain() -> &'static DomainParams {
        static DOMAIN: Lazy<DomainParams> = Lazy::new(DomainParams::new::<Secp256k1>);
        &DOMAIN
    }
}
