//! NIST P-521 (secp521r1).
//!
//! Curve parameters can be found in FIPS 186-4: Digital Signature Standard
//! (DSS): <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.186-4.pdf>
//!
//! See section D.1.2.5: Curve P-521.

use crate::{DomainParams, PrimeCurveParams, point_arithmetic::EquationAIsMinusThree};
use generic_array::typenum::U66;
use hex_literal::hex;
use once_cell::sync::Lazy;

/// NIST P-521 elliptic curve.
///
/// This curve is also known as secp521r1 (SECG) and is specified in
/// [FIPS 186-4: Digital Signature Standard (DSS)][1]:
///
/// Its equation is `y² = x³ - 3x + b` over a 521-bit Mersenne prime field
/// `p = 2^521 - 1`, where `b` is a verifiably random constant.
///
/// [1]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.186-4.pdf
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NistP521;

impl PrimeCurveParams for NistP521 {
    /// 521-bit (66-byte)
    type FieldBytesSize = U66;

    type PointArithmetic = EquationAIsMinusThree;

    const NAME: &'static str = "secp521r1";

    const MODULUS: &'static [u8] = &hex!(
        "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        "ffff"
    );

    /// a = -3
    const EQUATION_A: &'static [u8] = &hex!(
        "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        "fffc"
    );

    const EQUATION_B: &'static [u8] = &hex!(
        "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef1"
        "09e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b50"
        "3f00"
    );

    const GENERATOR: (&'static [u8], &'static [u8]) = (
        &hex!(
            "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4d"
            "3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2e5"
            "bd66"
        ),
        &hex!(
            "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273e"
            "662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769fd1"
            "6650"
        ),
    );

    const ORDER: &'static [u8] = &hex!(
        "01ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
        "fffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e9138"
        "6409"
    );

    fn domain() -> &'static DomainParams {
        static DOMAIN: Lazy<DomainParams> = Lazy::new(DomainParams::new::<NistP521>);
        &DOMAIN
    }
}
