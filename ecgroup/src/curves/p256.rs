//! NIST P-256 (secp256r1).

use crate::{DomainParams, PrimeCurveParams, point_arithmetic::EquationAIsMinusThree};
use generic_array::typenum::U32;
use hex_literal::hex;
use once_cell::sync::Lazy;

/// NIST P-256 elliptic curve.
///
/// This curve is also known as prime256v1 (ANSI X9.62) and secp256r1 (SECG)
/// and is specified in [FIPS 186-4: Digital Signature Standard (DSS)][1].
///
/// [1]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.186-4.pdf
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NistP256;

impl PrimeCurveParams for NistP256 {
    /// 256-bit (32-byte)
    type FieldBytesSize = U32;

    type PointArithmetic = EquationAIsMinusThree;

    const NAME: &'static str = "secp256r1";

    const MODULUS: &'static [u8] =
        &hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");

    /// a = -3
    const EQUATION_A: &'static [u8] =
        &hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc");

    const EQUATION_B: &'static [u8] =
        &hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");

    const GENERATOR: (&'static [u8], &'static [u8]) = (
        &hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
        &hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"),
    );

    const ORDER: &'static [u8] =
        &hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");

    fn domain() -> &'static DomainParams {
        static DOMAIN: Lazy<DomainParams> = Lazy::new(DomainParams::new::<NistP256>);
        &DOMAIN
    }
}
