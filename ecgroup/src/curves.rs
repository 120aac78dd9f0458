//! Named curves.
//!
//! Each curve is a zero-sized marker type implementing [`PrimeCurveParams`]
//! together with a ready-to-use [`CurveGroup`] constant.
//!
//! [`PrimeCurveParams`]: crate::PrimeCurveParams

mod p224;
mod p256;
mod p521;
mod secp256k1;

pub use self::{p224::NistP224, p256::NistP256, p521::NistP521, secp256k1::Secp256k1};

use crate::CurveGroup;

/// NIST P-521 group (secp521r1).
pub const P521: CurveGroup<NistP521> = CurveGroup::new();

/// NIST P-256 group (secp256r1).
pub const P256: CurveGroup<NistP256> = CurveGroup::new();

/// NIST P-224 group (secp224r1).
pub const P224: CurveGroup<NistP224> = CurveGroup::new();

/// secp256k1 group.
pub const SECP256K1: CurveGroup<Secp256k1> = CurveGroup::new();
