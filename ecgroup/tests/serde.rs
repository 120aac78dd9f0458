//! serde tests.

#![cfg(feature = "serde")]

use ecgroup::{BigUint, NistP521, P521, VerifiedPoint};

#[test]
fn json_round_trip() {
    let q = VerifiedPoint::<NistP521>::generator() * &BigUint::from(42u32);

    let json = serde_json::to_string(&q).unwrap();
    assert_eq!(json, format!("\"{}\"", P521.to_hex(q.as_point())));

    let decoded: VerifiedPoint<NistP521> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, q);
}

#[test]
fn reject_invalid_point() {
    // x = 3 has no matching y on P-521
    let json = format!("\"02{:0>132}\"", "3");
    assert!(serde_json::from_str::<VerifiedPoint<NistP521>>(&json).is_err());
}
