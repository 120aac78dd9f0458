//! Helpers shared by the integration tests.

#![allow(dead_code)]

use ecgroup::BigUint;
use rand_core::{OsRng, RngCore};

/// Uniformly random integer below `2^bits`.
pub fn random_scalar(bits: u64) -> BigUint {
    let len = ((bits + 7) / 8) as usize;
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    BigUint::from_bytes_be(&bytes) >> (len as u64 * 8 - bits)
}

/// Implement property-based tests of the group law for a [`CurveGroup`].
///
/// `$field_bytes` is the number of random bytes drawn per scalar.
///
/// [`CurveGroup`]: ecgroup::CurveGroup
macro_rules! test_group_law {
    ($group:expr, $field_bytes:expr) => {
        use ecgroup::{BigUint, Point};
        use proptest::{collection::vec, prelude::*};

        prop_compose! {
            fn scalar()(bytes in vec(any::<u8>(), $field_bytes)) -> BigUint {
                BigUint::from_bytes_be(&bytes)
            }
        }

        prop_compose! {
            fn point()(k in scalar()) -> Point {
                $group.multiply_base(&k)
            }
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(16))]

            #[test]
            fn closure(a in point(), b in point()) {
                assert!($group.is_on_curve(&$group.add(&a, &b)));
            }

            #[test]
            fn commutativity(a in point(), b in point()) {
                assert_eq!($group.add(&a, &b), $group.add(&b, &a));
            }

            #[test]
            fn associativity(k in scalar(), d in scalar()) {
                let g = $group.base_point();
                assert_eq!(
                    $group.scalar_multiply(&k, &$group.scalar_multiply(&d, &g)),
                    $group.scalar_multiply(&d, &$group.scalar_multiply(&k, &g))
                );
            }

            #[test]
            fn point_associativity(a in point(), b in point(), c in point()) {
                assert_eq!(
                    $group.add(&$group.add(&a, &b), &c),
                    $group.add(&a, &$group.add(&b, &c))
                );
            }

            #[test]
            fn identity(a in point()) {
                let identity = $group.identity();
                assert_eq!($group.add(&a, &identity), a);
                assert_eq!($group.add(&identity, &a), a);
            }

            #[test]
            fn inverse(a in point()) {
                assert_eq!($group.add(&a, &$group.negate(&a)), Point::Identity);
                assert_eq!($group.subtract(&a, &a), Point::Identity);
            }

            #[test]
            fn double_is_add(a in point()) {
                assert_eq!($group.double(&a), $group.add(&a, &a));
            }

            #[test]
            fn scalar_distributes(k in scalar(), d in scalar()) {
                assert_eq!(
                    $group.multiply_base(&(&k + &d)),
                    $group.add(&$group.multiply_base(&k), &$group.multiply_base(&d))
                );
            }

            #[test]
            fn round_trip(a in point()) {
                assert_eq!($group.decode(&$group.encode(&a)), Ok(a.clone()));
                assert_eq!($group.decode_any(&$group.encode_uncompressed(&a)), Ok(a.clone()));
                assert_eq!($group.from_hex(&$group.to_hex(&a)), Ok(a));
            }
        }
    };
}
