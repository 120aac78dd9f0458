#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod curves;
pub mod point_arithmetic;

mod error;
mod field;
mod group;
mod params;
mod point;
mod projective;

pub use crate::{
    curves::{NistP224, NistP256, NistP521, P224, P256, P521, SECP256K1, Secp256k1},
    error::{DecodeError, Error, Result},
    group::CurveGroup,
    params::{DomainParams, EncodedPoint, PrimeCurveParams},
    point::{Point, VerifiedPoint},
};
pub use num_bigint::{self, BigUint};
pub use sec1;
