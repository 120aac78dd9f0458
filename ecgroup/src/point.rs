//! Curve points.

use crate::{PrimeCurveParams, group::CurveGroup};
use core::{
    fmt,
    marker::PhantomData,
    ops::{Add, Mul, Neg, Sub},
};
use num_bigint::BigUint;

/// Element of an elliptic curve group in affine coordinates, or the point
/// at infinity.
///
/// A `Point` is a plain value which carries no curve and is not validated:
/// [`Point::Affine`] may hold any pair of integers. Use
/// [`CurveGroup::is_on_curve`] or [`CurveGroup::verify`] to check it.
///
/// Equality compares coordinates numerically, without modular reduction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Point {
    /// Additive identity of the group a.k.a. the point at infinity.
    #[default]
    Identity,

    /// Affine coordinates.
    Affine {
        /// x-coordinate
        x: BigUint,

        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// Package two integers as a point, without checking curve membership.
    ///
    /// `Point::from_coordinates(0, 0)` is an ordinary affine pair, not
    /// [`Point::Identity`].
    pub fn from_coordinates(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// x-coordinate, `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Identity => f.write_str("identity"),
            Point::Affine { x, y } => write!(f, "(0x{x:x}, 0x{y:x})"),
        }
    }
}

/// A [`Point`] known to lie on curve `C`.
///
/// Obtained from [`CurveGroup::verify`], [`CurveGroup::decode_verified`] or
/// the operators below, all of which preserve curve membership.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VerifiedPoint<C: PrimeCurveParams> {
    point: Point,
    curve: PhantomData<C>,
}

impl<C: PrimeCurveParams> VerifiedPoint<C> {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity() -> Self {
        Self::new_unchecked(Point::Identity)
    }

    /// Base point of the curve.
    pub fn generator() -> Self {
        Self::new_unchecked(CurveGroup::<C>::new().base_point())
    }

    /// Wrap a point the caller has already checked.
    pub(crate) fn new_unchecked(point: Point) -> Self {
        debug_assert!(CurveGroup::<C>::new().is_on_curve(&point));
        Self {
            point,
            curve: PhantomData,
        }
    }

    /// Borrow the underlying point.
    pub fn as_point(&self) -> &Point {
        &self.point
    }

    /// Unwrap into the underlying point.
    pub fn into_point(self) -> Point {
        self.point
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.point.is_identity()
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        Self::new_unchecked(CurveGroup::<C>::new().double(&self.point))
    }

    /// SEC1 compressed encoding.
    pub fn to_bytes(&self) -> Vec<u8> {
        CurveGroup::<C>::new().encode(&self.point)
    }
}

impl<C: PrimeCurveParams> AsRef<Point> for VerifiedPoint<C> {
    fn as_ref(&self) -> &Point {
        &self.point
    }
}

impl<C: PrimeCurveParams> From<VerifiedPoint<C>> for Point {
    fn from(point: VerifiedPoint<C>) -> Point {
        point.point
    }
}

impl<C: PrimeCurveParams> TryFrom<Point> for VerifiedPoint<C> {
    type Error = crate::Error;

    fn try_from(point: Point) -> crate::Result<Self> {
        CurveGroup::<C>::new().verify(point)
    }
}

impl<C: PrimeCurveParams> Default for VerifiedPoint<C> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Lowercase hex of the compressed encoding.
impl<C: PrimeCurveParams> fmt::Display for VerifiedPoint<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&CurveGroup::<C>::new().to_hex(&self.point))
    }
}

//
// Arithmetic trait impls
//

impl<C: PrimeCurveParams> Add<&VerifiedPoint<C>> for &VerifiedPoint<C> {
    type Output = VerifiedPoint<C>;

    fn add(self, other: &VerifiedPoint<C>) -> VerifiedPoint<C> {
        VerifiedPoint::new_unchecked(CurveGroup::<C>::new().add(&self.point, &other.point))
    }
}

impl<C: PrimeCurveParams> Add<VerifiedPoint<C>> for VerifiedPoint<C> {
    type Output = VerifiedPoint<C>;

    fn add(self, other: VerifiedPoint<C>) -> VerifiedPoint<C> {
        &self + &other
    }
}

impl<C: PrimeCurveParams> Add<&VerifiedPoint<C>> for VerifiedPoint<C> {
    type Output = VerifiedPoint<C>;

    fn add(self, other: &VerifiedPoint<C>) -> VerifiedPoint<C> {
        &self + other
    }
}

impl<C: PrimeCurveParams> Sub<&VerifiedPoint<C>> for &VerifiedPoint<C> {
    type Output = VerifiedPoint<C>;

    fn sub(self, other: &VerifiedPoint<C>) -> VerifiedPoint<C> {
        VerifiedPoint::new_unchecked(CurveGroup::<C>::new().subtract(&self.point, &other.point))
    }
}

impl<C: PrimeCurveParams> Sub<VerifiedPoint<C>> for VerifiedPoint<C> {
    type Output = VerifiedPoint<C>;

    fn sub(self, other: VerifiedPoint<C>) -> VerifiedPoint<C> {
        &self - &other
    }
}

impl<C: PrimeCurveParams> Neg for &VerifiedPoint<C> {
    type Output = VerifiedPoint<C>;

    fn neg(self) -> VerifiedPoint<C> {
        VerifiedPoint::new_unchecked(CurveGroup::<C>::new().negate(&self.point))
    }
}

impl<C: PrimeCurveParams> Neg for VerifiedPoint<C> {
    type Output = VerifiedPoint<C>;

    fn neg(self) -> VerifiedPoint<C> {
        -&self
    }
}

impl<C: PrimeCurveParams> Mul<&BigUint> for &VerifiedPoint<C> {
    type Output = VerifiedPoint<C>;

    fn mul(self, k: &BigUint) -> VerifiedPoint<C> {
        VerifiedPoint::new_unchecked(CurveGroup::<C>::new().scalar_multiply(k, &self.point))
    }
}

impl<C: PrimeCurveParams> Mul<&BigUint> for VerifiedPoint<C> {
    type Output = VerifiedPoint<C>;

    fn mul(self, k: &BigUint) -> VerifiedPoint<C> {
        &self * k
    }
}

//
// serde support
//

#[cfg(feature = "serde")]
impl<C: PrimeCurveParams> serdect::serde::Serialize for VerifiedPoint<C> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serdect::serde::Serializer,
    {
        serdect::slice::serialize_hex_lower_or_bin(&self.to_bytes(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, C: PrimeCurveParams> serdect::serde::Deserialize<'de> for VerifiedPoint<C> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serdect::serde::Deserializer<'de>,
    {
        let bytes = serdect::slice::deserialize_hex_or_bin_vec(deserializer)?;
        CurveGroup::<C>::new()
            .decode_verified(&bytes)
            .map_err(serdect::serde::de::Error::custom)
    }
}
