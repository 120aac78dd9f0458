//! Projective curve points.

use crate::{
    PrimeCurveParams, field::FieldElement, point::Point, point_arithmetic::PointArithmetic,
};
use num_bigint::BigUint;

/// Point on a Weierstrass curve in homogeneous projective coordinates
/// `(X : Y : Z)`, representing the affine point `(X/Z, Y/Z)`.
#[derive(Clone, Debug)]
pub struct ProjectivePoint<C: PrimeCurveParams> {
    pub(crate) x: FieldElement<C>,
    pub(crate) y: FieldElement<C>,
    pub(crate) z: FieldElement<C>,
}

impl<C> ProjectivePoint<C>
where
    C: PrimeCurveParams,
{
    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity() -> Self {
        Self {
            x: FieldElement::zero(),
            y: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    /// Lift an unchecked [`Point`]. Affine coordinates are reduced modulo `p`.
    pub fn from_point(point: &Point) -> Self {
        match point {
            Point::Identity => Self::identity(),
            Point::Affine { x, y } => Self {
                x: FieldElement::from_uint(x),
                y: FieldElement::from_uint(y),
                z: FieldElement::one(),
            },
        }
    }

    /// Returns the affine representation of this point.
    pub fn to_point(&self) -> Point {
        match self.z.invert() {
            Some(zinv) => Point::Affine {
                x: (&self.x * &zinv).into_uint(),
                y: (&self.y * &zinv).into_uint(),
            },
            None => Point::Identity,
        }
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        Self {
            x: self.x.clone(),
            y: -&self.y,
            z: self.z.clone(),
        }
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Self {
        C::PointArithmetic::add(self, other)
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Self {
        C::PointArithmetic::double(self)
    }

    /// Returns `[k] self`, scanning `k` from the most significant bit.
    pub fn mul(&self, k: &BigUint) -> Self {
        let mut q = Self::identity();

        for i in (0..k.bits()).rev() {
            q = q.double();

            if k.bit(i) {
                q = q.add(self);
            }
        }

        q
    }
}

impl<C> PartialEq for ProjectivePoint<C>
where
    C: PrimeCurveParams,
{
    /// Cross-multiplied comparison, no inversion required.
    fn eq(&self, other: &Self) -> bool {
        &self.x * &other.z == &other.x * &self.z && &self.y * &other.z == &other.y * &self.z
    }
}

impl<C> Eq for ProjectivePoint<C> where C: PrimeCurveParams {}
