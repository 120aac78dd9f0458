//! Base field elements.
//!
//! Residues modulo the curve prime `p`, backed by [`BigUint`]. Values are
//! always kept in canonical form `[0, p)`.

use crate::PrimeCurveParams;
use core::{
    marker::PhantomData,
    ops::{Add, Mul, Neg, Sub},
};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Element of the base field of curve `C`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldElement<C: PrimeCurveParams> {
    value: BigUint,
    curve: PhantomData<C>,
}

impl<C: PrimeCurveParams> FieldElement<C> {
    fn modulus() -> &'static BigUint {
        C::domain().modulus()
    }

    fn from_reduced(value: BigUint) -> Self {
        debug_assert!(&value < Self::modulus());
        Self {
            value,
            curve: PhantomData,
        }
    }

    /// Zero element.
    pub fn zero() -> Self {
        Self::from_reduced(BigUint::zero())
    }

    /// Multiplicative identity.
    pub fn one() -> Self {
        Self::from_reduced(BigUint::one())
    }

    /// Reduce an arbitrary integer modulo `p`.
    pub fn from_uint(value: &BigUint) -> Self {
        Self::from_reduced(value % Self::modulus())
    }

    /// Interpret `value` as a field element, or `None` if it is not smaller
    /// than `p`.
    pub fn from_canonical(value: BigUint) -> Option<Self> {
        if &value < Self::modulus() {
            Some(Self::from_reduced(value))
        } else {
            None
        }
    }

    /// Canonical integer representative.
    pub fn as_uint(&self) -> &BigUint {
        &self.value
    }

    /// Consume the element, returning its canonical representative.
    pub fn into_uint(self) -> BigUint {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Parity of the canonical representative.
    pub fn is_odd(&self) -> bool {
        self.value.is_odd()
    }

    /// Returns `self + rhs mod p`.
    pub fn add(&self, rhs: &Self) -> Self {
        let p = Self::modulus();
        let mut value = &self.value + &rhs.value;
        if &value >= p {
            value -= p;
        }
        Self::from_reduced(value)
    }

    /// Returns `self - rhs mod p`.
    pub fn sub(&self, rhs: &Self) -> Self {
        if self.value >= rhs.value {
            Self::from_reduced(&self.value - &rhs.value)
        } else {
            Self::from_reduced(Self::modulus() - &rhs.value + &self.value)
        }
    }

    /// Returns `self * rhs mod p`.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self::from_uint(&(&self.value * &rhs.value))
    }

    /// Returns `-self mod p`.
    pub fn neg(&self) -> Self {
        Self::zero().sub(self)
    }

    /// Returns `2 * self mod p`.
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Returns `self * self mod p`.
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Returns `self^exp mod p`.
    pub fn pow(&self, exp: &BigUint) -> Self {
        Self::from_reduced(self.value.modpow(exp, Self::modulus()))
    }

    /// Multiplicative inverse by Fermat's little theorem, `None` for zero.
    pub fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        let exp = Self::modulus() - 2u32;
        Some(self.pow(&exp))
    }

    /// Square root, or `None` if `self` is a quadratic non-residue.
    ///
    /// Uses the `(p + 1) / 4` exponent when `p ≡ 3 (mod 4)` and
    /// Tonelli–Shanks otherwise.
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::zero());
        }

        let p = Self::modulus();
        let candidate = if p % 4u32 == BigUint::from(3u32) {
            self.pow(&((p + 1u32) >> 2))
        } else {
            self.tonelli_shanks()?
        };

        if candidate.square() == *self {
            Some(candidate)
        } else {
            None
        }
    }

    /// Is `self` a nonzero square? Euler's criterion.
    fn is_quadratic_residue(&self) -> bool {
        let exp = (Self::modulus() - 1u32) >> 1;
        self.pow(&exp).value.is_one()
    }

    fn tonelli_shanks(&self) -> Option<Self> {
        if !self.is_quadratic_residue() {
            return None;
        }

        // p - 1 = q * 2^s with q odd
        let p_minus_one = Self::modulus() - 1u32;
        let s = p_minus_one.trailing_zeros()?;
        let q = &p_minus_one >> s;

        // Any non-residue generates the 2-Sylow subgroup.
        let z = (2u32..=u32::from(u16::MAX))
            .map(|z| Self::from_uint(&BigUint::from(z)))
            .find(|z| !z.is_zero() && !z.is_quadratic_residue())?;

        let mut m = s;
        let mut c = z.pow(&q);
        let mut t = self.pow(&q);
        let mut r = self.pow(&((&q + 1u32) >> 1));

        while !t.value.is_one() {
            // least i, 0 < i < m, such that t^(2^i) = 1
            let mut i = 0;
            let mut t2i = t.clone();
            while !t2i.value.is_one() {
                t2i = t2i.square();
                i += 1;
                if i == m {
                    return None;
                }
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = b.square();
            }

            m = i;
            c = b.square();
            t = t.mul(&c);
            r = r.mul(&b);
        }

        Some(r)
    }
}

macro_rules! impl_field_op {
    ($op:ident, $op_fn:ident, $func:ident) => {
        impl<C: PrimeCurveParams> $op<FieldElement<C>> for FieldElement<C> {
            type Output = FieldElement<C>;

            #[inline]
            fn $op_fn(self, rhs: FieldElement<C>) -> FieldElement<C> {
                FieldElement::$func(&self, &rhs)
            }
        }

        impl<C: PrimeCurveParams> $op<&FieldElement<C>> for FieldElement<C> {
            type Output = FieldElement<C>;

            #[inline]
            fn $op_fn(self, rhs: &FieldElement<C>) -> FieldElement<C> {
                FieldElement::$func(&self, rhs)
            }
        }

        impl<C: PrimeCurveParams> $op<FieldElement<C>> for &FieldElement<C> {
            type Output = FieldElement<C>;

            #[inline]
            fn $op_fn(self, rhs: FieldElement<C>) -> FieldElement<C> {
                FieldElement::$func(self, &rhs)
            }
        }

        impl<C: PrimeCurveParams> $op<&FieldElement<C>> for &FieldElement<C> {
            type Output = FieldElement<C>;

            #[inline]
            fn $op_fn(self, rhs: &FieldElement<C>) -> FieldElement<C> {
                FieldElement::$func(self, rhs)
            }
        }
    };
}

impl_field_op!(Add, add, add);
impl_field_op!(Sub, sub, sub);
impl_field_op!(Mul, mul, mul);

impl<C: PrimeCurveParams> Neg for FieldElement<C> {
    type Output = FieldElement<C>;

    fn neg(self) -> FieldElement<C> {
        FieldElement::neg(&self)
    }
}

impl<C: PrimeCurveParams> Neg for &FieldElement<C> {
    type Output = FieldElement<C>;

    fn neg(self) -> FieldElement<C> {
        FieldElement::neg(self)
    }
}
