//! Complete projective addition and doubling formulas.
//!
//! A curve picks its formulas through
//! [`PrimeCurveParams::PointArithmetic`](crate::PrimeCurveParams::PointArithmetic):
//! [`EquationAIsMinusThree`] for the NIST curves, [`EquationAIsGeneric`]
//! otherwise.

use crate::{PrimeCurveParams, field::FieldElement, projective::ProjectivePoint};

mod sealed {
    use crate::{PrimeCurveParams, projective::ProjectivePoint};

    /// Addition and doubling in homogeneous projective coordinates.
    pub trait PointArithmetic<C: PrimeCurveParams> {
        /// Returns `lhs + rhs`
        fn add(lhs: &ProjectivePoint<C>, rhs: &ProjectivePoint<C>) -> ProjectivePoint<C>;

        /// Returns `point + point`
        fn double(point: &ProjectivePoint<C>) -> ProjectivePoint<C>;
    }
}

pub(crate) use sealed::PointArithmetic;

fn equation_a<C: PrimeCurveParams>() -> FieldElement<C> {
    FieldElement::from_uint(C::domain().equation_a())
}

fn equation_b<C: PrimeCurveParams>() -> FieldElement<C> {
    FieldElement::from_uint(C::domain().equation_b())
}

/// `3·b`
fn b3<C: PrimeCurveParams>() -> FieldElement<C> {
    let b = equation_b::<C>();
    b.double() + &b
}

fn debug_assert_a_is_minus_three<C: PrimeCurveParams>() {
    debug_assert_eq!(
        equation_a::<C>(),
        -FieldElement::<C>::from_uint(&3u32.into()),
        "this implementation is only valid for a = -3"
    );
}

/// Formulas valid for any `a`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EquationAIsGeneric {}

impl<C: PrimeCurveParams> PointArithmetic<C> for EquationAIsGeneric {
    /// Complete addition, [Renes-Costello-Batina 2015] Algorithm 1.
    /// Trailing comments give the step numbers.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn add(lhs: &ProjectivePoint<C>, rhs: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        let a = equation_a::<C>();
        let b3 = b3::<C>();

        let t0 = &lhs.x * &rhs.x; // 1
        let t1 = &lhs.y * &rhs.y; // 2
        let t2 = &lhs.z * &rhs.z; // 3
        let t3 = &lhs.x + &lhs.y; // 4
        let t4 = &rhs.x + &rhs.y; // 5
        let t3 = t3 * t4; // 6
        let t4 = &t0 + &t1; // 7
        let t3 = t3 - t4; // 8
        let t4 = &lhs.x + &lhs.z; // 9
        let t5 = &rhs.x + &rhs.z; // 10
        let t4 = t4 * t5; // 11
        let t5 = &t0 + &t2; // 12
        let t4 = t4 - t5; // 13
        let t5 = &lhs.y + &lhs.z; // 14
        let x3 = &rhs.y + &rhs.z; // 15
        let t5 = t5 * x3; // 16
        let x3 = &t1 + &t2; // 17
        let t5 = t5 - x3; // 18
        let z3 = &a * &t4; // 19
        let x3 = &b3 * &t2; // 20
        let z3 = x3 + z3; // 21
        let x3 = &t1 - &z3; // 22
        let z3 = &t1 + &z3; // 23
        let y3 = &x3 * &z3; // 24
        let t1 = &t0 + &t0; // 25
        let t1 = t1 + &t0; // 26
        let t2 = &a * &t2; // 27
        let t4 = &b3 * &t4; // 28
        let t1 = t1 + &t2; // 29
        let t2 = &t0 - &t2; // 30
        let t2 = &a * &t2; // 31
        let t4 = t4 + t2; // 32
        let t0 = &t1 * &t4; // 33
        let y3 = y3 + t0; // 34
        let t0 = &t5 * &t4; // 35
        let x3 = &t3 * &x3; // 36
        let x3 = x3 - t0; // 37
        let t0 = &t3 * &t1; // 38
        let z3 = &t5 * &z3; // 39
        let z3 = z3 + t0; // 40

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Exception-free doubling, [Renes-Costello-Batina 2015] Algorithm 3.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn double(point: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        let a = equation_a::<C>();
        let b3 = b3::<C>();

        let t0 = point.x.square(); // 1
        let t1 = point.y.square(); // 2
        let t2 = point.z.square(); // 3
        let t3 = (&point.x * &point.y).double(); // 4, 5
        let z3 = (&point.x * &point.z).double(); // 6, 7
        let x3 = &a * &z3; // 8
        let y3 = &b3 * &t2; // 9
        let y3 = x3 + y3; // 10
        let x3 = &t1 - &y3; // 11
        let y3 = &t1 + &y3; // 12
        let y3 = &x3 * &y3; // 13
        let x3 = &t3 * &x3; // 14
        let z3 = &b3 * &z3; // 15
        let t2 = &a * &t2; // 16
        let t3 = &t0 - &t2; // 17
        let t3 = &a * &t3; // 18
        let t3 = t3 + z3; // 19
        let z3 = t0.double(); // 20
        let t0 = z3 + &t0; // 21
        let t0 = t0 + t2; // 22
        let t0 = t0 * &t3; // 23
        let y3 = y3 + t0; // 24
        let t2 = (&point.y * &point.z).double(); // 25, 26
        let t0 = &t2 * &t3; // 27
        let x3 = x3 - t0; // 28
        let z3 = &t2 * &t1; // 29
        let z3 = z3.double().double(); // 30, 31

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}

/// Formulas for curves with `a = -3`, saving the multiplications by `a`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EquationAIsMinusThree {}

impl<C: PrimeCurveParams> PointArithmetic<C> for EquationAIsMinusThree {
    /// Complete addition for `a = -3`, [Renes-Costello-Batina 2015]
    /// Algorithm 4. Multiplications by `a` become subtractions.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn add(lhs: &ProjectivePoint<C>, rhs: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        debug_assert_a_is_minus_three::<C>();
        let b = equation_b::<C>();

        let xx = &lhs.x * &rhs.x; // 1
        let yy = &lhs.y * &rhs.y; // 2
        let zz = &lhs.z * &rhs.z; // 3
        let xy_pairs = ((&lhs.x + &lhs.y) * (&rhs.x + &rhs.y)) - (&xx + &yy); // 4, 5, 6, 7, 8
        let yz_pairs = ((&lhs.y + &lhs.z) * (&rhs.y + &rhs.z)) - (&yy + &zz); // 9, 10, 11, 12, 13
        let xz_pairs = ((&lhs.x + &lhs.z) * (&rhs.x + &rhs.z)) - (&xx + &zz); // 14, 15, 16, 17, 18

        let bzz_part = &xz_pairs - (&b * &zz); // 19, 20
        let bzz3_part = bzz_part.double() + &bzz_part; // 21, 22
        let yy_m_bzz3 = &yy - &bzz3_part; // 23
        let yy_p_bzz3 = &yy + &bzz3_part; // 24

        let zz3 = zz.double() + &zz; // 26, 27
        let bxz_part = (&b * &xz_pairs) - (&zz3 + &xx); // 25, 28, 29
        let bxz3_part = bxz_part.double() + &bxz_part; // 30, 31
        let xx3_m_zz3 = xx.double() + &xx - &zz3; // 32, 33, 34

        ProjectivePoint {
            x: (&yy_p_bzz3 * &xy_pairs) - (&yz_pairs * &bxz3_part), // 35, 39, 40
            y: (&yy_p_bzz3 * &yy_m_bzz3) + (&xx3_m_zz3 * &bxz3_part), // 36, 37, 38
            z: (&yy_m_bzz3 * &yz_pairs) + (&xy_pairs * &xx3_m_zz3), // 41, 42, 43
        }
    }

    /// Exception-free doubling for `a = -3`, [Renes-Costello-Batina 2015]
    /// Algorithm 6.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    fn double(point: &ProjectivePoint<C>) -> ProjectivePoint<C> {
        debug_assert_a_is_minus_three::<C>();
        let b = equation_b::<C>();

        let xx = point.x.square(); // 1
        let yy = point.y.square(); // 2
        let zz = point.z.square(); // 3
        let xy2 = (&point.x * &point.y).double(); // 4, 5
        let xz2 = (&point.x * &point.z).double(); // 6, 7

        let bzz_part = (&b * &zz) - &xz2; // 8, 9
        let bzz3_part = bzz_part.double() + &bzz_part; // 10, 11
        let yy_m_bzz3 = &yy - &bzz3_part; // 12
        let yy_p_bzz3 = &yy + &bzz3_part; // 13
        let y_frag = &yy_p_bzz3 * &yy_m_bzz3; // 14
        let x_frag = &yy_m_bzz3 * &xy2; // 15

        let zz3 = zz.double() + &zz; // 16, 17
        let bxz2_part = (&b * &xz2) - (&zz3 + &xx); // 18, 19, 20
        let bxz6_part = bxz2_part.double() + &bxz2_part; // 21, 22
        let xx3_m_zz3 = xx.double() + &xx - &zz3; // 23, 24, 25

        let y = y_frag + (&xx3_m_zz3 * &bxz6_part); // 26, 27
        let yz2 = (&point.y * &point.z).double(); // 28, 29
        let x = x_frag - (&bxz6_part * &yz2); // 30, 31
        let z = (&yz2 * &yy).double().double(); // 32, 33, 34

        ProjectivePoint { x, y, z }
    }
}
