//! Curve domain parameters.

use crate::point_arithmetic::PointArithmetic;
use core::fmt::Debug;
use generic_array::typenum::Unsigned;
use num_bigint::BigUint;
use sec1::point::ModulusSize;

/// SEC1 encoded point on curve `C`.
pub type EncodedPoint<C> = sec1::EncodedPoint<<C as PrimeCurveParams>::FieldBytesSize>;

/// Parameters for elliptic curves of prime order subgroup which can be
/// described by the short Weierstrass equation `y² = x³ + a·x + b`.
///
/// Constants are big-endian byte strings. They are parsed once into a
/// [`DomainParams`] which is returned by [`PrimeCurveParams::domain`].
pub trait PrimeCurveParams:
    Copy + Clone + Debug + Default + Eq + PartialEq + Send + Sync + 'static
{
    /// Size of a serialized field element in bytes: `ceil(bits(p) / 8)`.
    type FieldBytesSize: ModulusSize;

    /// Point addition and doubling formulas specialized for `a`.
    type PointArithmetic: PointArithmetic<Self>;

    /// Standard name of the curve.
    const NAME: &'static str;

    /// Prime modulus `p` of the base field.
    const MODULUS: &'static [u8];

    /// Coefficient `a` in the curve equation.
    const EQUATION_A: &'static [u8];

    /// Coefficient `b` in the curve equation.
    const EQUATION_B: &'static [u8];

    /// Generator point's affine coordinates: (x, y).
    const GENERATOR: (&'static [u8], &'static [u8]);

    /// Order `n` of the subgroup generated by the base point.
    const ORDER: &'static [u8];

    /// Cofactor `h`.
    const COFACTOR: u32 = 1;

    /// Parsed domain parameters.
    ///
    /// Implementations keep them in a lazily initialized `static`:
    ///
    /// ```ignore
    /// fn domain() -> &'static DomainParams {
    ///     static DOMAIN: Lazy<DomainParams> = Lazy::new(DomainParams::new::<MyCurve>);
    ///     &DOMAIN
    /// }
    /// ```
    fn domain() -> &'static DomainParams;
}

/// Domain parameters of a curve as arbitrary-precision integers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainParams {
    name: &'static str,
    modulus: BigUint,
    equation_a: BigUint,
    equation_b: BigUint,
    generator: (BigUint, BigUint),
    order: BigUint,
    cofactor: u32,
    field_bytes_len: usize,
}

impl DomainParams {
    /// Parse the constants of `C`. Coefficients are reduced modulo `p`.
    pub fn new<C: PrimeCurveParams>() -> Self {
        let modulus = BigUint::from_bytes_be(C::MODULUS);
        let reduce = |bytes: &[u8]| BigUint::from_bytes_be(bytes) % &modulus;
        let field_bytes_len = <C::FieldBytesSize as Unsigned>::USIZE;
        debug_assert_eq!(field_bytes_len as u64, modulus.bits().div_ceil(8));

        Self {
            name: C::NAME,
            equation_a: reduce(C::EQUATION_A),
            equation_b: reduce(C::EQUATION_B),
            generator: (reduce(C::GENERATOR.0), reduce(C::GENERATOR.1)),
            order: BigUint::from_bytes_be(C::ORDER),
            cofactor: C::COFACTOR,
            field_bytes_len,
            modulus,
        }
    }

    /// Standard name of the curve.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Prime modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Coefficient `a`, reduced modulo `p`.
    pub fn equation_a(&self) -> &BigUint {
        &self.equation_a
    }

    /// Coefficient `b`, reduced modulo `p`.
    pub fn equation_b(&self) -> &BigUint {
        &self.equation_b
    }

    /// Affine coordinates of the base point.
    pub fn generator(&self) -> (&BigUint, &BigUint) {
        (&self.generator.0, &self.generator.1)
    }

    /// Order `n` of the base point.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Cofactor `h`.
    pub fn cofactor(&self) -> u32 {
        self.cofactor
    }

    /// Size in bytes of a serialized field element.
    pub fn field_bytes_len(&self) -> usize {
        self.field_bytes_len
    }
}
