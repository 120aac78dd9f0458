//! Elliptic curve group operations.

use crate::{
    DecodeError, DomainParams, EncodedPoint, Error, Point, PrimeCurveParams, Result,
    VerifiedPoint, field::FieldElement, projective::ProjectivePoint,
};
use core::{fmt, marker::PhantomData};
use generic_array::GenericArray;
use num_bigint::BigUint;
use sec1::point::{Coordinates, Tag};

/// The group of points on curve `C`.
///
/// A zero-sized handle: all state lives in the curve's [`DomainParams`].
/// Every operation is a pure function of its arguments.
///
/// Operations on [`Point`] do not validate their inputs. For points on the
/// curve they implement the group law; for points off the curve the result
/// is unspecified, but they never panic.
pub struct CurveGroup<C: PrimeCurveParams> {
    curve: PhantomData<C>,
}

impl<C: PrimeCurveParams> CurveGroup<C> {
    /// Create a handle for curve `C`.
    pub const fn new() -> Self {
        Self {
            curve: PhantomData,
        }
    }

    /// Domain parameters of the curve.
    pub fn params(&self) -> &'static DomainParams {
        C::domain()
    }

    /// Prime modulus `p` of the base field.
    pub fn modulus(&self) -> &'static BigUint {
        C::domain().modulus()
    }

    /// Order `n` of the base point.
    pub fn order(&self) -> &'static BigUint {
        C::domain().order()
    }

    /// Size in bytes of a serialized field element.
    pub fn field_bytes_len(&self) -> usize {
        C::domain().field_bytes_len()
    }

    /// Base point `G`.
    pub fn base_point(&self) -> Point {
        let (x, y) = C::domain().generator();
        Point::from_coordinates(x.clone(), y.clone())
    }

    /// Additive identity.
    pub fn identity(&self) -> Point {
        Point::Identity
    }

    /// Package two integers as a point without checking curve membership.
    pub fn point_from_coordinates(&self, x: BigUint, y: BigUint) -> Point {
        Point::from_coordinates(x, y)
    }

    /// Does `point` satisfy `y² ≡ x³ + a·x + b (mod p)` with both coordinates
    /// in `[0, p)`? The identity is always on the curve.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => {
                match (
                    FieldElement::<C>::from_canonical(x.clone()),
                    FieldElement::<C>::from_canonical(y.clone()),
                ) {
                    (Some(x), Some(y)) => y.square() == Self::curve_rhs(&x),
                    _ => false,
                }
            }
        }
    }

    /// Check `point` is on the curve.
    pub fn verify(&self, point: Point) -> Result<VerifiedPoint<C>> {
        if self.is_on_curve(&point) {
            Ok(VerifiedPoint::new_unchecked(point))
        } else {
            Err(Error::InvalidPoint)
        }
    }

    /// Numeric equality of coordinates.
    pub fn equals(&self, a: &Point, b: &Point) -> bool {
        a == b
    }

    /// Returns `a + b`.
    pub fn add(&self, a: &Point, b: &Point) -> Point {
        ProjectivePoint::<C>::from_point(a)
            .add(&ProjectivePoint::from_point(b))
            .to_point()
    }

    /// Returns `a + a`.
    pub fn double(&self, a: &Point) -> Point {
        ProjectivePoint::<C>::from_point(a).double().to_point()
    }

    /// Returns `-a`.
    pub fn negate(&self, a: &Point) -> Point {
        ProjectivePoint::<C>::from_point(a).neg().to_point()
    }

    /// Returns `a - b`.
    pub fn subtract(&self, a: &Point, b: &Point) -> Point {
        ProjectivePoint::<C>::from_point(a)
            .add(&ProjectivePoint::from_point(b).neg())
            .to_point()
    }

    /// Returns `[k] a` using double-and-add, most significant bit first.
    ///
    /// When the cofactor is 1 every point on the curve has order dividing
    /// `n`, so `k` is first reduced modulo `n`. Otherwise every bit of `k`
    /// is processed. `k = 0` yields the identity.
    ///
    /// Not constant-time.
    pub fn scalar_multiply(&self, k: &BigUint, a: &Point) -> Point {
        let params = C::domain();
        let point = ProjectivePoint::<C>::from_point(a);

        if params.cofactor() == 1 {
            point.mul(&(k % params.order())).to_point()
        } else {
            point.mul(k).to_point()
        }
    }

    /// Returns `[k] G`.
    pub fn multiply_base(&self, k: &BigUint) -> Point {
        self.scalar_multiply(k, &self.base_point())
    }

    /// SEC1 encoding of `point`, compressed or uncompressed. The identity
    /// encodes as the single byte `0x00`.
    ///
    /// Coordinates are reduced modulo `p` first.
    pub fn to_encoded_point(&self, point: &Point, compress: bool) -> EncodedPoint<C> {
        match point {
            Point::Identity => EncodedPoint::<C>::identity(),
            Point::Affine { x, y } => {
                let x = Self::field_bytes(FieldElement::<C>::from_uint(x).as_uint());
                let y = Self::field_bytes(FieldElement::<C>::from_uint(y).as_uint());
                EncodedPoint::<C>::from_affine_coordinates(&x, &y, compress)
            }
        }
    }

    /// Recover the point held by `encoded`. Compressed points are
    /// decompressed, uncompressed ones checked against the curve equation.
    ///
    /// The result is always on the curve.
    pub fn from_encoded_point(
        &self,
        encoded: &EncodedPoint<C>,
    ) -> core::result::Result<Point, DecodeError> {
        match encoded.coordinates() {
            Coordinates::Identity => Ok(Point::Identity),
            Coordinates::Compressed { x, y_is_odd } => self.decompress(x, y_is_odd),
            Coordinates::Uncompressed { x, y } => {
                let point =
                    Point::from_coordinates(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y));

                match &point {
                    Point::Affine { x, y } if x >= self.modulus() || y >= self.modulus() => {
                        Err(DecodeError::CoordinateOutOfRange)
                    }
                    _ if !self.is_on_curve(&point) => Err(DecodeError::NotOnCurve),
                    _ => Ok(point),
                }
            }
            _ => Err(DecodeError::InvalidTag(encoded.tag() as u8)),
        }
    }

    /// SEC1 compressed encoding: `0x02 | (y mod 2)` followed by `x`,
    /// big-endian, padded to [`Self::field_bytes_len`]. The identity encodes
    /// as the single byte `0x00`.
    ///
    /// Coordinates are reduced modulo `p` first.
    pub fn encode(&self, point: &Point) -> Vec<u8> {
        self.to_encoded_point(point, true).as_bytes().to_vec()
    }

    /// SEC1 uncompressed encoding: `0x04 ‖ x ‖ y`. The identity encodes as
    /// the single byte `0x00`.
    pub fn encode_uncompressed(&self, point: &Point) -> Vec<u8> {
        self.to_encoded_point(point, false).as_bytes().to_vec()
    }

    /// Decode a compressed point, recovering `y` from `x` and the parity in
    /// the tag. The single byte `0x00` decodes to the identity.
    ///
    /// Any tag other than `0x02` or `0x03` is rejected before the length is
    /// checked. The result is always on the curve.
    pub fn decode(&self, bytes: &[u8]) -> core::result::Result<Point, DecodeError> {
        if bytes == [Tag::Identity as u8] {
            return Ok(Point::Identity);
        }

        if let Some(&byte) = bytes.first() {
            match Tag::from_u8(byte) {
                Ok(Tag::CompressedEvenY | Tag::CompressedOddY) => (),
                _ => return Err(DecodeError::InvalidTag(byte)),
            }
        }

        self.decode_any(bytes)
    }

    /// Decode a compressed, uncompressed or identity encoding.
    ///
    /// The result is always on the curve.
    pub fn decode_any(&self, bytes: &[u8]) -> core::result::Result<Point, DecodeError> {
        let field_bytes_len = self.field_bytes_len();

        let tag = match bytes.first() {
            Some(&byte) => match Tag::from_u8(byte) {
                Ok(
                    tag @ (Tag::Identity
                    | Tag::CompressedEvenY
                    | Tag::CompressedOddY
                    | Tag::Uncompressed),
                ) => tag,
                _ => return Err(DecodeError::InvalidTag(byte)),
            },
            None => {
                return Err(DecodeError::InvalidLength {
                    expected: Tag::CompressedEvenY.message_len(field_bytes_len),
                    actual: 0,
                });
            }
        };

        let expected = tag.message_len(field_bytes_len);
        let encoded = EncodedPoint::<C>::from_bytes(bytes).map_err(|_| {
            DecodeError::InvalidLength {
                expected,
                actual: bytes.len(),
            }
        })?;

        self.from_encoded_point(&encoded)
    }

    /// Decode a compressed point as a [`VerifiedPoint`].
    pub fn decode_verified(&self, bytes: &[u8]) -> Result<VerifiedPoint<C>> {
        Ok(VerifiedPoint::new_unchecked(self.decode(bytes)?))
    }

    /// Lowercase hex of the compressed encoding.
    pub fn to_hex(&self, point: &Point) -> String {
        base16ct::lower::encode_string(&self.encode(point))
    }

    /// Decode the hex form produced by [`Self::to_hex`]. Either case is
    /// accepted.
    pub fn from_hex(&self, hex: &str) -> core::result::Result<Point, DecodeError> {
        let bytes = base16ct::mixed::decode_vec(hex).map_err(|_| DecodeError::InvalidHex)?;
        self.decode(&bytes)
    }

    /// Minimal lowercase hex of each coordinate, `None` for the identity.
    pub fn to_hex_pair(&self, point: &Point) -> Option<(String, String)> {
        match point {
            Point::Identity => None,
            Point::Affine { x, y } => Some((x.to_str_radix(16), y.to_str_radix(16))),
        }
    }

    /// Human readable description of `point` for diagnostics.
    pub fn describe(&self, point: &Point) -> String {
        format!("Compressed elliptic curve point is {}", self.to_hex(point))
    }

    /// `x³ + a·x + b`
    fn curve_rhs(x: &FieldElement<C>) -> FieldElement<C> {
        let params = C::domain();
        let a = FieldElement::<C>::from_uint(params.equation_a());
        let b = FieldElement::<C>::from_uint(params.equation_b());
        x.square() * x + a * x + b
    }

    /// Big-endian `value`, left-padded to the field size.
    fn field_bytes(value: &BigUint) -> GenericArray<u8, C::FieldBytesSize> {
        let bytes = value.to_bytes_be();
        let mut out = GenericArray::default();
        let offset = out.len() - bytes.len();
        out[offset..].copy_from_slice(&bytes);
        out
    }

    fn decompress(&self, x: &[u8], y_is_odd: bool) -> core::result::Result<Point, DecodeError> {
        let x = FieldElement::<C>::from_canonical(BigUint::from_bytes_be(x))
            .ok_or(DecodeError::CoordinateOutOfRange)?;
        let beta = Self::curve_rhs(&x).sqrt().ok_or(DecodeError::NotOnCurve)?;

        // y = 0 has no odd representative
        if beta.is_zero() && y_is_odd {
            return Err(DecodeError::NotOnCurve);
        }

        let y = if beta.is_odd() == y_is_odd { beta } else { -beta };
        Ok(Point::from_coordinates(x.into_uint(), y.into_uint()))
    }
}

impl<C: PrimeCurveParams> Clone for CurveGroup<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: PrimeCurveParams> Copy for CurveGroup<C> {}

impl<C: PrimeCurveParams> Default for CurveGroup<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PrimeCurveParams> fmt::Debug for CurveGroup<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CurveGroup").field(&C::NAME).finish()
    }
}
