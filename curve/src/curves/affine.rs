use crate::{
    curves::{mul_by_a, B8, COFACTOR, SUBGROUP_ORDER},
    CurveError, Fq, Fr, ProjectivePoint, COEFF_A, COEFF_D,
};
use ark_ff::{BigInteger, Field, One, PrimeField, Zero};
use core::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
};

/// Size in bytes of a compressed point.
pub const COMPRESSED_POINT_SIZE: usize = 32;

const SIGN_MASK: u8 = 0x80;

/// An affine point `(x, y)`. Equality is plain coordinate equality.
///
/// A `Point` is not guaranteed to lie on the curve; use [`Point::is_on_curve`]
/// and [`Point::is_in_subgroup`] on untrusted values.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[must_use]
pub struct Point {
    pub x: Fq,
    pub y: Fq,
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Point(x={}, y={})", self.x, self.y)
    }
}

impl Point {
    pub const fn new(x: Fq, y: Fq) -> Self {
        Self { x, y }
    }

    /// The cofactor-cleared subgroup generator `B8`.
    pub fn generator() -> Self {
        B8
    }

    pub fn into_projective(&self) -> ProjectivePoint {
        ProjectivePoint::new(self.x, self.y, Fq::one())
    }

    pub fn double(&self) -> Self {
        self.into_projective().double().into_affine()
    }

    /// Multiplies `self` by `scalar`, given as little-endian `u64` limbs.
    /// The scalar is not reduced modulo the subgroup order.
    pub fn mul_bigint(&self, scalar: impl AsRef<[u64]>) -> Self {
        self.into_projective().mul_bigint(scalar).into_affine()
    }

    pub fn scale_by_cofactor(&self) -> Self {
        self.mul_bigint(COFACTOR)
    }

    /// Checks that the current point is on the elliptic curve.
    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();

        let lhs = y2 + mul_by_a(&x2);
        let rhs = Fq::one() + COEFF_D * (x2 * y2);

        lhs == rhs
    }

    /// Checks that the current point is in the prime order subgroup given
    /// the point on the curve.
    pub fn is_in_correct_subgroup_assuming_on_curve(&self) -> bool {
        self.mul_bigint(SUBGROUP_ORDER).is_zero()
    }

    /// Curve membership plus `L·P == 0`. Rejects points with a non-trivial
    /// cofactor component.
    pub fn is_in_subgroup(&self) -> bool {
        self.is_on_curve() && self.is_in_correct_subgroup_assuming_on_curve()
    }

    /// Packs the point into 32 bytes: `y` big-endian, right-aligned, with the
    /// top bit of the first byte set iff `x` is odd.
    pub fn compress(&self) -> [u8; COMPRESSED_POINT_SIZE] {
        let mut buf = [0u8; COMPRESSED_POINT_SIZE];
        let y = self.y.into_bigint().to_bytes_be();
        buf[COMPRESSED_POINT_SIZE - y.len()..].copy_from_slice(&y);
        if self.x.into_bigint().is_odd() {
            buf[0] |= SIGN_MASK;
        }
        buf
    }

    /// Inverse of [`Point::compress`]. The result is on the curve but may lie
    /// outside the prime-order subgroup.
    pub fn decompress(buf: &[u8; COMPRESSED_POINT_SIZE]) -> Result<Self, CurveError> {
        let odd = buf[0] & SIGN_MASK != 0;
        let mut y_bytes = *buf;
        y_bytes[0] &= !SIGN_MASK;

        let y = Fq::from_be_bytes_mod_order(&y_bytes);
        if y.into_bigint().to_bytes_be() != y_bytes {
            return Err(CurveError::NonCanonicalEncoding);
        }

        let x = x_from_y(&y)?;
        // -0 = 0, so there is no odd root to select.
        if x.is_zero() && odd {
            return Err(CurveError::NonCanonicalEncoding);
        }
        let x = if x.into_bigint().is_odd() == odd { x } else { -x };
        Ok(Self::new(x, y))
    }

    /// [`Point::decompress`] followed by a prime-order subgroup check.
    pub fn decompress_in_subgroup(buf: &[u8; COMPRESSED_POINT_SIZE]) -> Result<Self, CurveError> {
        let p = Self::decompress(buf)?;
        if p.is_in_correct_subgroup_assuming_on_curve() {
            Ok(p)
        } else {
            Err(CurveError::NotInSubgroup)
        }
    }
}

/// Solves the curve equation for `x`:
/// `x² = (y² − 1) / (d·y² − a)`, returning either of the two roots.
pub(crate) fn x_from_y(y: &Fq) -> Result<Fq, CurveError> {
    let y2 = y.square();
    let numerator = y2 - Fq::one();
    let denominator = COEFF_D * y2 - COEFF_A;
    denominator
        .inverse()
        .map(|denom| numerator * denom)
        .and_then(|x2| x2.sqrt())
        .ok_or(CurveError::NoSquareRoot)
}

impl Zero for Point {
    fn zero() -> Self {
        Self::new(Fq::zero(), Fq::one())
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() & self.y.is_one()
    }
}

impl Default for Point {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, self.y)
    }
}

impl<'a> AddAssign<&'a Self> for Point {
    fn add_assign(&mut self, other: &'a Self) {
        *self = (self.into_projective() + other.into_projective()).into_affine();
    }
}

impl<'a> Add<&'a Self> for Point {
    type Output = Self;

    fn add(self, other: &'a Self) -> Self {
        let mut copy = self;
        copy += other;
        copy
    }
}

impl<'a> SubAssign<&'a Self> for Point {
    fn sub_assign(&mut self, other: &'a Self) {
        *self += &(-(*other));
    }
}

impl<'a> Sub<&'a Self> for Point {
    type Output = Self;

    fn sub(self, other: &'a Self) -> Self {
        let mut copy = self;
        copy -= other;
        copy
    }
}

impl_additive_ops_from_ref!(Point);

impl Mul<Fr> for Point {
    type Output = Self;

    fn mul(self, other: Fr) -> Self {
        self.mul_bigint(other.into_bigint())
    }
}

impl PartialEq<ProjectivePoint> for Point {
    fn eq(&self, other: &ProjectivePoint) -> bool {
        self.into_projective() == *other
    }
}
