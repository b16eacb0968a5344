use crate::{curves::mul_by_a, Fq, Point, COEFF_D};
use ark_ff::{BitIteratorLE, Field, One, Zero};
use core::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

/// A point in homogeneous projective coordinates, `(X : Y : Z)` standing for
/// the affine point `(X/Z, Y/Z)`.
///
/// This is the accumulator used by every chain of group operations: additions
/// stay inversion-free and a single inversion is paid in [`Self::into_affine`].
#[derive(Copy, Clone, Debug)]
#[must_use]
pub struct ProjectivePoint {
    pub x: Fq,
    pub y: Fq,
    pub z: Fq,
}

impl ProjectivePoint {
    pub const fn new(x: Fq, y: Fq, z: Fq) -> Self {
        Self { x, y, z }
    }

    pub fn is_normalized(&self) -> bool {
        self.z.is_one()
    }

    /// Converts back to affine coordinates with one field inversion.
    pub fn into_affine(&self) -> Point {
        match self.z.inverse() {
            Some(z_inv) => Point::new(self.x * z_inv, self.y * z_inv),
            // Unreachable for the complete addition law.
            None => Point::zero(),
        }
    }

    /// Doubling is addition with itself; the addition law is complete so no
    /// dedicated formula is needed.
    pub fn double(&self) -> Self {
        let mut tmp = *self;
        tmp += self;
        tmp
    }

    pub fn double_in_place(&mut self) -> &mut Self {
        let tmp = *self;
        *self += &tmp;
        self
    }

    /// Binary double-and-add over the little-endian limbs of `scalar`, least
    /// significant bit first. The scalar is used as given and is not reduced
    /// modulo the subgroup order.
    pub fn mul_bigint(&self, scalar: impl AsRef<[u64]>) -> Self {
        let mut res = Self::zero();
        let mut exp = *self;
        for bit in BitIteratorLE::without_trailing_zeros(scalar) {
            if bit {
                res += &exp;
            }
            exp.double_in_place();
        }
        res
    }
}

impl Zero for ProjectivePoint {
    fn zero() -> Self {
        Self::new(Fq::zero(), Fq::one(), Fq::one())
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y == self.z && !self.y.is_zero()
    }
}

impl Default for ProjectivePoint {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for ProjectivePoint {
    fn eq(&self, other: &Self) -> bool {
        // x1/z1 == x2/z2  <==> x1 * z2 == x2 * z1
        (self.x * other.z) == (other.x * self.z) && (self.y * other.z) == (other.y * self.z)
    }
}

impl Eq for ProjectivePoint {}

impl PartialEq<Point> for ProjectivePoint {
    fn eq(&self, other: &Point) -> bool {
        *self == other.into_projective()
    }
}

impl Display for ProjectivePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.into_affine())
    }
}

impl From<Point> for ProjectivePoint {
    #[inline]
    fn from(p: Point) -> Self {
        p.into_projective()
    }
}

impl From<ProjectivePoint> for Point {
    #[inline]
    fn from(p: ProjectivePoint) -> Self {
        p.into_affine()
    }
}

impl Neg for ProjectivePoint {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.x = -self.x;
        self
    }
}

impl<'a> AddAssign<&'a Self> for ProjectivePoint {
    fn add_assign(&mut self, other: &'a Self) {
        // add-2008-bbjlp
        // https://hyperelliptic.org/EFD/g1p/auto-twisted-projective.html#addition-add-2008-bbjlp

        // A = Z1*Z2
        let a = self.z * other.z;
        // B = A^2
        let b = a.square();
        // C = X1*X2
        let c = self.x * other.x;
        // D = Y1*Y2
        let d = self.y * other.y;
        // E = d*C*D
        let e = COEFF_D * c * d;
        // F = B-E
        let f = b - e;
        // G = B+E
        let g = b + e;
        // X3 = A*F*((X1+Y1)*(X2+Y2)-C-D)
        self.x = a * f * ((self.x + self.y) * (other.x + other.y) - c - d);
        // Y3 = A*G*(D-a*C)
        self.y = a * g * (d - mul_by_a(&c));
        // Z3 = F*G
        self.z = f * g;
    }
}

impl<'a> Add<&'a Self> for ProjectivePoint {
    type Output = Self;

    fn add(self, other: &'a Self) -> Self {
        let mut copy = self;
        copy += other;
        copy
    }
}

impl<'a> SubAssign<&'a Self> for ProjectivePoint {
    fn sub_assign(&mut self, other: &'a Self) {
        *self += &(-(*other));
    }
}

impl<'a> Sub<&'a Self> for ProjectivePoint {
    type Output = Self;

    fn sub(self, other: &'a Self) -> Self {
        let mut copy = self;
        copy -= other;
        copy
    }
}

impl_additive_ops_from_ref!(ProjectivePoint);
