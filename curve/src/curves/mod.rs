use crate::{Fq, Fr};
use ark_ff::{MontFp, PrimeField};

pub(crate) mod affine;
mod projective;
mod serialization;


pub use affine::{Point, COMPRESSED_POINT_SIZE};
pub use projective::ProjectivePoint;

/// `Baby-Jubjub` is a twisted Edwards curve. These curves have equations of the
/// form: ax² + y² = 1 + dx²y².
/// over some base finite field Fq.
///
/// Baby-Jubjub's curve equation: 168700x² + y² = 1 + 168696x²y²
///
/// COEFF_A = 168700
pub const COEFF_A: Fq = MontFp!("168700");

/// COEFF_D = 168696
pub const COEFF_D: Fq = MontFp!("168696");

/// COFACTOR = 8
pub const COFACTOR: &[u64] = &[8];

/// Order `L` of the prime-order subgroup, as little-endian limbs.
pub const SUBGROUP_ORDER: <Fr as PrimeField>::BigInt = Fr::MODULUS;

const B8_X: Fq =
    MontFp!("5299619240641551281634865583518297030282874472190772894086521144482721001553");
const B8_Y: Fq =
    MontFp!("16950150798460657717958625567821834550301663161624707787222815936182638968203");

/// Cofactor-cleared generator of the prime-order subgroup.
pub const B8: Point = Point::new(B8_X, B8_Y);

#[inline(always)]
pub(crate) fn mul_by_a(elem: &Fq) -> Fq {
    COEFF_A * elem
}
