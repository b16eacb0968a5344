//! Deterministic try-and-increment map from bytes to the prime-order subgroup.
//!
//! This is vulnerable to timing attacks and is only meant for public inputs,
//! such as the domain-separation seeds used to derive Pedersen generators.

use crate::{curves::affine::x_from_y, CurveError, Fq, Point};
use ark_ff::{One, PrimeField};

/// Lifts `y` to the curve, choosing the larger of the two candidate
/// x-coordinates under integer ordering.
///
/// This sign convention is independent of the parity bit used by
/// [`Point::compress`]; the two must not be unified.
pub fn from_y(y: Fq) -> Result<Point, CurveError> {
    let x = x_from_y(&y)?;
    let neg_x = -x;
    let x = if x.into_bigint() < neg_x.into_bigint() {
        neg_x
    } else {
        x
    };
    Ok(Point::new(x, y))
}

/// Interprets `bytes` as a big-endian integer reduced modulo `Q`, increments it
/// until it is the y-coordinate of a curve point, and clears the cofactor.
#[tracing::instrument(target = "bjj_curve", level = "trace", skip(bytes))]
pub fn from_bytes(bytes: &[u8]) -> Result<Point, CurveError> {
    let mut y = Fq::from_be_bytes_mod_order(bytes);
    let mut attempts = 1u64;
    let point = loop {
        match from_y(y) {
            Ok(p) => break p,
            Err(_) => {
                y += Fq::one();
                attempts += 1;
            },
        }
    };
    tracing::trace!(attempts, "found curve point");

    let point = point.scale_by_cofactor();
    if point.is_in_subgroup() {
        Ok(point)
    } else {
        Err(CurveError::NotInSubgroup)
    }
}
