//! Deterministic, domain-separated generator points.
//!
//! Generators come in groups of [`GENERATORS_PER_GROUP`]. The first generator
//! of group `i` is the hash-to-curve image of `SHA-256(seed(name, i))`, and
//! every following generator in the group is the previous one doubled four
//! times.

use crate::{PedersenError, Result};
use ark_std::{cfg_into_iter, cmp::min, vec::Vec};
use bjj_curve::{hash_to_curve, Point};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use sha2::{Digest, Sha256};

/// Width of the space-padded name field of a seed.
pub const NAME_LENGTH: usize = 28;

/// Number of generators derived from one base point.
pub const GENERATORS_PER_GROUP: usize = 62;

/// Largest group index that fits in the four hex digits of a seed.
pub const MAX_GROUP_INDEX: usize = 0xFFFF;

const DOUBLINGS_PER_GENERATOR: usize = 4;

pub(crate) fn check_name(name: &str) -> Result<()> {
    if name.len() > NAME_LENGTH {
        return Err(PedersenError::NameTooLong);
    }
    Ok(())
}

fn check_group_index(index: usize) -> Result<()> {
    if index > MAX_GROUP_INDEX {
        return Err(PedersenError::SequenceTooLarge);
    }
    Ok(())
}

/// The seed of group `index`: `name` left-justified in 28 bytes padded with
/// spaces, followed by `index` as four uppercase hex digits.
pub fn seed(name: &str, index: usize) -> Result<Vec<u8>> {
    check_group_index(index)?;
    check_name(name)?;

    let mut seed = Vec::with_capacity(NAME_LENGTH + 4);
    seed.extend_from_slice(name.as_bytes());
    seed.resize(NAME_LENGTH, b' ');
    seed.extend_from_slice(format!("{index:04X}").as_bytes());
    Ok(seed)
}

/// The first generator of group `index`.
#[tracing::instrument(target = "bjj_pedersen", level = "trace")]
pub fn base_point(name: &str, index: usize) -> Result<Point> {
    let seed = seed(name, index)?;
    let digest = Sha256::digest(&seed);
    Ok(hash_to_curve::from_bytes(&digest)?)
}

fn derive_group(name: &str, index: usize, len: usize) -> Result<Vec<Point>> {
    let mut generators = Vec::with_capacity(len);
    let mut current = base_point(name, index)?;
    generators.push(current);
    for _ in 1..len {
        let mut p = current.into_projective();
        for _ in 0..DOUBLINGS_PER_GENERATOR {
            p.double_in_place();
        }
        current = p.into_affine();
        generators.push(current);
    }
    Ok(generators)
}

/// Derives the first `segments` generators for the domain `name`.
///
/// The name and the highest group index are validated before any hashing.
#[tracing::instrument(target = "bjj_pedersen", level = "debug")]
pub fn derive_generators(name: &str, segments: usize) -> Result<Vec<Point>> {
    check_name(name)?;
    let num_groups = segments.div_ceil(GENERATORS_PER_GROUP);
    if num_groups > 0 {
        check_group_index(num_groups - 1)?;
    }

    let groups = cfg_into_iter!(0..num_groups)
        .map(|index| {
            let len = min(
                GENERATORS_PER_GROUP,
                segments - index * GENERATORS_PER_GROUP,
            );
            derive_group(name, index, len)
        })
        .collect::<Result<Vec<_>>>()?;

    let generators: Vec<Point> = groups.into_iter().flatten().collect();
    tracing::debug!(
        target: "bjj_pedersen",
        segments,
        groups = num_groups,
        "derived generators"
    );
    Ok(generators)
}
