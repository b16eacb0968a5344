use crate::{
    generators::{check_name, derive_generators},
    windows::windows,
    PedersenError, Result,
};
use ark_std::iter;
use bjj_curve::{Point, ProjectivePoint};
use std::sync::{Mutex, OnceLock, PoisonError};


/// Domain name used when none is given; matches the ZoKrates standard library.
pub const DEFAULT_NAME: &str = "test";

/// A Pedersen hash configuration: a domain name and the generators derived
/// for it.
///
/// A hasher built with `segments == 0` is unsized. Its generators are derived
/// on the first successful call, sized to the number of windows in that
/// input, and fixed from then on. Derivation happens at most once even when
/// several threads race on the first call.
#[derive(Debug)]
pub struct PedersenHasher {
    name: String,
    generators: OnceLock<Vec<Point>>,
    init: Mutex<()>,
}

impl PedersenHasher {
    /// Creates a hasher for domain `name` (or [`DEFAULT_NAME`] if empty) with
    /// room for `segments` windows. Generators are derived now if
    /// `segments > 0`.
    pub fn new(name: &str, segments: usize) -> Result<Self> {
        let name = if name.is_empty() { DEFAULT_NAME } else { name };
        check_name(name)?;

        let generators = if segments > 0 {
            OnceLock::from(derive_generators(name, segments)?)
        } else {
            OnceLock::new()
        };
        Ok(Self {
            name: name.to_owned(),
            generators,
            init: Mutex::new(()),
        })
    }

    /// The effective domain name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of windows this hasher accepts, or `None` while still unsized.
    pub fn segments(&self) -> Option<usize> {
        self.generators.get().map(Vec::len)
    }

    /// The derived generators, once the hasher is sized.
    pub fn generators(&self) -> Option<&[Point]> {
        self.generators.get().map(Vec::as_slice)
    }

    fn generators_for(&self, num_windows: usize) -> Result<&[Point]> {
        if let Some(generators) = self.generators.get() {
            return Ok(generators);
        }

        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(generators) = self.generators.get() {
            return Ok(generators);
        }
        let generators = derive_generators(&self.name, num_windows)?;
        tracing::debug!(
            target: "bjj_pedersen",
            name = %self.name,
            segments = num_windows,
            "sized hasher from first input"
        );
        Ok(self.generators.get_or_init(|| generators))
    }

    /// Hashes a sequence of 3-bit windows (values in `0..=7`).
    ///
    /// Window `j` contributes `±(1 + (w & 0b011))·G_j`, negated when the high
    /// bit of `w` is set. Missing trailing windows count as zero.
    pub fn hash_windows(&self, windows: &[u8]) -> Result<Point> {
        if windows.is_empty() {
            return Err(PedersenError::EmptyInput);
        }
        let generators = self.generators_for(windows.len())?;
        if windows.len() > generators.len() {
            return Err(PedersenError::TooManySegments {
                windows: windows.len(),
                segments: generators.len(),
            });
        }

        let padded = windows.iter().copied().chain(iter::repeat(0));
        let acc = generators
            .iter()
            .zip(padded)
            .map(|(generator, window)| {
                let segment = generator.mul_bigint([u64::from(window & 0b011) + 1]);
                if window > 0b011 {
                    (-segment).into_projective()
                } else {
                    segment.into_projective()
                }
            })
            .sum::<ProjectivePoint>();
        Ok(acc.into_affine())
    }

    /// Hashes the concatenation of `pieces`. No separator or length prefix is
    /// inserted between them.
    pub fn hash_bytes(&self, pieces: &[&[u8]]) -> Result<Point> {
        let bytes = pieces.concat();
        if bytes.is_empty() {
            return Err(PedersenError::EmptyInput);
        }
        self.hash_windows(&windows(&bytes))
    }

    /// Hashes a single byte string.
    pub fn hash(&self, bytes: &[u8]) -> Result<Point> {
        self.hash_bytes(&[bytes])
    }
}
