use bjj_curve::CurveError;
use core::fmt;

/// This is an error that could occur while configuring or evaluating a
/// Pedersen hash.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum PedersenError {
    /// The domain name does not fit in the 28-byte seed field.
    NameTooLong,
    /// A generator group index does not fit in four hex digits.
    SequenceTooLarge,
    /// The input has more windows than the configuration has generators.
    TooManySegments {
        /// Number of 3-bit windows in the input.
        windows: usize,
        /// Number of generators in the configuration.
        segments: usize,
    },
    /// Nothing to hash.
    EmptyInput,
    /// Deriving a generator point failed.
    Curve(CurveError),
}

impl ark_std::error::Error for PedersenError {}

impl From<CurveError> for PedersenError {
    fn from(e: CurveError) -> Self {
        PedersenError::Curve(e)
    }
}

impl fmt::Display for PedersenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            PedersenError::NameTooLong => write!(f, "name too long"),
            PedersenError::SequenceTooLarge => write!(f, "sequence number invalid"),
            PedersenError::TooManySegments { windows, segments } => write!(
                f,
                "number of windows exceeds pedersen hasher config: {windows} vs. {segments}"
            ),
            PedersenError::EmptyInput => write!(f, "cannot hash empty input"),
            PedersenError::Curve(e) => write!(f, "generator derivation failed: {e}"),
        }
    }
}
