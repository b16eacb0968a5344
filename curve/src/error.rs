use core::fmt;

/// This is an error that could occur while decoding or deriving a curve point.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CurveError {
    /// The candidate x² has no square root modulo `Q`.
    NoSquareRoot,
    /// The point is on the curve but outside the prime-order subgroup.
    NotInSubgroup,
    /// The encoding is not the canonical compression of any point.
    NonCanonicalEncoding,
}

impl ark_std::error::Error for CurveError {}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            CurveError::NoSquareRoot => write!(f, "square root does not exist"),
            CurveError::NotInSubgroup => write!(f, "point not on the prime-order subgroup"),
            CurveError::NonCanonicalEncoding => write!(f, "non-canonical point encoding"),
        }
    }
}
