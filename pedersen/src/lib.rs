//! A windowed Pedersen hash over Baby-Jubjub, bit-for-bit compatible with the
//! `pedersen` gadget of the ZoKrates standard library.
//!
//! The input is read as 3-bit windows. Window `j` selects a multiple
//! `±1..=±4` of generator `G_j`, and the hash is the sum of the selected
//! multiples. Generators are derived deterministically from a domain name,
//! see [`generators`].
//!
//! ```ignore
//! let hasher = PedersenHasher::new("test", 0)?;
//! let point = hasher.hash(b"abc")?;
//! let digest: [u8; 32] = point.compress();
//! ```

#![warn(
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_docs,
    clippy::pedantic
)]
#![allow(
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
#![deny(unsafe_code)]

pub mod bits;

mod error;

pub mod generators;

mod hasher;

pub mod windows;

pub use bjj_curve::Point;
pub use error::PedersenError;
pub use hasher::{PedersenHasher, DEFAULT_NAME};

/// A result type specialized to `PedersenError`.
pub type Result<T> = core::result::Result<T, PedersenError>;
