//! Group arithmetic on the Baby-Jubjub twisted Edwards curve, in the
//! coordinates used by circom and ZoKrates circuits.
//!
//! Curve information:
//! * Base field: q = 21888242871839275222246405745257275088548364400416034343698204186575808495617
//! * Scalar field: r = 2736030358979909402780800718157159386076813972158567259200215660948447373041
//! * Valuation(q - 1, 2) = 28
//! * Valuation(r - 1, 2) = 4
//! * Curve equation: ax^2 + y^2 =1 + dx^2y^2, where
//!    * a = 168700
//!    * d = 168696
//! * Cofactor: 8
//!
//! Arithmetic is variable time. Points are plain values; chains of operations
//! accumulate in [`ProjectivePoint`] and pay one inversion when converted back.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(
    unused,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    clippy::pedantic
)]
#![allow(
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::inline_always,
    clippy::module_name_repetitions
)]
#![deny(unsafe_code)]

#[macro_use]
mod macros;

mod curves;
mod error;
mod fields;

pub mod hash_to_curve;

pub use curves::*;
pub use error::CurveError;
pub use fields::*;

/// A result type specialized to `CurveError`.
pub type Result<T> = core::result::Result<T, CurveError>;
