pub mod fq;
pub mod fr;

pub use fq::*;
pub use fr::*;

#[cfg(test)]
mod tests;
