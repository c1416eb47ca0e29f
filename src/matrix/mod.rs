//! Rectangular integer payoff matrices.
//!
//! A [`PayoffMatrix`] is validated once, at construction, so everything
//! downstream can index rows and columns without re-checking shape.
mod cell;
mod error;
mod payoff;

pub use cell::*;
pub use error::*;
pub use payoff::*;
