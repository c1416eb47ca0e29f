//! Canonical two-player zero-sum games as payoff matrices.
//!
//! Every constructor is a pure function of its parameters and returns
//! payoffs to the row player. Constructors whose parameters have a
//! restricted domain return `anyhow::Result`.
mod blotto;
mod catalog;
mod classic;
mod coin;
mod integers;
mod morra;
mod seller;
mod signs;

pub use blotto::*;
pub use catalog::*;
pub use classic::*;
pub use coin::*;
pub use integers::*;
pub use morra::*;
pub use seller::*;
pub use signs::*;
