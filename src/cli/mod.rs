//! Command line front end for the `saddle` binary.
mod cli;
mod query;

pub use cli::*;
pub use query::*;
