//! Pure-strategy equilibrium analysis for two-player zero-sum matrix games.
//!
//! ## Modules
//!
//! - `matrix`: Rectangular payoff matrices and cell coordinates
//! - `saddle`: Maximin/minimax guarantees and saddle-point detection
//! - `catalog`: Canonical games (coin, chicken, Morra, Blotto, ...)
//! - `report`: Text rendering of an analysis
//! - `cli`: Command line queries for the `saddle` binary
pub mod catalog;
pub mod matrix;
pub mod report;
pub mod saddle;

#[cfg(feature = "cli")]
pub mod cli;

pub use catalog::*;
pub use matrix::*;
pub use report::*;
pub use saddle::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payoff to the row player. The column player receives the negation.
pub type Payoff = i64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// DEMONSTRATION PARAMETERS
// ============================================================================
/// Payoff when both coins match in the default coin game.
pub const COIN_SAME: Payoff = 2;
/// Payoff when the coins differ in the default coin game.
pub const COIN_DIFF: Payoff = -3;
/// Largest integer offered in the demonstration integers game.
pub const INTEGERS_K: usize = 4;
/// Troops per side in the demonstration Blotto game.
pub const BLOTTO_TROOPS: usize = 3;
/// Seller demonstration: stock ceiling, unit price, unit penalty, demand range.
pub const SELLER_STOCK: usize = 5;
pub const SELLER_PRICE: Payoff = 10;
pub const SELLER_PENALTY: Payoff = 4;
pub const SELLER_DEMAND_MIN: usize = 0;
pub const SELLER_DEMAND_MAX: usize = 5;

// ============================================================================
// RANDOM MATRIX GENERATION
// ============================================================================
/// Largest side length of an arbitrary matrix.
pub const ARBITRARY_MAX_SIDE: usize = 8;
/// Arbitrary payoffs are drawn from `-ARBITRARY_MAX_PAYOFF..=ARBITRARY_MAX_PAYOFF`.
/// Kept small so that ties, and therefore multiple saddle points, are common.
pub const ARBITRARY_MAX_PAYOFF: Payoff = 3;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr so stdout stays clean for reports.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    if term.is_err() {
        log::warn!("logger already initialized");
    }
}
