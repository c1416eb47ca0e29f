//! Pure-strategy equilibrium detection.
//!
//! For any payoff matrix the row player can secure the maximin by playing
//! the row whose worst case is best, and the column player can hold the
//! row player to the minimax. Maximin never exceeds minimax; when the two
//! meet, the common value is the value of the game and every cell that is
//! both the minimum of its row and the maximum of its column is a saddle
//! point.
mod analyze;
mod equilibrium;
mod guarantees;

pub use analyze::*;
pub use equilibrium::*;
pub use guarantees::*;
