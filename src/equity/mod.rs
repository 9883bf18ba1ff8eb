//! Win-probability estimation.
//!
//! Given each player's hole cards and the public board, estimate every
//! player's share of the pot: deterministically when the board is
//! complete, by Monte Carlo sampling of the unseen cards otherwise, or by
//! exhaustively enumerating the remaining board completions when their
//! count is small enough to walk.

/// Module with the sequential, parallel, and enumerating estimators.
mod simulator;
/// Export the estimators and their result/error types.
pub use self::simulator::{
    enumerate_equity, estimate_equity, par_estimate_equity, EquityError, EquityResult,
};
