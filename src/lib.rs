//! A library for Texas Hold'em hand strength calculations.
//!
//! The crate is a pure, stateless computation core meant to sit behind an
//! orchestrator that owns the deck and the game stage. It covers four
//! things:
//!
//! * Card and deck types: [crate::core::Card], [crate::core::Deck], fair
//!   shuffling with a caller supplied generator.
//! * Best five card hand evaluation over 2 hole plus 0-5 board cards:
//!   [crate::core::evaluate] returning a [crate::core::EvaluatedHand]
//!   with its category, a totally ordered strength score, and kicker data.
//! * Dense competition ranking of hands at showdown:
//!   [crate::core::rank_all].
//! * Equity estimation: [crate::equity::estimate_equity] and friends,
//!   exact on a full board and Monte Carlo over the unseen cards
//!   otherwise.
//!
//! ```
//! use rand::prelude::*;
//! use showdown::core::{cards_from_str, evaluate, rank_all, HandCategory};
//! use showdown::equity::estimate_equity;
//!
//! let button = cards_from_str("AsKs").unwrap();
//! let big_blind = cards_from_str("QhQd").unwrap();
//! let board = cards_from_str("Qs9s2h").unwrap();
//!
//! let hands = vec![
//!     evaluate([button[0], button[1]], &board),
//!     evaluate([big_blind[0], big_blind[1]], &board),
//! ];
//! assert_eq!(hands[1].category, HandCategory::ThreeOfAKind);
//! assert_eq!(rank_all(&hands), vec![2, 1]);
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let players = [[button[0], button[1]], [big_blind[0], big_blind[1]]];
//! let equity = estimate_equity(&players, &board, 1000, &mut rng).unwrap();
//! assert!(equity[1].equity_percent > equity[0].equity_percent);
//! ```
//!
//! Everything is immutable once produced and free of shared mutable
//! state, so values can be shared across threads without copying.

/// Core card types and hand evaluation.
pub mod core;

/// Equity estimation.
pub mod equity;
