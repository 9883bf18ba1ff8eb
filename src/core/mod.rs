//! Core card types and hand evaluation.
//!
//! Everything in this module is a pure value or a pure function: cards and
//! decks, the best-five hand evaluator, and dense showdown ranking. There
//! is no shared mutable state anywhere, so all of it is safe to call
//! concurrently.

/// Card value, suit, and parsing types.
mod card;
pub use self::card::{cards_from_str, Card, Suit, Value};

/// A 52-bit set of cards.
mod card_bit_set;
pub use self::card_bit_set::{CardBitSet, CardBitSetIter};

/// Non-allocating combination walk.
mod card_iter;
pub use self::card_iter::for_each_combination;

/// The deck and shuffling.
mod deck;
pub use self::deck::Deck;

/// Errors for card parsing.
mod errors;
pub use self::errors::CardParseError;

/// Best five card hand evaluation.
mod eval;
pub use self::eval::{evaluate, EvaluatedHand, HandCategory};

/// Dense competition ranking of evaluated hands.
mod ranking;
pub use self::ranking::rank_all;
