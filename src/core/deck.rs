use std::ops::Deref;

use rand::prelude::*;

use crate::core::card::{Card, Suit, Value};

/// An ordered sequence of cards.
///
/// `Deck::default()` is the canonical full deck: every (suit, value) pair
/// exactly once, suit major, values ascending within a suit. Shuffling is a
/// uniform Fisher-Yates permutation driven by a caller supplied generator,
/// so a fixed seed gives a reproducible deal.
///
/// # Examples
///
/// ```
/// use rand::prelude::*;
/// use showdown::core::Deck;
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let deck = Deck::default().shuffled(&mut rng);
/// assert_eq!(deck.len(), Deck::SIZE);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Shuffle the deck in place.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Consume the deck and return a shuffled copy of it.
    pub fn shuffled<R: Rng>(mut self, rng: &mut R) -> Deck {
        self.shuffle(rng);
        self
    }

    /// Deal a card off the top of the deck, or `None` if it's empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|suit| Value::values().map(move |value| Card::new(value, suit)))
            .collect();
        Deck { cards }
    }
}

impl Deref for Deck {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
