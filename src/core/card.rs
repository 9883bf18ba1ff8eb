use std::fmt;
use std::str::FromStr;

use crate::core::errors::CardParseError;

/// Card suits.
///
/// There is no ordering between suits; a flush in hearts is worth exactly as
/// much as the same flush in spades.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Hearts
    Heart = 1,
    /// Diamonds
    Diamond = 2,
    /// Clubs
    Club = 3,
}

/// All of the suits, in canonical deck order.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

impl Suit {
    /// Iterate over all four suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        SUITS.into_iter()
    }

    /// Parse a suit from its character code.
    ///
    /// Returns `None` if the char isn't one of `s`, `h`, `d`, `c`
    /// (either case).
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            'd' => Some(Suit::Diamond),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }

    /// The character code for this suit.
    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Diamond => 'd',
            Suit::Club => 'c',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Card values, two through ace.
///
/// The ace is high everywhere except the wheel straight (A-2-3-4-5), where
/// it plays low and the five is the straight's high card.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// All the values, ascending.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Iterate over all thirteen values, ascending.
    pub fn values() -> impl DoubleEndedIterator<Item = Value> {
        VALUES.into_iter()
    }

    /// Build a value from its zero based index (`Two` == 0, `Ace` == 12).
    ///
    /// Panics if the index is out of range.
    pub(crate) fn from_index(idx: u32) -> Value {
        VALUES[idx as usize]
    }

    /// Parse a value from its character code.
    pub fn from_char(c: char) -> Option<Value> {
        match c.to_ascii_uppercase() {
            '2' => Some(Value::Two),
            '3' => Some(Value::Three),
            '4' => Some(Value::Four),
            '5' => Some(Value::Five),
            '6' => Some(Value::Six),
            '7' => Some(Value::Seven),
            '8' => Some(Value::Eight),
            '9' => Some(Value::Nine),
            'T' => Some(Value::Ten),
            'J' => Some(Value::Jack),
            'Q' => Some(Value::Queen),
            'K' => Some(Value::King),
            'A' => Some(Value::Ace),
            _ => None,
        }
    }

    /// The character code for this value.
    pub fn to_char(self) -> char {
        match self {
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => 'T',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
            Value::Ace => 'A',
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A single playing card.
///
/// Cards are plain immutable values; two cards are equal iff both the value
/// and the suit match.
///
/// # Examples
///
/// ```
/// use showdown::core::{Card, Suit, Value};
///
/// let ace = Card::new(Value::Ace, Suit::Spade);
/// assert_eq!(ace, "As".parse().unwrap());
/// assert_eq!(ace.to_string(), "As");
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Card {
    /// The face value.
    pub value: Value,
    /// The suit.
    pub suit: Suit,
}

impl Card {
    /// Create a new card.
    pub fn new(value: Value, suit: Suit) -> Card {
        Card { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (value_char, suit_char) = match (chars.next(), chars.next(), chars.next()) {
            (Some(v), Some(s), None) => (v, s),
            _ => return Err(CardParseError::InvalidLength(s.len())),
        };
        let value =
            Value::from_char(value_char).ok_or(CardParseError::UnexpectedValueChar(value_char))?;
        let suit =
            Suit::from_char(suit_char).ok_or(CardParseError::UnexpectedSuitChar(suit_char))?;
        Ok(Card { value, suit })
    }
}

/// Parse a string of concatenated two character cards.
///
/// This is the same format `Card` parses, repeated: `"AsKd"` is the ace of
/// spades and the king of diamonds.
///
/// # Examples
///
/// ```
/// use showdown::core::{cards_from_str, Suit, Value};
///
/// let cards = cards_from_str("AsKd").unwrap();
/// assert_eq!(cards.len(), 2);
/// assert_eq!(cards[0].value, Value::Ace);
/// assert_eq!(cards[1].suit, Suit::Diamond);
/// ```
pub fn cards_from_str(s: &str) -> Result<Vec<Card>, CardParseError> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(CardParseError::InvalidLength(chars.len()));
    }
    chars
        .chunks(2)
        .map(|pair| {
            let value =
                Value::from_char(pair[0]).ok_or(CardParseError::UnexpectedValueChar(pair[0]))?;
            let suit =
                Suit::from_char(pair[1]).ok_or(CardParseError::UnexpectedSuitChar(pair[1]))?;
            Ok(Card { value, suit })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_equality() {
        let a = Card::new(Value::Ten, Suit::Heart);
        let b = Card::new(Value::Ten, Suit::Heart);
        let c = Card::new(Value::Ten, Suit::Diamond);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_card_parse_round_trip() {
        for suit in Suit::suits() {
            for value in Value::values() {
                let card = Card::new(value, suit);
                let parsed: Card = card.to_string().parse().unwrap();
                assert_eq!(card, parsed);
            }
        }
    }

    #[test]
    fn test_card_parse_case_insensitive() {
        let lower: Card = "ts".parse().unwrap();
        let upper: Card = "TS".parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower, Card::new(Value::Ten, Suit::Spade));
    }

    #[test]
    fn test_card_parse_rejects_garbage() {
        assert_eq!(
            "1s".parse::<Card>(),
            Err(CardParseError::UnexpectedValueChar('1'))
        );
        assert_eq!(
            "Ax".parse::<Card>(),
            Err(CardParseError::UnexpectedSuitChar('x'))
        );
        assert_eq!("Ash".parse::<Card>(), Err(CardParseError::InvalidLength(3)));
        assert_eq!("".parse::<Card>(), Err(CardParseError::InvalidLength(0)));
    }

    #[test]
    fn test_cards_from_str() {
        let cards = cards_from_str("2c3d4h").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Value::Two, Suit::Club),
                Card::new(Value::Three, Suit::Diamond),
                Card::new(Value::Four, Suit::Heart),
            ]
        );
    }

    #[test]
    fn test_cards_from_str_odd_length() {
        assert_eq!(cards_from_str("AsK"), Err(CardParseError::InvalidLength(3)));
    }

    #[test]
    fn test_value_ordering() {
        assert!(Value::Ace > Value::King);
        assert!(Value::Three > Value::Two);
        let mut prev = Value::Two;
        for v in Value::values().skip(1) {
            assert!(v > prev);
            prev = v;
        }
    }
}
