use crate::core::card::{Card, Value};
use crate::core::card_bit_set::CardBitSet;
use crate::core::card_iter::for_each_combination;

/// The ten hand categories, weakest first.
///
/// The set is closed and totally ordered: any straight flush beats any four
/// of a kind, regardless of the suits or values involved. Only values and
/// the suit pattern matter, never which specific suit.
///
/// Mapping categories to display strings is a presentation concern left to
/// callers; the core only ever returns the tag.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum HandCategory {
    /// No matching cards.
    HighCard = 0,
    /// Two cards of one value.
    OnePair = 1,
    /// Two different pairs.
    TwoPair = 2,
    /// Three cards of one value.
    ThreeOfAKind = 3,
    /// Five consecutive values.
    Straight = 4,
    /// Five cards of one suit.
    Flush = 5,
    /// Three of one value and two of another.
    FullHouse = 6,
    /// Four cards of one value.
    FourOfAKind = 7,
    /// Five consecutive values of one suit.
    StraightFlush = 8,
    /// The ace high straight flush.
    RoyalFlush = 9,
}

impl HandCategory {
    fn from_index(idx: u32) -> HandCategory {
        match idx {
            0 => HandCategory::HighCard,
            1 => HandCategory::OnePair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::ThreeOfAKind,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::FourOfAKind,
            8 => HandCategory::StraightFlush,
            9 => HandCategory::RoyalFlush,
            _ => unreachable!(),
        }
    }
}

/// The best five card hand a player can make, with everything needed to
/// compare it against other hands and to explain the comparison.
///
/// Recomputed from scratch on every [evaluate] call; nothing is cached
/// across board updates.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct EvaluatedHand {
    /// Which of the ten tiers the hand lands in.
    pub category: HandCategory,
    /// Single totally ordered score. Comparing two hands by this scalar
    /// alone reproduces the full category plus kicker ordering.
    pub strength: u32,
    /// The deciding values, strongest first: the category's defining
    /// values followed by any tie breaking kickers.
    pub kickers: Vec<Value>,
    /// The exact cards making the hand, sorted by value descending. Fewer
    /// than five only before the flop.
    pub best_five: Vec<Card>,
}

/// Category lives in the bits above the tie break data.
const CATEGORY_SHIFT: u32 = 26;
const TIEBREAK_MASK: u32 = (1 << CATEGORY_SHIFT) - 1;

/// Bit mask for the wheel (ace, two, three, four, five).
const WHEEL: u32 = 0b1_0000_0000_1111;

#[inline]
fn pack(category: HandCategory, tiebreak: u32) -> u32 {
    debug_assert!(tiebreak <= TIEBREAK_MASK);
    ((category as u32) << CATEGORY_SHIFT) | tiebreak
}

/// Find a straight in a set of value bits and return its high value index.
///
/// The wheel reports `Five` as its high card, which keeps it below every
/// other straight when compared.
fn rank_straight(value_set: u32) -> Option<u32> {
    let run = value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4);
    if run != 0 {
        Some(31 - run.leading_zeros())
    } else if value_set & WHEEL == WHEEL {
        Some(Value::Five as u32)
    } else {
        None
    }
}

/// Score exactly five cards into a single ordered scalar.
///
/// Dispatches on the number of distinct values, which pins down the
/// possible categories cheaply: five distinct values can only be some mix
/// of straight, flush, and high card; four distinct values is always one
/// pair; and so on.
fn score_five(cards: &[Card]) -> u32 {
    let mut value_set: u32 = 0;
    let mut suit_set: u8 = 0;
    let mut value_to_count = [0u8; 13];

    for c in cards {
        value_set |= 1 << c.value as u32;
        suit_set |= 1 << c.suit as u8;
        value_to_count[c.value as usize] += 1;
    }

    // Rotate into count => bitset of values with that count.
    let mut count_to_value = [0u32; 5];
    for (value, &count) in value_to_count.iter().enumerate() {
        count_to_value[count as usize] |= 1 << value;
    }

    match value_set.count_ones() {
        5 => {
            let is_flush = suit_set.count_ones() == 1;
            match (rank_straight(value_set), is_flush) {
                (None, false) => pack(HandCategory::HighCard, value_set),
                (Some(high), false) => pack(HandCategory::Straight, high),
                (None, true) => pack(HandCategory::Flush, value_set),
                (Some(high), true) if high == Value::Ace as u32 => {
                    pack(HandCategory::RoyalFlush, 0)
                }
                (Some(high), true) => pack(HandCategory::StraightFlush, high),
            }
        }
        4 => {
            let pair = count_to_value[2];
            pack(HandCategory::OnePair, (pair << 13) | (value_set ^ pair))
        }
        3 => {
            let trips = count_to_value[3];
            if trips != 0 {
                pack(HandCategory::ThreeOfAKind, (trips << 13) | (value_set ^ trips))
            } else {
                let pairs = count_to_value[2];
                pack(HandCategory::TwoPair, (pairs << 13) | (value_set ^ pairs))
            }
        }
        2 => {
            let trips = count_to_value[3];
            if trips != 0 {
                pack(HandCategory::FullHouse, (trips << 13) | (value_set ^ trips))
            } else {
                let quads = count_to_value[4];
                pack(HandCategory::FourOfAKind, (quads << 13) | (value_set ^ quads))
            }
        }
        _ => unreachable!(),
    }
}

/// Group the hand's values by multiplicity, most copies first, higher
/// value first within the same multiplicity. This is the kicker order for
/// every count based category: pair before its kickers, trips before the
/// pair of a full house, and so on.
fn grouped_values(five_desc: &[Card]) -> Vec<Value> {
    let mut counts = [0u8; 13];
    for c in five_desc {
        counts[c.value as usize] += 1;
    }

    let mut groups: Vec<(u8, Value)> = Value::values()
        .rev()
        .filter_map(|value| {
            let count = counts[value as usize];
            (count > 0).then_some((count, value))
        })
        .collect();
    // Stable sort keeps the value descending order within equal counts.
    groups.sort_by(|a, b| b.0.cmp(&a.0));
    groups.into_iter().map(|(_, value)| value).collect()
}

fn kickers_for(category: HandCategory, strength: u32, five_desc: &[Card]) -> Vec<Value> {
    match category {
        HandCategory::RoyalFlush => vec![
            Value::Ace,
            Value::King,
            Value::Queen,
            Value::Jack,
            Value::Ten,
        ],
        HandCategory::Straight | HandCategory::StraightFlush => {
            vec![Value::from_index(strength & TIEBREAK_MASK)]
        }
        HandCategory::HighCard | HandCategory::Flush => {
            five_desc.iter().map(|c| c.value).collect()
        }
        _ => grouped_values(five_desc),
    }
}

fn describe(strength: u32, five: &[Card]) -> EvaluatedHand {
    let category = HandCategory::from_index(strength >> CATEGORY_SHIFT);
    let mut best_five = five.to_vec();
    best_five.sort_by(|a, b| b.value.cmp(&a.value));
    let kickers = kickers_for(category, strength, &best_five);
    EvaluatedHand {
        category,
        strength,
        kickers,
        best_five,
    }
}

/// Evaluate the best five card hand from two hole cards and up to five
/// board cards.
///
/// With five or more cards available every five card subset is scored
/// independently (21 subsets for a full board) and the strongest wins.
/// Distinct subsets can tie on score when they represent the same poker
/// value with different card identities; taking the maximum is
/// deterministic either way.
///
/// Before the flop there is no five card hand yet, so the result is a
/// degenerate `HighCard` with strength 0. It is tolerated but not
/// meaningful for cross player comparison; don't rank players on it.
///
/// The caller owns the preconditions: at most five board cards and no
/// duplicate card across hole and board. They are checked only in debug
/// builds.
///
/// # Examples
///
/// ```
/// use showdown::core::{cards_from_str, evaluate, HandCategory};
///
/// let hole = cards_from_str("AsKs").unwrap();
/// let board = cards_from_str("QsJsTs4h2d").unwrap();
/// let hand = evaluate([hole[0], hole[1]], &board);
/// assert_eq!(hand.category, HandCategory::RoyalFlush);
/// ```
pub fn evaluate(hole: [Card; 2], board: &[Card]) -> EvaluatedHand {
    debug_assert!(board.len() <= 5, "board may hold at most five cards");

    let mut cards = [hole[0]; 7];
    cards[1] = hole[1];
    for (slot, &card) in cards[2..].iter_mut().zip(board.iter()) {
        *slot = card;
    }
    let count = 2 + board.len();
    let cards = &cards[..count];

    debug_assert_eq!(
        cards.iter().copied().collect::<CardBitSet>().count(),
        count,
        "hole and board cards must be distinct"
    );

    if count < 5 {
        let mut best_five = cards.to_vec();
        best_five.sort_by(|a, b| b.value.cmp(&a.value));
        let kickers = best_five.iter().map(|c| c.value).collect();
        return EvaluatedHand {
            category: HandCategory::HighCard,
            strength: 0,
            kickers,
            best_five,
        };
    }

    let mut best_strength = 0;
    let mut best_five = [cards[0]; 5];
    for_each_combination(cards, 5, |combo| {
        let strength = score_five(combo);
        if strength > best_strength {
            best_strength = strength;
            best_five.copy_from_slice(combo);
        }
    });

    describe(best_strength, &best_five)
}
