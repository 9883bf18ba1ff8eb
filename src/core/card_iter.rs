use crate::core::card::Card;

/// Call `f` once for every k-card combination of `cards`, in lexicographic
/// index order.
///
/// The walk is index based and reuses one stack buffer for every
/// combination, so no per-combination allocation happens. That matters
/// because the evaluator runs this for every simulation trial.
///
/// Combinations larger than seven cards are never needed here (the
/// evaluator walks 5 of at most 7, the enumerator deals at most the last
/// two board cards), so `k` is capped at 7.
///
/// # Examples
///
/// ```
/// use showdown::core::{cards_from_str, for_each_combination};
///
/// let cards = cards_from_str("2s3s4s5s6s7s8s").unwrap();
/// let mut count = 0;
/// for_each_combination(&cards, 5, |combo| {
///     assert_eq!(combo.len(), 5);
///     count += 1;
/// });
/// assert_eq!(count, 21);
/// ```
pub fn for_each_combination<F>(cards: &[Card], k: usize, mut f: F)
where
    F: FnMut(&[Card]),
{
    assert!(k >= 1 && k <= 7, "combination size must be 1..=7, got {k}");

    let n = cards.len();
    if k > n {
        return;
    }

    let mut idx = [0usize; 7];
    for (pos, slot) in idx.iter_mut().enumerate().take(k) {
        *slot = pos;
    }
    let mut combo = [cards[0]; 7];

    loop {
        for pos in 0..k {
            combo[pos] = cards[idx[pos]];
        }
        f(&combo[..k]);

        // Find the rightmost index that hasn't reached its final position.
        let mut pos = k;
        loop {
            if pos == 0 {
                return;
            }
            pos -= 1;
            if idx[pos] != n - k + pos {
                break;
            }
        }

        idx[pos] += 1;
        for next in pos + 1..k {
            idx[next] = idx[next - 1] + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{cards_from_str, CardBitSet, Deck};

    #[test]
    fn test_single_card_combinations() {
        let cards = cards_from_str("2s3s4s").unwrap();
        let mut seen = Vec::new();
        for_each_combination(&cards, 1, |combo| seen.push(combo[0]));
        assert_eq!(seen, cards);
    }

    #[test]
    fn test_pairs_are_distinct() {
        let cards = cards_from_str("2s3s4s").unwrap();
        let mut count = 0;
        for_each_combination(&cards, 2, |combo| {
            assert_ne!(combo[0], combo[1]);
            count += 1;
        });
        assert_eq!(count, 3);
    }

    #[test]
    fn test_five_of_seven_count() {
        let cards = cards_from_str("2s3s4s5s6s7s8s").unwrap();
        let mut combos = Vec::new();
        for_each_combination(&cards, 5, |combo| {
            combos.push(combo.iter().copied().collect::<CardBitSet>())
        });

        assert_eq!(combos.len(), 21);
        // Each combination is a different subset.
        for (i, a) in combos.iter().enumerate() {
            for b in combos.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_five_of_ten_count() {
        let deck = Deck::default();
        let mut count = 0;
        for_each_combination(&deck[..10], 5, |_| count += 1);
        assert_eq!(count, 252);
    }

    #[test]
    fn test_k_equals_len_yields_once() {
        let cards = cards_from_str("2s3s4s5s6s").unwrap();
        let mut count = 0;
        for_each_combination(&cards, 5, |combo| {
            assert_eq!(combo, &cards[..]);
            count += 1;
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn test_k_larger_than_len_yields_nothing() {
        let cards = cards_from_str("2s3s4s").unwrap();
        let mut count = 0;
        for_each_combination(&cards, 5, |_| count += 1);
        assert_eq!(count, 0);
    }
}
