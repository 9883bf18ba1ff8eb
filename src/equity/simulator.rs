use std::thread;

use rand::prelude::*;
use thiserror::Error;

use crate::core::{evaluate, for_each_combination, rank_all, Card, CardBitSet, EvaluatedHand};

/// Errors from the equity estimation boundary.
///
/// Both are precondition violations, not recoverable runtime conditions.
/// They fail fast because silently returning zeroed results would corrupt
/// displayed probabilities with no visible signal.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum EquityError {
    /// The hole/board input couldn't describe a real game state.
    #[error("malformed hand input: {0}")]
    MalformedHandInput(String),

    /// A simulation was requested with no trials to run.
    #[error("trial budget must be positive, got {0}")]
    InvalidTrialBudget(u32),
}

/// One player's share of the simulated outcomes.
///
/// Created fresh on every estimation call; results are never merged across
/// streets. `wins` counts outcomes where the player beat everyone
/// outright, `ties` outcomes where they shared the best rank.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EquityResult {
    /// Outcomes this player won outright.
    pub wins: u64,
    /// Outcomes this player tied for best.
    pub ties: u64,
    /// Total outcomes evaluated.
    pub trials: u64,
    /// This player's share of the pot over all outcomes, 0-100.
    pub equity_percent: f64,
}

/// Validate a hole/board input set and return the cards it uses.
fn validate_input(players: &[[Card; 2]], board: &[Card]) -> Result<CardBitSet, EquityError> {
    if players.is_empty() {
        return Err(EquityError::MalformedHandInput(
            "at least one player hand is required".to_string(),
        ));
    }
    if board.len() > 5 {
        return Err(EquityError::MalformedHandInput(format!(
            "board has {} cards, at most 5 allowed",
            board.len()
        )));
    }

    let mut used = CardBitSet::new();
    for &card in players.iter().flatten().chain(board.iter()) {
        if used.contains(card) {
            return Err(EquityError::MalformedHandInput(format!(
                "duplicate card {card}"
            )));
        }
        used.insert(card);
    }
    Ok(used)
}

/// Deterministic showdown on a complete board.
///
/// With `k` players tied at the best rank each gets `100 / k`; everyone
/// else gets zero.
fn showdown_equity(players: &[[Card; 2]], board: &[Card]) -> Vec<EquityResult> {
    let hands: Vec<EvaluatedHand> = players
        .iter()
        .map(|&hole| evaluate(hole, board))
        .collect();
    let ranks = rank_all(&hands);
    let winners = ranks.iter().filter(|&&r| r == 1).count();

    ranks
        .iter()
        .map(|&rank| {
            let best = rank == 1;
            EquityResult {
                wins: u64::from(best && winners == 1),
                ties: u64::from(best && winners > 1),
                trials: 1,
                equity_percent: if best { 100.0 / winners as f64 } else { 0.0 },
            }
        })
        .collect()
}

/// Score one completed board, crediting each best ranked player.
fn credit_outcome(
    players: &[[Card; 2]],
    full_board: &[Card; 5],
    wins: &mut [u64],
    ties: &mut [u64],
) {
    let hands: Vec<EvaluatedHand> = players
        .iter()
        .map(|&hole| evaluate(hole, full_board))
        .collect();
    let ranks = rank_all(&hands);
    let winners = ranks.iter().filter(|&&r| r == 1).count();

    for (idx, &rank) in ranks.iter().enumerate() {
        if rank == 1 {
            if winners > 1 {
                ties[idx] += 1;
            } else {
                wins[idx] += 1;
            }
        }
    }
}

/// Run one Monte Carlo trial: complete the board with a uniform
/// without-replacement draw from the unseen pool and score it.
///
/// Every trial draws from the same fixed pool; trials never deplete a
/// shared deck.
fn run_trial<R: Rng>(
    players: &[[Card; 2]],
    board: &[Card],
    unseen: &[Card],
    rng: &mut R,
    wins: &mut [u64],
    ties: &mut [u64],
) {
    let mut full_board = [unseen[0]; 5];
    full_board[..board.len()].copy_from_slice(board);
    for (slot, card) in full_board[board.len()..]
        .iter_mut()
        .zip(unseen.choose_multiple(rng, 5 - board.len()))
    {
        *slot = *card;
    }

    credit_outcome(players, &full_board, wins, ties);
}

/// Fold counters into per player results with the half-credit tie split:
/// `equity = 100 * (wins + ties / 2) / trials`.
fn aggregate(wins: Vec<u64>, ties: Vec<u64>, trials: u64) -> Vec<EquityResult> {
    wins.into_iter()
        .zip(ties)
        .map(|(wins, ties)| EquityResult {
            wins,
            ties,
            trials,
            equity_percent: 100.0 * (wins as f64 + ties as f64 / 2.0) / trials as f64,
        })
        .collect()
}

/// Estimate each player's share of the pot.
///
/// On a complete five card board the outcome is deterministic: hands are
/// evaluated and ranked once, tied winners split the pot evenly, and the
/// trial budget is ignored. With an incomplete board the unseen cards are
/// sampled: each trial independently draws the missing board cards without
/// replacement from the pool of cards not held by any player or the board,
/// and the best ranked players are credited. A trial won outright counts
/// toward `wins`; a shared best rank counts toward every tied player's
/// `ties`, worth half a win in the final percentage.
///
/// The generator is caller supplied so that a fixed seed reproduces the
/// estimate exactly. Results come back in player order.
///
/// Callers wanting bounded latency should choose a smaller `trials`
/// budget; there is no cancellation.
///
/// # Errors
///
/// [EquityError::MalformedHandInput] if there are no players, the board
/// has more than five cards, or any card appears twice across the hole
/// hands and the board. [EquityError::InvalidTrialBudget] if `trials` is
/// zero.
///
/// # Examples
///
/// ```
/// use rand::prelude::*;
/// use showdown::core::cards_from_str;
/// use showdown::equity::estimate_equity;
///
/// let aces = cards_from_str("AsAh").unwrap();
/// let kings = cards_from_str("KsKh").unwrap();
/// let players = [[aces[0], aces[1]], [kings[0], kings[1]]];
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let results = estimate_equity(&players, &[], 500, &mut rng).unwrap();
/// assert!(results[0].equity_percent > results[1].equity_percent);
/// ```
pub fn estimate_equity<R: Rng>(
    players: &[[Card; 2]],
    board: &[Card],
    trials: u32,
    rng: &mut R,
) -> Result<Vec<EquityResult>, EquityError> {
    let unseen = simulation_pool(players, board, trials)?;
    if board.len() == 5 {
        return Ok(showdown_equity(players, board));
    }

    #[cfg(feature = "tracing")]
    tracing::event!(
        tracing::Level::DEBUG,
        players = players.len(),
        trials,
        cards_needed = 5 - board.len(),
        "estimating equity by Monte Carlo simulation"
    );

    let mut wins = vec![0u64; players.len()];
    let mut ties = vec![0u64; players.len()];
    for _ in 0..trials {
        run_trial(players, board, &unseen, rng, &mut wins, &mut ties);
    }

    Ok(aggregate(wins, ties, u64::from(trials)))
}

/// Estimate equity with the trial budget partitioned across a pool of
/// worker threads.
///
/// Trials are independent, so each worker runs its slice of the budget
/// with its own OS seeded generator and local counters; the partial counts
/// reduce by addition, making the result independent of worker completion
/// order. Same contract as [estimate_equity] otherwise, except that the
/// OS seeding means runs are not reproducible.
///
/// Panics if `num_tasks` is zero.
pub fn par_estimate_equity(
    players: &[[Card; 2]],
    board: &[Card],
    trials: u32,
    num_tasks: usize,
) -> Result<Vec<EquityResult>, EquityError> {
    assert!(num_tasks > 0, "num_tasks must be positive");

    let unseen = simulation_pool(players, board, trials)?;
    if board.len() == 5 {
        return Ok(showdown_equity(players, board));
    }

    #[cfg(feature = "tracing")]
    tracing::event!(
        tracing::Level::DEBUG,
        players = players.len(),
        trials,
        num_tasks,
        "estimating equity across worker threads"
    );

    let base = trials / num_tasks as u32;
    let extra = trials % num_tasks as u32;

    let (wins, ties) = thread::scope(|s| {
        let unseen: &[Card] = &unseen;
        let handles: Vec<_> = (0..num_tasks as u32)
            .map(|task_id| {
                let task_trials = base + u32::from(task_id < extra);
                s.spawn(move || {
                    let mut rng = SmallRng::from_os_rng();
                    let mut wins = vec![0u64; players.len()];
                    let mut ties = vec![0u64; players.len()];
                    for _ in 0..task_trials {
                        run_trial(players, board, unseen, &mut rng, &mut wins, &mut ties);
                    }
                    (wins, ties)
                })
            })
            .collect();

        let mut wins = vec![0u64; players.len()];
        let mut ties = vec![0u64; players.len()];
        for handle in handles {
            let (task_wins, task_ties) = handle.join().expect("equity worker panicked");
            for (total, part) in wins.iter_mut().zip(task_wins) {
                *total += part;
            }
            for (total, part) in ties.iter_mut().zip(task_ties) {
                *total += part;
            }
        }
        (wins, ties)
    });

    Ok(aggregate(wins, ties, u64::from(trials)))
}

/// Compute equity exactly by enumerating every possible board completion
/// instead of sampling.
///
/// Each reachable board is visited exactly once, so the returned
/// percentages carry no sampling noise and `trials` reports the number of
/// enumerated boards. Intended for turn and river boards where few
/// completions remain; a preflop call walks all C(unseen, 5) boards and
/// is correspondingly expensive.
///
/// # Errors
///
/// [EquityError::MalformedHandInput], same conditions as
/// [estimate_equity].
pub fn enumerate_equity(
    players: &[[Card; 2]],
    board: &[Card],
) -> Result<Vec<EquityResult>, EquityError> {
    let used = validate_input(players, board)?;
    if board.len() == 5 {
        return Ok(showdown_equity(players, board));
    }

    let pool = CardBitSet::full() ^ used;
    if pool.count() + board.len() < 5 {
        return Err(EquityError::MalformedHandInput(format!(
            "only {} unseen cards left, cannot complete the board",
            pool.count()
        )));
    }

    let unseen: Vec<Card> = pool.into_iter().collect();
    let mut wins = vec![0u64; players.len()];
    let mut ties = vec![0u64; players.len()];
    let mut boards = 0u64;

    for_each_combination(&unseen, 5 - board.len(), |draw| {
        let mut full_board = [draw[0]; 5];
        full_board[..board.len()].copy_from_slice(board);
        full_board[board.len()..].copy_from_slice(draw);
        credit_outcome(players, &full_board, &mut wins, &mut ties);
        boards += 1;
    });

    #[cfg(feature = "tracing")]
    tracing::event!(
        tracing::Level::TRACE,
        players = players.len(),
        boards,
        "enumerated all board completions"
    );

    Ok(aggregate(wins, ties, boards))
}

/// Shared validation for the sampling entry points: check the input set,
/// the trial budget, and that enough unseen cards remain to complete the
/// board.
fn simulation_pool(
    players: &[[Card; 2]],
    board: &[Card],
    trials: u32,
) -> Result<Vec<Card>, EquityError> {
    let used = validate_input(players, board)?;
    if trials == 0 {
        return Err(EquityError::InvalidTrialBudget(trials));
    }

    let unseen = CardBitSet::full() ^ used;
    if unseen.count() + board.len() < 5 {
        return Err(EquityError::MalformedHandInput(format!(
            "only {} unseen cards left, cannot complete the board",
            unseen.count()
        )));
    }
    Ok(unseen.into_iter().collect())
}
