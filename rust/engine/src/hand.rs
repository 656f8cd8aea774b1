use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

/// The nine standard hand classes, ordered weakest to strongest. A royal
/// flush is the Ace-high [`Category::StraightFlush`] rather than a separate
/// class; see [`HandResult::is_royal`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// Positional weight of the category in a hand score. Kicker encoding below
/// this weight never overflows into the next category.
pub const CATEGORY_WEIGHT: u32 = 15u32.pow(5);

/// Outcome of evaluating a 5-card hand: its class, a totally ordered score,
/// and the five cards the hand is made of.
///
/// Two hands compare correctly (category first, then kickers) with a plain
/// comparison of their `score` fields, no recomputation needed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HandResult {
    pub category: Category,
    pub score: u32,
    pub cards: [Card; 5],
}

impl HandResult {
    /// True for the Ace-high straight flush. Both paytables price it above a
    /// plain straight flush.
    pub fn is_royal(&self) -> bool {
        self.category == Category::StraightFlush && self.cards.iter().all(|c| c.rank >= Rank::Ten)
    }

    /// Human-readable label for history display, e.g. `PAIR OF ACES`.
    pub fn label(&self) -> String {
        match self.category {
            Category::HighCard => {
                let high = self.cards.iter().map(|c| c.rank as u8).max().unwrap_or(0);
                format!("{} HIGH", rank_word(high))
            }
            Category::OnePair => {
                let mut counts = [0u8; 15];
                for c in &self.cards {
                    counts[c.rank as usize] += 1;
                }
                let pair = (2..=14).find(|&r| counts[r as usize] == 2).unwrap_or(0);
                format!("PAIR OF {}", rank_plural(pair))
            }
            Category::TwoPair => "TWO PAIR".to_string(),
            Category::ThreeOfAKind => "THREE OF A KIND".to_string(),
            Category::Straight => "STRAIGHT".to_string(),
            Category::Flush => "FLUSH".to_string(),
            Category::FullHouse => "FULL HOUSE".to_string(),
            Category::FourOfAKind => "FOUR OF A KIND".to_string(),
            Category::StraightFlush => {
                if self.is_royal() {
                    "ROYAL FLUSH".to_string()
                } else {
                    "STRAIGHT FLUSH".to_string()
                }
            }
        }
    }
}

/// Classifies exactly five cards and computes their tie-break score.
///
/// The score is `category * 15^5` plus the unique ranks in base-15 positional
/// encoding, ordered by occurrence count descending then rank descending, so
/// kicker comparisons within a category fall out of integer ordering.
pub fn evaluate_five(cards: [Card; 5]) -> HandResult {
    let mut counts = [0u8; 15]; // 2..14 used
    for c in &cards {
        counts[c.rank as usize] += 1;
    }

    // Unique ranks, most frequent first, then highest first.
    let mut uniq: Vec<u8> = (2u8..=14).filter(|&r| counts[r as usize] > 0).collect();
    uniq.sort_unstable_by(|&a, &b| {
        counts[b as usize]
            .cmp(&counts[a as usize])
            .then(b.cmp(&a))
    });

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let is_straight = straight_shape(&uniq);

    let top = counts[uniq[0] as usize];
    let second = uniq.get(1).map_or(0, |&r| counts[r as usize]);

    let category = if is_flush && is_straight {
        Category::StraightFlush
    } else if top == 4 {
        Category::FourOfAKind
    } else if top == 3 && second == 2 {
        Category::FullHouse
    } else if is_flush {
        Category::Flush
    } else if is_straight {
        Category::Straight
    } else if top == 3 {
        Category::ThreeOfAKind
    } else if top == 2 && second == 2 {
        Category::TwoPair
    } else if top == 2 {
        Category::OnePair
    } else {
        Category::HighCard
    };

    // In the wheel the Ace plays low, so A-5-4-3-2 must score below the
    // 6-high straight.
    if is_straight && uniq[0] == 14 && uniq[1] == 5 {
        uniq = vec![5, 4, 3, 2, 1];
    }

    let mut score = category as u32 * CATEGORY_WEIGHT;
    for (i, &r) in uniq.iter().enumerate() {
        score += u32::from(r) * 15u32.pow(4 - i as u32);
    }

    HandResult {
        category,
        score,
        cards,
    }
}

/// Finds the best 5-card hand among all C(n,5) subsets of `cards`.
///
/// Ties between subsets are resolved first-seen-max, which is deterministic
/// for a fixed input order; equal scores are equal hands.
///
/// # Errors
///
/// Returns [`GameError::InsufficientCards`] for fewer than 5 cards.
pub fn best_of_seven(cards: &[Card]) -> Result<HandResult, GameError> {
    let n = cards.len();
    if n < 5 {
        return Err(GameError::InsufficientCards { got: n });
    }
    let mut best = evaluate_five([cards[0], cards[1], cards[2], cards[3], cards[4]]);
    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    for e in (d + 1)..n {
                        let hand =
                            evaluate_five([cards[a], cards[b], cards[c], cards[d], cards[e]]);
                        if hand.score > best.score {
                            best = hand;
                        }
                    }
                }
            }
        }
    }
    Ok(best)
}

pub fn compare_hands(a: &HandResult, b: &HandResult) -> Ordering {
    a.score.cmp(&b.score)
}

/// Five distinct ranks in descending order forming a run, or the wheel.
fn straight_shape(uniq: &[u8]) -> bool {
    uniq.len() == 5 && (uniq[0] - uniq[4] == 4 || (uniq[0] == 14 && uniq[1] == 5 && uniq[4] == 2))
}

fn rank_word(rank: u8) -> &'static str {
    match rank {
        2 => "TWO",
        3 => "THREE",
        4 => "FOUR",
        5 => "FIVE",
        6 => "SIX",
        7 => "SEVEN",
        8 => "EIGHT",
        9 => "NINE",
        10 => "TEN",
        11 => "JACK",
        12 => "QUEEN",
        13 => "KING",
        14 => "ACE",
        _ => "?",
    }
}

fn rank_plural(rank: u8) -> &'static str {
    match rank {
        2 => "TWOS",
        3 => "THREES",
        4 => "FOURS",
        5 => "FIVES",
        6 => "SIXES",
        7 => "SEVENS",
        8 => "EIGHTS",
        9 => "NINES",
        10 => "TENS",
        11 => "JACKS",
        12 => "QUEENS",
        13 => "KINGS",
        14 => "ACES",
        _ => "?",
    }
}
