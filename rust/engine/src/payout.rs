use crate::hand::Category;
use crate::wager::Wager;

/// Payout odds as a (numerator, denominator) ratio, e.g. `(3, 2)` pays 3:2.
pub type Odds = (u32, u32);

pub const BLIND_ROYAL_FLUSH: Odds = (500, 1);
pub const BLIND_STRAIGHT_FLUSH: Odds = (50, 1);
pub const BLIND_FOUR_OF_A_KIND: Odds = (10, 1);
pub const BLIND_FULL_HOUSE: Odds = (3, 1);
pub const BLIND_FLUSH: Odds = (3, 2);
pub const BLIND_STRAIGHT: Odds = (1, 1);

pub const TRIPS_ROYAL_FLUSH: Odds = (50, 1);
pub const TRIPS_STRAIGHT_FLUSH: Odds = (40, 1);
pub const TRIPS_FOUR_OF_A_KIND: Odds = (30, 1);
pub const TRIPS_FULL_HOUSE: Odds = (8, 1);
pub const TRIPS_FLUSH: Odds = (7, 1);
pub const TRIPS_STRAIGHT: Odds = (4, 1);
pub const TRIPS_THREE_OF_A_KIND: Odds = (3, 1);

/// Who takes the main wagers at showdown. Equal scores push.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Winner {
    Player,
    Dealer,
    Push,
}

/// Blind paytable keyed by the player's final category. `None` means the
/// blind is forfeited, not returned, even on a winning hand.
pub fn blind_odds(category: Category, royal: bool) -> Option<Odds> {
    match category {
        Category::StraightFlush => Some(if royal {
            BLIND_ROYAL_FLUSH
        } else {
            BLIND_STRAIGHT_FLUSH
        }),
        Category::FourOfAKind => Some(BLIND_FOUR_OF_A_KIND),
        Category::FullHouse => Some(BLIND_FULL_HOUSE),
        Category::Flush => Some(BLIND_FLUSH),
        Category::Straight => Some(BLIND_STRAIGHT),
        _ => None,
    }
}

/// Trips paytable keyed by the player's final category, paid independently of
/// the main-hand outcome.
pub fn trips_odds(category: Category, royal: bool) -> Option<Odds> {
    match category {
        Category::StraightFlush => Some(if royal {
            TRIPS_ROYAL_FLUSH
        } else {
            TRIPS_STRAIGHT_FLUSH
        }),
        Category::FourOfAKind => Some(TRIPS_FOUR_OF_A_KIND),
        Category::FullHouse => Some(TRIPS_FULL_HOUSE),
        Category::Flush => Some(TRIPS_FLUSH),
        Category::Straight => Some(TRIPS_STRAIGHT),
        Category::ThreeOfAKind => Some(TRIPS_THREE_OF_A_KIND),
        _ => None,
    }
}

/// Net bankroll change when the player folds: ante, blind, and any trips
/// stake are forfeited; no play bet was placed.
pub fn fold_delta(wager: &Wager) -> f64 {
    -f64::from(wager.ante() + wager.blind() + wager.trips())
}

/// Net bankroll change at showdown, relative to the pre-hand bankroll.
///
/// On a player win the play bet pays 1:1, the ante pays 1:1 (2:1 when the
/// dealer does not qualify), and the blind pays per [`blind_odds`] or is
/// forfeited below a straight. On a push the main wagers are returned. The
/// trips bet resolves against [`trips_odds`] in every case.
///
/// Stakes are integer chip multiples and every ratio in the paytables yields
/// an exact multiple of 0.5, so the arithmetic below is exact in `f64`.
pub fn showdown_delta(
    wager: &Wager,
    winner: Winner,
    dealer_qualifies: bool,
    category: Category,
    royal: bool,
) -> f64 {
    let trips_net = if wager.trips() == 0 {
        0.0
    } else {
        match trips_odds(category, royal) {
            Some((num, den)) => f64::from(wager.trips()) * f64::from(num) / f64::from(den),
            None => -f64::from(wager.trips()),
        }
    };

    match winner {
        Winner::Player => {
            let ante_net = if dealer_qualifies {
                f64::from(wager.ante())
            } else {
                f64::from(2 * wager.ante())
            };
            let blind_net = match blind_odds(category, royal) {
                Some((num, den)) => f64::from(wager.blind()) * f64::from(num) / f64::from(den),
                None => -f64::from(wager.blind()),
            };
            f64::from(wager.play()) + ante_net + blind_net + trips_net
        }
        Winner::Dealer => -f64::from(wager.ante() + wager.blind() + wager.play()) + trips_net,
        Winner::Push => trips_net,
    }
}
