use uth_engine::cards::{Card, Rank as R, Suit as S};
use uth_engine::errors::GameError;
use uth_engine::hand::{best_of_seven, evaluate_five, Category};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

fn seven() -> [Card; 7] {
    [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Ten),
        c(S::Diamonds, R::Two),
    ]
}

#[test]
fn best_never_scores_below_any_five_card_subset() {
    let cards = seven();
    let best = best_of_seven(&cards).expect("7 cards evaluate");
    let n = cards.len();
    let mut subsets = 0;
    for a in 0..n {
        for b in (a + 1)..n {
            for k in (b + 1)..n {
                for d in (k + 1)..n {
                    for e in (d + 1)..n {
                        let sub =
                            evaluate_five([cards[a], cards[b], cards[k], cards[d], cards[e]]);
                        assert!(best.score >= sub.score);
                        subsets += 1;
                    }
                }
            }
        }
    }
    assert_eq!(subsets, 21);
}

#[test]
fn picks_the_royal_over_the_pair_of_aces() {
    let best = best_of_seven(&seven()).unwrap();
    assert_eq!(best.category, Category::StraightFlush);
    assert!(best.is_royal());
}

#[test]
fn chosen_cards_are_a_distinct_subset_of_the_input() {
    let cards = seven();
    let best = best_of_seven(&cards).unwrap();
    for chosen in &best.cards {
        assert!(cards.contains(chosen));
    }
    for i in 0..5 {
        for j in (i + 1)..5 {
            assert_ne!(best.cards[i], best.cards[j]);
        }
    }
}

#[test]
fn finds_the_flush_spread_across_hole_and_board() {
    let cards = [
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Seven),
        c(S::Hearts, R::Three),
        c(S::Diamonds, R::Nine),
    ];
    let best = best_of_seven(&cards).unwrap();
    assert_eq!(best.category, Category::Flush);
    assert!(best.cards.iter().all(|card| card.suit == S::Hearts));
}

#[test]
fn works_for_exactly_five_and_six_cards() {
    let five = [
        c(S::Clubs, R::Five),
        c(S::Hearts, R::Six),
        c(S::Clubs, R::Seven),
        c(S::Hearts, R::Eight),
        c(S::Diamonds, R::Nine),
    ];
    let best = best_of_seven(&five).unwrap();
    assert_eq!(best.category, Category::Straight);
    assert_eq!(best.score, evaluate_five(five).score);

    let six = [
        c(S::Clubs, R::Five),
        c(S::Hearts, R::Six),
        c(S::Clubs, R::Seven),
        c(S::Hearts, R::Eight),
        c(S::Diamonds, R::Nine),
        c(S::Spades, R::Ten),
    ];
    let best = best_of_seven(&six).unwrap();
    // the 10-high straight, not the 9-high one
    assert_eq!(best.category, Category::Straight);
    assert!(best.score > evaluate_five(five).score);
}

#[test]
fn fewer_than_five_cards_is_an_error() {
    let cards = seven();
    let err = best_of_seven(&cards[0..4]).unwrap_err();
    assert_eq!(err, GameError::InsufficientCards { got: 4 });
}
