use uth_engine::cards::{Card, Rank as R, Suit as S};
use uth_engine::hand::{compare_hands, evaluate_five, Category};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn detects_every_category() {
    let cases: Vec<([Card; 5], Category)> = vec![
        (
            [
                c(S::Hearts, R::Ten),
                c(S::Hearts, R::Jack),
                c(S::Hearts, R::Queen),
                c(S::Hearts, R::King),
                c(S::Hearts, R::Ace),
            ],
            Category::StraightFlush,
        ),
        (
            [
                c(S::Clubs, R::Ace),
                c(S::Diamonds, R::Ace),
                c(S::Hearts, R::Ace),
                c(S::Spades, R::Ace),
                c(S::Clubs, R::King),
            ],
            Category::FourOfAKind,
        ),
        (
            [
                c(S::Clubs, R::King),
                c(S::Diamonds, R::King),
                c(S::Hearts, R::King),
                c(S::Clubs, R::Queen),
                c(S::Diamonds, R::Queen),
            ],
            Category::FullHouse,
        ),
        (
            [
                c(S::Hearts, R::Two),
                c(S::Hearts, R::Seven),
                c(S::Hearts, R::Nine),
                c(S::Hearts, R::Jack),
                c(S::Hearts, R::King),
            ],
            Category::Flush,
        ),
        (
            [
                c(S::Clubs, R::Five),
                c(S::Hearts, R::Six),
                c(S::Clubs, R::Seven),
                c(S::Hearts, R::Eight),
                c(S::Diamonds, R::Nine),
            ],
            Category::Straight,
        ),
        (
            [
                c(S::Clubs, R::Queen),
                c(S::Hearts, R::Queen),
                c(S::Diamonds, R::Queen),
                c(S::Spades, R::Two),
                c(S::Clubs, R::Three),
            ],
            Category::ThreeOfAKind,
        ),
        (
            [
                c(S::Clubs, R::Jack),
                c(S::Hearts, R::Jack),
                c(S::Diamonds, R::Four),
                c(S::Spades, R::Four),
                c(S::Clubs, R::Nine),
            ],
            Category::TwoPair,
        ),
        (
            [
                c(S::Clubs, R::Ten),
                c(S::Hearts, R::Ten),
                c(S::Diamonds, R::Two),
                c(S::Spades, R::Five),
                c(S::Clubs, R::Eight),
            ],
            Category::OnePair,
        ),
        (
            [
                c(S::Clubs, R::Ace),
                c(S::Hearts, R::King),
                c(S::Spades, R::Nine),
                c(S::Diamonds, R::Seven),
                c(S::Clubs, R::Three),
            ],
            Category::HighCard,
        ),
    ];
    for (cards, expected) in cases {
        assert_eq!(evaluate_five(cards).category, expected);
    }
}

#[test]
fn categories_are_strictly_ordered() {
    // Royal > straight flush > quads > ... > high card, via constructed hands
    let chain = [
        [
            c(S::Hearts, R::Ten),
            c(S::Hearts, R::Jack),
            c(S::Hearts, R::Queen),
            c(S::Hearts, R::King),
            c(S::Hearts, R::Ace),
        ],
        [
            c(S::Spades, R::Five),
            c(S::Spades, R::Six),
            c(S::Spades, R::Seven),
            c(S::Spades, R::Eight),
            c(S::Spades, R::Nine),
        ],
        [
            c(S::Clubs, R::Ace),
            c(S::Diamonds, R::Ace),
            c(S::Hearts, R::Ace),
            c(S::Spades, R::Ace),
            c(S::Clubs, R::King),
        ],
        [
            c(S::Clubs, R::King),
            c(S::Diamonds, R::King),
            c(S::Hearts, R::King),
            c(S::Clubs, R::Queen),
            c(S::Diamonds, R::Queen),
        ],
        [
            c(S::Hearts, R::Two),
            c(S::Hearts, R::Seven),
            c(S::Hearts, R::Nine),
            c(S::Hearts, R::Jack),
            c(S::Hearts, R::King),
        ],
        [
            c(S::Clubs, R::Five),
            c(S::Hearts, R::Six),
            c(S::Clubs, R::Seven),
            c(S::Hearts, R::Eight),
            c(S::Diamonds, R::Nine),
        ],
        [
            c(S::Clubs, R::Queen),
            c(S::Hearts, R::Queen),
            c(S::Diamonds, R::Queen),
            c(S::Spades, R::Two),
            c(S::Clubs, R::Three),
        ],
        [
            c(S::Clubs, R::Jack),
            c(S::Hearts, R::Jack),
            c(S::Diamonds, R::Four),
            c(S::Spades, R::Four),
            c(S::Clubs, R::Nine),
        ],
        [
            c(S::Clubs, R::Ten),
            c(S::Hearts, R::Ten),
            c(S::Diamonds, R::Two),
            c(S::Spades, R::Five),
            c(S::Clubs, R::Eight),
        ],
        [
            c(S::Clubs, R::Ace),
            c(S::Hearts, R::King),
            c(S::Spades, R::Nine),
            c(S::Diamonds, R::Seven),
            c(S::Clubs, R::Three),
        ],
    ];
    for pair in chain.windows(2) {
        let a = evaluate_five(pair[0]);
        let b = evaluate_five(pair[1]);
        assert!(
            compare_hands(&a, &b).is_gt(),
            "{:?} should outrank {:?}",
            a.category,
            b.category
        );
    }
}

#[test]
fn wheel_is_a_straight_below_the_six_high() {
    let wheel = evaluate_five([
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::Two),
        c(S::Hearts, R::Three),
        c(S::Spades, R::Four),
        c(S::Clubs, R::Five),
    ]);
    assert_eq!(wheel.category, Category::Straight);

    let six_high = evaluate_five([
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Hearts, R::Four),
        c(S::Spades, R::Five),
        c(S::Clubs, R::Six),
    ]);
    assert_eq!(six_high.category, Category::Straight);
    assert!(compare_hands(&six_high, &wheel).is_gt());
}

#[test]
fn steel_wheel_is_a_straight_flush_but_not_royal() {
    let steel = evaluate_five([
        c(S::Hearts, R::Ace),
        c(S::Hearts, R::Two),
        c(S::Hearts, R::Three),
        c(S::Hearts, R::Four),
        c(S::Hearts, R::Five),
    ]);
    assert_eq!(steel.category, Category::StraightFlush);
    assert!(!steel.is_royal());

    let six_high = evaluate_five([
        c(S::Spades, R::Two),
        c(S::Spades, R::Three),
        c(S::Spades, R::Four),
        c(S::Spades, R::Five),
        c(S::Spades, R::Six),
    ]);
    assert!(compare_hands(&six_high, &steel).is_gt());

    let royal = evaluate_five([
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
    ]);
    assert!(royal.is_royal());
    assert!(compare_hands(&royal, &six_high).is_gt());
}

#[test]
fn kickers_break_ties_within_a_category() {
    let high_nine = evaluate_five([
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::King),
        c(S::Spades, R::Queen),
        c(S::Diamonds, R::Jack),
        c(S::Clubs, R::Nine),
    ]);
    let high_eight = evaluate_five([
        c(S::Diamonds, R::Ace),
        c(S::Clubs, R::King),
        c(S::Hearts, R::Queen),
        c(S::Spades, R::Jack),
        c(S::Hearts, R::Eight),
    ]);
    assert!(compare_hands(&high_nine, &high_eight).is_gt());

    let aces_king = evaluate_five([
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::King),
        c(S::Diamonds, R::Seven),
        c(S::Clubs, R::Two),
    ]);
    let aces_queen = evaluate_five([
        c(S::Diamonds, R::Ace),
        c(S::Spades, R::Ace),
        c(S::Hearts, R::Queen),
        c(S::Clubs, R::Seven),
        c(S::Hearts, R::Two),
    ]);
    assert!(compare_hands(&aces_king, &aces_queen).is_gt());

    // Pair rank dominates kicker ranks
    let kings_ace = evaluate_five([
        c(S::Clubs, R::King),
        c(S::Hearts, R::King),
        c(S::Spades, R::Ace),
        c(S::Diamonds, R::Seven),
        c(S::Clubs, R::Two),
    ]);
    assert!(compare_hands(&aces_queen, &kings_ace).is_gt());
}

#[test]
fn evaluation_is_invariant_under_input_order() {
    let a = evaluate_five([
        c(S::Clubs, R::Jack),
        c(S::Hearts, R::Jack),
        c(S::Diamonds, R::Four),
        c(S::Spades, R::Four),
        c(S::Clubs, R::Nine),
    ]);
    let b = evaluate_five([
        c(S::Clubs, R::Nine),
        c(S::Spades, R::Four),
        c(S::Hearts, R::Jack),
        c(S::Diamonds, R::Four),
        c(S::Clubs, R::Jack),
    ]);
    assert_eq!(a.category, b.category);
    assert_eq!(a.score, b.score);
}

#[test]
fn evaluation_is_invariant_under_suit_relabeling() {
    let relabel = |s: S| match s {
        S::Clubs => S::Spades,
        S::Diamonds => S::Hearts,
        S::Hearts => S::Diamonds,
        S::Spades => S::Clubs,
    };
    let hands = [
        [
            c(S::Hearts, R::Two),
            c(S::Hearts, R::Seven),
            c(S::Hearts, R::Nine),
            c(S::Hearts, R::Jack),
            c(S::Hearts, R::King),
        ],
        [
            c(S::Clubs, R::Jack),
            c(S::Hearts, R::Jack),
            c(S::Diamonds, R::Four),
            c(S::Spades, R::Four),
            c(S::Clubs, R::Nine),
        ],
    ];
    for cards in hands {
        let mapped = cards.map(|card| c(relabel(card.suit), card.rank));
        let original = evaluate_five(cards);
        let relabeled = evaluate_five(mapped);
        assert_eq!(original.category, relabeled.category);
        assert_eq!(original.score, relabeled.score);
    }
}

#[test]
fn labels_name_the_hand() {
    let pair = evaluate_five([
        c(S::Clubs, R::Ten),
        c(S::Hearts, R::Ten),
        c(S::Diamonds, R::Two),
        c(S::Spades, R::Five),
        c(S::Clubs, R::Eight),
    ]);
    assert_eq!(pair.label(), "PAIR OF TENS");

    let high = evaluate_five([
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::King),
        c(S::Spades, R::Nine),
        c(S::Diamonds, R::Seven),
        c(S::Clubs, R::Three),
    ]);
    assert_eq!(high.label(), "ACE HIGH");

    let royal = evaluate_five([
        c(S::Spades, R::Ten),
        c(S::Spades, R::Jack),
        c(S::Spades, R::Queen),
        c(S::Spades, R::King),
        c(S::Spades, R::Ace),
    ]);
    assert_eq!(royal.label(), "ROYAL FLUSH");

    let steel = evaluate_five([
        c(S::Hearts, R::Ace),
        c(S::Hearts, R::Two),
        c(S::Hearts, R::Three),
        c(S::Hearts, R::Four),
        c(S::Hearts, R::Five),
    ]);
    assert_eq!(steel.label(), "STRAIGHT FLUSH");
}
