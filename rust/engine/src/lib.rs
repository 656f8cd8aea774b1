//! # uth-engine: Ultimate Texas Hold'em Table Core
//!
//! A single-player casino table-game engine for the Ultimate Texas Hold'em
//! variant. Provides deck shuffling and dealing, best-5-of-7 hand evaluation
//! with total-order tie-break scoring, and wager resolution against the fixed
//! Blind and Trips paytables, with reproducible RNG for replay and debugging.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Cryptographically seeded deck shuffling with ChaCha20 RNG
//! - [`hand`] - Poker hand evaluation, scoring, and labels
//! - [`wager`] - Ante/blind/trips/play wager state and stake validation
//! - [`payout`] - Fixed paytables and net-delta settlement rules
//! - [`engine`] - Hand lifecycle orchestration and bankroll management
//! - [`history`] - Hand records, session statistics, and JSONL logging
//! - [`errors`] - Error types for table operations
//!
//! ## Quick Start
//!
//! ```rust
//! use uth_engine::cards::{Card, Rank, Suit};
//! use uth_engine::hand::{best_of_seven, Category};
//!
//! // Evaluate the best 5-card hand hidden in 7 cards
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//!
//! let best = best_of_seven(&cards).unwrap();
//! assert_eq!(best.category, Category::StraightFlush);
//! assert!(best.is_royal());
//! ```
//!
//! ## Playing a Hand
//!
//! A hand walks `Betting -> Dealt -> FlopRevealed -> RiverRevealed`, with a
//! single bet (4x ante preflop, 2x on the flop, 1x on the river) or a fold
//! settling it:
//!
//! ```rust
//! use uth_engine::engine::{Decision, HandStage, RoundEngine};
//!
//! let mut table = RoundEngine::new_with_seed(7);
//! table.start_hand(5).unwrap();
//! assert_eq!(table.decide(Decision::Check).unwrap(), HandStage::FlopRevealed);
//! assert_eq!(table.decide(Decision::Bet).unwrap(), HandStage::Resolved); // 2x ante
//! let outcome = table.resolve().unwrap();
//! assert_eq!(outcome.record.net, outcome.net);
//! ```
//!
//! ## Deterministic Replay
//!
//! Live play seeds the shuffle from OS entropy; seeded decks reproduce the
//! same deal for tests and simulations:
//!
//! ```rust
//! use uth_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let deck1 = Deck::new_with_seed(42);
//! let deck2 = Deck::new_with_seed(42);
//! // deck1 and deck2 will deal identical card orders
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod history;
pub mod payout;
pub mod wager;
