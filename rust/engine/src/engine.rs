use std::cmp::Ordering;

use chrono::{SecondsFormat, Utc};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{self, Category, HandResult};
use crate::history::{HandHistory, HandRecord, HistoryStats, Outcome};
use crate::payout::{self, Winner};
use crate::wager::{validate_stake, Wager, DEFAULT_CHIP_UNIT, STARTING_BANKROLL};

/// Lifecycle of a single hand. Community cards exist from the deal; the
/// stage only controls what the view layer is entitled to show.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HandStage {
    /// No hand in progress; ante and trips can be staged
    Betting,
    /// Hole cards dealt, board face down
    Dealt,
    /// Flop visible
    FlopRevealed,
    /// Turn and river visible
    RiverRevealed,
    /// Terminal decision made, payout settled
    Resolved,
}

/// A betting-stage decision. The play-bet amount is fixed by the stage
/// (4x ante preflop, 2x on the flop, 1x on the river), so `Bet` carries none.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Decision {
    Check,
    Bet,
    Fold,
}

impl Decision {
    fn name(self) -> &'static str {
        match self {
            Decision::Check => "check",
            Decision::Bet => "bet",
            Decision::Fold => "fold",
        }
    }
}

/// Table parameters fixed for the lifetime of an engine.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TableConfig {
    /// Chip denomination; every stake must be a multiple of this
    pub chip_unit: u32,
    /// Bankroll the session opens with
    pub starting_bankroll: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            chip_unit: DEFAULT_CHIP_UNIT,
            starting_bankroll: STARTING_BANKROLL,
        }
    }
}

/// Everything the view layer needs after a hand settles.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveOutcome {
    pub player_best: HandResult,
    pub dealer_best: HandResult,
    pub winner: Winner,
    pub dealer_qualifies: bool,
    /// Net bankroll change including all stakes
    pub net: f64,
    pub record: HandRecord,
}

/// Orchestrates one table: deals from a freshly shuffled deck, walks the
/// betting stages, settles wagers against the paytable, and keeps the
/// session history.
///
/// # Examples
///
/// ```
/// use uth_engine::engine::{Decision, RoundEngine};
///
/// let mut table = RoundEngine::new_with_seed(42);
/// table.start_hand(5).unwrap();
/// table.decide(Decision::Check).unwrap(); // see the flop
/// table.decide(Decision::Check).unwrap(); // see the river
/// table.decide(Decision::Bet).unwrap(); // 1x ante, hand settles
///
/// match table.resolve() {
///     Ok(outcome) => println!("net change: {}", outcome.net),
///     Err(e) => println!("hand not resolved: {}", e),
/// }
/// assert_eq!(table.hand_history().len(), 1);
/// ```
#[derive(Debug)]
pub struct RoundEngine {
    config: TableConfig,
    deck: Deck,
    player_cards: Vec<Card>,
    dealer_cards: Vec<Card>,
    community: Vec<Card>,
    stage: HandStage,
    wager: Option<Wager>,
    pending_trips: u32,
    bankroll: f64,
    history: HandHistory,
    outcome: Option<ResolveOutcome>,
}

impl RoundEngine {
    pub fn new() -> Self {
        Self::build(TableConfig::default(), Deck::new())
    }

    pub fn with_config(config: TableConfig) -> Self {
        Self::build(config, Deck::new())
    }

    /// Seeded construction for deterministic replay; live play uses [`RoundEngine::new`].
    pub fn new_with_seed(seed: u64) -> Self {
        Self::build(TableConfig::default(), Deck::new_with_seed(seed))
    }

    pub fn with_config_and_seed(config: TableConfig, seed: u64) -> Self {
        Self::build(config, Deck::new_with_seed(seed))
    }

    fn build(config: TableConfig, deck: Deck) -> Self {
        Self {
            bankroll: config.starting_bankroll,
            config,
            deck,
            player_cards: Vec::with_capacity(2),
            dealer_cards: Vec::with_capacity(2),
            community: Vec::with_capacity(5),
            stage: HandStage::Betting,
            wager: None,
            pending_trips: 0,
            history: HandHistory::new(),
            outcome: None,
        }
    }

    pub fn stage(&self) -> HandStage {
        self.stage
    }
    pub fn bankroll(&self) -> f64 {
        self.bankroll
    }
    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn player_cards(&self) -> &[Card] {
        &self.player_cards
    }
    pub fn dealer_cards(&self) -> &[Card] {
        &self.dealer_cards
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }
    pub fn wager(&self) -> Option<&Wager> {
        self.wager.as_ref()
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Stages the optional trips side bet for the next hand. Zero clears it.
    /// Bankroll sufficiency is checked at [`RoundEngine::start_hand`].
    pub fn stage_trips(&mut self, amount: u32) -> Result<(), GameError> {
        if !matches!(self.stage, HandStage::Betting | HandStage::Resolved) {
            return Err(GameError::InvalidStateTransition {
                stage: self.stage,
                action: "stage_trips",
            });
        }
        if amount > 0 {
            validate_stake(amount, self.config.chip_unit)?;
        }
        self.pending_trips = amount;
        Ok(())
    }

    /// Starts a hand: stakes ante, blind (== ante), and any staged trips,
    /// then deals 2 player, 2 dealer, and 5 community cards from a freshly
    /// shuffled deck.
    ///
    /// # Errors
    ///
    /// Rejects with no state change on a mid-hand call, a stake that is not a
    /// chip-unit multiple, or an insufficient bankroll.
    pub fn start_hand(&mut self, ante: u32) -> Result<(), GameError> {
        if !matches!(self.stage, HandStage::Betting | HandStage::Resolved) {
            return Err(GameError::InvalidStateTransition {
                stage: self.stage,
                action: "start_hand",
            });
        }
        validate_stake(ante, self.config.chip_unit)?;
        let required = f64::from(2 * ante + self.pending_trips);
        if required > self.bankroll {
            return Err(GameError::InsufficientFunds {
                required,
                available: self.bankroll,
            });
        }

        self.deck.reset();
        self.deck.shuffle();
        let mut drawn = Vec::with_capacity(9);
        for _ in 0..9 {
            drawn.push(self.deck.draw().ok_or(GameError::EmptyDeck)?);
        }

        self.bankroll -= required;
        self.wager = Some(Wager::new(ante, self.pending_trips));
        self.pending_trips = 0;
        self.player_cards = drawn[0..2].to_vec();
        self.dealer_cards = drawn[2..4].to_vec();
        self.community = drawn[4..9].to_vec();
        self.outcome = None;
        self.stage = HandStage::Dealt;
        Ok(())
    }

    /// Applies one betting-stage decision.
    ///
    /// Checking advances board visibility (preflop and flop only). A bet
    /// stakes the stage's play amount and settles the hand immediately, as
    /// does a fold; either terminal decision moves the stage to
    /// [`HandStage::Resolved`] and no further decisions are accepted.
    pub fn decide(&mut self, decision: Decision) -> Result<HandStage, GameError> {
        match (self.stage, decision) {
            (HandStage::Dealt, Decision::Check) => self.stage = HandStage::FlopRevealed,
            (HandStage::FlopRevealed, Decision::Check) => self.stage = HandStage::RiverRevealed,
            (HandStage::Dealt, Decision::Bet) => self.place_play_bet(4)?,
            (HandStage::FlopRevealed, Decision::Bet) => self.place_play_bet(2)?,
            (HandStage::RiverRevealed, Decision::Bet) => self.place_play_bet(1)?,
            (
                HandStage::Dealt | HandStage::FlopRevealed | HandStage::RiverRevealed,
                Decision::Fold,
            ) => self.settle(true)?,
            (stage, decision) => {
                return Err(GameError::InvalidStateTransition {
                    stage,
                    action: decision.name(),
                });
            }
        }
        Ok(self.stage)
    }

    /// The settled outcome of the current hand.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidStateTransition`] until a terminal decision has
    /// settled the hand.
    pub fn resolve(&self) -> Result<&ResolveOutcome, GameError> {
        self.outcome
            .as_ref()
            .ok_or(GameError::InvalidStateTransition {
                stage: self.stage,
                action: "resolve",
            })
    }

    /// Resolved hands, newest first.
    pub fn hand_history(&self) -> &[HandRecord] {
        self.history.records()
    }

    pub fn stats(&self) -> HistoryStats {
        self.history.stats()
    }

    fn place_play_bet(&mut self, multiplier: u32) -> Result<(), GameError> {
        let Some(mut wager) = self.wager else {
            return Err(GameError::InvalidStateTransition {
                stage: self.stage,
                action: "bet",
            });
        };
        let amount = multiplier * wager.ante();
        let required = f64::from(amount);
        if required > self.bankroll {
            return Err(GameError::InsufficientFunds {
                required,
                available: self.bankroll,
            });
        }
        self.bankroll -= required;
        wager.place_play_bet(amount);
        self.wager = Some(wager);
        self.settle(false)
    }

    fn settle(&mut self, folded: bool) -> Result<(), GameError> {
        let Some(wager) = self.wager else {
            return Err(GameError::InvalidStateTransition {
                stage: self.stage,
                action: "settle",
            });
        };

        let mut seven: Vec<Card> = Vec::with_capacity(7);
        seven.extend_from_slice(&self.player_cards);
        seven.extend_from_slice(&self.community);
        let player_best = hand::best_of_seven(&seven)?;
        seven.clear();
        seven.extend_from_slice(&self.dealer_cards);
        seven.extend_from_slice(&self.community);
        let dealer_best = hand::best_of_seven(&seven)?;

        // at least a pair, i.e. strictly better than any high-card hand
        let dealer_qualifies = dealer_best.category >= Category::OnePair;
        let winner = if folded {
            Winner::Dealer
        } else {
            match player_best.score.cmp(&dealer_best.score) {
                Ordering::Greater => Winner::Player,
                Ordering::Less => Winner::Dealer,
                Ordering::Equal => Winner::Push,
            }
        };

        let (outcome, net) = if folded {
            (Outcome::Fold, payout::fold_delta(&wager))
        } else {
            let net = payout::showdown_delta(
                &wager,
                winner,
                dealer_qualifies,
                player_best.category,
                player_best.is_royal(),
            );
            let outcome = match winner {
                Winner::Player => Outcome::Win,
                Winner::Dealer => Outcome::Loss,
                Winner::Push => Outcome::Push,
            };
            (outcome, net)
        };

        // stakes were deducted as they were placed; credit the gross return
        self.bankroll += net + f64::from(wager.staked());

        let record = HandRecord {
            outcome,
            net,
            player_hand: player_best.label(),
            dealer_hand: dealer_best.label(),
            ts: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
        };
        self.history.push(record.clone());
        self.outcome = Some(ResolveOutcome {
            player_best,
            dealer_best,
            winner,
            dealer_qualifies,
            net,
            record,
        });
        self.stage = HandStage::Resolved;
        Ok(())
    }
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new()
    }
}
