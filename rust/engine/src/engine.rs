use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::eval::{classify, HandRank};
use crate::hand::{Hand, HAND_SIZE};
use crate::ledger::{Bet, Denomination, Ledger, Money, STARTING_BALANCE};

/// Where the machine is in the wager → deal → hold/draw → payout cycle.
///
/// Only `AwaitingWager` and `AwaitingHolds` are observable between commands;
/// the other phases are passed through while `start_round` and
/// `advance_round` execute.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    AwaitingWager,
    InitialDeal,
    AwaitingHolds,
    FinalDraw,
    Payout,
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoundPhase::AwaitingWager => "awaiting wager",
            RoundPhase::InitialDeal => "dealing",
            RoundPhase::AwaitingHolds => "awaiting holds",
            RoundPhase::FinalDraw => "drawing",
            RoundPhase::Payout => "paying out",
        })
    }
}

/// Everything recorded about one settled round.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// 1-based count of rounds settled by this engine
    pub round: u64,
    pub denomination: Denomination,
    pub bet: Bet,
    pub wager: Money,
    /// Cards from the initial deal, by position
    pub initial: [Card; HAND_SIZE],
    pub holds: [bool; HAND_SIZE],
    /// Cards after the draw, by position
    pub final_hand: [Card; HAND_SIZE],
    pub rank: HandRank,
    pub payout: Money,
    /// Balance after the payout was credited
    pub balance: Money,
}

/// One position as the presentation layer sees it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SlotView {
    pub card: Option<Card>,
    pub held: bool,
}

/// Output contract read by the presentation layer after any command.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundView {
    pub phase: RoundPhase,
    pub balance: Money,
    pub denomination: Denomination,
    pub bet: Bet,
    pub slots: [SlotView; HAND_SIZE],
    pub rank: Option<HandRank>,
    /// Rank label, blank when nothing is showing or the hand is a loser
    pub rank_label: String,
    pub last_payout: Option<Money>,
    /// Kept until the next round starts
    pub last_round: Option<RoundOutcome>,
}

/// Round controller owning the deck, the hand and the ledger of one player.
///
/// # Examples
///
/// ```
/// use drawpoker_engine::engine::{Engine, RoundPhase};
/// use drawpoker_engine::ledger::Money;
///
/// let mut engine = Engine::new(Some(7));
/// engine.start_round().unwrap();
/// assert_eq!(engine.balance(), Money::parse("199.75").unwrap());
///
/// engine.set_hold(0, true).unwrap();
/// let outcome = engine.advance_round().unwrap();
/// assert_eq!(engine.phase(), RoundPhase::AwaitingWager);
/// assert_eq!(engine.balance(), outcome.balance);
/// ```
#[derive(Debug)]
pub struct Engine {
    deck: Deck,
    hand: Hand,
    ledger: Ledger,
    phase: RoundPhase,
    /// Pending hold choices; only meaningful while awaiting holds
    holds: [bool; HAND_SIZE],
    initial: Option<[Card; HAND_SIZE]>,
    rank: Option<HandRank>,
    last_payout: Option<Money>,
    last_round: Option<RoundOutcome>,
    rounds: u64,
}

impl Engine {
    /// Creates an engine with the standard 200.00 bankroll. Without a seed the
    /// deck is seeded from the thread RNG.
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_balance(seed, STARTING_BALANCE)
    }

    pub fn with_balance(seed: Option<u64>, balance: Money) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            deck: Deck::new_with_seed(seed),
            hand: Hand::new(),
            ledger: Ledger::new(balance),
            phase: RoundPhase::AwaitingWager,
            holds: [false; HAND_SIZE],
            initial: None,
            rank: None,
            last_payout: None,
            last_round: None,
            rounds: 0,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }
    pub fn balance(&self) -> Money {
        self.ledger.balance()
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn seed(&self) -> u64 {
        self.deck.seed()
    }

    pub fn set_denomination(&mut self, denomination: Denomination) -> Result<(), GameError> {
        self.require(RoundPhase::AwaitingWager, "set_denomination")?;
        self.ledger.set_denomination(denomination);
        Ok(())
    }

    pub fn set_bet(&mut self, bet: Bet) -> Result<(), GameError> {
        self.require(RoundPhase::AwaitingWager, "set_bet")?;
        self.ledger.set_bet(bet);
        Ok(())
    }

    /// Debits the wager and deals five cards. The rank computed here is for
    /// display only; nothing is paid on the initial deal.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidState`] unless awaiting a wager
    /// - [`GameError::InsufficientFunds`] when the balance cannot cover
    ///   denomination × bet; the engine is left unchanged
    pub fn start_round(&mut self) -> Result<RoundView, GameError> {
        self.require(RoundPhase::AwaitingWager, "start_round")?;
        let wager = self.ledger.debit_wager().inspect_err(|e| {
            tracing::warn!(error = %e, "wager rejected");
        })?;

        self.last_round = None;
        self.last_payout = None;
        self.holds = [false; HAND_SIZE];
        self.enter(RoundPhase::InitialDeal);

        let dealt = self.hand.deal(&mut self.deck);
        let rank = classify(&dealt);
        self.initial = Some(dealt);
        self.rank = Some(rank);
        tracing::info!(
            balance = %self.ledger.balance(),
            wager = %wager,
            rank = %rank,
            "round started"
        );

        self.enter(RoundPhase::AwaitingHolds);
        Ok(self.view())
    }

    /// Records whether the card at `position` is kept. Repeated calls for the
    /// same position overwrite each other; only the last one counts.
    pub fn set_hold(&mut self, position: usize, held: bool) -> Result<(), GameError> {
        self.require(RoundPhase::AwaitingHolds, "set_hold")?;
        let flag = self
            .holds
            .get_mut(position)
            .ok_or(GameError::InvalidPosition(position))?;
        *flag = held;
        Ok(())
    }

    /// Replaces all pending hold choices at once.
    pub fn set_holds(&mut self, holds: [bool; HAND_SIZE]) -> Result<(), GameError> {
        self.require(RoundPhase::AwaitingHolds, "set_holds")?;
        self.holds = holds;
        Ok(())
    }

    /// Draws replacements for unheld cards, pays the final rank and resets the
    /// deck and hand for the next round.
    pub fn advance_round(&mut self) -> Result<RoundOutcome, GameError> {
        self.require(RoundPhase::AwaitingHolds, "advance_round")?;
        let initial = self.initial.take().ok_or(GameError::InvalidState {
            command: "advance_round",
            phase: self.phase,
        })?;

        self.enter(RoundPhase::FinalDraw);
        self.hand.apply_holds(self.holds);
        let final_hand = self.hand.deal(&mut self.deck);
        let rank = classify(&final_hand);

        self.enter(RoundPhase::Payout);
        let payout = self.ledger.credit_payout(rank);
        self.rounds += 1;
        let outcome = RoundOutcome {
            round: self.rounds,
            denomination: self.ledger.denomination(),
            bet: self.ledger.bet(),
            wager: self.ledger.wager(),
            initial,
            holds: self.holds,
            final_hand,
            rank,
            payout,
            balance: self.ledger.balance(),
        };
        tracing::info!(
            round = outcome.round,
            rank = %rank,
            payout = %payout,
            balance = %outcome.balance,
            "round settled"
        );

        self.rank = Some(rank);
        self.last_payout = Some(payout);
        self.last_round = Some(outcome.clone());

        self.deck.reset();
        self.hand.reset_all();
        self.holds = [false; HAND_SIZE];
        self.enter(RoundPhase::AwaitingWager);
        Ok(outcome)
    }

    pub fn view(&self) -> RoundView {
        let awaiting_holds = self.phase == RoundPhase::AwaitingHolds;
        let mut slots = [SlotView {
            card: None,
            held: false,
        }; HAND_SIZE];
        for (i, (view, slot)) in slots.iter_mut().zip(self.hand.slots()).enumerate() {
            view.card = slot.card();
            view.held = slot.is_held() || (awaiting_holds && self.holds[i]);
        }
        RoundView {
            phase: self.phase,
            balance: self.ledger.balance(),
            denomination: self.ledger.denomination(),
            bet: self.ledger.bet(),
            slots,
            rank: self.rank,
            rank_label: self.rank.map(HandRank::label).unwrap_or_default().to_string(),
            last_payout: self.last_payout,
            last_round: self.last_round.clone(),
        }
    }

    fn require(&self, expected: RoundPhase, command: &'static str) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::InvalidState {
                command,
                phase: self.phase,
            })
        }
    }

    fn enter(&mut self, phase: RoundPhase) {
        tracing::debug!(from = %self.phase, to = %phase, "phase transition");
        self.phase = phase;
    }
}
