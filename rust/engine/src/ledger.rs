use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::eval::HandRank;

/// Bankroll the machine starts with (200.00).
pub const STARTING_BALANCE: Money = Money::from_cents(20_000);

/// Non-negative currency amount with a fixed two-digit scale, held in cents.
///
/// Denominations, bets and multipliers are all whole numbers of cents, so
/// arithmetic on `Money` is exact. Rounding only happens when parsing text with
/// more than two fractional digits, and it rounds half to even.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    pub fn times(self, n: u64) -> Money {
        Money(self.0.saturating_mul(n))
    }

    /// Parses a decimal amount such as `200`, `0.5` or `199.75`.
    ///
    /// Digits past the second decimal place are rounded half to even.
    ///
    /// ```
    /// use drawpoker_engine::ledger::Money;
    ///
    /// assert_eq!(Money::parse("10.005").unwrap().to_string(), "10.00");
    /// assert_eq!(Money::parse("10.015").unwrap().to_string(), "10.02");
    /// assert_eq!(Money::parse("0.5").unwrap().cents(), 50);
    /// ```
    pub fn parse(input: &str) -> Result<Money, GameError> {
        let invalid = || GameError::InvalidAmount(input.to_string());
        let s = input.trim().trim_start_matches('$');
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        let all_digits = |t: &str| t.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let digits: Vec<u64> = frac.bytes().map(|b| u64::from(b - b'0')).collect();
        let d = |i: usize| digits.get(i).copied().unwrap_or(0);

        let mut cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(d(0) * 10 + d(1)))
            .ok_or_else(invalid)?;

        let first_dropped = d(2);
        let rest_nonzero = digits.iter().skip(3).any(|&x| x != 0);
        let round_up = match first_dropped {
            0..=4 => false,
            5 if !rest_nonzero => cents % 2 == 1,
            _ => true,
        };
        if round_up {
            cents = cents.checked_add(1).ok_or_else(invalid)?;
        }
        Ok(Money(cents))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Money {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl From<Money> for String {
    fn from(m: Money) -> Self {
        m.to_string()
    }
}

impl TryFrom<String> for Money {
    type Error = GameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Money::parse(&s)
    }
}

/// Coin value of one bet credit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Denomination {
    /// 0.25
    #[default]
    Quarter,
    /// 0.50
    Half,
    /// 1.00
    Dollar,
}

impl Denomination {
    pub const ALL: [Denomination; 3] = [
        Denomination::Quarter,
        Denomination::Half,
        Denomination::Dollar,
    ];

    pub fn amount(self) -> Money {
        match self {
            Denomination::Quarter => Money::from_cents(25),
            Denomination::Half => Money::from_cents(50),
            Denomination::Dollar => Money::from_cents(100),
        }
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.amount().fmt(f)
    }
}

impl FromStr for Denomination {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Money::parse(s).map_err(|_| GameError::InvalidDenomination(s.to_string()))?;
        Denomination::ALL
            .into_iter()
            .find(|d| d.amount() == amount)
            .ok_or_else(|| GameError::InvalidDenomination(s.to_string()))
    }
}

impl From<Denomination> for String {
    fn from(d: Denomination) -> Self {
        d.to_string()
    }
}

impl TryFrom<String> for Denomination {
    type Error = GameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Number of credits wagered per round, 1..=5.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Bet(u8);

impl Bet {
    pub const MIN: Bet = Bet(1);
    pub const MAX: Bet = Bet(5);

    pub fn new(credits: u8) -> Result<Bet, GameError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&credits) {
            Ok(Bet(credits))
        } else {
            Err(GameError::InvalidBet(credits))
        }
    }

    pub fn credits(self) -> u8 {
        self.0
    }
}

impl Default for Bet {
    fn default() -> Self {
        Bet::MIN
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Bet> for u8 {
    fn from(b: Bet) -> Self {
        b.0
    }
}

impl TryFrom<u8> for Bet {
    type Error = GameError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        Bet::new(v)
    }
}

/// Prize multiplier per credit for each rank (Jacks or Better 9/6 table).
pub fn prize_multiplier(rank: HandRank) -> u64 {
    match rank {
        HandRank::RoyalFlush => 800,
        HandRank::StraightFlush => 50,
        HandRank::FourOfAKind => 25,
        HandRank::FullHouse => 9,
        HandRank::Flush => 6,
        HandRank::Straight => 4,
        HandRank::ThreeOfAKind => 3,
        HandRank::TwoPair => 2,
        HandRank::JacksOrBetter => 1,
        HandRank::Nothing => 0,
    }
}

/// The player's money plus the wager settings.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ledger {
    balance: Money,
    denomination: Denomination,
    bet: Bet,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(STARTING_BALANCE)
    }
}

impl Ledger {
    pub fn new(balance: Money) -> Self {
        Self {
            balance,
            denomination: Denomination::default(),
            bet: Bet::default(),
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }
    pub fn denomination(&self) -> Denomination {
        self.denomination
    }
    pub fn bet(&self) -> Bet {
        self.bet
    }

    pub fn set_denomination(&mut self, denomination: Denomination) {
        self.denomination = denomination;
    }
    pub fn set_bet(&mut self, bet: Bet) {
        self.bet = bet;
    }

    /// Denomination × bet.
    pub fn wager(&self) -> Money {
        self.denomination.amount().times(u64::from(self.bet.credits()))
    }

    /// Denomination × bet × prize multiplier.
    pub fn payout_for(&self, rank: HandRank) -> Money {
        self.wager().times(prize_multiplier(rank))
    }

    /// Takes the wager out of the balance. Fails without touching the balance
    /// when it cannot cover the wager.
    pub fn debit_wager(&mut self) -> Result<Money, GameError> {
        let wager = self.wager();
        self.balance = self
            .balance
            .checked_sub(wager)
            .ok_or(GameError::InsufficientFunds {
                balance: self.balance,
                wager,
            })?;
        Ok(wager)
    }

    /// Credits the prize for `rank` and returns it.
    pub fn credit_payout(&mut self, rank: HandRank) -> Money {
        let amount = self.payout_for(rank);
        self.balance = self.balance.saturating_add(amount);
        amount
    }
}
