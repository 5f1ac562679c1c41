use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::RoundOutcome;
use crate::eval::HandRank;
use crate::hand::HAND_SIZE;
use crate::ledger::{Bet, Denomination, Money};

/// One settled round, serialized as a single JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Deck seed of the session (enables deterministic replay)
    pub seed: Option<u64>,
    pub denomination: Denomination,
    pub bet: Bet,
    /// Cards from the initial deal, by position
    pub initial: [Card; HAND_SIZE],
    /// Positions the player kept
    pub holds: [bool; HAND_SIZE],
    /// Cards after the draw, by position
    pub final_hand: [Card; HAND_SIZE],
    pub rank: HandRank,
    pub payout: Money,
    /// Balance after settlement
    pub balance: Money,
    /// Timestamp when the round was settled (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_outcome(round_id: String, seed: Option<u64>, outcome: &RoundOutcome) -> Self {
        Self {
            round_id,
            seed,
            denomination: outcome.denomination,
            bet: outcome.bet,
            initial: outcome.initial,
            holds: outcome.holds,
            final_hand: outcome.final_hand,
            rank: outcome.rank,
            payout: outcome.payout,
            balance: outcome.balance,
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends round records to a JSONL file.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
