use serde::{Deserialize, Serialize};

/// How a hand ended for the player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Fold,
    Push,
}

/// Append-only log entry created when a hand resolves.
/// Serialized to JSONL format for hand history storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// How the hand ended
    pub outcome: Outcome,
    /// Net bankroll change, stakes included
    pub net: f64,
    /// Label of the player's best hand, e.g. `PAIR OF ACES`
    pub player_hand: String,
    /// Label of the dealer's best hand
    pub dealer_hand: String,
    /// Timestamp when the hand resolved (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

/// Display/statistics summary over a session's resolved hands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    pub hands: usize,
    pub wins: usize,
    pub losses: usize,
    pub folds: usize,
    pub pushes: usize,
    pub win_pct: f64,
    pub loss_pct: f64,
    pub fold_pct: f64,
    pub push_pct: f64,
}

/// Ordered sequence of resolved hands, newest first. Records are never
/// mutated after insertion and are never read back into engine decisions.
#[derive(Debug, Default)]
pub struct HandHistory {
    records: Vec<HandRecord>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts at the front; iteration order is newest first.
    pub fn push(&mut self, record: HandRecord) {
        self.records.insert(0, record);
    }

    /// All records, newest first.
    pub fn records(&self) -> &[HandRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> HistoryStats {
        let hands = self.records.len();
        let count = |o: Outcome| self.records.iter().filter(|r| r.outcome == o).count();
        let wins = count(Outcome::Win);
        let losses = count(Outcome::Loss);
        let folds = count(Outcome::Fold);
        let pushes = count(Outcome::Push);
        let pct = |n: usize| {
            if hands == 0 {
                0.0
            } else {
                n as f64 * 100.0 / hands as f64
            }
        };
        HistoryStats {
            hands,
            wins,
            losses,
            folds,
            pushes,
            win_pct: pct(wins),
            loss_pct: pct(losses),
            fold_pct: pct(folds),
            push_pct: pct(pushes),
        }
    }
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Buffered JSONL writer for hand records. Audit/diagnostic output only; the
/// engine never reads it back.
pub struct HandLogger {
    writer: BufWriter<File>,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
