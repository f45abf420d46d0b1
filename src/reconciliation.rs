//! Bank reconciliation: pairs ledger entries for one cash account with the
//! lines of an external bank statement.
//!
//! Matching is first-match-wins in statement order. Each book entry takes
//! the earliest statement line that has not been matched yet and has the
//! same date and the same signed amount. Lines are looked up through a
//! `(date, amount)` index holding a FIFO queue per key, which yields the
//! same pairs as scanning the statement front to back for every entry.

use crate::config::MatchStrategy;
use crate::schema::{BankStatementItem, Transaction};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconStatus {
    Matched,
    MissingInStatement,
    MissingInBook,
    /// Only produced by `MatchStrategy::AmountTolerance`.
    AmountMismatch,
}

impl std::fmt::Display for ReconStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Matched => write!(f, "matched"),
            Self::MissingInStatement => write!(f, "missing_in_statement"),
            Self::MissingInBook => write!(f, "missing_in_book"),
            Self::AmountMismatch => write!(f, "amount_mismatch"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconMatch {
    pub book_entry: Option<Transaction>,
    pub statement_entry: Option<BankStatementItem>,
    pub status: ReconStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconSummary {
    pub total: usize,
    pub matched: usize,
    pub missing_in_statement: usize,
    pub missing_in_book: usize,
    pub amount_mismatch: usize,
}

impl ReconSummary {
    pub fn from_matches(matches: &[ReconMatch]) -> Self {
        let mut summary = Self {
            total: matches.len(),
            ..Self::default()
        };
        for m in matches {
            match m.status {
                ReconStatus::Matched => summary.matched += 1,
                ReconStatus::MissingInStatement => summary.missing_in_statement += 1,
                ReconStatus::MissingInBook => summary.missing_in_book += 1,
                ReconStatus::AmountMismatch => summary.amount_mismatch += 1,
            }
        }
        summary
    }

    pub fn is_fully_reconciled(&self) -> bool {
        self.matched == self.total
    }
}

/// Ledger entries posted to exactly `account_name`, in ledger order.
pub fn select_book_entries(transactions: &[Transaction], account_name: &str) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|tx| tx.account_name == account_name)
        .cloned()
        .collect()
}

/// Exact (date, signed amount) reconciliation.
///
/// Statement ids are expected to be unique; see
/// [`crate::ingestion::validate_statement_ids`].
pub fn reconcile(book: &[Transaction], statement: &[BankStatementItem]) -> Vec<ReconMatch> {
    reconcile_with_strategy(book, statement, MatchStrategy::Exact)
}

pub fn reconcile_with_strategy(
    book: &[Transaction],
    statement: &[BankStatementItem],
    strategy: MatchStrategy,
) -> Vec<ReconMatch> {
    let mut index = StatementIndex::build(statement);
    let mut consumed = vec![false; statement.len()];

    let mut pairs: Vec<Option<(usize, ReconStatus)>> = book
        .iter()
        .map(|entry| {
            let found = MatchKey::new(entry.date, entry.signed_amount()).and_then(|key| index.take(&key));
            found.map(|idx| {
                consumed[idx] = true;
                (idx, ReconStatus::Matched)
            })
        })
        .collect();

    if let MatchStrategy::AmountTolerance { tolerance } = strategy {
        // Runs after every exact match is settled so it can never take a
        // line an exact match would have claimed.
        for (slot, entry) in pairs.iter_mut().zip(book) {
            if slot.is_some() {
                continue;
            }
            let signed = entry.signed_amount();
            let candidate = statement.iter().enumerate().position(|(idx, line)| {
                !consumed[idx] && line.date == entry.date && (line.amount - signed).abs() <= tolerance
            });
            if let Some(idx) = candidate {
                consumed[idx] = true;
                *slot = Some((idx, ReconStatus::AmountMismatch));
            }
        }
    }

    let mut matches = Vec::with_capacity(book.len() + statement.len());

    for (entry, slot) in book.iter().zip(pairs) {
        matches.push(match slot {
            Some((idx, status)) => ReconMatch {
                book_entry: Some(entry.clone()),
                statement_entry: Some(statement[idx].clone()),
                status,
            },
            None => ReconMatch {
                book_entry: Some(entry.clone()),
                statement_entry: None,
                status: ReconStatus::MissingInStatement,
            },
        });
    }

    for (line, _) in statement.iter().zip(&consumed).filter(|(_, used)| !**used) {
        matches.push(ReconMatch {
            book_entry: None,
            statement_entry: Some(line.clone()),
            status: ReconStatus::MissingInBook,
        });
    }

    debug!(
        "Reconciled {} book entries against {} statement lines: {:?}",
        book.len(),
        statement.len(),
        ReconSummary::from_matches(&matches)
    );

    matches
}

/// Hashable (date, amount) pair. `+0.0` and `-0.0` share a key; NaN has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MatchKey {
    date: NaiveDate,
    amount_bits: u64,
}

impl MatchKey {
    fn new(date: NaiveDate, amount: f64) -> Option<Self> {
        if amount.is_nan() {
            return None;
        }
        let normalized = if amount == 0.0 { 0.0 } else { amount };
        Some(Self {
            date,
            amount_bits: normalized.to_bits(),
        })
    }
}

struct StatementIndex {
    by_key: HashMap<MatchKey, VecDeque<usize>>,
}

impl StatementIndex {
    fn build(statement: &[BankStatementItem]) -> Self {
        let mut by_key: HashMap<MatchKey, VecDeque<usize>> = HashMap::new();
        for (idx, line) in statement.iter().enumerate() {
            if let Some(key) = MatchKey::new(line.date, line.amount) {
                by_key.entry(key).or_default().push_back(idx);
            }
        }
        Self { by_key }
    }

    /// Earliest unclaimed line for `key`.
    fn take(&mut self, key: &MatchKey) -> Option<usize> {
        self.by_key.get_mut(key).and_then(VecDeque::pop_front)
    }
}
