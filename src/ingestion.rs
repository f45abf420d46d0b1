//! Checks for the transaction and statement lists handed over by ingestion.
//!
//! The report builders assume these already hold; callers that cannot vouch
//! for their input run them first.

use crate::error::{FinancialReportError, Result};
use crate::schema::{AccountCategory, BankStatementItem, Transaction};
use std::collections::{HashMap, HashSet};

/// A transaction whose category disagrees with the first one recorded for
/// the same account.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryConflict {
    pub account_name: String,
    pub first: AccountCategory,
    pub transaction_id: String,
    pub conflicting: AccountCategory,
}

impl From<CategoryConflict> for FinancialReportError {
    fn from(conflict: CategoryConflict) -> Self {
        FinancialReportError::ConflictingCategory {
            account: conflict.account_name,
            transaction_id: conflict.transaction_id,
            first: conflict.first,
            conflicting: conflict.conflicting,
        }
    }
}

/// Every transaction whose category differs from its account's first-seen
/// category, in ledger order.
pub fn detect_category_conflicts(transactions: &[Transaction]) -> Vec<CategoryConflict> {
    let mut first_seen: HashMap<&str, AccountCategory> = HashMap::new();
    let mut conflicts = Vec::new();

    for tx in transactions {
        let first = *first_seen
            .entry(tx.account_name.as_str())
            .or_insert(tx.category);
        if first != tx.category {
            conflicts.push(CategoryConflict {
                account_name: tx.account_name.clone(),
                first,
                transaction_id: tx.id.clone(),
                conflicting: tx.category,
            });
        }
    }

    conflicts
}

pub fn validate_statement_ids(statement: &[BankStatementItem]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(statement.len());
    for line in statement {
        if !seen.insert(line.id.as_str()) {
            return Err(FinancialReportError::DuplicateStatementId(line.id.clone()));
        }
    }
    Ok(())
}

/// Rejects duplicate ids and amounts that are negative or not finite.
pub fn validate_transactions(transactions: &[Transaction]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(transactions.len());
    for tx in transactions {
        if !tx.amount.is_finite() || tx.amount < 0.0 {
            return Err(FinancialReportError::InvalidAmount {
                transaction_id: tx.id.clone(),
                amount: tx.amount,
            });
        }
        if !seen.insert(tx.id.as_str()) {
            return Err(FinancialReportError::DuplicateTransactionId(tx.id.clone()));
        }
    }
    Ok(())
}
