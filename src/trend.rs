use crate::schema::{AccountCategory, Transaction};
use crate::utils::{month_index, MONTH_LABELS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    /// Calendar month, 1 = January.
    pub month: u32,
    pub label: String,
    pub revenue: f64,
    pub expense: f64,
    pub profit: f64,
}

/// Revenue, expense and profit per calendar month, January to December.
///
/// Years are folded together: March 2022 and March 2023 land in the same
/// bucket. Amounts are summed as recorded, regardless of debit or credit.
pub fn build_monthly_trend(transactions: &[Transaction]) -> Vec<MonthlyTrend> {
    let mut revenue = [0.0_f64; 12];
    let mut expense = [0.0_f64; 12];

    for tx in transactions {
        let idx = month_index(tx.date);
        match tx.category {
            AccountCategory::Revenue => revenue[idx] += tx.amount,
            AccountCategory::Expense => expense[idx] += tx.amount,
            _ => {}
        }
    }

    MONTH_LABELS
        .iter()
        .enumerate()
        .map(|(idx, label)| MonthlyTrend {
            month: idx as u32 + 1,
            label: (*label).to_string(),
            revenue: revenue[idx],
            expense: expense[idx],
            profit: revenue[idx] - expense[idx],
        })
        .collect()
}
