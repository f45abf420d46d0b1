use crate::config::{CashAccountMatcher, NoteText, NotesConfig};
use crate::statements::{BalanceSheet, IncomeStatement, StatementItem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialNote {
    pub number: u32,
    pub title: String,
    pub body: String,
    /// Rows the note refers to. Empty for narrative-only notes.
    pub data: Vec<StatementItem>,
}

impl FinancialNote {
    fn new(number: u32, text: &NoteText, data: Vec<StatementItem>) -> Self {
        Self {
            number,
            title: text.title.clone(),
            body: text.body.clone(),
            data,
        }
    }
}

/// Builds the four fixed notes:
/// 1. basis of preparation
/// 2. revenue recognition (revenue rows)
/// 3. cash and cash equivalents (cash asset rows)
/// 4. property, plant and equipment (all other asset rows)
pub fn build_notes(
    income_statement: &IncomeStatement,
    balance_sheet: &BalanceSheet,
    cash_accounts: &CashAccountMatcher,
    text: &NotesConfig,
) -> Vec<FinancialNote> {
    let (cash, non_cash): (Vec<StatementItem>, Vec<StatementItem>) = balance_sheet
        .assets
        .iter()
        .cloned()
        .partition(|row| cash_accounts.matches(&row.label));

    vec![
        FinancialNote::new(1, &text.basis_of_preparation, Vec::new()),
        FinancialNote::new(2, &text.revenue_recognition, income_statement.revenue.clone()),
        FinancialNote::new(3, &text.cash_and_equivalents, cash),
        FinancialNote::new(4, &text.property_and_equipment, non_cash),
    ]
}
