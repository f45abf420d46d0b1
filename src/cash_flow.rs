use crate::config::CashAccountMatcher;
use crate::schema::{AccountCategory, Transaction};
use crate::statements::{BalanceSheet, IncomeStatement};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CashActivity {
    Operating,
    Investing,
    Financing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowItem {
    pub transaction_id: String,
    pub date: NaiveDate,
    pub description: String,
    pub account_name: String,
    /// Positive when cash comes in (debit to the cash account).
    pub amount: f64,
}

impl CashFlowItem {
    fn from_transaction(tx: &Transaction) -> Self {
        Self {
            transaction_id: tx.id.clone(),
            date: tx.date,
            description: tx.description.clone(),
            account_name: tx.account_name.clone(),
            amount: tx.signed_amount(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowStatement {
    pub operating: Vec<CashFlowItem>,
    pub investing: Vec<CashFlowItem>,
    pub financing: Vec<CashFlowItem>,
    /// Cash account entries that fit none of the three activities.
    pub unclassified: Vec<CashFlowItem>,
    /// Balance-sheet identity figure, not the sum of the activities.
    pub net_cash_flow: f64,
}

impl CashFlowStatement {
    pub fn build(
        transactions: &[Transaction],
        cash_accounts: &CashAccountMatcher,
        balance_sheet: &BalanceSheet,
        income_statement: &IncomeStatement,
    ) -> Self {
        let mut statement = Self {
            net_cash_flow: net_cash_flow(balance_sheet, income_statement),
            ..Self::default()
        };

        for tx in transactions
            .iter()
            .filter(|tx| cash_accounts.matches(&tx.account_name))
        {
            let item = CashFlowItem::from_transaction(tx);
            match classify(tx, cash_accounts) {
                Some(CashActivity::Operating) => statement.operating.push(item),
                Some(CashActivity::Investing) => statement.investing.push(item),
                Some(CashActivity::Financing) => statement.financing.push(item),
                None => statement.unclassified.push(item),
            }
        }

        statement
    }

    pub fn activity(&self, activity: CashActivity) -> &[CashFlowItem] {
        match activity {
            CashActivity::Operating => &self.operating,
            CashActivity::Investing => &self.investing,
            CashActivity::Financing => &self.financing,
        }
    }

    pub fn activity_total(&self, activity: CashActivity) -> f64 {
        self.activity(activity).iter().map(|i| i.amount).sum()
    }
}

/// Activity for an entry, or `None` for an asset entry booked on a cash
/// account itself.
pub fn classify(tx: &Transaction, cash_accounts: &CashAccountMatcher) -> Option<CashActivity> {
    match tx.category {
        AccountCategory::Revenue | AccountCategory::Expense => Some(CashActivity::Operating),
        AccountCategory::Asset if !cash_accounts.matches(&tx.account_name) => {
            Some(CashActivity::Investing)
        }
        AccountCategory::Asset => None,
        AccountCategory::Liability | AccountCategory::Equity => Some(CashActivity::Financing),
    }
}

/// total assets − total liabilities − total equity + net income
pub fn net_cash_flow(balance_sheet: &BalanceSheet, income_statement: &IncomeStatement) -> f64 {
    balance_sheet.total_assets - balance_sheet.total_liabilities - balance_sheet.total_equity
        + income_statement.net_income
}
