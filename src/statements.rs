//! Income statement and balance sheet derived from the trial balance.
//!
//! Revenue, liability and equity rows are credit-normal (credit − debit);
//! expense and asset rows are debit-normal (debit − credit). Net income is
//! carried into the balance sheet as a synthetic equity row and is never
//! written back into the trial balance.

use crate::schema::AccountCategory;
use crate::trial_balance::{TrialBalance, TrialBalanceItem};
use serde::{Deserialize, Serialize};

pub const CURRENT_PERIOD_EARNINGS: &str = "Current Period Earnings";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementItem {
    pub label: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_total: bool,
}

impl StatementItem {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
            is_total: false,
        }
    }

    pub fn total(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
            is_total: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeStatement {
    pub revenue: Vec<StatementItem>,
    pub expenses: Vec<StatementItem>,
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub net_income: f64,
}

impl IncomeStatement {
    pub fn from_trial_balance(trial_balance: &TrialBalance) -> Self {
        let revenue = section(trial_balance, AccountCategory::Revenue);
        let expenses = section(trial_balance, AccountCategory::Expense);

        let total_revenue = total(&revenue);
        let total_expenses = total(&expenses);

        Self {
            revenue,
            expenses,
            total_revenue,
            total_expenses,
            net_income: total_revenue - total_expenses,
        }
    }

    /// Flattened presentation rows with section totals marked.
    pub fn rows(&self) -> Vec<StatementItem> {
        let mut rows = Vec::with_capacity(self.revenue.len() + self.expenses.len() + 3);
        rows.extend(self.revenue.iter().cloned());
        rows.push(StatementItem::total("Total Revenue", self.total_revenue));
        rows.extend(self.expenses.iter().cloned());
        rows.push(StatementItem::total("Total Expenses", self.total_expenses));
        rows.push(StatementItem::total("Net Income", self.net_income));
        rows
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub assets: Vec<StatementItem>,
    pub liabilities: Vec<StatementItem>,
    /// Equity accounts followed by the synthetic current-period earnings row.
    pub equity: Vec<StatementItem>,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub total_equity: f64,
}

impl BalanceSheet {
    pub fn from_trial_balance(trial_balance: &TrialBalance, net_income: f64) -> Self {
        let assets = section(trial_balance, AccountCategory::Asset);
        let liabilities = section(trial_balance, AccountCategory::Liability);
        let mut equity = section(trial_balance, AccountCategory::Equity);
        equity.push(StatementItem::new(CURRENT_PERIOD_EARNINGS, net_income));

        let total_assets = total(&assets);
        let total_liabilities = total(&liabilities);
        let total_equity = total(&equity);

        Self {
            assets,
            liabilities,
            equity,
            total_assets,
            total_liabilities,
            total_equity,
        }
    }

    /// Equity rows as recorded in the ledger, without the earnings row.
    pub fn raw_equity(&self) -> &[StatementItem] {
        let len = self.equity.len().saturating_sub(1);
        &self.equity[..len]
    }

    pub fn total_liabilities_and_equity(&self) -> f64 {
        self.total_liabilities + self.total_equity
    }

    pub fn rows(&self) -> Vec<StatementItem> {
        let mut rows = Vec::with_capacity(
            self.assets.len() + self.liabilities.len() + self.equity.len() + 4,
        );
        rows.extend(self.assets.iter().cloned());
        rows.push(StatementItem::total("Total Assets", self.total_assets));
        rows.extend(self.liabilities.iter().cloned());
        rows.push(StatementItem::total("Total Liabilities", self.total_liabilities));
        rows.extend(self.equity.iter().cloned());
        rows.push(StatementItem::total("Total Equity", self.total_equity));
        rows.push(StatementItem::total(
            "Total Liabilities and Equity",
            self.total_liabilities_and_equity(),
        ));
        rows
    }
}

fn section(trial_balance: &TrialBalance, category: AccountCategory) -> Vec<StatementItem> {
    trial_balance
        .by_category(category)
        .map(|item| StatementItem::new(item.account_name.clone(), normal_balance(item)))
        .collect()
}

/// Balance on the account's natural side.
fn normal_balance(item: &TrialBalanceItem) -> f64 {
    if item.category.is_debit_normal() {
        item.debit - item.credit
    } else {
        item.credit - item.debit
    }
}

fn total(rows: &[StatementItem]) -> f64 {
    rows.iter().map(|r| r.amount).sum()
}
