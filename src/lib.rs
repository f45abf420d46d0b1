//! # Financial Report Builder
//!
//! A library for deriving a consistent set of financial reports from a flat
//! double-entry ledger, reconciling that ledger against a bank statement and
//! summarising it as a twelve-month trend.
//!
//! ## Core Concepts
//!
//! - **Trial Balance**: per-account debit and credit totals, in first-seen account order
//! - **Statements**: income statement and balance sheet classified from the trial balance,
//!   with net income carried into equity as a synthetic "Current Period Earnings" row
//! - **Derived Reports**: equity roll-forward, cash flow breakdown, notes and budget variance
//! - **Reconciliation**: first-match-wins pairing of ledger entries with statement lines
//! - **Trend**: revenue, expense and profit per calendar month, years folded together
//! - **Accounting Integrity**: Assets = Liabilities + Equity for any balanced ledger
//!
//! ## Example
//!
//! ```rust,ignore
//! use financial_report_builder::*;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
//! let transactions = vec![
//!     Transaction {
//!         id: "1".to_string(),
//!         date,
//!         description: "Owner investment".to_string(),
//!         account_name: "Cash".to_string(),
//!         category: AccountCategory::Asset,
//!         amount: 50_000.0,
//!         entry_type: EntryType::Debit,
//!     },
//!     Transaction {
//!         id: "2".to_string(),
//!         date,
//!         description: "Owner investment".to_string(),
//!         account_name: "Common Stock".to_string(),
//!         category: AccountCategory::Equity,
//!         amount: 50_000.0,
//!         entry_type: EntryType::Credit,
//!     },
//! ];
//!
//! let report = build_financial_statements(&transactions, &ReportConfig::default()).unwrap();
//! assert_eq!(report.balance_sheet().total_assets, 50_000.0);
//! ```

pub mod balancer;
pub mod cash_flow;
pub mod config;
pub mod equity;
pub mod error;
pub mod ingestion;
pub mod ledger;
pub mod notes;
pub mod reconciliation;
pub mod schema;
pub mod statements;
pub mod trend;
pub mod trial_balance;
pub mod utils;
pub mod variance;

pub use balancer::{verify_accounting_equation, VerificationResult};
pub use cash_flow::{CashActivity, CashFlowItem, CashFlowStatement};
pub use config::{
    BudgetConfig, CashAccountMatcher, CategoryConflictPolicy, MatchStrategy, NoteText,
    NotesConfig, ReconciliationConfig, ReportConfig,
};
pub use equity::{build_equity_changes, EquityChangeItem};
pub use error::{FinancialReportError, Result};
pub use ingestion::*;
pub use ledger::Ledger;
pub use notes::{build_notes, FinancialNote};
pub use reconciliation::{
    reconcile, reconcile_with_strategy, select_book_entries, ReconMatch, ReconStatus,
    ReconSummary,
};
pub use schema::*;
pub use statements::{BalanceSheet, IncomeStatement, StatementItem};
pub use trend::{build_monthly_trend, MonthlyTrend};
pub use trial_balance::{build_trial_balance, TrialBalance, TrialBalanceItem};
pub use variance::BudgetVariance;

use log::{debug, info, warn};
use serde::Serialize;

/// Every report derived from one transaction list.
///
/// Only the processor builds it, and nothing mutates it afterwards: a
/// changed transaction list produces a new snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialStatements {
    trial_balance: TrialBalance,
    income_statement: IncomeStatement,
    balance_sheet: BalanceSheet,
    cash_flow: CashFlowStatement,
    equity_changes: Vec<EquityChangeItem>,
    notes: Vec<FinancialNote>,
    variance: BudgetVariance,
}

impl FinancialStatements {
    pub fn trial_balance(&self) -> &TrialBalance {
        &self.trial_balance
    }

    pub fn income_statement(&self) -> &IncomeStatement {
        &self.income_statement
    }

    pub fn balance_sheet(&self) -> &BalanceSheet {
        &self.balance_sheet
    }

    pub fn cash_flow(&self) -> &CashFlowStatement {
        &self.cash_flow
    }

    pub fn equity_changes(&self) -> &[EquityChangeItem] {
        &self.equity_changes
    }

    pub fn notes(&self) -> &[FinancialNote] {
        &self.notes
    }

    pub fn variance(&self) -> &BudgetVariance {
        &self.variance
    }

    pub fn net_income(&self) -> f64 {
        self.income_statement.net_income
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub struct FinancialReportProcessor;

impl FinancialReportProcessor {
    pub fn process(
        transactions: &[Transaction],
        config: &ReportConfig,
    ) -> Result<FinancialStatements> {
        config.validate()?;
        apply_category_policy(transactions, config.category_policy)?;

        info!(
            "Building financial statements from {} transactions",
            transactions.len()
        );

        let trial_balance = TrialBalance::build(transactions);
        debug!("Trial balance contains {} accounts", trial_balance.len());

        let income_statement = IncomeStatement::from_trial_balance(&trial_balance);
        let balance_sheet =
            BalanceSheet::from_trial_balance(&trial_balance, income_statement.net_income);
        debug!(
            "Net income {:.2}; assets {:.2}, liabilities {:.2}, equity {:.2}",
            income_statement.net_income,
            balance_sheet.total_assets,
            balance_sheet.total_liabilities,
            balance_sheet.total_equity
        );

        let equity_changes = build_equity_changes(
            balance_sheet.raw_equity(),
            income_statement.net_income,
            config.equity_opening_threshold,
        );
        let cash_flow = CashFlowStatement::build(
            transactions,
            &config.cash_accounts,
            &balance_sheet,
            &income_statement,
        );
        let notes = build_notes(
            &income_statement,
            &balance_sheet,
            &config.cash_accounts,
            &config.notes,
        );
        let variance = BudgetVariance::build(&income_statement, &config.budget);

        Ok(FinancialStatements {
            trial_balance,
            income_statement,
            balance_sheet,
            cash_flow,
            equity_changes,
            notes,
            variance,
        })
    }

    pub fn process_with_verification(
        transactions: &[Transaction],
        config: &ReportConfig,
        tolerance: f64,
    ) -> Result<FinancialStatements> {
        let statements = Self::process(transactions, config)?;

        verify_accounting_equation(&statements.balance_sheet, tolerance)?;

        Ok(statements)
    }
}

pub fn build_financial_statements(
    transactions: &[Transaction],
    config: &ReportConfig,
) -> Result<FinancialStatements> {
    FinancialReportProcessor::process(transactions, config)
}

pub fn process_with_verification(
    transactions: &[Transaction],
    config: &ReportConfig,
    tolerance: f64,
) -> Result<FinancialStatements> {
    FinancialReportProcessor::process_with_verification(transactions, config, tolerance)
}

fn apply_category_policy(
    transactions: &[Transaction],
    policy: CategoryConflictPolicy,
) -> Result<()> {
    let conflicts = detect_category_conflicts(transactions);

    match policy {
        CategoryConflictPolicy::Reject => {
            if let Some(conflict) = conflicts.into_iter().next() {
                return Err(conflict.into());
            }
        }
        CategoryConflictPolicy::FirstSeen => {
            for conflict in conflicts {
                warn!(
                    "Account '{}' keeps category {:?}; transaction {} recorded {:?}",
                    conflict.account_name,
                    conflict.first,
                    conflict.transaction_id,
                    conflict.conflicting
                );
            }
        }
    }

    Ok(())
}
