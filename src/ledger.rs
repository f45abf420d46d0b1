use crate::config::ReportConfig;
use crate::error::Result;
use crate::ingestion::validate_statement_ids;
use crate::reconciliation::{reconcile_with_strategy, select_book_entries, ReconMatch};
use crate::schema::{BankStatementItem, Transaction};
use crate::trend::{build_monthly_trend, MonthlyTrend};
use crate::{FinancialReportProcessor, FinancialStatements};
use log::info;
use std::sync::Arc;

/// In-memory ledger with its current report snapshot.
///
/// The transaction list only changes by appending or wholesale replacement,
/// and each change recomputes the snapshot. When recomputation fails the
/// previous list and snapshot are kept.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    config: ReportConfig,
    statements: Arc<FinancialStatements>,
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>, config: ReportConfig) -> Result<Self> {
        let statements = FinancialReportProcessor::process(&transactions, &config)?;
        Ok(Self {
            transactions,
            config,
            statements: Arc::new(statements),
        })
    }

    pub fn append<I>(&mut self, transactions: I) -> Result<()>
    where
        I: IntoIterator<Item = Transaction>,
    {
        let mut next = self.transactions.clone();
        let before = next.len();
        next.extend(transactions);
        info!("Appending {} transactions to ledger", next.len() - before);
        self.replace(next)
    }

    pub fn replace(&mut self, transactions: Vec<Transaction>) -> Result<()> {
        let statements = FinancialReportProcessor::process(&transactions, &self.config)?;
        self.transactions = transactions;
        self.statements = Arc::new(statements);
        Ok(())
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn statements(&self) -> &FinancialStatements {
        &self.statements
    }

    /// Shared handle to the current snapshot; stays valid after later updates.
    pub fn snapshot(&self) -> Arc<FinancialStatements> {
        Arc::clone(&self.statements)
    }

    pub fn trend(&self) -> Vec<MonthlyTrend> {
        build_monthly_trend(&self.transactions)
    }

    /// Reconciles the entries of one account against a bank statement,
    /// using the configured match strategy.
    pub fn reconcile(
        &self,
        account_name: &str,
        statement: &[BankStatementItem],
    ) -> Result<Vec<ReconMatch>> {
        validate_statement_ids(statement)?;
        let book = select_book_entries(&self.transactions, account_name);
        Ok(reconcile_with_strategy(
            &book,
            statement,
            self.config.reconciliation.strategy,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategoryConflictPolicy;
    use crate::error::FinancialReportError;
    use crate::reconciliation::ReconStatus;
    use crate::schema::{AccountCategory, EntryType};
    use chrono::NaiveDate;

    fn tx(
        id: &str,
        account: &str,
        category: AccountCategory,
        amount: f64,
        entry_type: EntryType,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 5).unwrap(),
            description: format!("{} entry", account),
            account_name: account.to_string(),
            category,
            amount,
            entry_type,
        }
    }

    fn opening() -> Vec<Transaction> {
        vec![
            tx("1", "Cash", AccountCategory::Asset, 50_000.0, EntryType::Debit),
            tx("2", "Common Stock", AccountCategory::Equity, 50_000.0, EntryType::Credit),
        ]
    }

    #[test]
    fn test_append_recomputes_snapshot() {
        let mut ledger = Ledger::new(opening(), ReportConfig::default()).unwrap();
        let before = ledger.snapshot();
        assert_eq!(before.net_income(), 0.0);

        ledger
            .append(vec![
                tx("3", "Rent Expense", AccountCategory::Expense, 2_000.0, EntryType::Debit),
                tx("4", "Cash", AccountCategory::Asset, 2_000.0, EntryType::Credit),
            ])
            .unwrap();

        assert_eq!(ledger.transactions().len(), 4);
        assert_eq!(ledger.statements().net_income(), -2_000.0);
        // The old snapshot is untouched.
        assert_eq!(before.net_income(), 0.0);
        assert_eq!(before.balance_sheet().total_assets, 50_000.0);
    }

    #[test]
    fn test_replace_swaps_whole_list() {
        let mut ledger = Ledger::new(opening(), ReportConfig::default()).unwrap();
        ledger
            .replace(vec![tx("9", "Bank", AccountCategory::Asset, 10.0, EntryType::Debit)])
            .unwrap();

        assert_eq!(ledger.transactions().len(), 1);
        assert_eq!(ledger.statements().balance_sheet().total_assets, 10.0);
    }

    #[test]
    fn test_failed_update_keeps_previous_state() {
        let config = ReportConfig {
            category_policy: CategoryConflictPolicy::Reject,
            ..ReportConfig::default()
        };
        let mut ledger = Ledger::new(opening(), config).unwrap();

        let err = ledger
            .append(vec![tx("3", "Cash", AccountCategory::Revenue, 1.0, EntryType::Credit)])
            .unwrap_err();
        assert!(matches!(err, FinancialReportError::ConflictingCategory { .. }));
        assert_eq!(ledger.transactions().len(), 2);
        assert_eq!(ledger.statements().balance_sheet().total_assets, 50_000.0);
    }

    #[test]
    fn test_reconcile_selects_single_account() {
        let mut transactions = opening();
        transactions.push(tx("3", "Petty Cash", AccountCategory::Asset, 50_000.0, EntryType::Debit));
        let ledger = Ledger::new(transactions, ReportConfig::default()).unwrap();

        let statement = vec![BankStatementItem {
            id: "st1".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 5).unwrap(),
            description: "Deposit".to_string(),
            amount: 50_000.0,
        }];

        let matches = ledger.reconcile("Cash", &statement).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].status, ReconStatus::Matched);
        assert_eq!(matches[0].book_entry.as_ref().unwrap().id, "1");
    }

    #[test]
    fn test_reconcile_rejects_duplicate_statement_ids() {
        let ledger = Ledger::new(opening(), ReportConfig::default()).unwrap();
        let line = BankStatementItem {
            id: "st1".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 5).unwrap(),
            description: String::new(),
            amount: 1.0,
        };

        let err = ledger.reconcile("Cash", &[line.clone(), line]).unwrap_err();
        assert!(matches!(err, FinancialReportError::DuplicateStatementId(_)));
    }

    #[test]
    fn test_trend_reads_current_list() {
        let mut ledger = Ledger::new(opening(), ReportConfig::default()).unwrap();
        ledger
            .append(vec![tx("3", "Sales Revenue", AccountCategory::Revenue, 400.0, EntryType::Credit)])
            .unwrap();

        let trend = ledger.trend();
        assert_eq!(trend.len(), 12);
        assert_eq!(trend[9].revenue, 400.0);
    }
}
