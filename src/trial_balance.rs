use crate::schema::{AccountCategory, EntryType, Transaction};
use crate::utils::approx_eq;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialBalanceItem {
    pub account_name: String,
    /// Category of the first transaction seen for this account.
    pub category: AccountCategory,
    pub debit: f64,
    pub credit: f64,
}

impl TrialBalanceItem {
    /// Debit minus credit.
    pub fn balance(&self) -> f64 {
        self.debit - self.credit
    }
}

/// Per-account debit/credit totals, in first-seen account order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrialBalance {
    items: Vec<TrialBalanceItem>,
}

impl TrialBalance {
    pub fn build(transactions: &[Transaction]) -> Self {
        let mut items: Vec<TrialBalanceItem> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for tx in transactions {
            let idx = *positions.entry(tx.account_name.as_str()).or_insert_with(|| {
                items.push(TrialBalanceItem {
                    account_name: tx.account_name.clone(),
                    category: tx.category,
                    debit: 0.0,
                    credit: 0.0,
                });
                items.len() - 1
            });

            let item = &mut items[idx];
            match tx.entry_type {
                EntryType::Debit => item.debit += tx.amount,
                EntryType::Credit => item.credit += tx.amount,
            }
        }

        Self { items }
    }

    pub fn items(&self) -> &[TrialBalanceItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, account_name: &str) -> Option<&TrialBalanceItem> {
        self.items.iter().find(|i| i.account_name == account_name)
    }

    pub fn by_category(
        &self,
        category: AccountCategory,
    ) -> impl Iterator<Item = &TrialBalanceItem> + '_ {
        self.items.iter().filter(move |i| i.category == category)
    }

    pub fn total_debits(&self) -> f64 {
        self.items.iter().map(|i| i.debit).sum()
    }

    pub fn total_credits(&self) -> f64 {
        self.items.iter().map(|i| i.credit).sum()
    }

    /// Whether total debits equal total credits. Only holds for ledgers
    /// recorded as debit/credit pairs.
    pub fn is_balanced(&self, tolerance: f64) -> bool {
        approx_eq(self.total_debits(), self.total_credits(), tolerance)
    }
}

pub fn build_trial_balance(transactions: &[Transaction]) -> TrialBalance {
    TrialBalance::build(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
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
            date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            description: format!("{} entry", account),
            account_name: account.to_string(),
            category,
            amount,
            entry_type,
        }
    }

    #[test]
    fn test_accumulates_debits_and_credits_per_account() {
        let transactions = vec![
            tx("1", "Cash", AccountCategory::Asset, 50_000.0, EntryType::Debit),
            tx("2", "Common Stock", AccountCategory::Equity, 50_000.0, EntryType::Credit),
            tx("3", "Rent Expense", AccountCategory::Expense, 2_000.0, EntryType::Debit),
            tx("4", "Cash", AccountCategory::Asset, 2_000.0, EntryType::Credit),
        ];

        let tb = build_trial_balance(&transactions);

        assert_eq!(tb.len(), 3);
        let cash = tb.get("Cash").unwrap();
        assert_eq!(cash.debit, 50_000.0);
        assert_eq!(cash.credit, 2_000.0);
        assert_eq!(cash.balance(), 48_000.0);
        assert!(tb.is_balanced(0.001));
    }

    #[test]
    fn test_first_seen_order() {
        let transactions = vec![
            tx("1", "Sales Revenue", AccountCategory::Revenue, 10.0, EntryType::Credit),
            tx("2", "Cash", AccountCategory::Asset, 10.0, EntryType::Debit),
            tx("3", "Sales Revenue", AccountCategory::Revenue, 5.0, EntryType::Credit),
            tx("4", "Accounts Payable", AccountCategory::Liability, 1.0, EntryType::Credit),
        ];

        let tb = build_trial_balance(&transactions);
        let names: Vec<&str> = tb
            .items()
            .iter()
            .map(|i| i.account_name.as_str())
            .collect();

        assert_eq!(names, vec!["Sales Revenue", "Cash", "Accounts Payable"]);
    }

    #[test]
    fn test_conflicting_category_resolves_to_first_seen() {
        let transactions = vec![
            tx("1", "Suspense", AccountCategory::Liability, 100.0, EntryType::Credit),
            tx("2", "Suspense", AccountCategory::Asset, 40.0, EntryType::Debit),
        ];

        let tb = build_trial_balance(&transactions);
        let suspense = tb.get("Suspense").unwrap();
        assert_eq!(suspense.category, AccountCategory::Liability);
        assert_eq!(suspense.debit, 40.0);
        assert_eq!(suspense.credit, 100.0);
    }

    #[test]
    fn test_totals_independent_of_input_order() {
        let mut transactions = vec![
            tx("1", "Cash", AccountCategory::Asset, 12_000.0, EntryType::Debit),
            tx("2", "Sales Revenue", AccountCategory::Revenue, 12_000.0, EntryType::Credit),
            tx("3", "Cash", AccountCategory::Asset, 700.0, EntryType::Credit),
            tx("4", "Utilities Expense", AccountCategory::Expense, 700.0, EntryType::Debit),
        ];
        let forward = build_trial_balance(&transactions);
        transactions.reverse();
        let backward = build_trial_balance(&transactions);

        for item in forward.items() {
            let other = backward.get(&item.account_name).unwrap();
            assert_eq!(item.debit, other.debit);
            assert_eq!(item.credit, other.credit);
        }
    }

    #[test]
    fn test_unpaired_entries_are_not_balanced() {
        let transactions = vec![tx("1", "Cash", AccountCategory::Asset, 100.0, EntryType::Debit)];
        let tb = build_trial_balance(&transactions);
        assert!(!tb.is_balanced(0.001));
        assert_eq!(tb.by_category(AccountCategory::Asset).count(), 1);
        assert_eq!(tb.by_category(AccountCategory::Revenue).count(), 0);
    }

    #[test]
    fn test_empty_ledger() {
        let tb = build_trial_balance(&[]);
        assert!(tb.is_empty());
        assert_eq!(tb.total_debits(), 0.0);
        assert!(tb.is_balanced(0.0));
    }
}
