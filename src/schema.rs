use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum AccountCategory {
    #[schemars(
        description = "Resources owned by the business: cash, receivables, equipment (Balance Sheet, debit-normal)"
    )]
    Asset,

    #[schemars(
        description = "Obligations owed to creditors: payables, loans, accrued expenses (Balance Sheet, credit-normal)"
    )]
    Liability,

    #[schemars(
        description = "Owner's residual interest: share capital, contributed capital (Balance Sheet, credit-normal)"
    )]
    Equity,

    #[schemars(description = "Income from sales of goods or services (Income Statement, credit-normal)")]
    Revenue,

    #[schemars(description = "Costs of running the business: rent, salaries, utilities (Income Statement, debit-normal)")]
    Expense,
}

impl AccountCategory {
    /// True for categories whose balance grows on the debit side.
    pub fn is_debit_normal(&self) -> bool {
        matches!(self, Self::Asset | Self::Expense)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum EntryType {
    Debit,
    Credit,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Transaction {
    #[schemars(description = "Unique identifier of the ledger line")]
    pub id: String,

    #[schemars(description = "Posting date in YYYY-MM-DD format")]
    pub date: NaiveDate,

    pub description: String,

    #[schemars(description = "The account name as it appears in the ledger (e.g., 'Cash', 'Sales Revenue')")]
    pub account_name: String,

    pub category: AccountCategory,

    #[schemars(
        description = "Non-negative magnitude of the entry. The sign is implied by the entry type and the account category."
    )]
    pub amount: f64,

    #[serde(rename = "type")]
    #[schemars(description = "Which side of the account this line posts to")]
    pub entry_type: EntryType,
}

impl Transaction {
    /// Amount seen from the account's own side: debits add, credits subtract.
    pub fn signed_amount(&self) -> f64 {
        match self.entry_type {
            EntryType::Debit => self.amount,
            EntryType::Credit => -self.amount,
        }
    }

    pub fn is_debit(&self) -> bool {
        self.entry_type == EntryType::Debit
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(Vec<Transaction>)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

/// One line of an external bank statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct BankStatementItem {
    #[schemars(description = "Identifier unique across the statement")]
    pub id: String,

    pub date: NaiveDate,

    pub description: String,

    #[schemars(description = "Signed amount: positive for deposits, negative for withdrawals")]
    pub amount: f64,
}
