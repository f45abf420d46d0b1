use crate::schema::AccountCategory;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinancialReportError {
    #[error("Account '{account}' is recorded as {first:?} but transaction {transaction_id} uses {conflicting:?}")]
    ConflictingCategory {
        account: String,
        transaction_id: String,
        first: AccountCategory,
        conflicting: AccountCategory,
    },

    #[error("Duplicate bank statement id: {0}")]
    DuplicateStatementId(String),

    #[error("Duplicate transaction id: {0}")]
    DuplicateTransactionId(String),

    #[error("Invalid amount {amount} on transaction {transaction_id}: must be finite and non-negative")]
    InvalidAmount { transaction_id: String, amount: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Accounting equation violation: Assets ({assets}) != Liabilities ({liabilities}) + Equity ({equity}), difference {difference}")]
    AccountingEquationViolation {
        assets: f64,
        liabilities: f64,
        equity: f64,
        difference: f64,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FinancialReportError>;
