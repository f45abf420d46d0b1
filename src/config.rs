use crate::error::{FinancialReportError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_EQUITY_OPENING_THRESHOLD: f64 = 50_000.0;
pub const DEFAULT_REVENUE_BUDGET: f64 = 15_000.0;
pub const DEFAULT_EXPENSE_BUDGET: f64 = 5_000.0;

/// Everything the report engine needs besides the transactions themselves.
///
/// All fields have defaults, so `{}` is a valid JSON configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct ReportConfig {
    #[schemars(
        description = "Substrings that identify cash accounts for the cash flow breakdown and the cash note"
    )]
    pub cash_accounts: CashAccountMatcher,

    pub budget: BudgetConfig,

    #[schemars(
        description = "Equity balances above this amount are split into an opening balance equal to the threshold plus additions"
    )]
    pub equity_opening_threshold: f64,

    pub notes: NotesConfig,

    #[schemars(description = "What to do when one account name appears with several categories")]
    pub category_policy: CategoryConflictPolicy,

    pub reconciliation: ReconciliationConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            cash_accounts: CashAccountMatcher::default(),
            budget: BudgetConfig::default(),
            equity_opening_threshold: DEFAULT_EQUITY_OPENING_THRESHOLD,
            notes: NotesConfig::default(),
            category_policy: CategoryConflictPolicy::default(),
            reconciliation: ReconciliationConfig::default(),
        }
    }
}

impl ReportConfig {
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: ReportConfig = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cash_accounts.patterns.is_empty() {
            return Err(FinancialReportError::InvalidConfig(
                "at least one cash account pattern is required".to_string(),
            ));
        }
        if self.cash_accounts.patterns.iter().any(|p| p.is_empty()) {
            return Err(FinancialReportError::InvalidConfig(
                "cash account patterns must not be empty strings".to_string(),
            ));
        }

        validate_amount("budget.revenue_budget", self.budget.revenue_budget)?;
        validate_amount("budget.expense_budget", self.budget.expense_budget)?;
        validate_amount("equity_opening_threshold", self.equity_opening_threshold)?;

        if let MatchStrategy::AmountTolerance { tolerance } = self.reconciliation.strategy {
            validate_amount("reconciliation.strategy.tolerance", tolerance)?;
        }

        Ok(())
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ReportConfig)
    }

    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

fn validate_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FinancialReportError::InvalidConfig(format!(
            "{} must be a finite, non-negative number (got {})",
            field, value
        )));
    }
    Ok(())
}

/// Case-sensitive substring matcher for cash account names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct CashAccountMatcher {
    pub patterns: Vec<String>,
}

impl Default for CashAccountMatcher {
    fn default() -> Self {
        Self {
            patterns: vec![
                "Cash".to_string(),
                "Bank".to_string(),
                "Petty Cash".to_string(),
            ],
        }
    }
}

impl CashAccountMatcher {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, account_name: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| account_name.contains(pattern.as_str()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct BudgetConfig {
    pub revenue_budget: f64,
    pub expense_budget: f64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            revenue_budget: DEFAULT_REVENUE_BUDGET,
            expense_budget: DEFAULT_EXPENSE_BUDGET,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct NoteText {
    pub title: String,
    pub body: String,
}

impl NoteText {
    fn new(title: &str, body: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
        }
    }
}

/// Titles and bodies of the four fixed notes. Only the text is configurable;
/// numbering and the attached data are not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct NotesConfig {
    pub basis_of_preparation: NoteText,
    pub revenue_recognition: NoteText,
    pub cash_and_equivalents: NoteText,
    pub property_and_equipment: NoteText,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            basis_of_preparation: NoteText::new(
                "Basis of Preparation",
                "These financial statements have been prepared on an accrual basis from the general ledger for the current reporting period.",
            ),
            revenue_recognition: NoteText::new(
                "Revenue Recognition",
                "Revenue is recognised when goods are delivered or services are rendered to the customer.",
            ),
            cash_and_equivalents: NoteText::new(
                "Cash and Cash Equivalents",
                "Cash and cash equivalents comprise cash on hand and balances held with banks.",
            ),
            property_and_equipment: NoteText::new(
                "Property, Plant and Equipment",
                "Non-cash assets are stated at cost as recorded in the ledger.",
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CategoryConflictPolicy {
    #[schemars(description = "Keep the category of the first transaction seen for the account and log a warning")]
    #[default]
    FirstSeen,

    #[schemars(description = "Refuse to build reports when an account carries more than one category")]
    Reject,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct ReconciliationConfig {
    pub strategy: MatchStrategy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum MatchStrategy {
    #[schemars(description = "Match only on identical date and identical signed amount")]
    #[default]
    Exact,

    #[schemars(
        description = "After exact matching, pair leftover entries on the same date whose amounts differ by at most `tolerance`, reported as amount_mismatch"
    )]
    AmountTolerance { tolerance: f64 },
}
