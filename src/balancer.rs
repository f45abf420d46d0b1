use crate::error::{FinancialReportError, Result};
use crate::statements::BalanceSheet;
use crate::utils::approx_eq;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub assets: f64,
    pub liabilities: f64,
    pub equity: f64,
    /// Assets minus liabilities and equity.
    pub difference: f64,
}

impl VerificationResult {
    pub fn from_balance_sheet(sheet: &BalanceSheet) -> Self {
        Self {
            assets: sheet.total_assets,
            liabilities: sheet.total_liabilities,
            equity: sheet.total_equity,
            difference: sheet.total_assets - sheet.total_liabilities_and_equity(),
        }
    }

    pub fn is_balanced(&self, tolerance: f64) -> bool {
        approx_eq(self.difference, 0.0, tolerance)
    }
}

/// Checks Assets = Liabilities + Equity, the earnings row included.
pub fn verify_accounting_equation(sheet: &BalanceSheet, tolerance: f64) -> Result<()> {
    let result = VerificationResult::from_balance_sheet(sheet);

    if !result.is_balanced(tolerance) {
        return Err(FinancialReportError::AccountingEquationViolation {
            assets: result.assets,
            liabilities: result.liabilities,
            equity: result.equity,
            difference: result.difference,
        });
    }

    Ok(())
}
