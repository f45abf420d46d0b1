use crate::config::BudgetConfig;
use crate::statements::IncomeStatement;
use serde::{Deserialize, Serialize};

/// Actual versus budgeted revenue and expenses. Percentages are left to
/// the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetVariance {
    pub revenue_actual: f64,
    pub revenue_budget: f64,
    pub expense_actual: f64,
    pub expense_budget: f64,
}

impl BudgetVariance {
    pub fn build(income_statement: &IncomeStatement, budget: &BudgetConfig) -> Self {
        Self {
            revenue_actual: income_statement.total_revenue,
            revenue_budget: budget.revenue_budget,
            expense_actual: income_statement.total_expenses,
            expense_budget: budget.expense_budget,
        }
    }
}
