use crate::statements::StatementItem;
use serde::{Deserialize, Serialize};

pub const RETAINED_EARNINGS: &str = "Retained Earnings";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquityChangeItem {
    pub account_name: String,
    pub opening_balance: f64,
    pub additions: f64,
    pub net_income: f64,
    pub withdrawals: f64,
    pub closing_balance: f64,
}

/// Single-period roll-forward of the equity accounts.
///
/// There is no prior-period data to carry forward, so an account balance
/// above `opening_threshold` is presented as an opening balance of exactly
/// the threshold plus additions for the remainder. Smaller balances are
/// all additions. The period's net income gets its own retained earnings
/// row.
pub fn build_equity_changes(
    raw_equity: &[StatementItem],
    net_income: f64,
    opening_threshold: f64,
) -> Vec<EquityChangeItem> {
    let mut rows: Vec<EquityChangeItem> = raw_equity
        .iter()
        .map(|row| {
            let (opening_balance, additions) = if row.amount > opening_threshold {
                (opening_threshold, row.amount - opening_threshold)
            } else {
                (0.0, row.amount)
            };

            EquityChangeItem {
                account_name: row.label.clone(),
                opening_balance,
                additions,
                net_income: 0.0,
                withdrawals: 0.0,
                closing_balance: row.amount,
            }
        })
        .collect();

    rows.push(EquityChangeItem {
        account_name: RETAINED_EARNINGS.to_string(),
        opening_balance: 0.0,
        additions: 0.0,
        net_income,
        withdrawals: 0.0,
        closing_balance: net_income,
    });

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_above_threshold_is_split() {
        let rows = build_equity_changes(&[StatementItem::new("Common Stock", 80_000.0)], 0.0, 50_000.0);

        assert_eq!(rows[0].opening_balance, 50_000.0);
        assert_eq!(rows[0].additions, 30_000.0);
        assert_eq!(rows[0].closing_balance, 80_000.0);
        assert_eq!(rows[0].net_income, 0.0);
        assert_eq!(rows[0].withdrawals, 0.0);
    }

    #[test]
    fn test_balance_at_threshold_is_all_additions() {
        let rows = build_equity_changes(&[StatementItem::new("Common Stock", 50_000.0)], 0.0, 50_000.0);

        assert_eq!(rows[0].opening_balance, 0.0);
        assert_eq!(rows[0].additions, 50_000.0);
        assert_eq!(rows[0].closing_balance, 50_000.0);
    }

    #[test]
    fn test_retained_earnings_row_is_last() {
        let rows = build_equity_changes(
            &[
                StatementItem::new("Common Stock", 50_000.0),
                StatementItem::new("Owner Contributions", 5_000.0),
            ],
            10_000.0,
            50_000.0,
        );

        assert_eq!(rows.len(), 3);
        let retained = rows.last().unwrap();
        assert_eq!(retained.account_name, RETAINED_EARNINGS);
        assert_eq!(retained.opening_balance, 0.0);
        assert_eq!(retained.additions, 0.0);
        assert_eq!(retained.net_income, 10_000.0);
        assert_eq!(retained.closing_balance, 10_000.0);
    }

    #[test]
    fn test_closing_balances_sum_to_total_equity() {
        let raw = [
            StatementItem::new("Common Stock", 75_000.0),
            StatementItem::new("Drawings", -2_500.0),
        ];
        let rows = build_equity_changes(&raw, -1_200.0, 50_000.0);
        let closing: f64 = rows.iter().map(|r| r.closing_balance).sum();
        assert_eq!(closing, 75_000.0 - 2_500.0 - 1_200.0);

        // Negative balances never exceed the threshold.
        assert_eq!(rows[1].opening_balance, 0.0);
        assert_eq!(rows[1].additions, -2_500.0);
    }
}
