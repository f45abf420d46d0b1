use chrono::NaiveDate;
use financial_report_builder::{
    AccountCategory, BankStatementItem, EntryType, Ledger, ReconStatus, ReconSummary,
    ReportConfig, Transaction,
};

fn line(
    id: &str,
    date: NaiveDate,
    description: &str,
    account: &str,
    category: AccountCategory,
    amount: f64,
    entry_type: EntryType,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        date,
        description: description.to_string(),
        account_name: account.to_string(),
        category,
        amount,
        entry_type,
    }
}

fn main() -> anyhow::Result<()> {
    use AccountCategory::*;
    use EntryType::*;

    let oct = |day| NaiveDate::from_ymd_opt(2023, 10, day).unwrap();

    let transactions = vec![
        line("1", oct(1), "Share issue", "Cash", Asset, 50_000.0, Debit),
        line("2", oct(1), "Share issue", "Common Stock", Equity, 50_000.0, Credit),
        line("3", oct(5), "October rent", "Rent Expense", Expense, 2_000.0, Debit),
        line("4", oct(5), "October rent", "Cash", Asset, 2_000.0, Credit),
        line("5", oct(12), "Client payment", "Cash", Asset, 12_000.0, Debit),
        line("6", oct(12), "Client payment", "Sales Revenue", Revenue, 12_000.0, Credit),
    ];

    let ledger = Ledger::new(transactions, ReportConfig::default())?;
    let report = ledger.statements();

    println!("Income statement");
    for row in report.income_statement().rows() {
        let marker = if row.is_total { "=" } else { " " };
        println!("{} {:<30} {:>12.2}", marker, row.label, row.amount);
    }

    println!("\nBalance sheet");
    for row in report.balance_sheet().rows() {
        let marker = if row.is_total { "=" } else { " " };
        println!("{} {:<30} {:>12.2}", marker, row.label, row.amount);
    }

    println!("\nEquity roll-forward");
    for row in report.equity_changes() {
        println!(
            "  {:<20} open {:>10.2} add {:>10.2} NI {:>10.2} close {:>10.2}",
            row.account_name, row.opening_balance, row.additions, row.net_income, row.closing_balance
        );
    }

    println!("\nNotes");
    for note in report.notes() {
        println!("  {}. {} ({} rows)", note.number, note.title, note.data.len());
    }

    let statement = vec![
        BankStatementItem {
            id: "st1".to_string(),
            date: oct(1),
            description: "Deposit".to_string(),
            amount: 50_000.0,
        },
        BankStatementItem {
            id: "st2".to_string(),
            date: oct(5),
            description: "Rent".to_string(),
            amount: -2_000.0,
        },
        BankStatementItem {
            id: "st5".to_string(),
            date: oct(22),
            description: "Service fee".to_string(),
            amount: -25.0,
        },
    ];

    let matches = ledger.reconcile("Cash", &statement)?;
    println!("\nReconciliation: {:?}", ReconSummary::from_matches(&matches));
    for m in matches.iter().filter(|m| m.status != ReconStatus::Matched) {
        let what = m
            .book_entry
            .as_ref()
            .map(|b| b.description.clone())
            .or_else(|| m.statement_entry.as_ref().map(|s| s.description.clone()))
            .unwrap_or_default();
        println!("  {:<22} {}", m.status.to_string(), what);
    }

    println!("\nTrend");
    for month in ledger.trend().iter().filter(|m| m.revenue != 0.0 || m.expense != 0.0) {
        println!(
            "  {} revenue {:>10.2} expense {:>10.2} profit {:>10.2}",
            month.label, month.revenue, month.expense, month.profit
        );
    }

    Ok(())
}
