use chrono::{Datelike, NaiveDate};

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// 0-based calendar month index of a date. The year is ignored.
pub fn month_index(date: NaiveDate) -> usize {
    date.month0() as usize
}

pub fn approx_eq(left: f64, right: f64, tolerance: f64) -> bool {
    (left - right).abs() <= tolerance
}
