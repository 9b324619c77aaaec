/// Date formatting for tables and detail pages
///
/// Dates are shown the Indonesian way: "01 Mei 2024", "01 Mei 2024 08:00".
use chrono::{DateTime, Datelike, NaiveDate, Utc};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

fn month_name(month: u32) -> &'static str {
    MONTHS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("?")
}

/// "2024-05-01" -> "01 Mei 2024"
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02} {} {}", date.day(), month_name(date.month()), date.year())
}

/// Optional end date; open-ended contracts show a dash
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".to_string())
}

/// "2024-05-01T08:05:00Z" -> "01 Mei 2024 08:05" (UTC)
pub fn format_datetime(at: &DateTime<Utc>) -> String {
    format!("{} {}", format_date(at.date_naive()), at.format("%H:%M"))
}
