//! Display formatting shared by the counter and the activity list.

use chrono::{DateTime, Local, Utc};

/// Format an amount as US dollars with thousands separators and two decimals,
/// e.g. `1284.2` → `$1,284.20`, `-5` → `-$5.00`.
pub fn currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // "-0.00" is not a thing users want to see.
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Plain two-decimal amount without grouping, e.g. `$84.20`.
pub fn amount(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Calendar date in the local timezone, `M/D/YYYY`.
pub fn short_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
}

/// `1 entry`, `4 entries`.
pub fn entry_count(count: usize) -> String {
    if count == 1 {
        "1 entry".to_string()
    } else {
        format!("{count} entries")
    }
}

