//! Number, money and date formatting

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Currency;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Format a number for display.
///
/// Whole numbers are printed without decimals; anything else gets exactly
/// `decimals` fraction digits. The integer part is grouped with commas.
pub fn format_number(n: f64, decimals: usize) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    // -0.0 would otherwise print as "-0"
    let n = if n == 0.0 { 0.0 } else { n };

    let rendered = if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        format!("{:.*}", decimals, n)
    };
    group_thousands(&rendered)
}

fn group_thousands(rendered: &str) -> String {
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (digits, None),
    };

    let mut output = String::with_capacity(rendered.len() + int_part.len() / 3);
    output.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            output.push(',');
        }
        output.push(ch);
    }
    if let Some(frac) = frac_part {
        output.push('.');
        output.push_str(frac);
    }
    output
}

/// Format an amount with the currency symbol in its usual position
pub fn format_money(amount: f64, currency: Currency, decimals: usize) -> String {
    currency.attach(&format_number(amount, decimals))
}

/// Format a percentage with one decimal when it has a fraction
pub fn format_percentage(pct: f64) -> String {
    format!("{}%", format_number(pct, 1))
}

/// How dates are written in tables and detail views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateStyle {
    /// 1 January 2021
    #[default]
    Long,
    /// 1 Jan 2021
    Short,
    /// 1/1/2021
    Numeric,
    /// Monday 1 January 2021
    Weekday,
    /// Mon 1 Jan 2021
    ShortWeekday,
}

impl DateStyle {
    pub const ALL: &'static [DateStyle] = &[
        DateStyle::Long,
        DateStyle::Short,
        DateStyle::Numeric,
        DateStyle::Weekday,
        DateStyle::ShortWeekday,
    ];
}

impl fmt::Display for DateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Long => "long",
            Self::Short => "short",
            Self::Numeric => "numeric",
            Self::Weekday => "weekday",
            Self::ShortWeekday => "short-weekday",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for DateStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        DateStyle::ALL
            .iter()
            .copied()
            .find(|style| style.to_string() == wanted)
            .ok_or_else(|| {
                let names: Vec<String> = DateStyle::ALL.iter().map(|d| d.to_string()).collect();
                format!("Unknown date style '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Full English month name
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Full English weekday name
pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

fn abbreviated(name: &'static str) -> &'static str {
    &name[..3]
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Format a date in the given style
pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    let (day, year) = (date.day(), date.year());
    match style {
        DateStyle::Long => format!("{} {} {}", day, month_name(date), year),
        DateStyle::Short => format!("{} {} {}", day, abbreviated(month_name(date)), year),
        DateStyle::Numeric => format!("{}/{}/{}", day, date.month(), year),
        DateStyle::Weekday => {
            format!("{} {} {} {}", day_name(date), day, month_name(date), year)
        }
        DateStyle::ShortWeekday => format!(
            "{} {} {} {}",
            abbreviated(day_name(date)),
            day,
            abbreviated(month_name(date)),
            year
        ),
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
