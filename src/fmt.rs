use colored::Colorize;

use crate::error::{AlcanciaError, Result};
use crate::models::Currency;

pub const MONTH_NAMES_ES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Spanish month name for a 1-12 month number.
pub fn month_name_es(month: u32) -> &'static str {
    MONTH_NAMES_ES[(month.clamp(1, 12) - 1) as usize]
}

/// Format minor units using es-AR conventions: `$ 1.234,56` / `US$ 1.234,56`.
pub fn money(cents: i64, currency: Currency) -> String {
    let negative = cents < 0;
    let abs = cents.unsigned_abs();
    let whole = abs / 100;
    let frac = abs % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let symbol = match currency {
        Currency::ARS => "$",
        Currency::USD => "US$",
    };
    if negative {
        format!("-{symbol} {grouped},{frac:02}")
    } else {
        format!("{symbol} {grouped},{frac:02}")
    }
}

/// Like [`money`], with the currency code appended for aggregated totals.
pub fn money_with_code(cents: i64, currency: Currency) -> String {
    format!("{} {}", money(cents, currency), currency.code())
}

/// Parse a user-entered amount ("1234.56", "1234,56", "1234" or the
/// displayed form "12.500,50") into non-negative minor units. A comma
/// marks the decimal separator; dots before it are grouping and are
/// stripped.
pub fn parse_amount(input: &str) -> Result<i64> {
    let err = || AlcanciaError::InvalidAmount(input.to_string());
    let s = input.trim();
    if s.is_empty() || s.starts_with('-') || s.starts_with('+') {
        return Err(err());
    }

    let normalized = if s.contains(',') {
        s.replace('.', "").replace(',', ".")
    } else {
        s.to_string()
    };
    let mut parts = normalized.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    let frac = parts.next().unwrap_or("");
    if whole.is_empty() && frac.is_empty() {
        return Err(err());
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(err());
    }

    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| err())?
    };
    let cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| err())? * 10,
        2 => frac.parse().map_err(|_| err())?,
        _ => return Err(err()),
    };
    whole
        .checked_mul(100)
        .and_then(|w| w.checked_add(cents))
        .ok_or_else(err)
}

/// Share of `part` in `total` as a percentage. Zero or negative totals
/// yield 0 instead of dividing by zero.
pub fn pct(part: i64, total: i64) -> f64 {
    if total <= 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

/// Render the restricted markdown subset the advisor may return:
/// `**bold**` becomes ANSI bold, line breaks are preserved, everything
/// else is passed through as plain text. No structural markup is ever
/// emitted.
pub fn render_markdown(text: &str, width: usize) -> String {
    let wrapped: Vec<String> = text
        .trim()
        .lines()
        .map(|line| textwrap::fill(line, width))
        .collect();
    let wrapped = wrapped.join("\n");

    let mut out = String::new();
    let mut bold = false;
    for chunk in wrapped.split("**") {
        if bold {
            out.push_str(&chunk.bold().to_string());
        } else {
            out.push_str(chunk);
        }
        bold = !bold;
    }
    out
}

/// First segment of a UUID, enough to address records from the CLI.
pub fn short_id(id: &str) -> &str {
    id.split('-').next().unwrap_or(id)
}
