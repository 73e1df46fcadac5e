//! Argentine-peso presentation helpers shared by the calculator and the
//! pricing copy. Output follows es-AR conventions: `.` groups thousands, `,`
//! separates decimals and the `$` sign sits flush against the amount.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Prefix the amount with `ARS `.
    pub show_currency_code: bool,
    /// Appended verbatim, e.g. `/mes`.
    pub suffix: String,
    /// Always print two decimals.
    pub show_decimals: bool,
    /// Abbreviate thousands and millions (`$15K`, `$1,5M`).
    pub compact: bool,
}

impl CurrencyFormat {
    pub fn with_suffix(suffix: &str) -> Self {
        Self {
            suffix: suffix.to_string(),
            ..Self::default()
        }
    }

    pub fn compact() -> Self {
        Self {
            compact: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanPeriod {
    Month,
    OneTime,
    Year,
    Quarter,
}

impl PlanPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanPeriod::Month => "mes",
            PlanPeriod::OneTime => "único",
            PlanPeriod::Year => "año",
            PlanPeriod::Quarter => "trimestre",
        }
    }
}

/// Half-up rounding, so `-2.5` becomes `-2` and `2.5` becomes `3`.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub fn format_currency(amount: f64, options: &CurrencyFormat) -> String {
    let body = if options.compact && amount >= 1_000_000.0 {
        format!("${}M", compact_figure(amount / 1_000_000.0))
    } else if options.compact && amount >= 1000.0 {
        format!("${}K", compact_figure(amount / 1000.0))
    } else {
        let decimals = if options.show_decimals { 2 } else { 0 };
        let digits = format_fixed(amount.abs(), decimals);
        if amount < 0.0 && digits.chars().any(|c| c.is_ascii_digit() && c != '0') {
            format!("-${digits}")
        } else {
            format!("${digits}")
        }
    };

    let mut formatted = if options.show_currency_code {
        format!("ARS {body}")
    } else {
        body
    };
    formatted.push_str(&options.suffix);
    formatted
}

/// `$15.000 pago único` for one-off plans, `$18.000/mes` for the rest.
pub fn format_plan_price(amount: f64, period: PlanPeriod) -> String {
    match period {
        PlanPeriod::OneTime => format!("{} pago único", format_currency(amount, &CurrencyFormat::default())),
        other => format_currency(amount, &CurrencyFormat::with_suffix(&format!("/{}", other.as_str()))),
    }
}

/// Empty when there is nothing saved.
pub fn format_savings(cost_without: f64, cost_with: f64) -> String {
    let savings = cost_without - cost_with;
    if savings <= 0.0 {
        return String::new();
    }
    format!("Ahorrás {}", format_currency(savings, &CurrencyFormat::with_suffix("/mes")))
}

pub fn format_daily_cost(monthly_amount: f64) -> String {
    let daily = round_half_up(monthly_amount / 30.0);
    format_currency(daily, &CurrencyFormat::with_suffix("/día"))
}

pub fn format_value_comparison(total_amount: f64, months: u32) -> String {
    let per_month = round_half_up(total_amount / f64::from(months.max(1)));
    format!("Solo {}", format_currency(per_month, &CurrencyFormat::with_suffix("/mes")))
}

/// Reads user-typed amounts such as `$15.000` or `18.000,50`. Returns 0 when
/// nothing numeric is found.
pub fn parse_currency(value: &str) -> f64 {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();
    let normalized = cleaned.replacen(',', ".", 1);

    let mut seen_point = false;
    let prefix: String = normalized
        .chars()
        .take_while(|c| {
            if *c == '.' && !seen_point {
                seen_point = true;
                true
            } else {
                c.is_ascii_digit()
            }
        })
        .collect();

    prefix.parse().unwrap_or(0.0)
}

/// Grouped number with up to three decimals, trailing zeros trimmed.
pub fn format_number(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.3}", (value.abs() * 1000.0).round() / 1000.0);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let grouped = group_thousands(int_part);
    if frac.is_empty() {
        if grouped == "0" {
            return grouped;
        }
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{frac}")
    }
}

fn format_fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    let fixed = format!("{rounded:.decimals$}");
    match fixed.split_once('.') {
        Some((int_part, frac)) => format!("{},{frac}", group_thousands(int_part)),
        None => group_thousands(&fixed),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

fn compact_figure(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let rounded = (value * 10.0).round() / 10.0;
        format!("{rounded:.1}").replace('.', ",")
    }
}
