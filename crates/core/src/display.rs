//! Display formatting for prices and rates.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

/// Format a money amount for display.
///
/// Won amounts are written as a bare number followed by `원`; pound, dollar and euro
/// amounts use their symbol; anything else falls back to the ISO code.
pub fn format_price(money: &Money<'_, Currency>) -> String {
    let currency = money.currency();
    let minor_units = money.to_minor_units();

    if currency.iso_alpha_code == "KRW" {
        return format!("{minor_units}원");
    }

    let sign = if minor_units < 0 { "-" } else { "" };
    let amount = major_units(minor_units.unsigned_abs(), currency.exponent);
    let symbol = match currency.iso_alpha_code {
        "GBP" => "£",
        "USD" => "$",
        "EUR" => "€",
        _ => "",
    };

    if symbol.is_empty() {
        format!("{sign}{amount} {}", currency.iso_alpha_code)
    } else {
        format!("{sign}{symbol}{amount}")
    }
}

fn major_units(abs_minor: u64, exponent: u32) -> String {
    if exponent == 0 {
        return abs_minor.to_string();
    }

    let divisor = 10_u64.saturating_pow(exponent);
    let width = usize::try_from(exponent).unwrap_or(2);

    format!("{}.{:0width$}", abs_minor / divisor, abs_minor % divisor)
}

/// Format a tier rate fraction (e.g. `0.1`) as a whole-number percentage (e.g. `10%`).
pub fn format_rate(rate: Decimal) -> String {
    let points = (rate * Decimal::ONE_HUNDRED).round_dp(2).normalize();

    format!("{points}%")
}

/// Format a percentage (e.g. 10%) for display.
pub fn format_percentage(percent: &Percentage) -> String {
    format_rate((*percent) * Decimal::ONE)
}
