use crate::decimal::Money;

/// display symbol for a currency code, the code itself when unknown
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "INR" => "₹",
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "AUD" => "A$",
        "CAD" => "C$",
        other => other,
    }
}

/// symbol followed by the amount; whole amounts drop the decimals
pub fn format_money(amount: Money, code: &str) -> String {
    let dp = if amount.is_whole() { 0 } else { 2 };
    format!("{}{}", currency_symbol(code), amount.to_fixed(dp))
}
