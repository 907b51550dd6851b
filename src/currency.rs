//! Currency conversion to USD
//!
//! One process-wide rate table, built on first use and never mutated.
//! Rates are fixed-point multipliers in ten-thousandths of a dollar.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Scale of the fixed-point rates in `RATES`
const RATE_SCALE: f64 = 10_000.0;

static RATES: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("QAR", 2_740),  // Qatari Riyal
        ("KWD", 32_415), // Kuwaiti Dinar
        ("OMR", 26_000), // Omani Rial
        ("AED", 2_723),  // UAE Dirham
        ("SAR", 2_666),  // Saudi Riyal
        ("BHD", 26_596), // Bahraini Dinar
        ("USD", 10_000), // US Dollar
    ])
});

/// Fixed-point rate for a currency code, if known
fn scaled_rate(currency: &str) -> Option<u32> {
    RATES.get(currency).copied()
}

/// Convert `price` denominated in `currency` to USD
///
/// Unknown codes pass the price through unchanged.
pub fn convert_to_usd(price: f64, currency: &str) -> f64 {
    match scaled_rate(currency) {
        Some(rate) => price * f64::from(rate) / RATE_SCALE,
        None => price,
    }
}

/// Display form used by the product list, e.g. `USD 27.23`
pub fn format_usd(amount: f64) -> String {
    format!("USD {:.2}", amount)
}
