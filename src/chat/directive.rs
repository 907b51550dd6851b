//! Search directives returned by the chat service
//!
//! A directive is free text such as `"shoes under 50"`. The whole text is
//! used as the search query; a price ceiling is pulled out heuristically
//! when the text contains `under <number>`.

use once_cell::sync::Lazy;
use regex::Regex;

static UNDER_PRICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bunder\s*(?:[$€£]|usd\s*)?\s*((?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?)")
        .expect("directive pattern is a valid regex")
});

/// Parsed form of a chat directive
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    /// Text to hand to the search endpoint (the trimmed directive)
    pub search_text: String,
    /// Text before the `under` clause, e.g. `shoes`
    pub subject: String,
    /// Price ceiling in USD, if an `under N` clause was found
    pub max_price: Option<f64>,
}

/// Parse a directive. Returns `None` for blank input.
pub fn parse_directive(text: &str) -> Option<Directive> {
    let search_text = text.trim();
    if search_text.is_empty() {
        return None;
    }

    let (subject, max_price) = match UNDER_PRICE.captures(search_text) {
        Some(caps) => {
            let whole = caps.get(0).map(|m| m.start()).unwrap_or(0);
            // Thousands separators: "1,500" is 1500
            let price = caps
                .get(1)
                .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok());
            (search_text[..whole].trim().to_string(), price)
        }
        None => (search_text.to_string(), None),
    };

    Some(Directive {
        search_text: search_text.to_string(),
        subject,
        max_price,
    })
}
