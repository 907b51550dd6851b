// Panel drafts
// Local, uncommitted input of the search bar and the filters panel

use crate::catalog::models::{is_known_category, is_known_size};
use crate::catalog::FilterSet;

/// Text typed in the search bar; submitted only on click or Enter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchDraft {
    /// Text in the search box
    pub query: String,
}

/// Filters panel draft
///
/// Prices are kept as typed so a blank box stays blank. Nothing here reaches
/// the canonical filter set until the panel's Apply button is pressed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterDraft {
    /// Min price box, as typed
    pub price_min: String,
    /// Max price box, as typed
    pub price_max: String,
    /// Selected category; `None` is "All Categories"
    pub category: Option<String>,
    /// Selected size; `None` is "All Sizes"
    pub size: Option<String>,
}

impl FilterDraft {
    /// Convert to a filter set
    ///
    /// Blank or unparsable prices mean "no constraint", as does a category or
    /// size outside the known lists.
    pub fn to_filter_set(&self) -> FilterSet {
        FilterSet {
            price_min: parse_price(&self.price_min).ok().flatten(),
            price_max: parse_price(&self.price_max).ok().flatten(),
            category: self.category.clone().filter(|c| is_known_category(c)),
            size: self.size.clone().filter(|s| is_known_size(s)),
        }
    }

    /// Whether the min price box holds text that is not a number
    pub fn price_min_invalid(&self) -> bool {
        parse_price(&self.price_min).is_err()
    }

    /// Whether the max price box holds text that is not a number
    pub fn price_max_invalid(&self) -> bool {
        parse_price(&self.price_max).is_err()
    }
}

/// Parse a price box. Blank is `Ok(None)`.
pub fn parse_price(text: &str) -> Result<Option<f64>, String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(format!("'{}' is not a price", trimmed)),
    }
}
