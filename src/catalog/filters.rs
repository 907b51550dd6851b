//! Structured catalog filters
//!
//! A `FilterSet` is a conjunction of independent predicates; unset fields
//! impose no constraint. `FilterPatch` is the partial update form used by the
//! filters panel and by chat directives.

use crate::catalog::models::CatalogItem;

/// Canonical filter criteria. Prices are in USD.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    /// Lowest accepted USD price, inclusive
    pub price_min: Option<f64>,
    /// Highest accepted USD price, inclusive
    pub price_max: Option<f64>,
    /// Exact category name
    pub category: Option<String>,
    /// Size the product must be offered in
    pub size: Option<String>,
}

impl FilterSet {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.price_min.is_none()
            && self.price_max.is_none()
            && self.category.is_none()
            && self.size.is_none()
    }

    /// Whether one item satisfies every set field
    pub fn matches(&self, item: &CatalogItem) -> bool {
        if let Some(min) = self.price_min {
            if item.current_price_usd < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if item.current_price_usd > max {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &item.product.category_name != category {
                return false;
            }
        }
        if let Some(size) = &self.size {
            if !item.product.sizes.iter().any(|s| s == size) {
                return false;
            }
        }
        true
    }

    /// Shallow merge: every field present in the patch overwrites ours
    pub fn merge(&mut self, patch: FilterPatch) {
        if let Some(price_min) = patch.price_min {
            self.price_min = price_min;
        }
        if let Some(price_max) = patch.price_max {
            self.price_max = price_max;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
    }
}

/// Partial filter update
///
/// Outer `None` leaves a field alone; `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    /// New `FilterSet::price_min`
    pub price_min: Option<Option<f64>>,
    /// New `FilterSet::price_max`
    pub price_max: Option<Option<f64>>,
    /// New `FilterSet::category`
    pub category: Option<Option<String>>,
    /// New `FilterSet::size`
    pub size: Option<Option<String>>,
}

impl FilterPatch {
    /// Patch that only sets the price ceiling
    pub fn max_price(max: f64) -> Self {
        Self {
            price_max: Some(Some(max)),
            ..Default::default()
        }
    }

    /// Patch that overwrites every field with `filters`, including unset ones
    pub fn replace_all(filters: FilterSet) -> Self {
        Self {
            price_min: Some(filters.price_min),
            price_max: Some(filters.price_max),
            category: Some(filters.category),
            size: Some(filters.size),
        }
    }
}

/// Narrow `items` to those satisfying every set field of `filters`
///
/// Keeps the input order. An empty filter set returns every item.
pub fn apply_filters<'a>(items: &'a [CatalogItem], filters: &FilterSet) -> Vec<&'a CatalogItem> {
    items.iter().filter(|item| filters.matches(item)).collect()
}
