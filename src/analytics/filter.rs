use std::collections::BTreeSet;

use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

use crate::catalog::ProductRecord;

/// Granularity of the price selector, in reais.
pub const PRICE_STEP: f64 = 10.0;

/// Inclusive converted-price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The full observed range of converted prices; `[0, 0]` when no record has one.
    pub fn observed<'a>(records: impl IntoIterator<Item = &'a ProductRecord>) -> Self {
        match records
            .into_iter()
            .filter_map(|r| r.converted_price)
            .minmax_by(|a, b| a.total_cmp(b))
        {
            MinMaxResult::NoElements => Self::new(0.0, 0.0),
            MinMaxResult::OneElement(v) => Self::new(v, v),
            MinMaxResult::MinMax(min, max) => Self::new(min, max),
        }
    }

    /// Missing prices never match.
    pub fn contains(&self, price: Option<f64>) -> bool {
        price.is_some_and(|p| p >= self.min && p <= self.max)
    }

    /// Number of selector positions between the bounds at [`PRICE_STEP`].
    pub fn steps(&self) -> usize {
        if self.max <= self.min {
            return 0;
        }
        ((self.max - self.min) / PRICE_STEP).ceil() as usize
    }
}

/// Keep records whose display category is selected (all when `categories`
/// is empty) and whose converted price lies in `range`.
pub fn filter_records<'a>(
    records: &'a [ProductRecord],
    categories: &BTreeSet<String>,
    range: PriceRange,
) -> Vec<&'a ProductRecord> {
    records
        .iter()
        .filter(|r| categories.is_empty() || categories.contains(&r.display_category))
        .filter(|r| range.contains(r.converted_price))
        .collect()
}

/// User selections as the dashboard widgets supply them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductFilter {
    /// Display categories to keep; empty keeps all.
    pub categories: BTreeSet<String>,
    /// Price bounds; `None` uses the full observed range.
    pub price_range: Option<PriceRange>,
}

impl ProductFilter {
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.extend(categories.into_iter().map(Into::into));
        self
    }

    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    /// The bounds this filter applies to `records`.
    pub fn effective_range(&self, records: &[ProductRecord]) -> PriceRange {
        self.price_range
            .unwrap_or_else(|| PriceRange::observed(records))
    }

    pub fn apply<'a>(&self, records: &'a [ProductRecord]) -> Vec<&'a ProductRecord> {
        filter_records(records, &self.categories, self.effective_range(records))
    }
}
