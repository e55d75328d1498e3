use std::collections::BTreeMap;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;

use crate::catalog::ProductRecord;

/// The four headline numbers of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryMetrics {
    /// Mean converted price over records that have one.
    pub mean_price: Option<f64>,
    pub count: usize,
    pub mean_rating: Option<f64>,
    /// Saturates at `u64::MAX` instead of overflowing.
    pub total_rating_count: u64,
}

pub fn summarize(records: &[&ProductRecord]) -> SummaryMetrics {
    SummaryMetrics {
        mean_price: mean(records.iter().filter_map(|r| r.converted_price)),
        count: records.len(),
        mean_rating: mean(records.iter().map(|r| r.rating)),
        total_rating_count: records
            .iter()
            .fold(0u64, |total, r| total.saturating_add(r.rating_count)),
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// The `n` most expensive records, returned cheapest first so a horizontal
/// bar chart reads bottom-to-top. Records without a price are skipped.
pub fn top_n_by_price<'a>(records: &[&'a ProductRecord], n: usize) -> Vec<&'a ProductRecord> {
    let mut top: Vec<&ProductRecord> = records
        .iter()
        .copied()
        .filter(|r| r.converted_price.is_some())
        .sorted_by(|a, b| price_of(b).total_cmp(&price_of(a)))
        .take(n)
        .collect();
    top.sort_by(|a, b| price_of(a).total_cmp(&price_of(b)));
    top
}

fn price_of(record: &ProductRecord) -> f64 {
    record.converted_price.unwrap_or(f64::NAN)
}

/// Treemap values for one display category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotals {
    pub category: String,
    pub rating_count: u64,
    pub mean_rating: f64,
    pub products: usize,
}

/// Group by display category, summing rating counts and averaging ratings.
/// Groups are ordered by category name.
pub fn category_totals(records: &[&ProductRecord]) -> Vec<CategoryTotals> {
    let mut groups: BTreeMap<&str, (u64, f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(record.display_category.as_str()).or_default();
        entry.0 = entry.0.saturating_add(record.rating_count);
        entry.1 += record.rating;
        entry.2 += 1;
    }
    groups
        .into_iter()
        .map(|(category, (rating_count, rating_sum, products))| CategoryTotals {
            category: category.to_string(),
            rating_count,
            mean_rating: rating_sum / products as f64,
            products,
        })
        .collect()
}

/// Every converted price observed in one display category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceDistribution {
    pub category: String,
    pub prices: Vec<f64>,
}

impl PriceDistribution {
    pub fn box_stats(&self) -> Option<BoxStats> {
        BoxStats::from_values(&self.prices)
    }
}

/// Group converted prices by display category without reducing them.
/// Groups keep first-appearance order; missing prices are left out.
pub fn price_distribution(records: &[&ProductRecord]) -> Vec<PriceDistribution> {
    let mut groups: IndexMap<&str, Vec<f64>> = IndexMap::new();
    for record in records {
        let prices = groups.entry(record.display_category.as_str()).or_default();
        if let Some(price) = record.converted_price {
            prices.push(price);
        }
    }
    groups
        .into_iter()
        .map(|(category, prices)| PriceDistribution {
            category: category.to_string(),
            prices,
        })
        .collect()
}

/// Five-number summary of a distribution, quartiles linearly interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxStats {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let sorted: Vec<f64> = values
            .iter()
            .copied()
            .sorted_by(|a, b| a.total_cmp(b))
            .collect();
        let (first, last) = (*sorted.first()?, *sorted.last()?);
        Some(Self {
            min: first,
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: last,
        })
    }
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let (lo, hi) = (pos.floor() as usize, pos.ceil() as usize);
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Sorted unique display categories: the options of the category selector.
pub fn category_options<'a>(records: impl IntoIterator<Item = &'a ProductRecord>) -> Vec<String> {
    records
        .into_iter()
        .map(|r| r.display_category.as_str())
        .sorted()
        .dedup()
        .map(str::to_string)
        .collect()
}
