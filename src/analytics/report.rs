use serde::Serialize;

use super::aggregate::{
    category_totals, price_distribution, summarize, top_n_by_price, BoxStats, CategoryTotals,
    SummaryMetrics,
};
use super::filter::{PriceRange, ProductFilter};
use crate::catalog::{Catalog, ProductRecord};

/// One row of the top-by-price chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopProduct {
    pub name: String,
    pub display_name: String,
    pub category: String,
    pub converted_price: f64,
}

/// Per-category price spread for the distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpread {
    pub category: String,
    pub prices: Vec<f64>,
    pub stats: Option<BoxStats>,
}

/// Everything a renderer needs for one filter state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub categories: Vec<String>,
    pub price_range: PriceRange,
    pub metrics: SummaryMetrics,
    pub category_totals: Vec<CategoryTotals>,
    pub top_products: Vec<TopProduct>,
    pub price_distribution: Vec<CategorySpread>,
}

impl DashboardReport {
    /// Apply `filter` to `catalog` and derive every metric and projection.
    pub fn build(catalog: &Catalog, filter: &ProductFilter, top_n: usize) -> Self {
        let view = filter.apply(catalog.records());
        Self::from_view(
            &view,
            filter.categories.iter().cloned().collect(),
            filter.effective_range(catalog.records()),
            top_n,
        )
    }

    pub fn from_view(
        view: &[&ProductRecord],
        categories: Vec<String>,
        price_range: PriceRange,
        top_n: usize,
    ) -> Self {
        let top_products = top_n_by_price(view, top_n)
            .into_iter()
            .filter_map(|r| {
                Some(TopProduct {
                    name: r.product_name.clone(),
                    display_name: r.display_name.clone(),
                    category: r.display_category.clone(),
                    converted_price: r.converted_price?,
                })
            })
            .collect();

        let price_distribution = price_distribution(view)
            .into_iter()
            .map(|group| CategorySpread {
                stats: group.box_stats(),
                category: group.category,
                prices: group.prices,
            })
            .collect();

        Self {
            categories,
            price_range,
            metrics: summarize(view),
            category_totals: category_totals(view),
            top_products,
            price_distribution,
        }
    }
}
