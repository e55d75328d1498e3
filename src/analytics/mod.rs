//! Filtering and aggregation over a loaded catalog.
pub mod aggregate;
pub mod filter;
pub mod report;

pub use aggregate::{
    category_options, category_totals, price_distribution, summarize, top_n_by_price, BoxStats,
    CategoryTotals, PriceDistribution, SummaryMetrics,
};
pub use filter::{filter_records, PriceRange, ProductFilter, PRICE_STEP};
pub use report::DashboardReport;
