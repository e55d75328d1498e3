use std::fmt::Write as _;

use anyhow::Result;
use tracing::info;

use super::context::AppContext;
use super::format::{format_brl, format_rating, format_thousands};
use crate::analytics::{DashboardReport, ProductFilter};

#[derive(Debug, Clone, Default)]
pub struct SummaryConfig {
    pub filter: ProductFilter,
    /// Overrides the configured top-N size.
    pub top_n: Option<usize>,
    /// Print the report as JSON instead of text; `CATALOG_JSON` also enables it.
    pub json: bool,
}

pub fn run(ctx: &mut AppContext, cfg: SummaryConfig) -> Result<()> {
    let catalog = ctx.catalog()?;
    let top_n = cfg.top_n.unwrap_or(ctx.config.top_n);
    let report = DashboardReport::build(&catalog, &cfg.filter, top_n);
    info!(
        matched = report.metrics.count,
        total = catalog.len(),
        categories = cfg.filter.categories.len(),
        "summary computed"
    );

    if cfg.json || ctx.config.json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

/// Plain-text rendering of every dashboard panel.
pub fn render_text(report: &DashboardReport) -> String {
    let mut out = String::new();
    let m = &report.metrics;

    let _ = writeln!(out, "Preço Médio        {}", format_brl(m.mean_price));
    let _ = writeln!(out, "Produtos Listados  {}", m.count);
    let _ = writeln!(out, "Nota Média         {}", format_rating(m.mean_rating));
    let _ = writeln!(
        out,
        "Total Avaliações   {}",
        format_thousands(m.total_rating_count)
    );

    if m.count == 0 {
        let _ = writeln!(out, "\nNenhum produto corresponde aos filtros selecionados.");
        return out;
    }

    let _ = writeln!(out, "\nQuais categorias dominam o mercado?");
    for group in &report.category_totals {
        let _ = writeln!(
            out,
            "  {:<26} {:>12} avaliações  nota {:.1}  ({} produtos)",
            group.category,
            format_thousands(group.rating_count),
            group.mean_rating,
            group.products
        );
    }

    let _ = writeln!(out, "\nTop {} Mais Caros", report.top_products.len());
    for product in report.top_products.iter().rev() {
        let _ = writeln!(
            out,
            "  {:>12}  {}",
            format_brl(Some(product.converted_price)),
            product.display_name
        );
    }

    let _ = writeln!(out, "\nDistribuição de Preços (mín / q1 / mediana / q3 / máx)");
    for spread in &report.price_distribution {
        if let Some(stats) = spread.stats {
            let _ = writeln!(
                out,
                "  {:<26} {:.2} / {:.2} / {:.2} / {:.2} / {:.2}  (n={})",
                spread.category,
                stats.min,
                stats.q1,
                stats.median,
                stats.q3,
                stats.max,
                spread.prices.len()
            );
        }
    }
    out
}
