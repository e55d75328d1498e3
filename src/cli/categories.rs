use anyhow::Result;

use super::context::AppContext;
use crate::analytics::{category_options, PriceRange, PRICE_STEP};

/// Print the category selector options and the default price range.
pub fn run(ctx: &mut AppContext) -> Result<()> {
    let catalog = ctx.catalog()?;
    for category in category_options(catalog.records()) {
        println!("{category}");
    }
    let range = PriceRange::observed(catalog.records());
    println!(
        "\nFaixa de Preço (R$): {:.2} .. {:.2} (passo {:.0}, {} posições)",
        range.min,
        range.max,
        PRICE_STEP,
        range.steps()
    );
    Ok(())
}
