use std::path::PathBuf;

use anyhow::{Context, Result};

use super::context::AppContext;
use crate::analytics::ProductFilter;
use crate::export::export_to_path;

#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    pub filter: ProductFilter,
    /// Overrides the configured export path.
    pub out: Option<PathBuf>,
}

pub fn run(ctx: &mut AppContext, cfg: ExportConfig) -> Result<()> {
    let catalog = ctx.catalog()?;
    let out = cfg.out.unwrap_or_else(|| ctx.config.export_path.clone());
    let view = cfg.filter.apply(catalog.records());
    let rows = export_to_path(catalog.columns(), &view, &out)
        .with_context(|| format!("export to {} failed", out.display()))?;
    println!("{rows} produtos exportados para {}", out.display());
    Ok(())
}
