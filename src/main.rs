use std::io;
use std::path::PathBuf;

use anyhow::Result;
use catalog_insights::analytics::{PriceRange, ProductFilter};
use catalog_insights::cli::{self, AppContext};
use catalog_insights::config::DashboardConfig;
use catalog_insights::util::env;
use clap::{Args, Parser, Subcommand};
use tracing::error;

#[derive(Parser, Debug)]
#[command(name = "catalog", version, about = "Product catalog dashboard")]
struct Cli {
    /// Catalog CSV (defaults to CATALOG_DATA_PATH or amazon.csv)
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct FilterArgs {
    /// Display category to keep; repeat for several (default: all)
    #[arg(long = "category")]
    categories: Vec<String>,
    /// Lower converted-price bound in R$ (default: observed minimum)
    #[arg(long)]
    min_price: Option<f64>,
    /// Upper converted-price bound in R$ (default: observed maximum)
    #[arg(long)]
    max_price: Option<f64>,
}

impl FilterArgs {
    /// A single bound is completed with the observed range at apply time.
    fn into_filter(self, ctx: &mut AppContext) -> Result<ProductFilter> {
        let filter = ProductFilter::default().with_categories(self.categories);
        if self.min_price.is_none() && self.max_price.is_none() {
            return Ok(filter);
        }
        let observed = PriceRange::observed(ctx.catalog()?.records());
        Ok(filter.with_price_range(PriceRange::new(
            self.min_price.unwrap_or(observed.min),
            self.max_price.unwrap_or(observed.max),
        )))
    }
}

#[derive(Subcommand, Debug)]
#[command(rename_all = "kebab-case")]
enum Commands {
    /// Print the headline metrics and chart tables for a filter selection
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
        /// Rows in the top-by-price table (default: CATALOG_TOP_N or 10)
        #[arg(long)]
        top: Option<usize>,
        /// Emit the full report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the selectable categories and the observed price range
    Categories,
    /// Write the filtered table as CSV
    Export {
        #[command(flatten)]
        filter: FilterArgs,
        /// Output file (default: CATALOG_EXPORT_PATH or dados_amazon_filtrados.csv)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Interactive session reading filter commands from stdin
    Interactive,
}

fn run(args: Cli, mut config: DashboardConfig) -> Result<()> {
    if let Some(data) = args.data {
        config.data_path = data;
    }
    env::bootstrap_cli("catalog", &config.data_path.display().to_string());
    let mut ctx = AppContext::new(config);

    match args.command {
        Commands::Summary { filter, top, json } => {
            let filter = filter.into_filter(&mut ctx)?;
            cli::summary::run(
                &mut ctx,
                cli::summary::SummaryConfig {
                    filter,
                    top_n: top,
                    json,
                },
            )
        }
        Commands::Categories => cli::categories::run(&mut ctx),
        Commands::Export { filter, out } => {
            let filter = filter.into_filter(&mut ctx)?;
            cli::export::run(&mut ctx, cli::export::ExportConfig { filter, out })
        }
        Commands::Interactive => {
            let stdin = io::stdin();
            cli::session::run(&mut ctx, stdin.lock(), io::stdout())
        }
    }
}

fn main() {
    env::init_env();
    let config = DashboardConfig::from_env();
    if let Err(e) = catalog_insights::tracing::init_tracing(&config.log_filter) {
        eprintln!("{e}");
    }

    if let Err(e) = run(Cli::parse(), config) {
        error!(error = %e, "catalog command failed");
        eprintln!("Erro: {e:#}");
        std::process::exit(1);
    }
}
