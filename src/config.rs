//! Runtime settings, read from the environment (`.env` supported).
use std::path::PathBuf;

use crate::export::DEFAULT_EXPORT_FILE;
use crate::util::env as env_util;

pub const DEFAULT_DATA_PATH: &str = "amazon.csv";
pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Catalog CSV to load (`CATALOG_DATA_PATH`).
    pub data_path: PathBuf,
    /// Rows in the top-by-price chart (`CATALOG_TOP_N`).
    pub top_n: usize,
    /// Where `export` writes the filtered table (`CATALOG_EXPORT_PATH`).
    pub export_path: PathBuf,
    /// Tracing filter used when `RUST_LOG` is unset (`CATALOG_LOG`).
    pub log_filter: String,
    /// Print reports as JSON by default (`CATALOG_JSON`).
    pub json_output: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            top_n: DEFAULT_TOP_N,
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            json_output: false,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_path: env_util::env_opt("CATALOG_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            top_n: env_util::env_parse("CATALOG_TOP_N", defaults.top_n),
            export_path: env_util::env_opt("CATALOG_EXPORT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.export_path),
            log_filter: env_util::env_opt("CATALOG_LOG").unwrap_or(defaults.log_filter),
            json_output: env_util::env_flag("CATALOG_JSON", defaults.json_output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_conventions() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.data_path, PathBuf::from("amazon.csv"));
        assert_eq!(cfg.top_n, 10);
        assert_eq!(cfg.export_path, PathBuf::from("dados_amazon_filtrados.csv"));
        assert!(!cfg.json_output);
    }
}
