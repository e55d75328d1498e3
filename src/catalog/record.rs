use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Serialize;

use crate::normalization::{category, name, price, rating};

/// Header names of the derived columns, in export order.
pub const DERIVED_COLUMNS: [&str; 4] = ["category_main", "categoria_pt", "preco_reais", "nome_curto"];

/// Borrowed view of one CSV row before normalization.
#[derive(Debug, Clone, Copy)]
pub struct RawProduct<'a> {
    pub product_name: &'a str,
    pub category: &'a str,
    pub discounted_price: &'a str,
    pub actual_price: &'a str,
    pub rating: &'a str,
    pub rating_count: &'a str,
}

/// One normalized catalog row. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    pub product_name: String,
    pub category: String,
    pub discounted_price: Option<f64>,
    pub actual_price: Option<f64>,
    pub rating: f64,
    pub rating_count: u64,
    /// First segment of the category path.
    pub category_main: String,
    /// `category_main` after translation; used for all grouping and filtering.
    pub display_category: String,
    /// Discounted price in reais.
    pub converted_price: Option<f64>,
    pub display_name: String,
    /// Input columns the dashboard does not interpret, in header order.
    #[serde(skip)]
    pub extra: IndexMap<String, String>,
}

impl ProductRecord {
    /// Normalize a raw row. Returns the record and the number of fields that
    /// were replaced by a missing/zero sentinel.
    pub fn normalize(raw: RawProduct<'_>, extra: IndexMap<String, String>) -> (Self, usize) {
        let discounted_price = price::parse_price(raw.discounted_price);
        let actual_price = price::parse_price(raw.actual_price);
        let converted_price = price::convert_price(discounted_price);

        let coerced = [
            discounted_price.is_none(),
            actual_price.is_none(),
            rating::is_rating_coerced(raw.rating),
            rating::is_rating_count_coerced(raw.rating_count),
        ]
        .into_iter()
        .filter(|miss| *miss)
        .count();

        let category_main = category::top_level(raw.category).to_string();
        let display_category = category::display_category(&category_main).to_string();

        let record = Self {
            product_name: raw.product_name.to_string(),
            category: raw.category.to_string(),
            discounted_price,
            actual_price,
            rating: rating::parse_rating(raw.rating),
            rating_count: rating::parse_rating_count(raw.rating_count),
            category_main,
            display_category,
            converted_price,
            display_name: name::truncate_display_name(raw.product_name),
            extra,
        };
        (record, coerced)
    }

    /// Text value of a named column, normalized where the column is interpreted.
    /// Missing numbers render as an empty cell.
    pub fn column_value(&self, column: &str) -> Cow<'_, str> {
        match column {
            "product_name" => Cow::Borrowed(&self.product_name),
            "category" => Cow::Borrowed(&self.category),
            "discounted_price" => format_optional(self.discounted_price),
            "actual_price" => format_optional(self.actual_price),
            "rating" => Cow::Owned(format_number(self.rating)),
            "rating_count" => Cow::Owned(self.rating_count.to_string()),
            "category_main" => Cow::Borrowed(&self.category_main),
            "categoria_pt" => Cow::Borrowed(&self.display_category),
            "preco_reais" => format_optional(self.converted_price),
            "nome_curto" => Cow::Borrowed(&self.display_name),
            other => self
                .extra
                .get(other)
                .map_or(Cow::Borrowed(""), |v| Cow::Borrowed(v.as_str())),
        }
    }
}

fn format_optional(value: Option<f64>) -> Cow<'static, str> {
    value.map_or(Cow::Borrowed(""), |v| Cow::Owned(format_number(v)))
}

/// Whole numbers keep one decimal place (`100.0`) so numeric columns stay
/// recognizably decimal in spreadsheets.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
