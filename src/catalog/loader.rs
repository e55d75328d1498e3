use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use indexmap::IndexMap;
use tracing::{debug, info};

use super::error::LoadError;
use super::record::{ProductRecord, RawProduct};

/// Columns every catalog file must carry.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "product_name",
    "category",
    "discounted_price",
    "actual_price",
    "rating",
    "rating_count",
];

/// The normalized catalog: input header order plus one record per row.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    columns: Vec<String>,
    records: Vec<ProductRecord>,
    coerced_fields: usize,
}

impl Catalog {
    /// Input column names, in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of cells replaced by a missing/zero sentinel during load.
    pub fn coerced_fields(&self) -> usize {
        self.coerced_fields
    }
}

/// Positions of the interpreted columns within a header row.
struct ColumnIndex {
    product_name: usize,
    category: usize,
    discounted_price: usize,
    actual_price: usize,
    rating: usize,
    rating_count: usize,
    extra: Vec<(usize, String)>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|&name| position(name).is_none())
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns(missing));
        }

        // Every required column was found above.
        let required = |name: &str| position(name).unwrap_or_default();
        let extra = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| !REQUIRED_COLUMNS.contains(&h.trim()))
            .map(|(idx, h)| (idx, h.trim().to_string()))
            .collect();

        Ok(Self {
            product_name: required("product_name"),
            category: required("category"),
            discounted_price: required("discounted_price"),
            actual_price: required("actual_price"),
            rating: required("rating"),
            rating_count: required("rating_count"),
            extra,
        })
    }

    fn raw<'r>(&self, row: &'r StringRecord) -> RawProduct<'r> {
        let cell = |idx: usize| row.get(idx).unwrap_or("");
        RawProduct {
            product_name: cell(self.product_name),
            category: cell(self.category),
            discounted_price: cell(self.discounted_price),
            actual_price: cell(self.actual_price),
            rating: cell(self.rating),
            rating_count: cell(self.rating_count),
        }
    }

    fn extra(&self, row: &StringRecord) -> IndexMap<String, String> {
        self.extra
            .iter()
            .map(|(idx, name)| (name.clone(), row.get(*idx).unwrap_or("").to_string()))
            .collect()
    }
}

/// Load and normalize the catalog at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    let catalog = load_from_reader(BufReader::new(file))?;
    info!(
        path = %path.display(),
        rows = catalog.len(),
        coerced = catalog.coerced_fields(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Load and normalize a catalog from any CSV source with a header row.
///
/// Row order is preserved. Field-level parse failures never abort the load;
/// structural problems (ragged rows, invalid UTF-8, absent columns) do.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Catalog, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let index = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    let mut coerced_fields = 0usize;
    let mut row = StringRecord::new();
    while rdr.read_record(&mut row)? {
        let (record, coerced) = ProductRecord::normalize(index.raw(&row), index.extra(&row));
        if coerced > 0 {
            debug!(
                line = row.position().map(|p| p.line()),
                product = %record.display_name,
                coerced,
                "substituted sentinels for unparseable fields"
            );
        }
        coerced_fields += coerced;
        records.push(record);
    }

    Ok(Catalog {
        columns: headers.iter().map(|h| h.trim().to_string()).collect(),
        records,
        coerced_fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "product_id,product_name,category,discounted_price,actual_price,rating,rating_count\n";

    #[test]
    fn loads_rows_in_order() {
        let csv = format!(
            "{HEADER}A1,Cable,Computers&Accessories|Cables,\"₹1,299\",\"₹1,999\",4.2,\"24,269\"\nA2,Lamp,Home&Kitchen|Decor,$50,$80,3.9,12\n"
        );
        let catalog = load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.columns()[0], "product_id");
        let first = &catalog.records()[0];
        assert_eq!(first.product_name, "Cable");
        assert_eq!(first.discounted_price, Some(1299.0));
        assert_eq!(first.rating_count, 24_269);
        assert_eq!(first.display_category, "Informática");
        assert_eq!(first.extra.get("product_id").map(String::as_str), Some("A1"));
        assert_eq!(catalog.records()[1].display_category, "Casa e Cozinha");
        assert_eq!(catalog.coerced_fields(), 0);
    }

    #[test]
    fn reports_every_missing_column() {
        let csv = "product_name,category,discounted_price\nA,B,1\n";
        match load_from_reader(csv.as_bytes()) {
            Err(LoadError::MissingColumns(missing)) => {
                assert_eq!(missing, vec!["actual_price", "rating", "rating_count"]);
            }
            other => panic!("expected missing columns, got {other:?}"),
        }
    }

    #[test]
    fn ragged_rows_fail_the_whole_load() {
        let csv = format!("{HEADER}A1,Cable,Electronics,1,2,3\n");
        assert!(matches!(
            load_from_reader(csv.as_bytes()),
            Err(LoadError::Csv(_))
        ));
    }

    #[test]
    fn bad_fields_do_not_halt_the_load() {
        let csv = format!("{HEADER}A1,Cable,Electronics,,oops,bad,many\nA2,Mouse,Electronics,10,20,4,5\n");
        let catalog = load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.coerced_fields(), 4);
        assert_eq!(catalog.records()[0].rating, 0.0);
        assert_eq!(catalog.records()[0].rating_count, 0);
        assert_eq!(catalog.records()[1].rating, 4.0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load("definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.csv"));
    }

    #[test]
    fn padded_headers_keep_pass_through_values() {
        let csv = "product_id , product_name,category,discounted_price,actual_price,rating,rating_count\n\
            P1,Phone,Electronics|Phones,₹100,₹150,4.0,10\n";
        let catalog = load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.columns()[0], "product_id");
        let record = &catalog.records()[0];
        assert_eq!(record.product_name, "Phone");
        assert_eq!(record.column_value("product_id"), "P1");
    }

    #[test]
    fn header_only_file_is_an_empty_catalog() {
        let catalog = load_from_reader(HEADER.as_bytes()).unwrap();
        assert!(catalog.is_empty());
    }
}
