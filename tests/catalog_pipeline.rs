use std::collections::BTreeSet;
use std::fs;

use catalog_insights::analytics::{
    category_totals, filter_records, price_distribution, summarize, top_n_by_price, PriceRange,
    ProductFilter,
};
use catalog_insights::catalog::{load, CatalogCache, LoadError, ProductRecord};
use catalog_insights::export::export_to_path;

const FIXTURE: &str = "product_id,product_name,category,discounted_price,actual_price,rating,rating_count\n\
    B01,Smartphone Galaxy with a very long marketing name attached,Electronics|Phones,₹100,₹150,4.5,\"1,200\"\n\
    B02,Vase,Home&Kitchen|Decor,$50,$70,bad,30\n\
    B03,Mystery,Unknown|X,,,3,\n";

fn write_fixture(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("amazon.csv");
    fs::write(&path, FIXTURE).unwrap();
    path
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn normalizes_the_three_row_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = load(write_fixture(dir.path())).unwrap();
    let records = catalog.records();
    assert_eq!(records.len(), 3);

    assert!(close(records[0].converted_price.unwrap(), 7.0));
    assert!(close(records[1].converted_price.unwrap(), 3.5));
    assert_eq!(records[2].converted_price, None);

    let categories: Vec<&str> = records.iter().map(|r| r.display_category.as_str()).collect();
    assert_eq!(categories, vec!["Eletrônicos", "Casa e Cozinha", "Unknown"]);

    let ratings: Vec<f64> = records.iter().map(|r| r.rating).collect();
    assert_eq!(ratings, vec![4.5, 0.0, 3.0]);

    assert_eq!(records[0].rating_count, 1200);
    assert_eq!(records[2].rating_count, 0);
    assert_eq!(records[0].display_name, "Smartphone Galaxy with a very long ...");
    assert_eq!(records[1].display_name, "Vase");
}

#[test]
fn filters_and_aggregates_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = load(write_fixture(dir.path())).unwrap();

    let all = filter_records(
        catalog.records(),
        &BTreeSet::new(),
        PriceRange::new(0.0, 10.0),
    );
    assert_eq!(all.len(), 2);

    let metrics = summarize(&all);
    assert!(close(metrics.mean_price.unwrap(), 5.25));
    assert!(close(metrics.mean_rating.unwrap(), 2.25));
    assert_eq!(metrics.total_rating_count, 1230);

    let boundary = filter_records(catalog.records(), &BTreeSet::new(), PriceRange::new(0.0, 50.0 * 0.07));
    assert_eq!(boundary.len(), 1);
    assert_eq!(boundary[0].product_name, "Vase");

    let top: Vec<&str> = top_n_by_price(&all, 10)
        .iter()
        .map(|r| r.product_name.as_str())
        .collect();
    assert_eq!(top, vec!["Vase", "Smartphone Galaxy with a very long marketing name attached"]);

    assert_eq!(category_totals(&all).len(), 2);
    assert_eq!(price_distribution(&all).len(), 2);

    let none = ProductFilter::default()
        .with_categories(["Automotivo"])
        .apply(catalog.records());
    let empty = summarize(&none);
    assert_eq!(empty.count, 0);
    assert_eq!(empty.mean_price, None);
    assert_eq!(empty.total_rating_count, 0);
}

#[test]
fn reloading_is_idempotent_and_cached() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path());
    let mut cache = CatalogCache::new();

    let first = cache.get(&path).unwrap();
    let again = cache.get(&path).unwrap();
    assert_eq!(cache.load_count(), 1);
    assert_eq!(*first, *again);
    assert_eq!(*first, load(&path).unwrap());
}

#[test]
fn exports_the_filtered_view() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = load(write_fixture(dir.path())).unwrap();
    let view: Vec<&ProductRecord> = ProductFilter::default()
        .with_categories(["Casa e Cozinha"])
        .apply(catalog.records());

    let out = dir.path().join("filtrado.csv");
    assert_eq!(export_to_path(catalog.columns(), &view, &out).unwrap(), 1);

    let exported = load(&out).unwrap();
    assert_eq!(exported.len(), 1);
    assert_eq!(exported.records()[0].product_name, "Vase");
    assert_eq!(exported.records()[0].display_category, "Casa e Cozinha");
    assert!(exported.columns().iter().any(|c| c == "preco_reais"));
}

#[test]
fn structurally_invalid_files_fail_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.csv");
    fs::write(&path, "name,price\nA,1\n").unwrap();
    assert!(matches!(load(&path), Err(LoadError::MissingColumns(_))));
    assert!(matches!(
        load(dir.path().join("nope.csv")),
        Err(LoadError::Io { .. })
    ));
}
