//! Integration tests for loading catalogue seed documents from disk.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]


use listing_directory::{
    CatalogSeed, Criteria, Language, SUPPORTED_SEED_VERSION, SeedError, ValidationError, present,
};
use rstest::rstest;
use test_support::{unique_temp_path, write_seed_file};

const SINGLE_RENTAL: &str = r#"{
    "version": 1,
    "entities": [
        {
            "kind": "property",
            "id": "r-1",
            "name": {"ar": "شقة للإيجار", "en": "Apartment for Rent"},
            "location": {"ar": "المعادي، القاهرة", "en": "Maadi, Cairo"},
            "image": "https://example.test/r-1.jpg",
            "typeTags": [{"ar": "شقة", "en": "Apartment"}],
            "price": 18000,
            "currency": "EGP",
            "bedrooms": 2,
            "bathrooms": 1,
            "area": 95,
            "listingType": "rent",
            "listedOn": "2024-02-01"
        }
    ]
}"#;

#[rstest]
fn seed_file_loads_into_a_catalogue() {
    let path = unique_temp_path("load", "catalog.json").expect("temp path");
    write_seed_file(&path, SINGLE_RENTAL).expect("write seed");

    let seed = CatalogSeed::from_file(&path).expect("seed loads");
    assert_eq!(seed.version(), SUPPORTED_SEED_VERSION);

    let catalog = seed.into_catalog().expect("seed validates");
    let page = present(catalog.filter(&Criteria::default()), Language::English);

    assert_eq!(page.records.len(), 1);
    assert_eq!(
        page.records.first().and_then(|record| record.price_label.as_deref()),
        Some("18,000 EGP/month")
    );
}

#[rstest]
fn missing_seed_file_reports_its_path() {
    let dir_path = unique_temp_path("missing", "absent.json").expect("temp path");

    let err = CatalogSeed::from_file(&dir_path).expect_err("file is absent");
    match err {
        SeedError::IoError { path, .. } => assert_eq!(path, dir_path),
        other => panic!("expected IoError, got {other:?}"),
    }
}

#[rstest]
fn invalid_entity_in_file_is_reported() {
    let path = unique_temp_path("invalid", "catalog.json").expect("temp path");
    let contents = SINGLE_RENTAL.replace("\"bathrooms\": 1", "\"bathrooms\": -1");
    write_seed_file(&path, &contents).expect("write seed");

    let err = CatalogSeed::from_file(&path)
        .and_then(CatalogSeed::into_catalog)
        .expect_err("negative bathrooms");
    assert_eq!(
        err,
        SeedError::Validation(ValidationError::NegativeValue {
            entity_id: "r-1".to_owned(),
            field: "property.bathrooms",
            value: -1,
        })
    );
}

#[rstest]
fn unknown_property_field_is_a_parse_error() {
    let path = unique_temp_path("unknown-field", "catalog.json").expect("temp path");
    let contents = SINGLE_RENTAL.replace("\"area\": 95", "\"area\": 95, \"agentPhone\": \"0100\"");
    write_seed_file(&path, &contents).expect("write seed");

    let err = CatalogSeed::from_file(&path).expect_err("unknown field");
    assert!(matches!(err, SeedError::ParseError { .. }), "got {err:?}");
}
