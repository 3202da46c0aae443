//! Unit tests for entity validation and catalogue construction.

use chrono::NaiveDate;
use rstest::{fixture, rstest};

use super::*;
use crate::localization::{Language, LocalizedTextDraft};

#[fixture]
fn property_draft() -> PropertyDraft {
    PropertyDraft {
        id: "p-1".to_owned(),
        name: LocalizedTextDraft::new("شقة في التجمع", "Apartment in New Cairo"),
        location: LocalizedTextDraft::new("القاهرة الجديدة", "New Cairo"),
        image: "https://example.test/p-1.jpg".to_owned(),
        type_tags: vec![LocalizedTextDraft::new("شقة", "Apartment")],
        featured: false,
        price: 3_500_000,
        currency: "EGP".to_owned(),
        bedrooms: 3,
        bathrooms: 2,
        area: 150.0,
        listing_type: ListingType::Sale,
        developer_id: Some("sodic".to_owned()),
        listed_on: NaiveDate::from_ymd_opt(2024, 1, 15),
    }
}

#[fixture]
fn developer_draft() -> DeveloperDraft {
    DeveloperDraft {
        id: "sodic".to_owned(),
        name: LocalizedTextDraft::new("سوديك", "SODIC"),
        location: LocalizedTextDraft::new("الشيخ زايد", "Sheikh Zayed"),
        image: "https://example.test/sodic.jpg".to_owned(),
        type_tags: vec![LocalizedTextDraft::new("كمبوندات راقية", "Upscale Compounds")],
        featured: true,
        projects_count: 22,
    }
}

#[rstest]
fn valid_property_exposes_its_fields(property_draft: PropertyDraft) {
    let property = Property::new(property_draft).expect("valid property");

    assert_eq!(property.id(), "p-1");
    assert_eq!(property.price(), Price::Amount(3_500_000));
    assert_eq!(property.bedrooms(), 3);
    assert_eq!(property.developer_id(), Some("sodic"));
    assert_eq!(property.location().resolve(Language::English), "New Cairo");
}

#[rstest]
fn zero_price_means_on_request(mut property_draft: PropertyDraft) {
    property_draft.price = 0;
    let property = Property::new(property_draft).expect("valid property");
    assert_eq!(property.price(), Price::OnRequest);
    assert_eq!(property.price().amount(), None);
}

#[rstest]
fn negative_bedrooms_are_rejected(mut property_draft: PropertyDraft) {
    property_draft.bedrooms = -1;
    let err = Property::new(property_draft).expect_err("negative bedrooms");
    assert_eq!(
        err,
        ValidationError::NegativeValue {
            entity_id: "p-1".to_owned(),
            field: "property.bedrooms",
            value: -1,
        }
    );
}

#[rstest]
fn negative_price_is_rejected(mut property_draft: PropertyDraft) {
    property_draft.price = -10;
    let err = Property::new(property_draft).expect_err("negative price");
    assert!(matches!(
        err,
        ValidationError::NegativeValue {
            field: "property.price",
            value: -10,
            ..
        }
    ));
}

#[rstest]
#[case(0.0)]
#[case(-45.0)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn non_positive_area_is_rejected(mut property_draft: PropertyDraft, #[case] area: f64) {
    property_draft.area = area;
    let err = Property::new(property_draft).expect_err("invalid area");
    assert!(matches!(err, ValidationError::InvalidArea { .. }), "got {err:?}");
}

#[rstest]
fn blank_currency_is_rejected(mut property_draft: PropertyDraft) {
    property_draft.currency = "  ".to_owned();
    let err = Property::new(property_draft).expect_err("blank currency");
    assert_eq!(
        err,
        ValidationError::EmptyField {
            entity_id: "p-1".to_owned(),
            field: "property.currency",
        }
    );
}

#[rstest]
fn empty_type_tags_are_rejected(mut developer_draft: DeveloperDraft) {
    developer_draft.type_tags.clear();
    let err = Developer::new(developer_draft).expect_err("no tags");
    assert_eq!(
        err,
        ValidationError::EmptyTypeTags {
            entity_id: "sodic".to_owned(),
        }
    );
}

#[rstest]
fn tag_missing_translation_names_its_index(mut developer_draft: DeveloperDraft) {
    developer_draft
        .type_tags
        .push(LocalizedTextDraft::new("مشاريع مستدامة", ""));
    let err = Developer::new(developer_draft).expect_err("missing translation");
    assert_eq!(
        err,
        ValidationError::MissingTranslation {
            entity_id: "sodic".to_owned(),
            field: "developer.typeTags[1]".to_owned(),
            language: "en",
        }
    );
}

#[rstest]
fn property_tag_path_carries_the_kind(mut property_draft: PropertyDraft) {
    property_draft.type_tags = vec![LocalizedTextDraft::new(" ", "Apartment")];
    let err = Property::new(property_draft).expect_err("missing translation");
    assert_eq!(
        err,
        ValidationError::MissingTranslation {
            entity_id: "p-1".to_owned(),
            field: "property.typeTags[0]".to_owned(),
            language: "ar",
        }
    );
}

#[rstest]
fn name_missing_translation_is_rejected(mut property_draft: PropertyDraft) {
    property_draft.name = LocalizedTextDraft::new("", "Apartment");
    let err = Property::new(property_draft).expect_err("missing translation");
    assert_eq!(
        err,
        ValidationError::MissingTranslation {
            entity_id: "p-1".to_owned(),
            field: "property.name".to_owned(),
            language: "ar",
        }
    );
}

#[rstest]
fn negative_project_count_is_rejected(mut developer_draft: DeveloperDraft) {
    developer_draft.projects_count = -3;
    let err = Developer::new(developer_draft).expect_err("negative count");
    assert!(matches!(
        err,
        ValidationError::NegativeValue {
            field: "developer.projectsCount",
            ..
        }
    ));
}

#[rstest]
fn catalogue_preserves_insertion_order(
    property_draft: PropertyDraft,
    developer_draft: DeveloperDraft,
) {
    let catalog = Catalog::new([EntityDraft::from(developer_draft), EntityDraft::from(property_draft)])
        .expect("valid catalogue");

    let ids: Vec<&str> = catalog.all().iter().map(Entity::id).collect();
    assert_eq!(ids, ["sodic", "p-1"]);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.properties().count(), 1);
    assert_eq!(catalog.developers().count(), 1);
}

#[rstest]
fn get_finds_entities_by_id(property_draft: PropertyDraft, developer_draft: DeveloperDraft) {
    let catalog = Catalog::new([EntityDraft::from(property_draft), EntityDraft::from(developer_draft)])
        .expect("valid catalogue");

    let developer = catalog.get("sodic").expect("developer present");
    assert_eq!(developer.kind(), EntityKind::Developer);
    assert_eq!(
        developer.as_developer().map(Developer::projects_count),
        Some(22)
    );
    assert!(catalog.get("missing").is_none());
}

#[rstest]
fn duplicate_ids_are_rejected(property_draft: PropertyDraft, mut developer_draft: DeveloperDraft) {
    developer_draft.id = "p-1".to_owned();
    let err = Catalog::new([EntityDraft::from(property_draft), EntityDraft::from(developer_draft)])
        .expect_err("duplicate id");
    assert_eq!(
        err,
        ValidationError::DuplicateId {
            entity_id: "p-1".to_owned(),
        }
    );
}

#[rstest]
fn blank_id_reports_its_position(property_draft: PropertyDraft, mut developer_draft: DeveloperDraft) {
    developer_draft.id = " ".to_owned();
    let err = Catalog::new([EntityDraft::from(property_draft), EntityDraft::from(developer_draft)])
        .expect_err("blank id");
    assert_eq!(err, ValidationError::EmptyId { position: 1 });
}

#[rstest]
fn empty_catalogue_is_valid() {
    let catalog = Catalog::new(Vec::<EntityDraft>::new()).expect("empty catalogue");
    assert!(catalog.is_empty());
}

#[rstest]
fn drafts_deserialise_from_tagged_json() {
    let json = r#"{
        "kind": "developer",
        "id": "tmg",
        "name": {"ar": "طلعت مصطفى", "en": "TMG"},
        "location": {"ar": "القاهرة", "en": "Cairo"},
        "image": "https://example.test/tmg.jpg",
        "typeTags": [{"ar": "مدن متكاملة", "en": "Integrated Cities"}],
        "projectsCount": 30
    }"#;
    let draft: EntityDraft = serde_json::from_str(json).expect("valid draft");
    assert_eq!(draft.id(), "tmg");
    assert!(matches!(draft, EntityDraft::Developer(DeveloperDraft { featured: false, .. })));
}
