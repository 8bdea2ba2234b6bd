use holdings_chart_wasm::domain::holdings::{
    AGENCY_MBS, CORPORATE_BONDS, DatasetKey, EQUITIES, Sector, TREASURY, ValidationMode, chart_catalog,
    known_container_ids,
};
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn every_embedded_source_passes_strict_validation() {
    for source in [&EQUITIES, &TREASURY, &AGENCY_MBS, &CORPORATE_BONDS] {
        let dataset = source.load(ValidationMode::Strict).unwrap();
        assert_eq!(dataset.len(), source.years.len());
        assert_eq!(dataset.sector_count(), source.sectors.len());
    }
}

#[test]
fn every_embedded_dataset_sums_to_one() {
    for key in DatasetKey::iter() {
        let dataset = key.dataset().unwrap();
        for (year, total) in dataset.share_totals() {
            assert!((total - 1.0).abs() <= 0.005, "{} {}: total {}", key, year.value(), total);
        }
    }
}

#[test]
fn agency_mbs_covers_ten_years_from_1980() {
    let dataset = DatasetKey::AgencyMbs.dataset().unwrap();
    assert_eq!(dataset.len(), 10);
    assert_eq!(dataset.first_year().map(|y| y.value()), Some(1980));
    assert_eq!(dataset.last_year().map(|y| y.value()), Some(2023));
}

#[test]
fn full_range_datasets_cover_1960_to_2023() {
    for key in [DatasetKey::Equities, DatasetKey::Treasury, DatasetKey::CorporateBonds] {
        let dataset = key.dataset().unwrap();
        assert_eq!(dataset.len(), 14);
        assert_eq!(dataset.first_year().map(|y| y.value()), Some(1960));
        assert_eq!(dataset.last_year().map(|y| y.value()), Some(2023));
    }
}

#[test]
fn central_bank_only_where_the_chart_shows_it() {
    for key in DatasetKey::iter() {
        let dataset = key.dataset().unwrap();
        assert_eq!(dataset.contains(Sector::FederalReserve), key.include_central_bank(), "{}", key);
    }
}

#[test]
fn catalog_maps_keys_to_known_containers() {
    let catalog = chart_catalog();
    let ids: Vec<String> = catalog.iter().map(|d| d.container_id.value().to_string()).collect();
    assert_eq!(ids, vec!["equities-chart", "treasury-chart", "agency-mbs-chart", "corporate-bonds-chart"]);
    assert_eq!(known_container_ids(), catalog.iter().map(|d| d.container_id.clone()).collect::<Vec<_>>());

    let flags: Vec<bool> = catalog.iter().map(|d| d.include_central_bank).collect();
    assert_eq!(flags, vec![false, true, true, false]);
}

#[test]
fn dataset_keys_parse_from_page_names() {
    assert_eq!(DatasetKey::from_str("agency-mbs").unwrap(), DatasetKey::AgencyMbs);
    assert_eq!(DatasetKey::from_str("corporate-bonds").unwrap(), DatasetKey::CorporateBonds);
    assert!(DatasetKey::from_str("municipal-bonds").is_err());
    assert_eq!(DatasetKey::Treasury.to_string(), "treasury");
}

#[test]
fn each_key_resolves_its_own_dataset() {
    for key in DatasetKey::iter() {
        let expected = key.source().load(ValidationMode::Strict).unwrap();
        assert_eq!(key.dataset().unwrap(), &expected, "{}", key);
    }
    assert_eq!(DatasetKey::AgencyMbs.dataset().unwrap().len(), 10);
    assert_eq!(DatasetKey::CorporateBonds.dataset().unwrap().len(), 14);
}
