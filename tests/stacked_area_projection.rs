use holdings_chart_wasm::domain::chart::{
    DisplayOrder, Projection, SECTOR_PALETTE, SHARE_RANGE, SkipReason, StackedAreaProjectionService, hover_template,
};
use holdings_chart_wasm::domain::holdings::{
    ContainerId, DatasetKey, DatasetValidationService, HoldingsDataset, Sector, SectorSeries,
};
use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;

fn project_key(key: DatasetKey, include_central_bank: bool) -> Projection {
    let def = key.definition();
    StackedAreaProjectionService::new().project(
        &def.container_id,
        key.dataset().unwrap(),
        def.title,
        include_central_bank,
    )
}

/// Dataset over two years holding only the sectors whose bit is set in `mask`.
fn masked_dataset(mask: u8) -> HoldingsDataset {
    let series = Sector::iter()
        .enumerate()
        .filter(|(bit, _)| mask & (1 << bit) != 0)
        .map(|(_, sector)| SectorSeries::from_values(sector, &[0.1, 0.1]))
        .collect();
    DatasetValidationService::strict().validate(&[2000, 2010], series).unwrap().dataset
}

#[test]
fn equities_without_central_bank() {
    let figure = project_key(DatasetKey::Equities, false).figure;
    assert_eq!(
        figure.sectors(),
        vec![
            Sector::Households,
            Sector::MutualFunds,
            Sector::PensionFunds,
            Sector::Insurance,
            Sector::Banks,
            Sector::Foreign,
        ]
    );
    let names: Vec<&str> = figure.traces.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Households", "Mutual Funds & ETFs", "Pension Funds", "Insurance", "Banks & Intermediaries", "Foreign"]
    );
    assert_eq!(figure.title(), Some("Who Holds Corporate Equities?"));
}

#[test]
fn treasury_with_central_bank() {
    let projection = project_key(DatasetKey::Treasury, true);
    let figure = projection.figure;
    assert_eq!(figure.trace_count(), 7);
    assert_eq!(figure.sectors()[5], Sector::FederalReserve);
    assert_eq!(figure.trace(Sector::Foreign).and_then(|t| t.last_value()), Some(0.54));
    assert!(projection.skipped.is_empty());
}

#[test]
fn central_bank_series_left_out_of_six_sector_order() {
    let projection = project_key(DatasetKey::Treasury, false);
    assert_eq!(projection.figure.trace_count(), 6);
    assert!(projection.figure.trace(Sector::FederalReserve).is_none());
    assert_eq!(projection.skipped.len(), 1);
    assert_eq!(projection.skipped[0].sector, Sector::FederalReserve);
    assert_eq!(projection.skipped[0].reason, SkipReason::NotInDisplayOrder);
}

#[test]
fn absent_sector_is_skipped_not_faked() {
    let projection = project_key(DatasetKey::Equities, true);
    assert_eq!(projection.figure.trace_count(), 6);
    assert_eq!(projection.skipped.len(), 1);
    assert_eq!(projection.skipped[0].sector, Sector::FederalReserve);
    assert_eq!(projection.skipped[0].reason, SkipReason::NotInDataset);
}

#[test]
fn traces_carry_palette_and_hover_format() {
    let figure = project_key(DatasetKey::AgencyMbs, true).figure;
    for trace in &figure.traces {
        assert_eq!(trace.fillcolor, SECTOR_PALETTE.color(trace.sector));
        assert_eq!(trace.line.color, SECTOR_PALETTE.color(trace.sector));
        assert_eq!(trace.stackgroup, "one");
        assert!(trace.hovertemplate.contains("%{y:.1%}"));
        assert_eq!(trace.x, vec![1980, 1985, 1990, 1995, 2000, 2005, 2010, 2015, 2020, 2023]);
    }
    assert_eq!(hover_template(Sector::Insurance), "<b>Insurance</b><br>%{y:.1%}<extra></extra>");
    assert_eq!(SECTOR_PALETTE.color(Sector::Households).to_css(), "#4A90A4");
    assert_eq!(SECTOR_PALETTE.color(Sector::Foreign).to_css(), "#264653");
}

#[test]
fn share_axis_is_fixed() {
    for key in DatasetKey::iter() {
        let figure = project_key(key, key.include_central_bank()).figure;
        assert_eq!(figure.layout.yaxis.range, Some(SHARE_RANGE));
        assert_eq!(figure.layout.yaxis.tickformat.as_deref(), Some(".0%"));
    }
}

#[test]
fn projection_is_idempotent() {
    let first = project_key(DatasetKey::CorporateBonds, false);
    let second = project_key(DatasetKey::CorporateBonds, false);
    assert_eq!(first, second);
    assert_eq!(first.figure.to_json().unwrap(), second.figure.to_json().unwrap());
}

#[test]
fn figure_json_uses_plotly_field_names() {
    let figure = project_key(DatasetKey::Treasury, true).figure;
    let json: serde_json::Value = serde_json::from_str(&figure.to_json().unwrap()).unwrap();

    let first = &json["data"][0];
    assert_eq!(first["type"], "scatter");
    assert_eq!(first["mode"], "lines");
    assert_eq!(first["name"], "Households");
    assert_eq!(first["fillcolor"], "#4A90A4");
    assert!(first.get("sector").is_none());
    assert!(json.get("container_id").is_none());

    assert_eq!(json["layout"]["hovermode"], "x unified");
    assert_eq!(json["layout"]["legend"]["orientation"], "h");
    assert_eq!(json["layout"]["paper_bgcolor"], "rgba(0,0,0,0)");
    assert_eq!(json["config"]["displaylogo"], false);
}

#[quickcheck]
fn trace_order_follows_display_order(mask: u8, include_central_bank: bool) -> bool {
    let mask = mask & 0x7F;
    if mask == 0 {
        return true;
    }
    let dataset = masked_dataset(mask);
    let order = DisplayOrder::for_flag(include_central_bank);
    let projection = StackedAreaProjectionService::new().project(
        &ContainerId::new("prop-chart"),
        &dataset,
        "Property",
        include_central_bank,
    );

    let expected: Vec<Sector> = order.sectors().iter().copied().filter(|s| dataset.contains(*s)).collect();
    projection.figure.sectors() == expected
}

#[quickcheck]
fn every_sector_is_traced_or_skipped(mask: u8, include_central_bank: bool) -> bool {
    let mask = mask & 0x7F;
    if mask == 0 {
        return true;
    }
    let dataset = masked_dataset(mask);
    let projection = StackedAreaProjectionService::new().project(
        &ContainerId::new("prop-chart"),
        &dataset,
        "Property",
        include_central_bank,
    );

    Sector::iter().all(|sector| {
        let traced = projection.figure.traces.iter().filter(|t| t.sector == sector).count();
        let skipped = projection.skipped.iter().filter(|s| s.sector == sector).count();
        let in_order = DisplayOrder::for_flag(include_central_bank).contains(sector);
        let present = dataset.contains(sector);
        match (present, in_order) {
            (true, true) => traced == 1 && skipped == 0,
            (false, false) => traced == 0 && skipped == 0,
            _ => traced == 0 && skipped == 1,
        }
    })
}
