use dnf_pcp::PcpError;
use dnf_pcp::api::{InvalidationLevel, PcpEngine, PcpEngineConfig};
use dnf_pcp::core::{BrushInterval, Field, Record, Viewport};
use dnf_pcp::filter::CrossFilterEvent;
use dnf_pcp::render::NullRenderer;

fn record(year: i64, grid: i64, laps: i64, country: &str) -> Record {
    Record {
        year: Some(year),
        grid: Some(grid),
        laps: Some(laps),
        circuit_type: Some("road".to_owned()),
        reason_retired: Some("Engine".to_owned()),
        constructor: Some("A".to_owned()),
        engine: Some("X".to_owned()),
        tyre: Some("T1".to_owned()),
        country: Some(country.to_owned()),
        status: Some("DNF".to_owned()),
    }
}

fn scenario_records() -> Vec<Record> {
    vec![
        Record {
            circuit_type: Some("street".to_owned()),
            reason_retired: Some("Collision".to_owned()),
            ..record(2020, 1, 58, "Monaco")
        },
        Record {
            constructor: Some("B".to_owned()),
            engine: Some("Y".to_owned()),
            tyre: Some("T2".to_owned()),
            ..record(2021, 5, 50, "Italy")
        },
    ]
}

fn engine_with(records: Vec<Record>) -> PcpEngine<NullRenderer> {
    let mut engine = PcpEngine::new(
        NullRenderer::default(),
        PcpEngineConfig::new(Viewport::new(1200, 600)),
    )
    .expect("engine init");
    engine.set_records(records).expect("records");
    engine
}

#[test]
fn year_brush_and_country_filter_combine_with_and() {
    let mut engine = engine_with(scenario_records());
    assert_eq!(engine.visible_records(), vec![0, 1]);

    // Plot height 460: 2021 maps to y=0, 2020 to y=460.
    assert!(engine.set_brush_domain(Field::Year, 2020.5, 2021.0).expect("brush"));
    assert_eq!(engine.visible_records(), vec![1]);

    assert!(engine.apply_cross_filter_event(&CrossFilterEvent::CountrySelected {
        country: "Monaco".to_owned(),
    }));
    assert!(engine.visible_records().is_empty());

    assert!(engine.clear_brush(Field::Year).expect("clear"));
    assert_eq!(engine.visible_records(), vec![0]);

    assert!(engine.apply_cross_filter_event(&CrossFilterEvent::ResetGeoFilters));
    assert_eq!(engine.visible_records(), vec![0, 1]);
}

#[test]
fn brush_endpoints_are_sorted_and_clamped() {
    let mut engine = engine_with(scenario_records());
    engine.set_brush(Field::Grid, 500.0, 300.0).expect("brush");
    assert_eq!(
        engine.brush(Field::Grid).expect("axis"),
        Some(BrushInterval { y0: 300.0, y1: 460.0 })
    );
    // grid 1 sits at the bottom (y=460) and is selected.
    assert_eq!(engine.visible_records(), vec![0]);
}

#[test]
fn zero_width_brush_clears_selection() {
    let mut engine = engine_with(scenario_records());
    engine.set_brush(Field::Year, 0.0, 100.0).expect("brush");
    assert_eq!(engine.visible_records(), vec![1]);

    assert!(engine.set_brush(Field::Year, 42.0, 42.0).expect("brush"));
    assert_eq!(engine.brush(Field::Year).expect("axis"), None);
    assert_eq!(engine.visible_records(), vec![0, 1]);
}

#[test]
fn non_finite_brush_is_invalid_data() {
    let mut engine = engine_with(scenario_records());
    let err = engine
        .set_brush(Field::Year, f64::NAN, 10.0)
        .expect_err("nan must fail");
    assert!(matches!(err, PcpError::InvalidData(_)));
    assert_eq!(engine.brush(Field::Year).expect("axis"), None);
}

#[test]
fn brushing_three_axes_is_a_conjunction() {
    let records = vec![
        record(2000, 1, 10, "Italy"),
        record(2010, 10, 40, "Italy"),
        record(2020, 20, 70, "Italy"),
        record(2010, 20, 70, "Italy"),
        record(2020, 10, 10, "Italy"),
    ];
    let mut engine = engine_with(records);

    engine.set_brush_domain(Field::Year, 2005.0, 2020.0).expect("year");
    assert_eq!(engine.visible_records(), vec![1, 2, 3, 4]);
    engine.set_brush_domain(Field::Grid, 5.0, 20.0).expect("grid");
    assert_eq!(engine.visible_records(), vec![1, 2, 3, 4]);
    engine.set_brush_domain(Field::Laps, 30.0, 70.0).expect("laps");
    assert_eq!(engine.visible_records(), vec![1, 2, 3]);
    engine.set_brush_domain(Field::Grid, 15.0, 20.0).expect("grid");
    assert_eq!(engine.visible_records(), vec![2, 3]);

    assert!(engine.clear_brush(Field::Year).expect("clear"));
    assert_eq!(engine.visible_records(), vec![2, 3]);
    assert!(engine.clear_brush(Field::Grid).expect("clear"));
    assert_eq!(engine.visible_records(), vec![1, 2, 3]);

    assert_eq!(engine.brushed_axes(), vec![Field::Laps]);
    assert!(engine.clear_all_brushes());
    assert!(!engine.clear_all_brushes());
    assert_eq!(engine.visible_records().len(), 5);
}

#[test]
fn undefined_value_fails_brushed_axis_only() {
    let mut with_gap = record(2015, 3, 40, "Italy");
    with_gap.grid = None;
    let mut engine = engine_with(vec![record(2010, 2, 30, "Italy"), with_gap]);

    engine.set_brush_domain(Field::Year, 2000.0, 2020.0).expect("year");
    assert_eq!(engine.visible_records(), vec![0, 1]);

    engine.set_brush(Field::Grid, 0.0, 460.0).expect("grid");
    assert_eq!(engine.visible_records(), vec![0]);
}

#[test]
fn categorical_brush_selects_by_point_position() {
    let mut engine = engine_with(scenario_records());
    // Two countries: Monaco at y=345 (bottom), Italy at y=115.
    let monaco_y = engine
        .scale_value(Field::Country, &engine.records()[0])
        .expect("axis")
        .expect("defined");
    assert_eq!(monaco_y, 345.0);

    engine.set_brush(Field::Country, 300.0, 400.0).expect("brush");
    assert_eq!(engine.visible_records(), vec![0]);

    let err = engine
        .set_brush_domain(Field::Country, 0.0, 1.0)
        .expect_err("categorical axis");
    assert!(matches!(err, PcpError::InvalidData(_)));
}

#[test]
fn brush_changes_only_invalidate_visibility() {
    let mut engine = engine_with(scenario_records());
    engine.render().expect("render");
    assert!(!engine.has_pending_invalidation());

    assert!(engine.set_brush(Field::Year, 0.0, 100.0).expect("brush"));
    assert_eq!(engine.pending_invalidation(), InvalidationLevel::Visibility);
    engine.clear_pending_invalidation();

    assert!(!engine.set_brush(Field::Year, 100.0, 0.0).expect("same brush"));
    assert!(!engine.has_pending_invalidation());
}

#[test]
fn unknown_axis_brush_is_rejected() {
    let mut engine = engine_with(scenario_records());
    let err = engine
        .set_brush(Field::Status, 0.0, 10.0)
        .expect_err("no status axis");
    assert!(matches!(err, PcpError::UnknownAxis(_)));
}
