use dnf_pcp::api::{PcpEngine, PcpEngineConfig, PlotStatus};
use dnf_pcp::PcpError;
use dnf_pcp::core::{AxisKind, AxisScale, AxisSpec, Field, Viewport};
use dnf_pcp::render::NullRenderer;

const PAYLOAD: &str = r#"{
    "status": "success",
    "data": [
        {"year": 2020, "grid": 1, "laps": 58, "circuitType": "street", "reasonRetired": "Collision",
         "constructor": "A", "engine": "X", "tyre": "T1", "country": "Monaco", "status": "DNF"},
        {"year": 2021, "grid": 5, "laps": 50, "circuitType": "road", "reasonRetired": "Engine",
         "constructor": "B", "engine": "Y", "tyre": "T2", "country": "Italy", "status": "DNF"}
    ]
}"#;

#[test]
fn engine_smoke_flow() {
    let config = PcpEngineConfig::new(Viewport::new(1200, 600));
    let mut engine = PcpEngine::new(NullRenderer::default(), config).expect("engine init");
    assert_eq!(engine.status(), &PlotStatus::Idle);

    engine.render().expect("empty render");
    assert_eq!(engine.renderer().last_path_count, 0);
    assert!(engine.renderer().last_line_count >= 9);

    let ticket = engine.begin_load();
    assert!(engine.load_in_flight());
    assert_eq!(engine.status(), &PlotStatus::Loading);
    engine.render().expect("loading render");
    assert_eq!(engine.renderer().last_path_count, 0);
    assert_eq!(engine.renderer().last_line_count, 0);
    assert_eq!(engine.renderer().last_text_count, 1);

    assert!(engine.complete_load(ticket, PAYLOAD).expect("load"));
    assert!(!engine.load_in_flight());
    assert_eq!(engine.status(), &PlotStatus::Ready);
    assert_eq!(engine.record_count(), 2);

    engine.render().expect("render");
    assert_eq!(engine.renderer().last_path_count, 2);
    assert_eq!(engine.renderer().visible_path_count(), 2);
    assert!(!engine.has_pending_invalidation());

    assert_eq!(
        engine.axis_order(),
        vec![
            Field::CircuitType,
            Field::ReasonRetired,
            Field::Constructor,
            Field::Engine,
            Field::Tyre,
            Field::Country,
            Field::Year,
            Field::Grid,
            Field::Laps,
        ]
    );

    let year = engine.axis(Field::Year).expect("year axis");
    match &year.scale {
        AxisScale::Linear(scale) => assert_eq!(scale.domain(), (2020.0, 2021.0)),
        AxisScale::Point(_) => panic!("year must be numeric"),
    }
    let country = engine.axis(Field::Country).expect("country axis");
    match &country.scale {
        AxisScale::Point(scale) => {
            let domain: Vec<&str> = scale.domain().iter().map(String::as_str).collect();
            assert_eq!(domain, vec!["Monaco", "Italy"]);
        }
        AxisScale::Linear(_) => panic!("country must be categorical"),
    }
}

#[test]
fn plot_area_excludes_margins() {
    let engine = PcpEngine::new(
        NullRenderer::default(),
        PcpEngineConfig::new(Viewport::new(1200, 600)),
    )
    .expect("engine init");

    let area = engine.plot_area();
    assert_eq!(area.origin_x, 80.0);
    assert_eq!(area.origin_y, 60.0);
    assert_eq!(area.width, 1040.0);
    assert_eq!(area.height, 460.0);

    let xs: Vec<f64> = engine.axes().iter().map(|axis| axis.screen_x).collect();
    assert_eq!(xs.first().copied(), Some(0.0));
    assert_eq!(xs.last().copied(), Some(1040.0));
    assert!(xs.windows(2).all(|w| (w[1] - w[0] - 130.0).abs() <= 1e-9));
}

#[test]
fn empty_record_set_renders_axes_without_polylines() {
    let mut engine = PcpEngine::new(
        NullRenderer::default(),
        PcpEngineConfig::new(Viewport::new(900, 500)),
    )
    .expect("engine init");
    engine.set_records(Vec::new()).expect("empty records");
    engine.render().expect("render");

    assert_eq!(engine.status(), &PlotStatus::Ready);
    assert_eq!(engine.renderer().last_path_count, 0);
    assert!(engine.visible_records().is_empty());
    let frame = engine.build_render_frame();
    assert_eq!(frame.rects.len(), 9);
}

#[test]
fn config_round_trips_through_json() {
    let config = PcpEngineConfig::new(Viewport::new(1024, 640))
        .with_hover_tolerance_px(6.0)
        .with_resize_debounce_ms(100.0);
    let json = config.to_json_pretty().expect("serialize");
    let restored = PcpEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored.viewport, config.viewport);
    assert_eq!(restored.axes, config.axes);
    assert_eq!(restored.hover_tolerance_px, 6.0);
    assert_eq!(restored.resize_debounce_ms, 100.0);
    assert_eq!(restored.tick_count, config.tick_count);
}

#[test]
fn config_defaults_fill_missing_fields() {
    let restored = PcpEngineConfig::from_json_str(r#"{"viewport": {"width": 800, "height": 400}}"#)
        .expect("parse");
    assert_eq!(restored, PcpEngineConfig::new(Viewport::new(800, 400)));
    assert_eq!(restored.axes.len(), 9);
}

#[test]
fn engine_rejects_too_small_viewport() {
    let result = PcpEngine::new(
        NullRenderer::default(),
        PcpEngineConfig::new(Viewport::new(120, 100)),
    );
    assert!(result.is_err());
}

#[test]
fn text_field_on_numeric_axis_is_rejected() {
    let config = PcpEngineConfig::new(Viewport::new(1200, 600)).with_axes(vec![
        AxisSpec::new(Field::Year, AxisKind::Numeric, "Year"),
        AxisSpec::new(Field::Country, AxisKind::Numeric, "Country"),
    ]);
    let err = PcpEngine::new(NullRenderer::default(), config)
        .err()
        .expect("country cannot be numeric");
    assert!(matches!(err, PcpError::InvalidData(message) if message.contains("country")));
}

#[test]
fn numeric_field_may_use_categorical_axis() {
    let config = PcpEngineConfig::new(Viewport::new(1200, 600)).with_axes(vec![
        AxisSpec::new(Field::Year, AxisKind::Categorical, "Year"),
        AxisSpec::new(Field::Country, AxisKind::Categorical, "Country"),
    ]);
    let mut engine = PcpEngine::new(NullRenderer::default(), config).expect("engine init");
    let ticket = engine.begin_load();
    assert!(engine.complete_load(ticket, PAYLOAD).expect("landed"));
    match &engine.axis(Field::Year).expect("year axis").scale {
        AxisScale::Point(scale) => assert_eq!(scale.domain().len(), 2),
        AxisScale::Linear(_) => panic!("year axis should be categorical"),
    }
    assert_eq!(engine.visible_records(), vec![0, 1]);
}
