use dnf_pcp::PcpError;
use dnf_pcp::api::{PcpEngine, PcpEngineConfig, PlotStatus};
use dnf_pcp::core::{Field, Viewport};
use dnf_pcp::render::NullRenderer;

const FIRST: &str = r#"{"status": "success", "data": [{"year": 1990, "country": "Italy"}]}"#;
const SECOND: &str = r#"{"status": "success", "data": [
    {"year": 2000, "country": "Monaco"},
    {"year": 2001, "country": "Brazil"}
]}"#;

fn engine() -> PcpEngine<NullRenderer> {
    PcpEngine::new(
        NullRenderer::default(),
        PcpEngineConfig::new(Viewport::new(1000, 500)),
    )
    .expect("engine init")
}

#[test]
fn superseded_load_is_discarded() {
    let mut engine = engine();
    let first = engine.begin_load();
    let second = engine.begin_load();
    assert!(second.generation() > first.generation());

    assert!(!engine.complete_load(first, FIRST).expect("discarded"));
    assert_eq!(engine.status(), &PlotStatus::Loading);
    assert!(engine.records().is_empty());

    assert!(engine.complete_load(second, SECOND).expect("landed"));
    assert_eq!(engine.record_count(), 2);
    assert_eq!(engine.status(), &PlotStatus::Ready);
}

#[test]
fn late_response_after_newer_load_cannot_overwrite() {
    let mut engine = engine();
    let first = engine.begin_load();
    let second = engine.begin_load();
    assert!(engine.complete_load(second, SECOND).expect("landed"));

    assert!(!engine.complete_load(first, FIRST).expect("discarded"));
    assert!(!engine.fail_load(first, "timeout"));
    assert_eq!(engine.record_count(), 2);
    assert_eq!(engine.status(), &PlotStatus::Ready);
}

#[test]
fn ticket_settles_once() {
    let mut engine = engine();
    let ticket = engine.begin_load();
    assert!(engine.complete_load(ticket, SECOND).expect("landed"));
    assert!(!engine.complete_load(ticket, FIRST).expect("already settled"));
    assert_eq!(engine.record_count(), 2);
}

#[test]
fn error_status_fails_load_with_message() {
    let mut engine = engine();
    let ticket = engine.begin_load();
    let err = engine
        .complete_load(ticket, r#"{"status": "error", "message": "db offline"}"#)
        .expect_err("load must fail");
    assert!(matches!(err, PcpError::Load(ref message) if message == "db offline"));
    assert_eq!(
        engine.status(),
        &PlotStatus::Failed {
            message: "db offline".to_owned()
        }
    );

    let frame = engine.build_render_frame();
    assert!(frame.paths.is_empty());
    assert!(frame.lines.is_empty());
    assert!(frame.rects.is_empty());
    assert_eq!(frame.texts.len(), 1);
    assert_eq!(frame.texts[0].text, "Failed to load data: db offline");
}

#[test]
fn malformed_body_fails_load() {
    let mut engine = engine();
    let ticket = engine.begin_load();
    let err = engine
        .complete_load(ticket, "<html>502</html>")
        .expect_err("malformed body");
    assert!(matches!(err, PcpError::Load(_)));
    assert!(matches!(engine.status(), PlotStatus::Failed { .. }));
    assert!(engine.visible_records().is_empty());
}

#[test]
fn explicit_failure_replaces_previous_plot() {
    let mut engine = engine();
    let ticket = engine.begin_load();
    engine.complete_load(ticket, SECOND).expect("landed");
    engine.render().expect("render");
    assert_eq!(engine.renderer().last_path_count, 2);

    let retry = engine.begin_load();
    assert!(engine.fail_load(retry, "network unreachable"));
    engine.render().expect("render failure");
    assert_eq!(engine.renderer().last_path_count, 0);
    assert_eq!(engine.renderer().last_text_count, 1);
    assert!(engine.records().is_empty());
}

#[test]
fn loading_frame_shows_only_status_text() {
    let mut engine = engine();
    let _ticket = engine.begin_load();
    let frame = engine.build_render_frame();
    assert_eq!(frame.texts.len(), 1);
    assert_eq!(frame.texts[0].text, "Loading data...");
    assert!(frame.lines.is_empty());
}

#[test]
fn reload_resets_brushes_and_axis_order() {
    let mut engine = engine();
    let ticket = engine.begin_load();
    engine.complete_load(ticket, SECOND).expect("landed");
    engine.set_brush(Field::Year, 0.0, 50.0).expect("brush");
    let x = engine.axis(Field::Year).expect("axis").screen_x;
    let origin = engine.plot_area().origin_x;
    engine
        .pointer_down_on_axis(Field::Year, origin + x)
        .expect("drag");
    engine.drag_move(origin - 50.0).expect("drag move");
    engine.pointer_up();
    assert_eq!(engine.axis_order()[0], Field::Year);

    let reload = engine.begin_load();
    engine.complete_load(reload, FIRST).expect("landed");
    assert_eq!(engine.axis_order()[0], Field::CircuitType);
    assert!(engine.brushed_axes().is_empty());
}

#[test]
fn set_records_supersedes_in_flight_load() {
    let mut engine = engine();
    let ticket = engine.begin_load();
    engine.set_records(Vec::new()).expect("records");
    assert!(!engine.load_in_flight());
    assert!(!engine.complete_load(ticket, SECOND).expect("discarded"));
    assert_eq!(engine.record_count(), 0);
}

#[test]
fn mistyped_values_drop_only_their_point() {
    let mut engine = engine();
    let ticket = engine.begin_load();
    let body = r#"{"status": "success", "data": [
        {"year": "2020", "constructor": 123, "country": "Italy"},
        {"year": 2021, "constructor": "Ferrari", "country": "Monaco"}
    ]}"#;
    assert!(engine.complete_load(ticket, body).expect("landed"));
    assert_eq!(engine.status(), &PlotStatus::Ready);
    assert_eq!(engine.record_count(), 2);

    let first = &engine.records()[0];
    assert_eq!(first.year, None);
    assert_eq!(first.constructor, None);
    assert_eq!(first.country.as_deref(), Some("Italy"));
    let categories = engine
        .snapshot()
        .axes
        .into_iter()
        .find(|axis| axis.field == Field::Constructor)
        .expect("constructor axis")
        .categories;
    assert_eq!(categories, vec!["Ferrari".to_owned()]);
}
