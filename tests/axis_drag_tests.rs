use dnf_pcp::PcpError;
use dnf_pcp::api::{InvalidationLevel, PcpEngine, PcpEngineConfig};
use dnf_pcp::core::{Field, Viewport};
use dnf_pcp::interaction::DragState;
use dnf_pcp::render::NullRenderer;

const DEFAULT_ORDER: [Field; 9] = [
    Field::CircuitType,
    Field::ReasonRetired,
    Field::Constructor,
    Field::Engine,
    Field::Tyre,
    Field::Country,
    Field::Year,
    Field::Grid,
    Field::Laps,
];

fn engine() -> PcpEngine<NullRenderer> {
    // Plot area: origin (80, 60), 1040 x 460, axis slots every 130 px.
    PcpEngine::new(
        NullRenderer::default(),
        PcpEngineConfig::new(Viewport::new(1200, 600)),
    )
    .expect("engine init")
}

fn surface_x(engine: &PcpEngine<NullRenderer>, local_x: f64) -> f64 {
    engine.plot_area().origin_x + local_x
}

#[test]
fn dragging_first_axis_past_second_swaps_them() {
    let mut engine = engine();
    let down = surface_x(&engine, 0.0);
    assert!(
        engine
            .pointer_down_on_axis(Field::CircuitType, down)
            .expect("known axis")
    );
    assert!(engine.drag_state().is_dragging());
    engine.clear_pending_invalidation();

    let target = surface_x(&engine, 200.0);
    assert!(engine.drag_move(target).expect("drag move"));
    assert_eq!(engine.axis(Field::CircuitType).expect("axis").screen_x, 200.0);
    assert_eq!(engine.pending_invalidation(), InvalidationLevel::Geometry);

    assert!(engine.pointer_up());
    assert_eq!(engine.drag_state(), DragState::Idle);

    let order = engine.axis_order();
    assert_eq!(order[0], Field::ReasonRetired);
    assert_eq!(order[1], Field::CircuitType);
    assert_eq!(&order[2..], &DEFAULT_ORDER[2..]);
    assert_eq!(engine.axis(Field::ReasonRetired).expect("axis").screen_x, 0.0);
    assert_eq!(engine.axis(Field::CircuitType).expect("axis").screen_x, 130.0);
}

#[test]
fn pointer_offset_is_preserved_during_drag() {
    let mut engine = engine();
    let grab = surface_x(&engine, 130.0 + 12.0);
    engine
        .pointer_down_on_axis(Field::ReasonRetired, grab)
        .expect("known axis");

    engine.drag_move(surface_x(&engine, 50.0)).expect("drag move");
    assert_eq!(engine.axis(Field::ReasonRetired).expect("axis").screen_x, 38.0);
    assert_eq!(engine.axis_order()[0], Field::CircuitType);

    engine.drag_move(surface_x(&engine, 5.0)).expect("drag move");
    assert_eq!(engine.axis(Field::ReasonRetired).expect("axis").screen_x, -7.0);
    assert_eq!(engine.axis_order()[0], Field::ReasonRetired);
}

#[test]
fn drag_beyond_plot_edges_is_not_clamped() {
    let mut engine = engine();
    engine
        .pointer_down_on_axis(Field::Laps, surface_x(&engine, 1040.0))
        .expect("known axis");
    engine.drag_move(surface_x(&engine, -300.0)).expect("drag move");
    assert_eq!(engine.axis(Field::Laps).expect("axis").screen_x, -300.0);
    assert!(engine.pointer_up());

    let order = engine.axis_order();
    assert_eq!(order[0], Field::Laps);
    assert_eq!(engine.axis(Field::Laps).expect("axis").screen_x, 0.0);
    assert_eq!(engine.axis(Field::Grid).expect("axis").screen_x, 1040.0);
}

#[test]
fn equal_screen_x_keeps_previous_order() {
    let mut engine = engine();
    engine
        .pointer_down_on_axis(Field::CircuitType, surface_x(&engine, 0.0))
        .expect("known axis");
    assert!(!engine.drag_move(surface_x(&engine, 130.0)).expect("drag move"));
    assert_eq!(engine.axis_order(), DEFAULT_ORDER.to_vec());
}

#[test]
fn second_pointer_down_during_drag_is_ignored() {
    let mut engine = engine();
    assert!(
        engine
            .pointer_down_on_axis(Field::Engine, surface_x(&engine, 390.0))
            .expect("known axis")
    );
    assert!(
        !engine
            .pointer_down_on_axis(Field::Year, surface_x(&engine, 780.0))
            .expect("known axis")
    );

    let engine_index = engine
        .axes()
        .iter()
        .position(|axis| axis.field() == Field::Engine)
        .expect("engine axis");
    assert_eq!(engine.drag_state().dragged_axis(), Some(engine_index));
}

#[test]
fn pointer_up_while_idle_is_noop() {
    let mut engine = engine();
    engine.clear_pending_invalidation();
    assert!(!engine.pointer_up());
    assert!(!engine.drag_move(300.0).expect("idle move"));
    assert!(!engine.has_pending_invalidation());
    assert_eq!(engine.axis_order(), DEFAULT_ORDER.to_vec());
}

#[test]
fn cancel_drag_restores_pre_drag_order() {
    let mut engine = engine();
    engine
        .pointer_down_on_axis(Field::CircuitType, surface_x(&engine, 0.0))
        .expect("known axis");
    engine.drag_move(surface_x(&engine, 600.0)).expect("drag move");
    assert_ne!(engine.axis_order(), DEFAULT_ORDER.to_vec());

    assert!(engine.cancel_drag());
    assert_eq!(engine.drag_state(), DragState::Idle);
    assert_eq!(engine.axis_order(), DEFAULT_ORDER.to_vec());
    assert_eq!(engine.axis(Field::CircuitType).expect("axis").screen_x, 0.0);
    assert!(!engine.cancel_drag());
}

#[test]
fn non_finite_pointer_is_rejected_without_moving_axes() {
    let mut engine = engine();
    let err = engine
        .pointer_down_on_axis(Field::CircuitType, f64::NAN)
        .expect_err("nan pointer");
    assert!(matches!(err, PcpError::InvalidData(_)));
    assert_eq!(engine.drag_state(), DragState::Idle);

    engine
        .pointer_down_on_axis(Field::CircuitType, surface_x(&engine, 0.0))
        .expect("known axis");
    engine.clear_pending_invalidation();
    for pointer in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = engine.drag_move(pointer).expect_err("non-finite pointer");
        assert!(matches!(err, PcpError::InvalidData(_)));
    }
    assert_eq!(engine.axis(Field::CircuitType).expect("axis").screen_x, 0.0);
    assert_eq!(engine.axis_order(), DEFAULT_ORDER.to_vec());
    assert!(!engine.has_pending_invalidation());
    assert!(engine.drag_state().is_dragging());

    engine.render().expect("render during drag");
    assert!(engine.pointer_up());
    assert_eq!(engine.axis_order(), DEFAULT_ORDER.to_vec());
}

#[test]
fn unknown_axis_is_rejected() {
    let mut engine = engine();
    let err = engine
        .pointer_down_on_axis(Field::Status, 100.0)
        .expect_err("status has no axis");
    assert!(matches!(err, PcpError::UnknownAxis(key) if key == "status"));
    assert_eq!(engine.drag_state(), DragState::Idle);
}

#[test]
fn header_hit_test_finds_axis_under_pointer() {
    let engine = engine();
    // Header band spans y in [22, 52] above the plot top at 60.
    assert_eq!(
        engine.axis_at_header(surface_x(&engine, 130.0 + 10.0), 30.0),
        Some(Field::ReasonRetired)
    );
    assert_eq!(
        engine.axis_at_header(surface_x(&engine, 1040.0 - 10.0), 45.0),
        Some(Field::Laps)
    );
    assert_eq!(engine.axis_at_header(surface_x(&engine, 130.0), 10.0), None);
    assert_eq!(engine.axis_at_header(surface_x(&engine, 130.0), 300.0), None);
    assert_eq!(engine.axis_at_header(surface_x(&engine, 1140.0), 30.0), None);
}

#[test]
fn order_is_a_permutation_after_many_drags() {
    let mut engine = engine();
    let moves = [
        (Field::Year, 10.0),
        (Field::CircuitType, 900.0),
        (Field::Country, 455.0),
        (Field::Grid, -40.0),
    ];
    for (field, target) in moves {
        let x = engine.axis(field).expect("axis").screen_x;
        engine
            .pointer_down_on_axis(field, surface_x(&engine, x))
            .expect("known axis");
        engine.drag_move(surface_x(&engine, target)).expect("drag move");
        engine.pointer_up();
    }

    let mut orders: Vec<usize> = engine.axes().iter().map(|axis| axis.order).collect();
    orders.sort_unstable();
    assert_eq!(orders, (0..9).collect::<Vec<_>>());
    let area = engine.plot_area();
    for axis in engine.axes() {
        assert_eq!(axis.screen_x, area.slot_x(axis.order, 9));
    }
}
