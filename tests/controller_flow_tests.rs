use approx::assert_relative_eq;
use curve_editor::{AppCommand, AppController, AppIntent, AppState, EditPhase};
use glam::Vec2;

fn press(controller: &mut AppController, state: &mut AppState, x: f32, y: f32, modifier: bool) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerPressed {
                pos: Vec2::new(x, y),
                modifier,
            },
        )
        .expect("PointerPressed sollte ohne Fehler durchlaufen");
}

fn drag(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerDragged {
                pos: Vec2::new(x, y),
            },
        )
        .expect("PointerDragged sollte ohne Fehler durchlaufen");
}

fn release(controller: &mut AppController, state: &mut AppState) {
    controller
        .handle_intent(state, AppIntent::PointerReleased)
        .expect("PointerReleased sollte ohne Fehler durchlaufen");
}

/// Drei Punkte gesetzt, Eingabe per Rechtsklick beendet.
fn three_point_session() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    press(&mut controller, &mut state, -0.5, 0.0, false);
    release(&mut controller, &mut state);
    press(&mut controller, &mut state, 0.0, 0.5, false);
    release(&mut controller, &mut state);
    press(&mut controller, &mut state, 0.5, 0.0, false);
    release(&mut controller, &mut state);
    controller
        .handle_intent(&mut state, AppIntent::SecondaryClicked)
        .expect("SecondaryClicked sollte ohne Fehler durchlaufen");
    (controller, state)
}

#[test]
fn test_clicks_append_points_until_secondary_click() {
    let (mut controller, mut state) = three_point_session();

    assert_eq!(state.point_count(), 3);
    assert_eq!(state.session.phase(), EditPhase::EditingPoints);

    // Nach dem Wechsel wird nicht mehr angehängt, sondern selektiert
    press(&mut controller, &mut state, 0.45, 0.05, false);
    assert_eq!(state.point_count(), 3);
    assert_eq!(state.session.selected_point(), Some(2));
}

#[test]
fn test_scenario_curve_has_nineteen_vertices() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    press(&mut controller, &mut state, 0.0, 0.0, false);
    press(&mut controller, &mut state, 1.0, 1.0, false);
    press(&mut controller, &mut state, 2.0, 0.0, false);

    let scene = controller.build_render_scene(&mut state, [640.0, 640.0]);
    let curve = &scene.geometry.bezier_polyline;
    assert_eq!(curve.len(), 19);
    assert_eq!(curve[0], [0.0, 0.0, 0.0]);
    assert_relative_eq!(curve[18][0], 2.0, epsilon = 1e-6);
    assert_relative_eq!(curve[18][1], 0.0, epsilon = 1e-6);
}

#[test]
fn test_plain_drag_moves_selected_point() {
    let (mut controller, mut state) = three_point_session();

    press(&mut controller, &mut state, 0.05, 0.45, false);
    drag(&mut controller, &mut state, 0.1, 0.8);
    release(&mut controller, &mut state);

    assert_eq!(state.points.point(1), Some(Vec2::new(0.1, 0.8)));
    // Punkt-Auswahl bleibt nach dem Loslassen bestehen
    assert_eq!(state.session.selected_point(), Some(1));
}

#[test]
fn test_modifier_drag_sets_tangent_override_through_handle() {
    let (mut controller, mut state) = three_point_session();

    press(&mut controller, &mut state, 0.0, 0.5, true);
    drag(&mut controller, &mut state, 0.2, 0.6);

    let tangent = state
        .points
        .tangent_override(1)
        .expect("Override sollte gesetzt sein");
    assert_relative_eq!(tangent.x, 0.6, epsilon = 1e-5);
    assert_relative_eq!(tangent.y, 0.3, epsilon = 1e-5);

    let scene = controller.build_render_scene(&mut state, [640.0, 640.0]);
    let handle = scene.geometry.tangent_handles[1];
    assert_relative_eq!(handle[0], 0.2, epsilon = 1e-5);
    assert_relative_eq!(handle[1], 0.6, epsilon = 1e-5);

    // Der Punkt selbst bleibt unverändert
    assert_eq!(state.points.point(1), Some(Vec2::new(0.0, 0.5)));
}

#[test]
fn test_release_ends_tangent_edit_but_keeps_point_selection() {
    let (mut controller, mut state) = three_point_session();

    press(&mut controller, &mut state, -0.5, 0.0, false);
    press(&mut controller, &mut state, 0.5, 0.0, true);
    assert_eq!(state.session.selected_tangent(), Some(2));
    release(&mut controller, &mut state);

    assert_eq!(state.session.selected_tangent(), None);
    assert_eq!(state.session.selected_point(), Some(0));

    // Folgender Drag bewegt wieder den selektierten Punkt
    drag(&mut controller, &mut state, -0.6, -0.1);
    assert_eq!(state.points.point(0), Some(Vec2::new(-0.6, -0.1)));
    assert_eq!(state.points.tangent_override(2), None);
}

#[test]
fn test_reset_tangent_reverts_to_derived_handle() {
    let (mut controller, mut state) = three_point_session();

    press(&mut controller, &mut state, 0.0, 0.5, true);
    drag(&mut controller, &mut state, 0.0, 0.9);
    release(&mut controller, &mut state);
    press(&mut controller, &mut state, 0.0, 0.5, false);

    controller
        .handle_intent(&mut state, AppIntent::ResetTangentRequested)
        .expect("ResetTangentRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.points.tangent_override(1), None);
    let scene = controller.build_render_scene(&mut state, [640.0, 640.0]);
    // Abgeleitet: 0.5 * ((0.5, 0) - (-0.5, 0)) = (0.5, 0) → Handle (0.5/3, 0.5)
    let handle = scene.geometry.tangent_handles[1];
    assert_relative_eq!(handle[0], 0.5 / 3.0, epsilon = 1e-6);
    assert_relative_eq!(handle[1], 0.5, epsilon = 1e-6);
}

#[test]
fn test_out_of_range_move_is_rejected_without_corruption() {
    let (mut controller, mut state) = three_point_session();
    let before: Vec<Vec2> = state.points.positions().to_vec();

    let result = controller.handle_command(
        &mut state,
        AppCommand::MovePoint {
            index: 7,
            pos: Vec2::new(0.9, 0.9),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.points.positions(), before.as_slice());
}

#[test]
fn test_out_of_range_tangent_is_rejected() {
    let (mut controller, mut state) = three_point_session();

    let result = controller.handle_command(
        &mut state,
        AppCommand::SetTangentHandle {
            index: 3,
            handle_pos: Vec2::ZERO,
        },
    );

    assert!(result.is_err());
    assert!(state.points.overrides().iter().all(Option::is_none));
}

#[test]
fn test_commands_are_logged_in_order() {
    let (_controller, state) = three_point_session();

    let entries = state.command_log.entries();
    assert!(matches!(entries[0], AppCommand::AppendPoint { .. }));
    match entries.last() {
        Some(AppCommand::FinishAddingPoints) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_exit_requested_sets_exit_flag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
}

#[test]
fn test_scene_is_not_rebuilt_without_edits() {
    let (controller, mut state) = three_point_session();

    let first = controller.build_render_scene(&mut state, [640.0, 640.0]);
    let second = controller.build_render_scene(&mut state, [640.0, 640.0]);

    assert_eq!(state.curve.rebuild_count(), 1);
    assert_eq!(first.geometry, second.geometry);
}
