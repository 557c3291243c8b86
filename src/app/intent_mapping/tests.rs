use crate::app::{AppCommand, AppIntent, AppState};
use glam::Vec2;

use super::map_intent_to_commands;

fn editing_state() -> AppState {
    let mut state = AppState::new();
    state.points.append(-0.5, 0.0);
    state.points.append(0.5, 0.0);
    state.session.finish_adding();
    state
}

#[test]
fn press_while_adding_maps_to_append() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos: Vec2::new(0.1, 0.2),
            modifier: true,
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::AppendPoint {
            pos: Vec2::new(0.1, 0.2)
        }]
    );
}

#[test]
fn press_while_editing_selects_point_or_tangent_by_modifier() {
    let state = editing_state();
    let pos = Vec2::new(0.4, 0.1);

    let plain = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos,
            modifier: false,
        },
    );
    assert_eq!(plain, vec![AppCommand::SelectNearestPoint { pos }]);

    let modified = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            pos,
            modifier: true,
        },
    );
    assert_eq!(modified, vec![AppCommand::SelectNearestTangent { pos }]);
}

#[test]
fn drag_without_selection_maps_to_nothing() {
    let state = editing_state();

    let commands = map_intent_to_commands(&state, AppIntent::PointerDragged { pos: Vec2::ZERO });

    assert!(commands.is_empty());
}

#[test]
fn drag_while_adding_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::PointerDragged { pos: Vec2::ZERO });

    assert!(commands.is_empty());
}

#[test]
fn drag_moves_selected_point() {
    let mut state = editing_state();
    state.session.select_point(Some(1));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDragged {
            pos: Vec2::new(0.7, 0.3),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::MovePoint {
            index: 1,
            pos: Vec2::new(0.7, 0.3)
        }]
    );
}

#[test]
fn drag_with_tangent_selection_sets_tangent_handle() {
    let mut state = editing_state();
    state.session.select_point(Some(1));
    state.session.select_tangent(Some(0));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDragged {
            pos: Vec2::new(-0.2, 0.4),
        },
    );

    assert_eq!(
        commands,
        vec![AppCommand::SetTangentHandle {
            index: 0,
            handle_pos: Vec2::new(-0.2, 0.4)
        }]
    );
}

#[test]
fn secondary_click_finishes_adding_only_once() {
    let state = AppState::new();
    let commands = map_intent_to_commands(&state, AppIntent::SecondaryClicked);
    assert_eq!(commands, vec![AppCommand::FinishAddingPoints]);

    let state = editing_state();
    let commands = map_intent_to_commands(&state, AppIntent::SecondaryClicked);
    assert!(commands.is_empty());
}

#[test]
fn release_without_tangent_selection_maps_to_nothing() {
    let mut state = editing_state();
    state.session.select_point(Some(0));

    let commands = map_intent_to_commands(&state, AppIntent::PointerReleased);

    assert!(commands.is_empty());
}

#[test]
fn reset_tangent_targets_selected_point() {
    let mut state = editing_state();
    assert!(map_intent_to_commands(&state, AppIntent::ResetTangentRequested).is_empty());

    state.session.select_point(Some(1));
    let commands = map_intent_to_commands(&state, AppIntent::ResetTangentRequested);

    assert_eq!(commands, vec![AppCommand::ClearTangent { index: 1 }]);
}
