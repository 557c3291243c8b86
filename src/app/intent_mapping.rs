//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier sitzt die Gesten-Disambiguierung: welche Commands ein Intent
//! auslöst, hängt von Sitzungsphase und aktueller Auswahl ab.

use super::state::DragTarget;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    let session = &state.session;
    match intent {
        AppIntent::PointerPressed { pos, modifier } => {
            if session.is_adding() {
                vec![AppCommand::AppendPoint { pos }]
            } else if modifier {
                vec![AppCommand::SelectNearestTangent { pos }]
            } else {
                vec![AppCommand::SelectNearestPoint { pos }]
            }
        }
        AppIntent::PointerDragged { pos } => match session.drag_target() {
            Some(DragTarget::Point(index)) => vec![AppCommand::MovePoint { index, pos }],
            Some(DragTarget::Tangent(index)) => vec![AppCommand::SetTangentHandle {
                index,
                handle_pos: pos,
            }],
            None => vec![],
        },
        AppIntent::PointerReleased => {
            if session.selected_tangent().is_some() {
                vec![AppCommand::ReleaseTangentSelection]
            } else {
                vec![]
            }
        }
        AppIntent::SecondaryClicked | AppIntent::FinishAddingRequested => {
            if session.is_adding() {
                vec![AppCommand::FinishAddingPoints]
            } else {
                vec![]
            }
        }
        AppIntent::ResetTangentRequested => match session.selected_point() {
            Some(index) if session.is_editing() => vec![AppCommand::ClearTangent { index }],
            _ => vec![],
        },
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
