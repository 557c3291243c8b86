//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Punkte & Tangenten ===
            AppCommand::AppendPoint { pos } => handlers::editing::append_point(state, pos),
            AppCommand::SelectNearestPoint { pos } => {
                handlers::editing::select_nearest_point(state, pos)
            }
            AppCommand::SelectNearestTangent { pos } => {
                handlers::editing::select_nearest_tangent(state, pos)
            }
            AppCommand::MovePoint { index, pos } => {
                handlers::editing::move_point(state, index, pos)?
            }
            AppCommand::SetTangentHandle { index, handle_pos } => {
                handlers::editing::set_tangent_handle(state, index, handle_pos)?
            }
            AppCommand::ClearTangent { index } => handlers::editing::clear_tangent(state, index)?,

            // === Sitzung & Anwendungssteuerung ===
            AppCommand::ReleaseTangentSelection => {
                handlers::session::release_tangent_selection(state)
            }
            AppCommand::FinishAddingPoints => handlers::session::finish_adding(state),
            AppCommand::ApplyOptions { options } => handlers::session::apply_options(state, options),
            AppCommand::SaveOptions => handlers::session::save_options(state)?,
            AppCommand::RequestExit => handlers::session::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    ///
    /// Berechnet die Kurve neu, falls seit dem letzten Frame editiert wurde.
    pub fn build_render_scene(&self, state: &mut AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
