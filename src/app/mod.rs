//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State und Gesten-Zustandsmaschine
///
/// Dieses Modul verwaltet den Zustand der Sitzung (Punkte, Auswahl, Cache).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, DerivedCurve, DragTarget, EditPhase, EditSession};
