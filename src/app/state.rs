//! Application State — zentrale Datenhaltung einer Editier-Sitzung.
//!
//! Kein globaler Zustand: `AppState` besitzt Punkte, Gesten-Zustand,
//! Geometrie-Cache und Optionen und wird explizit durchgereicht.

mod app_state;
mod derived_curve;
mod session;

pub use app_state::AppState;
pub use derived_curve::DerivedCurve;
pub use session::{DragTarget, EditPhase, EditSession};
