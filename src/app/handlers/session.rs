//! Handler für Sitzungs-Übergänge, Optionen und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Beendet die Punkt-Eingabe (`AddingPoints` → `EditingPoints`).
pub fn finish_adding(state: &mut AppState) {
    if state.session.finish_adding() {
        log::info!(
            "Punkt-Eingabe beendet mit {} Punkten, Bearbeitungsmodus aktiv",
            state.points.len()
        );
    }
}

/// Hebt die Tangenten-Auswahl auf (Pointer losgelassen).
pub fn release_tangent_selection(state: &mut AppState) {
    state.session.release();
}

/// Übernimmt geänderte Optionen.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.options = options;
}

/// Persistiert die aktuellen Optionen.
pub fn save_options(state: &AppState) -> anyhow::Result<()> {
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Signalisiert dem Host, die Anwendung zu beenden.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}
