use crate::app::CommandLog;
use crate::core::PointStore;
use crate::shared::{CurveGeometry, EditorOptions};
use std::sync::Arc;

use super::{DerivedCurve, EditSession};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpunkte und Tangenten-Overrides
    pub points: PointStore,
    /// Phase und Gesten-Auswahl
    pub session: EditSession,
    /// Abgeleitete Kurvengeometrie (lazy neu berechnet)
    pub curve: DerivedCurve,
    /// Laufzeit-Optionen (Abtastrate, Farben, Größen)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            points: PointStore::new(),
            session: EditSession::new(),
            curve: DerivedCurve::new(),
            options: EditorOptions::default(),
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Aktuelle Kurvengeometrie; wird bei veralteter Eingabe neu berechnet.
    pub fn curve_geometry(&mut self) -> Arc<CurveGeometry> {
        Arc::clone(
            self.curve
                .ensure_fresh(&self.points, self.options.samples_per_segment),
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
