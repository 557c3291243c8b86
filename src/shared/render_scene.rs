//! Render-Szene als expliziter Übergabevertrag zwischen App und Darstellung.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.
//! Die Darstellung erhält nur flache Tripel-Sequenzen, keine Punkt-Objekte.

use super::curve_geometry::CurveGeometry;
use super::options::EditorOptions;
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Abgeleitete Geometrie (Arc für O(1)-Clone pro Frame)
    pub geometry: Arc<CurveGeometry>,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Index des selektierten Punkts (Hervorhebung)
    pub selected_point: Option<usize>,
    /// Index der selektierten Tangente (Hervorhebung)
    pub selected_tangent: Option<usize>,
    /// True solange noch Punkte per Klick hinzugefügt werden
    pub adding_points: bool,
    /// Laufzeit-Optionen für Farben, Größen, Sichtbarkeit
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve (mindestens 2 Punkte) vorhanden ist.
    pub fn has_curve(&self) -> bool {
        self.geometry.has_curve()
    }
}
