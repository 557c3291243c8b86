//! Zentrale Konfiguration für den Kurveneditor.
//!
//! `EditorOptions` enthält alle konfigurierbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kurve ───────────────────────────────────────────────────────────

/// Abtastpunkte pro Bézier-Segment (inkl. Anfangs- und Endpunkt).
pub const SAMPLES_PER_SEGMENT: usize = 10;

// ── Darstellung ─────────────────────────────────────────────────────

/// Durchmesser der Kontrollpunkte in Pixeln.
pub const POINT_SIZE_PX: f32 = 10.0;
/// Durchmesser der Tangenten-Handles in Pixeln.
pub const HANDLE_SIZE_PX: f32 = 7.0;
/// Linienstärke von Kurve und Polyline in Pixeln.
pub const LINE_WIDTH_PX: f32 = 2.0;
/// Hintergrundfarbe (RGBA: Weiß).
pub const BACKGROUND_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der Kontrollpunkte (RGBA: Schwarz).
pub const POINT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe des selektierten Punkts (RGBA: Magenta).
pub const SELECTED_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe der Bézier-Kurve (RGBA: Blau).
pub const CURVE_COLOR: [f32; 4] = [0.1, 0.3, 0.9, 1.0];
/// Farbe der Kontroll-Polyline (RGBA: Grau).
pub const POLYLINE_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
/// Farbe der Tangenten-Stummel (RGBA: Orange).
pub const TANGENT_COLOR: [f32; 4] = [1.0, 0.5, 0.1, 1.0];
/// Farbe der Handle-Spitzen (RGBA: Rot).
pub const HANDLE_COLOR: [f32; 4] = [0.9, 0.1, 0.1, 1.0];

/// Name der Optionen-Datei neben der Binary.
const CONFIG_FILE_NAME: &str = "curve_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle Editor-Optionen.
/// Wird als `curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Abtastpunkte pro Segment (mindestens 2; größer = glatter, linearer Aufwand)
    pub samples_per_segment: usize,
    /// Bézier-Kurve zeichnen (sonst die lineare Kontroll-Polyline)
    pub draw_piecewise_bezier: bool,
    /// Tangenten-Stummel und Handles anzeigen
    pub show_tangent_handles: bool,

    // ── Darstellung ─────────────────────────────────────────────
    /// Durchmesser der Kontrollpunkte in Pixeln
    pub point_size_px: f32,
    /// Durchmesser der Handle-Spitzen in Pixeln
    pub handle_size_px: f32,
    /// Linienstärke in Pixeln
    pub line_width_px: f32,
    /// Hintergrundfarbe
    pub background_color: [f32; 4],
    /// Farbe der Kontrollpunkte
    pub point_color: [f32; 4],
    /// Farbe selektierter Punkte/Handles
    pub selected_color: [f32; 4],
    /// Farbe der Bézier-Kurve
    pub curve_color: [f32; 4],
    /// Farbe der Kontroll-Polyline
    pub polyline_color: [f32; 4],
    /// Farbe der Tangenten-Stummel
    pub tangent_color: [f32; 4],
    /// Farbe der Handle-Spitzen
    pub handle_color: [f32; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            samples_per_segment: SAMPLES_PER_SEGMENT,
            draw_piecewise_bezier: true,
            show_tangent_handles: true,

            point_size_px: POINT_SIZE_PX,
            handle_size_px: HANDLE_SIZE_PX,
            line_width_px: LINE_WIDTH_PX,
            background_color: BACKGROUND_COLOR,
            point_color: POINT_COLOR,
            selected_color: SELECTED_COLOR,
            curve_color: CURVE_COLOR,
            polyline_color: POLYLINE_COLOR,
            tangent_color: TANGENT_COLOR,
            handle_color: HANDLE_COLOR,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML; fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        if opts.samples_per_segment < crate::shared::curve_geometry::MIN_SAMPLES_PER_SEGMENT {
            log::warn!(
                "samples_per_segment = {} zu klein, wird beim Abtasten auf 2 angehoben",
                opts.samples_per_segment
            );
        }
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }
}
