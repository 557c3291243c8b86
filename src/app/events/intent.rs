use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Positionen liegen bereits in normalisierten Geräte-Koordinaten vor.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primäre Maustaste gedrückt (Klick oder Drag-Beginn)
    PointerPressed {
        pos: glam::Vec2,
        /// Modifier gehalten → Tangente statt Punkt wählen
        modifier: bool,
    },
    /// Pointer bei gedrückter primärer Taste bewegt
    PointerDragged { pos: glam::Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased,
    /// Rechtsklick im Viewport
    SecondaryClicked,
    /// Punkt-Eingabe beenden (Button im Options-Fenster)
    FinishAddingRequested,
    /// Tangenten-Override des selektierten Punkts entfernen
    ResetTangentRequested,
    /// Optionen im Options-Fenster geändert
    OptionsChanged { options: EditorOptions },
    /// Aktuelle Optionen in die TOML-Datei schreiben
    SaveOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
