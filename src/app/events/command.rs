use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neuen Kontrollpunkt anhängen
    AppendPoint { pos: glam::Vec2 },
    /// Nächsten Punkt zur Position selektieren
    SelectNearestPoint { pos: glam::Vec2 },
    /// Tangente des nächsten Punkts zur Position selektieren
    SelectNearestTangent { pos: glam::Vec2 },
    /// Selektierten Punkt verschieben
    MovePoint { index: usize, pos: glam::Vec2 },
    /// Tangenten-Override so setzen, dass der Handle auf `handle_pos` liegt
    SetTangentHandle { index: usize, handle_pos: glam::Vec2 },
    /// Tangenten-Override eines Punkts entfernen
    ClearTangent { index: usize },
    /// Tangenten-Auswahl aufheben (Pointer losgelassen)
    ReleaseTangentSelection,
    /// Von `AddingPoints` nach `EditingPoints` wechseln
    FinishAddingPoints,
    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
    /// Optionen als TOML neben der Binary speichern
    SaveOptions,
    /// Anwendung beenden
    RequestExit,
}
