//! Gesten-Zustandsmaschine einer Editier-Sitzung.
//!
//! ```text
//! AddingPoints ──Rechtsklick──▶ EditingPoints (terminal)
//! ```
//!
//! In `EditingPoints` wählt ein normaler Klick den nächsten Punkt, ein Klick
//! mit Modifier dessen Tangente. Loslassen hebt nur die Tangenten-Auswahl auf.

/// Phase der Sitzung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPhase {
    /// Linksklick hängt neue Punkte an
    #[default]
    AddingPoints,
    /// Punkte und Tangenten per Drag bearbeiten
    EditingPoints,
}

/// Welches Element wird bei einem Drag verändert?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Position des Punkts mit diesem Index
    Point(usize),
    /// Tangenten-Override des Punkts mit diesem Index
    Tangent(usize),
}

/// Phase + aktuelle Auswahl
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    phase: EditPhase,
    selected_point: Option<usize>,
    selected_tangent: Option<usize>,
}

impl EditSession {
    /// Neue Sitzung in `AddingPoints` ohne Auswahl.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn is_adding(&self) -> bool {
        self.phase == EditPhase::AddingPoints
    }

    pub fn is_editing(&self) -> bool {
        self.phase == EditPhase::EditingPoints
    }

    pub fn selected_point(&self) -> Option<usize> {
        self.selected_point
    }

    pub fn selected_tangent(&self) -> Option<usize> {
        self.selected_tangent
    }

    /// Wechselt nach `EditingPoints`. Gibt `true` zurück, wenn sich die Phase geändert hat.
    pub fn finish_adding(&mut self) -> bool {
        if self.is_editing() {
            return false;
        }
        self.phase = EditPhase::EditingPoints;
        true
    }

    /// Setzt die Punkt-Auswahl (normaler Klick). Ignoriert außerhalb von `EditingPoints`.
    pub fn select_point(&mut self, index: Option<usize>) {
        if self.is_editing() {
            self.selected_point = index;
        }
    }

    /// Setzt die Tangenten-Auswahl (Klick mit Modifier). Punkt-Auswahl bleibt unverändert.
    pub fn select_tangent(&mut self, index: Option<usize>) {
        if self.is_editing() {
            self.selected_tangent = index;
        }
    }

    /// Pointer losgelassen: Tangenten-Auswahl aufheben, Punkt-Auswahl behalten.
    pub fn release(&mut self) {
        self.selected_tangent = None;
    }

    /// Ziel eines laufenden Drags; Tangente hat Vorrang vor dem Punkt.
    pub fn drag_target(&self) -> Option<DragTarget> {
        if !self.is_editing() {
            return None;
        }
        self.selected_tangent
            .map(DragTarget::Tangent)
            .or(self.selected_point.map(DragTarget::Point))
    }
}
