//! Viewport-Input-Handling: Maus-Events und Shortcuts → AppIntent.
//!
//! Pointer-Positionen werden hier in normalisierte Geräte-Koordinaten
//! umgerechnet; die App-Schicht sieht nur noch NDC.

use crate::app::AppIntent;
use glam::Vec2;

/// Bildschirmposition → NDC: `x' = 2·(sx/W) − 1`, `y' = 1 − 2·(sy/H)`.
///
/// `(sx, sy)` ist relativ zur linken oberen Ecke des Viewports.
pub fn screen_to_ndc(pos: egui::Pos2, viewport: egui::Rect) -> Vec2 {
    let sx = pos.x - viewport.min.x;
    let sy = pos.y - viewport.min.y;
    Vec2::new(
        2.0 * (sx / viewport.width()) - 1.0,
        1.0 - 2.0 * (sy / viewport.height()),
    )
}

/// NDC-Tripel → Bildschirmposition (Umkehrung von `screen_to_ndc`, z wird ignoriert).
pub fn ndc_to_screen(p: [f32; 3], viewport: egui::Rect) -> egui::Pos2 {
    egui::pos2(
        viewport.min.x + (p[0] + 1.0) * 0.5 * viewport.width(),
        viewport.min.y + (1.0 - p[1]) * 0.5 * viewport.height(),
    )
}

/// Verwaltet den Input-Zustand für das Viewport (laufender Primär-Drag)
#[derive(Default)]
pub struct InputState {
    /// Primärtaste wurde im Viewport gedrückt und noch nicht losgelassen
    primary_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            primary_down: false,
        }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Drücken erzeugt sofort `PointerPressed` (Punkt setzen bzw. wählen),
    /// Bewegung bei gehaltener Taste `PointerDragged`, Loslassen `PointerReleased`.
    /// Shift gilt als Tangenten-Modifier.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport: egui::Rect,
    ) -> Vec<AppIntent> {
        let mut events = collect_keyboard_intents(ui);

        let (pressed, released, modifiers, pointer_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.modifiers,
                i.pointer.interact_pos(),
            )
        });

        if pressed && response.contains_pointer() {
            if let Some(pos) = pointer_pos {
                self.primary_down = true;
                events.push(AppIntent::PointerPressed {
                    pos: screen_to_ndc(pos, viewport),
                    modifier: modifiers.shift,
                });
            }
        }

        if self.primary_down
            && response.dragged_by(egui::PointerButton::Primary)
            && response.drag_delta() != egui::Vec2::ZERO
        {
            if let Some(pos) = pointer_pos {
                events.push(AppIntent::PointerDragged {
                    pos: screen_to_ndc(pos, viewport),
                });
            }
        }

        if released && self.primary_down {
            self.primary_down = false;
            events.push(AppIntent::PointerReleased);
        }

        if response.secondary_clicked() {
            events.push(AppIntent::SecondaryClicked);
        }

        events
    }
}

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// - `R`: Tangente des selektierten Punkts zurücksetzen
/// - `Enter`: Punkt-Eingabe beenden
/// - `Escape` / `Ctrl+Q`: Beenden
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_r, key_enter, key_q, key_escape) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::Q),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if key_r && !modifiers.command {
        events.push(AppIntent::ResetTangentRequested);
    }
    if key_enter {
        events.push(AppIntent::FinishAddingRequested);
    }
    if key_escape || (modifiers.command && key_q) {
        events.push(AppIntent::ExitRequested);
    }

    events
}
