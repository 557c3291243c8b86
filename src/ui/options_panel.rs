//! Options-Fenster: Status, Anzeige-Optionen, Punkt-Eingabe beenden.

use crate::app::{AppIntent, AppState};

/// Zeigt das Options-Fenster und gibt die ausgelösten Intents zurück.
pub fn show_options_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let mut options = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .resizable(false)
        .default_pos(egui::pos2(12.0, 12.0))
        .show(ctx, |ui| {
            ui.label(format!("Kontrollpunkte: {}", state.point_count()));
            ui.label(format!(
                "Samples pro Segment: {}",
                state.options.samples_per_segment
            ));

            if state.session.is_adding() {
                ui.label("Modus: Punkte hinzufügen (Linksklick)");
            } else {
                ui.label("Modus: Bearbeiten");
            }

            ui.separator();
            changed |= ui
                .checkbox(&mut options.draw_piecewise_bezier, "Bézier-Kurve zeichnen")
                .changed();
            changed |= ui
                .checkbox(&mut options.show_tangent_handles, "Tangenten anzeigen")
                .changed();

            ui.separator();
            if ui
                .add_enabled(
                    state.session.is_adding(),
                    egui::Button::new("Punkt-Eingabe beenden"),
                )
                .clicked()
            {
                events.push(AppIntent::FinishAddingRequested);
            }
            if ui.button("Optionen speichern").clicked() {
                events.push(AppIntent::SaveOptionsRequested);
            }

            ui.separator();
            ui.small("Rechtsklick / Enter: Eingabe beenden");
            ui.small("Drag: Punkt verschieben");
            ui.small("Shift + Drag: Tangente ziehen");
            ui.small("R: Tangente zurücksetzen");
            ui.small("Escape / Ctrl+Q: Beenden");
        });

    if changed {
        events.push(AppIntent::OptionsChanged { options });
    }
    events
}
