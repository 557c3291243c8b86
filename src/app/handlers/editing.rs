//! Handler für Punkt- und Tangenten-Bearbeitung.

use crate::app::AppState;
use crate::core::PointStoreError;
use crate::shared::curve_geometry::tangent_from_handle;
use anyhow::Context;
use glam::Vec2;

/// Hängt einen neuen Kontrollpunkt an.
pub fn append_point(state: &mut AppState, pos: Vec2) {
    let index = state.points.append(pos.x, pos.y);
    log::debug!("Punkt {} hinzugefügt bei ({:.3}, {:.3})", index, pos.x, pos.y);
}

/// Selektiert den nächsten Punkt (normaler Klick).
pub fn select_nearest_point(state: &mut AppState, pos: Vec2) {
    let index = state.points.nearest(pos.x, pos.y);
    state.session.select_point(index);
    log::debug!("Punkt-Auswahl: {:?}", index);
}

/// Selektiert die Tangente des nächsten Punkts (Klick mit Modifier).
pub fn select_nearest_tangent(state: &mut AppState, pos: Vec2) {
    let index = state.points.nearest(pos.x, pos.y);
    state.session.select_tangent(index);
    log::debug!("Tangenten-Auswahl: {:?}", index);
}

/// Verschiebt einen Punkt auf `pos`.
pub fn move_point(state: &mut AppState, index: usize, pos: Vec2) -> anyhow::Result<()> {
    state
        .points
        .move_point(index, pos.x, pos.y)
        .with_context(|| format!("Punkt {} konnte nicht verschoben werden", index))
}

/// Setzt den Tangenten-Override so, dass der Handle `P + T/3` auf `handle_pos` liegt.
pub fn set_tangent_handle(
    state: &mut AppState,
    index: usize,
    handle_pos: Vec2,
) -> anyhow::Result<()> {
    let point = state
        .points
        .point(index)
        .ok_or(PointStoreError::OutOfRange {
            index,
            len: state.points.len(),
        })
        .with_context(|| format!("Tangente von Punkt {} konnte nicht gesetzt werden", index))?;
    let tangent = tangent_from_handle(point, handle_pos);
    state
        .points
        .set_tangent(index, tangent.x, tangent.y)
        .with_context(|| format!("Tangente von Punkt {} konnte nicht gesetzt werden", index))
}

/// Entfernt den Tangenten-Override eines Punkts.
pub fn clear_tangent(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    state
        .points
        .clear_tangent(index)
        .with_context(|| format!("Tangente von Punkt {} konnte nicht zurückgesetzt werden", index))?;
    log::info!("Tangente von Punkt {} zurückgesetzt (automatisch)", index);
    Ok(())
}
