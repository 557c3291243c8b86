//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Einziger Konsumpunkt der abgeleiteten Geometrie: ist der Cache veraltet,
/// wird hier genau einmal komplett neu berechnet.
pub fn build(state: &mut AppState, viewport_size: [f32; 2]) -> RenderScene {
    let geometry = state.curve_geometry();

    RenderScene {
        geometry,
        viewport_size,
        selected_point: state.session.selected_point(),
        selected_tangent: state.session.selected_tangent(),
        adding_points: state.session.is_adding(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;

    #[test]
    fn build_refreshes_stale_geometry_once() {
        let mut state = AppState::new();
        state.points.append(-0.5, 0.0);
        state.points.append(0.0, 0.5);
        state.points.append(0.5, 0.0);

        let scene = build(&mut state, [640.0, 640.0]);
        assert_eq!(scene.geometry.bezier_polyline.len(), 19);
        assert_eq!(state.curve.rebuild_count(), 1);

        // Ohne Edit kein weiterer Rebuild
        let _ = build(&mut state, [640.0, 640.0]);
        assert_eq!(state.curve.rebuild_count(), 1);
    }

    #[test]
    fn build_follows_configured_samples() {
        let mut state = AppState::new();
        state.points.append(-0.5, 0.0);
        state.points.append(0.5, 0.0);
        state.options.samples_per_segment = 25;

        let scene = build(&mut state, [640.0, 640.0]);
        assert_eq!(scene.geometry.bezier_polyline.len(), 25);
        assert!(scene.adding_points);
    }
}
