//! Cache der abgeleiteten Kurvengeometrie ("neu berechnen wenn veraltet").

use crate::core::PointStore;
use crate::shared::curve_geometry::{self, CurveGeometry};
use std::sync::Arc;

/// Letzte `CurveGeometry` samt der Eingabe-Version, aus der sie gebaut wurde.
///
/// Veraltet, sobald sich die Store-Revision oder die Abtastrate ändert.
#[derive(Debug, Default)]
pub struct DerivedCurve {
    /// Arc für O(1)-Clone pro Frame in die RenderScene
    geometry: Arc<CurveGeometry>,
    /// (Store-Revision, Samples pro Segment) des letzten Builds
    built_from: Option<(u64, usize)>,
    rebuild_count: u64,
}

impl DerivedCurve {
    pub fn new() -> Self {
        Self::default()
    }

    /// True wenn die gecachte Geometrie nicht zum aktuellen Store passt.
    pub fn is_stale(&self, store: &PointStore, samples: usize) -> bool {
        self.built_from != Some((store.revision(), samples))
    }

    /// Liefert die Geometrie; baut sie vorher komplett neu, falls veraltet.
    pub fn ensure_fresh(&mut self, store: &PointStore, samples: usize) -> &Arc<CurveGeometry> {
        if self.is_stale(store, samples) {
            self.geometry = Arc::new(curve_geometry::rebuild(
                store.positions(),
                store.overrides(),
                samples,
            ));
            self.built_from = Some((store.revision(), samples));
            self.rebuild_count += 1;
            log::debug!(
                "Kurve neu berechnet: {} Punkte, {} Kurven-Vertices (Revision {})",
                store.len(),
                self.geometry.bezier_polyline.len(),
                store.revision()
            );
        }
        &self.geometry
    }

    /// Zuletzt gebaute Geometrie, ohne Aktualitätsprüfung.
    pub fn geometry(&self) -> &Arc<CurveGeometry> {
        &self.geometry
    }

    /// Anzahl der bisher ausgeführten Rebuilds.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_cache_is_stale() {
        let cache = DerivedCurve::new();
        assert!(cache.is_stale(&PointStore::new(), 10));
    }

    #[test]
    fn test_unchanged_input_skips_rebuild() {
        let mut store = PointStore::new();
        store.append(0.0, 0.0);
        store.append(0.5, 0.5);
        let mut cache = DerivedCurve::new();

        let first = Arc::clone(cache.ensure_fresh(&store, 10));
        let second = Arc::clone(cache.ensure_fresh(&store, 10));

        assert_eq!(cache.rebuild_count(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_edit_triggers_rebuild() {
        let mut store = PointStore::new();
        store.append(0.0, 0.0);
        store.append(0.5, 0.5);
        let mut cache = DerivedCurve::new();
        cache.ensure_fresh(&store, 10);

        store.append(0.9, 0.0);
        assert!(cache.is_stale(&store, 10));
        let geometry = cache.ensure_fresh(&store, 10);
        assert_eq!(geometry.bezier_polyline.len(), 19);
        assert_eq!(cache.rebuild_count(), 2);
    }

    #[test]
    fn test_sample_change_triggers_rebuild() {
        let mut store = PointStore::new();
        store.append(0.0, 0.0);
        store.append(0.5, 0.5);
        let mut cache = DerivedCurve::new();
        cache.ensure_fresh(&store, 10);

        let geometry = cache.ensure_fresh(&store, 20);
        assert_eq!(geometry.bezier_polyline.len(), 20);
        assert_eq!(cache.rebuild_count(), 2);
    }
}
