//! Geordnete Kontrollpunkte mit optionalen Tangenten-Overrides.
//!
//! Der `PointStore` ist der einzige Eigentümer der Punktfolge einer Sitzung.
//! Punkte werden nur angehängt, verschoben oder mit einer Tangente versehen,
//! nie gelöscht oder umsortiert. Die Identität eines Punkts ist sein Index.

use super::error::PointStoreError;
use glam::Vec2;

/// Kontrollpunkte + Tangenten-Overrides einer Editier-Sitzung.
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    /// Positionen in normalisierten Geräte-Koordinaten
    points: Vec<Vec2>,
    /// Override pro Punkt (`None` = automatisch abgeleitete Tangente)
    overrides: Vec<Option<Vec2>>,
    /// Wird bei jeder erfolgreichen Mutation erhöht
    revision: u64,
}

impl PointStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            overrides: Vec::new(),
            revision: 0,
        }
    }

    /// Erstellt einen Store aus einer Punktfolge (alle Tangenten automatisch).
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Self {
        let points: Vec<Vec2> = points.into_iter().collect();
        let overrides = vec![None; points.len()];
        Self {
            points,
            overrides,
            revision: 0,
        }
    }

    /// Hängt einen neuen Punkt an und gibt seinen Index zurück.
    ///
    /// Koinzidente Punkte sind erlaubt.
    pub fn append(&mut self, x: f32, y: f32) -> usize {
        self.points.push(Vec2::new(x, y));
        self.overrides.push(None);
        self.touch();
        self.points.len() - 1
    }

    /// Index des Punkts mit minimalem euklidischem Abstand zu `(x, y)`.
    ///
    /// Bei Gleichstand gewinnt der kleinste Index. `None` bei leerem Store.
    pub fn nearest(&self, x: f32, y: f32) -> Option<usize> {
        let query = Vec2::new(x, y);
        let mut best: Option<(usize, f32)> = None;
        for (index, point) in self.points.iter().enumerate() {
            let dist = point.distance_squared(query);
            match best {
                // strikt kleiner, damit der erste Treffer bei Gleichstand bleibt
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((index, dist)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Überschreibt die Position eines bestehenden Punkts.
    pub fn move_point(&mut self, index: usize, x: f32, y: f32) -> Result<(), PointStoreError> {
        self.check_index(index)?;
        self.points[index] = Vec2::new(x, y);
        self.touch();
        Ok(())
    }

    /// Setzt einen Tangenten-Override für einen Punkt.
    pub fn set_tangent(&mut self, index: usize, tx: f32, ty: f32) -> Result<(), PointStoreError> {
        self.check_index(index)?;
        self.overrides[index] = Some(Vec2::new(tx, ty));
        self.touch();
        Ok(())
    }

    /// Entfernt den Tangenten-Override; der Punkt nutzt wieder die abgeleitete Tangente.
    pub fn clear_tangent(&mut self, index: usize) -> Result<(), PointStoreError> {
        self.check_index(index)?;
        self.overrides[index] = None;
        self.touch();
        Ok(())
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn noch kein Punkt gesetzt wurde.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Positionen.
    pub fn positions(&self) -> &[Vec2] {
        &self.points
    }

    /// Read-only Sicht auf alle Overrides (gleiche Länge wie `positions()`).
    pub fn overrides(&self) -> &[Option<Vec2>] {
        &self.overrides
    }

    /// Position eines Punkts.
    pub fn point(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    /// Aktiver Override eines Punkts (falls gesetzt).
    pub fn tangent_override(&self, index: usize) -> Option<Vec2> {
        self.overrides.get(index).copied().flatten()
    }

    /// Revisions-Zähler; ändert sich genau dann, wenn sich der Inhalt geändert hat.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn check_index(&self, index: usize) -> Result<(), PointStoreError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(PointStoreError::OutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
