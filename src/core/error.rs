//! Fehlertypen der Core-Schicht.

use thiserror::Error;

/// Fehler indexbasierter `PointStore`-Mutationen.
///
/// Eine abgelehnte Mutation verändert den Store nicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PointStoreError {
    /// Index verweist auf keinen existierenden Kontrollpunkt
    #[error("Punkt-Index {index} außerhalb des gültigen Bereichs (Anzahl: {len})")]
    OutOfRange { index: usize, len: usize },
}
