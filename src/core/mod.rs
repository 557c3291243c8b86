//! Core-Domänentypen: Kontrollpunkte, Tangenten-Overrides, Fehler.

pub mod error;
/// Kontrollpunkt-Speicher einer Editier-Sitzung
pub mod point_store;

pub use error::PointStoreError;
pub use point_store::PointStore;
