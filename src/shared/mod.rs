//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die reine Kurvengeometrie sowie Typen, die zwischen `app` und
//! `ui` geteilt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod curve_geometry;
pub mod options;
mod render_scene;

pub use curve_geometry::CurveGeometry;
pub use options::EditorOptions;
pub use options::SAMPLES_PER_SEGMENT;
pub use render_scene::RenderScene;
