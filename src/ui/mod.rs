//! UI-Layer mit egui.
//!
//! Dünne Hülle um die App-Schicht: Eingaben werden zu `AppIntent`s,
//! die `RenderScene` wird mit dem egui-Painter gezeichnet.

pub mod input;
pub mod options_panel;
pub mod painter;

pub use input::InputState;
pub use options_panel::show_options_panel;
pub use painter::paint_scene;
