//! Curve Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditPhase};
pub use core::{PointStore, PointStoreError};
pub use shared::{CurveGeometry, EditorOptions, RenderScene};
