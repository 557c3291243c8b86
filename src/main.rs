//! Curve Editor.
//!
//! Kontrollpunkte per Klick setzen, Rechtsklick wechselt in den Bearbeitungsmodus.
//! Die Kurve wird als stückweise kubische Bézier-Kurve mit Tangenten-Handles gezeichnet.

use curve_editor::{ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Curve Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([640.0, 640.0])
                .with_title("Curve Editor"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Curve Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new(editor_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new(editor_options: EditorOptions) -> Self {
        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let (events, viewport) = self.collect_ui_events(ctx);
        self.process_events(events);
        self.paint(ctx, viewport);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> (Vec<AppIntent>, egui::Rect) {
        let mut events = ui::show_options_panel(ctx, &self.state);
        let mut viewport = egui::Rect::NOTHING;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                events.extend(self.input.collect_viewport_events(ui, &response, rect));
                viewport = rect;
            });

        (events, viewport)
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Zeichnet nach allen Edits dieses Frames; veraltete Geometrie wird dabei neu berechnet.
    fn paint(&mut self, ctx: &egui::Context, viewport: egui::Rect) {
        let scene = self
            .controller
            .build_render_scene(&mut self.state, [viewport.width(), viewport.height()]);
        let painter = ctx
            .layer_painter(egui::LayerId::background())
            .with_clip_rect(viewport);
        ui::paint_scene(&painter, viewport, &scene);
    }
}
