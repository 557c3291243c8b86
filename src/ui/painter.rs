//! Zeichnet eine `RenderScene` mit dem egui-Painter.
//!
//! Konsumiert ausschließlich die flachen Tripel-Sequenzen der Szene.

use super::input::ndc_to_screen;
use crate::shared::RenderScene;

fn color(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}

fn to_screen(points: &[[f32; 3]], viewport: egui::Rect) -> Vec<egui::Pos2> {
    points.iter().map(|&p| ndc_to_screen(p, viewport)).collect()
}

/// Zeichnet Hintergrund, Kurve bzw. Polyline, Tangenten und Kontrollpunkte.
pub fn paint_scene(painter: &egui::Painter, viewport: egui::Rect, scene: &RenderScene) {
    let opts = &scene.options;
    painter.rect_filled(viewport, 0.0, color(opts.background_color));

    let geometry = &scene.geometry;
    if scene.has_curve() {
        let (polyline, line_color) = if opts.draw_piecewise_bezier {
            (&geometry.bezier_polyline, opts.curve_color)
        } else {
            (&geometry.control_polyline, opts.polyline_color)
        };
        painter.add(egui::Shape::line(
            to_screen(polyline, viewport),
            egui::Stroke::new(opts.line_width_px, color(line_color)),
        ));
    }

    if opts.show_tangent_handles && !scene.adding_points {
        let stub_stroke = egui::Stroke::new(opts.line_width_px * 0.5, color(opts.tangent_color));
        for line in geometry.tangent_lines.chunks_exact(2) {
            painter.line_segment(
                [
                    ndc_to_screen(line[0], viewport),
                    ndc_to_screen(line[1], viewport),
                ],
                stub_stroke,
            );
        }
        for (index, &handle) in geometry.tangent_handles.iter().enumerate() {
            let handle_color = if scene.selected_tangent == Some(index) {
                opts.selected_color
            } else {
                opts.handle_color
            };
            painter.circle_filled(
                ndc_to_screen(handle, viewport),
                opts.handle_size_px * 0.5,
                color(handle_color),
            );
        }
    }

    for (index, &point) in geometry.control_points.iter().enumerate() {
        let point_color = if scene.selected_point == Some(index) {
            opts.selected_color
        } else {
            opts.point_color
        };
        painter.circle_filled(
            ndc_to_screen(point, viewport),
            opts.point_size_px * 0.5,
            color(point_color),
        );
    }
}
