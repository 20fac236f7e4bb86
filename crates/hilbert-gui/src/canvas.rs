use egui::{self, Pos2, Rect, Stroke};
use hilbertcurve::{PixelPoint, ports::FrameBuffer};

use crate::theme;

/// Map a canvas pixel into the on-screen square `rect`.
///
/// The controller draws on a `canvas_size` square; the window may be
/// resized, so the canvas is stretched to whatever square is available.
pub fn canvas_to_screen(p: PixelPoint, rect: Rect, canvas_size: u32) -> Pos2 {
    let scale = rect.width() / canvas_size.max(1) as f32;
    Pos2 {
        x: rect.min.x + p.x as f32 * scale,
        y: rect.min.y + p.y as f32 * scale,
    }
}

/// Largest square that fits in `available`, anchored at its top-left corner.
pub fn canvas_rect(available: Rect) -> Rect {
    let side = available.width().min(available.height()).max(1.0);
    Rect::from_min_size(available.min, egui::Vec2::splat(side))
}

/// Paint the last presented frame. Segments are clipped to the canvas.
pub fn show_canvas(ui: &mut egui::Ui, frame: &FrameBuffer, canvas_size: u32) {
    let available = ui.available_rect_before_wrap();
    let painter = ui.painter_at(available);
    painter.rect_filled(available, 0.0, theme::CANVAS_BACKGROUND);

    let rect = canvas_rect(available);
    let painter = ui.painter_at(rect);
    let stroke = Stroke::new(theme::LINE_WIDTH, theme::CURVE_COLOR);
    for &(a, b) in frame.segments() {
        painter.line_segment(
            [
                canvas_to_screen(a, rect, canvas_size),
                canvas_to_screen(b, rect, canvas_size),
            ],
            stroke,
        );
    }

    ui.allocate_rect(available, egui::Sense::hover());
}

/// Characters typed since the last frame, in order.
pub fn typed_keys(events: &[egui::Event]) -> Vec<char> {
    events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Text(text) => Some(text.chars()),
            _ => None,
        })
        .flatten()
        .collect()
}
