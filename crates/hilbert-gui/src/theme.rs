//! Centralized theme constants for the curve window.
//!
//! The canvas reproduces the classic look of the explorer: a plain black
//! field with thin red strokes. Only the status bar picks up the dark egui
//! visuals.

use egui::Color32;

// =============================================================================
// COLORS
// =============================================================================

/// Canvas fill behind the curve.
pub const CANVAS_BACKGROUND: Color32 = Color32::BLACK;

/// Curve stroke color.
pub const CURVE_COLOR: Color32 = Color32::from_rgb(0xff, 0x00, 0x00);

/// Status bar background - a hair brighter than the canvas.
pub const PANEL_BACKGROUND: Color32 = Color32::from_rgb(0x12, 0x12, 0x12);

/// Primary status text.
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0xe6, 0xe6, 0xe6);

/// Dim text for key hints.
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x80, 0x80, 0x80);

// =============================================================================
// SIZES
// =============================================================================

/// Curve stroke width in points.
pub const LINE_WIDTH: f32 = 1.0;

/// Status bar styling constants.
pub mod status_bar {
    /// Total height reserved for the bar, including padding.
    pub const HEIGHT: f32 = 28.0;

    /// Horizontal padding.
    pub const PADDING_HORIZONTAL: f32 = 8.0;

    /// Vertical padding.
    pub const PADDING_VERTICAL: f32 = 4.0;

    /// Status text size.
    pub const FONT_SIZE: f32 = 13.0;
}

/// Window title.
pub const WINDOW_TITLE: &str = "Space Filling Curves";

/// Inner window size that shows a `canvas_size` canvas at 1:1 above the
/// status bar.
pub fn window_size(canvas_size: u32) -> [f32; 2] {
    let side = canvas_size as f32;
    [side, side + status_bar::HEIGHT]
}

/// Apply dark visuals with the status bar colors.
pub fn configure_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = PANEL_BACKGROUND;
    visuals.window_fill = PANEL_BACKGROUND;
    visuals.extreme_bg_color = CANVAS_BACKGROUND;
    visuals.override_text_color = Some(TEXT_PRIMARY);
    ctx.set_visuals(visuals);
}
