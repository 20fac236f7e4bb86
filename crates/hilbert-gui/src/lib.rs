//! Window front end for the Hilbert curve explorer using egui/eframe.
//!
//! The window is the controller's canvas and key source. eframe only calls
//! [`eframe::App::update`] when input arrives, so the app behaves like the
//! blocking wait-process loop of [`hilbertcurve::Controller::run`]: each
//! batch of typed keys is applied in full before the next frame is shown.

use anyhow::Result;
use hilbertcurve::{
    Action, Controller, ControllerConfig, KeyMap, Orientation, Status, ports::FrameBuffer,
};
use tracing::{info, warn};

/// Canvas painting and key capture.
pub mod canvas;
/// Centralized theme constants (colors, sizes).
pub mod theme;

/// Launch configuration for the GUI.
#[derive(Debug, Clone, Default)]
pub struct GuiOptions {
    /// Controller settings: canvas size, depth bounds, initial curve, keys.
    pub controller: ControllerConfig,
}

/// Root eframe application.
pub struct HilbertApp {
    /// The curve state machine.
    controller: Controller,
    /// Last presented frame.
    frame: FrameBuffer,
    /// Error from the most recent redraw, shown in the status bar.
    last_error: Option<String>,
}

impl HilbertApp {
    /// Wrap a controller whose initial frame has already been drawn into
    /// `frame`.
    pub fn new(cc: &eframe::CreationContext<'_>, controller: Controller, frame: FrameBuffer) -> Self {
        theme::configure_visuals(&cc.egui_ctx);
        Self {
            controller,
            frame,
            last_error: None,
        }
    }

    /// Feed this frame's typed keys to the controller, closing the window
    /// once it exits.
    fn handle_input(&mut self, ctx: &egui::Context) {
        let keys = ctx.input(|input| canvas::typed_keys(&input.events));
        for key in keys {
            match self.controller.handle_key(key, &mut self.frame) {
                Ok(Status::Running) => {}
                Ok(Status::Exited) => {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    break;
                }
                Err(e) => {
                    warn!("redraw failed: {e}");
                    self.last_error = Some(e.to_string());
                }
            }
        }
    }

    /// Render the bottom status bar with the current selection and key hints.
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(theme::status_bar::HEIGHT)
            .frame(egui::Frame::new().fill(theme::PANEL_BACKGROUND).inner_margin(
                egui::Margin {
                    left: theme::status_bar::PADDING_HORIZONTAL as i8,
                    right: theme::status_bar::PADDING_HORIZONTAL as i8,
                    top: theme::status_bar::PADDING_VERTICAL as i8,
                    bottom: theme::status_bar::PADDING_VERTICAL as i8,
                },
            ))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let state = self.controller.state();
                    ui.label(
                        egui::RichText::new(format!(
                            "level {}/{}  orientation {}",
                            state.depth,
                            self.controller.max_level(),
                            state.orientation
                        ))
                        .size(theme::status_bar::FONT_SIZE)
                        .color(theme::TEXT_PRIMARY),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let text = match &self.last_error {
                            Some(e) => e.clone(),
                            None => key_hints(self.controller.keys()),
                        };
                        ui.label(
                            egui::RichText::new(text)
                                .size(theme::status_bar::FONT_SIZE)
                                .color(theme::TEXT_DIM),
                        );
                    });
                });
            });
    }
}

/// Compact description of the bindings, e.g. `a/s level  z/x/c/v orientation  q quit`.
pub fn key_hints(keys: &KeyMap) -> String {
    let join = |action: Action| -> String {
        keys.keys_for(action)
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join("|")
    };

    let level = format!(
        "{}/{} level",
        join(Action::DecreaseLevel),
        join(Action::IncreaseLevel)
    );
    let orientation = format!(
        "{} orientation",
        Orientation::ALL
            .iter()
            .map(|&o| join(Action::SelectOrientation(o)))
            .collect::<Vec<_>>()
            .join("/")
    );
    let quit = format!("{} quit", join(Action::Quit));

    [level, orientation, quit].join("  ")
}

impl eframe::App for HilbertApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.show_status_bar(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::CANVAS_BACKGROUND))
            .show(ctx, |ui| {
                canvas::show_canvas(ui, &self.frame, self.controller.canvas_size());
            });
    }
}

/// Launch the native GUI application with default options.
pub fn gui() -> Result<()> {
    gui_with_options(GuiOptions::default())
}

/// Launch the native GUI with custom controller settings.
///
/// The configuration is validated and the first frame drawn before the
/// window opens, so bad settings are reported without flashing a window.
pub fn gui_with_options(options: GuiOptions) -> Result<()> {
    let mut controller = Controller::new(options.controller)?;
    let mut frame = FrameBuffer::new();
    controller.start(&mut frame)?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(theme::window_size(controller.canvas_size()))
            .with_title(theme::WINDOW_TITLE),
        ..Default::default()
    };

    info!("opening window");
    eframe::run_native(
        theme::WINDOW_TITLE,
        native_options,
        Box::new(move |cc| Ok(Box::new(HilbertApp::new(cc, controller, frame)))),
    )
    .map_err(|e| anyhow::anyhow!(e.to_string()))?;

    Ok(())
}
