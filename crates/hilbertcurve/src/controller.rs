//! Keyboard-driven state machine that redraws the curve on every change.

use tracing::{debug, info, trace};

use crate::{
    error,
    generate::{self, MAX_DEPTH},
    keymap::{Action, KeyMap},
    orientation::Orientation,
    point::PixelPoint,
    ports::{Canvas, KeySource},
};

/// Deepest level reachable through the keyboard by default.
pub const MAX_LEVEL: u32 = 8;

/// Default side length of the square canvas, in pixels.
pub const DEFAULT_CANVAS_SIZE: u32 = 700;

/// The curve currently on display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveState {
    /// Recursion depth, kept within `1..=max_level`.
    pub depth: u32,
    /// Selected orientation.
    pub orientation: Orientation,
}

impl Default for CurveState {
    fn default() -> Self {
        Self {
            depth: 1,
            orientation: Orientation::A,
        }
    }
}

/// Whether the controller still accepts input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Waiting for and processing input.
    Running,
    /// Quit was received; further input is ignored.
    Exited,
}

/// Launch configuration for a [`Controller`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Side of the square canvas in pixels.
    pub canvas_size: u32,
    /// Deepest level reachable with [`Action::IncreaseLevel`].
    pub max_level: u32,
    /// State shown before the first key arrives.
    pub initial: CurveState,
    /// Key bindings.
    pub keys: KeyMap,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            max_level: MAX_LEVEL,
            initial: CurveState::default(),
            keys: KeyMap::default(),
        }
    }
}

/// Holds the current depth and orientation and redraws the curve whenever
/// an accepted key changes them.
///
/// Every redraw generates a fresh curve, clears the canvas, draws one segment
/// per consecutive pair of points scaled so the outermost cell spans the
/// canvas, and presents the frame.
#[derive(Debug)]
pub struct Controller {
    /// Side of the square canvas in pixels.
    canvas_size: u32,
    /// Upper depth bound.
    max_level: u32,
    /// Key bindings.
    keys: KeyMap,
    /// Current curve selection.
    state: CurveState,
    /// Running or exited.
    status: Status,
    /// Completed redraws, including the initial one.
    redraws: u64,
}

impl Controller {
    /// Validate `config` and build a controller in the running state.
    ///
    /// Nothing is drawn until [`Controller::start`] or [`Controller::run`].
    pub fn new(config: ControllerConfig) -> error::Result<Self> {
        let ControllerConfig {
            canvas_size,
            max_level,
            initial,
            keys,
        } = config;

        if canvas_size == 0 {
            return Err(error::Error::InvalidCanvasSize(canvas_size));
        }
        generate::validate_depth(max_level, MAX_DEPTH)?;
        generate::validate_depth(initial.depth, max_level)?;

        Ok(Self {
            canvas_size,
            max_level,
            keys,
            state: initial,
            status: Status::Running,
            redraws: 0,
        })
    }

    /// Current curve selection.
    pub fn state(&self) -> CurveState {
        self.state
    }

    /// Whether input is still accepted.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Number of completed redraws.
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }

    /// Active key bindings.
    pub fn keys(&self) -> &KeyMap {
        &self.keys
    }

    /// Side of the square canvas in pixels.
    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    /// Deepest reachable level.
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Draw the initial curve.
    pub fn start(&mut self, canvas: &mut dyn Canvas) -> error::Result<()> {
        info!(
            depth = self.state.depth,
            orientation = %self.state.orientation,
            canvas = self.canvas_size,
            "starting"
        );
        self.redraw(canvas)
    }

    /// Translate `key` through the key map and apply the bound action.
    ///
    /// Unbound keys, and any key after quit, change nothing and draw nothing.
    pub fn handle_key(&mut self, key: char, canvas: &mut dyn Canvas) -> error::Result<Status> {
        if self.status == Status::Exited {
            return Ok(self.status);
        }
        match self.keys.action(key) {
            Some(action) => self.apply(action, canvas),
            None => {
                trace!(?key, "ignoring unbound key");
                Ok(self.status)
            }
        }
    }

    /// Apply one action. Level changes clamp to `1..=max_level`; every
    /// action except quit is followed by a full redraw.
    pub fn apply(&mut self, action: Action, canvas: &mut dyn Canvas) -> error::Result<Status> {
        if self.status == Status::Exited {
            return Ok(self.status);
        }

        match action {
            Action::DecreaseLevel => {
                if self.state.depth > 1 {
                    self.state.depth -= 1;
                }
            }
            Action::IncreaseLevel => {
                if self.state.depth < self.max_level {
                    self.state.depth += 1;
                }
            }
            Action::SelectOrientation(orientation) => self.state.orientation = orientation,
            Action::Quit => {
                info!("quit");
                self.status = Status::Exited;
                return Ok(self.status);
            }
        }

        debug!(%action, depth = self.state.depth, orientation = %self.state.orientation, "state changed");
        self.redraw(canvas)?;
        Ok(self.status)
    }

    /// Draw once, then block on `keys` and process each key until quit or
    /// until the source closes.
    pub fn run(&mut self, keys: &mut dyn KeySource, canvas: &mut dyn Canvas) -> error::Result<()> {
        self.start(canvas)?;
        while self.status == Status::Running {
            match keys.wait_for_key() {
                Some(key) => {
                    self.handle_key(key, canvas)?;
                }
                None => {
                    debug!("input closed");
                    self.status = Status::Exited;
                }
            }
        }
        Ok(())
    }

    /// Regenerate the curve for the current state and draw it in full.
    fn redraw(&mut self, canvas: &mut dyn Canvas) -> error::Result<()> {
        let CurveState { depth, orientation } = self.state;
        let curve = generate::generate(depth, orientation)?;
        let size = self.canvas_size;
        let pixels: Vec<PixelPoint> = curve
            .iter()
            .map(|&p| generate::scale(p, depth, size))
            .collect();

        canvas.clear_canvas(size, size);
        for pair in pixels.windows(2) {
            canvas.draw_segment(pair[0], pair[1]);
        }
        canvas.present();

        self.redraws += 1;
        debug!(depth, %orientation, points = curve.len(), "redrew curve");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FrameBuffer;

    fn controller() -> error::Result<(Controller, FrameBuffer)> {
        let mut c = Controller::new(ControllerConfig::default())?;
        let mut fb = FrameBuffer::new();
        c.start(&mut fb)?;
        Ok((c, fb))
    }

    #[test]
    fn initial_state() -> error::Result<()> {
        let (c, fb) = controller()?;
        assert_eq!(c.state(), CurveState::default());
        assert_eq!(c.status(), Status::Running);
        assert_eq!(c.redraw_count(), 1);
        assert_eq!(fb.frames(), 1);
        assert_eq!(fb.segments().len(), 3);
        assert_eq!(fb.size(), (700, 700));
        Ok(())
    }

    #[test]
    fn first_frame_matches_depth_one_curve() -> error::Result<()> {
        let (_, fb) = controller()?;
        // (3,3) (5,3) (5,5) (3,5) at 175 pixels per grid unit.
        let p = PixelPoint::new;
        assert_eq!(
            fb.segments(),
            [
                (p(525, 525), p(875, 525)),
                (p(875, 525), p(875, 875)),
                (p(875, 875), p(525, 875)),
            ]
        );
        Ok(())
    }

    #[test]
    fn increase_twice() -> error::Result<()> {
        let (mut c, mut fb) = controller()?;
        c.apply(Action::IncreaseLevel, &mut fb)?;
        c.apply(Action::IncreaseLevel, &mut fb)?;
        assert_eq!(c.state().depth, 3);
        assert_eq!(fb.segments().len(), 63);
        Ok(())
    }

    #[test]
    fn decrease_clamps_at_one() -> error::Result<()> {
        let (mut c, mut fb) = controller()?;
        for _ in 0..4 {
            c.apply(Action::DecreaseLevel, &mut fb)?;
        }
        assert_eq!(c.state().depth, 1);
        Ok(())
    }

    #[test]
    fn increase_clamps_at_max() -> error::Result<()> {
        let (mut c, mut fb) = controller()?;
        for _ in 0..MAX_LEVEL + 5 {
            c.apply(Action::IncreaseLevel, &mut fb)?;
        }
        assert_eq!(c.state().depth, MAX_LEVEL);
        Ok(())
    }

    #[test]
    fn clamped_level_change_still_redraws() -> error::Result<()> {
        let (mut c, mut fb) = controller()?;
        c.apply(Action::DecreaseLevel, &mut fb)?;
        assert_eq!(c.state().depth, 1);
        assert_eq!(c.redraw_count(), 2);
        Ok(())
    }

    #[test]
    fn unbound_key_is_ignored() -> error::Result<()> {
        let (mut c, mut fb) = controller()?;
        c.handle_key('v', &mut fb)?;
        let state = c.state();
        assert_eq!(state.orientation, Orientation::D);
        let redraws = c.redraw_count();

        assert_eq!(c.handle_key('k', &mut fb)?, Status::Running);
        assert_eq!(c.state(), state);
        assert_eq!(c.redraw_count(), redraws);
        assert_eq!(fb.frames(), redraws);
        Ok(())
    }

    #[test]
    fn quit_stops_input() -> error::Result<()> {
        let (mut c, mut fb) = controller()?;
        assert_eq!(c.handle_key('q', &mut fb)?, Status::Exited);
        assert_eq!(c.redraw_count(), 1);
        assert_eq!(c.handle_key('s', &mut fb)?, Status::Exited);
        assert_eq!(c.apply(Action::IncreaseLevel, &mut fb)?, Status::Exited);
        assert_eq!(c.state().depth, 1);
        assert_eq!(c.redraw_count(), 1);
        Ok(())
    }

    #[test]
    fn rejects_bad_config() {
        let bad_depth = ControllerConfig {
            initial: CurveState {
                depth: 9,
                orientation: Orientation::A,
            },
            ..ControllerConfig::default()
        };
        assert!(matches!(
            Controller::new(bad_depth),
            Err(error::Error::InvalidDepth { depth: 9, max: 8 })
        ));

        let zero = ControllerConfig {
            canvas_size: 0,
            ..ControllerConfig::default()
        };
        assert!(Controller::new(zero).is_err());

        let too_deep = ControllerConfig {
            max_level: MAX_DEPTH + 1,
            ..ControllerConfig::default()
        };
        assert!(Controller::new(too_deep).is_err());
    }
}
