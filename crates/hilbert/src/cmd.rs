//! Command handlers for the `hilbert` CLI.

use std::io::{Read, Write};

use anyhow::Result;
use hilbertcurve::{
    Controller, ControllerConfig, KeyMap, Orientation, error::Error, generate, generate::scale,
};

use crate::term::{ReaderKeys, TextCanvas};

/// Write the points of one curve, one `x y` pair per line.
///
/// With `pixels` set, points are scaled onto a canvas of that many pixels
/// the same way the interactive views draw them.
pub fn points(
    depth: u32,
    orientation: Orientation,
    pixels: Option<u32>,
    out: &mut dyn Write,
) -> Result<()> {
    if pixels == Some(0) {
        return Err(Error::InvalidCanvasSize(0).into());
    }
    let curve = generate(depth, orientation)?;
    for &p in &curve {
        match pixels {
            Some(size) => writeln!(out, "{}", scale(p, depth, size))?,
            None => writeln!(out, "{p}")?,
        }
    }
    Ok(())
}

/// Write the effective key bindings, one `KEY ACTION` pair per line.
pub fn keys(keys: &KeyMap, out: &mut dyn Write) -> Result<()> {
    for (key, action) in keys.iter() {
        writeln!(out, "{key} {action}")?;
    }
    Ok(())
}

/// Run an interactive session on a text canvas, reading keys from `input`
/// until quit or end of input.
pub fn term<R: Read, W: Write>(config: ControllerConfig, input: R, out: W) -> Result<W> {
    let mut controller = Controller::new(config)?;
    let mut canvas = TextCanvas::new(out);
    controller.run(&mut ReaderKeys::new(input), &mut canvas)?;
    Ok(canvas.finish()?)
}

#[cfg(test)]
mod tests {
    use hilbertcurve::CurveState;

    use super::*;

    #[test]
    fn prints_grid_points() -> Result<()> {
        let mut out = Vec::new();
        points(1, Orientation::A, None, &mut out)?;
        assert_eq!(String::from_utf8(out)?, "3 3\n5 3\n5 5\n3 5\n");
        Ok(())
    }

    #[test]
    fn prints_pixel_points() -> Result<()> {
        let mut out = Vec::new();
        points(1, Orientation::C, Some(700), &mut out)?;
        assert_eq!(
            String::from_utf8(out)?,
            "175 175\n525 175\n525 525\n175 525\n"
        );
        Ok(())
    }

    #[test]
    fn rejects_depth_zero() {
        assert!(points(0, Orientation::A, None, &mut Vec::new()).is_err());
    }

    #[test]
    fn rejects_empty_pixel_canvas() {
        let mut out = Vec::new();
        let err = points(1, Orientation::A, Some(0), &mut out).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::InvalidCanvasSize(0))
        );
        assert!(out.is_empty());
    }

    #[test]
    fn lists_default_keys() -> Result<()> {
        let mut out = Vec::new();
        keys(&KeyMap::default(), &mut out)?;
        let text = String::from_utf8(out)?;
        assert_eq!(text.lines().count(), 7);
        assert!(text.contains("a decrease\n"));
        assert!(text.contains("v orientation-d\n"));
        Ok(())
    }

    #[test]
    fn term_session_prints_a_frame_per_redraw() -> Result<()> {
        let config = ControllerConfig {
            canvas_size: 8,
            initial: CurveState {
                depth: 1,
                orientation: Orientation::C,
            },
            ..ControllerConfig::default()
        };
        let out = term(config, &b"s#q"[..], Vec::new())?;
        let text = String::from_utf8(out)?;
        let frames: Vec<&str> = text.split("\n\n").filter(|f| !f.is_empty()).collect();
        assert_eq!(frames.len(), 2);
        // Depth 1 on an 8-cell canvas: the three sides of a 5x5 square.
        assert_eq!(
            frames[0],
            "........\n\
             ........\n\
             ..#####.\n\
             ......#.\n\
             ......#.\n\
             ......#.\n\
             ..#####.\n\
             ........"
        );
        Ok(())
    }
}
