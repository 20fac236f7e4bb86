//! Core library for generating and interactively exploring Hilbert curves.
//!
//! [`generate`] turns a recursion depth and an [`Orientation`] into the
//! ordered grid points of the curve. [`Controller`] keeps the current
//! selection, reacts to keys and redraws through a [`Canvas`]; the CLI and
//! GUI crates in this workspace supply the canvas and the key source.

/// Keyboard-driven curve state machine.
pub mod controller;
/// Error types used across the crate.
pub mod error;
/// Recursive curve generation and pixel scaling.
pub mod generate;
/// Key bindings.
pub mod keymap;
/// The four starting placements of the curve.
pub mod orientation;
/// Grid and pixel points.
pub mod point;
/// Traits for rendering and input collaborators.
pub mod ports;

pub use crate::{
    controller::{Controller, ControllerConfig, CurveState, Status},
    generate::{CurveSequence, generate},
    keymap::{Action, KeyMap},
    orientation::Orientation,
    point::{GridPoint, PixelPoint},
    ports::{Canvas, KeySource},
};
