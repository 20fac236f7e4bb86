//! Error types for curve generation and controller configuration.

use thiserror::Error;

/// Errors produced while generating curves or configuring the controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A recursion depth outside the accepted range.
    #[error("invalid depth {depth}: must be between 1 and {max}")]
    InvalidDepth {
        /// The rejected depth.
        depth: u32,
        /// Largest depth accepted in this context.
        max: u32,
    },
    /// A canvas with no drawable area.
    #[error("invalid canvas size {0}: must be at least 1 pixel")]
    InvalidCanvasSize(u32),
    /// An orientation name that is not one of A, B, C or D.
    #[error("unknown orientation '{0}': expected one of A, B, C, D")]
    UnknownOrientation(String),
    /// An action name that is not one of the controller's actions.
    #[error("unknown action '{0}': expected decrease, increase, a, b, c, d or quit")]
    UnknownAction(String),
    /// A malformed `KEY=ACTION` binding.
    #[error("invalid key binding '{spec}': {reason}")]
    InvalidBinding {
        /// The binding text as supplied.
        spec: String,
        /// Why the binding was rejected.
        reason: String,
    },
}

/// Convenience result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
