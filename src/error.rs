//! Engine error types
//!
//! Errors cross the wasm boundary as strings; the facade maps them to
//! `JsValue` at the edge.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The supplied cell buffer does not hold exactly width * height entries.
    #[error("invalid grid shape: {cells} cells for a {width}x{height} grid")]
    InvalidGridShape {
        width: u32,
        height: u32,
        cells: usize,
    },

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
