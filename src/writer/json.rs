//! JSON writer
//!
//! A single unit is written as an object and a collection as an array of
//! objects, matching the shape the plot engine merges into its spec tree.

use super::Writer;
use crate::label::LabelSpec;
use crate::{PlotSpecError, Result};

/// JSON writer
pub struct JsonWriter {
    /// Pretty-print with indentation
    pretty: bool,
}

impl JsonWriter {
    /// Create a pretty-printing writer
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a writer emitting single-line JSON
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for JsonWriter {
    type Output = String;

    fn write(&self, spec: &LabelSpec) -> Result<String> {
        let output = if self.pretty {
            serde_json::to_string_pretty(spec)
        } else {
            serde_json::to_string(spec)
        }
        .map_err(|e| PlotSpecError::WriterError(format!("Failed to serialize spec: {}", e)))?;

        tracing::trace!(units = spec.len(), bytes = output.len(), "wrote JSON spec");
        Ok(output)
    }
}
