//! Output writers for label specifications
//!
//! Writers turn a built [`LabelSpec`] into a serialized form the plot engine
//! consumes. Currently only JSON is supported.
//!
//! # Example
//!
//! ```rust
//! use plotspec::writer::{JsonWriter, Writer};
//!
//! let writer = JsonWriter::compact();
//! let json = writer.write(&plotspec::labs([("x", "Weight")])).unwrap();
//! assert_eq!(json, r#"{"kind":"scale","name":"Weight","aesthetic":"x"}"#);
//! ```

mod json;

pub use json::JsonWriter;

use crate::label::LabelSpec;
use crate::Result;

/// Converts a label specification into an output format
pub trait Writer {
    type Output;

    fn write(&self, spec: &LabelSpec) -> Result<Self::Output>;
}
