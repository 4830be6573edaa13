/*!
# plotspec - declarative plot title and label specifications

plotspec builds the small specification objects a grammar-of-graphics plot
uses for its title, axis labels and legend titles. The objects are plain
data: they are merged into a larger plot specification tree and rendered by
an external engine.

## Example

```rust
use plotspec::{ggtitle, labs, xlab, LabelSpec};

let title = ggtitle("Fuel economy");
assert_eq!(title.kind(), "ggtitle");

// One pair yields a bare unit...
assert_eq!(labs([("x", "Displacement")]), LabelSpec::Single(xlab("Displacement")));

// ...two or more yield an ordered collection.
let specs = plotspec::labs!(title = "Fuel economy", y = "Highway MPG");
assert_eq!(specs.len(), 2);
```

## Architecture

- [`spec`] - the `FeatureSpec`/`FeatureSpecArray` primitives
- [`scale`] - scale specifications, including the generic scale labeler
- [`label`] - `ggtitle`, `xlab`, `ylab` and `labs`
- [`aesthetic`] - catalogue of aesthetic names known downstream
- [`validate`] - advisory checks over built label specs
- [`writer`] - JSON output
*/

pub mod aesthetic;
pub mod label;
pub mod naming;
pub mod scale;
pub mod spec;
pub mod validate;
pub mod writer;

pub use label::{ggtitle, labs, xlab, ylab, LabelSpec};
pub use scale::{scale, ScaleSpec};
pub use spec::{FeatureSpec, FeatureSpecArray, SpecValue};
pub use validate::{validate_labels, ValidationWarning};

/// Crate version, as reported by the CLI
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors raised outside the pure builders (argument parsing, output)
#[derive(Debug, thiserror::Error)]
pub enum PlotSpecError {
    #[error("Argument error: {0}")]
    ArgumentError(String),

    #[error("Writer error: {0}")]
    WriterError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

pub type Result<T> = std::result::Result<T, PlotSpecError>;

impl From<std::io::Error> for PlotSpecError {
    fn from(err: std::io::Error) -> Self {
        PlotSpecError::IoError(err.to_string())
    }
}
