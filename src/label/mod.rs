//! Plot title and label builders
//!
//! `ggtitle` sets the plot title; `xlab`, `ylab` and `labs` set axis labels
//! and legend titles through scale specifications. All of them are pure:
//! the same arguments always produce value-equal specs.
//!
//! # Example
//!
//! ```rust
//! use plotspec::label::labs;
//!
//! let spec = labs([("title", "Iris"), ("x", "Sepal length"), ("color", "Species")]);
//! let units = spec.into_specs();
//! assert_eq!(units[0].kind(), "ggtitle");
//! assert_eq!(units[2].name(), Some("Species"));
//! ```

mod types;

pub use types::LabelSpec;

use crate::naming;
use crate::scale::scale;
use crate::spec::{FeatureSpec, FeatureSpecArray};

/// Plot title specification carrying `text` verbatim
pub fn ggtitle(text: impl Into<String>) -> FeatureSpec {
    let text: String = text.into();
    FeatureSpec::new(naming::KIND_TITLE, None).with_prop(naming::TEXT_PROP, text)
}

/// Label for the x axis
pub fn xlab(text: impl Into<String>) -> FeatureSpec {
    scale("x", text)
}

/// Label for the y axis
pub fn ylab(text: impl Into<String>) -> FeatureSpec {
    scale("y", text)
}

/// Change the plot title, axis labels and legend titles.
///
/// Each `(key, value)` pair becomes one unit, in iteration order: the key
/// `title` yields a title, every other key is taken as an aesthetic name
/// and yields a scale label. A single pair returns the bare unit; zero or
/// several pairs return a collection.
pub fn labs<I, K, V>(pairs: I) -> LabelSpec
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut specs: Vec<FeatureSpec> = pairs
        .into_iter()
        .map(|(key, value)| {
            let key: String = key.into();
            if key == naming::TITLE_KEY {
                ggtitle(value)
            } else {
                scale(key, value)
            }
        })
        .collect();

    tracing::debug!(count = specs.len(), "built label specs");

    if specs.len() == 1 {
        if let Some(spec) = specs.pop() {
            return LabelSpec::Single(spec);
        }
    }
    LabelSpec::Array(FeatureSpecArray::new(specs))
}

/// Keyword-style front end to [`labs`](crate::label::labs)
///
/// ```rust
/// let spec = plotspec::labs!(title = "Cars", x = "Weight", y = "MPG");
/// assert_eq!(spec.len(), 3);
/// assert!(plotspec::labs!().is_empty());
/// ```
#[macro_export]
macro_rules! labs {
    () => {
        $crate::label::labs(::std::iter::empty::<(&str, ::std::string::String)>())
    };
    ($($key:ident = $value:expr),+ $(,)?) => {
        $crate::label::labs([
            $((stringify!($key), ::std::string::String::from($value))),+
        ])
    };
}
