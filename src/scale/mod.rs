//! Scale specifications
//!
//! This module holds the generic scale labeler used by `xlab`, `ylab` and
//! `labs`, plus a builder for the remaining scale attributes.

mod types;

pub use types::ScaleSpec;

use crate::spec::FeatureSpec;

/// Build a scale unit that only sets the display label of an aesthetic.
///
/// The aesthetic key is not checked; unknown names are left for the
/// downstream scale resolution to accept or reject.
pub fn scale(aesthetic: impl Into<String>, label: impl Into<String>) -> FeatureSpec {
    ScaleSpec::new(aesthetic).name(label).build()
}
