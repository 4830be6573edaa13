//! Specification primitives
//!
//! Every builder in this crate produces a [`FeatureSpec`] (one unit) or a
//! [`FeatureSpecArray`] (an ordered collection of units). Both are plain,
//! immutable data meant to be merged into a plot specification downstream.

mod types;

pub use types::{FeatureSpec, FeatureSpecArray, SpecValue};
