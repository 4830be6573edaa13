//! Feature specification types
//!
//! A feature is identified by its kind (e.g. `ggtitle`, `scale`), an optional
//! name, and a flat payload of attributes. The JSON form puts `kind`, the
//! name when present, and every attribute side by side in one object.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::naming;

/// Attribute value carried by a feature specification
///
/// Numbers keep their JSON representation, so integers stay integers.
/// Non-finite floats have no JSON form and become `Null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Null,
    Boolean(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<SpecValue>),
    Object(BTreeMap<String, SpecValue>),
}

impl SpecValue {
    /// Borrow the string payload, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SpecValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SpecValue::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, SpecValue>> {
        match self {
            SpecValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SpecValue::Null)
    }
}

impl From<&str> for SpecValue {
    fn from(value: &str) -> Self {
        SpecValue::String(value.to_string())
    }
}

impl From<String> for SpecValue {
    fn from(value: String) -> Self {
        SpecValue::String(value)
    }
}

impl From<bool> for SpecValue {
    fn from(value: bool) -> Self {
        SpecValue::Boolean(value)
    }
}

impl From<f64> for SpecValue {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(SpecValue::Number)
            .unwrap_or(SpecValue::Null)
    }
}

impl From<i64> for SpecValue {
    fn from(value: i64) -> Self {
        SpecValue::Number(value.into())
    }
}

impl<T: Into<SpecValue>> From<Vec<T>> for SpecValue {
    fn from(values: Vec<T>) -> Self {
        SpecValue::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<SpecValue>> From<BTreeMap<String, V>> for SpecValue {
    fn from(entries: BTreeMap<String, V>) -> Self {
        SpecValue::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key, value.into()))
                .collect(),
        )
    }
}

/// A single declarative specification unit
///
/// Built once through [`FeatureSpec::new`] and [`FeatureSpec::with_prop`];
/// the public API offers no way to mutate a finished unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSpec {
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(flatten)]
    props: BTreeMap<String, SpecValue>,
}

impl FeatureSpec {
    /// Create a unit of the given kind with no attributes
    pub fn new(kind: impl Into<String>, name: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            name,
            props: BTreeMap::new(),
        }
    }

    /// Add an attribute, replacing any previous value under the same key.
    ///
    /// `name` is not an attribute: a string sets the unit's name and `Null`
    /// clears it. `kind` is fixed at construction and is ignored here.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<SpecValue>) -> Self {
        let key: String = key.into();
        let value: SpecValue = value.into();
        match key.as_str() {
            naming::NAME_FIELD => match value {
                SpecValue::String(name) => self.name = Some(name),
                SpecValue::Null => self.name = None,
                other => tracing::debug!(value = ?other, "ignoring non-string feature name"),
            },
            naming::KIND_FIELD => {
                tracing::debug!(kind = %self.kind, "ignoring attempt to override feature kind")
            }
            _ => {
                self.props.insert(key, value);
            }
        }
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn props(&self) -> &BTreeMap<String, SpecValue> {
        &self.props
    }

    /// Look up a single attribute
    pub fn prop(&self, key: &str) -> Option<&SpecValue> {
        self.props.get(key)
    }
}

/// Ordered collection of specification units
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSpecArray {
    elements: Vec<FeatureSpec>,
}

impl FeatureSpecArray {
    pub fn new(elements: Vec<FeatureSpec>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeatureSpec> {
        self.elements.iter()
    }

    pub fn elements(&self) -> &[FeatureSpec] {
        &self.elements
    }
}

impl IntoIterator for FeatureSpecArray {
    type Item = FeatureSpec;
    type IntoIter = std::vec::IntoIter<FeatureSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeatureSpecArray {
    type Item = &'a FeatureSpec;
    type IntoIter = std::slice::Iter<'a, FeatureSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl FromIterator<FeatureSpec> for FeatureSpecArray {
    fn from_iter<I: IntoIterator<Item = FeatureSpec>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
