//! Result type of `labs`

use serde::{Deserialize, Serialize};

use crate::spec::{FeatureSpec, FeatureSpecArray};

/// What a `labs` call produced
///
/// Exactly one pair unwraps to `Single`; any other count is an `Array`,
/// including the empty one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelSpec {
    Single(FeatureSpec),
    Array(FeatureSpecArray),
}

impl LabelSpec {
    /// Number of units held
    pub fn len(&self) -> usize {
        match self {
            LabelSpec::Single(_) => 1,
            LabelSpec::Array(array) => array.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_single(&self) -> Option<&FeatureSpec> {
        match self {
            LabelSpec::Single(spec) => Some(spec),
            LabelSpec::Array(_) => None,
        }
    }

    /// Borrow every unit in order
    pub fn specs(&self) -> Vec<&FeatureSpec> {
        match self {
            LabelSpec::Single(spec) => vec![spec],
            LabelSpec::Array(array) => array.iter().collect(),
        }
    }

    /// Flatten into a list of units, in order
    pub fn into_specs(self) -> Vec<FeatureSpec> {
        match self {
            LabelSpec::Single(spec) => vec![spec],
            LabelSpec::Array(array) => array.into_iter().collect(),
        }
    }
}

impl From<FeatureSpec> for LabelSpec {
    fn from(spec: FeatureSpec) -> Self {
        LabelSpec::Single(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{ggtitle, ylab};
    use serde_json::json;

    #[test]
    fn test_single_serializes_as_object() {
        let spec = LabelSpec::from(ggtitle("Hello"));
        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!({"kind": "ggtitle", "text": "Hello"})
        );
    }

    #[test]
    fn test_array_serializes_as_list() {
        let spec = LabelSpec::Array(FeatureSpecArray::new(vec![ggtitle("Hello"), ylab("MPG")]));
        assert_eq!(
            serde_json::to_value(&spec).unwrap(),
            json!([
                {"kind": "ggtitle", "text": "Hello"},
                {"kind": "scale", "name": "MPG", "aesthetic": "y"}
            ])
        );
    }

    #[test]
    fn test_deserialize_picks_variant_by_shape() {
        let single: LabelSpec =
            serde_json::from_value(json!({"kind": "ggtitle", "text": "Hi"})).unwrap();
        assert_eq!(single, LabelSpec::Single(ggtitle("Hi")));

        let array: LabelSpec = serde_json::from_value(json!([])).unwrap();
        assert_eq!(array, LabelSpec::Array(FeatureSpecArray::default()));
    }

    #[test]
    fn test_accessors() {
        let single = LabelSpec::from(ylab("MPG"));
        assert_eq!(single.len(), 1);
        assert!(!single.is_empty());
        assert_eq!(single.as_single(), Some(&ylab("MPG")));
        assert_eq!(single.specs(), vec![&ylab("MPG")]);

        let array = LabelSpec::Array(FeatureSpecArray::new(vec![ggtitle("T"), ylab("Y")]));
        assert_eq!(array.as_single(), None);
        assert_eq!(array.specs().len(), 2);
        assert_eq!(array.into_specs(), vec![ggtitle("T"), ylab("Y")]);
    }
}
