//! Advisory checks over built label specifications
//!
//! Builders never reject input. These checks report suspicious keys, such
//! as a misspelled aesthetic, without changing the spec.

use serde::Serialize;

use crate::aesthetic::is_known_aesthetic;
use crate::label::LabelSpec;
use crate::naming;
use crate::spec::SpecValue;

/// A non-fatal finding about a label specification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationWarning {
    /// Position of the offending unit within the spec
    pub index: usize,
    /// Aesthetic key as written
    pub aesthetic: String,
    pub message: String,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}: {}", self.index + 1, self.message)
    }
}

/// Report every scale unit whose aesthetic is not in the catalogue
pub fn validate_labels(spec: &LabelSpec) -> Vec<ValidationWarning> {
    spec.specs()
        .into_iter()
        .enumerate()
        .filter(|(_, unit)| unit.kind() == naming::KIND_SCALE)
        .filter_map(|(index, unit)| {
            let aesthetic = unit
                .prop(naming::AESTHETIC_PROP)
                .and_then(SpecValue::as_str)?;
            if is_known_aesthetic(aesthetic) {
                return None;
            }
            Some(ValidationWarning {
                index,
                aesthetic: aesthetic.to_string(),
                message: format!(
                    "'{}' is not a known aesthetic; the label may be ignored",
                    aesthetic
                ),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{ggtitle, labs};

    #[test]
    fn test_known_aesthetics_pass() {
        let spec = labs([("title", "T"), ("x", "X"), ("colour", "C")]);
        assert!(validate_labels(&spec).is_empty());
    }

    #[test]
    fn test_title_never_warns() {
        assert!(validate_labels(&LabelSpec::from(ggtitle("whatever"))).is_empty());
    }

    #[test]
    fn test_unknown_aesthetic_warns_with_position() {
        let spec = labs([("title", "T"), ("colr", "Species"), ("y", "Y")]);
        let warnings = validate_labels(&spec);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].index, 1);
        assert_eq!(warnings[0].aesthetic, "colr");
        assert!(warnings[0].to_string().starts_with("#2: 'colr'"));
    }

    #[test]
    fn test_validation_leaves_spec_untouched() {
        let spec = labs([("bogus", "B")]);
        let before = spec.clone();
        let _ = validate_labels(&spec);
        assert_eq!(spec, before);
    }
}
