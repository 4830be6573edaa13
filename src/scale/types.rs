//! Scale specification builder

use crate::naming;
use crate::spec::{FeatureSpec, SpecValue};

/// Builder for a `scale` feature
///
/// Only the attributes that were set end up in the built unit, so a scale
/// carrying just a name is indistinguishable from one built by
/// [`scale`](super::scale).
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleSpec {
    aesthetic: String,
    name: Option<String>,
    breaks: Option<SpecValue>,
    labels: Option<SpecValue>,
    limits: Option<SpecValue>,
    expand: Option<SpecValue>,
    na_value: Option<SpecValue>,
    guide: Option<SpecValue>,
    trans: Option<String>,
    format: Option<String>,
}

impl ScaleSpec {
    pub fn new(aesthetic: impl Into<String>) -> Self {
        Self {
            aesthetic: aesthetic.into(),
            name: None,
            breaks: None,
            labels: None,
            limits: None,
            expand: None,
            na_value: None,
            guide: None,
            trans: None,
            format: None,
        }
    }

    /// Axis label or legend title
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn breaks(mut self, breaks: impl Into<SpecValue>) -> Self {
        self.breaks = Some(breaks.into());
        self
    }

    /// Text shown at each break
    pub fn labels(mut self, labels: impl Into<SpecValue>) -> Self {
        self.labels = Some(labels.into());
        self
    }

    pub fn limits(mut self, limits: impl Into<SpecValue>) -> Self {
        self.limits = Some(limits.into());
        self
    }

    /// Expansion constants: `[multiplicative, additive]`
    pub fn expand(mut self, expand: impl Into<SpecValue>) -> Self {
        self.expand = Some(expand.into());
        self
    }

    /// Value used in place of missing data
    pub fn na_value(mut self, na_value: impl Into<SpecValue>) -> Self {
        self.na_value = Some(na_value.into());
        self
    }

    /// Guide name (`legend`, `colorbar`, `none`) or a map of guide options
    pub fn guide(mut self, guide: impl Into<SpecValue>) -> Self {
        self.guide = Some(guide.into());
        self
    }

    /// Transformation name, e.g. `log10` or `sqrt`
    pub fn trans(mut self, trans: impl Into<String>) -> Self {
        self.trans = Some(trans.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn aesthetic(&self) -> &str {
        &self.aesthetic
    }

    pub fn build(self) -> FeatureSpec {
        let mut spec = FeatureSpec::new(naming::KIND_SCALE, self.name)
            .with_prop(naming::AESTHETIC_PROP, self.aesthetic);

        let optional = [
            ("breaks", self.breaks),
            ("labels", self.labels),
            ("limits", self.limits),
            ("expand", self.expand),
            ("na_value", self.na_value),
            ("guide", self.guide),
            ("trans", self.trans.map(SpecValue::String)),
            ("format", self.format.map(SpecValue::String)),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                spec = spec.with_prop(key, value);
            }
        }
        spec
    }
}

impl From<ScaleSpec> for FeatureSpec {
    fn from(builder: ScaleSpec) -> Self {
        builder.build()
    }
}
