//! Attribute definitions for content-type schemas.
//!
//! An attribute is one field of a schema: a scalar, an enumeration, a
//! reference to another schema (relation/component), a polymorphic zone, a
//! media field, or an inline nested group. Unknown wire kinds are carried as
//! [`AttributeDefinition::Opaque`] so that newer schema fields never break
//! generation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wire-format key for the stronger-than-`required` guarantee.
///
/// Plain `required` is authored intent and can be bypassed by framework
/// population rules; only attributes flagged with this key render without a
/// `null` union. Synthetic and transform-injected attributes set it.
pub const CERTAINLY_REQUIRED_KEY: &str = "certainlyRequired";

/// Attribute mapping of one schema. Order-irrelevant; `BTreeMap` keeps
/// iteration deterministic.
pub type Attributes = BTreeMap<String, AttributeDefinition>;

/// Scalar attribute kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarKind {
    String,
    Text,
    RichText,
    Email,
    Uid,
    Integer,
    BigInteger,
    Decimal,
    Float,
    Date,
    DateTime,
    Time,
    Boolean,
    Json,
    Password,
}

/// Relation cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationKind {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl RelationKind {
    /// Whether the owning side holds a collection of targets.
    pub fn is_to_many(self) -> bool {
        matches!(self, Self::OneToMany | Self::ManyToMany)
    }
}

/// One schema field, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AttributeDefinition {
    Scalar {
        scalar: ScalarKind,
        #[serde(default)]
        required: bool,
        #[serde(default)]
        certainly_required: bool,
    },
    Enumeration {
        #[serde(default)]
        values: Vec<String>,
        #[serde(default)]
        required: bool,
    },
    Relation {
        target: String,
        relation: RelationKind,
        #[serde(default)]
        required: bool,
    },
    Component {
        target: String,
        #[serde(default)]
        repeatable: bool,
        #[serde(default)]
        required: bool,
    },
    DynamicZone {
        #[serde(default)]
        components: Vec<String>,
    },
    Media {
        #[serde(default)]
        multiple: bool,
        #[serde(default)]
        required: bool,
        #[serde(default)]
        certainly_required: bool,
    },
    /// Inline record group, possibly recursive. Cross-schema cycles are fine
    /// (they resolve to named references); nested groups themselves must not
    /// cycle within one schema.
    NestedGroup {
        fields: Attributes,
        #[serde(default)]
        nullable: bool,
    },
    /// Forward-compatible passthrough for unknown wire kinds.
    Opaque,
}

impl AttributeDefinition {
    pub fn scalar(kind: ScalarKind) -> Self {
        Self::Scalar {
            scalar: kind,
            required: false,
            certainly_required: false,
        }
    }

    pub fn string() -> Self {
        Self::scalar(ScalarKind::String)
    }

    pub fn integer() -> Self {
        Self::scalar(ScalarKind::Integer)
    }

    pub fn enumeration(values: &[&str]) -> Self {
        Self::Enumeration {
            values: values.iter().map(|v| v.to_string()).collect(),
            required: false,
        }
    }

    pub fn relation(target: impl Into<String>, relation: RelationKind) -> Self {
        Self::Relation {
            target: target.into(),
            relation,
            required: false,
        }
    }

    pub fn component(target: impl Into<String>, repeatable: bool) -> Self {
        Self::Component {
            target: target.into(),
            repeatable,
            required: false,
        }
    }

    pub fn dynamic_zone(components: &[&str]) -> Self {
        Self::DynamicZone {
            components: components.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn media(multiple: bool) -> Self {
        Self::Media {
            multiple,
            required: false,
            certainly_required: false,
        }
    }

    pub fn nested(fields: Attributes, nullable: bool) -> Self {
        Self::NestedGroup { fields, nullable }
    }

    /// Mark the attribute as required by authored intent. No-op for kinds
    /// that carry no `required` flag.
    pub fn required(mut self) -> Self {
        match &mut self {
            Self::Scalar { required, .. }
            | Self::Enumeration { required, .. }
            | Self::Relation { required, .. }
            | Self::Component { required, .. }
            | Self::Media { required, .. } => *required = true,
            _ => {}
        }
        self
    }

    /// Assert the stronger-than-`required` guarantee. Only scalars and media
    /// carry it.
    pub fn certainly_required(mut self) -> Self {
        match &mut self {
            Self::Scalar {
                certainly_required, ..
            }
            | Self::Media {
                certainly_required, ..
            } => *certainly_required = true,
            _ => {}
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_many_cardinality() {
        assert!(RelationKind::OneToMany.is_to_many());
        assert!(RelationKind::ManyToMany.is_to_many());
        assert!(!RelationKind::OneToOne.is_to_many());
        assert!(!RelationKind::ManyToOne.is_to_many());
    }

    #[test]
    fn builder_flags() {
        let attr = AttributeDefinition::string().required().certainly_required();
        assert_eq!(
            attr,
            AttributeDefinition::Scalar {
                scalar: ScalarKind::String,
                required: true,
                certainly_required: true,
            }
        );
    }

    #[test]
    fn certainly_required_is_noop_for_relations() {
        let attr =
            AttributeDefinition::relation("api::tag.tag", RelationKind::OneToOne).certainly_required();
        assert_eq!(
            attr,
            AttributeDefinition::Relation {
                target: "api::tag.tag".into(),
                relation: RelationKind::OneToOne,
                required: false,
            }
        );
    }

    #[test]
    fn canonical_form_round_trips() {
        let attr = AttributeDefinition::enumeration(&["draft", "published"]);
        let json = serde_json::to_value(&attr).unwrap();
        assert_eq!(json["kind"], "enumeration");
        let back: AttributeDefinition = serde_json::from_value(json).unwrap();
        assert_eq!(back, attr);
    }
}
