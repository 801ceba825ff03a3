//! Attribute classification and populatability rules.

use content_schema::{AttributeDefinition, Attributes, ScalarKind};

/// Attribute category, as the renderer dispatches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Scalar,
    Enumeration,
    Password,
    Relation,
    Component,
    DynamicZone,
    Media,
    NestedGroup,
    Opaque,
}

/// Classify one attribute. Total: unknown wire kinds arrive as
/// [`AttributeDefinition::Opaque`] and classify as [`Kind::Opaque`].
pub fn classify(attr: &AttributeDefinition) -> Kind {
    match attr {
        AttributeDefinition::Scalar {
            scalar: ScalarKind::Password,
            ..
        } => Kind::Password,
        AttributeDefinition::Scalar { .. } => Kind::Scalar,
        AttributeDefinition::Enumeration { .. } => Kind::Enumeration,
        AttributeDefinition::Relation { .. } => Kind::Relation,
        AttributeDefinition::Component { .. } => Kind::Component,
        AttributeDefinition::DynamicZone { .. } => Kind::DynamicZone,
        AttributeDefinition::Media { .. } => Kind::Media,
        AttributeDefinition::NestedGroup { .. } => Kind::NestedGroup,
        AttributeDefinition::Opaque => Kind::Opaque,
    }
}

/// Whether a field's presence depends on the caller's populate projection.
///
/// Populatable fields render optional at the containing-record level no
/// matter what their `required` flag says: presence is decided per query,
/// so static optionality has to be conservative. Nested groups count only
/// when explicitly nullable.
pub fn is_populatable(attr: &AttributeDefinition) -> bool {
    match classify(attr) {
        Kind::Relation | Kind::Component | Kind::DynamicZone | Kind::Media => true,
        Kind::NestedGroup => {
            matches!(attr, AttributeDefinition::NestedGroup { nullable: true, .. })
        }
        _ => false,
    }
}

/// Flattened populatability check: a relation buried inside a non-nullable
/// nested group still makes the schema projection-aware.
pub fn has_populatable_attributes(attrs: &Attributes) -> bool {
    attrs.values().any(|attr| {
        if is_populatable(attr) {
            return true;
        }
        match attr {
            AttributeDefinition::NestedGroup { fields, .. } => has_populatable_attributes(fields),
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_schema::RelationKind;

    #[test]
    fn password_is_its_own_kind() {
        assert_eq!(
            classify(&AttributeDefinition::scalar(ScalarKind::Password)),
            Kind::Password
        );
        assert_eq!(
            classify(&AttributeDefinition::scalar(ScalarKind::Uid)),
            Kind::Scalar
        );
    }

    #[test]
    fn populatable_kinds() {
        assert!(is_populatable(&AttributeDefinition::media(false)));
        assert!(is_populatable(&AttributeDefinition::component("blocks.hero", true)));
        assert!(is_populatable(&AttributeDefinition::dynamic_zone(&[])));
        assert!(is_populatable(&AttributeDefinition::relation(
            "api::tag.tag",
            RelationKind::OneToOne
        )));
        assert!(!is_populatable(&AttributeDefinition::string().required()));
        assert!(!is_populatable(&AttributeDefinition::enumeration(&["a"])));
        assert!(!is_populatable(&AttributeDefinition::Opaque));
    }

    #[test]
    fn nested_group_populatable_only_when_nullable() {
        let fields = Attributes::new();
        assert!(!is_populatable(&AttributeDefinition::nested(fields.clone(), false)));
        assert!(is_populatable(&AttributeDefinition::nested(fields, true)));
    }

    #[test]
    fn flattened_check_recurses() {
        let mut inner = Attributes::new();
        inner.insert(
            "logo".into(),
            AttributeDefinition::media(false),
        );
        let mut attrs = Attributes::new();
        attrs.insert("branding".into(), AttributeDefinition::nested(inner, false));

        // The group itself is not populatable, but the media inside is.
        assert!(!is_populatable(&attrs["branding"]));
        assert!(has_populatable_attributes(&attrs));

        let mut plain = Attributes::new();
        plain.insert("title".into(), AttributeDefinition::string());
        assert!(!has_populatable_attributes(&plain));
    }
}
