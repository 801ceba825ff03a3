//! Localization transform.

use super::Transform;
use crate::attribute::{AttributeDefinition, RelationKind};
use crate::collection::SchemaCollection;
use crate::schema::SchemaRole;

/// Static instance for transform lists.
pub static I18N: I18n = I18n;

/// Adds `locale` and a self-referential `localizations` relation to every
/// localized plain schema. The locale is always present on delivered
/// records, so it carries the certainly-required guarantee; localizations
/// are a populatable relation like any other.
pub struct I18n;

impl Transform for I18n {
    fn name(&self) -> &'static str {
        "i18n"
    }

    fn apply(&self, collection: &mut SchemaCollection) {
        for schema in collection.schemas_mut() {
            if schema.role != SchemaRole::Plain || !schema.options.localized {
                continue;
            }
            let uid = schema.uid.clone();
            schema.attributes.insert(
                "locale".to_string(),
                AttributeDefinition::string().required().certainly_required(),
            );
            schema.attributes.insert(
                "localizations".to_string(),
                AttributeDefinition::relation(uid, RelationKind::OneToMany),
            );
        }
    }
}
