//! URL alias transform.

use super::Transform;
use crate::attribute::AttributeDefinition;
use crate::collection::SchemaCollection;
use crate::schema::SchemaRole;

/// Static instance for transform lists.
pub static URL_ALIAS: UrlAlias = UrlAlias;

/// Adds a `url_path` string to every plain schema. Required by authored
/// intent only: the path plugin fills it server-side, so the stronger
/// guarantee does not apply.
pub struct UrlAlias;

impl Transform for UrlAlias {
    fn name(&self) -> &'static str {
        "url-alias"
    }

    fn apply(&self, collection: &mut SchemaCollection) {
        for schema in collection.schemas_mut() {
            if schema.role != SchemaRole::Plain {
                continue;
            }
            schema.attributes.insert(
                "url_path".to_string(),
                AttributeDefinition::string().required(),
            );
        }
    }
}
