//! Publication-lifecycle transform.

use super::Transform;
use crate::attribute::AttributeDefinition;
use crate::collection::SchemaCollection;
use crate::schema::SchemaRole;

/// Static instance for transform lists.
pub static PUBLICATION: Publication = Publication;

/// Adds the lifecycle timestamps (`createdAt`, `updatedAt`, `publishedAt`)
/// to every plain schema with draft-and-publish enabled.
pub struct Publication;

impl Transform for Publication {
    fn name(&self) -> &'static str {
        "publication"
    }

    fn apply(&self, collection: &mut SchemaCollection) {
        for schema in collection.schemas_mut() {
            if schema.role != SchemaRole::Plain || !schema.options.draft_and_publish {
                continue;
            }
            for field in ["createdAt", "updatedAt", "publishedAt"] {
                schema.attributes.insert(
                    field.to_string(),
                    AttributeDefinition::string().required().certainly_required(),
                );
            }
        }
    }
}
