//! Dependency discovery over attribute collections.

use crate::classify::has_populatable_attributes;
use crate::options::GenerateOptions;
use content_schema::{AttributeDefinition, Attributes, SchemaDefinition};
use std::collections::BTreeSet;

/// Compute the set of external identifiers a schema references.
///
/// Nested groups are walked recursively. Projection-aware schemas (any
/// populatable attribute in the flattened set) additionally depend on the
/// three utility combinators so that bindings can resolve them before
/// rendering starts. Uniqueness comes with the set type.
pub fn dependencies(schema: &SchemaDefinition, options: &GenerateOptions) -> BTreeSet<String> {
    let mut deps = BTreeSet::new();
    collect(&schema.attributes, options, &mut deps);
    if has_populatable_attributes(&schema.attributes) {
        deps.insert(options.required_by_uid.clone());
        deps.insert(options.extract_nested_uid.clone());
        deps.insert(options.extract_flat_uid.clone());
    }
    deps
}

fn collect(attrs: &Attributes, options: &GenerateOptions, deps: &mut BTreeSet<String>) {
    for attr in attrs.values() {
        match attr {
            AttributeDefinition::Relation { target, .. }
            | AttributeDefinition::Component { target, .. } => {
                deps.insert(target.clone());
            }
            AttributeDefinition::DynamicZone { components } => {
                deps.extend(components.iter().cloned());
            }
            AttributeDefinition::Media { .. } => {
                deps.insert(options.media_uid.clone());
            }
            AttributeDefinition::NestedGroup { fields, .. } => collect(fields, options, deps),
            _ => {}
        }
    }
}
