//! Builtin schemas and utility type declarations.
//!
//! Media fields reference a builtin `Media` record whose `formats` group
//! nests `MediaFormat` components; populate-aware declarations additionally
//! depend on three utility combinators. All of them live in the collection
//! like ordinary entries so name bindings resolve them uniformly.

use crate::attribute::{AttributeDefinition, Attributes};
use crate::collection::SchemaCollection;
use crate::schema::{SchemaDefinition, UtilityType};

pub const MEDIA_UID: &str = "builtins::Media";
pub const MEDIA_FORMAT_UID: &str = "builtins::MediaFormat";
pub const REQUIRED_BY_UID: &str = "builtins::RequiredBy";
pub const EXTRACT_NESTED_UID: &str = "builtins::ExtractNested";
pub const EXTRACT_FLAT_UID: &str = "builtins::ExtractFlat";

/// Register every builtin schema and utility type. Existing uids are left
/// untouched, so callers may pre-register replacements.
pub fn register_builtins(collection: &mut SchemaCollection) {
    collection.insert(media_schema());
    collection.insert(media_format_schema());
    for utility in utility_types() {
        collection.insert_utility(utility);
    }
}

pub fn media_schema() -> SchemaDefinition {
    let mut attributes = Attributes::new();
    for field in [
        "name",
        "alternativeText",
        "caption",
        "hash",
        "ext",
        "mime",
        "url",
        "previewUrl",
        "provider",
    ] {
        attributes.insert(field.to_string(), AttributeDefinition::string());
    }
    for field in ["width", "height", "size"] {
        attributes.insert(field.to_string(), AttributeDefinition::integer());
    }

    let mut formats = Attributes::new();
    for variant in ["thumbnail", "medium", "small"] {
        formats.insert(
            variant.to_string(),
            AttributeDefinition::component(MEDIA_FORMAT_UID, false),
        );
    }
    attributes.insert(
        "formats".to_string(),
        AttributeDefinition::nested(formats, false),
    );

    SchemaDefinition::builtin("Media", attributes)
}

pub fn media_format_schema() -> SchemaDefinition {
    let mut attributes = Attributes::new();
    for field in ["name", "hash", "ext", "mime", "path", "url"] {
        attributes.insert(field.to_string(), AttributeDefinition::string());
    }
    for field in ["width", "height", "size"] {
        attributes.insert(field.to_string(), AttributeDefinition::integer());
    }
    SchemaDefinition::builtin_component("MediaFormat", attributes)
}

pub fn utility_types() -> Vec<UtilityType> {
    vec![
        UtilityType {
            uid: REQUIRED_BY_UID.to_string(),
            name: "RequiredBy".to_string(),
            decl: "export type RequiredBy<T, K extends keyof T> = Required<Pick<T, K>> & Omit<T, K>;\n"
                .to_string(),
        },
        UtilityType {
            uid: EXTRACT_NESTED_UID.to_string(),
            name: "ExtractNested".to_string(),
            decl: "export type ExtractNested<T, K extends string> = T extends `${K}.${infer U}` ? U : never;\n"
                .to_string(),
        },
        UtilityType {
            uid: EXTRACT_FLAT_UID.to_string(),
            name: "ExtractFlat".to_string(),
            decl: "export type ExtractFlat<T, K extends string> = T extends string ? Extract<T, K> : T extends object ? { [P in keyof T]-?: ExtractFlat<T[P], K> } : never;\n"
                .to_string(),
        },
    ]
}
