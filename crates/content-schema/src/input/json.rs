//! Wire-format parser for content-type schema documents.
//!
//! Attribute parsing is total: unknown `type` tags become
//! [`AttributeDefinition::Opaque`], a missing `enum` array becomes an empty
//! value list, a missing `components` array an empty zone. Only structurally
//! hopeless documents (not an object at all) are errors: strict validation
//! belongs to the reader layer, not here.

use crate::attribute::{
    AttributeDefinition, Attributes, CERTAINLY_REQUIRED_KEY, RelationKind, ScalarKind,
};
use crate::schema::{SchemaDefinition, SchemaOptions};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("expected a JSON object for `{0}`")]
    NotAnObject(String),

    #[error("component uid `{0}` is missing a category segment")]
    BadComponentUid(String),
}

/// Parse a content-type document into a `Plain` schema.
///
/// The uid follows the `api::<name>.<name>` convention.
pub fn parse_content_type(name: &str, value: &Value) -> Result<SchemaDefinition, ParseError> {
    if !value.is_object() {
        return Err(ParseError::NotAnObject(name.to_string()));
    }
    let attributes = parse_attributes(value.get("attributes").unwrap_or(&Value::Null));
    Ok(SchemaDefinition::plain(name, attributes).with_options(parse_options(value)))
}

/// Parse a component document. The uid is `<category>.<name>`.
pub fn parse_component(uid: &str, value: &Value) -> Result<SchemaDefinition, ParseError> {
    if !value.is_object() {
        return Err(ParseError::NotAnObject(uid.to_string()));
    }
    let (category, name) = uid
        .split_once('.')
        .ok_or_else(|| ParseError::BadComponentUid(uid.to_string()))?;
    let attributes = parse_attributes(value.get("attributes").unwrap_or(&Value::Null));
    Ok(SchemaDefinition::component(category, name, attributes))
}

/// Parse an attribute mapping. Non-object input yields an empty mapping.
pub fn parse_attributes(value: &Value) -> Attributes {
    let mut attributes = Attributes::new();
    if let Some(map) = value.as_object() {
        for (name, attr) in map {
            attributes.insert(name.clone(), parse_attribute(attr));
        }
    }
    attributes
}

/// Parse one attribute definition. Total over any JSON value.
pub fn parse_attribute(value: &Value) -> AttributeDefinition {
    if !value.is_object() {
        return AttributeDefinition::Opaque;
    }
    let required = value
        .get("required")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let certainly_required = value
        .get(CERTAINLY_REQUIRED_KEY)
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let scalar = |kind: ScalarKind| AttributeDefinition::Scalar {
        scalar: kind,
        required,
        certainly_required,
    };

    match value.get("type").and_then(Value::as_str) {
        Some("string") => scalar(ScalarKind::String),
        Some("text") => scalar(ScalarKind::Text),
        Some("richtext") => scalar(ScalarKind::RichText),
        Some("email") => scalar(ScalarKind::Email),
        Some("uid") => scalar(ScalarKind::Uid),
        Some("integer") => scalar(ScalarKind::Integer),
        Some("biginteger") => scalar(ScalarKind::BigInteger),
        Some("decimal") => scalar(ScalarKind::Decimal),
        Some("float") => scalar(ScalarKind::Float),
        Some("date") => scalar(ScalarKind::Date),
        Some("datetime") => scalar(ScalarKind::DateTime),
        Some("time") => scalar(ScalarKind::Time),
        Some("boolean") => scalar(ScalarKind::Boolean),
        Some("json") => scalar(ScalarKind::Json),
        Some("password") => scalar(ScalarKind::Password),
        Some("enumeration") => AttributeDefinition::Enumeration {
            values: string_array(value.get("enum")),
            required,
        },
        Some("relation") => match value.get("target").and_then(Value::as_str) {
            Some(target) => AttributeDefinition::Relation {
                target: target.to_string(),
                relation: parse_relation_kind(value.get("relation").and_then(Value::as_str)),
                required,
            },
            None => AttributeDefinition::Opaque,
        },
        Some("component") => match value.get("component").and_then(Value::as_str) {
            Some(target) => AttributeDefinition::Component {
                target: target.to_string(),
                repeatable: value
                    .get("repeatable")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
                required,
            },
            None => AttributeDefinition::Opaque,
        },
        Some("dynamiczone") => AttributeDefinition::DynamicZone {
            components: string_array(value.get("components")),
        },
        Some("media") => AttributeDefinition::Media {
            multiple: value
                .get("multiple")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            required,
            certainly_required,
        },
        Some("nested") => AttributeDefinition::NestedGroup {
            fields: parse_attributes(value.get("fields").unwrap_or(&Value::Null)),
            nullable: value
                .get("nullable")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        },
        _ => AttributeDefinition::Opaque,
    }
}

fn parse_relation_kind(value: Option<&str>) -> RelationKind {
    match value {
        Some("oneToOne") => RelationKind::OneToOne,
        Some("oneToMany") => RelationKind::OneToMany,
        Some("manyToOne") => RelationKind::ManyToOne,
        Some("manyToMany") => RelationKind::ManyToMany,
        // Legacy spellings only distinguish to-many from to-one.
        Some(other) if other.ends_with("ToMany") || other == "manyWay" => RelationKind::OneToMany,
        _ => RelationKind::OneToOne,
    }
}

fn string_array(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn parse_options(value: &Value) -> SchemaOptions {
    SchemaOptions {
        draft_and_publish: value
            .pointer("/options/draftAndPublish")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        localized: value
            .pointer("/pluginOptions/i18n/localized")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    }
}
