//! Schema definitions: named attribute collections and utility types.

use crate::attribute::Attributes;
use serde::{Deserialize, Serialize};

/// What a schema describes, with role-specific data.
///
/// One tagged variant instead of a wrapper-class hierarchy: a plain content
/// type, a reusable structural sub-record (component), or a builtin shipped
/// with the generator. Builtin components (like media formats) render flat,
/// without identity or discriminator fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "camelCase")]
pub enum SchemaRole {
    Plain,
    Component { category: String },
    Builtin { component: bool },
}

/// Schema-level flags consulted by transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaOptions {
    #[serde(default)]
    pub draft_and_publish: bool,
    #[serde(default)]
    pub localized: bool,
}

/// A named collection of typed attributes describing one record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDefinition {
    /// Globally unique canonical identifier (`api::article.article`,
    /// `blocks.hero`, `builtins::Media`).
    pub uid: String,
    pub base_name: String,
    pub role: SchemaRole,
    pub attributes: Attributes,
    #[serde(default)]
    pub options: SchemaOptions,
}

impl SchemaDefinition {
    pub fn plain(name: impl Into<String>, attributes: Attributes) -> Self {
        let base_name = name.into();
        Self {
            uid: format!("api::{base_name}.{base_name}"),
            base_name,
            role: SchemaRole::Plain,
            attributes,
            options: SchemaOptions::default(),
        }
    }

    pub fn component(
        category: impl Into<String>,
        name: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        let category = category.into();
        let base_name = name.into();
        Self {
            uid: format!("{category}.{base_name}"),
            base_name,
            role: SchemaRole::Component { category },
            attributes,
            options: SchemaOptions::default(),
        }
    }

    pub fn builtin(name: impl Into<String>, attributes: Attributes) -> Self {
        let base_name = name.into();
        Self {
            uid: format!("builtins::{base_name}"),
            base_name,
            role: SchemaRole::Builtin { component: false },
            attributes,
            options: SchemaOptions::default(),
        }
    }

    pub fn builtin_component(name: impl Into<String>, attributes: Attributes) -> Self {
        let base_name = name.into();
        Self {
            uid: format!("builtins::{base_name}"),
            base_name,
            role: SchemaRole::Builtin { component: true },
            attributes,
            options: SchemaOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SchemaOptions) -> Self {
        self.options = options;
        self
    }
}

/// A literal type declaration registered alongside schemas and resolvable
/// through name bindings like any other dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityType {
    pub uid: String,
    pub name: String,
    pub decl: String,
}
