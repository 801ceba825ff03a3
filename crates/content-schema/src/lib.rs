//! In-memory schema model for headless content types.
//!
//! `content-schema` holds the data side of type generation: attribute and
//! schema definitions, the wire-format parser, builtin schemas, and the
//! ordered transform list that mutates schemas before they are frozen.
//!
//! # Lifecycle
//!
//! ```text
//! Readers (external)      Build phase                 Frozen
//! ──────────────────   ─────────────────────────   ─────────────
//! schema documents  ─> SchemaCollection            SchemaSet
//!                        + register_builtins   ──>   read-only,
//!                        + apply_transforms          render-ready
//! ```
//!
//! Everything after [`SchemaCollection::finalize`] is read-only; the
//! generation engine (`content-typegen`) only ever sees a [`SchemaSet`].
//!
//! # Example
//!
//! ```
//! use content_schema::input::parse_attribute;
//! use content_schema::AttributeDefinition;
//!
//! let attr = parse_attribute(&serde_json::json!({ "type": "string", "required": true }));
//! assert!(matches!(attr, AttributeDefinition::Scalar { required: true, .. }));
//!
//! // Unknown kinds degrade instead of failing.
//! let attr = parse_attribute(&serde_json::json!({ "type": "somePluginField" }));
//! assert_eq!(attr, AttributeDefinition::Opaque);
//! ```

pub mod attribute;
pub mod builtin;
pub mod collection;
pub mod input;
pub mod schema;
pub mod transform;

pub use attribute::{
    AttributeDefinition, Attributes, CERTAINLY_REQUIRED_KEY, RelationKind, ScalarKind,
};
pub use builtin::register_builtins;
pub use collection::{SchemaCollection, SchemaSet};
pub use input::ParseError;
pub use schema::{SchemaDefinition, SchemaOptions, SchemaRole, UtilityType};
pub use transform::{Transform, apply_transforms};
