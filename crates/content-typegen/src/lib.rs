//! TypeScript interface generation for headless content schemas.
//!
//! `content-typegen` is the type-expression synthesis engine: it walks
//! finalized attribute schemas and deterministically emits declarations with
//! correct optionality, nullability, array-ness, and populate-projection
//! generics. It owns no I/O: readers, writers, and CLI concerns live with
//! external collaborators.
//!
//! # Architecture
//!
//! ```text
//! SchemaSet                  Engine                       Output
//! ─────────────   ──────────────────────────────   ──────────────────
//! schemas      ─> classify ─> deps ─> bindings ─┐
//! utilities    ─────────────────────────────────┼─> render ─> compose
//!                                               └─> declarations +
//!                                                   dependency lists
//! ```
//!
//! Dependency discovery and bindings run for the whole set before any
//! declaration is composed; composition is pure, so schemas can be rendered
//! in any order (or in parallel) after that point.
//!
//! # Example
//!
//! ```
//! use content_schema::{AttributeDefinition, SchemaCollection, SchemaDefinition, register_builtins};
//! use content_typegen::{GenerateOptions, generate};
//!
//! let mut collection = SchemaCollection::new();
//! register_builtins(&mut collection);
//!
//! let mut attributes = std::collections::BTreeMap::new();
//! attributes.insert("title".to_string(), AttributeDefinition::string());
//! attributes.insert("cover".to_string(), AttributeDefinition::media(false));
//! collection.insert(SchemaDefinition::plain("article", attributes));
//!
//! let output = generate(&collection.finalize(), &GenerateOptions::default());
//! let article = output.types.iter().find(|t| t.uid == "api::article.article").unwrap();
//! assert!(article.code.contains("export interface IArticle<Populate extends string = never>"));
//! assert!(article.code.contains("cover?: { data: IMedia | null; };"));
//! ```

pub mod binding;
pub mod classify;
pub mod compose;
pub mod deps;
pub mod diag;
pub mod generate;
pub mod naming;
pub mod options;
pub mod render;

pub use binding::{Binding, NameBinding};
pub use classify::{Kind, classify, has_populatable_attributes, is_populatable};
pub use compose::{Composed, ComposeShape, compose};
pub use deps::dependencies;
pub use diag::Diagnostic;
pub use generate::{GeneratedType, Output, generate};
pub use naming::display_name;
pub use options::GenerateOptions;
pub use render::FieldRenderer;
