//! Record-type composition.
//!
//! Combines every attribute of one schema into a whole declaration. Plain
//! and builtin records nest their fields under `attributes` next to the
//! numeric identity field; components render flat. When the flattened
//! attribute set is projection-aware, the field body is wrapped in the
//! required-by-projection combinator and the declaration gains a populate
//! type parameter defaulting to `never`.

use crate::binding::NameBinding;
use crate::classify::has_populatable_attributes;
use crate::diag::Diagnostic;
use crate::naming::display_name;
use crate::options::GenerateOptions;
use crate::render::FieldRenderer;
use content_schema::{SchemaDefinition, SchemaRole};
use std::fmt::Write;

/// Fallback combinator names when the binding cannot resolve them.
const DEFAULT_REQUIRED_BY: &str = "RequiredBy";
const DEFAULT_EXTRACT_FLAT: &str = "ExtractFlat";

/// A composed declaration plus whatever the renderer flagged on the way.
#[derive(Debug, Clone)]
pub struct Composed {
    pub code: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Structural toggles for sub-records. Explicit, never inferred: ordinary
/// components take both flags from the options, builtin components carry
/// neither.
#[derive(Debug, Clone, Copy)]
pub struct ComposeShape {
    pub identity: bool,
    pub discriminator: bool,
}

impl ComposeShape {
    pub fn for_role(role: &SchemaRole, options: &GenerateOptions) -> Self {
        match role {
            SchemaRole::Builtin { component: true } => Self {
                identity: false,
                discriminator: false,
            },
            _ => Self {
                identity: options.component_identity,
                discriminator: options.component_discriminator,
            },
        }
    }
}

/// Compose one schema into its full declaration.
///
/// The binding must be built over the finalized set before any call; a
/// field may reference a schema defined later in iteration order.
pub fn compose(
    schema: &SchemaDefinition,
    binding: &NameBinding,
    options: &GenerateOptions,
) -> Composed {
    let name = display_name(schema, options);
    let populatable = has_populatable_attributes(&schema.attributes);
    let generic = if populatable {
        format!("<{} extends string = never>", options.populate_param)
    } else {
        String::new()
    };
    let required_by = binding
        .name(&options.required_by_uid)
        .unwrap_or(DEFAULT_REQUIRED_BY);
    let extract_flat = binding
        .name(&options.extract_flat_uid)
        .unwrap_or(DEFAULT_EXTRACT_FLAT);

    let mut renderer = FieldRenderer::new(&schema.uid, binding, options);
    let mut out = String::new();

    match &schema.role {
        SchemaRole::Plain | SchemaRole::Builtin { component: false } => {
            let fields = renderer.fields(&schema.attributes, 2);
            writeln!(out, "export interface {name}{generic} {{").unwrap();
            out.push_str("  id: number;\n");
            if populatable {
                writeln!(out, "  attributes: {required_by}<{{").unwrap();
                out.push_str(&fields);
                writeln!(out, "  }}, {extract_flat}<{}, string>>;", options.populate_param)
                    .unwrap();
            } else {
                out.push_str("  attributes: {\n");
                out.push_str(&fields);
                out.push_str("  };\n");
            }
            out.push_str("}\n");
        }
        role => {
            let shape = ComposeShape::for_role(role, options);
            let fields = renderer.fields(&schema.attributes, 1);
            let mut head = String::new();
            if shape.identity {
                head.push_str("  id: number;\n");
            }
            if shape.discriminator {
                writeln!(head, "  __component?: '{}';", schema.uid).unwrap();
            }
            if populatable {
                // An interface body cannot splice a wrapped field set, so
                // projection-aware components are intersection aliases.
                if head.is_empty() {
                    writeln!(out, "export type {name}{generic} = {required_by}<{{").unwrap();
                } else {
                    writeln!(out, "export type {name}{generic} = {{").unwrap();
                    out.push_str(&head);
                    writeln!(out, "}} & {required_by}<{{").unwrap();
                }
                out.push_str(&fields);
                writeln!(out, "}}, {extract_flat}<{}, string>>;", options.populate_param)
                    .unwrap();
            } else {
                writeln!(out, "export interface {name} {{").unwrap();
                out.push_str(&head);
                out.push_str(&fields);
                out.push_str("}\n");
            }
        }
    }

    Composed {
        code: out,
        diagnostics: renderer.into_diagnostics(),
    }
}
