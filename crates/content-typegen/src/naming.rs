//! Display-name computation for generated declarations.

use crate::options::GenerateOptions;
use content_schema::{SchemaDefinition, SchemaRole};
use convert_case::{Case, Casing};

/// Compute the display name of a schema's generated declaration.
///
/// Plain and builtin schemas get `prefix + PascalCase(base)`. Components
/// additionally take the component prefix and, unless disabled, their
/// PascalCase category; `component_prefix_overrides_prefix` drops the
/// global prefix for them entirely.
pub fn display_name(schema: &SchemaDefinition, options: &GenerateOptions) -> String {
    let pascal = schema.base_name.to_case(Case::UpperCamel);
    match &schema.role {
        SchemaRole::Plain | SchemaRole::Builtin { .. } => {
            format!("{}{pascal}", options.prefix)
        }
        SchemaRole::Component { category } => {
            let mut component_prefix = options.component_prefix.clone();
            if options.use_category_prefix {
                component_prefix.push_str(&category.to_case(Case::UpperCamel));
            }
            if options.component_prefix_overrides_prefix {
                format!("{component_prefix}{pascal}")
            } else {
                format!("{}{component_prefix}{pascal}", options.prefix)
            }
        }
    }
}
