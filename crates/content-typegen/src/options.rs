//! Generation options.

use content_schema::builtin;

/// Options for declaration generation.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Prefix for every generated record name.
    pub prefix: String,
    /// Extra prefix for component records.
    pub component_prefix: String,
    /// Prepend the PascalCase component category to component names.
    pub use_category_prefix: bool,
    /// Use only the component prefix, dropping the global one.
    pub component_prefix_overrides_prefix: bool,
    /// Components carry a numeric `id` field.
    pub component_identity: bool,
    /// Components carry a `__component` discriminator literal.
    pub component_discriminator: bool,
    /// Name of the populate-projection type parameter.
    pub populate_param: String,
    /// Identifier resolved for media references.
    pub media_uid: String,
    /// Identifier of the required-by-projection combinator.
    pub required_by_uid: String,
    /// Identifier of the nested-path extraction combinator.
    pub extract_nested_uid: String,
    /// Identifier of the flat-path extraction combinator.
    pub extract_flat_uid: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            prefix: "I".to_string(),
            component_prefix: String::new(),
            use_category_prefix: true,
            component_prefix_overrides_prefix: false,
            component_identity: true,
            component_discriminator: true,
            populate_param: "Populate".to_string(),
            media_uid: builtin::MEDIA_UID.to_string(),
            required_by_uid: builtin::REQUIRED_BY_UID.to_string(),
            extract_nested_uid: builtin::EXTRACT_NESTED_UID.to_string(),
            extract_flat_uid: builtin::EXTRACT_FLAT_UID.to_string(),
        }
    }
}
