//! Render-time diagnostics.
//!
//! The engine never fails: degenerate schemas render to the nearest safe
//! expression and the oddity is reported as a value for the caller to
//! surface. None of these are fatal.

/// A non-fatal signal raised while rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error("`{schema}.{attribute}`: enumeration has no values")]
    EmptyEnumeration { schema: String, attribute: String },

    #[error("`{schema}.{attribute}`: dynamic zone lists no components")]
    EmptyDynamicZone { schema: String, attribute: String },

    #[error("`{schema}.{attribute}`: unresolved reference `{target}`")]
    UnresolvedReference {
        schema: String,
        attribute: String,
        target: String,
    },
}
