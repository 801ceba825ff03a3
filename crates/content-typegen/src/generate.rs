//! Whole-set generation pipeline.
//!
//! Dependency discovery and name bindings run for the entire finalized set
//! strictly before any declaration is composed: a schema may reference one
//! defined later in iteration order. Composition itself is pure and
//! per-schema; once the bindings exist, declarations could be rendered in
//! any order.

use crate::binding::NameBinding;
use crate::compose::compose;
use crate::deps::dependencies;
use crate::diag::Diagnostic;
use crate::naming::display_name;
use crate::options::GenerateOptions;
use content_schema::SchemaSet;

/// One generated declaration, with the dependency identifiers the external
/// writer needs for imports and ordering.
#[derive(Debug, Clone)]
pub struct GeneratedType {
    pub uid: String,
    pub name: String,
    pub code: String,
    /// Sorted, duplicate-free.
    pub dependencies: Vec<String>,
}

/// Everything the engine produces for one schema set.
#[derive(Debug, Clone, Default)]
pub struct Output {
    pub types: Vec<GeneratedType>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Generate declarations for every schema and utility type in the set.
pub fn generate(set: &SchemaSet, options: &GenerateOptions) -> Output {
    // Phase one: dependency sets and bindings over the whole set.
    let prepared: Vec<_> = set
        .schemas()
        .map(|schema| {
            let deps = dependencies(schema, options);
            let binding = NameBinding::build(schema, &deps, set, options);
            (schema, deps, binding)
        })
        .collect();

    // Phase two: read-only composition.
    let mut output = Output::default();
    for (schema, deps, binding) in &prepared {
        let composed = compose(schema, binding, options);
        output.types.push(GeneratedType {
            uid: schema.uid.clone(),
            name: display_name(schema, options),
            code: composed.code,
            dependencies: deps.iter().cloned().collect(),
        });
        output.diagnostics.extend(composed.diagnostics);
    }

    for utility in set.utilities() {
        output.types.push(GeneratedType {
            uid: utility.uid.clone(),
            name: utility.name.clone(),
            code: utility.decl.clone(),
            dependencies: Vec::new(),
        });
    }

    output
}
