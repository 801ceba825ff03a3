//! Per-schema name bindings.
//!
//! A binding maps every identifier a schema depends on to a display name
//! and the target's own populatability. The engine is parameterized over
//! the binding: callers may construct one by hand via [`NameBinding::new`]
//! and [`NameBinding::insert`], or use [`NameBinding::build`] over a
//! finalized set. Identifiers without an entry make the renderer fall back
//! to the permissive `any` type instead of failing.

use crate::classify::has_populatable_attributes;
use crate::naming::display_name;
use crate::options::GenerateOptions;
use content_schema::{SchemaDefinition, SchemaSet};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Resolution entry for one referenced identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub populatable: bool,
}

/// Identifier → binding table for one consuming schema.
#[derive(Debug, Clone, Default)]
pub struct NameBinding {
    entries: BTreeMap<String, Binding>,
}

impl NameBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, uid: impl Into<String>, binding: Binding) {
        self.entries.insert(uid.into(), binding);
    }

    pub fn get(&self, uid: &str) -> Option<&Binding> {
        self.entries.get(uid)
    }

    pub fn name(&self, uid: &str) -> Option<&str> {
        self.entries.get(uid).map(|binding| binding.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the binding for `owner` from its dependency set.
    ///
    /// Distinct targets that compute to the same display name get a numeric
    /// suffix, deterministic because dependency sets iterate sorted. A
    /// schema referencing itself keeps its own name un-suffixed and does
    /// not count towards collisions.
    pub fn build(
        owner: &SchemaDefinition,
        deps: &BTreeSet<String>,
        set: &SchemaSet,
        options: &GenerateOptions,
    ) -> Self {
        let mut entries = BTreeMap::new();
        let mut counters: HashMap<String, u32> = HashMap::new();

        for uid in deps {
            if let Some(target) = set.schema(uid) {
                let mut name = display_name(target, options);
                if uid != &owner.uid {
                    match counters.get_mut(&name) {
                        Some(count) => {
                            *count += 1;
                            name = format!("{name}{count}");
                        }
                        None => {
                            counters.insert(name.clone(), 0);
                        }
                    }
                }
                let populatable = has_populatable_attributes(&target.attributes);
                entries.insert(uid.clone(), Binding { name, populatable });
            } else if let Some(utility) = set.utility(uid) {
                entries.insert(
                    uid.clone(),
                    Binding {
                        name: utility.name.clone(),
                        populatable: false,
                    },
                );
            }
            // Unresolvable identifiers get no entry; the renderer degrades.
        }

        Self { entries }
    }
}
