//! Two-phase schema container.
//!
//! Schemas are gathered and mutated (builtins, transforms) in a
//! [`SchemaCollection`], then frozen with [`SchemaCollection::finalize`] into
//! a [`SchemaSet`]. Dependency discovery, name bindings, and rendering all
//! run read-only over the set, so the "may I still mutate" question is
//! answered by the type, not by a runtime flag.

use crate::schema::{SchemaDefinition, UtilityType};
use std::collections::BTreeMap;

/// Mutable build-phase container.
#[derive(Debug, Clone, Default)]
pub struct SchemaCollection {
    schemas: BTreeMap<String, SchemaDefinition>,
    utilities: BTreeMap<String, UtilityType>,
}

impl SchemaCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a schema. The first registration of a uid wins; returns false
    /// when the uid was already taken.
    pub fn insert(&mut self, schema: SchemaDefinition) -> bool {
        if self.schemas.contains_key(&schema.uid) {
            return false;
        }
        self.schemas.insert(schema.uid.clone(), schema);
        true
    }

    pub fn insert_utility(&mut self, utility: UtilityType) -> bool {
        if self.utilities.contains_key(&utility.uid) {
            return false;
        }
        self.utilities.insert(utility.uid.clone(), utility);
        true
    }

    pub fn get(&self, uid: &str) -> Option<&SchemaDefinition> {
        self.schemas.get(uid)
    }

    pub fn get_mut(&mut self, uid: &str) -> Option<&mut SchemaDefinition> {
        self.schemas.get_mut(uid)
    }

    pub fn schemas_mut(&mut self) -> impl Iterator<Item = &mut SchemaDefinition> {
        self.schemas.values_mut()
    }

    /// Freeze the collection. No schema or utility can change afterwards.
    pub fn finalize(self) -> SchemaSet {
        SchemaSet {
            schemas: self.schemas,
            utilities: self.utilities,
        }
    }
}

/// Finalized, immutable schema set.
#[derive(Debug, Clone)]
pub struct SchemaSet {
    schemas: BTreeMap<String, SchemaDefinition>,
    utilities: BTreeMap<String, UtilityType>,
}

impl SchemaSet {
    pub fn schema(&self, uid: &str) -> Option<&SchemaDefinition> {
        self.schemas.get(uid)
    }

    pub fn utility(&self, uid: &str) -> Option<&UtilityType> {
        self.utilities.get(uid)
    }

    pub fn schemas(&self) -> impl Iterator<Item = &SchemaDefinition> {
        self.schemas.values()
    }

    pub fn utilities(&self) -> impl Iterator<Item = &UtilityType> {
        self.utilities.values()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
