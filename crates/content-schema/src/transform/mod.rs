//! Schema transforms.
//!
//! Pre-finalization mutation runs as an explicit, ordered list of pure
//! transforms over the whole collection: not as ambient event subscribers.
//! Ordering and composition are whatever the caller passes to
//! [`apply_transforms`], which makes them testable in isolation.

use crate::collection::SchemaCollection;

mod i18n;
mod publication;
mod url_alias;

pub use i18n::{I18N, I18n};
pub use publication::{PUBLICATION, Publication};
pub use url_alias::{URL_ALIAS, UrlAlias};

/// A pure schema transform applied before the collection is finalized.
pub trait Transform: Send + Sync {
    /// Transform identifier (e.g. "i18n").
    fn name(&self) -> &'static str;

    /// Mutate the collection in place.
    fn apply(&self, collection: &mut SchemaCollection);
}

/// Apply transforms in the given order.
pub fn apply_transforms(collection: &mut SchemaCollection, transforms: &[&dyn Transform]) {
    for transform in transforms {
        transform.apply(collection);
    }
}
