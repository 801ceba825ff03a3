//! Input parsers.
//!
//! The engine itself never touches files; readers hand schema documents in
//! as [`serde_json::Value`] and this module maps the wire format onto the
//! in-memory model.

mod json;

pub use json::{ParseError, parse_attribute, parse_attributes, parse_component, parse_content_type};
