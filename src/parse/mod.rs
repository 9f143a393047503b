//! Hierarchical tag parser.
//!
//! Documents opt in with the `-- @hardcoded` activation marker and are
//! segmented in three recursive passes: `@namespace` tags scope class
//! tags, `@class` tags scope named-query tags, and each `@name` span is
//! split into a leading comment summary and the query body.

mod parser;
mod tags;

pub use parser::parse_document;
pub use tags::ACTIVATION_MARKER;
