//! Foundation types for the generator.
//!
//! This module has NO dependencies on other hardcoded modules.

mod ci_map;

pub use ci_map::CiMap;
