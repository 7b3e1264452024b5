//! Serializers for the sweep table.
//!
//! - **JSON** ([`json`]) — the case manifest, written as `cases.json`
//!   next to the generated files

pub mod json;
