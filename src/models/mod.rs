//! Model identifier module
//!
//! Maps short and legacy model names to the canonical identifiers the
//! provider-routing layer expects.

pub mod aliases;

pub use aliases::resolve_alias;
