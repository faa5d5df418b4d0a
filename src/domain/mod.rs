//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `worry` - Worry aggregate, status lifecycle, decision record, categories
//! - `triage` - Decision tree engine and the worry-time schedule
//! - `solution` - Problem-solving record and the eight-step wizard

pub mod foundation;
pub mod solution;
pub mod triage;
pub mod worry;
