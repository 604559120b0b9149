//! Personnel record model.
//!
//! # Responsibility
//! - Define the aggregate `PersonInfo` record and its optional components.
//!
//! # Invariants
//! - A component is either fully present or fully absent.
//! - Records are built once and never edited in place.

pub mod person;
