//! Use-case orchestration over the record collaborator.
//!
//! # Responsibility
//! - Own the insertion-ordered record collection for one run.
//! - Sequence input, sort, search and output calls.

pub mod session;
