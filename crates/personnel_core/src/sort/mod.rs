//! Ordering views over record collections.
//!
//! # Responsibility
//! - Produce reordered copies of caller-owned collections.
//! - Never mutate or take ownership of the input.

pub mod surname;
