//! Filtered views over record collections.
//!
//! # Responsibility
//! - Select matching records by linear scan.
//! - Keep result order identical to input order.

pub mod keyword;
