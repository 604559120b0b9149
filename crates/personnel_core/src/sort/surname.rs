//! Surname ordering.
//!
//! # Invariants
//! - Keys compare ordinally (byte-wise), with no locale collation.
//! - Records without a name sort under the empty key.
//! - Equal keys keep their input order.

use crate::model::person::PersonInfo;
use log::debug;

/// Returns a copy of `records` ordered by last name.
///
/// The sort is stable, so two people sharing a surname stay in the order
/// they were entered. Always succeeds; empty input gives an empty result.
pub fn sort_by_last_name(records: &[PersonInfo]) -> Vec<PersonInfo> {
    let mut sorted = records.to_vec();
    // `sort_by` is stable; `sort_unstable_by` would break tie order.
    sorted.sort_by(|left, right| left.last_name_key().cmp(right.last_name_key()));

    debug!(
        "event=sort_by_last_name module=sort status=ok count={}",
        sorted.len()
    );
    sorted
}
