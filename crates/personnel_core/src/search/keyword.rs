//! Keyword search over note text.
//!
//! # Invariants
//! - Only records with a date note can match.
//! - Matching is a case-insensitive substring test with per-char folding.
//! - An empty keyword matches every record that has a date note.
//! - Output is a subsequence of the input in the original order.

use crate::model::person::PersonInfo;
use log::debug;

/// Returns records whose note contains `keyword`, ignoring case.
///
/// Both sides are folded per character before the substring test, so a note
/// that contains the keyword verbatim always matches. Always succeeds.
pub fn search_by_keyword(records: &[PersonInfo], keyword: &str) -> Vec<PersonInfo> {
    let needle = fold_case(keyword);
    let found: Vec<PersonInfo> = records
        .iter()
        .filter(|person| note_matches(person, &needle))
        .cloned()
        .collect();

    debug!(
        "event=search_by_keyword module=search status=ok scanned={} matched={} keyword_len={}",
        records.len(),
        found.len(),
        keyword.chars().count()
    );
    found
}

fn note_matches(person: &PersonInfo, folded_keyword: &str) -> bool {
    person
        .note()
        .is_some_and(|note| fold_case(note).contains(folded_keyword))
}

/// Lowercases each char without context.
///
/// `str::to_lowercase` maps a word-final `Σ` to `ς` but a lone `Σ` to `σ`,
/// which would make identical text fold differently on the two sides.
fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::{fold_case, note_matches};
    use crate::model::person::{DateNote, PersonInfo};

    #[test]
    fn missing_date_note_never_matches() {
        assert!(!note_matches(&PersonInfo::new(1), ""));
    }

    #[test]
    fn non_ascii_notes_fold_case() {
        let person =
            PersonInfo::new(1).with_date_note(DateNote::new(0, 0, 0, "Встреча с КЛИЕНТОМ"));
        assert!(note_matches(&person, "клиентом"));
    }

    #[test]
    fn final_sigma_folds_like_lone_sigma() {
        assert_eq!(fold_case("ΟΔΟΣ"), "οδοσ");
        assert_eq!(fold_case("Σ"), "σ");
    }
}
