//! Plain-text rendering of one record.

use crate::model::person::PersonInfo;
use std::fmt::Write;

/// Renders `person` as labelled lines, skipping absent components.
///
/// The tab number line is always present. Every line ends with `\n`.
pub fn render_person(person: &PersonInfo) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Tab number: {}", person.tab_number);

    if let Some(name) = &person.full_name {
        let _ = writeln!(out, "Last name: {}", name.last_name);
        let _ = writeln!(out, "First name: {}", name.first_name);
        let _ = writeln!(out, "Middle name: {}", name.middle_name);
    }
    if let Some(address) = &person.address {
        let _ = writeln!(out, "Address: {}", address.address);
    }
    if let Some(phone) = &person.phone_number {
        let _ = writeln!(out, "Phone: {}", phone.number);
    }
    if let Some(date_note) = &person.date_note {
        let _ = writeln!(
            out,
            "Date: {}.{}.{}",
            date_note.day, date_note.month, date_note.year
        );
        let _ = writeln!(out, "Note: {}", date_note.note);
    }

    out
}
