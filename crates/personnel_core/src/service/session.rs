//! Interactive enter/sort/search session.
//!
//! # Invariants
//! - The session owns the collection; sort and search only borrow it.
//! - Search runs over the original entry order, not the sorted view.
//! - Output errors abort the session; input never does.

use crate::io::{DataIo, DataIoResult};
use crate::model::person::PersonInfo;
use crate::search::keyword::search_by_keyword;
use crate::sort::surname::sort_by_last_name;
use log::info;

const DEFAULT_RECORD_COUNT: usize = 3;

pub const HEADING_SORTED: &str = "Sorted list:";
pub const HEADING_FOUND: &str = "Found records:";

/// Session options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Number of records to read before sorting.
    pub record_count: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
        }
    }
}

/// Everything a finished session produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// Records in entry order.
    pub records: Vec<PersonInfo>,
    /// Records ordered by last name.
    pub sorted: Vec<PersonInfo>,
    pub keyword: String,
    /// Matches from `records`, in entry order.
    pub found: Vec<PersonInfo>,
}

/// Heading written before reading the `index`-th record (1-based).
pub fn entry_heading(index: usize) -> String {
    format!("Entering data for person #{index}")
}

/// Runs one full session against `io`.
///
/// # Errors
/// - Returns the collaborator's output error; records read so far are lost.
pub fn run_session<D: DataIo>(io: &mut D, config: &SessionConfig) -> DataIoResult<SessionReport> {
    // `record_count` is caller input; it is not a safe allocation hint.
    let mut records = Vec::new();
    for index in 1..=config.record_count {
        io.output_heading(&entry_heading(index))?;
        records.push(io.input_data());
    }

    let sorted = sort_by_last_name(&records);
    io.output_heading(HEADING_SORTED)?;
    for person in &sorted {
        io.output_data(person)?;
    }

    let keyword = io.input_keyword();
    let found = search_by_keyword(&records, &keyword);
    io.output_heading(HEADING_FOUND)?;
    for person in &found {
        io.output_data(person)?;
    }

    info!(
        "event=session_complete module=service status=ok records={} found={}",
        records.len(),
        found.len()
    );

    Ok(SessionReport {
        records,
        sorted,
        keyword,
        found,
    })
}
