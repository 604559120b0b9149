//! Record I/O collaborator contract.
//!
//! # Responsibility
//! - Define how external code supplies records and consumes results.
//! - Keep prompt/format details out of sort and search.
//!
//! # Invariants
//! - Input never fails; missing or malformed fields become `""` or `0`.
//! - Output omits the section of every absent component.
//! - The only error surface is the underlying writer.

pub mod console;
pub mod parse;
pub mod render;

use crate::model::person::PersonInfo;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for collaborator output APIs.
pub type DataIoResult<T> = Result<T, DataIoError>;

/// Output-side failure of a record collaborator.
#[derive(Debug)]
pub enum DataIoError {
    /// Underlying writer rejected or failed to flush output.
    Write(std::io::Error),
}

impl Display for DataIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Write(err) => write!(f, "failed to write record output: {err}"),
        }
    }
}

impl Error for DataIoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Write(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for DataIoError {
    fn from(value: std::io::Error) -> Self {
        Self::Write(value)
    }
}

/// Producer and consumer capability for personnel records.
pub trait DataIo {
    /// Assembles one record. Never fails.
    fn input_data(&mut self) -> PersonInfo;

    /// Reads one search keyword; empty when input is exhausted.
    fn input_keyword(&mut self) -> String;

    /// Renders one record for display.
    fn output_data(&mut self, person: &PersonInfo) -> DataIoResult<()>;

    /// Displays a section heading between record listings.
    fn output_heading(&mut self, heading: &str) -> DataIoResult<()>;
}
