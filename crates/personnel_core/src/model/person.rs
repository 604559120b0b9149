//! Person record and its component value groups.
//!
//! # Responsibility
//! - Hold one person's identifier plus four independently optional parts.
//! - Expose the derived keys used by sort and search.
//!
//! # Invariants
//! - Construction never fails; upstream fills unknown text with `""` and
//!   unknown numbers with `0`.
//! - `DateNote` stores day/month/year as given, without calendar checks.
//! - Absence is modeled with `Option`, never with sentinel values.

use serde::{Deserialize, Serialize};

/// Personnel identifier. Uniqueness is not enforced.
pub type TabNumber = i32;

/// Surname, given name and patronymic of one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullName {
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
}

impl FullName {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        middle_name: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            middle_name: middle_name.into(),
        }
    }
}

/// Free-form postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address: String,
}

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// Phone number kept as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub number: String,
}

impl PhoneNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }
}

/// Dated free-text note.
///
/// Date parts are stored as-is; `32.13.-1` is a valid value here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateNote {
    pub day: i32,
    pub month: i32,
    pub year: i32,
    pub note: String,
}

impl DateNote {
    pub fn new(day: i32, month: i32, year: i32, note: impl Into<String>) -> Self {
        Self {
            day,
            month,
            year,
            note: note.into(),
        }
    }
}

/// Aggregate personnel record.
///
/// Every component is optional and independent of the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInfo {
    pub tab_number: TabNumber,
    pub full_name: Option<FullName>,
    pub address: Option<Address>,
    pub phone_number: Option<PhoneNumber>,
    pub date_note: Option<DateNote>,
}

impl PersonInfo {
    /// Creates a record with every component absent.
    pub fn new(tab_number: TabNumber) -> Self {
        Self {
            tab_number,
            full_name: None,
            address: None,
            phone_number: None,
            date_note: None,
        }
    }

    pub fn with_full_name(mut self, full_name: FullName) -> Self {
        self.full_name = Some(full_name);
        self
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn with_phone_number(mut self, phone_number: PhoneNumber) -> Self {
        self.phone_number = Some(phone_number);
        self
    }

    pub fn with_date_note(mut self, date_note: DateNote) -> Self {
        self.date_note = Some(date_note);
        self
    }

    /// Surname used as ordering key; `""` when the name is absent.
    pub fn last_name_key(&self) -> &str {
        self.full_name
            .as_ref()
            .map_or("", |name| name.last_name.as_str())
    }

    /// Note text, or `None` when the date note is absent.
    pub fn note(&self) -> Option<&str> {
        self.date_note.as_ref().map(|date_note| date_note.note.as_str())
    }
}
