//! Line-oriented console collaborator.
//!
//! # Responsibility
//! - Prompt for and read one record field per line.
//! - Write rendered records and headings to the output stream.
//!
//! # Invariants
//! - Reading never fails: end of input and read errors fall back to
//!   `""`/`0` for every remaining field.
//! - Prompt write failures are logged and do not interrupt input.
//! - Records read here always carry all four components.

use crate::io::parse::{int_or_zero, strip_line_terminator, text_or_empty};
use crate::io::render::render_person;
use crate::io::{DataIo, DataIoResult};
use crate::model::person::{Address, DateNote, FullName, PersonInfo, PhoneNumber};
use log::{debug, warn};
use std::io::{BufRead, Write};

const PROMPT_TAB_NUMBER: &str = "Enter tab number:";
const PROMPT_LAST_NAME: &str = "Enter last name:";
const PROMPT_FIRST_NAME: &str = "Enter first name:";
const PROMPT_MIDDLE_NAME: &str = "Enter middle name:";
const PROMPT_ADDRESS: &str = "Enter address:";
const PROMPT_PHONE: &str = "Enter phone number:";
const PROMPT_DATE: &str = "Enter date (day, month, year on separate lines):";
const PROMPT_NOTE: &str = "Enter note:";
const PROMPT_KEYWORD: &str = "Enter a keyword to search:";

/// Console-style [`DataIo`] over any buffered reader and writer.
///
/// Production code wires stdin/stdout; tests use in-memory buffers.
pub struct ConsoleDataIo<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleDataIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the collaborator and returns the output stream.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt(&mut self, text: &str) {
        let result = writeln!(self.writer, "{text}").and_then(|()| self.writer.flush());
        if let Err(err) = result {
            warn!("event=prompt_write module=io status=error error={err}");
        }
    }

    /// Reads one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(strip_line_terminator(&buf).to_string()),
            Err(err) => {
                warn!("event=read_line module=io status=error error={err}");
                None
            }
        }
    }

    fn read_text(&mut self) -> String {
        let line = self.read_line();
        text_or_empty(line.as_deref())
    }

    fn read_int(&mut self) -> i32 {
        let line = self.read_line();
        int_or_zero(line.as_deref())
    }
}

impl<R: BufRead, W: Write> DataIo for ConsoleDataIo<R, W> {
    fn input_data(&mut self) -> PersonInfo {
        self.prompt(PROMPT_TAB_NUMBER);
        let tab_number = self.read_int();

        self.prompt(PROMPT_LAST_NAME);
        let last_name = self.read_text();
        self.prompt(PROMPT_FIRST_NAME);
        let first_name = self.read_text();
        self.prompt(PROMPT_MIDDLE_NAME);
        let middle_name = self.read_text();

        self.prompt(PROMPT_ADDRESS);
        let address = self.read_text();

        self.prompt(PROMPT_PHONE);
        let phone = self.read_text();

        self.prompt(PROMPT_DATE);
        let day = self.read_int();
        let month = self.read_int();
        let year = self.read_int();

        self.prompt(PROMPT_NOTE);
        let note = self.read_text();

        debug!("event=input_data module=io status=ok tab_number={tab_number}");

        PersonInfo::new(tab_number)
            .with_full_name(FullName::new(last_name, first_name, middle_name))
            .with_address(Address::new(address))
            .with_phone_number(PhoneNumber::new(phone))
            .with_date_note(DateNote::new(day, month, year, note))
    }

    fn input_keyword(&mut self) -> String {
        self.prompt(PROMPT_KEYWORD);
        self.read_text()
    }

    fn output_data(&mut self, person: &PersonInfo) -> DataIoResult<()> {
        self.writer.write_all(render_person(person).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn output_heading(&mut self, heading: &str) -> DataIoResult<()> {
        writeln!(self.writer, "{heading}")?;
        self.writer.flush()?;
        Ok(())
    }
}
