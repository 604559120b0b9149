use personnel_core::service::session::{entry_heading, HEADING_FOUND, HEADING_SORTED};
use personnel_core::{
    run_session, ConsoleDataIo, DataIo, DataIoError, DataIoResult, DateNote, FullName,
    PersonInfo, SessionConfig,
};
use std::collections::VecDeque;
use std::io::Cursor;

/// Scripted collaborator recording every output call.
#[derive(Default)]
struct ScriptedIo {
    records: VecDeque<PersonInfo>,
    keyword: String,
    events: Vec<String>,
}

impl DataIo for ScriptedIo {
    fn input_data(&mut self) -> PersonInfo {
        self.records.pop_front().unwrap_or_else(|| PersonInfo::new(0))
    }

    fn input_keyword(&mut self) -> String {
        self.keyword.clone()
    }

    fn output_data(&mut self, person: &PersonInfo) -> DataIoResult<()> {
        self.events.push(format!("record {}", person.tab_number));
        Ok(())
    }

    fn output_heading(&mut self, heading: &str) -> DataIoResult<()> {
        self.events.push(heading.to_string());
        Ok(())
    }
}

/// Collaborator whose output stream closes after a fixed number of headings.
struct ClosingIo {
    headings_left: usize,
    records_read: usize,
}

impl DataIo for ClosingIo {
    fn input_data(&mut self) -> PersonInfo {
        self.records_read += 1;
        PersonInfo::new(0)
    }

    fn input_keyword(&mut self) -> String {
        String::new()
    }

    fn output_data(&mut self, _person: &PersonInfo) -> DataIoResult<()> {
        Ok(())
    }

    fn output_heading(&mut self, _heading: &str) -> DataIoResult<()> {
        if self.headings_left == 0 {
            return Err(DataIoError::Write(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "output closed",
            )));
        }
        self.headings_left -= 1;
        Ok(())
    }
}

fn tabs(records: &[PersonInfo]) -> Vec<i32> {
    records.iter().map(|record| record.tab_number).collect()
}

fn noted(tab_number: i32, last_name: &str, note: &str) -> PersonInfo {
    PersonInfo::new(tab_number)
        .with_full_name(FullName::new(last_name, "", ""))
        .with_date_note(DateNote::new(1, 1, 2000, note))
}

#[test]
fn default_config_reads_three_records() {
    assert_eq!(SessionConfig::default().record_count, 3);
}

#[test]
fn search_runs_over_entry_order_not_sorted_order() {
    let mut io = ScriptedIo {
        records: VecDeque::from([
            noted(1, "Smith", "client call"),
            noted(2, "Adams", "client visit"),
            noted(3, "Baker", "internal"),
        ]),
        keyword: "CLIENT".to_string(),
        ..ScriptedIo::default()
    };

    let report = run_session(&mut io, &SessionConfig::default()).expect("session should complete");

    assert_eq!(tabs(&report.records), vec![1, 2, 3]);
    assert_eq!(tabs(&report.sorted), vec![2, 3, 1]);
    assert_eq!(report.keyword, "CLIENT");
    assert_eq!(tabs(&report.found), vec![1, 2]);

    assert_eq!(
        io.events,
        vec![
            entry_heading(1),
            entry_heading(2),
            entry_heading(3),
            HEADING_SORTED.to_string(),
            "record 2".to_string(),
            "record 3".to_string(),
            "record 1".to_string(),
            HEADING_FOUND.to_string(),
            "record 1".to_string(),
            "record 2".to_string(),
        ]
    );
}

#[test]
fn zero_records_still_prints_both_sections() {
    let mut io = ScriptedIo::default();
    let config = SessionConfig { record_count: 0 };

    let report = run_session(&mut io, &config).expect("empty session should complete");
    assert!(report.records.is_empty());
    assert!(report.found.is_empty());
    assert_eq!(io.events, vec![HEADING_SORTED, HEADING_FOUND]);
}

#[test]
fn console_session_end_to_end() {
    let input = "\
2\nSmith\nJohn\nJ\nElm 2\n111\n1\n2\n2020\nfollow up\n\
1\nAdams\nAnn\nA\nOak 1\n222\n3\n4\n2021\nmet client\n\
client\n";
    let mut io = ConsoleDataIo::new(Cursor::new(input), Vec::new());

    let report = run_session(&mut io, &SessionConfig { record_count: 2 })
        .expect("console session should complete");
    assert_eq!(report.found.len(), 1);
    assert_eq!(report.found[0].tab_number, 1);

    let output = String::from_utf8(io.into_writer()).expect("output should be UTF-8");
    let sorted_at = output.find("Sorted list:").expect("sorted heading");
    let found_at = output.find("Found records:").expect("found heading");
    assert!(output.starts_with("Entering data for person #1\n"));
    let sorted_section = &output[sorted_at..found_at];
    let adams_at = sorted_section
        .find("Last name: Adams")
        .expect("Adams in sorted list");
    let smith_at = sorted_section
        .find("Last name: Smith")
        .expect("Smith in sorted list");
    assert!(adams_at < smith_at);
    assert!(output[found_at..].contains("Note: met client"));
    assert!(!output[found_at..].contains("Last name: Smith"));
}

#[test]
fn huge_record_count_reads_until_output_fails() {
    let mut io = ClosingIo {
        headings_left: 4,
        records_read: 0,
    };
    let config = SessionConfig {
        record_count: usize::MAX,
    };

    let err = run_session(&mut io, &config).expect_err("closed output should end the session");
    assert!(matches!(err, DataIoError::Write(_)));
    assert_eq!(io.records_read, 4);
}
