//! Core domain logic for the personnel record manager.
//! Sort and search are pure functions over borrowed record slices; console
//! I/O and session orchestration sit on top of them.

pub mod io;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod sort;

pub use io::console::ConsoleDataIo;
pub use io::render::render_person;
pub use io::{DataIo, DataIoError, DataIoResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{Address, DateNote, FullName, PersonInfo, PhoneNumber, TabNumber};
pub use search::keyword::search_by_keyword;
pub use service::session::{run_session, SessionConfig, SessionReport};
pub use sort::surname::sort_by_last_name;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
