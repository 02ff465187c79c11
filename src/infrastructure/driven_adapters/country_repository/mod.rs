//! Country Repository Adapters

pub mod sqlite;

pub use sqlite::SqliteCountryRepository;
