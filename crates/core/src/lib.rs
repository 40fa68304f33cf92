//! Domain logic shared by the database and API crates.
//!
//! Pure code only: no I/O, no database types. The HTTP and persistence
//! layers live in `nutriped-api` and `nutriped-db`.

pub mod dates;
pub mod error;
pub mod types;
pub mod validation;
