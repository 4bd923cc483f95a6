//! I/O layer for reading the roster and writing per-student artifacts.
//! Provides the `roster` CSV reader and the `inserts` writers for the two
//! LaTeX hand-off fragments.
pub mod inserts;
pub mod roster;

pub use roster::RosterReader;
