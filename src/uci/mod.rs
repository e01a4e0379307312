//! Text side of the Universal Chess Interface as spoken by a GUI.
//!
//! Formats the commands sent to an engine and classifies the lines it
//! answers with. No I/O happens here; see `crate::engine` for the process.

pub mod command;
pub mod response;

pub use command::EngineCommand;
pub use response::{parse_line, EngineResponse, InfoLine};
