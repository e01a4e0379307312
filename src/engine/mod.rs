//! Talking to an external UCI engine.
//!
//! [`EngineProcess`] owns the child process and its pipes.
//! [`EngineClient`] layers the analysis requests on top of it.
//!
//! ```no_run
//! use chess_bridge::board::Position;
//! use chess_bridge::engine::{EngineClient, EngineConfig};
//!
//! let mut client = EngineClient::start(EngineConfig::default())?;
//! for candidate in client.get_top_moves(&Position::new(), 3) {
//!     println!("{candidate}");
//! }
//! # Ok::<(), chess_bridge::engine::EngineError>(())
//! ```

mod client;
mod config;
mod error;
mod process;

pub use client::{EngineClient, EngineMove};
pub use config::{EngineBinary, EngineConfig, MAX_MULTIPV};
pub use error::EngineError;
pub use process::EngineProcess;
