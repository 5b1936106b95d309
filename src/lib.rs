//! cdrcmd - CDR Command Test Client
//!
//! Wire format (both directions):
//! - 4-byte big-endian unsigned length
//! - that many payload bytes
//!
//! Requests carry a UTF-8 XML `<CdrCommandSet>`; the response payload is
//! whatever the server sends back, with one trailing line terminator
//! stripped before display. One TCP connection per exchange, blocking I/O,
//! no retries.

pub mod command;
pub mod config;
pub mod error;
pub mod network;
pub mod protocol;
pub mod source;

pub use config::ClientConfig;
pub use error::CdrError;
pub use network::exchange;
