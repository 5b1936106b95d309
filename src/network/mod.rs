//! Network Layer: One Connection Per Exchange
//!
//! Blocking std TCP, TCP_NODELAY enabled. A connection lives for exactly
//! one request/response round trip and closes on drop.

mod connection;

pub use connection::{exchange, Connection};
