//! Protocol Layer: Length-Prefixed Framing
//!
//! One frame shape in both directions:
//! - 4-byte big-endian unsigned length
//! - exactly that many payload bytes
//!
//! The receiver must consume precisely the declared count, no more, no less.

mod frame;

pub use frame::{chomp, encode_frame, read_frame, write_frame, LEN_PREFIX_SIZE};
