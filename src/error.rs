//! Error taxonomy for the client
//!
//! Every failure is fatal to the single exchange being made; callers print
//! the error and exit non-zero. There is no retry and no partial success.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CdrError {
    /// The named command file could not be opened or read.
    #[error("cannot read command file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// TCP connect (or name resolution) to the server failed.
    #[error("cannot connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// Socket read/write failed partway through an exchange.
    #[error("socket I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The peer closed the connection before a full frame arrived.
    #[error("short frame: expected {expected} bytes, peer closed after {got}")]
    Protocol { expected: usize, got: usize },

    /// The command buffer does not fit in a 32-bit length prefix.
    #[error("command buffer too large for one frame: {0} bytes")]
    Oversize(usize),

    /// Logon wrapping was requested on a buffer that already carries the
    /// envelope element named here.
    #[error("command buffer already contains {0}; strip it before using --user")]
    AlreadyWrapped(&'static str),

    /// Logon wrapping needs a UTF-8 command buffer.
    #[error("command buffer must be UTF-8 to wrap a logon: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),
}
