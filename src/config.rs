//! Client configuration
//!
//! Built once at startup from the command line and passed by reference into
//! the exchange. No globals, no environment variables, no config file.

use std::time::Duration;

use crate::source::CommandSource;

/// Server the original test client talks to when no host is given.
pub const DEFAULT_HOST: &str = "mahler.nci.nih.gov";

/// CDR command port.
pub const DEFAULT_PORT: u16 = 2019;

/// Everything one invocation needs to perform a single exchange.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Where the command buffer comes from.
    pub source: CommandSource,
    /// Server hostname or IP.
    pub host: String,
    /// Server TCP port.
    pub port: u16,
    /// Wrap the buffer in a CdrLogon/CdrLogoff envelope with these
    /// credentials before sending.
    pub logon: Option<Logon>,
    /// Connect/read/write timeout. `None` leaves the transport defaults in
    /// place, which is what the original client did.
    pub timeout: Option<Duration>,
    /// Chatty progress output on stderr.
    pub verbose: bool,
}

#[derive(Debug, Clone)]
pub struct Logon {
    pub user: String,
    pub password: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            source: CommandSource::Stdin,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            logon: None,
            timeout: None,
            verbose: false,
        }
    }
}

impl ClientConfig {
    /// `host:port` as given to the resolver.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
