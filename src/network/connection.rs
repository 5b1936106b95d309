//! Connection handling
//!
//! Connect → Send(length+payload) → Receive(length) → Receive(payload) →
//! Close. Nothing else; the server does all command interpretation.

use std::io;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::CdrError;
use crate::protocol;

/// One client connection to a CDR server.
pub struct Connection {
    stream: TcpStream,
}

impl Connection {
    /// Resolve and connect per the configuration.
    ///
    /// Name resolution failure, an unreachable host, and a refused
    /// connection all surface as `Connect` with the target address.
    pub fn open(config: &ClientConfig) -> Result<Self, CdrError> {
        let addr = config.addr();
        let stream = connect(&addr, config.timeout).map_err(|source| CdrError::Connect {
            addr: addr.clone(),
            source,
        })?;

        stream.set_nodelay(true)?;
        if let Some(timeout) = config.timeout {
            stream.set_read_timeout(Some(timeout))?;
            stream.set_write_timeout(Some(timeout))?;
        }

        Ok(Self { stream })
    }

    /// Send one framed command buffer.
    pub fn send_command(&mut self, payload: &[u8]) -> Result<(), CdrError> {
        protocol::write_frame(&mut self.stream, payload)
    }

    /// Read one framed response with its trailing line terminator stripped.
    pub fn read_response(&mut self) -> Result<Vec<u8>, CdrError> {
        let mut payload = protocol::read_frame(&mut self.stream)?;
        protocol::chomp(&mut payload);
        Ok(payload)
    }
}

/// One full round trip: the whole client in one call.
///
/// Either the complete response comes back or the call fails with one of
/// the `CdrError` kinds; no partial data is ever returned. The socket
/// closes when the connection drops.
pub fn exchange(config: &ClientConfig, payload: &[u8]) -> Result<Vec<u8>, CdrError> {
    let mut conn = Connection::open(config)?;
    conn.send_command(payload)?;
    conn.read_response()
}

fn connect(addr: &str, timeout: Option<Duration>) -> io::Result<TcpStream> {
    match timeout {
        None => TcpStream::connect(addr),
        Some(timeout) => {
            // connect_timeout takes a single resolved address; try each in
            // turn the way TcpStream::connect does.
            let mut last_err = None;
            for resolved in addr.to_socket_addrs()? {
                match TcpStream::connect_timeout(&resolved, timeout) {
                    Ok(stream) => return Ok(stream),
                    Err(e) => last_err = Some(e),
                }
            }
            Err(last_err.unwrap_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "address resolved to nothing")
            }))
        }
    }
}
