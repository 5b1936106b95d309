//! CDR Test Server - Frame-Level Loopback Double
//!
//! Accepts one connection at a time, reads a single framed command buffer,
//! and replies with a canned response frame. Speaks only the framing layer;
//! it never interprets the XML. Handy for exercising cdrcmd without a real
//! CDR server.
//!
//! Usage:
//!   cargo run --bin cdr_test_server [OPTIONS]

use std::net::{TcpListener, TcpStream};

use cdrcmd::error::CdrError;
use cdrcmd::protocol;

const DEFAULT_RESPONSE: &[u8] =
    b"<CdrResponseSet>\n <CdrResponse Status=\"success\"/>\n</CdrResponseSet>\n";

struct ServerConfig {
    bind_addr: String,
    response_file: Option<String>,
    verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:2019".to_string(),
            response_file: None,
            verbose: false,
        }
    }
}

fn handle_client(stream: &mut TcpStream, response: &[u8], verbose: bool) -> Result<(), CdrError> {
    let commands = protocol::read_frame(stream)?;
    println!("📥 Received command frame: {} bytes", commands.len());

    if verbose {
        println!("{}", String::from_utf8_lossy(&commands));
    }

    protocol::write_frame(stream, response)?;
    println!("📤 Replied with {} bytes", response.len());

    Ok(())
}

fn run_server(config: ServerConfig) -> Result<(), CdrError> {
    let response = match &config.response_file {
        Some(path) => std::fs::read(path).map_err(|source| CdrError::File {
            path: path.into(),
            source,
        })?,
        None => DEFAULT_RESPONSE.to_vec(),
    };

    let listener = TcpListener::bind(&config.bind_addr)?;
    println!("🔌 CDR test server listening on {}", config.bind_addr);
    println!("📡 Waiting for connections...\n");

    // One client at a time; a test double has no concurrency story.
    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                let peer = stream
                    .peer_addr()
                    .map(|a| a.to_string())
                    .unwrap_or_else(|_| "<unknown>".to_string());
                println!("✅ Connected: {}", peer);

                if let Err(e) = handle_client(&mut stream, &response, config.verbose) {
                    eprintln!("⚠️  {}: {}", peer, e);
                }
                // Stream drops here; one exchange per connection.
            }
            Err(e) => eprintln!("⚠️  Accept error: {}", e),
        }
    }

    Ok(())
}

fn parse_args() -> ServerConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = ServerConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" | "-b" => {
                if i + 1 < args.len() {
                    config.bind_addr = args[i + 1].clone();
                    i += 1;
                }
            }
            "--response" | "-r" => {
                if i + 1 < args.len() {
                    config.response_file = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                println!("CDR Test Server - frame-level loopback double\n");
                println!("Usage: cdr_test_server [OPTIONS]\n");
                println!("Options:");
                println!("  -b, --bind <ADDR>      Bind address (default: 127.0.0.1:2019)");
                println!("  -r, --response <FILE>  Reply with this file's bytes");
                println!("  -v, --verbose          Print received command buffers");
                println!("  -h, --help             Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn main() {
    let config = parse_args();

    if let Err(e) = run_server(config) {
        eprintln!("❌ Server error: {}", e);
        std::process::exit(1);
    }
}
