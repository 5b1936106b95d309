//! cdrcmd - CDR Command Test Client
//!
//! Reads an XML command buffer from a file or standard input, sends it to a
//! CDR server as one length-prefixed frame, and prints the framed response.
//!
//! Usage:
//!   cdrcmd [command-file [host [port]]] [OPTIONS]
//!
//! Positional defaults apply left to right: an omitted or empty
//! command-file reads standard input; host defaults to mahler.nci.nih.gov;
//! port defaults to 2019.

use std::io::{self, Write};
use std::time::Duration;

use cdrcmd::command::wrap_logon;
use cdrcmd::config::{ClientConfig, Logon, DEFAULT_HOST, DEFAULT_PORT};
use cdrcmd::error::CdrError;
use cdrcmd::network::exchange;
use cdrcmd::source::CommandSource;

/// Printed on stdout before the response payload.
const RESPONSE_BANNER: &str = "<!-- *** SERVER RESPONSE *** -->";

fn run_client(config: ClientConfig) -> Result<(), CdrError> {
    let mut commands = config.source.read()?;

    if let Some(logon) = &config.logon {
        commands = wrap_logon(logon, &commands)?;
    }

    if config.verbose {
        eprintln!("📄 Commands: {} bytes from {}", commands.len(), config.source.describe());
        eprintln!("🔌 Connecting to {}...", config.addr());
    }

    let response = exchange(&config, &commands)?;

    if config.verbose {
        eprintln!("📨 Response: {} bytes", response.len());
    }

    // Response bytes go to stdout untouched; all chatter stays on stderr.
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", RESPONSE_BANNER)?;
    stdout.write_all(&response)?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;

    Ok(())
}

fn usage_error(msg: &str) -> ! {
    eprintln!("❌ {}", msg);
    eprintln!("   Run with --help for usage.");
    std::process::exit(2);
}

fn parse_args() -> ClientConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = ClientConfig::default();

    let mut user: Option<String> = None;
    let mut password: Option<String> = None;
    let mut positional: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--user" | "-u" => {
                if i + 1 < args.len() {
                    user = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    usage_error("--user needs a value");
                }
            }
            "--password" | "-p" => {
                if i + 1 < args.len() {
                    password = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    usage_error("--password needs a value");
                }
            }
            "--timeout" | "-t" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<u64>() {
                        // std rejects a zero Duration in set_read_timeout;
                        // catch it here instead of as an I/O error mid-run.
                        Ok(0) => usage_error("--timeout must be at least 1 second"),
                        Ok(secs) => config.timeout = Some(Duration::from_secs(secs)),
                        Err(_) => usage_error("--timeout needs a whole number of seconds"),
                    }
                    i += 1;
                } else {
                    usage_error("--timeout needs a value");
                }
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                println!("cdrcmd - CDR Command Test Client\n");
                println!("Usage: cdrcmd [command-file [host [port]]] [OPTIONS]\n");
                println!("Positional arguments (all optional, defaults left to right):");
                println!("  command-file     XML command buffer; omitted or empty reads stdin");
                println!("  host             Server hostname (default: {})", DEFAULT_HOST);
                println!("  port             Server TCP port (default: {})", DEFAULT_PORT);
                println!("\nOptions:");
                println!("  -u, --user <NAME>      Wrap commands in a CdrLogon for this account");
                println!("  -p, --password <PW>    Password for --user");
                println!("  -t, --timeout <SEC>    Connect/read/write timeout (default: none)");
                println!("  -v, --verbose          Progress output on stderr");
                println!("  -h, --help             Show this help");
                std::process::exit(0);
            }
            other if other.starts_with('-') && other.len() > 1 => {
                usage_error(&format!("unknown option: {}", other));
            }
            _ => positional.push(args[i].clone()),
        }
        i += 1;
    }

    if positional.len() > 3 {
        usage_error("too many positional arguments");
    }

    config.source = CommandSource::from_arg(positional.first().map(String::as_str));
    if let Some(host) = positional.get(1) {
        config.host = host.clone();
    }
    if let Some(port) = positional.get(2) {
        match port.parse::<u16>() {
            Ok(port) => config.port = port,
            Err(_) => usage_error(&format!("invalid port: {}", port)),
        }
    }

    config.logon = match (user, password) {
        (Some(user), Some(password)) => Some(Logon { user, password }),
        (None, None) => None,
        _ => usage_error("--user and --password must be given together"),
    };

    config
}

fn main() {
    let config = parse_args();

    if let Err(e) = run_client(config) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
