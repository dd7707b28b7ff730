//! # Shopdesk Console Library
//!
//! Command layer for the Shopdesk POS dashboard, plus a line-oriented
//! console that drives it.
//!
//! ## Module Organization
//! ```text
//! shopdesk_console/
//! ├── lib.rs          ◄─── You are here (logging, console loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Shared Store wrapper
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/       ◄─── One module per dashboard area
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Console Protocol
//! ```text
//! > add_to_cart {"product_id": "1", "quantity": 2}
//! {"ok":{"lines":[...],"itemCount":1,"totalQuantity":2,"totals":{...}}}
//! > checkout
//! {"error":{"code":"EMPTY_CART","message":"Cart is empty"}}
//! ```
//! One command per line: a command name, then an optional JSON argument
//! object. `help` lists commands, `quit` or end of input stops.

pub mod commands;
pub mod error;
pub mod state;

use std::io::{BufRead, Write};

use serde_json::{json, Value};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use error::ConsoleError;
use state::{ConfigState, StoreState};

/// Runs the console on stdin/stdout with the demo catalog loaded.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,shopdesk=debug, overridable with RUST_LOG           │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults overridden by SHOPDESK_* variables                       │
/// │                                                                         │
/// │  3. Initialize State ─────────────────────────────────────────────────► │
/// │     • StoreState: demo products, sale, supplier, customers              │
/// │                                                                         │
/// │  4. Serve commands until quit or end of input                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), ConsoleError> {
    init_tracing();

    info!("Starting Shopdesk POS console");

    let config = ConfigState::from_env();
    let store = StoreState::with_demo_data();
    info!(store_name = %config.store_name, "State initialized");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    serve(&store, &config, stdin.lock(), stdout.lock())
}

/// Reads commands from `input` and writes one JSON response line each.
pub fn serve<R: BufRead, W: Write>(
    store: &StoreState,
    config: &ConfigState,
    input: R,
    mut output: W,
) -> Result<(), ConsoleError> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, raw_args) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" => break,
            "help" => {
                serde_json::to_writer(&mut output, &json!({ "commands": commands::COMMANDS }))?;
            }
            _ => {
                let response = execute(store, config, command, raw_args);
                serde_json::to_writer(&mut output, &response)?;
            }
        }
        writeln!(output)?;
        output.flush()?;
    }

    info!("Console closed");
    Ok(())
}

/// Runs one command line and wraps the outcome as `{"ok": ...}` or `{"error": ...}`.
fn execute(store: &StoreState, config: &ConfigState, command: &str, raw_args: &str) -> Value {
    debug!(command = %command, "console command");

    let args = if raw_args.is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str(raw_args).map_err(error::ApiError::from)
    };

    match args.and_then(|args| commands::invoke(store, config, command, args)) {
        Ok(value) => json!({ "ok": value }),
        Err(err) => json!({ "error": err }),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only responses.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopdesk=trace` - Show trace for shopdesk crates only
/// - Default: `info,shopdesk=debug`
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,shopdesk=debug"));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> Vec<Value> {
        let store = StoreState::with_demo_data();
        let config = ConfigState::default();
        let mut output = Vec::new();

        serve(&store, &config, script.as_bytes(), &mut output).unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_console_session() {
        let responses = session(
            "scan_barcode {\"code\": \"1234567890123\"}\n\
             \n\
             update_cart_item {\"product_id\": \"1\", \"quantity\": 2}\n\
             checkout {\"customer\": \"John Doe\"}\n\
             get_dashboard\n\
             quit\n\
             clear_cart\n",
        );

        assert_eq!(responses.len(), 4);
        assert_eq!(responses[0]["ok"]["totalQuantity"], 1);
        assert_eq!(responses[1]["ok"]["totalQuantity"], 2);
        assert_eq!(responses[2]["ok"]["receipt"]["sale"]["total_cents"], 23000);
        assert_eq!(responses[3]["ok"]["order_count"], 2);
    }

    #[test]
    fn test_console_errors() {
        let responses = session("checkout\nadd_to_cart {not json\nhelp\n");

        assert_eq!(responses[0]["error"]["code"], "EMPTY_CART");
        assert_eq!(responses[1]["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(responses[2]["commands"][0], "get_cart");
    }
}
