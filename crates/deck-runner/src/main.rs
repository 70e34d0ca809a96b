//! # deck-runner
//!
//! Command-line adapter for the deck codec. Reads a JSON request from the
//! argument or stdin and writes a JSON response to stdout; logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! deck-runner encode '{"buy": true, "shares": 16, "ticker": "MSFT"}'
//! echo '{"deck": [26000005, 26000001, 26000018, 26000014, 26000002, 27000001, 26000010, 26000011]}' \
//!     | deck-runner decode
//! deck-runner --config deckcode.json table
//! ```

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deck_codec::wire::{self, CardView, DecodeResponse, EncodeResponse, ErrorResponse};
use deck_codec::{Decoder, Encoder};
use deck_core::config::{AppConfig, load_config};
use deck_core::error::DeckError;
use deck_core::table::SymbolTable;
use serde::Serialize;
use tracing::{error, info};

/// Trade order ⇄ card deck encoder.
#[derive(Parser)]
#[command(name = "deck-runner", about = "Trade order to card deck encoder/decoder")]
struct Cli {
    /// Configuration file path (JSON).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides the config file.
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Optional log directory for file output. Overrides the config file.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode `{"buy", "shares", "ticker"}` into a deck.
    Encode {
        /// Request JSON; read from stdin when omitted.
        request: Option<String>,

        /// Include card names in the output.
        #[arg(long)]
        names: bool,
    },
    /// Decode `{"deck": [...]}` back into an order.
    Decode {
        /// Request JSON; read from stdin when omitted.
        request: Option<String>,

        /// Accept the cards in any order (e.g. as listed in a battle log).
        #[arg(long)]
        unordered: bool,
    },
    /// Print the ticker codes and slot table.
    Table,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path).with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };

    // 1. Initialize logging
    let log_level = cli.log_level.clone().unwrap_or_else(|| config.log_level());
    let log_dir = cli.log_dir.clone().or_else(|| config.log_path());
    deck_core::logging::init_logging(&log_level, log_dir.as_deref(), &config.module_name())?;

    info!("deck-runner starting, log_level={log_level}");

    // 2. Refuse to run on a table that cannot round-trip
    let table = SymbolTable::global();
    table.validate().context("symbol table failed validation")?;

    let pretty = cli.pretty || config.pretty();

    // 3. Dispatch
    let outcome = match cli.command {
        Command::Encode { request, names } => {
            let raw = read_request(request)?;
            encode(&raw, names || config.include_names()).map(|resp| emit(&resp, pretty))
        }
        Command::Decode { request, unordered } => {
            let raw = read_request(request)?;
            decode(&raw, unordered).map(|resp| emit(&resp, pretty))
        }
        Command::Table => Ok(emit(table, pretty)),
    };

    match outcome {
        Ok(written) => {
            written?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(kind = e.kind(), "request rejected: {e}");
            emit(&ErrorResponse::from(&e), pretty)?;
            Ok(ExitCode::from(2))
        }
    }
}

/// Take the raw request text from the argument, or from stdin when absent.
/// Parsing happens in [`encode`]/[`decode`] so bad JSON gets an error body.
fn read_request(arg: Option<String>) -> Result<String> {
    match arg {
        Some(s) => Ok(s),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("reading request from stdin")?;
            Ok(buf)
        }
    }
}

fn encode(raw: &str, names: bool) -> Result<EncodeResponse, DeckError> {
    let encoder = Encoder::new();
    let req = wire::parse_order_request(&wire::parse_request(raw)?)?;
    let encoded = encoder.encode(&req)?;
    let cards = names.then(|| encoder.cards_for(encoded.bits).into_iter().map(CardView::from).collect());
    info!(bits = %encoded.bits, ticker = %req.ticker, buy = req.buy, "encoded order");
    Ok(EncodeResponse::new(encoded, cards))
}

fn decode(raw: &str, unordered: bool) -> Result<DecodeResponse, DeckError> {
    let decoder = Decoder::new();
    let cards = wire::parse_deck_request(&wire::parse_request(raw)?)?;
    let decoded = if unordered {
        decoder.decode_any_order(cards.as_slice())?
    } else {
        decoder.decode(cards.as_slice())?
    };
    info!(bits = %decoded.bits, side = %decoded.order.direction, ticker = %decoded.order.ticker, shares = decoded.order.shares, "decoded deck");
    Ok(DecodeResponse::from(decoded))
}

fn emit<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
