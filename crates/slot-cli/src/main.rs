//! `slots` CLI — compute bookable availability from free/busy JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Busy intervals on stdin, available slots on stdout
//! echo '[{"start":"2024-06-03T15:00:00Z","end":"2024-06-03T16:00:00Z"}]' \
//!     | slots compute --from 2024-06-03T00:00:00Z --days 14
//!
//! # From file to file
//! slots compute --from 2024-06-03T00:00:00Z -i busy.json -o available.json
//!
//! # Just the next bookable slot
//! slots next --from 2024-06-03T00:00:00Z -i busy.json
//! ```
//!
//! The input is a JSON array of `{"start", "end"}` RFC 3339 pairs — the flat
//! busy list a calendar free/busy query produces, already unioned across
//! source calendars. `compute` writes `{"available": [...]}` with RFC 3339
//! slot starts, ascending.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use slot_engine::{available_slots, BusyInterval, SlotConfig};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Bookable availability from calendar free/busy data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute every available slot start in the horizon
    Compute {
        #[command(flatten)]
        common: CommonArgs,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print only the first available slot
    Next {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args)]
struct CommonArgs {
    /// Reference instant in RFC 3339 (e.g. 2024-06-03T00:00:00Z)
    #[arg(long)]
    from: String,

    /// Number of calendar days to scan
    #[arg(long, default_value_t = 60)]
    days: u32,

    /// Buffer around existing bookings, in minutes
    #[arg(long, default_value_t = 30)]
    buffer_minutes: i64,

    /// Minimum advance notice, in hours
    #[arg(long, default_value_t = 4)]
    advance_hours: i64,

    /// Input file with a JSON array of busy intervals (reads stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
}

/// Response envelope, matching what booking frontends consume.
#[derive(Serialize)]
struct Availability {
    available: Vec<DateTime<Utc>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compute {
            common,
            pretty,
            output,
        } => {
            let slots = compute(&common)?;
            let body = Availability { available: slots };
            let json = if pretty {
                serde_json::to_string_pretty(&body)?
            } else {
                serde_json::to_string(&body)?
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::Next { common } => {
            let slots = compute(&common)?;
            match slots.first() {
                Some(slot) => println!("{}", slot.to_rfc3339()),
                None => bail!("no available slots within {} days", common.days),
            }
        }
    }

    Ok(())
}

fn compute(args: &CommonArgs) -> Result<Vec<DateTime<Utc>>> {
    let reference: DateTime<Utc> = args
        .from
        .parse()
        .with_context(|| format!("Invalid --from instant: {}", args.from))?;

    let raw = read_input(args.input.as_deref())?;
    let busy: Vec<BusyInterval> = serde_json::from_str(&raw)
        .context("Input must be a JSON array of {\"start\", \"end\"} intervals")?;

    let config = SlotConfig {
        buffer: Duration::minutes(args.buffer_minutes),
        minimum_advance: Duration::hours(args.advance_hours),
        ..SlotConfig::default()
    };

    let slots = available_slots(reference, args.days, &busy, &config)
        .context("Failed to compute availability")?;
    Ok(slots)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
