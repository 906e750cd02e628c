//! Hotel Console - interactive room booking for a single operator
//!
//! Reads settings from the OS config directory, replays the reservation
//! file and hands control to the numbered menu until Exit.

use anyhow::{Context, Result};
use hotel_console::{HotelConfig, Menu};
use hotel_core::{Hotel, TextFileStore};
use std::io;
use tracing::{info, warn, Level};

fn main() -> Result<()> {
    let (config, config_error) = match HotelConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (HotelConfig::default(), Some(e)),
    };

    // Logs on stderr, stdout belongs to the menu
    let level = config.logging.max_level();
    tracing_subscriber::fmt()
        .with_max_level(level.clone().unwrap_or(Level::WARN))
        .with_writer(io::stderr)
        .init();

    if let Some(e) = config_error {
        warn!("using default configuration: {:#}", e);
    }
    if let Err(bad) = &level {
        warn!("unknown log level {:?}, using warn", bad);
    }

    info!("reservations stored at {:?}", config.storage.path);
    let store = TextFileStore::new(&config.storage.path).with_policy(config.storage.on_malformed);
    let (mut hotel, summary) = Hotel::open(store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut hotel, stdin.lock(), stdout.lock())
        .with_load_summary(&summary)
        .run()
        .context("Console session failed")?;

    Ok(())
}
