//! `sabores-menu`: order from the terminal.
//!
//! Reads commands from stdin (see `help`), prints notifications as they
//! happen, and prints the WhatsApp link when an order is submitted.
//! Pass `--json` to print notifications as JSON lines.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;

use sabores_app::console::{self, Command, Flow, PrintLink};
use sabores_app::{AppConfig, MenuSession};
use sabores_events::{EventBus, InMemoryEventBus};

fn main() -> anyhow::Result<()> {
    sabores_observability::init();

    let json = std::env::args().skip(1).any(|a| a == "--json");

    let config = AppConfig::from_env().context("invalid configuration")?;
    let catalog = config.load_catalog().context("failed to load catalog")?;
    tracing::info!(
        catalog_version = catalog.version(),
        products = catalog.len(),
        restaurant = %config.message.restaurant_name,
        "menu ready"
    );

    let bus = Arc::new(InMemoryEventBus::new());
    let notifications = bus.subscribe();
    let mut session = MenuSession::new(catalog, &config, bus, PrintLink::new(io::stdout()));

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "{}", console::HELP)?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;

        let flow = match Command::parse(&line) {
            Ok(Some(command)) => console::execute(&mut session, command, &mut out)?,
            Ok(None) => Flow::Continue,
            Err(error) => {
                writeln!(out, "error: {error}")?;
                Flow::Continue
            }
        };

        for notification in notifications.drain() {
            writeln!(out, "{}", console::render_notification(&notification, json))?;
        }
        out.flush()?;

        if flow == Flow::Quit {
            break;
        }
    }

    Ok(())
}
