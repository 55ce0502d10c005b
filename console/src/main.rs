//! Interactive console host for the inventory client.
//!
//! Executes the core's requests with ureq and its dialogs on the terminal.
//! Reads `INVENTORY_URL` (default `http://127.0.0.1:9090`) and `RUST_LOG`.

mod command;
mod session;
mod terminal;
mod transport;

use std::io;

use inventory_core::{InventoryApp, InventoryClient};
use tracing_subscriber::EnvFilter;

use crate::terminal::Terminal;
use crate::transport::UreqTransport;

const DEFAULT_URL: &str = "http://127.0.0.1:9090";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let base_url = std::env::var("INVENTORY_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
    tracing::info!(%base_url, "starting inventory console");

    let terminal = Terminal::new(io::stdin().lock(), io::stdout());
    let mut app = InventoryApp::new(InventoryClient::new(&base_url), UreqTransport::new(), terminal);
    app.dialogs_mut().print(command::HELP)?;
    session::run(&mut app)
}
