//! Interactive terminal harness for the nested grid showcase.
//!
//! Run with `cargo run --example nested_showcase [config.json]`. Set
//! `GRID_SHOWCASE_LOG=<path>` to capture JSON log lines.

use std::env;

use grid_showcase::logging::FileSink;
use grid_showcase::{CliDriver, DemoConfig, Harness, LayoutDemoController, Logger, Result};

fn main() -> Result<()> {
    let config = match env::args().nth(1) {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    let logger = match env::var("GRID_SHOWCASE_LOG") {
        Ok(path) => Some(Logger::new(FileSink::new(path, 1 << 20)?)),
        Err(_) => None,
    };

    let mut controller = LayoutDemoController::new(config)?;
    if let Some(logger) = logger.clone() {
        controller = controller.with_logger(logger);
    }

    let mut harness = Harness::new(controller);
    if let Some(logger) = logger {
        harness = harness.with_logger(logger);
    }

    let harness = CliDriver::new(harness).run()?;
    let metrics = harness.controller().metrics();
    println!(
        "transitions: {}  relays: {}  drops: {}",
        metrics.transitions, metrics.layout_relays, metrics.drops
    );
    Ok(())
}
