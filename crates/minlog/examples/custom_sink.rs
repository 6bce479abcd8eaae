//! Swapping the default sink.
//!
//! Run with: cargo run -p minlog --example custom_sink
//!
//! Installs the dated sink, then a closure sink that writes to stderr.

use minlog::{DatedSink, Level, Record};

fn main() {
    minlog::set_level(Level::Debug);

    minlog::info!("default console sink");

    minlog::set_sink(DatedSink::new());
    minlog::info!(category: "demo", "dated sink with a category");
    minlog::warn!("dated sink without a category");

    minlog::set_sink(|record: &Record<'_>| {
        eprintln!("{:>5} {}", record.level(), record.message());
    });
    minlog::debug!("closure sink on stderr");
    minlog::trace!("below the threshold, never rendered");

    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "settings.toml missing");
    minlog::set_sink(minlog::ConsoleSink::new());
    minlog::error!(category: "config", error: &err, "falling back to defaults");
}
