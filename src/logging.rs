//! Logging utilities for the munsell library.
//!
//! This module provides structured logging functionality so that hosts
//! embedding the library get searchable, analyzable build events.

use tracing::{error, info};

/// Initialize the tracing subscriber with the given log level
pub fn init_tracing(log_level: &str) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(val) => val,
        Err(_) => log_level.to_string(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Log summary information about a freshly built colormap table
pub fn log_build_stats(name: &str, anchor_count: usize, entry_count: usize) {
    info!(
        operation = "table_build",
        name = name,
        anchors = anchor_count,
        entries = entry_count,
        "Colormap table built"
    );
}

/// Log an error with context
pub fn log_error(error: &crate::error::MunsellError, context: &str) {
    error!(
        error = %error,
        context = context,
        error_type = std::any::type_name_of_val(error),
        "Error occurred"
    );
}
