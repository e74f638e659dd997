//! Tests for the tracing setup.

use std::sync::Mutex;

use tokenaudit_core::tracing::setup::{init_tracing, LOG_ENV};

/// Serializes tests touching the log env var.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_debug_filter_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV, "debug");
    init_tracing();
    std::env::remove_var(LOG_ENV);
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    tracing::info!("still alive");
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV, "[[not a filter");
    init_tracing();
    std::env::remove_var(LOG_ENV);
}
