// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Process-wide logger setup.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install `env_logger` as the `log` backend. Safe to call more than once.
///
/// The filter defaults to `info` and can be overridden with `RUST_LOG`
/// (e.g. `RUST_LOG=regform=debug` to trace submit outcomes). Field contents are
/// never logged.
pub fn init() {
    INIT.call_once(|| {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
        builder.format_timestamp_millis();
        // A logger may already be installed (e.g. by a test harness).
        if builder.try_init().is_err() {
            log::warn!("logger already initialized; keeping the existing one");
        }
    });
}
