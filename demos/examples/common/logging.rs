// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared logging setup for the demos (included with `#[path]`).

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber. `RUST_LOG` overrides the default `debug` level.
pub(crate) fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
