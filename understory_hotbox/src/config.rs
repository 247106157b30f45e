// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu configuration.

/// Settings for a [`Menu`](crate::menu::Menu).
///
/// With the `serde` feature this can be loaded from a host settings file;
/// missing fields take their default.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HotboxConfig {
    /// Emit a diagnostic record for every hover transition and fallback correction.
    pub diagnostics: bool,
    /// Number of diagnostic records retained.
    pub history_limit: usize,
    /// Dismissing the menu while an element is hovered activates that element.
    pub execute_on_dismiss: bool,
}

impl Default for HotboxConfig {
    fn default() -> Self {
        Self {
            diagnostics: false,
            history_limit: 64,
            execute_on_dismiss: false,
        }
    }
}
