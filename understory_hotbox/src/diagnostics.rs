// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional per-transition diagnostics.
//!
//! When enabled, every hover change is kept as a [`TransitionRecord`] in a
//! bounded history and emitted as a `tracing` event. When disabled, recording
//! returns before building anything.

use alloc::collections::VecDeque;
use core::fmt::Debug;

use crate::types::TriggerSource;

/// One hover change as seen by diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TransitionRecord<K> {
    /// Sequence number of the pointer sample (or notification) that caused it.
    pub seq: u64,
    /// Hovered element before the change.
    pub old: Option<K>,
    /// Hovered element after the change.
    pub new: Option<K>,
    /// Handler that made the change.
    pub source: TriggerSource,
}

/// Gated record log for hover transitions and fallback corrections.
#[derive(Clone, Debug)]
pub struct Diagnostics<K> {
    enabled: bool,
    limit: usize,
    history: VecDeque<TransitionRecord<K>>,
    transitions: u64,
    corrections: u64,
}

impl<K: Copy + Debug> Diagnostics<K> {
    /// Create a log; `limit` bounds the retained history.
    pub fn new(enabled: bool, limit: usize) -> Self {
        Self {
            enabled,
            limit,
            history: VecDeque::new(),
            transitions: 0,
            corrections: 0,
        }
    }

    /// Whether records are being produced.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Retained records, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &TransitionRecord<K>> {
        self.history.iter()
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&TransitionRecord<K>> {
        self.history.back()
    }

    /// Total transitions recorded, including ones dropped from the history.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Transitions made by the fallback path.
    pub fn corrections(&self) -> u64 {
        self.corrections
    }

    /// Forget retained records and reset counters.
    pub fn reset(&mut self) {
        self.history.clear();
        self.transitions = 0;
        self.corrections = 0;
    }

    pub(crate) fn record(&mut self, seq: u64, old: Option<K>, new: Option<K>, source: TriggerSource) {
        if !self.enabled {
            return;
        }
        self.transitions += 1;
        if source.is_fallback() {
            self.corrections += 1;
            tracing::debug!(seq, ?old, ?new, ?source, "hover corrected by element fallback");
        } else {
            tracing::debug!(seq, ?old, ?new, ?source, "hover transition");
        }
        if self.limit == 0 {
            return;
        }
        while self.history.len() >= self.limit {
            self.history.pop_front();
        }
        self.history.push_back(TransitionRecord {
            seq,
            old,
            new,
            source,
        });
    }
}
