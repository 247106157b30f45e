// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element enter/leave notifications.
//!
//! Toolkits often deliver enter/leave to each widget separately from the
//! container's move events. Those notifications may be missing, duplicated,
//! or arrive before or after the move that describes the same motion.
//! Handlers here never trust their own pairing: each one first reads the
//! tracked element from [`HoverState`] and acts only when it disagrees.
//!
//! - Enter for the tracked element: nothing to do.
//! - Enter for another element: the move path missed an update; hover is
//!   forced onto the entered element (a correction).
//! - Leave for an element that is not tracked: nothing to do.
//! - Leave for the tracked element: its flag is cleared and nothing is tracked.

use alloc::vec::Vec;

use crate::hover::HoverState;
use crate::types::{Element, Transition};

/// Handle an enter notification for `id`.
pub(crate) fn on_element_enter<K: Copy + Eq, A>(
    hover: &mut HoverState<K>,
    elements: &mut [Element<K, A>],
    id: K,
) -> Vec<Transition<K>> {
    if hover.current() == Some(id) || !elements.iter().any(|e| e.id() == id) {
        return Vec::new();
    }
    hover.force(elements, Some(id))
}

/// Handle a leave notification for `id`.
pub(crate) fn on_element_leave<K: Copy + Eq, A>(
    hover: &mut HoverState<K>,
    elements: &mut [Element<K, A>],
    id: K,
) -> Vec<Transition<K>> {
    hover.release(elements, id)
}
