// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover controller: the single authoritative "currently hovered element".
//!
//! ## Usage
//!
//! 1) Each raw pointer move is hit-tested into a candidate (or `None`).
//! 2) [`HoverState`] compares the candidate with the tracked element.
//! 3) On a change, every element currently flagged as hovered is cleared
//!    (not only the tracked one), then the candidate is flagged.
//!
//! Clearing from the element flags rather than from the tracked id means a
//! highlight orphaned by an earlier missed notification is removed on the very
//! next change.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use understory_hotbox::hover::HoverState;
//! use understory_hotbox::menu::Menu;
//! use understory_hotbox::types::{Element, ElementGeometry, Transition};
//! use understory_hotbox::HotboxConfig;
//!
//! let mut menu: Menu<u32, ()> = Menu::new(
//!     HotboxConfig::default(),
//!     [
//!         Element::ring(1, ElementGeometry::from_rect(Rect::new(0.0, 0.0, 40.0, 40.0)), ()),
//!         Element::ring(2, ElementGeometry::from_rect(Rect::new(50.0, 0.0, 90.0, 40.0)), ()),
//!     ],
//! )
//! .unwrap();
//! menu.show();
//! assert_eq!(menu.pointer_move((10.0, 10.0).into()), vec![Transition::Enter(1)]);
//! assert_eq!(
//!     menu.pointer_move((60.0, 10.0).into()),
//!     vec![Transition::Leave(1), Transition::Enter(2)]
//! );
//! assert!(menu.pointer_move((61.0, 11.0).into()).is_empty());
//! # let _ = HoverState::<u32>::new();
//! ```

use alloc::vec::Vec;

use kurbo::Point;

use crate::hit::{HitTester, Localizer};
use crate::types::{Element, ElementState, Transition};

/// Tracks the hovered element and writes every element's hover flag.
///
/// Invariant: `current()` is `None` or names the only element whose
/// [`ElementState::HOVERED`] bit is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState<K> {
    current: Option<K>,
}

impl<K: Copy + Eq> HoverState<K> {
    /// Create a state with nothing hovered.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The tracked hovered element.
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Reconcile hover with the element under `pt`.
    ///
    /// Returns no transitions when the pointer stays over the tracked element
    /// (or stays over nothing).
    pub(crate) fn on_pointer_move<A, L: Localizer>(
        &mut self,
        hit: &HitTester<L>,
        pt: Point,
        elements: &mut [Element<K, A>],
    ) -> Vec<Transition<K>> {
        let candidate = hit.resolve(pt, elements);
        if candidate == self.current {
            return Vec::new();
        }
        self.force(elements, candidate)
    }

    /// Clear every hovered flag except `candidate`'s, then flag `candidate`.
    ///
    /// Shared by the move, press, and fallback paths. Unknown ids are treated
    /// as `None`.
    pub(crate) fn force<A>(
        &mut self,
        elements: &mut [Element<K, A>],
        candidate: Option<K>,
    ) -> Vec<Transition<K>> {
        let candidate = candidate.filter(|&k| elements.iter().any(|e| e.id() == k));
        let mut out = Vec::new();
        for e in elements.iter_mut() {
            if e.is_hovered() && Some(e.id()) != candidate {
                e.set(ElementState::HOVERED, false);
                out.push(Transition::Leave(e.id()));
            }
        }
        if let Some(k) = candidate
            && let Some(e) = elements.iter_mut().find(|e| e.id() == k)
            && !e.is_hovered()
        {
            e.set(ElementState::HOVERED, true);
            out.push(Transition::Enter(k));
        }
        self.current = candidate;
        out
    }

    /// Clear one element's hover if it is the tracked one.
    pub(crate) fn release<A>(&mut self, elements: &mut [Element<K, A>], id: K) -> Vec<Transition<K>> {
        if self.current != Some(id) {
            return Vec::new();
        }
        self.current = None;
        let mut out = Vec::new();
        if let Some(e) = elements.iter_mut().find(|e| e.id() == id)
            && e.is_hovered()
        {
            e.set(ElementState::HOVERED, false);
            out.push(Transition::Leave(id));
        }
        out
    }

    /// Clear hover on every element unconditionally.
    pub(crate) fn clear<A>(&mut self, elements: &mut [Element<K, A>]) -> Vec<Transition<K>> {
        self.force(elements, None)
    }
}
