// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing: map a menu-space point to at most one element.
//!
//! ## Policy
//!
//! - Elements are visited in declaration order, which is also their z-order
//!   (topmost declared first).
//! - The point is mapped into each element's own space by a [`Localizer`]
//!   before testing containment.
//! - The first containing element wins. Overlaps are resolved by this rule
//!   alone; no depth key is consulted.
//! - A miss is `None`, a normal value.
//!
//! The resolver has no side effects.

use kurbo::Point;

use crate::types::{Element, ElementGeometry};

/// Menu-space to element-space coordinate mapping.
///
/// Hosts with their own mapping primitive (for example one that also applies
/// a display scale factor) implement this and inject it into the menu.
/// The hit tester trusts the mapped result as-is.
pub trait Localizer {
    /// Map `pt` from menu space into the local space of `geometry`.
    fn map_to_local(&self, pt: Point, geometry: &ElementGeometry) -> Point;
}

/// Default mapping through the inverse of [`ElementGeometry::transform`].
#[derive(Copy, Clone, Debug, Default)]
pub struct TransformLocalizer;

impl Localizer for TransformLocalizer {
    #[inline]
    fn map_to_local(&self, pt: Point, geometry: &ElementGeometry) -> Point {
        geometry.transform.inverse() * pt
    }
}

/// First-match hit tester over an ordered element list.
#[derive(Clone, Debug, Default)]
pub struct HitTester<L = TransformLocalizer> {
    localizer: L,
}

impl<L: Localizer> HitTester<L> {
    /// Create a hit tester using `localizer` for coordinate mapping.
    pub fn new(localizer: L) -> Self {
        Self { localizer }
    }

    /// The injected coordinate mapping.
    pub fn localizer(&self) -> &L {
        &self.localizer
    }

    /// Return the first element (in declaration order) containing `pt`.
    pub fn resolve<K: Copy + Eq, A>(&self, pt: Point, elements: &[Element<K, A>]) -> Option<K> {
        elements
            .iter()
            .find(|e| {
                let local = self.localizer.map_to_local(pt, e.geometry());
                e.geometry().contains_local(local)
            })
            .map(Element::id)
    }
}
