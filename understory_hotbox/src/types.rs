// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: elements, geometry, state bits, pointer samples, and transitions.
//!
//! ## Overview
//!
//! These types describe what the menu owns and what it reports.
//! They are consumed by the [`hit`](crate::hit) resolver, mutated by the
//! [`hover`](crate::hover) and [`press`](crate::press) modules, and read by an
//! external paint routine through [`Element::state`].

use alloc::vec::Vec;

use bitflags::bitflags;
use kurbo::{Affine, Ellipse, Point, Rect, Shape};

bitflags! {
    /// Per-element interaction state read by the paint routine.
    ///
    /// At most one element of a [`Menu`](crate::menu::Menu) carries each bit at any time.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ElementState: u8 {
        /// The pointer is over this element.
        const HOVERED = 0b0000_0001;
        /// A press landed on this element and awaits a matching release.
        const ARMED   = 0b0000_0010;
    }
}

/// Role of an element within the ring.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A button placed on the ring.
    #[default]
    Ring,
    /// The control at the center of the ring.
    Center,
}

/// Region used for containment inside an element's local bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitShape {
    /// The full local bounds rectangle.
    #[default]
    Bounds,
    /// The ellipse inscribed in the local bounds.
    Ellipse,
}

/// Geometry of an element as produced by the layout provider.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementGeometry {
    /// Bounds in the element's own coordinate space.
    pub local_bounds: Rect,
    /// Element-local to menu-local transform.
    pub transform: Affine,
    /// Region tested within `local_bounds`.
    pub shape: HitShape,
}

impl Default for ElementGeometry {
    fn default() -> Self {
        Self {
            local_bounds: Rect::ZERO,
            transform: Affine::IDENTITY,
            shape: HitShape::Bounds,
        }
    }
}

impl ElementGeometry {
    /// Place a rectangular element at `rect` in menu space.
    ///
    /// The element's own origin sits at the rect's top-left corner, so its
    /// local bounds are `(0, 0)..(width, height)`.
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            local_bounds: Rect::from_origin_size(Point::ZERO, rect.size()),
            transform: Affine::translate(rect.origin().to_vec2()),
            shape: HitShape::Bounds,
        }
    }

    /// Same as [`from_rect`](Self::from_rect) with an inscribed ellipse as the hit region.
    pub fn ellipse(rect: Rect) -> Self {
        Self {
            shape: HitShape::Ellipse,
            ..Self::from_rect(rect)
        }
    }

    /// Whether a point already mapped into element space lies inside the hit region.
    ///
    /// Rectangles are half-open on their max edges, so abutting elements never
    /// share a point.
    pub fn contains_local(&self, local: Point) -> bool {
        match self.shape {
            HitShape::Bounds => self.local_bounds.contains(local),
            HitShape::Ellipse => {
                self.local_bounds.contains(local)
                    && Ellipse::from_rect(self.local_bounds).contains(local)
            }
        }
    }

    /// Axis-aligned bounds of the element in menu space.
    pub fn menu_bounds(&self) -> Rect {
        self.transform.transform_rect_bbox(self.local_bounds)
    }
}

/// One interactive region of the menu: a ring button or the center control.
///
/// `K` is the caller's identifier, `A` the bound action (opaque to the menu).
#[derive(Clone, Debug)]
pub struct Element<K, A> {
    id: K,
    kind: ElementKind,
    geometry: ElementGeometry,
    state: ElementState,
    action: A,
}

impl<K: Copy + Eq, A> Element<K, A> {
    /// A ring button.
    pub fn ring(id: K, geometry: ElementGeometry, action: A) -> Self {
        Self {
            id,
            kind: ElementKind::Ring,
            geometry,
            state: ElementState::empty(),
            action,
        }
    }

    /// The center control.
    pub fn center(id: K, geometry: ElementGeometry, action: A) -> Self {
        Self {
            kind: ElementKind::Center,
            ..Self::ring(id, geometry, action)
        }
    }

    /// Identifier of this element.
    pub fn id(&self) -> K {
        self.id
    }

    /// Role of this element.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Geometry supplied at construction.
    pub fn geometry(&self) -> &ElementGeometry {
        &self.geometry
    }

    /// Current interaction state.
    pub fn state(&self) -> ElementState {
        self.state
    }

    /// Shorthand for `state().contains(ElementState::HOVERED)`.
    pub fn is_hovered(&self) -> bool {
        self.state.contains(ElementState::HOVERED)
    }

    /// Shorthand for `state().contains(ElementState::ARMED)`.
    pub fn is_armed(&self) -> bool {
        self.state.contains(ElementState::ARMED)
    }

    /// The bound action.
    pub fn action(&self) -> &A {
        &self.action
    }

    pub(crate) fn set(&mut self, bits: ElementState, on: bool) {
        self.state.set(bits, on);
    }

    pub(crate) fn reset(&mut self) {
        self.state = ElementState::empty();
    }
}

/// An observation of the pointer in menu-local coordinates.
///
/// `seq` orders samples for diagnostics only; no decision depends on it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// Position in menu space, already corrected for display scale.
    pub position: Point,
    /// Monotonic sequence number assigned by the menu.
    pub seq: u64,
}

/// Raw pointer input delivered to the menu.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved.
    Move(Point),
    /// Primary button pressed.
    Down(Point),
    /// Primary button released.
    Up(Point),
}

/// A single flag change on one element.
///
/// Each transition asks the [`RepaintSink`] to repaint its element once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition<K> {
    /// Element gained [`ElementState::HOVERED`].
    Enter(K),
    /// Element lost [`ElementState::HOVERED`].
    Leave(K),
    /// Element gained [`ElementState::ARMED`].
    Arm(K),
    /// Element lost [`ElementState::ARMED`].
    Disarm(K),
}

impl<K: Copy> Transition<K> {
    /// The element whose flag changed.
    pub fn element(&self) -> K {
        match *self {
            Self::Enter(k) | Self::Leave(k) | Self::Arm(k) | Self::Disarm(k) => k,
        }
    }
}

/// Which handler caused a hover change.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriggerSource {
    /// Centralized pointer-move reconciliation.
    Move,
    /// Pointer-down confirmation forcing hover onto the pressed element.
    Press,
    /// Per-element enter/leave notification correcting a missed update.
    Fallback,
    /// Menu dismissal.
    Teardown,
}

impl TriggerSource {
    /// Whether the change came from the per-element fallback path.
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback)
    }
}

/// A confirmed click: the element and a clone of its bound action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activation<K, A> {
    /// Element that was pressed and released.
    pub element: K,
    /// The element's bound action.
    pub action: A,
}

/// Receives repaint requests for elements whose flags changed.
pub trait RepaintSink<K> {
    /// The given element's visual state changed.
    fn request_repaint(&mut self, element: K);
}

/// A sink that drops every request.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoRepaint;

impl<K> RepaintSink<K> for NoRepaint {
    #[inline]
    fn request_repaint(&mut self, _element: K) {}
}

impl<K> RepaintSink<K> for Vec<K> {
    fn request_repaint(&mut self, element: K) {
        self.push(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rect_places_origin_at_top_left() {
        let g = ElementGeometry::from_rect(Rect::new(10.0, 20.0, 50.0, 60.0));
        assert_eq!(g.local_bounds, Rect::new(0.0, 0.0, 40.0, 40.0));
        assert_eq!(g.transform * Point::ZERO, Point::new(10.0, 20.0));
        assert_eq!(g.menu_bounds(), Rect::new(10.0, 20.0, 50.0, 60.0));
    }

    #[test]
    fn bounds_are_half_open() {
        let g = ElementGeometry::from_rect(Rect::new(0.0, 0.0, 40.0, 40.0));
        assert!(g.contains_local(Point::new(0.0, 0.0)));
        assert!(g.contains_local(Point::new(39.9, 39.9)));
        assert!(!g.contains_local(Point::new(40.0, 20.0)));
        assert!(!g.contains_local(Point::new(20.0, -0.1)));
    }

    #[test]
    fn ellipse_excludes_corners() {
        let g = ElementGeometry::ellipse(Rect::new(0.0, 0.0, 40.0, 40.0));
        assert!(g.contains_local(Point::new(20.0, 20.0)));
        assert!(g.contains_local(Point::new(20.0, 1.0)));
        assert!(!g.contains_local(Point::new(1.0, 1.0)));
        assert!(!g.contains_local(Point::new(39.0, 39.0)));
    }

    #[test]
    fn element_state_accessors() {
        let mut e = Element::ring(7_u32, ElementGeometry::default(), ());
        assert!(!e.is_hovered() && !e.is_armed());
        e.set(ElementState::HOVERED, true);
        e.set(ElementState::ARMED, true);
        assert_eq!(e.state(), ElementState::HOVERED | ElementState::ARMED);
        e.set(ElementState::HOVERED, false);
        assert!(!e.is_hovered() && e.is_armed());
        e.reset();
        assert_eq!(e.state(), ElementState::empty());
        assert_eq!(e.kind(), ElementKind::Ring);
        assert_eq!(Element::center(1_u32, ElementGeometry::default(), ()).kind(), ElementKind::Center);
    }

    #[test]
    fn vec_sink_records_requests() {
        let mut sink: Vec<u32> = Vec::new();
        sink.request_repaint(3);
        sink.request_repaint(1);
        assert_eq!(sink, [3, 1]);
        assert_eq!(Transition::Disarm(4_u32).element(), 4);
    }
}
