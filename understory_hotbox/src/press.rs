// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press confirmation: arm on pointer-down, dispatch on a matching pointer-up.
//!
//! ## Protocol
//!
//! - Down: hit-test the press point (the tracked hover may be stale if no move
//!   preceded the press), disarm every element, then force hover onto the
//!   pressed element and arm it.
//! - Up: hit-test the release point. If it resolves to the armed element the
//!   gesture is [`Release::Activated`]; otherwise it is
//!   [`Release::Cancelled`]. Either way nothing stays armed.
//!
//! Dispatch depends only on the two hit tests, so it stays correct even when
//! hover flags lag behind the pointer.

use alloc::vec::Vec;

use kurbo::Point;

use crate::hit::{HitTester, Localizer};
use crate::hover::HoverState;
use crate::types::{Activation, Element, ElementState, Transition};

/// Outcome of a pointer-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Release<K, A> {
    /// Released over the armed element: run its action.
    Activated(Activation<K, A>),
    /// An element was armed but the release landed elsewhere.
    Cancelled {
        /// The element that had been armed.
        armed: K,
        /// The element under the release point, if any.
        released_over: Option<K>,
    },
    /// Nothing was armed.
    Idle,
}

impl<K, A> Release<K, A> {
    /// The activation, if the gesture completed.
    pub fn activation(self) -> Option<Activation<K, A>> {
        match self {
            Self::Activated(a) => Some(a),
            _ => None,
        }
    }

    /// Whether the gesture completed.
    pub fn is_activated(&self) -> bool {
        matches!(self, Self::Activated(_))
    }
}

/// Tracks the armed element.
///
/// Invariant: `armed()` is `None` or names the only element whose
/// [`ElementState::ARMED`] bit is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PressState<K> {
    armed: Option<K>,
}

impl<K: Copy + Eq> PressState<K> {
    /// Create a state with nothing armed.
    pub fn new() -> Self {
        Self { armed: None }
    }

    /// The armed element.
    pub fn armed(&self) -> Option<K> {
        self.armed
    }

    /// Arm the element under `pt`, forcing hover onto it.
    ///
    /// A press over empty space only disarms.
    pub(crate) fn on_pointer_down<A, L: Localizer>(
        &mut self,
        hover: &mut HoverState<K>,
        hit: &HitTester<L>,
        pt: Point,
        elements: &mut [Element<K, A>],
    ) -> Vec<Transition<K>> {
        let candidate = hit.resolve(pt, elements);
        let mut out = self.disarm_except(elements, candidate);
        let Some(k) = candidate else {
            return out;
        };
        out.extend(hover.force(elements, Some(k)));
        if let Some(e) = elements.iter_mut().find(|e| e.id() == k)
            && !e.is_armed()
        {
            e.set(ElementState::ARMED, true);
            out.push(Transition::Arm(k));
        }
        self.armed = Some(k);
        out
    }

    /// Confirm or cancel the armed gesture at `pt`.
    pub(crate) fn on_pointer_up<A: Clone, L: Localizer>(
        &mut self,
        hit: &HitTester<L>,
        pt: Point,
        elements: &mut [Element<K, A>],
    ) -> (Release<K, A>, Vec<Transition<K>>) {
        let armed = self.armed;
        let transitions = self.clear(elements);
        let Some(armed) = armed else {
            return (Release::Idle, transitions);
        };
        let released_over = hit.resolve(pt, elements);
        let release = match elements.iter().find(|e| Some(e.id()) == released_over) {
            Some(e) if e.id() == armed => Release::Activated(Activation {
                element: armed,
                action: e.action().clone(),
            }),
            _ => Release::Cancelled {
                armed,
                released_over,
            },
        };
        (release, transitions)
    }

    /// Disarm every element unconditionally.
    pub(crate) fn clear<A>(&mut self, elements: &mut [Element<K, A>]) -> Vec<Transition<K>> {
        self.disarm_except(elements, None)
    }

    fn disarm_except<A>(&mut self, elements: &mut [Element<K, A>], keep: Option<K>) -> Vec<Transition<K>> {
        let mut out = Vec::new();
        for e in elements.iter_mut() {
            if e.is_armed() && Some(e.id()) != keep {
                e.set(ElementState::ARMED, false);
                out.push(Transition::Disarm(e.id()));
            }
        }
        if self.armed != keep {
            self.armed = None;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hit::TransformLocalizer;
    use crate::types::ElementGeometry;
    use alloc::vec;
    use kurbo::Rect;

    fn row() -> Vec<Element<u32, &'static str>> {
        ["copy", "paste", "delete"]
            .into_iter()
            .zip(0_u32..)
            .map(|(action, i)| {
                let x = f64::from(i) * 50.0;
                Element::ring(i, ElementGeometry::from_rect(Rect::new(x, 0.0, x + 40.0, 40.0)), action)
            })
            .collect()
    }

    fn armed_count(elements: &[Element<u32, &'static str>]) -> usize {
        elements.iter().filter(|e| e.is_armed()).count()
    }

    // Down then up over the same element, with no prior move.
    #[test]
    fn press_release_same_element_activates() {
        let mut elements = row();
        let hit = HitTester::<TransformLocalizer>::default();
        let mut hover = HoverState::new();
        let mut press = PressState::new();

        let down = press.on_pointer_down(&mut hover, &hit, Point::new(60.0, 10.0), &mut elements);
        assert_eq!(down, vec![Transition::Enter(1), Transition::Arm(1)]);
        assert_eq!(press.armed(), Some(1));
        assert_eq!(hover.current(), Some(1));

        let (release, up) = press.on_pointer_up(&hit, Point::new(70.0, 30.0), &mut elements);
        assert_eq!(
            release,
            Release::Activated(Activation {
                element: 1,
                action: "paste"
            })
        );
        assert_eq!(up, vec![Transition::Disarm(1)]);
        assert_eq!(press.armed(), None);
        assert_eq!(armed_count(&elements), 0);
        // Hover stays with the pointer.
        assert!(elements[1].is_hovered());
    }

    // Release over another element cancels.
    #[test]
    fn release_elsewhere_cancels() {
        let mut elements = row();
        let hit = HitTester::<TransformLocalizer>::default();
        let mut hover = HoverState::new();
        let mut press = PressState::new();
        let _ = press.on_pointer_down(&mut hover, &hit, Point::new(10.0, 10.0), &mut elements);
        let (release, _) = press.on_pointer_up(&hit, Point::new(110.0, 10.0), &mut elements);
        assert_eq!(
            release,
            Release::Cancelled {
                armed: 0,
                released_over: Some(2)
            }
        );
        assert_eq!(armed_count(&elements), 0);
    }

    // Release over empty space cancels.
    #[test]
    fn release_outside_cancels() {
        let mut elements = row();
        let hit = HitTester::<TransformLocalizer>::default();
        let mut hover = HoverState::new();
        let mut press = PressState::new();
        let _ = press.on_pointer_down(&mut hover, &hit, Point::new(10.0, 10.0), &mut elements);
        let (release, _) = press.on_pointer_up(&hit, Point::new(500.0, 500.0), &mut elements);
        assert!(!release.is_activated());
        assert_eq!(release.activation(), None);
        assert_eq!(press.armed(), None);
    }

    // Up without down is idle.
    #[test]
    fn release_without_press_is_idle() {
        let mut elements = row();
        let hit = HitTester::<TransformLocalizer>::default();
        let mut press = PressState::new();
        let (release, up) = press.on_pointer_up(&hit, Point::new(10.0, 10.0), &mut elements);
        assert_eq!(release, Release::Idle);
        assert!(up.is_empty());
    }

    // Press ignores a stale tracked hover and re-resolves.
    #[test]
    fn press_overrides_stale_hover() {
        let mut elements = row();
        let hit = HitTester::<TransformLocalizer>::default();
        let mut hover = HoverState::new();
        let mut press = PressState::new();
        let _ = hover.force(&mut elements, Some(0));
        let down = press.on_pointer_down(&mut hover, &hit, Point::new(110.0, 10.0), &mut elements);
        assert_eq!(
            down,
            vec![Transition::Leave(0), Transition::Enter(2), Transition::Arm(2)]
        );
        assert_eq!(hover.current(), Some(2));
    }

    // A second press moves the arm; an empty press only disarms.
    #[test]
    fn second_press_rearms() {
        let mut elements = row();
        let hit = HitTester::<TransformLocalizer>::default();
        let mut hover = HoverState::new();
        let mut press = PressState::new();
        let _ = press.on_pointer_down(&mut hover, &hit, Point::new(10.0, 10.0), &mut elements);
        let down = press.on_pointer_down(&mut hover, &hit, Point::new(60.0, 10.0), &mut elements);
        assert_eq!(
            down,
            vec![
                Transition::Disarm(0),
                Transition::Leave(0),
                Transition::Enter(1),
                Transition::Arm(1)
            ]
        );
        assert_eq!(armed_count(&elements), 1);

        let empty = press.on_pointer_down(&mut hover, &hit, Point::new(45.0, 10.0), &mut elements);
        assert_eq!(empty, vec![Transition::Disarm(1)]);
        assert_eq!(press.armed(), None);
        assert_eq!(hover.current(), Some(1));
    }
}
