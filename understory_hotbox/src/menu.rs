// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hotbox menu: owns the elements and composes hit testing, hover, and press.
//!
//! ## Overview
//!
//! [`Menu`] is the only recipient of raw pointer events for the overlay's
//! bounds. It keeps the element list in declaration order (the hit-test
//! order), the [`HoverState`] and [`PressState`] singletons, and forwards
//! every flag change to a [`RepaintSink`].
//!
//! ## Lifecycle
//!
//! - [`Menu::show`] when the trigger key goes down.
//! - Feed [`Menu::pointer_move`], [`Menu::pointer_down`], [`Menu::pointer_up`]
//!   (or [`Menu::handle`]) and, if the toolkit delivers them, per-element
//!   [`Menu::element_enter`] / [`Menu::element_leave`].
//! - [`Menu::dismiss`] when the trigger key goes up. Every flag is cleared.
//!
//! Input arriving while the menu is hidden is ignored.
//!
//! All handlers run to completion on the event thread; each one re-reads the
//! shared state before writing it.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::Point;

use crate::config::HotboxConfig;
use crate::diagnostics::Diagnostics;
use crate::error::MenuError;
use crate::fallback;
use crate::hit::{HitTester, Localizer, TransformLocalizer};
use crate::hover::HoverState;
use crate::press::{PressState, Release};
use crate::types::{
    Activation, Element, ElementKind, NoRepaint, PointerEvent, PointerSample, RepaintSink,
    Transition, TriggerSource,
};

/// Radial menu container.
///
/// `K` identifies elements, `A` is the bound action, `L` maps menu points into
/// element space, and `R` receives repaint requests.
#[derive(Debug)]
pub struct Menu<K, A, L = TransformLocalizer, R = NoRepaint> {
    config: HotboxConfig,
    elements: Vec<Element<K, A>>,
    hit: HitTester<L>,
    hover: HoverState<K>,
    press: PressState<K>,
    diagnostics: Diagnostics<K>,
    repaint: R,
    visible: bool,
    seq: u64,
}

impl<K: Copy + Eq + Debug, A> Menu<K, A> {
    /// Build a menu with the default coordinate mapping and no repaint sink.
    pub fn new(
        config: HotboxConfig,
        elements: impl IntoIterator<Item = Element<K, A>>,
    ) -> Result<Self, MenuError<K>> {
        Self::with_parts(config, elements, TransformLocalizer, NoRepaint)
    }
}

impl<K: Copy + Eq + Debug, A, L: Localizer, R: RepaintSink<K>> Menu<K, A, L, R> {
    /// Build a menu with an injected coordinate mapping and repaint sink.
    ///
    /// Elements keep the given order; earlier elements win overlapping hits.
    pub fn with_parts(
        config: HotboxConfig,
        elements: impl IntoIterator<Item = Element<K, A>>,
        localizer: L,
        repaint: R,
    ) -> Result<Self, MenuError<K>> {
        let elements: Vec<Element<K, A>> = elements.into_iter().collect();
        let mut center: Option<K> = None;
        for (i, e) in elements.iter().enumerate() {
            if elements[..i].iter().any(|prev| prev.id() == e.id()) {
                return Err(MenuError::DuplicateElement(e.id()));
            }
            if e.kind() == ElementKind::Center {
                if let Some(first) = center {
                    return Err(MenuError::MultipleCenters {
                        first,
                        second: e.id(),
                    });
                }
                center = Some(e.id());
            }
        }
        let mut elements = elements;
        for e in &mut elements {
            e.reset();
        }
        Ok(Self {
            diagnostics: Diagnostics::new(config.diagnostics, config.history_limit),
            config,
            elements,
            hit: HitTester::new(localizer),
            hover: HoverState::new(),
            press: PressState::new(),
            repaint,
            visible: false,
            seq: 0,
        })
    }

    /// Configuration the menu was built with.
    pub fn config(&self) -> &HotboxConfig {
        &self.config
    }

    /// Elements in hit-test order.
    pub fn elements(&self) -> &[Element<K, A>] {
        &self.elements
    }

    /// Look up an element by id.
    pub fn element(&self, id: K) -> Option<&Element<K, A>> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// The tracked hovered element.
    pub fn hovered(&self) -> Option<K> {
        self.hover.current()
    }

    /// The armed element.
    pub fn armed(&self) -> Option<K> {
        self.press.armed()
    }

    /// Whether the menu is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Diagnostic records and counters.
    pub fn diagnostics(&self) -> &Diagnostics<K> {
        &self.diagnostics
    }

    /// The repaint sink.
    pub fn repaint(&self) -> &R {
        &self.repaint
    }

    /// The repaint sink, mutably (e.g. to drain recorded requests).
    pub fn repaint_mut(&mut self) -> &mut R {
        &mut self.repaint
    }

    /// Resolve the element under `pt` without touching any state.
    pub fn hit_test(&self, pt: Point) -> Option<K> {
        self.hit.resolve(pt, &self.elements)
    }

    /// Show the menu with every element idle.
    pub fn show(&mut self) {
        if self.visible {
            return;
        }
        self.reset_state();
        self.visible = true;
    }

    /// Centralized move reconciliation.
    pub fn pointer_move(&mut self, pt: Point) -> Vec<Transition<K>> {
        if !self.visible {
            return Vec::new();
        }
        let sample = self.sample(pt);
        let old = self.hover.current();
        let out = self
            .hover
            .on_pointer_move(&self.hit, sample.position, &mut self.elements);
        self.commit(&out, old, sample.seq, TriggerSource::Move);
        out
    }

    /// Arm the element under `pt`, forcing hover onto it.
    pub fn pointer_down(&mut self, pt: Point) -> Vec<Transition<K>> {
        if !self.visible {
            return Vec::new();
        }
        let sample = self.sample(pt);
        let old = self.hover.current();
        let out = self.press.on_pointer_down(
            &mut self.hover,
            &self.hit,
            sample.position,
            &mut self.elements,
        );
        self.commit(&out, old, sample.seq, TriggerSource::Press);
        out
    }

    /// Per-element enter notification from the toolkit.
    pub fn element_enter(&mut self, id: K) -> Vec<Transition<K>> {
        if !self.visible {
            return Vec::new();
        }
        let seq = self.next_seq();
        let old = self.hover.current();
        let out = fallback::on_element_enter(&mut self.hover, &mut self.elements, id);
        self.commit(&out, old, seq, TriggerSource::Fallback);
        out
    }

    /// Per-element leave notification from the toolkit.
    pub fn element_leave(&mut self, id: K) -> Vec<Transition<K>> {
        if !self.visible {
            return Vec::new();
        }
        let seq = self.next_seq();
        let old = self.hover.current();
        let out = fallback::on_element_leave(&mut self.hover, &mut self.elements, id);
        self.commit(&out, old, seq, TriggerSource::Fallback);
        out
    }

    fn sample(&mut self, position: Point) -> PointerSample {
        PointerSample {
            position,
            seq: self.next_seq(),
        }
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn commit(&mut self, out: &[Transition<K>], old: Option<K>, seq: u64, source: TriggerSource) {
        for t in out {
            self.repaint.request_repaint(t.element());
        }
        let new = self.hover.current();
        if new != old {
            self.diagnostics.record(seq, old, new, source);
        }
    }

    fn reset_state(&mut self) {
        let seq = self.next_seq();
        let old = self.hover.current();
        let mut out = self.press.clear(&mut self.elements);
        out.extend(self.hover.clear(&mut self.elements));
        self.commit(&out, old, seq, TriggerSource::Teardown);
    }
}

impl<K: Copy + Eq + Debug, A: Clone, L: Localizer, R: RepaintSink<K>> Menu<K, A, L, R> {
    /// Confirm or cancel the armed gesture at `pt`.
    pub fn pointer_up(&mut self, pt: Point) -> Release<K, A> {
        if !self.visible {
            return Release::Idle;
        }
        let sample = self.sample(pt);
        let (release, out) = self
            .press
            .on_pointer_up(&self.hit, sample.position, &mut self.elements);
        let hovered = self.hover.current();
        self.commit(&out, hovered, sample.seq, TriggerSource::Press);
        release
    }

    /// Route a raw pointer event; returns the activation of a completed click.
    pub fn handle(&mut self, event: PointerEvent) -> Option<Activation<K, A>> {
        match event {
            PointerEvent::Move(pt) => {
                let _ = self.pointer_move(pt);
                None
            }
            PointerEvent::Down(pt) => {
                let _ = self.pointer_down(pt);
                None
            }
            PointerEvent::Up(pt) => self.pointer_up(pt).activation(),
        }
    }

    /// Tear the menu down: clear every hover and armed flag and hide.
    ///
    /// With [`HotboxConfig::execute_on_dismiss`], the element hovered at the
    /// moment of dismissal is returned as an activation first.
    pub fn dismiss(&mut self) -> Option<Activation<K, A>> {
        let activation = if self.visible && self.config.execute_on_dismiss {
            self.hover
                .current()
                .and_then(|id| self.element(id))
                .map(|e| Activation {
                    element: e.id(),
                    action: e.action().clone(),
                })
        } else {
            None
        };
        self.reset_state();
        self.visible = false;
        activation
    }
}
