// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Hotbox: deterministic hover and press reconciliation for radial menus.
//!
//! ## Overview
//!
//! A hotbox is a ring of buttons (plus a center control) shown over a canvas
//! item while a trigger key is held.
//! This crate keeps its pointer state honest: after every event exactly one
//! element (or none) is hovered, and a click dispatches to the element that
//! was both pressed and released on, even when the toolkit's per-widget
//! enter/leave notifications are late, duplicated, or missing.
//!
//! It does not lay out, paint, or detect the trigger key.
//! Feed it element geometry from your layout, raw pointer events in menu
//! coordinates, and read back per-element [`ElementState`](crate::types::ElementState)
//! flags for painting.
//!
//! ## Pieces
//!
//! - [`hit`]: first-match hit testing in declaration (z) order, through an injectable
//!   [`Localizer`](crate::hit::Localizer) for menu→element coordinate mapping.
//! - [`hover`]: the single authoritative hovered element. On any change, every
//!   hovered flag is cleared before the new one is set.
//! - Per-element enter/leave handlers ([`Menu::element_enter`], [`Menu::element_leave`])
//!   that defer to [`hover`] and only act when it missed an update.
//! - [`press`]: re-hit-tests at pointer-down and pointer-up; dispatch requires
//!   both to resolve to the same element.
//! - [`menu`]: owns the elements and composes the above, plus show/dismiss.
//! - [`diagnostics`]: optional per-transition records and `tracing` events.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_hotbox::menu::Menu;
//! use understory_hotbox::press::Release;
//! use understory_hotbox::types::{Element, ElementGeometry, PointerEvent};
//! use understory_hotbox::HotboxConfig;
//!
//! let mut menu: Menu<u32, &str> = Menu::new(
//!     HotboxConfig::default(),
//!     [
//!         Element::ring(1, ElementGeometry::from_rect(Rect::new(80.0, 10.0, 120.0, 50.0)), "merge"),
//!         Element::ring(2, ElementGeometry::from_rect(Rect::new(150.0, 60.0, 190.0, 100.0)), "grade"),
//!         Element::center(0, ElementGeometry::ellipse(Rect::new(80.0, 80.0, 120.0, 120.0)), "reset"),
//!     ],
//! )
//! .unwrap();
//!
//! // Trigger key pressed.
//! menu.show();
//!
//! menu.handle(PointerEvent::Move(Point::new(100.0, 30.0)));
//! assert_eq!(menu.hovered(), Some(1));
//!
//! // A click with no preceding move still lands on the right element.
//! menu.handle(PointerEvent::Down(Point::new(170.0, 80.0)));
//! let clicked = menu.handle(PointerEvent::Up(Point::new(175.0, 85.0)));
//! assert_eq!(clicked.map(|a| a.action), Some("grade"));
//!
//! // Releasing elsewhere cancels.
//! menu.pointer_down(Point::new(100.0, 100.0));
//! assert!(matches!(menu.pointer_up(Point::new(5.0, 5.0)), Release::Cancelled { .. }));
//!
//! // Trigger key released: everything is cleared.
//! menu.dismiss();
//! assert!(menu.elements().iter().all(|e| !e.is_hovered() && !e.is_armed()));
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select Kurbo's float backend.
//! - `serde`: serialize [`HotboxConfig`] and element geometry.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod diagnostics;
pub mod error;
mod fallback;
pub mod hit;
pub mod hover;
pub mod menu;
pub mod press;
pub mod types;

pub use config::HotboxConfig;
pub use error::MenuError;
pub use menu::Menu;
