// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element enter/leave notifications racing the centralized move path.
//!
//! The toolkit here drops one move and delivers enter/leave late. The menu
//! corrects from the fallback path once and otherwise ignores it.
//!
//! Run:
//! - `cargo run -p understory_hotbox_demos --example hotbox_fallback`

#[path = "common/logging.rs"]
mod logging;

use kurbo::{Point, Rect};
use understory_hotbox::HotboxConfig;
use understory_hotbox::menu::Menu;
use understory_hotbox::types::{Element, ElementGeometry};

fn main() {
    logging::init();

    let config = HotboxConfig {
        diagnostics: true,
        ..HotboxConfig::default()
    };
    let elements = (0..3_u32).map(|i| {
        let x = f64::from(i) * 50.0;
        Element::ring(i, ElementGeometry::from_rect(Rect::new(x, 0.0, x + 40.0, 40.0)), ())
    });
    let mut menu: Menu<u32, ()> = Menu::new(config, elements).expect("unique element ids");
    menu.show();

    // Move path resolves element 0; its late enter is redundant.
    let _ = menu.pointer_move(Point::new(10.0, 10.0));
    let redundant = menu.element_enter(0);
    println!("== Redundant enter ==\n  {:?}", redundant);

    // The move into element 1 is lost; only its enter arrives.
    let corrected = menu.element_enter(1);
    println!("== Correcting enter ==\n  {:?}", corrected);

    // The stale leave for element 0 arrives afterwards.
    let stale = menu.element_leave(0);
    println!("== Stale leave ==\n  {:?}", stale);

    // Move path catches up.
    let caught_up = menu.pointer_move(Point::new(60.0, 10.0));
    println!("== Move catches up ==\n  {:?}", caught_up);

    let hovered: Vec<u32> = menu
        .elements()
        .iter()
        .filter(|e| e.is_hovered())
        .map(|e| e.id())
        .collect();
    assert_eq!(hovered, vec![1]);
    assert!(redundant.is_empty() && stale.is_empty() && caught_up.is_empty());
    assert_eq!(menu.diagnostics().corrections(), 1);

    for record in menu.diagnostics().history() {
        println!("  {:?}", record);
    }
}
