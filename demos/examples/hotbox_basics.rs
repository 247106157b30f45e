// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A five-button hotbox driven by a scripted pointer stream.
//!
//! Run:
//! - `cargo run -p understory_hotbox_demos --example hotbox_basics`
//! - `RUST_LOG=info cargo run -p understory_hotbox_demos --example hotbox_basics` to silence transitions.

#[path = "common/logging.rs"]
mod logging;

use kurbo::{Point, Rect};
use understory_hotbox::HotboxConfig;
use understory_hotbox::menu::Menu;
use understory_hotbox::types::{Element, ElementGeometry, PointerEvent};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Action {
    Merge,
    Grade,
    Blur,
    Transform,
    Shuffle,
    Reset,
}

fn ring_button(id: u32, x: f64, y: f64, action: Action) -> Element<u32, Action> {
    Element::ring(
        id,
        ElementGeometry::from_rect(Rect::new(x, y, x + 40.0, y + 40.0)),
        action,
    )
}

fn main() {
    logging::init();

    // Settings as a host might store them.
    let config: HotboxConfig =
        serde_json::from_str(r#"{ "diagnostics": true, "execute_on_dismiss": true }"#)
            .expect("valid settings");

    let mut menu: Menu<u32, Action, _, Vec<u32>> = Menu::with_parts(
        config,
        [
            ring_button(1, 80.0, 10.0, Action::Merge),
            ring_button(2, 150.0, 60.0, Action::Grade),
            ring_button(3, 125.0, 140.0, Action::Blur),
            ring_button(4, 35.0, 140.0, Action::Transform),
            ring_button(5, 10.0, 60.0, Action::Shuffle),
            Element::center(
                0,
                ElementGeometry::ellipse(Rect::new(80.0, 80.0, 120.0, 120.0)),
                Action::Reset,
            ),
        ],
        understory_hotbox::hit::TransformLocalizer,
        Vec::new(),
    )
    .expect("unique element ids");

    menu.show();

    let stream = [
        PointerEvent::Move(Point::new(100.0, 30.0)),
        PointerEvent::Move(Point::new(101.0, 31.0)),
        PointerEvent::Move(Point::new(140.0, 120.0)),
        PointerEvent::Down(Point::new(140.0, 155.0)),
        PointerEvent::Up(Point::new(141.0, 156.0)),
        PointerEvent::Down(Point::new(20.0, 70.0)),
        PointerEvent::Up(Point::new(195.0, 195.0)),
        PointerEvent::Move(Point::new(170.0, 80.0)),
    ];

    println!("== Pointer stream ==");
    for ev in stream {
        let fired = menu.handle(ev);
        println!("  {:?} -> hovered {:?}, fired {:?}", ev, menu.hovered(), fired);
    }

    println!("== Dismiss ==");
    let fired = menu.dismiss();
    println!("  fired {:?}", fired);
    assert_eq!(fired.map(|a| a.action), Some(Action::Grade));

    println!("== Repaints ==\n  {:?}", menu.repaint());
    println!(
        "== Diagnostics ==\n  {} transitions, {} corrections",
        menu.diagnostics().transitions(),
        menu.diagnostics().corrections()
    );
}
