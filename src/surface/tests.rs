use crossterm::event::{KeyModifiers, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use crate::events::{EventBus, FrameworkEvent};
use crate::runtime::{AppMessage, Dispatcher};

use super::*;

fn scroll_event(kind: MouseEventKind, column: u16, row: u16) -> FrameworkEvent {
    FrameworkEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn register_is_idempotent_and_keeps_state() {
    let first = Surfaces::register("surface-idempotent");
    first.set_overflow("auto");
    first.record_measurements(
        Hitbox {
            x: 0,
            y: 0,
            width: 10,
            height: 4,
        },
        4,
        20,
    );
    assert!(first.scroll_by(3));

    let second = Surfaces::register("surface-idempotent");
    assert_eq!(second.overflow().as_deref(), Some("auto"));
    assert_eq!(second.scroll_top(), 3);

    Surfaces::remove(first.id());
}

#[test]
fn overflow_defaults_to_visible_when_unset() {
    let surface = Surfaces::register("surface-overflow-default");
    assert_eq!(surface.overflow(), None);
    assert_eq!(surface.overflow_or_default(), "visible");
    assert!(surface.scroll_enabled());

    surface.set_overflow("hidden");
    assert!(!surface.scroll_enabled());
    assert_eq!(surface.clear_overflow().as_deref(), Some("hidden"));
    assert_eq!(surface.overflow_or_default(), "visible");

    Surfaces::remove(surface.id());
}

#[test]
fn scroll_clamps_to_measured_content() {
    let surface = Surfaces::register("surface-scroll-clamp");
    surface.record_measurements(
        Hitbox {
            x: 0,
            y: 0,
            width: 20,
            height: 5,
        },
        5,
        12,
    );

    // cannot scroll above the top
    assert!(!surface.scroll_by(-1));
    // bottom is content minus viewport
    assert!(surface.scroll_by(100));
    assert_eq!(surface.scroll_top(), 7);
    assert!(!surface.scroll_by(1));

    surface.set_overflow("hidden");
    assert!(!surface.scroll_by(-3));
    assert_eq!(surface.scroll_top(), 7);

    Surfaces::remove(surface.id());
}

#[test]
fn remeasurement_clamps_existing_offset() {
    let surface = Surfaces::register("surface-remeasure");
    surface.record_measurements(Hitbox::default(), 5, 30);
    assert!(surface.scroll_by(20));
    assert_eq!(surface.scroll_top(), 20);

    // content shrank under the current offset
    surface.record_measurements(Hitbox::default(), 5, 10);
    assert_eq!(surface.scroll_top(), 5);

    Surfaces::remove(surface.id());
}

#[test]
fn wheel_events_route_to_the_surface_under_the_cursor() {
    let (tx, mut rx) = mpsc::channel(8);
    let dispatcher = Dispatcher::new(tx, EventBus::new(4));

    let surface = Surfaces::register("surface-wheel-target");
    surface.record_measurements(
        Hitbox {
            x: 40,
            y: 10,
            width: 20,
            height: 6,
        },
        6,
        50,
    );

    Surfaces::handle_event(&scroll_event(MouseEventKind::ScrollDown, 45, 12), &dispatcher);
    assert_eq!(surface.scroll_top(), 1);
    assert!(matches!(
        rx.try_recv().expect("render requested"),
        AppMessage::RequestRender
    ));

    // outside the hitbox nothing reaches this surface
    Surfaces::handle_event(&scroll_event(MouseEventKind::ScrollDown, 200, 200), &dispatcher);
    assert_eq!(surface.scroll_top(), 1);

    // a locked surface swallows the wheel without requesting a render
    surface.set_overflow("hidden");
    while rx.try_recv().is_ok() {}
    Surfaces::handle_event(&scroll_event(MouseEventKind::ScrollDown, 45, 12), &dispatcher);
    assert_eq!(surface.scroll_top(), 1);
    assert!(rx.try_recv().is_err());

    Surfaces::remove(surface.id());
}

#[test]
fn removed_surfaces_answer_with_defaults() {
    let surface = Surfaces::register("surface-removed");
    surface.set_overflow("scroll");
    Surfaces::remove(surface.id());

    assert!(!surface.exists());
    assert_eq!(surface.overflow(), None);
    assert_eq!(surface.overflow_or_default(), "visible");
    assert!(!surface.scroll_by(1));
    assert!(Surfaces::resolve("surface-removed").is_none());
}
