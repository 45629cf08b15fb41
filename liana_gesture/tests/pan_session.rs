// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `liana_gesture` crate.
//!
//! These drive full press-to-release sessions through the public API, with
//! a focus on how the controller, arbitration, and sampling interact when
//! two recognizers contend for the same surface.

use kurbo::Point;
use liana_gesture::{
    Axis, DragHandler, GestureArbiter, PanGesture, PanGestureConfig, TickSampler,
};

/// Counts hook invocations; the payloads are covered by unit tests.
#[derive(Default)]
struct Counts {
    starts: u32,
    moves: u32,
    ends: u32,
    not_captured: u32,
}

impl DragHandler<Point> for Counts {
    fn on_drag_start(&mut self, _: &Point) {
        self.starts += 1;
    }
    fn on_drag_move(&mut self, _: &Point) {
        self.moves += 1;
    }
    fn on_drag_end(&mut self, _: &Point) {
        self.ends += 1;
    }
    fn not_captured(&mut self, _: &Point) {
        self.not_captured += 1;
    }
}

#[test]
fn horizontal_drag_end_to_end() {
    let mut gesture = PanGesture::new("pane", PanGestureConfig::default(), Counts::default());
    gesture.listen();

    assert!(gesture.pointer_down(&Point::new(0.0, 0.0)));
    gesture.pointer_move(&Point::new(5.0, 0.0));
    gesture.pointer_move(&Point::new(25.0, 0.0));
    gesture.pointer_move(&Point::new(40.0, 0.0));
    gesture.pointer_up(&Point::new(40.0, 0.0)).unwrap();

    let counts = gesture.handler();
    assert_eq!(counts.starts, 1);
    assert_eq!(counts.moves, 1);
    assert_eq!(counts.ends, 1);
    assert_eq!(counts.not_captured, 0);

    // The controller is idle and reusable.
    assert!(gesture.pointer_down(&Point::new(100.0, 0.0)));
    gesture.pointer_up(&Point::new(100.0, 0.0)).unwrap();
    assert_eq!(gesture.handler().not_captured, 1);
}

#[test]
fn vertical_controller_ignores_horizontal_motion() {
    let config = PanGestureConfig {
        axis: Axis::Y,
        ..PanGestureConfig::default()
    };
    let mut gesture = PanGesture::new("pane", config, Counts::default());
    gesture.listen();

    assert!(gesture.pointer_down(&Point::new(0.0, 0.0)));
    gesture.pointer_move(&Point::new(60.0, 3.0));
    assert!(!gesture.is_captured());

    gesture.pointer_move(&Point::new(60.0, 40.0));
    assert!(!gesture.is_captured(), "cross motion dominates the angle");

    gesture.pointer_up(&Point::new(60.0, 40.0)).unwrap();
    assert_eq!(gesture.handler().not_captured, 1);
}

#[test]
fn two_recognizers_contend_for_one_surface() {
    let arbiter = GestureArbiter::new();

    // The back-swipe outranks the pan.
    let mut swipe = PanGesture::new("surface", PanGestureConfig::default(), Counts::default())
        .with_claim(arbiter.claim(10));
    let mut pan = PanGesture::new("surface", PanGestureConfig::default(), Counts::default())
        .with_claim(arbiter.claim(1));
    swipe.listen();
    pan.listen();

    // Both see the press; both open sessions.
    assert!(swipe.pointer_down(&Point::new(0.0, 0.0)));
    assert!(pan.pointer_down(&Point::new(0.0, 0.0)));

    // The pan's qualifying move arrives first, but the started
    // higher-priority swipe wins the arbitration: the pan aborts.
    pan.pointer_move(&Point::new(25.0, 0.0));
    assert!(!pan.is_captured());
    assert_eq!(pan.handler().not_captured, 1);

    // The swipe's own qualifying move captures.
    swipe.pointer_move(&Point::new(25.0, 0.0));
    assert!(swipe.is_captured());
    swipe.pointer_up(&Point::new(25.0, 0.0)).unwrap();
    assert_eq!(swipe.handler().starts, 1);
    assert_eq!(swipe.handler().ends, 1);

    // With the surface free and the pan re-armed, it captures cleanly.
    pan.listen();
    assert!(pan.pointer_down(&Point::new(0.0, 0.0)));
    pan.pointer_move(&Point::new(25.0, 0.0));
    assert!(pan.is_captured());
    pan.pointer_up(&Point::new(25.0, 0.0)).unwrap();
    assert_eq!(pan.handler().starts, 1);
}

#[test]
fn coalesced_moves_classify_once_per_tick() {
    let mut gesture = PanGesture::with_sampler(
        "pane",
        PanGestureConfig::default(),
        Counts::default(),
        TickSampler::new(),
    );
    gesture.listen();

    assert!(gesture.pointer_down(&Point::new(0.0, 0.0)));

    // A 60Hz-ish burst between ticks: one classification, latest wins.
    for x in 0..10 {
        gesture.pointer_move(&Point::new(f64::from(x) * 5.0, 0.0));
    }
    assert!(!gesture.is_captured());
    gesture.tick();
    assert!(gesture.is_captured());
    assert_eq!(gesture.handler().starts, 1);

    // Captured moves are still coalesced per tick.
    gesture.pointer_move(&Point::new(50.0, 0.0));
    gesture.pointer_move(&Point::new(55.0, 0.0));
    gesture.tick();
    assert_eq!(gesture.handler().moves, 1);

    gesture.pointer_up(&Point::new(55.0, 0.0)).unwrap();
    assert_eq!(gesture.handler().ends, 1);
}

#[test]
fn inert_handler_supports_polling_hosts() {
    let mut gesture = PanGesture::new((), PanGestureConfig::default(), ());
    gesture.listen();

    assert!(gesture.pointer_down(&Point::new(0.0, 0.0)));
    gesture.pointer_move(&Point::new(30.0, 0.0));
    assert!(gesture.is_captured());
    gesture.pointer_up(&Point::new(30.0, 0.0)).unwrap();
    assert!(!gesture.is_started());
}
