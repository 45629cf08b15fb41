// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=liana_gesture --heading-base-level=0

//! Liana Gesture: a pan-gesture controller for raw pointer streams.
//!
//! This crate turns a stream of pointer-down/move/up events into a clean
//! start/move/end drag lifecycle, deciding under ambiguity (a few pixels of
//! motion) whether an interaction is a directional drag or an incidental
//! tap/scroll. It is headless: hosts route platform events in and express
//! behavior through hooks; nothing here binds to a windowing system.
//!
//! The pieces, leaf-first:
//!
//! - [`liana_pan::PanRecognizer`]: the pure directional-motion classifier.
//! - [`sampler`]: strategies deciding when a move is classified:
//!   pass-through, or coalesced to at most one classification per
//!   scheduling tick as backpressure against high-frequency streams.
//! - [`arbiter`]: capture arbitration between competing recognizers on one
//!   surface (a pan inside a scroll view, a swipe under both).
//! - [`binding`]: the event-binding registry with stoppable delivery.
//! - [`handler`]: the [`DragHandler`] hook contract behaviors implement.
//! - [`controller`]: [`PanGesture`], the state machine owning all of the
//!   above.
//!
//! ## Quick start
//!
//! ```
//! use kurbo::Point;
//! use liana_gesture::{DragHandler, PanGesture, PanGestureConfig};
//!
//! #[derive(Default)]
//! struct Slider {
//!     offset: f64,
//!     dragging: bool,
//! }
//!
//! impl DragHandler<Point> for Slider {
//!     fn on_drag_start(&mut self, _: &Point) {
//!         self.dragging = true;
//!     }
//!     fn on_drag_move(&mut self, event: &Point) {
//!         self.offset = event.x;
//!     }
//!     fn on_drag_end(&mut self, _: &Point) {
//!         self.dragging = false;
//!     }
//! }
//!
//! // Recognize horizontal drags of at least 20px within 40 degrees.
//! let mut gesture = PanGesture::new("slider", PanGestureConfig::default(), Slider::default());
//! gesture.listen();
//!
//! assert!(gesture.pointer_down(&Point::new(0.0, 0.0)));
//! gesture.pointer_move(&Point::new(5.0, 0.0)); // undecided
//! gesture.pointer_move(&Point::new(25.0, 0.0)); // drag confirmed
//! gesture.pointer_move(&Point::new(40.0, 2.0)); // forwarded to the handler
//! gesture.pointer_up(&Point::new(40.0, 2.0)).unwrap();
//!
//! assert_eq!(gesture.handler().offset, 40.0);
//! assert!(!gesture.handler().dragging);
//! ```
//!
//! ## Competing recognizers
//!
//! Attach a [`Claim`] from a shared [`GestureArbiter`] and the controller
//! consults it before committing: it registers intent at pointer-down and
//! requests exclusivity at the qualifying move. A refusal aborts the
//! session (the binding goes silent and the `not_captured` hook fires), so
//! a parent scroll view keeps the interaction instead.
//!
//! ## Event types
//!
//! The controller is generic over the raw event via [`PointerSample`]; a
//! bare [`kurbo::Point`] works for tests, and the `ui_events_adapter`
//! feature (on by default) covers `ui_events::pointer::PointerEvent`.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

pub mod arbiter;
pub mod binding;
pub mod controller;
pub mod events;
pub mod handler;
pub mod sampler;

pub use arbiter::{Claim, GestureArbiter};
pub use binding::{BindingFlags, BindingId, EventBindings};
pub use controller::{GestureError, PanGesture, PanGestureConfig};
pub use events::PointerSample;
pub use handler::DragHandler;
pub use liana_pan::{Axis, PanRecognizer};
pub use sampler::{EagerSampler, Sampler, TickSampler};
