// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hook contract concrete drag behaviors implement.
//!
//! Every method has a no-op default, so a behavior overrides only what it
//! needs. Each hook receives the raw event that triggered it; the handler
//! decides what, if anything, to read out of it.

/// Lifecycle hooks for a drag-based gesture.
///
/// This is the extension point for behaviors built on
/// [`PanGesture`](crate::PanGesture): sliding items, sheet drags, and
/// swipe-to-dismiss are all expressed as implementations of this trait.
pub trait DragHandler<E> {
    /// Gate consulted at pointer-down before a session is opened.
    ///
    /// Returning `false` leaves the controller idle; no session state is
    /// touched and no other hook fires for this press.
    fn can_start(&mut self, event: &E) -> bool {
        let _ = event;
        true
    }

    /// The drag was confirmed; `event` is the qualifying move.
    fn on_drag_start(&mut self, event: &E) {
        let _ = event;
    }

    /// A move arrived while the drag holds the capture.
    fn on_drag_move(&mut self, event: &E) {
        let _ = event;
    }

    /// The pointer was released while the drag held the capture.
    fn on_drag_end(&mut self, event: &E) {
        let _ = event;
    }

    /// The session ended without this gesture capturing: motion never
    /// qualified, the pan was degenerate, or arbitration refused it.
    fn not_captured(&mut self, event: &E) {
        let _ = event;
    }
}

/// The inert handler: accepts every session and observes nothing.
///
/// Useful for hosts that only poll controller state.
impl<E> DragHandler<E> for () {}
