// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-sample extraction: the narrow event capability the controller needs.
//!
//! The controller never inspects concrete event types. Anything that can
//! yield a 2D coordinate can drive it, which keeps hosts free to route raw
//! platform events, `ui-events` values, or bare [`Point`]s in tests.

use kurbo::Point;

/// Capability to yield the pointer coordinate carried by an event payload.
///
/// Implementations must tolerate any event shape: an event that carries no
/// position (for example an enter/leave crossing) returns `None`, and the
/// controller ignores it for recognition purposes.
pub trait PointerSample {
    /// Returns the logical pointer position carried by this event, if any.
    fn sample_point(&self) -> Option<Point>;
}

/// Identity extraction for hosts and tests that deal in raw coordinates.
impl PointerSample for Point {
    fn sample_point(&self) -> Option<Point> {
        Some(*self)
    }
}

#[cfg(feature = "ui_events_adapter")]
impl PointerSample for ui_events::pointer::PointerEvent {
    fn sample_point(&self) -> Option<Point> {
        match self {
            Self::Down(e) => Some(e.state.logical_point()),
            Self::Up(e) => Some(e.state.logical_point()),
            Self::Move(update) => Some(update.current.logical_point()),
            Self::Scroll(e) => Some(e.state.logical_point()),
            Self::Gesture(e) => Some(e.state.logical_point()),
            // Crossings and cancellation carry no position worth sampling.
            Self::Cancel(_) | Self::Enter(_) | Self::Leave(_) => None,
        }
    }
}
