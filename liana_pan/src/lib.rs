// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=liana_pan --heading-base-level=0

//! Liana Pan: directional pan-motion recognition for pointer gestures.
//!
//! This crate provides [`PanRecognizer`], a pure classifier that decides
//! whether cumulative pointer motion since a session origin qualifies as a
//! directional pan along one axis. It holds no timers, no event bindings,
//! and no callbacks; a controller (for example `liana_gesture`) feeds it
//! coordinates and acts on the verdict.
//!
//! ## Usage
//!
//! 1) At pointer-down, call [`PanRecognizer::start`] with the origin coordinate.
//! 2) On each sampled move, call [`PanRecognizer::detect`] with the current
//!    coordinate. A `true` return means the motion has crossed the threshold
//!    along the active axis while staying within the angle bound.
//! 3) After a positive `detect`, read [`PanRecognizer::pan`] for the signed
//!    displacement along the active axis.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use liana_pan::{Axis, PanRecognizer};
//!
//! let mut recognizer = PanRecognizer::new(Axis::X, 20.0, 40.0);
//! recognizer.start(Point::new(0.0, 0.0));
//!
//! // 5px of horizontal motion: below the 20px threshold.
//! assert!(!recognizer.detect(Point::new(5.0, 0.0)));
//!
//! // 25px along X, 4px across: over the threshold, well inside 40 degrees.
//! assert!(recognizer.detect(Point::new(25.0, 4.0)));
//! assert_eq!(recognizer.pan(), 25.0);
//! ```
//!
//! ## Classification rule
//!
//! For a coordinate at offset `(dx, dy)` from the origin, the delta along
//! the configured [`Axis`] is the *active* delta and the other component is
//! the *cross* delta. [`detect`](PanRecognizer::detect) returns `true` once
//! `|active| >= threshold` **and** `atan2(|cross|, |active|)`, in degrees,
//! is `<= max_angle`. Both comparisons are inclusive. A motion vector that
//! crosses the threshold at too steep an angle is not a pan on this axis
//! (it is typically an orthogonal scroll) and stays unrecognized.
//!
//! [`pan`](PanRecognizer::pan) reports the signed active-axis delta seen by
//! the most recent `detect` call, whatever that call returned. Callers use
//! it to distinguish genuine motion from a degenerate zero-displacement
//! verdict when the threshold is configured as `0`.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Point;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `atan2`

/// The axis a pan is recognized along.
///
/// Motion along the other axis counts against the angle bound rather than
/// toward the threshold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Recognize horizontal pans; vertical motion is cross-axis.
    #[default]
    X,
    /// Recognize vertical pans; horizontal motion is cross-axis.
    Y,
}

/// Stateless-between-sessions directional motion classifier.
///
/// Configuration is fixed at construction; per-session state is reset by
/// [`start`](Self::start). See the crate docs for the classification rule.
#[derive(Clone, Debug)]
pub struct PanRecognizer {
    axis: Axis,
    threshold: f64,
    max_angle: f64,
    origin: Option<Point>,
    active_delta: f64,
}

impl PanRecognizer {
    /// Creates a recognizer for pans along `axis`.
    ///
    /// - `threshold` is the minimum displacement along the active axis, in
    ///   the caller's coordinate units. Negative values are clamped to `0`.
    /// - `max_angle` is the maximum deviation from the active axis, in
    ///   degrees. Values are clamped into `[0, 180]`.
    #[must_use]
    pub fn new(axis: Axis, threshold: f64, max_angle: f64) -> Self {
        Self {
            axis,
            threshold: threshold.max(0.0),
            max_angle: max_angle.clamp(0.0, 180.0),
            origin: None,
            active_delta: 0.0,
        }
    }

    /// Returns the active axis.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns the displacement threshold along the active axis.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the angle bound, in degrees.
    #[must_use]
    pub fn max_angle(&self) -> f64 {
        self.max_angle
    }

    /// Begins a new recognition session at `origin`.
    ///
    /// Any delta left over from a previous session is cleared.
    pub fn start(&mut self, origin: Point) {
        self.origin = Some(origin);
        self.active_delta = 0.0;
    }

    /// Classifies the motion from the session origin to `point`.
    ///
    /// Returns `true` once the displacement along the active axis has
    /// reached the threshold and the motion vector lies within the angle
    /// bound. Returns `false` otherwise, including for every call before
    /// [`start`](Self::start).
    ///
    /// The signed active-axis delta is recorded on every call and readable
    /// via [`pan`](Self::pan) afterwards.
    pub fn detect(&mut self, point: Point) -> bool {
        let Some(origin) = self.origin else {
            return false;
        };
        let delta = point - origin;
        let (active, cross) = match self.axis {
            Axis::X => (delta.x, delta.y),
            Axis::Y => (delta.y, delta.x),
        };
        self.active_delta = active;
        if active.abs() < self.threshold {
            return false;
        }
        let angle = cross.abs().atan2(active.abs()).to_degrees();
        angle <= self.max_angle
    }

    /// Returns the signed active-axis delta at the most recent
    /// [`detect`](Self::detect) call.
    ///
    /// Zero both before the first `detect` of a session and when the most
    /// recent coordinate sat exactly on the session origin's active-axis
    /// position.
    #[must_use]
    pub fn pan(&self) -> f64 {
        self.active_delta
    }
}
