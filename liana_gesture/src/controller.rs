// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pan gesture controller: a press-to-release recognition state machine.
//!
//! One controller owns one [`PanRecognizer`], one [`Sampler`] strategy, an
//! optional arbitration [`Claim`], and an [`EventBindings`] registry. Raw
//! pointer events flow in through [`pointer_down`](PanGesture::pointer_down),
//! [`pointer_move`](PanGesture::pointer_move) and
//! [`pointer_up`](PanGesture::pointer_up); confirmed drags flow out through
//! the [`DragHandler`] hooks.
//!
//! ## Session states
//!
//! A session moves through `idle -> pressed -> captured | aborted -> idle`:
//!
//! - **pressed**: a pointer is down, classification is undecided. Moves are
//!   fed (via the sampler) to the recognizer.
//! - **captured**: the drag is confirmed and holds any arbitration claim;
//!   further moves forward straight to [`DragHandler::on_drag_move`].
//! - **aborted**: motion qualified geometrically but the pan was degenerate
//!   or arbitration refused it. The binding is stopped, the session is
//!   cleared, and the controller goes silent until re-armed with
//!   [`listen`](PanGesture::listen).
//!
//! Exactly one session can be live at a time; a second pointer-down while
//! one is live is ignored.

use core::fmt;
use core::marker::PhantomData;

use liana_pan::{Axis, PanRecognizer};

use crate::arbiter::Claim;
use crate::binding::{BindingFlags, BindingId, EventBindings};
use crate::events::PointerSample;
use crate::handler::DragHandler;
use crate::sampler::{EagerSampler, Sampler};

/// Immutable configuration for a [`PanGesture`].
///
/// Fixed for the lifetime of the controller; recognizing along a different
/// axis or threshold means constructing a new controller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanGestureConfig {
    /// The axis drags are recognized along.
    pub axis: Axis,
    /// Minimum displacement along the active axis before a drag is
    /// recognized. Negative values are clamped to `0`.
    pub threshold: f64,
    /// Maximum deviation from the active axis, in degrees, still classified
    /// as a pan rather than an orthogonal scroll. Clamped into `[0, 180]`.
    pub max_angle: f64,
    /// Options for the event binding created by
    /// [`listen`](PanGesture::listen).
    pub binding: BindingFlags,
}

impl Default for PanGestureConfig {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            threshold: 20.0,
            max_angle: 40.0,
            binding: BindingFlags::default(),
        }
    }
}

/// Protocol error surfaced by [`PanGesture`] entry points.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GestureError {
    /// A pointer-up was delivered with no live session. The event source
    /// violated down-before-up ordering; this is an upstream bug, not a
    /// recognition outcome.
    UpWithoutDown,
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpWithoutDown => write!(f, "pointer-up delivered with no live session"),
        }
    }
}

impl core::error::Error for GestureError {}

/// Pointer pan-gesture controller.
///
/// - `T` is the host's surface/target id, held for the controller's
///   lifetime and returned by [`surface`](Self::surface).
/// - `E` is the raw event type; anything implementing [`PointerSample`].
/// - `H` is the [`DragHandler`] expressing the concrete behavior.
/// - `S` is the [`Sampler`] strategy for move events; defaults to
///   [`EagerSampler`].
///
/// See the crate docs for a full walkthrough.
pub struct PanGesture<T, E, H, S = EagerSampler> {
    surface: Option<T>,
    config: PanGestureConfig,
    recognizer: PanRecognizer,
    sampler: S,
    handler: H,
    claim: Option<Claim>,
    bindings: EventBindings,
    binding: Option<BindingId>,
    listening: bool,
    started: bool,
    captured: bool,
    _events: PhantomData<fn(&E)>,
}

impl<T, E, H, S> fmt::Debug for PanGesture<T, E, H, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanGesture")
            .field("config", &self.config)
            .field("listening", &self.listening)
            .field("started", &self.started)
            .field("captured", &self.captured)
            .finish_non_exhaustive()
    }
}

impl<T, E, H> PanGesture<T, E, H, EagerSampler>
where
    E: PointerSample + Clone,
    H: DragHandler<E>,
{
    /// Creates a controller with pass-through move sampling.
    pub fn new(surface: T, config: PanGestureConfig, handler: H) -> Self {
        Self::with_sampler(surface, config, handler, EagerSampler)
    }
}

impl<T, E, H, S> PanGesture<T, E, H, S>
where
    E: PointerSample + Clone,
    H: DragHandler<E>,
    S: Sampler<E>,
{
    /// Creates a controller with an explicit [`Sampler`] strategy.
    ///
    /// Misconfigured threshold/angle values are normalized the way
    /// [`PanRecognizer::new`] normalizes them.
    pub fn with_sampler(surface: T, config: PanGestureConfig, handler: H, sampler: S) -> Self {
        Self {
            surface: Some(surface),
            recognizer: PanRecognizer::new(config.axis, config.threshold, config.max_angle),
            config,
            sampler,
            handler,
            claim: None,
            bindings: EventBindings::new(),
            binding: None,
            listening: false,
            started: false,
            captured: false,
            _events: PhantomData,
        }
    }

    /// Attaches a capture-arbitration claim shared with competing gestures.
    #[must_use]
    pub fn with_claim(mut self, claim: Claim) -> Self {
        self.claim = Some(claim);
        self
    }

    /// Whether the controller is armed and its binding is delivering.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Whether a session is live (pressed or captured).
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Whether the live session has confirmed a drag.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// The surface this controller was constructed for, until
    /// [`destroy`](Self::destroy) clears it.
    #[must_use]
    pub fn surface(&self) -> Option<&T> {
        self.surface.as_ref()
    }

    /// The controller's configuration.
    #[must_use]
    pub fn config(&self) -> &PanGestureConfig {
        &self.config
    }

    /// The behavior hooks, for reading accumulated state back out.
    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the behavior hooks.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// The binding registry, for hosts mirroring delivery state when wiring
    /// a real event source.
    #[must_use]
    pub fn bindings(&self) -> &EventBindings {
        &self.bindings
    }

    /// Arms the controller: registers a fresh event binding.
    ///
    /// No-op while already listening. A binding left over from an aborted
    /// session is discarded first.
    pub fn listen(&mut self) {
        if self.listening {
            return;
        }
        if let Some(stale) = self.binding.take() {
            self.bindings.unbind(stale);
        }
        self.binding = Some(self.bindings.bind(self.config.binding));
        self.listening = true;
    }

    /// Disarms the controller: releases the claim, unbinds everything, and
    /// clears any half-open session so the next [`listen`](Self::listen)
    /// starts fresh.
    ///
    /// No-op while not listening.
    pub fn unlisten(&mut self) {
        if !self.listening {
            return;
        }
        if let Some(claim) = &self.claim {
            claim.release();
        }
        self.bindings.unbind_all();
        self.binding = None;
        self.listening = false;
        self.reset_session();
    }

    /// Terminal teardown: destroys the claim, unlistens, and clears the
    /// surface reference. Safe to call more than once.
    pub fn destroy(&mut self) {
        if let Some(claim) = self.claim.take() {
            claim.destroy();
        }
        self.unlisten();
        self.surface = None;
    }

    /// Handles a raw pointer-down.
    ///
    /// Returns `true` iff a session was opened. Ignored (returning `false`)
    /// while a session is already live, while the binding is not
    /// delivering, when [`DragHandler::can_start`] rejects the press, when
    /// arbitration refuses a session, or when the event carries no
    /// coordinate.
    pub fn pointer_down(&mut self, event: &E) -> bool {
        if !self.delivering() || self.started {
            return false;
        }
        if !self.handler.can_start(event) {
            return false;
        }
        if let Some(claim) = &self.claim {
            // Release fallback: a registration left behind by an aborted
            // session must not block this press.
            claim.release();
            if !claim.start() {
                return false;
            }
        }
        let Some(origin) = event.sample_point() else {
            return false;
        };
        self.recognizer.start(origin);
        self.started = true;
        self.captured = false;
        true
    }

    /// Handles a raw pointer-move.
    ///
    /// Ignored unless a session is live and the binding is delivering. The
    /// event is routed through the sampler: with a coalescing strategy it
    /// waits for the next [`tick`](Self::tick) and may be superseded by a
    /// later move.
    pub fn pointer_move(&mut self, event: &E) {
        if !self.delivering() || !self.started {
            return;
        }
        if let Some(due) = self.sampler.schedule(event.clone()) {
            self.classify(&due);
        }
    }

    /// Runs one scheduling tick, classifying the latest coalesced move.
    ///
    /// Hosts using [`TickSampler`](crate::sampler::TickSampler) call this
    /// once per scheduling opportunity. With a pass-through sampler it is a
    /// no-op. A pending move whose session has meanwhile ended is dropped.
    pub fn tick(&mut self) {
        let Some(due) = self.sampler.drain() else {
            return;
        };
        if !self.delivering() || !self.started {
            return;
        }
        self.classify(&due);
    }

    /// Handles a raw pointer-up, resolving the session.
    ///
    /// Fires [`DragHandler::on_drag_end`] for a captured drag and
    /// [`DragHandler::not_captured`] otherwise, then returns to idle. The
    /// arbitration claim is released unconditionally.
    ///
    /// An up with no live session is an upstream event-ordering bug and
    /// surfaces as [`GestureError::UpWithoutDown`]; an up arriving after
    /// the binding was stopped is silently ignored, matching the stopped
    /// delivery.
    pub fn pointer_up(&mut self, event: &E) -> Result<(), GestureError> {
        if !self.delivering() {
            return Ok(());
        }
        if !self.started {
            return Err(GestureError::UpWithoutDown);
        }
        if let Some(claim) = &self.claim {
            claim.release();
        }
        let captured = self.captured;
        self.reset_session();
        if captured {
            self.handler.on_drag_end(event);
        } else {
            self.handler.not_captured(event);
        }
        Ok(())
    }

    fn delivering(&self) -> bool {
        self.listening
            && self
                .binding
                .is_some_and(|id| self.bindings.is_delivering(id))
    }

    fn reset_session(&mut self) {
        self.started = false;
        self.captured = false;
        self.sampler.cancel();
    }

    fn classify(&mut self, event: &E) {
        if self.captured {
            self.handler.on_drag_move(event);
            return;
        }
        let Some(point) = event.sample_point() else {
            return;
        };
        if !self.recognizer.detect(point) {
            // Undecided: stay pressed and keep sampling.
            return;
        }
        // A zero pan means the threshold was degenerate (configured as 0)
        // and there is no net motion to drag with. The claim is only
        // consulted once real motion exists.
        if self.recognizer.pan() != 0.0 && self.claim.as_ref().is_none_or(Claim::capture) {
            self.captured = true;
            self.handler.on_drag_start(event);
        } else {
            self.abort(event);
        }
    }

    fn abort(&mut self, event: &E) {
        if let Some(id) = self.binding {
            self.bindings.stop(id);
        }
        if let Some(claim) = &self.claim {
            claim.release();
        }
        // The binding went silent, so the observable flag follows it; the
        // caller re-arms with `listen`.
        self.listening = false;
        self.reset_session();
        self.handler.not_captured(event);
    }
}
