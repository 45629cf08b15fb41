// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capture arbitration shared by competing gesture recognizers.
//!
//! Several recognizers can watch the same surface: a horizontal pan inside a
//! vertical scroll view, a swipe-to-go-back under both. A [`GestureArbiter`]
//! is the shared referee; each recognizer holds a [`Claim`] and consults it
//! before committing to a gesture. At most one claim holds the capture at a
//! time, and a claim whose session is outranked by a started higher-priority
//! claim is refused.
//!
//! No recognizer owns the arbiter. Claims release defensively before
//! starting a session and always release when their session ends, so the
//! registry never sticks in an acquired state past one press-release cycle.
//!
//! ## Minimal example
//!
//! ```
//! use liana_gesture::arbiter::GestureArbiter;
//!
//! let arbiter = GestureArbiter::new();
//! let pan = arbiter.claim(1);
//! let swipe = arbiter.claim(2);
//!
//! assert!(pan.start());
//! assert!(swipe.start());
//!
//! // The higher-priority swipe wins the capture; the pan is refused.
//! assert!(!pan.capture());
//! assert!(swipe.capture());
//! assert!(swipe.is_captor());
//!
//! // Once released, the surface is free again.
//! swipe.release();
//! assert!(!arbiter.is_captured());
//! ```

use alloc::rc::Rc;
use core::cell::RefCell;
use hashbrown::HashMap;

/// Identifier for a claim registered with a [`GestureArbiter`].
///
/// Ids are allocated sequentially and never reused for the lifetime of the
/// registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClaimId(u32);

#[derive(Debug, Default)]
struct ArbiterState {
    next_id: u32,
    /// Priority of every claim with a started (not yet resolved) session.
    started: HashMap<ClaimId, u32>,
    captured: Option<ClaimId>,
}

/// Shared arbitration registry for one input surface.
///
/// Cloning the arbiter clones a handle to the same registry; hand one clone
/// to each party that creates claims.
#[derive(Clone, Debug, Default)]
pub struct GestureArbiter {
    state: Rc<RefCell<ArbiterState>>,
}

impl GestureArbiter {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new claim with the given priority.
    ///
    /// Higher priorities outrank lower ones when the capture is contested;
    /// ties resolve in favor of the claim requesting the capture.
    #[must_use]
    pub fn claim(&self, priority: u32) -> Claim {
        let mut state = self.state.borrow_mut();
        let id = ClaimId(state.next_id);
        state.next_id += 1;
        Claim {
            id,
            priority,
            state: Rc::clone(&self.state),
        }
    }

    /// Whether any claim currently holds the capture.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.state.borrow().captured.is_some()
    }
}

/// One recognizer's delegate into a [`GestureArbiter`].
#[derive(Debug)]
pub struct Claim {
    id: ClaimId,
    priority: u32,
    state: Rc<RefCell<ArbiterState>>,
}

impl Claim {
    /// Returns this claim's id.
    #[must_use]
    pub fn id(&self) -> ClaimId {
        self.id
    }

    /// Returns this claim's priority.
    #[must_use]
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Registers intent to run a session.
    ///
    /// Refused while a different claim holds the capture. Calling `start`
    /// again before [`release`](Self::release) is permitted and keeps the
    /// existing registration.
    pub fn start(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if matches!(state.captured, Some(held) if held != self.id) {
            return false;
        }
        state.started.insert(self.id, self.priority);
        true
    }

    /// Requests exclusivity over the current interaction.
    ///
    /// Succeeds iff no other claim holds the capture and no other started
    /// claim outranks this one. On success the claim's own session
    /// registration is consumed by the capture.
    pub fn capture(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if matches!(state.captured, Some(held) if held != self.id) {
            return false;
        }
        let outranked = state
            .started
            .iter()
            .any(|(id, priority)| *id != self.id && *priority > self.priority);
        if outranked {
            return false;
        }
        state.captured = Some(self.id);
        state.started.remove(&self.id);
        true
    }

    /// Relinquishes this claim's session registration and capture, if held.
    ///
    /// Idempotent; releasing a claim that holds nothing is a no-op.
    pub fn release(&self) {
        let mut state = self.state.borrow_mut();
        state.started.remove(&self.id);
        if state.captured == Some(self.id) {
            state.captured = None;
        }
    }

    /// Final teardown: releases everything this claim holds.
    ///
    /// The id is retired; the registry itself lives on for its other claims.
    pub fn destroy(&self) {
        self.release();
    }

    /// Whether this claim currently holds the capture.
    #[must_use]
    pub fn is_captor(&self) -> bool {
        self.state.borrow().captured == Some(self.id)
    }
}
