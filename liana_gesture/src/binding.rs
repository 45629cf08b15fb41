// Copyright 2025 the Liana Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event-binding registry: surface subscriptions with stoppable delivery.
//!
//! This is the headless stand-in for a platform event-subscription layer.
//! The controller registers a binding per [`listen`](crate::PanGesture::listen)
//! and consults [`EventBindings::is_delivering`] before acting on any raw
//! event; hosts wiring a real event source can mirror that gate when
//! deciding whether to forward events at all.
//!
//! A binding can be *stopped* without being removed: delivery halts for the
//! rest of the interaction, but the registration survives until
//! [`unbind`](EventBindings::unbind) or [`unbind_all`](EventBindings::unbind_all).
//! The pan controller uses this mid-gesture when it abandons an undecided
//! session and must go silent until it is re-armed.

use smallvec::SmallVec;

bitflags::bitflags! {
    /// Options for a pointer-event binding.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct BindingFlags: u8 {
        /// Restrict recognition to the surface's designated interaction zone.
        const ZONE = 0b0000_0001;
        /// Subscribe during the capture phase rather than the bubble phase.
        const CAPTURE_PHASE = 0b0000_0010;
    }
}

impl Default for BindingFlags {
    fn default() -> Self {
        Self::ZONE
    }
}

/// Handle to a binding registered with [`EventBindings`].
///
/// Ids are allocated sequentially and never reused, so a stale handle can
/// never alias a newer binding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BindingId(u32);

#[derive(Clone, Debug)]
struct Slot {
    id: BindingId,
    flags: BindingFlags,
    delivering: bool,
}

/// Registry of pointer-event bindings for one surface.
#[derive(Clone, Debug, Default)]
pub struct EventBindings {
    next_id: u32,
    slots: SmallVec<[Slot; 2]>,
}

impl EventBindings {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a binding and starts delivering to it.
    pub fn bind(&mut self, flags: BindingFlags) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot {
            id,
            flags,
            delivering: true,
        });
        id
    }

    /// Halts delivery for `id` without removing the binding.
    ///
    /// No-op for unknown or already-removed ids.
    pub fn stop(&mut self, id: BindingId) {
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.id == id) {
            slot.delivering = false;
        }
    }

    /// Whether `id` is bound and currently delivering.
    #[must_use]
    pub fn is_delivering(&self, id: BindingId) -> bool {
        self.slots
            .iter()
            .any(|slot| slot.id == id && slot.delivering)
    }

    /// Returns the flags `id` was bound with, if it is still bound.
    #[must_use]
    pub fn flags(&self, id: BindingId) -> Option<BindingFlags> {
        self.slots
            .iter()
            .find(|slot| slot.id == id)
            .map(|slot| slot.flags)
    }

    /// Removes `id`. No-op for unknown or already-removed ids.
    pub fn unbind(&mut self, id: BindingId) {
        self.slots.retain(|slot| slot.id != id);
    }

    /// Removes every binding.
    pub fn unbind_all(&mut self) {
        self.slots.clear();
    }

    /// Number of live bindings (stopped ones included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no bindings are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_delivers_until_stopped() {
        let mut bindings = EventBindings::new();
        let id = bindings.bind(BindingFlags::default());

        assert!(bindings.is_delivering(id));
        bindings.stop(id);
        assert!(!bindings.is_delivering(id));
        // The registration itself survives a stop.
        assert_eq!(bindings.len(), 1);
    }

    #[test]
    fn stale_ids_never_alias_new_bindings() {
        let mut bindings = EventBindings::new();
        let old = bindings.bind(BindingFlags::default());
        bindings.unbind(old);

        let new = bindings.bind(BindingFlags::default());
        assert_ne!(old, new);
        assert!(!bindings.is_delivering(old));
        assert!(bindings.is_delivering(new));
    }

    #[test]
    fn unbind_all_clears_everything() {
        let mut bindings = EventBindings::new();
        let a = bindings.bind(BindingFlags::default());
        let b = bindings.bind(BindingFlags::CAPTURE_PHASE);

        bindings.unbind_all();
        assert!(bindings.is_empty());
        assert!(!bindings.is_delivering(a));
        assert!(!bindings.is_delivering(b));

        // Idempotent.
        bindings.unbind_all();
        assert!(bindings.is_empty());
    }

    #[test]
    fn flags_are_preserved() {
        let mut bindings = EventBindings::new();
        let id = bindings.bind(BindingFlags::ZONE | BindingFlags::CAPTURE_PHASE);

        assert_eq!(
            bindings.flags(id),
            Some(BindingFlags::ZONE | BindingFlags::CAPTURE_PHASE)
        );
        bindings.unbind(id);
        assert_eq!(bindings.flags(id), None);
    }

    #[test]
    fn stop_on_unknown_id_is_a_no_op() {
        let mut bindings = EventBindings::new();
        let id = bindings.bind(BindingFlags::default());
        bindings.unbind(id);
        bindings.stop(id);
        assert!(bindings.is_empty());
    }
}
