//! Single-fire guards.
//!
//! Both variants sit on top of [`FireToken`], an atomic flag consumed at
//! most once. The strict variant treats a second fire as a contract
//! violation and panics; the lenient variant silently keeps the first
//! value and discards the rest.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::errors::Violation;

/// An atomic flag that can be fired at most once.
#[derive(Debug, Default)]
pub(crate) struct FireToken {
    fired: AtomicBool,
}

impl FireToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the token. Returns true only for the first caller.
    pub fn fire(&self) -> bool {
        !self.fired.swap(true, Ordering::SeqCst)
    }

    pub fn fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}

/// Strict single-fire guard: a second pass is a [`Violation`] and panics.
///
/// Guards the per-task reporting path, where calling back twice would
/// corrupt aggregation state.
#[derive(Debug, Default)]
pub(crate) struct StrictGate {
    token: FireToken,
}

impl StrictGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pass(&self, task: &str) {
        if !self.token.fire() {
            panic!("{}", Violation::double_report(task));
        }
    }

    pub fn passed(&self) -> bool {
        self.token.fired()
    }
}

/// Lenient single-fire slot: the first value wins, later values are
/// dropped without complaint.
///
/// Guards completion delivery, so that once a coordinator has decided its
/// outcome, stray late reports cannot produce a second delivery.
#[derive(Debug)]
pub(crate) struct LenientSlot<V> {
    value: Option<V>,
}

impl<V> LenientSlot<V> {
    pub fn new() -> Self {
        Self { value: None }
    }

    /// Stores `value` if the slot is empty. Returns false when a value was
    /// already stored (the new one is dropped).
    pub fn put(&mut self, value: V) -> bool {
        if self.value.is_some() {
            return false;
        }
        self.value = Some(value);
        true
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    pub fn take(&mut self) -> Option<V> {
        self.value.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_token_fires_once() {
        let token = FireToken::new();
        assert!(!token.fired());
        assert!(token.fire());
        assert!(token.fired());
        assert!(!token.fire());
    }

    #[test]
    fn test_strict_gate_first_pass() {
        let gate = StrictGate::new();
        gate.pass("0");
        assert!(gate.passed());
    }

    #[test]
    #[should_panic(expected = "reported completion more than once")]
    fn test_strict_gate_panics_on_reuse() {
        let gate = StrictGate::new();
        gate.pass("0");
        gate.pass("0");
    }

    #[test]
    fn test_lenient_slot_keeps_first_value() {
        let mut slot = LenientSlot::new();
        assert!(!slot.is_set());
        assert!(slot.put(1));
        assert!(!slot.put(2));
        assert!(slot.is_set());
        assert_eq!(slot.take(), Some(1));
        assert_eq!(slot.take(), None);
    }
}
