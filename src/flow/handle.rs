//! Per-task completion handles.

use tokio::sync::mpsc::UnboundedSender;
use tracing::trace;

use super::guard::StrictGate;

/// What a task sends back to its coordinator.
#[derive(Debug)]
pub(crate) enum Report<T, E> {
    /// The task reported through its handle.
    Settled { slot: usize, outcome: Result<T, E> },
    /// The task dropped its handle without reporting.
    Abandoned { slot: usize },
}

/// Completion handle passed to every task.
///
/// A task finishes by calling [`Done::ok`] or [`Done::err`] exactly once;
/// both consume the handle, so reporting twice does not compile. Dropping
/// the handle without reporting is a contract violation that the owning
/// coordinator surfaces as a panic.
#[derive(Debug)]
pub struct Done<T, E> {
    slot: usize,
    tx: UnboundedSender<Report<T, E>>,
    gate: StrictGate,
}

impl<T, E> Done<T, E> {
    pub(crate) fn new(slot: usize, tx: UnboundedSender<Report<T, E>>) -> Self {
        Self {
            slot,
            tx,
            gate: StrictGate::new(),
        }
    }

    /// Reports success with `value`.
    pub fn ok(self, value: T) {
        self.resolve(Ok(value));
    }

    /// Reports failure with `error`. The error reaches the caller verbatim.
    pub fn err(self, error: E) {
        self.resolve(Err(error));
    }

    /// Reports the given outcome.
    pub fn resolve(self, outcome: Result<T, E>) {
        self.gate.pass(&self.slot.to_string());
        trace!(slot = self.slot, "task settled");
        // A closed channel means the coordinator already delivered; the
        // late report is discarded.
        let _ = self.tx.send(Report::Settled {
            slot: self.slot,
            outcome,
        });
    }
}

impl<T, E> Drop for Done<T, E> {
    fn drop(&mut self) {
        if !self.gate.passed() {
            let _ = self.tx.send(Report::Abandoned { slot: self.slot });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_ok_sends_settled_report() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        Done::<u32, anyhow::Error>::new(2, tx).ok(7);

        match rx.recv().await {
            Some(Report::Settled { slot, outcome }) => {
                assert_eq!(slot, 2);
                assert_eq!(outcome.unwrap(), 7);
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_drop_without_reporting_sends_abandoned() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        drop(Done::<u32, anyhow::Error>::new(0, tx));

        assert!(matches!(
            rx.recv().await,
            Some(Report::Abandoned { slot: 0 })
        ));
    }

    #[tokio::test]
    async fn test_report_after_coordinator_gone_is_discarded() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        // must not panic or block
        Done::<u32, anyhow::Error>::new(0, tx).ok(1);
    }
}
