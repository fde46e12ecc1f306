//! Sequential task execution with index-aligned results.

use std::future::Future;

use tokio::sync::mpsc;
use tracing::debug;

use crate::errors::Violation;

use super::handle::{Done, Report};
use super::Completion;

/// Runs the tasks in `tasks` one at a time, in order, collecting results.
///
/// Task *i + 1* starts only after task *i*'s result is recorded at index
/// *i*. The first reported error completes the invocation immediately
/// with no result; no further tasks are dispatched. On success the result
/// vec is index-aligned with the input. An empty `tasks` completes
/// immediately with [`Completion::Skipped`].
pub async fn series<T, E, F, Fut>(tasks: Vec<F>) -> Completion<Vec<T>, E>
where
    T: Send + 'static,
    E: Send + 'static,
    F: FnOnce(Done<T, E>) -> Fut,
    Fut: Future<Output = ()> + Send + 'static,
{
    if tasks.is_empty() {
        return Completion::Skipped;
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut results = Vec::with_capacity(tasks.len());
    for (slot, task) in tasks.into_iter().enumerate() {
        tokio::spawn(task(Done::new(slot, tx.clone())));
        match rx.recv().await {
            Some(Report::Settled { outcome: Ok(value), .. }) => {
                debug!(slot, "series: task finished");
                results.push(value);
            }
            Some(Report::Settled { outcome: Err(error), .. }) => {
                debug!(slot, "series: task failed, stopping");
                return Completion::Failed(error);
            }
            Some(Report::Abandoned { slot }) => {
                panic!("{}", Violation::abandoned(slot.to_string()));
            }
            None => break,
        }
    }

    Completion::Done(results)
}
