//! Concurrent task execution with order-preserving aggregation.

use std::future::Future;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::errors::Violation;

use super::guard::LenientSlot;
use super::handle::{Done, Report};
use super::set::{classify, Shape, TaskSet};
use super::{Aggregate, Completion};

/// Runs every task in `tasks` at once and collects their results.
///
/// Accepts anything convertible to [`TaskSet`]: a `Vec` of tasks, a vec of
/// `(key, task)` pairs, or a map. All tasks are dispatched before any
/// completion is awaited. On success the aggregate matches the input
/// shape, index- or key-aligned regardless of the order tasks finished
/// in. The first reported error completes the invocation immediately with
/// no result; tasks still in flight are not cancelled, but their reports
/// go nowhere. An empty collection completes immediately with
/// [`Completion::Skipped`].
pub async fn parallel<T, E, F, Fut>(tasks: impl Into<TaskSet<F>>) -> Completion<Aggregate<T>, E>
where
    T: Send + 'static,
    E: Send + 'static,
    F: FnOnce(Done<T, E>) -> Fut,
    Fut: Future<Output = ()> + Send + 'static,
{
    let (keys, tasks) = match classify(tasks.into()) {
        Shape::Empty => return Completion::Skipped,
        Shape::Ordered(tasks) => (None, tasks),
        Shape::Keyed(pairs) => {
            let (keys, tasks): (Vec<String>, Vec<F>) = pairs.into_iter().unzip();
            (Some(keys), tasks)
        }
    };

    let total = tasks.len();
    let (tx, mut rx) = mpsc::unbounded_channel();
    for (slot, task) in tasks.into_iter().enumerate() {
        tokio::spawn(task(Done::new(slot, tx.clone())));
    }
    drop(tx);
    debug!(total, keyed = keys.is_some(), "parallel: all tasks dispatched");

    let mut results: Vec<Option<T>> = Vec::with_capacity(total);
    results.resize_with(total, || None);
    let mut completed = 0usize;
    let mut delivery = LenientSlot::new();
    while completed < total && !delivery.is_set() {
        match rx.recv().await {
            Some(Report::Settled { slot, outcome: Ok(value) }) => {
                results[slot] = Some(value);
                completed += 1;
                debug!(slot, completed, total, "parallel: task finished");
            }
            Some(Report::Settled { slot, outcome: Err(error) }) => {
                debug!(slot, "parallel: task failed, short-circuiting");
                if !delivery.put(Completion::Failed(error)) {
                    warn!(slot, "parallel: discarding late error report");
                }
            }
            Some(Report::Abandoned { slot }) => {
                panic!("{}", Violation::abandoned(task_label(&keys, slot)));
            }
            None => break,
        }
    }

    match delivery.take() {
        Some(completion) => completion,
        None => Completion::Done(assemble(keys, results)),
    }
}

fn task_label(keys: &Option<Vec<String>>, slot: usize) -> String {
    match keys {
        Some(keys) => keys[slot].clone(),
        None => slot.to_string(),
    }
}

/// Zips results back into the input shape. Every slot is filled by the
/// time this runs.
fn assemble<T>(keys: Option<Vec<String>>, results: Vec<Option<T>>) -> Aggregate<T> {
    let values = results.into_iter().flatten();
    match keys {
        Some(keys) => Aggregate::Keyed(keys.into_iter().zip(values).collect()),
        None => Aggregate::Ordered(values.collect()),
    }
}
