//! Item iteration: `each` (all at once) and `each_series` (one at a time).

use std::future::Future;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::errors::Violation;

use super::guard::LenientSlot;
use super::handle::{Done, Report};
use super::Completion;

/// Runs `iterator` against every item of `items` at once.
///
/// Every item is dispatched before any completion is awaited. The
/// invocation completes once all items have reported success, or
/// immediately with the first reported error; in-flight items keep
/// running after an error, but their reports go nowhere. An empty
/// `items` completes immediately with [`Completion::Skipped`].
pub async fn each<I, E, F, Fut>(items: Vec<I>, iterator: F) -> Completion<(), E>
where
    I: Send + 'static,
    E: Send + 'static,
    F: Fn(I, Done<(), E>) -> Fut,
    Fut: Future<Output = ()> + Send + 'static,
{
    if items.is_empty() {
        return Completion::Skipped;
    }

    let total = items.len();
    let (tx, mut rx) = mpsc::unbounded_channel();
    for (slot, item) in items.into_iter().enumerate() {
        tokio::spawn(iterator(item, Done::new(slot, tx.clone())));
    }
    drop(tx);
    debug!(total, "each: all items dispatched");

    let mut completed = 0usize;
    let mut delivery = LenientSlot::new();
    while completed < total && !delivery.is_set() {
        match rx.recv().await {
            Some(Report::Settled { slot, outcome: Ok(()) }) => {
                completed += 1;
                debug!(slot, completed, total, "each: item finished");
            }
            Some(Report::Settled { slot, outcome: Err(error) }) => {
                debug!(slot, "each: item failed, short-circuiting");
                if !delivery.put(Completion::Failed(error)) {
                    warn!(slot, "each: discarding late error report");
                }
            }
            Some(Report::Abandoned { slot }) => {
                panic!("{}", Violation::abandoned(slot.to_string()));
            }
            None => break,
        }
    }

    delivery.take().unwrap_or(Completion::Done(()))
}

/// Runs `iterator` against the items of `items` one at a time, in order.
///
/// Item *i + 1* is dispatched only after item *i* reports success. The
/// first error stops iteration: no further items are dispatched and the
/// invocation fails immediately. An empty `items` completes immediately
/// with [`Completion::Skipped`].
pub async fn each_series<I, E, F, Fut>(items: Vec<I>, iterator: F) -> Completion<(), E>
where
    I: Send + 'static,
    E: Send + 'static,
    F: Fn(I, Done<(), E>) -> Fut,
    Fut: Future<Output = ()> + Send + 'static,
{
    if items.is_empty() {
        return Completion::Skipped;
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    for (slot, item) in items.into_iter().enumerate() {
        tokio::spawn(iterator(item, Done::new(slot, tx.clone())));
        match rx.recv().await {
            Some(Report::Settled { outcome: Ok(()), .. }) => {
                debug!(slot, "each_series: item finished");
            }
            Some(Report::Settled { outcome: Err(error), .. }) => {
                debug!(slot, "each_series: item failed, stopping iteration");
                return Completion::Failed(error);
            }
            Some(Report::Abandoned { slot }) => {
                panic!("{}", Violation::abandoned(slot.to_string()));
            }
            None => break,
        }
    }

    Completion::Done(())
}
