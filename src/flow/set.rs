//! Task collections and aggregated results.

use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::pin::Pin;

use super::handle::Done;

/// Future driven on behalf of a boxed task.
pub type TaskFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// A boxed zero-input task, for heterogeneous task lists.
///
/// Tasks produced by different closures have different types; box them
/// with this alias to put them in one [`TaskSet`].
pub type BoxedTask<T, E> = Box<dyn FnOnce(Done<T, E>) -> TaskFuture + Send>;

/// Input collection for [`parallel`](super::parallel()): either a
/// position-significant sequence or a keyed mapping.
///
/// Keyed order is whatever the source collection yields (`HashMap`:
/// unspecified, `BTreeMap`: sorted, `Keyed` built by hand: as given).
/// Whatever it is, dispatch and result assembly use the same order.
#[derive(Debug)]
pub enum TaskSet<F> {
    Ordered(Vec<F>),
    Keyed(Vec<(String, F)>),
}

impl<F> From<Vec<F>> for TaskSet<F> {
    fn from(tasks: Vec<F>) -> Self {
        Self::Ordered(tasks)
    }
}

impl<F> From<HashMap<String, F>> for TaskSet<F> {
    fn from(tasks: HashMap<String, F>) -> Self {
        Self::Keyed(tasks.into_iter().collect())
    }
}

impl<F> From<BTreeMap<String, F>> for TaskSet<F> {
    fn from(tasks: BTreeMap<String, F>) -> Self {
        Self::Keyed(tasks.into_iter().collect())
    }
}

/// Collection shape, resolved once at call entry.
#[derive(Debug)]
pub(crate) enum Shape<F> {
    Ordered(Vec<F>),
    Keyed(Vec<(String, F)>),
    Empty,
}

pub(crate) fn classify<F>(set: TaskSet<F>) -> Shape<F> {
    match set {
        TaskSet::Ordered(tasks) if !tasks.is_empty() => Shape::Ordered(tasks),
        TaskSet::Keyed(tasks) if !tasks.is_empty() => Shape::Keyed(tasks),
        _ => Shape::Empty,
    }
}

/// Task results, shape-matched to the input collection.
///
/// `Ordered` is index-aligned with the input sequence; `Keyed` maps each
/// original key to its task's result. Alignment holds regardless of the
/// order in which tasks finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregate<T> {
    Ordered(Vec<T>),
    Keyed(HashMap<String, T>),
}

impl<T> Aggregate<T> {
    pub fn into_ordered(self) -> Option<Vec<T>> {
        match self {
            Self::Ordered(values) => Some(values),
            Self::Keyed(_) => None,
        }
    }

    pub fn into_keyed(self) -> Option<HashMap<String, T>> {
        match self {
            Self::Keyed(values) => Some(values),
            Self::Ordered(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Ordered(values) => values.len(),
            Self::Keyed(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
