//! Callback-driven coordination primitives.
//!
//! Tandem runs a collection of callback-reporting tasks either all at once
//! (`each`, `parallel`) or one at a time (`each_series`, `series`) and
//! delivers a single completion per invocation: the first task error, an
//! order-preserving aggregate of every result, or an immediate no-op
//! completion for empty input.

pub mod errors;
pub mod flow;

// Re-exports for convenience
pub use errors::Violation;
pub use flow::{
    each, each_series, parallel, series, Aggregate, BoxedTask, Completion, Done, TaskFuture,
    TaskSet,
};
