//! Coordination primitives and their supporting types.

pub mod completion;
pub mod each;
pub mod guard;
pub mod handle;
pub mod parallel;
pub mod series;
pub mod set;

pub use completion::Completion;
pub use each::{each, each_series};
pub use handle::Done;
pub use parallel::parallel;
pub use series::series;
pub use set::{Aggregate, BoxedTask, TaskFuture, TaskSet};
