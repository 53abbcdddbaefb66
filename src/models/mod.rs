//! Simulation domain models.
//!
//! Provides the data types shared by generation, dispatching, scheduling
//! and scoring.
//!
//! | Type | Role |
//! |------|------|
//! | Task | Immutable unit of work (weight, duration, due) |
//! | TaskId | Generation-assigned identity within a batch |
//! | TaskBatch | All tasks of one trial, in generation order |
//! | CompletionRecord | A task's completion time, produced by the scheduler |

mod batch;
mod completion;
mod task;

pub use batch::TaskBatch;
pub use completion::CompletionRecord;
pub use task::{Task, TaskId};
