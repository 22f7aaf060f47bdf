//! # stoker-warming
//!
//! The warming half of the system: a prioritized queue of one-shot prefetch
//! tasks, a scheduler that drains it with bounded concurrency, and the
//! [`WarmingEngine`] that decides what goes into the queue.
//!
//! Everything here is fire-and-forget from the caller's perspective: a
//! warming pass always resolves, and individual prefetch failures are
//! logged, counted, and absorbed.

pub mod engine;
pub mod queue;
pub mod scheduler;

pub use engine::WarmingEngine;
pub use queue::{TaskAction, WarmingTask};
pub use scheduler::{BatchOutcome, BoundedScheduler};
