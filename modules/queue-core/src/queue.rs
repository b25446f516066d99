//! Bounded FIFO queue with configurable capacity-overflow handling.

mod bounded_queue;
mod enqueue_outcome;
mod eviction_policy;
mod queue_error;

pub use bounded_queue::BoundedQueue;
pub use enqueue_outcome::EnqueueOutcome;
pub use eviction_policy::EvictionPolicy;
pub use queue_error::QueueError;
