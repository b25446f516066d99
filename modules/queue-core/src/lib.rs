#![no_std]
#![deny(missing_docs)]

//! Bounded, insertion-ordered queue with pluggable eviction policies.
//!
//! [`BoundedQueue`] keeps elements in insertion order under a hard capacity
//! limit. When an enqueue would exceed the limit, the configured
//! [`EvictionPolicy`] decides whether the oldest element, the newest element,
//! or the incoming element gives way. Equality-based search and removal are
//! available for element types supporting `PartialEq`, and a numeric
//! averaging query for element types convertible to `f64`.
//!
//! The crate only requires `core` and `alloc`.

extern crate alloc;

mod element;
pub mod queue;

pub use element::Element;
pub use queue::{BoundedQueue, EnqueueOutcome, EvictionPolicy, QueueError};
