
use alloc::collections::{VecDeque, vec_deque};

use num_traits::ToPrimitive;

use crate::{
  element::Element,
  queue::{EnqueueOutcome, EvictionPolicy, QueueError},
};

/// Insertion-ordered queue with a hard capacity limit and a configurable
/// eviction policy.
///
/// The head is the oldest stored element, the tail the newest. Enqueuing past
/// the capacity limit never grows the storage; the configured
/// [`EvictionPolicy`] decides which element gives way. A queue with capacity
/// zero is permanently full and rejects every element regardless of policy.
pub struct BoundedQueue<E> {
  buffer:   VecDeque<E>,
  capacity: usize,
  policy:   EvictionPolicy,
}

impl<E> BoundedQueue<E>
where
  E: Element,
{
  /// Creates an empty queue with the specified capacity and the default
  /// eviction policy ([`EvictionPolicy::EvictOldest`]).
  #[must_use]
  pub fn with_capacity(capacity: usize) -> Self {
    Self::with_policy(capacity, EvictionPolicy::default())
  }

  /// Creates an empty queue with the specified capacity and eviction policy.
  #[must_use]
  pub fn with_policy(capacity: usize, policy: EvictionPolicy) -> Self {
    Self { buffer: VecDeque::with_capacity(capacity), capacity, policy }
  }

  /// Returns the eviction policy currently in effect.
  #[must_use]
  pub const fn eviction_policy(&self) -> EvictionPolicy {
    self.policy
  }

  /// Replaces the eviction policy. Takes effect for subsequent enqueues;
  /// stored elements are not touched.
  pub fn set_eviction_policy(&mut self, policy: EvictionPolicy) {
    self.policy = policy;
  }

  /// Enqueues an item at the tail, applying the eviction policy when the
  /// queue is full.
  ///
  /// The call never fails; the returned [`EnqueueOutcome`] reports whether a
  /// stored element gave way or the incoming one was discarded. Callers that
  /// only need fire-and-forget semantics may ignore it.
  pub fn enqueue(&mut self, item: E) -> EnqueueOutcome {
    if self.is_full() {
      return self.handle_full_queue(item);
    }

    self.buffer.push_back(item);
    EnqueueOutcome::Enqueued
  }

  /// Enqueues an item only when spare capacity is available.
  ///
  /// Unlike [`enqueue`](Self::enqueue) this never displaces a stored element.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Full`] carrying `item` back to the caller when the
  /// queue is full.
  pub fn try_enqueue(&mut self, item: E) -> Result<(), QueueError<E>> {
    if self.is_full() {
      return Err(QueueError::Full(item));
    }

    self.buffer.push_back(item);
    Ok(())
  }

  /// Removes and returns the head (oldest) element, or `None` when the queue
  /// is empty.
  pub fn dequeue(&mut self) -> Option<E> {
    self.buffer.pop_front()
  }

  /// Returns the head element without removing it, or `None` when the queue
  /// is empty.
  #[must_use]
  pub fn peek(&self) -> Option<&E> {
    self.buffer.front()
  }

  /// Drops every stored element. Capacity and eviction policy are unaffected.
  pub fn clear(&mut self) {
    self.buffer.clear();
  }

  /// Returns the number of stored elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.buffer.len()
  }

  /// Returns the capacity limit.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Indicates whether the queue is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.buffer.is_empty()
  }

  /// Indicates whether the queue is full.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.len() == self.capacity
  }

  /// Returns an iterator visiting stored elements from head (oldest) to tail
  /// (newest).
  #[must_use]
  pub fn iter(&self) -> vec_deque::Iter<'_, E> {
    self.buffer.iter()
  }

  fn handle_full_queue(&mut self, item: E) -> EnqueueOutcome {
    if self.capacity == 0 {
      drop(item);
      return EnqueueOutcome::RejectedIncoming;
    }

    match self.policy {
      | EvictionPolicy::EvictOldest => {
        let _ = self.buffer.pop_front();
        self.buffer.push_back(item);
        EnqueueOutcome::EvictedOldest
      },
      | EvictionPolicy::EvictNewest => {
        let _ = self.buffer.pop_back();
        self.buffer.push_back(item);
        EnqueueOutcome::ReplacedNewest
      },
      | EvictionPolicy::RejectNew => {
        drop(item);
        EnqueueOutcome::RejectedIncoming
      },
    }
  }
}

impl<E> BoundedQueue<E>
where
  E: Element + PartialEq,
{
  /// Indicates whether some stored element is equal to `target`.
  #[must_use]
  pub fn contains(&self, target: &E) -> bool {
    self.buffer.contains(target)
  }

  /// Removes and returns the first element equal to `target`, scanning from
  /// head to tail, or `None` when no stored element matches. The relative
  /// order of the remaining elements is preserved.
  pub fn dequeue_item(&mut self, target: &E) -> Option<E> {
    let index = self.buffer.iter().position(|stored| stored == target)?;
    self.buffer.remove(index)
  }

  /// Discards the first element equal to `target`, scanning from head to
  /// tail. Does nothing when no stored element matches.
  pub fn remove_item(&mut self, target: &E) {
    let _ = self.dequeue_item(target);
  }
}

impl<E> BoundedQueue<E>
where
  E: Element + ToPrimitive,
{
  /// Computes the arithmetic mean of all stored elements as `f64`.
  ///
  /// # Errors
  ///
  /// Returns [`QueueError::Empty`] when the queue holds no elements, and
  /// [`QueueError::Unrepresentable`] when a stored element cannot be
  /// converted to `f64`.
  pub fn average(&self) -> Result<f64, QueueError<E>> {
    if self.is_empty() {
      return Err(QueueError::Empty);
    }

    let mut sum = 0.0_f64;
    for value in &self.buffer {
      sum += value.to_f64().ok_or(QueueError::Unrepresentable)?;
    }
    Ok(sum / self.len() as f64)
  }
}
