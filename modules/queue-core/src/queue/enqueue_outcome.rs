/// Outcome produced by an enqueue operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnqueueOutcome {
  /// The element was appended without any side effects.
  Enqueued,
  /// The element was appended after evicting the oldest stored element.
  EvictedOldest,
  /// The element took the place of the previous newest stored element.
  ReplacedNewest,
  /// The incoming element was discarded and the queue left unchanged.
  RejectedIncoming,
}

impl From<&EnqueueOutcome> for &'static str {
  fn from(outcome: &EnqueueOutcome) -> Self {
    match outcome {
      | EnqueueOutcome::Enqueued => "enqueue",
      | EnqueueOutcome::EvictedOldest => "evict_oldest",
      | EnqueueOutcome::ReplacedNewest => "replace_newest",
      | EnqueueOutcome::RejectedIncoming => "reject_incoming",
    }
  }
}
