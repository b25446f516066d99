/// Policy describing how to handle capacity overflows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EvictionPolicy {
  /// Evict the oldest stored element to make room for the incoming one.
  #[default]
  EvictOldest,
  /// Replace the newest stored element with the incoming one.
  EvictNewest,
  /// Reject the incoming element and leave the queue unchanged.
  RejectNew,
}
