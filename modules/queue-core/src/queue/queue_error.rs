use core::fmt;

/// Errors that occur during queue operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueError<T> {
  /// The queue is full and cannot accept more elements. Contains the element
  /// that was attempted to be added.
  Full(T),
  /// The queue has no elements to aggregate.
  Empty,
  /// A stored element could not be converted to `f64` for aggregation.
  Unrepresentable,
}

impl<T> QueueError<T> {
  /// Extracts the payload carried by variants that preserve the element on
  /// failure.
  #[must_use]
  pub fn into_item(self) -> Option<T> {
    match self {
      | Self::Full(item) => Some(item),
      | Self::Empty | Self::Unrepresentable => None,
    }
  }
}

impl<T> fmt::Display for QueueError<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::Full(_) => f.write_str("queue is full"),
      | Self::Empty => f.write_str("queue is empty"),
      | Self::Unrepresentable => f.write_str("element value is not representable as f64"),
    }
  }
}

impl<T: fmt::Debug> core::error::Error for QueueError<T> {}
