use core::fmt::Debug;

/// Fundamental constraints for elements that can be stored in the queue.
///
/// The queue itself only demands `Debug` for diagnostics and `'static`
/// ownership of its elements. Operations layer further bounds where they need
/// them: equality-based search requires `PartialEq`, and numeric aggregation
/// requires [`num_traits::ToPrimitive`].
pub trait Element: Debug + 'static {}

impl<T> Element for T where T: Debug + 'static {}
