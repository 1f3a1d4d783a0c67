/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use alloc::collections::TryReserveError;
use thiserror::Error;

/// Error returned when a value could not be inserted into a [`List`](crate::List).
///
/// The list is left exactly as it was before the call, and the rejected value is handed back so
/// that the caller keeps ownership of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError<T> {
    /// The position was past the end of the list.  Valid positions range from `0` to `length`,
    /// both inclusive.
    #[error("insert position {position} is out of range for a list of length {length}")]
    OutOfRange { position: usize, length: usize, value: T },
    /// The node arena could not grow to hold the new node.
    #[error("failed to allocate a list node")]
    AllocationFailure {
        value: T,
        #[source]
        source: TryReserveError,
    },
}

impl<T> InsertError<T> {
    /// Returns the value that could not be inserted.
    pub fn into_value(self) -> T {
        match self {
            InsertError::OutOfRange { value, .. } | InsertError::AllocationFailure { value, .. } => {
                value
            }
        }
    }

    #[must_use]
    pub fn value(&self) -> &T {
        match self {
            InsertError::OutOfRange { value, .. } | InsertError::AllocationFailure { value, .. } => {
                value
            }
        }
    }

    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, InsertError::OutOfRange { .. })
    }

    #[must_use]
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, InsertError::AllocationFailure { .. })
    }
}
