/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#![no_std]
#![cfg_attr(feature = "fatal-warnings", deny(warnings))]

// Note: Keep this in sync with `README.md`.  Note that the doc links must be removed.
//! # Positional Linked List
//!
//! A singly linked list that supports inserting an element before any position, from the head
//! (position `0`) to right after the last element (position `len()`).
//!
//! Nodes are stored in an arena and linked by index, so every node has exactly one owner of its
//! `next` link and the chain can never form a cycle.  Insertion is fallible: an out of range
//! position or an allocation failure is reported as an [`InsertError`](crate::InsertError) that
//! hands the value back, and the list is left untouched.
//!
//! ## Example
//!
//! ```rust
//! use poslist::List;
//!
//! let mut list = List::new();
//!
//! list.insert(0, 5).unwrap();
//! list.insert(0, 3).unwrap();
//! list.insert(1, 4).unwrap();
//! list.insert(3, 9).unwrap();
//!
//! assert_eq!(list.to_string(), "[3, 4, 5, 9]");
//!
//! let err = list.insert(5, 1).unwrap_err();
//!
//! assert!(err.is_out_of_range());
//! assert_eq!(err.into_value(), 1);
//! assert_eq!(list.to_string(), "[3, 4, 5, 9]");
//! ```
//!
//! ## Macro
//!
//! ```rust
//! use poslist::{list, List};
//!
//! let mut l = List::new();
//!
//! l.push_back(1).unwrap();
//! l.push_back(2).unwrap();
//! l.push_back(3).unwrap();
//!
//! assert_eq!(list![1, 2, 3], l);
//! ```

#[cfg(test)]
#[macro_use]
extern crate std;

extern crate alloc;

pub mod list;

pub use crate::list::InsertError;
pub use crate::list::List;
