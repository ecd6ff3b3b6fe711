//! Persistent (immutable) data structures.
//!
//! - [`PersistentList`]: Persistent singly-linked list with structural
//!   equality and ordering, `filter`, `sort` and the full type class suite
//!
//! # Structural Sharing
//!
//! Operations build new versions that share unchanged nodes with the old
//! ones; nothing is ever mutated in place.
//!
//! # Examples
//!
//! ```rust
//! use corelude::persistent::PersistentList;
//!
//! let list = PersistentList::new().cons(3).cons(2).cons(1);
//! assert_eq!(list.head(), Some(&1));
//!
//! let extended = list.cons(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//! ```

mod list;

pub use list::{PersistentList, PersistentListIntoIterator, PersistentListIterator};
