// #![warn(missing_docs)]

//! # ring_list
//!
//! A circular doubly linked list with indexed and keyed operations.
//!
//! Two front ends share one arena backed ring:
//! - [`CircularList<T>`] stores typed elements,
//! - [`ByteList`] stores type-erased payloads of a fixed byte size.
//!
//! Elements that leave a list go through its destructor exactly once, whether
//! they are deleted one by one, by key, or when the list is cleared or dropped.
//!
//! ```
//! use ring_list::CircularList;
//!
//! let mut list = CircularList::new();
//! for v in [5, 3, 5, 5, 2] {
//!     list.append(v).unwrap();
//! }
//! let matches = list.find_all_indices(&5, |v, k| v == k).unwrap().unwrap();
//! assert_eq!(matches.iter().copied().collect::<Vec<_>>(), vec![0, 2, 3]);
//! ```

pub mod byte_list;
pub mod circular_list;
pub mod debugging;
pub mod error;
pub mod output;
pub mod ring_blocks;
pub mod types;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod testing;

pub use byte_list::ByteList;
pub use circular_list::CircularList;
pub use error::{ListError, Result};
pub use ring_blocks::iter::Iter;
pub use types::{Destructor, Direction};
