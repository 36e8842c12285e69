use crate::error::{ListError, Result};
use crate::ring_blocks::iter::Iter;
use crate::ring_blocks::ring::Ring;
use crate::types::{Destructor, Direction};

mod keyed;

/// Circular doubly linked list.
///
/// Elements live in a ring: the tail's `next` is the head and the head's `prev`
/// is the tail. Positions are counted from the head along `next`, so index `0`
/// is the head and index `len() - 1` is the tail.
///
/// Every element that leaves the list, through a delete or through
/// [`clear`](CircularList::clear) or drop, is handed to the list's destructor
/// exactly once. Without a custom destructor the element is simply dropped.
///
/// ```
/// use ring_list::CircularList;
///
/// let mut list = CircularList::new();
/// list.append(1).unwrap();
/// list.append(2).unwrap();
/// list.append(3).unwrap();
/// list.insert_at(1, 99).unwrap();
/// list.delete_at(0).unwrap();
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![99, 2, 3]);
/// ```
pub struct CircularList<T> {
    pub(crate) ring: Ring<T>,
    destructor: Option<Destructor<T>>,
}

impl<T> CircularList<T> {
    /// Creates an empty list whose elements are dropped on removal.
    pub fn new() -> Self {
        Self {
            ring: Ring::new(),
            destructor: None,
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ring: Ring::with_capacity(capacity),
            destructor: None,
        }
    }

    /// Creates an empty list that passes every removed element to `destructor`.
    pub fn with_destructor(destructor: impl FnMut(T) + 'static) -> Self {
        Self {
            ring: Ring::new(),
            destructor: Some(Box::new(destructor)),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.ring.size
    }

    pub fn is_empty(&self) -> bool {
        self.ring.size == 0
    }

    fn release(&mut self, val: T) {
        match self.destructor.as_mut() {
            Some(destructor) => destructor(val),
            None => drop(val),
        }
    }

    fn check_index(&self, index: usize, op: &str) -> Result<()> {
        if index < self.ring.size {
            return Ok(());
        }
        log::debug!("{op}: index {index} out of range (len {})", self.ring.size);
        Err(ListError::IndexOutOfRange {
            index,
            len: self.ring.size,
        })
    }

    /// Inserts `val` at the tail, right before the head.
    pub fn append(&mut self, val: T) -> Result<()> {
        let slot = self.ring.push_back(val)?;
        log::trace!("append: slot {slot}, len {}", self.ring.size);
        Ok(())
    }

    /// Inserts `val` as the new head. The rest of the ring keeps its order.
    pub fn prepend(&mut self, val: T) -> Result<()> {
        let slot = self.ring.push_front(val)?;
        log::trace!("prepend: slot {slot}, len {}", self.ring.size);
        Ok(())
    }

    /// Inserts `val` so that it ends up at position `index`.
    ///
    /// `index == 0` behaves as [`prepend`](Self::prepend). Any `index >= len()`
    /// is clamped to the tail and behaves as [`append`](Self::append).
    pub fn insert_at(&mut self, index: usize, val: T) -> Result<()> {
        if index == 0 {
            return self.prepend(val);
        }
        if index >= self.ring.size {
            return self.append(val);
        }
        let at = self.ring.slot_at(index);
        let slot = self.ring.insert_before(at, val)?;
        log::trace!("insert_at {index}: slot {slot} spliced before slot {at}");
        Ok(())
    }

    /// Removes the element at `index` and passes it to the destructor.
    ///
    /// Removing the head moves the head onto the next element.
    pub fn delete_at(&mut self, index: usize) -> Result<()> {
        self.check_index(index, "delete_at")?;
        let slot = self.ring.slot_at(index);
        let val = self.ring.remove(slot);
        log::trace!("delete_at {index}: slot {slot} unlinked, len {}", self.ring.size);
        self.release(val);
        Ok(())
    }

    /// Overwrites the element at `index`. The replaced value is dropped, not
    /// passed to the destructor, since its node stays in the list.
    pub fn modify_at(&mut self, index: usize, val: T) -> Result<()> {
        self.check_index(index, "modify_at")?;
        let slot = self.ring.slot_at(index);
        *self.ring.val_mut(slot) = val;
        Ok(())
    }

    /// Returns a copy of the element at `index`.
    pub fn retrieve_at(&self, index: usize) -> Result<T>
    where
        T: Clone,
    {
        self.check_index(index, "retrieve_at")?;
        Ok(self.ring.val(self.ring.slot_at(index)).clone())
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.ring.size {
            return None;
        }
        Some(self.ring.val(self.ring.slot_at(index)))
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.ring.size {
            return None;
        }
        let slot = self.ring.slot_at(index);
        Some(self.ring.val_mut(slot))
    }

    pub fn front(&self) -> Option<&T> {
        self.ring.head.map(|slot| self.ring.val(slot))
    }

    pub fn back(&self) -> Option<&T> {
        self.ring.tail().map(|slot| self.ring.val(slot))
    }

    /// Calls `visit` on every element, head to tail. Does nothing on an empty list.
    pub fn traverse(&self, visit: impl FnMut(&T)) {
        self.walk(Direction::Forward, visit);
    }

    /// Calls `visit` on the head first, then on every element reached by
    /// following `prev` until the ring closes. For `[1, 2, 3]` this visits
    /// `1, 3, 2`.
    pub fn traverse_backward(&self, visit: impl FnMut(&T)) {
        self.walk(Direction::Backward, visit);
    }

    fn walk(&self, direction: Direction, mut visit: impl FnMut(&T)) {
        for slot in self.ring.slots(direction) {
            visit(self.ring.val(slot));
        }
    }

    /// Removes every element, head to tail, passing each one to the destructor.
    /// The list stays usable afterwards.
    pub fn clear(&mut self) {
        let released = self.ring.size;
        match self.destructor.as_mut() {
            Some(destructor) => self.ring.drain_with(destructor),
            None => self.ring.drain_with(drop),
        }
        log::trace!("clear: released {released} elements");
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.ring)
    }
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for CircularList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a, T> IntoIterator for &'a CircularList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for CircularList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for CircularList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}
