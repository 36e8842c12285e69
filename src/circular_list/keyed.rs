//! Operations addressing elements through a key and a comparator.
//!
//! A comparator `cmp(element, key)` returns `true` when the element matches.
//! It must be a pure function of its inputs.

use super::CircularList;
use crate::error::{ListError, Result};
use crate::types::Direction;

impl<T> CircularList<T> {
    /// Position of the first element, head to tail, matching `key`.
    ///
    /// Fails with [`ListError::NotFound`] when nothing matches, including on an
    /// empty list.
    pub fn find_match_index<K, F>(&self, key: &K, cmp: F) -> Result<usize>
    where
        K: ?Sized,
        F: Fn(&T, &K) -> bool,
    {
        match self
            .ring
            .slots(Direction::Forward)
            .position(|slot| cmp(self.ring.val(slot), key))
        {
            Some(index) => Ok(index),
            None => {
                log::debug!("find_match_index: no match among {} elements", self.ring.size);
                Err(ListError::NotFound)
            }
        }
    }

    /// Positions of every matching element, head to tail, collected into a new
    /// list. Returns `None` when nothing matches or the list is empty.
    pub fn find_all_indices<K, F>(&self, key: &K, cmp: F) -> Result<Option<CircularList<usize>>>
    where
        K: ?Sized,
        F: Fn(&T, &K) -> bool,
    {
        let mut indices = CircularList::new();
        for (index, slot) in self.ring.slots(Direction::Forward).enumerate() {
            if cmp(self.ring.val(slot), key) {
                indices.append(index)?;
            }
        }
        if indices.is_empty() {
            return Ok(None);
        }
        Ok(Some(indices))
    }

    /// Removes the first matching element.
    pub fn delete_by_key<K, F>(&mut self, key: &K, cmp: F) -> Result<()>
    where
        K: ?Sized,
        F: Fn(&T, &K) -> bool,
    {
        let index = self.find_match_index(key, cmp)?;
        self.delete_at(index)
    }

    /// Overwrites the first matching element with `val`.
    pub fn modify_by_key<K, F>(&mut self, val: T, key: &K, cmp: F) -> Result<()>
    where
        K: ?Sized,
        F: Fn(&T, &K) -> bool,
    {
        let index = self.find_match_index(key, cmp)?;
        self.modify_at(index, val)
    }

    /// Returns a copy of the first matching element.
    pub fn retrieve_by_key<K, F>(&self, key: &K, cmp: F) -> Result<T>
    where
        T: Clone,
        K: ?Sized,
        F: Fn(&T, &K) -> bool,
    {
        let index = self.find_match_index(key, cmp)?;
        self.retrieve_at(index)
    }

    /// Slots of every element matching `key`, in ring order. Each element is
    /// compared exactly once.
    fn matching_slots<K, F>(&self, key: &K, cmp: F) -> Vec<usize>
    where
        K: ?Sized,
        F: Fn(&T, &K) -> bool,
    {
        self.ring
            .slots(Direction::Forward)
            .filter(|&slot| cmp(self.ring.val(slot), key))
            .collect()
    }

    /// Removes every matching element and returns how many were removed.
    ///
    /// Matches are collected in a single pass before anything is unlinked, so
    /// the call always terminates. Removed elements reach the destructor in
    /// head to tail order.
    pub fn delete_all_by_key<K, F>(&mut self, key: &K, cmp: F) -> Result<usize>
    where
        K: ?Sized,
        F: Fn(&T, &K) -> bool,
    {
        let doomed = self.matching_slots(key, cmp);
        if doomed.is_empty() {
            log::debug!("delete_all_by_key: no match among {} elements", self.ring.size);
            return Err(ListError::NotFound);
        }
        for &slot in &doomed {
            let val = self.ring.remove(slot);
            self.release(val);
        }
        log::trace!("delete_all_by_key: removed {}, len {}", doomed.len(), self.ring.size);
        Ok(doomed.len())
    }

    /// Calls `update` on every element that matches `key` and returns how many
    /// were updated.
    ///
    /// Matching is decided for all elements before the first update, so an
    /// update that keeps an element matching is not revisited.
    pub fn update_all_by_key<K, F>(
        &mut self,
        key: &K,
        cmp: F,
        mut update: impl FnMut(&mut T),
    ) -> Result<usize>
    where
        K: ?Sized,
        F: Fn(&T, &K) -> bool,
    {
        let targets = self.matching_slots(key, cmp);
        if targets.is_empty() {
            log::debug!("update_all_by_key: no match among {} elements", self.ring.size);
            return Err(ListError::NotFound);
        }
        for &slot in &targets {
            update(self.ring.val_mut(slot));
        }
        Ok(targets.len())
    }

    /// Overwrites every matching element with a copy of `val` and returns how
    /// many were overwritten. Terminates even when `val` itself matches `key`.
    pub fn modify_all_by_key<K, F>(&mut self, val: T, key: &K, cmp: F) -> Result<usize>
    where
        T: Clone,
        K: ?Sized,
        F: Fn(&T, &K) -> bool,
    {
        self.update_all_by_key(key, cmp, |elem| elem.clone_from(&val))
    }
}
