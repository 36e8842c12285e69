use crate::ring_blocks::ring::Ring;

/// Borrowing iterator over a [`CircularList`](crate::CircularList).
///
/// The front end starts at the head and follows `next`, the back end starts at
/// the tail and follows `prev`. Both stop once they meet, so every element is
/// yielded exactly once even though the ring itself never ends.
pub struct Iter<'a, T> {
    ring: &'a Ring<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(ring: &'a Ring<T>) -> Self {
        Self {
            ring,
            front: ring.head.unwrap_or(0),
            back: ring.tail().unwrap_or(0),
            remaining: ring.size,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let slot = self.front;
        self.front = self.ring.next[slot];
        Some(self.ring.val(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let slot = self.back;
        self.back = self.ring.prev[slot];
        Some(self.ring.val(slot))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            ring: self.ring,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::CircularList;

    #[test]
    fn test_both_ends_meet() {
        let mut list = CircularList::new();
        for v in 1..=5 {
            list.append(v).unwrap();
        }
        let mut it = list.iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next(), Some(&3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_empty() {
        let list: CircularList<i32> = CircularList::new();
        assert_eq!(list.iter().count(), 0);
        assert_eq!(list.iter().rev().count(), 0);
    }

    #[test]
    fn test_rev_is_tail_to_head() {
        let mut list = CircularList::new();
        for v in ["a", "b", "c"] {
            list.append(v).unwrap();
        }
        let rev: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(rev, vec!["c", "b", "a"]);
    }
}
