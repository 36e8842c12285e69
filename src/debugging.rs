use fixedbitset::FixedBitSet;

use crate::CircularList;
use crate::ring_blocks::ring::Ring;

/// Checks the structural invariants of a list:
/// - an empty list has no head and no live slot,
/// - following `next` (or `prev`) `len()` times from the head visits `len()`
///   distinct live slots and lands back on the head,
/// - `prev` undoes `next` on every visited slot,
/// - there are no live slots outside the ring.
pub fn check_ring<T>(list: &CircularList<T>) -> bool {
    let ring = &list.ring;
    let live = ring.vals.iter().filter(|v| v.is_some()).count();
    if live != ring.size {
        return false;
    }

    let Some(head) = ring.head else {
        return ring.size == 0;
    };
    if ring.size == 0 {
        return false;
    }

    closes(ring, head, &ring.next) && closes(ring, head, &ring.prev)
}

/// Follows `links` from `head` exactly `size` times.
fn closes<T>(ring: &Ring<T>, head: usize, links: &[usize]) -> bool {
    let mut visited = FixedBitSet::with_capacity(ring.vals.len());
    let mut slot = head;
    for _ in 0..ring.size {
        if slot >= ring.vals.len() || ring.vals[slot].is_none() || visited.contains(slot) {
            return false;
        }
        visited.insert(slot);
        if ring.prev[ring.next[slot]] != slot || ring.next[ring.prev[slot]] != slot {
            return false;
        }
        slot = links[slot];
    }
    slot == head
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_rings() {
        let mut list = CircularList::new();
        assert!(check_ring(&list));
        for v in 0..6 {
            list.append(v).unwrap();
            assert!(check_ring(&list));
        }
        list.insert_at(3, 10).unwrap();
        list.delete_at(0).unwrap();
        list.delete_at(5).unwrap();
        assert!(check_ring(&list));
        list.clear();
        assert!(check_ring(&list));
    }

    #[test]
    fn test_detects_broken_links() {
        let mut list = CircularList::new();
        for v in 0..4 {
            list.append(v).unwrap();
        }
        let head = list.ring.head.unwrap();
        let second = list.ring.next[head];
        // skip one slot in the forward direction only
        list.ring.next[head] = list.ring.next[second];
        assert!(!check_ring(&list));
        list.ring.next[head] = second;
        assert!(check_ring(&list));
    }

    #[test]
    fn test_detects_wrong_count() {
        let mut list = CircularList::new();
        list.append(1).unwrap();
        list.append(2).unwrap();
        list.ring.size = 1;
        assert!(!check_ring(&list));
        list.ring.size = 2;
    }
}
