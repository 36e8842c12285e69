use crate::error::{ListError, Result};
use crate::types::Direction;

/// Arena backed ring. Links are slot indices, so a freed slot can never be
/// reached through a stale pointer.
///
/// Every live slot is part of a single cycle starting at `head`; vacant slots
/// have `vals[slot] == None` and sit on the `vacant` stack.
#[derive(Debug, Clone)]
pub(crate) struct Ring<T> {
    pub prev: Vec<usize>,
    pub next: Vec<usize>,
    /// Payload of every slot, `None` when the slot is vacant
    pub vals: Vec<Option<T>>,
    pub head: Option<usize>,
    pub size: usize,       // number of live slots
    vacant: Vec<usize>,    // slots ready for reuse
}

impl<T> Ring<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            prev: Vec::with_capacity(capacity),
            next: Vec::with_capacity(capacity),
            vals: Vec::with_capacity(capacity),
            head: None,
            size: 0,
            vacant: Vec::with_capacity(capacity),
        }
    }

    pub fn link(&mut self, u_idx: usize, v_idx: usize) {
        self.next[u_idx] = v_idx;
        self.prev[v_idx] = u_idx;
    }

    /// Stores `val` in a detached, self-linked slot.
    ///
    /// Storage is reserved before anything is written, so a failed allocation
    /// leaves the ring untouched.
    fn alloc(&mut self, val: T) -> Result<usize> {
        if let Some(slot) = self.vacant.pop() {
            self.vals[slot] = Some(val);
            self.link(slot, slot);
            return Ok(slot);
        }

        let slot = self.vals.len();
        self.prev
            .try_reserve(1)
            .and_then(|_| self.next.try_reserve(1))
            .and_then(|_| self.vals.try_reserve(1))
            // `remove` pushes onto `vacant` and must not allocate
            .and_then(|_| self.vacant.try_reserve(slot + 1))
            .map_err(|_| ListError::AllocationFailure)?;

        self.prev.push(slot);
        self.next.push(slot);
        self.vals.push(Some(val));
        Ok(slot)
    }

    /// Splices the detached `slot` between `prev[at]` and `at`.
    fn splice_before(&mut self, slot: usize, at: usize) {
        let p = self.prev[at];
        self.link(p, slot);
        self.link(slot, at);
    }

    /// Inserts at the tail, which is the position right before the head.
    pub fn push_back(&mut self, val: T) -> Result<usize> {
        let slot = self.alloc(val)?;
        match self.head {
            None => self.head = Some(slot),
            Some(head) => self.splice_before(slot, head),
        }
        self.size += 1;
        Ok(slot)
    }

    /// Same ring as [`Ring::push_back`], with the head moved onto the new slot.
    pub fn push_front(&mut self, val: T) -> Result<usize> {
        let slot = self.push_back(val)?;
        self.head = Some(slot);
        Ok(slot)
    }

    /// Inserts before the live slot `at`. The head is left where it is.
    pub fn insert_before(&mut self, at: usize, val: T) -> Result<usize> {
        let slot = self.alloc(val)?;
        self.splice_before(slot, at);
        self.size += 1;
        Ok(slot)
    }

    /// Unlinks a live slot and hands back its payload.
    pub fn remove(&mut self, slot: usize) -> T {
        let (p, n) = (self.prev[slot], self.next[slot]);
        self.link(p, n);
        if self.head == Some(slot) {
            self.head = if n == slot { None } else { Some(n) };
        }
        self.link(slot, slot);
        self.size -= 1;
        self.vacant.push(slot);

        match self.vals[slot].take() {
            Some(val) => val,
            None => unreachable!("slot {slot} was unlinked twice"),
        }
    }

    /// Slot of the element at `index`, counted from the head along `next`.
    /// The caller checks `index < size`.
    pub fn slot_at(&self, index: usize) -> usize {
        match self.slots(Direction::Forward).nth(index) {
            Some(slot) => slot,
            None => unreachable!("index {index} is past the ring of size {}", self.size),
        }
    }

    pub fn val(&self, slot: usize) -> &T {
        match &self.vals[slot] {
            Some(val) => val,
            None => unreachable!("slot {slot} is vacant"),
        }
    }

    pub fn val_mut(&mut self, slot: usize) -> &mut T {
        match &mut self.vals[slot] {
            Some(val) => val,
            None => unreachable!("slot {slot} is vacant"),
        }
    }

    pub fn tail(&self) -> Option<usize> {
        self.head.map(|head| self.prev[head])
    }

    /// Live slots, starting at the head and stopping when the ring closes.
    pub fn slots(&self, direction: Direction) -> Slots<'_, T> {
        Slots {
            ring: self,
            current: self.head,
            remaining: self.size,
            direction,
        }
    }

    /// Unlinks every slot head to tail, feeding each payload to `release`,
    /// then drops the arena's bookkeeping.
    pub fn drain_with(&mut self, mut release: impl FnMut(T)) {
        while let Some(head) = self.head {
            release(self.remove(head));
        }
        self.prev.clear();
        self.next.clear();
        self.vals.clear();
        self.vacant.clear();
    }
}

/// Iterator over live slot indices in ring order.
pub(crate) struct Slots<'a, T> {
    ring: &'a Ring<T>,
    current: Option<usize>,
    remaining: usize,
    direction: Direction,
}

impl<T> Iterator for Slots<'_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.current?;
        self.remaining -= 1;
        self.current = Some(match self.direction {
            Direction::Forward => self.ring.next[slot],
            Direction::Backward => self.ring.prev[slot],
        });
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
