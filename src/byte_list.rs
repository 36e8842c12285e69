use crate::circular_list::CircularList;
use crate::error::{ListError, Result};

/// Type-erased list of fixed-size byte payloads.
///
/// Every payload is exactly `element_size` bytes. Data going in is copied into a
/// buffer owned by the list, data coming out is copied into a buffer owned by
/// the caller, so nobody ever aliases the list's storage.
///
/// ```
/// use ring_list::ByteList;
///
/// let mut list = ByteList::new(4).unwrap();
/// list.append(&7u32.to_le_bytes()).unwrap();
/// let mut out = [0u8; 4];
/// list.retrieve_at(0, &mut out).unwrap();
/// assert_eq!(u32::from_le_bytes(out), 7);
/// ```
pub struct ByteList {
    element_size: usize,
    list: CircularList<Box<[u8]>>,
}

impl ByteList {
    /// Creates an empty list whose payloads are simply freed on removal.
    pub fn new(element_size: usize) -> Result<Self> {
        Self::check_size(element_size)?;
        Ok(Self {
            element_size,
            list: CircularList::new(),
        })
    }

    /// Creates an empty list that passes every removed payload to `destructor`.
    pub fn create(
        element_size: usize,
        destructor: impl FnMut(Box<[u8]>) + 'static,
    ) -> Result<Self> {
        Self::check_size(element_size)?;
        Ok(Self {
            element_size,
            list: CircularList::with_destructor(destructor),
        })
    }

    fn check_size(element_size: usize) -> Result<()> {
        if element_size == 0 {
            log::debug!("create: element size must be positive");
            return Err(ListError::InvalidArgument("element size must be positive"));
        }
        Ok(())
    }

    pub fn element_size(&self) -> usize {
        self.element_size
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    fn check_len(&self, data: &[u8], op: &str) -> Result<()> {
        if data.len() == self.element_size {
            return Ok(());
        }
        log::debug!(
            "{op}: payload of {} bytes, element size is {}",
            data.len(),
            self.element_size
        );
        Err(ListError::InvalidArgument("payload length differs from the element size"))
    }

    /// Copies `data` into a freshly allocated payload.
    fn payload(&self, data: &[u8], op: &str) -> Result<Box<[u8]>> {
        self.check_len(data, op)?;
        let mut buf = Vec::new();
        buf.try_reserve_exact(self.element_size)
            .map_err(|_| ListError::AllocationFailure)?;
        buf.extend_from_slice(data);
        Ok(buf.into_boxed_slice())
    }

    pub fn append(&mut self, data: &[u8]) -> Result<()> {
        let payload = self.payload(data, "append")?;
        self.list.append(payload)
    }

    pub fn prepend(&mut self, data: &[u8]) -> Result<()> {
        let payload = self.payload(data, "prepend")?;
        self.list.prepend(payload)
    }

    /// See [`CircularList::insert_at`]; indices past the tail clamp to the tail.
    pub fn insert_at(&mut self, index: usize, data: &[u8]) -> Result<()> {
        let payload = self.payload(data, "insert_at")?;
        self.list.insert_at(index, payload)
    }

    pub fn delete_at(&mut self, index: usize) -> Result<()> {
        self.list.delete_at(index)
    }

    /// Copies `data` over the payload at `index`, in place.
    pub fn modify_at(&mut self, index: usize, data: &[u8]) -> Result<()> {
        self.check_len(data, "modify_at")?;
        let len = self.list.len();
        match self.list.get_mut(index) {
            Some(payload) => {
                payload.copy_from_slice(data);
                Ok(())
            }
            None => {
                log::debug!("modify_at: index {index} out of range (len {len})");
                Err(ListError::IndexOutOfRange { index, len })
            }
        }
    }

    /// Copies the payload at `index` into `out`. On failure `out` is untouched.
    pub fn retrieve_at(&self, index: usize, out: &mut [u8]) -> Result<()> {
        self.check_len(out, "retrieve_at")?;
        match self.list.get(index) {
            Some(payload) => {
                out.copy_from_slice(payload);
                Ok(())
            }
            None => {
                log::debug!("retrieve_at: index {index} out of range (len {})", self.len());
                Err(ListError::IndexOutOfRange {
                    index,
                    len: self.len(),
                })
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.list.get(index).map(|payload| &payload[..])
    }

    pub fn find_match_index<K, F>(&self, key: &K, cmp: F) -> Result<usize>
    where
        K: ?Sized,
        F: Fn(&[u8], &K) -> bool,
    {
        self.list
            .find_match_index(key, |payload: &Box<[u8]>, key: &K| cmp(&payload[..], key))
    }

    pub fn find_all_indices<K, F>(&self, key: &K, cmp: F) -> Result<Option<CircularList<usize>>>
    where
        K: ?Sized,
        F: Fn(&[u8], &K) -> bool,
    {
        self.list
            .find_all_indices(key, |payload: &Box<[u8]>, key: &K| cmp(&payload[..], key))
    }

    pub fn delete_by_key<K, F>(&mut self, key: &K, cmp: F) -> Result<()>
    where
        K: ?Sized,
        F: Fn(&[u8], &K) -> bool,
    {
        let index = self.find_match_index(key, cmp)?;
        self.delete_at(index)
    }

    pub fn delete_all_by_key<K, F>(&mut self, key: &K, cmp: F) -> Result<usize>
    where
        K: ?Sized,
        F: Fn(&[u8], &K) -> bool,
    {
        self.list
            .delete_all_by_key(key, |payload: &Box<[u8]>, key: &K| cmp(&payload[..], key))
    }

    pub fn modify_by_key<K, F>(&mut self, data: &[u8], key: &K, cmp: F) -> Result<()>
    where
        K: ?Sized,
        F: Fn(&[u8], &K) -> bool,
    {
        self.check_len(data, "modify_by_key")?;
        let index = self.find_match_index(key, cmp)?;
        self.modify_at(index, data)
    }

    /// Copies `data` over every matching payload. See
    /// [`CircularList::modify_all_by_key`] for the single pass policy.
    pub fn modify_all_by_key<K, F>(&mut self, data: &[u8], key: &K, cmp: F) -> Result<usize>
    where
        K: ?Sized,
        F: Fn(&[u8], &K) -> bool,
    {
        self.check_len(data, "modify_all_by_key")?;
        self.list.update_all_by_key(
            key,
            |payload: &Box<[u8]>, key: &K| cmp(&payload[..], key),
            |payload| payload.copy_from_slice(data),
        )
    }

    pub fn retrieve_by_key<K, F>(&self, out: &mut [u8], key: &K, cmp: F) -> Result<()>
    where
        K: ?Sized,
        F: Fn(&[u8], &K) -> bool,
    {
        self.check_len(out, "retrieve_by_key")?;
        let index = self.find_match_index(key, cmp)?;
        self.retrieve_at(index, out)
    }

    pub fn traverse(&self, mut visit: impl FnMut(&[u8])) {
        self.list.traverse(|payload| visit(&payload[..]));
    }

    pub fn traverse_backward(&self, mut visit: impl FnMut(&[u8])) {
        self.list.traverse_backward(|payload| visit(&payload[..]));
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &[u8]> + ExactSizeIterator {
        self.list.iter().map(|payload| &payload[..])
    }

    /// Removes every payload, passing each one to the destructor.
    pub fn clear(&mut self) {
        self.list.clear();
    }
}

impl std::fmt::Debug for ByteList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteList")
            .field("element_size", &self.element_size)
            .field("elements", &self.list)
            .finish()
    }
}
