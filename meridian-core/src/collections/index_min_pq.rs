use super::StructureError;

const NAME: &str = "priority queue";

/// Indexed min-priority queue over the dense key space `[0, capacity)`.
///
/// A binary heap of indices plus an inverse map from index to heap
/// position, so the priority of a queued index can be changed in
/// logarithmic time.
#[derive(Debug, Clone)]
pub struct IndexMinPQ<K> {
    /// Priority of each index, `None` when not queued
    keys: Vec<Option<K>>,
    /// Heap order, holds indices
    heap: Vec<usize>,
    /// Heap position of each index, `None` when not queued
    positions: Vec<Option<usize>>,
}

impl<K: PartialOrd> IndexMinPQ<K> {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut keys = Vec::with_capacity(capacity);
        keys.resize_with(capacity, || None);
        Self {
            keys,
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    pub fn size(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.positions.get(index).is_some_and(Option::is_some)
    }

    /// Priority of a queued index.
    pub fn key_of(&self, index: usize) -> Option<&K> {
        self.keys.get(index).and_then(Option::as_ref)
    }

    pub fn insert(&mut self, index: usize, key: K) -> Result<(), StructureError> {
        self.check_index(index)?;
        if self.contains(index) {
            return Err(StructureError::AlreadyQueued(index));
        }

        let position = self.heap.len();
        self.heap.push(index);
        self.positions[index] = Some(position);
        self.keys[index] = Some(key);
        self.swim(position);
        Ok(())
    }

    pub fn min_index(&self) -> Result<usize, StructureError> {
        self.heap.first().copied().ok_or(StructureError::Empty(NAME))
    }

    pub fn min_key(&self) -> Result<&K, StructureError> {
        let index = self.min_index()?;
        self.key_of(index).ok_or(StructureError::Empty(NAME))
    }

    /// Removes the minimum entry and returns its index.
    pub fn del_min(&mut self) -> Result<usize, StructureError> {
        let min = self.min_index()?;
        let last = self.heap.len() - 1;

        self.exchange(0, last);
        self.heap.pop();
        self.positions[min] = None;
        self.keys[min] = None;

        if !self.heap.is_empty() {
            self.sink(0);
        }
        Ok(min)
    }

    /// Replaces the priority of a queued index, moving it up or down as needed.
    pub fn change_key(&mut self, index: usize, key: K) -> Result<(), StructureError> {
        self.check_index(index)?;
        let position = self.positions[index].ok_or(StructureError::NotQueued(index))?;

        self.keys[index] = Some(key);
        self.swim(position);
        if let Some(position) = self.positions[index] {
            self.sink(position);
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), StructureError> {
        if index < self.capacity() {
            Ok(())
        } else {
            Err(StructureError::IndexOutOfRange {
                index,
                capacity: self.capacity(),
            })
        }
    }

    fn greater(&self, a: usize, b: usize) -> bool {
        match (&self.keys[self.heap[a]], &self.keys[self.heap[b]]) {
            (Some(left), Some(right)) => left > right,
            _ => false,
        }
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a]] = Some(a);
        self.positions[self.heap[b]] = Some(b);
    }

    fn swim(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.greater(parent, position) {
                break;
            }
            self.exchange(parent, position);
            position = parent;
        }
    }

    fn sink(&mut self, mut position: usize) {
        let len = self.heap.len();
        loop {
            let mut child = 2 * position + 1;
            if child >= len {
                break;
            }
            if child + 1 < len && self.greater(child, child + 1) {
                child += 1;
            }
            if !self.greater(position, child) {
                break;
            }
            self.exchange(position, child);
            position = child;
        }
    }
}
