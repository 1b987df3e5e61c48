//! Adaptable min-priority queue
//!
//! A binary heap of entry ids. Every entry remembers its slot in the heap, so a
//! [`Locator`] returned by [`AdaptablePriorityQueue::insert`] can later change
//! that entry's key in O(log n).

/// Opaque handle to an entry of an [`AdaptablePriorityQueue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locator(usize);

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
    slot: usize,
}

/// Min-heap with decrease-key through locators
#[derive(Debug, Clone)]
pub struct AdaptablePriorityQueue<K, V> {
    entries: Vec<Option<Entry<K, V>>>,
    heap: Vec<usize>,
}

impl<K: PartialOrd, V> Default for AdaptablePriorityQueue<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialOrd, V> AdaptablePriorityQueue<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            heap: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            heap: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Insert a key/value pair and return a locator for it
    pub fn insert(&mut self, key: K, value: V) -> Locator {
        let id = self.entries.len();
        let slot = self.heap.len();
        self.entries.push(Some(Entry { key, value, slot }));
        self.heap.push(id);
        self.sift_up(slot);
        Locator(id)
    }

    /// Smallest key and its value, without removing it
    pub fn min(&self) -> Option<(&K, &V)> {
        let id = *self.heap.first()?;
        self.entries[id].as_ref().map(|e| (&e.key, &e.value))
    }

    /// Remove and return the entry with the smallest key
    pub fn remove_min(&mut self) -> Option<(K, V)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let id = self.heap.pop()?;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        self.entries[id].take().map(|e| (e.key, e.value))
    }

    /// Current key of a live entry
    pub fn key(&self, locator: Locator) -> Option<&K> {
        self.entry(locator).map(|e| &e.key)
    }

    /// Value of a live entry
    pub fn value(&self, locator: Locator) -> Option<&V> {
        self.entry(locator).map(|e| &e.value)
    }

    /// Returns true while the entry has not been extracted
    pub fn contains(&self, locator: Locator) -> bool {
        self.entry(locator).is_some()
    }

    /// Replace the key of a live entry and restore heap order
    ///
    /// Intended for lowering keys; a larger key is also accepted and sifted
    /// down. Returns the previous key, or `None` if the entry was already
    /// extracted.
    pub fn decrease_key(&mut self, locator: Locator, key: K) -> Option<K> {
        let entry = self.entries.get_mut(locator.0)?.as_mut()?;
        let slot = entry.slot;
        let old = std::mem::replace(&mut entry.key, key);
        self.sift_up(slot);
        let slot = self.entry(locator).map(|e| e.slot)?;
        self.sift_down(slot);
        Some(old)
    }

    fn entry(&self, locator: Locator) -> Option<&Entry<K, V>> {
        self.entries.get(locator.0).and_then(|e| e.as_ref())
    }

    fn less(&self, a: usize, b: usize) -> bool {
        match (&self.entries[self.heap[a]], &self.entries[self.heap[b]]) {
            (Some(x), Some(y)) => x.key < y.key,
            _ => false,
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        for slot in [a, b] {
            let id = self.heap[slot];
            if let Some(entry) = self.entries[id].as_mut() {
                entry.slot = slot;
            }
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            if left >= self.heap.len() {
                break;
            }
            let right = left + 1;
            let child = if right < self.heap.len() && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, slot) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }
}
