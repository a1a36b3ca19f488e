/// Upper bound on slots reserved up front; a selector for a huge `n` grows on demand.
const PREALLOC_LIMIT: usize = 4096;

/// Keeps the `capacity` largest values offered so far.
///
/// The values live in an array-encoded binary min-heap (children of `i` at
/// `2i + 1` and `2i + 2`), so the smallest retained value is always at the
/// root and a full selector decides admission with a single comparison.
pub struct TopN<T> {
    heap: Vec<T>,
    capacity: usize,
}

impl<T: Ord> TopN<T> {
    pub fn new(capacity: usize) -> TopN<T> {
        TopN { heap: Vec::with_capacity(capacity.min(PREALLOC_LIMIT)), capacity }
    }

    /// Offers a candidate, returns `true` if it was retained.
    ///
    /// A value equal to the current minimum is admitted and takes the
    /// minimum's slot.
    pub fn offer(&mut self, value: T) -> bool {
        if self.heap.len() < self.capacity {
            self.push(value);
            return true;
        }
        match self.min() {
            Some(min) if value >= *min => {}
            _ => return false,
        }
        self.replace_min(value);
        true
    }

    /// Removes up to `limit` values, smallest first.
    pub fn drain(&mut self, limit: usize) -> Vec<T> {
        let mut drained = Vec::with_capacity(limit.min(self.heap.len()));
        while drained.len() < limit {
            match self.pop_min() {
                Some(value) => drained.push(value),
                None => break,
            }
        }
        drained
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn min(&self) -> Option<&T> {
        self.heap.first()
    }

    fn push(&mut self, value: T) {
        self.heap.push(value);
        let last = self.heap.len() - 1;
        self.sift_up(last);
    }

    fn pop_min(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop();
        self.sift_down(0);
        min
    }

    // only called on a non-empty heap
    fn replace_min(&mut self, value: T) {
        self.heap[0] = value;
        self.sift_down(0);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[parent] <= self.heap[pos] {
                break;
            }
            self.heap.swap(parent, pos);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.heap[right] < self.heap[left] { right } else { left };
            if self.heap[child] >= self.heap[pos] {
                break;
            }
            self.heap.swap(child, pos);
            pos = child;
        }
    }
}
