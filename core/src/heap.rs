use crate::error::Error;
use crate::graph::NodeId;

/// Slot sentinel for nodes that are not currently in the heap.
const NO_SLOT: usize = usize::MAX;

/// Binary min-heap over node ids ordered by a `u32` priority, with a
/// node → heap-slot table so an enqueued node's priority can be lowered
/// in O(log n).
///
/// The slot table is updated on every swap, not just on push/pop; that
/// is the invariant decrease-key depends on. Popped nodes have their slot
/// cleared so a later decrease on them is caught instead of silently
/// corrupting the heap.
pub struct IndexedHeap {
    /// (priority, node), heap-ordered by priority.
    entries: Vec<(u32, NodeId)>,
    /// node id → index into `entries`, or `NO_SLOT`.
    slots: Vec<usize>,
}

impl IndexedHeap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            slots: Vec::new(),
        }
    }

    /// Pre-allocate for `node_count` dense node ids.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            entries: Vec::with_capacity(node_count),
            slots: vec![NO_SLOT; node_count],
        }
    }

    /// Insert a node at the given priority. Each node may be in the heap
    /// at most once.
    pub fn push(&mut self, node: NodeId, priority: u32) {
        if node >= self.slots.len() {
            self.slots.resize(node + 1, NO_SLOT);
        }
        debug_assert_eq!(self.slots[node], NO_SLOT, "node {} pushed twice", node);
        let slot = self.entries.len();
        self.entries.push((priority, node));
        self.slots[node] = slot;
        self.sift_up(slot);
    }

    /// Remove and return the node with the smallest priority. Ties are
    /// broken arbitrarily, but every element is popped exactly once.
    pub fn pop_min(&mut self) -> Option<(NodeId, u32)> {
        let last = self.entries.len().checked_sub(1)?;
        self.entries.swap(0, last);
        let (priority, node) = self.entries.pop()?;
        self.slots[node] = NO_SLOT;
        if let Some(&(_, top)) = self.entries.first() {
            self.slots[top] = 0;
            self.sift_down(0);
        }
        Some((node, priority))
    }

    /// Lower an enqueued node's priority and restore heap order by sifting
    /// up (priority only ever decreases, so sifting down is never needed).
    ///
    /// Raising a priority through this operation is a contract violation
    /// and fails with `InvalidPriority`; so does addressing a node that is
    /// no longer in the heap.
    pub fn decrease(&mut self, node: NodeId, priority: u32) -> Result<(), Error> {
        let slot = match self.slots.get(node) {
            Some(&slot) if slot != NO_SLOT => slot,
            _ => return Err(Error::NotQueued(node)),
        };
        let current = self.entries[slot].0;
        if priority > current {
            return Err(Error::InvalidPriority {
                node,
                current,
                requested: priority,
            });
        }
        self.entries[slot].0 = priority;
        self.sift_up(slot);
        Ok(())
    }

    /// Whether the node is currently in the heap.
    pub fn contains(&self, node: NodeId) -> bool {
        self.slots.get(node).is_some_and(|&slot| slot != NO_SLOT)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.entries[parent].0 <= self.entries[slot].0 {
                break;
            }
            self.entries.swap(parent, slot);
            self.slots[self.entries[slot].1] = slot;
            slot = parent;
        }
        self.slots[self.entries[slot].1] = slot;
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            if left >= self.entries.len() {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < self.entries.len() && self.entries[right].0 < self.entries[left].0 {
                child = right;
            }
            if self.entries[slot].0 <= self.entries[child].0 {
                break;
            }
            self.entries.swap(slot, child);
            self.slots[self.entries[slot].1] = slot;
            slot = child;
        }
        self.slots[self.entries[slot].1] = slot;
    }
}

impl Default for IndexedHeap {
    fn default() -> Self {
        Self::new()
    }
}
