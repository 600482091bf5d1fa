//! FIFO queue collaborator for the traversal engine
//!
//! The traversal engine depends only on the `FifoQueue` contract, not on
//! any concrete queue representation. `VertexQueue` is the default
//! collaborator; `std::collections::VecDeque` conforms as well and can be
//! substituted at the call site.

use std::collections::VecDeque;

/// Minimal first-in-first-out contract
pub trait FifoQueue<T> {
    fn enqueue(&mut self, item: T);
    fn dequeue(&mut self) -> Option<T>;
    fn is_empty(&self) -> bool;
}

/// Growable ring-buffer FIFO
#[derive(Debug)]
pub struct VertexQueue<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> VertexQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        VertexQueue {
            slots,
            head: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move the live span into a larger arena starting at slot 0
    fn grow(&mut self) {
        let new_capacity = (self.slots.len() * 2).max(4);
        let mut slots = Vec::new();
        slots.resize_with(new_capacity, || None);
        for offset in 0..self.len {
            let index = (self.head + offset) % self.slots.len();
            slots[offset] = self.slots[index].take();
        }
        self.slots = slots;
        self.head = 0;
    }
}

impl<T> Default for VertexQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FifoQueue<T> for VertexQueue<T> {
    fn enqueue(&mut self, item: T) {
        if self.len == self.slots.len() {
            self.grow();
        }
        let tail = (self.head + self.len) % self.slots.len();
        self.slots[tail] = Some(item);
        self.len += 1;
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        item
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> FifoQueue<T> for VecDeque<T> {
    fn enqueue(&mut self, item: T) {
        self.push_back(item);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}
