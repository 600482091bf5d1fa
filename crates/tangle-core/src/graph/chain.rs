//! Arena-backed adjacency chains
//!
//! Each vertex owns one `EdgeChain`: a singly linked list of edge entries
//! stored in a slot arena and threaded by slot index rather than by
//! pointer. Insertion is at the head, so iteration yields entries in
//! reverse insertion order. Slots freed by unlinking are recycled through a
//! free list.

use crate::error::Result;
use crate::graph::types::{VertexId, Weight};

/// Index of a slot within one chain's arena
type SlotIndex = u32;

/// One adjacency entry: the far endpoint of an edge, its weight, and the
/// payload attached to this endpoint
#[derive(Debug)]
pub(crate) struct EdgeNode<P> {
    pub(crate) neighbor: VertexId,
    pub(crate) weight: Weight,
    pub(crate) payload: P,
    next: Option<SlotIndex>,
}

/// Singly linked chain of edge entries backed by a slot arena
#[derive(Debug)]
pub(crate) struct EdgeChain<P> {
    slots: Vec<Option<EdgeNode<P>>>,
    head: Option<SlotIndex>,
    free: Vec<SlotIndex>,
    len: usize,
}

impl<P> EdgeChain<P> {
    pub(crate) fn new() -> Self {
        EdgeChain {
            slots: Vec::new(),
            head: None,
            free: Vec::new(),
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reserve room for `additional` entries so the matching `push_front`
    /// calls cannot fail for lack of memory. Recycled slots count toward
    /// the reservation.
    pub(crate) fn reserve_slots(&mut self, additional: usize) -> Result<()> {
        let needed = additional.saturating_sub(self.free.len());
        if needed > 0 {
            self.slots.try_reserve(needed)?;
        }
        Ok(())
    }

    /// Head-insert an entry. Infallible once `reserve_slots` has succeeded.
    pub(crate) fn push_front(&mut self, neighbor: VertexId, weight: Weight, payload: P) {
        let node = EdgeNode {
            neighbor,
            weight,
            payload,
            next: self.head,
        };
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index as usize] = Some(node);
                index
            }
            None => {
                let index = self.slots.len() as SlotIndex;
                self.slots.push(Some(node));
                index
            }
        };
        self.head = Some(index);
        self.len += 1;
    }

    /// Unlink and return the first entry whose far endpoint is `neighbor`.
    ///
    /// The cursor advances on every iteration, so a scan for an absent
    /// neighbor terminates at the end of the chain.
    pub(crate) fn unlink(&mut self, neighbor: VertexId) -> Option<EdgeNode<P>> {
        let mut prev: Option<SlotIndex> = None;
        let mut cursor = self.head;

        while let Some(index) = cursor {
            let matches = match &self.slots[index as usize] {
                Some(node) => node.neighbor == neighbor,
                None => false,
            };

            if matches {
                let node = self.slots[index as usize].take()?;
                match prev {
                    Some(prev_index) => {
                        if let Some(prev_node) = self.slots[prev_index as usize].as_mut() {
                            prev_node.next = node.next;
                        }
                    }
                    None => self.head = node.next,
                }
                self.free.push(index);
                self.len -= 1;
                return Some(node);
            }

            prev = cursor;
            cursor = match &self.slots[index as usize] {
                Some(node) => node.next,
                None => None,
            };
        }

        None
    }

    pub(crate) fn contains(&self, neighbor: VertexId) -> bool {
        self.iter().any(|node| node.neighbor == neighbor)
    }

    /// Iterate entries in chain order (reverse insertion order)
    pub(crate) fn iter(&self) -> ChainIter<'_, P> {
        ChainIter {
            chain: self,
            cursor: self.head,
        }
    }
}

pub(crate) struct ChainIter<'a, P> {
    chain: &'a EdgeChain<P>,
    cursor: Option<SlotIndex>,
}

impl<'a, P> Iterator for ChainIter<'a, P> {
    type Item = &'a EdgeNode<P>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let node = self.chain.slots[index as usize].as_ref()?;
        self.cursor = node.next;
        Some(node)
    }
}
