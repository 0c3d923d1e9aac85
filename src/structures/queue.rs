//! FIFO queues
//!
//! - [`Queue`]: a plain ring-buffer queue
//! - [`TwoStackQueue`]: FIFO built from an inbox and an outbox [`Stack`].
//!   Values are pushed onto the inbox; the outbox is refilled (reversing the
//!   inbox) only when it runs dry, giving amortized O(1) dequeue.
//!
//! Both expose a pair of `pub(crate)` helpers that exactly invert
//! enqueue/dequeue for the command history.

use super::stack::Stack;
use crate::errors::StructureError;
use std::collections::VecDeque;

/// FIFO queue, front at index 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    /// Add a value at the rear
    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Remove and return the front value
    pub fn dequeue(&mut self) -> Result<T, StructureError> {
        self.items
            .pop_front()
            .ok_or(StructureError::empty("queue", "dequeue"))
    }

    pub fn front(&self) -> Result<&T, StructureError> {
        self.items
            .front()
            .ok_or(StructureError::empty("queue", "read the front"))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Front to rear
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Undo an enqueue: drop the rear value
    pub(crate) fn retract_rear(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    /// Undo a dequeue: put the value back in front
    pub(crate) fn restore_front(&mut self, value: T) {
        self.items.push_front(value);
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

/// FIFO queue made of two LIFO stacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoStackQueue<T> {
    inbox: Stack<T>,
    outbox: Stack<T>,
}

impl<T> TwoStackQueue<T> {
    pub fn new() -> Self {
        TwoStackQueue {
            inbox: Stack::new(),
            outbox: Stack::new(),
        }
    }

    pub fn enqueue(&mut self, value: T) {
        self.inbox.push(value);
    }

    /// Remove and return the oldest value, refilling the outbox first if it
    /// is empty
    pub fn dequeue(&mut self) -> Result<T, StructureError> {
        if self.is_empty() {
            return Err(StructureError::empty("two-stack queue", "dequeue"));
        }
        self.transfer();
        self.outbox.pop()
    }

    /// Move every inbox value onto the outbox, but only when the outbox is
    /// empty. Returns how many values moved.
    pub fn transfer(&mut self) -> usize {
        if !self.outbox.is_empty() {
            return 0;
        }
        let mut moved = 0;
        while let Ok(value) = self.inbox.pop() {
            self.outbox.push(value);
            moved += 1;
        }
        moved
    }

    /// Oldest value without removing it
    pub fn front(&self) -> Result<&T, StructureError> {
        match self.outbox.peek() {
            Ok(value) => Ok(value),
            Err(_) => self
                .inbox
                .items()
                .first()
                .ok_or(StructureError::empty("two-stack queue", "read the front")),
        }
    }

    pub fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    pub fn clear(&mut self) {
        self.inbox.clear();
        self.outbox.clear();
    }

    pub fn inbox(&self) -> &Stack<T> {
        &self.inbox
    }

    pub fn outbox(&self) -> &Stack<T> {
        &self.outbox
    }

    /// Front to rear: the outbox top-down, then the inbox bottom-up
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.outbox
            .items()
            .iter()
            .rev()
            .chain(self.inbox.items().iter())
    }

    /// Undo an enqueue: the enqueued value is still on top of the inbox
    pub(crate) fn retract_rear(&mut self) -> Option<T> {
        self.inbox.pop().ok()
    }

    /// Undo a dequeue. If the dequeue refilled the outbox, the refill is
    /// reversed too so the inbox/outbox split matches the original exactly.
    pub(crate) fn restore_front(&mut self, value: T, transferred: bool) {
        self.outbox.push(value);
        if transferred {
            while let Ok(moved) = self.outbox.pop() {
                self.inbox.push(moved);
            }
        }
    }
}

impl<T> Default for TwoStackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for TwoStackQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        TwoStackQueue {
            inbox: iter.into_iter().collect(),
            outbox: Stack::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_only_when_outbox_empty() {
        let mut queue: TwoStackQueue<i64> = (1..=3).collect();
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.outbox().items(), &[3, 2]);

        queue.enqueue(4);
        assert_eq!(queue.transfer(), 0);
        assert_eq!(queue.inbox().items(), &[4]);
    }

    #[test]
    fn test_restore_front_undoes_transfer() {
        let mut queue: TwoStackQueue<i64> = (1..=3).collect();
        let before = queue.clone();
        let value = queue.dequeue().unwrap();
        queue.restore_front(value, true);
        assert_eq!(queue, before);
    }

    #[test]
    fn test_front_reads_inbox_bottom() {
        let queue: TwoStackQueue<i64> = (7..=9).collect();
        assert_eq!(queue.front(), Ok(&7));
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![7, 8, 9]);
    }
}
