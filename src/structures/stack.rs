//! LIFO stack
//!
//! Backed by a `Vec` whose last element is the top. Besides push/pop/peek it
//! carries the recursive reversal used to show call-stack unwinding:
//! pop everything on the way down, insert each popped value at the bottom on
//! the way back up.

use crate::errors::StructureError;

/// A LIFO stack, bottom at index 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Push a value on top, O(1)
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Remove and return the top value
    pub fn pop(&mut self) -> Result<T, StructureError> {
        self.items
            .pop()
            .ok_or(StructureError::empty("stack", "pop"))
    }

    /// Look at the top value without removing it
    pub fn peek(&self) -> Result<&T, StructureError> {
        self.items
            .last()
            .ok_or(StructureError::empty("stack", "peek"))
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

    /// Items from bottom to top (for UI display)
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Reverse in place by recursion: pop the top, reverse the rest, then
    /// put the popped value at the bottom. Depth is linear and cost quadratic
    /// in the length; the reverse command refuses stacks longer than
    /// [`MAX_RECURSIVE_REVERSE`](crate::config::constants::MAX_RECURSIVE_REVERSE).
    pub fn reverse_recursive(&mut self) {
        if let Ok(top) = self.pop() {
            self.reverse_recursive();
            self.insert_at_bottom(top);
        }
    }

    fn insert_at_bottom(&mut self, value: T) {
        match self.pop() {
            Ok(top) => {
                self.insert_at_bottom(value);
                self.push(top);
            }
            Err(_) => self.push(value),
        }
    }
}

impl<T: Clone> Stack<T> {
    /// A new stack with the element order reversed; `self` is untouched
    pub fn reversed(&self) -> Stack<T> {
        let mut copy = self.clone();
        copy.reverse_recursive();
        copy
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Values are pushed in iteration order, so the last one ends up on top
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}
