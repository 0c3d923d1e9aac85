//! Singly linked list
//!
//! Owned `Box` chain from `head`. Positions are zero-based; inserting at
//! `len` appends. [`LinkedList::find_middle`] walks a slow and a fast cursor
//! (one and two links per round) and stops when the fast one falls off the
//! end, so it finds the middle in a single pass with O(1) extra space. For
//! even lengths it lands on the second of the two middle nodes.

use crate::errors::StructureError;
use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A singly linked list of owned nodes
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Insert `value` so it ends up at `position` (0..=len)
    pub fn insert(&mut self, value: T, position: usize) -> Result<(), StructureError> {
        let len = self.len;
        if position > len {
            return Err(StructureError::IndexOutOfBounds {
                index: position,
                len,
            });
        }
        let link = self
            .link_at(position)
            .ok_or(StructureError::IndexOutOfBounds {
                index: position,
                len,
            })?;
        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// Unlink and return the value at `position` (0..len)
    pub fn delete(&mut self, position: usize) -> Result<T, StructureError> {
        let len = self.len;
        let out_of_bounds = StructureError::IndexOutOfBounds {
            index: position,
            len,
        };
        if position >= len {
            return Err(out_of_bounds);
        }
        let link = self.link_at(position).ok_or(out_of_bounds.clone())?;
        let node = link.take().ok_or(out_of_bounds)?;
        let Node { value, next } = *node;
        *link = next;
        self.len -= 1;
        Ok(value)
    }

    /// Value at `position`, if any
    pub fn get(&self, position: usize) -> Option<&T> {
        self.iter().nth(position)
    }

    /// Find the middle node with slow/fast cursors. Returns its index and
    /// value, or `None` for an empty list.
    pub fn find_middle(&self) -> Option<(usize, &T)> {
        let mut slow = self.head.as_deref()?;
        let mut fast = self.head.as_deref();
        let mut index = 0;
        while let Some(ahead) = fast.and_then(|node| node.next.as_deref()) {
            slow = slow.next.as_deref()?;
            fast = ahead.next.as_deref();
            index += 1;
        }
        Some((index, &slow.value))
    }

    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Head to tail
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// The link that holds (or would hold) the node at `position`
    fn link_at(&mut self, position: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..position {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Index of the first node holding `value`
    pub fn search(&self, value: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == value)
    }

    /// Delete the first occurrence of `value`, returning where it was
    pub fn remove_value(&mut self, value: &T) -> Result<usize, StructureError>
    where
        T: fmt::Display,
    {
        let position = self
            .search(value)
            .ok_or_else(|| StructureError::not_found(value, "linked list"))?;
        self.delete(position)?;
        Ok(position)
    }
}

impl<T: Clone> LinkedList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        let mut list = LinkedList::new();
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}

/// Borrowing iterator, head to tail
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_positions() {
        let mut list: LinkedList<i64> = LinkedList::new();
        list.insert(2, 0).unwrap();
        list.insert(1, 0).unwrap();
        list.insert(3, 2).unwrap();
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
        assert_eq!(
            list.insert(9, 5),
            Err(StructureError::IndexOutOfBounds { index: 5, len: 3 })
        );
    }

    #[test]
    fn test_delete_positions() {
        let mut list: LinkedList<i64> = (1..=4).collect();
        assert_eq!(list.delete(3), Ok(4));
        assert_eq!(list.delete(0), Ok(1));
        assert_eq!(list.to_vec(), vec![2, 3]);
        assert!(list.delete(2).is_err());
    }

    #[test]
    fn test_find_middle_odd_and_even() {
        let odd: LinkedList<i64> = (1..=5).collect();
        assert_eq!(odd.find_middle(), Some((2, &3)));

        let even: LinkedList<i64> = (1..=4).collect();
        assert_eq!(even.find_middle(), Some((2, &3)));

        let single: LinkedList<i64> = std::iter::once(7).collect();
        assert_eq!(single.find_middle(), Some((0, &7)));

        let empty: LinkedList<i64> = LinkedList::new();
        assert_eq!(empty.find_middle(), None);
    }

    #[test]
    fn test_long_list_drops_without_recursion() {
        let list: LinkedList<i64> = (0..200_000).collect();
        assert_eq!(list.len(), 200_000);
    }
}
