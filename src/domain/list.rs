//! Singly linked list and the queue built on top of it

use std::fmt::{self, Display};

use crate::domain::tree::ABSENT;

/// A list node: a value and an optional link to the next node.
///
/// The same node type serves two usages: [`LinkedList::add_to_end`] is purely
/// functional and leaves the receiver untouched, while [`Queue::add`] links
/// new nodes onto the tail in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedList<T> {
    pub first: T,
    pub rest: Option<Box<LinkedList<T>>>,
}

impl<T> LinkedList<T> {
    pub fn new(first: T, rest: Option<LinkedList<T>>) -> Self {
        Self {
            first,
            rest: rest.map(Box::new),
        }
    }

    pub fn single(first: T) -> Self {
        Self::new(first, None)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: Some(self) }
    }

    /// Links `value` after the last node, walking from `self` each time.
    fn link_last(&mut self, value: T) {
        let mut cursor = &mut self.rest;
        while let Some(node) = cursor {
            cursor = &mut node.rest;
        }
        *cursor = Some(Box::new(LinkedList::single(value)));
    }
}

impl<T: Clone> LinkedList<T> {
    /// Returns a new list with `value` appended; every node on the way is rebuilt.
    pub fn add_to_end(&self, value: T) -> LinkedList<T> {
        match &self.rest {
            None => LinkedList::new(self.first.clone(), Some(LinkedList::single(value))),
            Some(rest) => LinkedList::new(self.first.clone(), Some(rest.add_to_end(value))),
        }
    }
}

impl<T: Display> LinkedList<T> {
    /// Renders as `v1 v2 ... vn .`.
    pub fn show(&self) -> String {
        match &self.rest {
            None => format!("{} {}", self.first, ABSENT),
            Some(rest) => format!("{} {}", self.first, rest.show()),
        }
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a LinkedList<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.rest.as_deref();
            &node.first
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// FIFO queue backed by a linked list head. No tail pointer is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    data: Option<LinkedList<T>>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { data: None }
    }

    /// Appends at the back, walking from the head to the last node.
    pub fn add(&mut self, value: T) {
        match &mut self.data {
            None => self.data = Some(LinkedList::single(value)),
            Some(head) => head.link_last(value),
        }
    }

    pub fn front(&self) -> Option<&T> {
        self.data.as_ref().map(|head| &head.first)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.data.as_ref(),
        }
    }
}

impl<T: Display> Queue<T> {
    /// Renders as `front: v1 ... vn .`, or `front: .` when empty.
    pub fn show(&self) -> String {
        match &self.data {
            None => format!("front: {}", ABSENT),
            Some(head) => format!("front: {}", head.show()),
        }
    }
}

impl<T: Display> Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.show())
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}
