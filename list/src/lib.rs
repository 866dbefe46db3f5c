//! SinglyLinkedList: read-only traversal over a chain of owned nodes.
//!
//! Every [`Node`] owns its successor through `Option<Box<Node<T>>>`, and the list owns
//! the head. Chains are built by the caller, node by node, and handed to
//! [`SinglyLinkedList::from_head`]. The list itself only walks the chain:
//!
//! | Operation | Cost | Empty / short chain |
//! |-----------|------|---------------------|
//! | [`head`](SinglyLinkedList::head) | O(1) | `None` |
//! | [`tail`](SinglyLinkedList::tail) | O(size) | `None` |
//! | [`at`](SinglyLinkedList::at) | O(index) | `None` |
//! | [`size`](SinglyLinkedList::size) | O(size) | `0` |
//!
//! # Example
//!
//! ```
//! use shiny_list::{Node, SinglyLinkedList};
//!
//! let chain = Node::with_next(1, Node::with_next(2, Node::new(3)));
//! let list = SinglyLinkedList::from_head(Some(chain));
//!
//! assert_eq!(list.size(), 3);
//! assert_eq!(list.at(1).map(|node| node.data), Some(2));
//! assert_eq!(list.tail().map(|node| node.data), Some(3));
//! assert!(list.at(5).is_none());
//! ```
//!
//! # Gotchas
//!
//! - There is no insert, remove or append. To change the shape of a chain, take it
//!   back with [`SinglyLinkedList::into_head`], edit the nodes, and wrap it again.
//! - Dropping, cloning and comparing walk the chain in a loop, so arbitrarily long
//!   chains are fine, including a bare chain returned by `into_head`.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

use alloc::boxed::Box;
use core::{fmt, iter::FusedIterator};

/// One link of the chain.
///
/// Dropping, cloning, comparing and printing a node all cover the nodes after it, and
/// all of them walk the chain in a loop rather than recursing.
pub struct Node<T> {
    pub data: T,
    pub next: Option<Box<Node<T>>>,
}

static_assertions::assert_eq_size!(Option<Box<Node<u64>>>, usize);

impl<T> Node<T> {
    /// A terminal node.
    pub fn new(data: T) -> Box<Self> {
        Box::new(Node { data, next: None })
    }

    /// A node followed by `next`.
    pub fn with_next(data: T, next: Box<Node<T>>) -> Box<Self> {
        Box::new(Node {
            data,
            next: Some(next),
        })
    }

    /// This node and every node after it.
    pub fn chain(&self) -> Nodes<'_, T> {
        Nodes { next: Some(self) }
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        // Unlink one successor at a time; the default recursive drop can overflow the stack.
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        let mut head = Node {
            data: self.data.clone(),
            next: None,
        };
        let mut tail = &mut head.next;
        for node in self.chain().skip(1) {
            tail = &mut tail.insert(Node::new(node.data.clone())).next;
        }
        head
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.chain()
            .map(|node| &node.data)
            .eq(other.chain().map(|node| &node.data))
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.chain().map(|node| &node.data))
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct SinglyLinkedList<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        SinglyLinkedList { head: None }
    }

    /// Takes ownership of an externally built chain.
    pub fn from_head(head: Option<Box<Node<T>>>) -> Self {
        SinglyLinkedList { head }
    }

    /// Gives the chain back, leaving nothing behind.
    pub fn into_head(self) -> Option<Box<Node<T>>> {
        self.head
    }

    #[inline]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    #[inline]
    pub fn head_mut(&mut self) -> Option<&mut Node<T>> {
        self.head.as_deref_mut()
    }

    /// The node whose `next` is `None`.
    pub fn tail(&self) -> Option<&Node<T>> {
        self.nodes().last()
    }

    pub fn tail_mut(&mut self) -> Option<&mut Node<T>> {
        let mut cursor = self.head.as_deref_mut()?;
        while cursor.next.is_some() {
            cursor = cursor.next.as_deref_mut()?;
        }
        Some(cursor)
    }

    /// The node `index` links past the head.
    pub fn at(&self, index: usize) -> Option<&Node<T>> {
        let found = self.nodes().nth(index);
        if found.is_none() {
            tracing::trace!(index, "chain ended before index");
        }
        found
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut cursor = self.head.as_deref_mut();
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = node.next.as_deref_mut(),
                None => break,
            }
        }
        if cursor.is_none() {
            tracing::trace!(index, "chain ended before index");
        }
        cursor
    }

    /// Counts nodes by walking the whole chain.
    pub fn size(&self) -> usize {
        self.nodes().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Every node, head first.
    pub fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            next: self.head.as_deref(),
        }
    }

    /// Every value, head first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: self.nodes(),
        }
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Walks the nodes of a chain. Created by [`SinglyLinkedList::nodes`].
#[derive(Debug)]
pub struct Nodes<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<&'a Node<T>> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node)
    }
}

impl<T> FusedIterator for Nodes<'_, T> {}

impl<T> Clone for Nodes<'_, T> {
    fn clone(&self) -> Self {
        Nodes { next: self.next }
    }
}

/// Walks the values of a chain. Created by [`SinglyLinkedList::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.nodes.next().map(|node| &node.data)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes.clone(),
        }
    }
}
