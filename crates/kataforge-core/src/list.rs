//! Singly linked list node.
//!
//! The list exercises (nth-from-end removal, sorted merge) operate on a
//! minimal owned chain: each node uniquely owns its successor, so dropping
//! a head drops the whole list. There is no length cache and no tail
//! pointer; every list is exactly the transitive closure of `next` links
//! from a head.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A list is an optional owned head node; `None` is the empty list.
pub type List = Option<Box<ListNode>>;

/// A node in a singly linked list of integers.
///
/// # Examples
///
/// ```
/// use kataforge_core::ListNode;
///
/// let list = ListNode::from_slice(&[1, 2, 3]);
/// assert_eq!(ListNode::len(&list), 3);
/// assert_eq!(ListNode::to_vec(&list), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ListNode {
    /// Value stored in this node.
    pub val: i64,
    /// The rest of the list, owned by this node.
    pub next: List,
}

impl ListNode {
    /// Creates a detached node with no successor.
    #[inline]
    pub const fn new(val: i64) -> Self {
        ListNode { val, next: None }
    }

    /// Builds a list from a slice, preserving order.
    pub fn from_slice(values: &[i64]) -> List {
        let mut head = None;
        for &val in values.iter().rev() {
            head = Some(Box::new(ListNode { val, next: head }));
        }
        head
    }

    /// Collects the values of a list into a vector, preserving order.
    pub fn to_vec(list: &List) -> Vec<i64> {
        let mut out = Vec::new();
        let mut cursor = list;
        while let Some(node) = cursor {
            out.push(node.val);
            cursor = &node.next;
        }
        out
    }

    /// Returns the number of nodes in a list.
    pub fn len(list: &List) -> usize {
        let mut count = 0;
        let mut cursor = list;
        while let Some(node) = cursor {
            count += 1;
            cursor = &node.next;
        }
        count
    }
}

impl Drop for ListNode {
    // Unlink iteratively; the compiler-generated drop recurses once per
    // node, which overflows the stack on long chains.
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}
