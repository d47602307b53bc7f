//! Linked-list exercises: nth-from-end removal and sorted merge.
//!
//! Both operations relink existing nodes instead of copying them. Under
//! single ownership a splice is a local rewrite of one `next` link, so
//! every node except the removed one survives by reference.

use tracing::debug;

use kataforge_core::{KataforgeError, List, ListNode, Result};

/// Removes the nth node counted from the end of the list (1-based).
///
/// `n = 1` removes the last node, `n = len` removes the head. A sentinel
/// node ahead of the head makes head removal the same splice as any
/// interior removal. Positions outside `1..=len` (including `n = 0`) are
/// an [`IndexOutOfRange`](KataforgeError::IndexOutOfRange) error.
///
/// # Examples
///
/// ```
/// use kataforge::{remove_nth_from_end, ListNode};
///
/// let list = ListNode::from_slice(&[1, 2, 3, 4, 5]);
/// let list = remove_nth_from_end(list, 2)?;
/// assert_eq!(ListNode::to_vec(&list), vec![1, 2, 3, 5]);
/// # Ok::<(), kataforge::KataforgeError>(())
/// ```
pub fn remove_nth_from_end(head: List, n: usize) -> Result<List> {
    let len = ListNode::len(&head);
    if n == 0 || n > len {
        return Err(KataforgeError::IndexOutOfRange { index: n, len });
    }

    let mut sentinel = Box::new(ListNode::new(0));
    sentinel.next = head;

    // Walk to the node just before the one to remove. The walk takes
    // len - n steps from the sentinel, so it never runs off the chain.
    let mut before = &mut sentinel;
    for _ in 0..len - n {
        before = match before.next.as_mut() {
            Some(next) => next,
            None => unreachable!("walk is bounded by the list length"),
        };
    }
    let removed = before.next.take();
    before.next = removed.and_then(|mut node| node.next.take());

    debug!(event = "remove_nth_done", n, len);
    Ok(sentinel.next.take())
}

/// Merges two individually sorted lists into one sorted list.
///
/// Nodes are relinked, never copied. When values tie, the first list's
/// node is placed before the second's, which keeps the merge
/// deterministic. An empty argument is an identity case: the other list
/// is returned as-is.
///
/// # Examples
///
/// ```
/// use kataforge::{merge_sorted, ListNode};
///
/// let a = ListNode::from_slice(&[1, 2, 4]);
/// let b = ListNode::from_slice(&[1, 3, 4]);
/// let merged = merge_sorted(a, b);
/// assert_eq!(ListNode::to_vec(&merged), vec![1, 1, 2, 3, 4, 4]);
/// ```
pub fn merge_sorted(mut a: List, mut b: List) -> List {
    let mut head: List = None;
    let mut tail = &mut head;

    loop {
        match (a, b) {
            (None, rest) | (rest, None) => {
                *tail = rest;
                break;
            }
            (Some(mut x), Some(mut y)) => {
                // Ties take the left node first.
                let node = if x.val <= y.val {
                    a = x.next.take();
                    b = Some(y);
                    x
                } else {
                    b = y.next.take();
                    a = Some(x);
                    y
                };
                tail = &mut tail.insert(node).next;
            }
        }
    }

    head
}

/// Recursive variant of [`merge_sorted`].
///
/// Recursion depth equals the length of the merged prefix, so very long
/// inputs can exhaust the stack; the iterative form is the primary
/// contract and this one exists as the textbook alternative.
pub fn merge_sorted_recursive(a: List, b: List) -> List {
    match (a, b) {
        (None, rest) | (rest, None) => rest,
        (Some(mut x), Some(mut y)) => {
            if x.val <= y.val {
                let rest = x.next.take();
                x.next = merge_sorted_recursive(rest, Some(y));
                Some(x)
            } else {
                let rest = y.next.take();
                y.next = merge_sorted_recursive(Some(x), rest);
                Some(y)
            }
        }
    }
}
