//! Doubly-linked, non-circular list over a slotmap arena, addressed by
//! copyable [`NodeRef`] handles.
//!
//! The original convention made a node pointer double as the list handle:
//! every mutating call returned the possibly-changed head, and callers had
//! to thread that return value as the up-to-date list. This module keeps
//! the head-threading contract but moves node storage into an arena with
//! generational keys, so a handle to a freed node is detectably stale
//! instead of dangling, and a reused slot is never aliased by an old
//! handle.
//!
//! Ownership: the arena owns node storage (allocated on append, freed on
//! unlink); the contained value belongs to the caller and is returned by
//! [`delete_link`](NodeList::delete_link). Dropping the list drops any
//! values still linked.

use slotmap::{DefaultKey, SlotMap};

/// Copyable handle to one list node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeRef(DefaultKey);

impl NodeRef {
    fn new(key: DefaultKey) -> Self {
        NodeRef(key)
    }

    fn raw(self) -> DefaultKey {
        self.0
    }
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<DefaultKey>,
    next: Option<DefaultKey>,
}

/// Arena of doubly-linked nodes. One arena can hold several independent
/// chains; each chain is identified by the head handle its operations
/// return.
pub struct NodeList<T> {
    nodes: SlotMap<DefaultKey, Node<T>>,
}

impl<T> NodeList<T> {
    pub fn new() -> Self {
        NodeList {
            nodes: SlotMap::with_key(),
        }
    }

    /// Number of live nodes in the arena, across all chains.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends `value` at the tail of the chain containing `list`.
    ///
    /// With `list == None` the new node becomes the whole list and its
    /// handle is returned. Otherwise this walks `next` links from the
    /// given node to the current tail (an O(length) traversal), links the
    /// new node after it, and returns `list` unchanged. Callers must use
    /// the returned handle as the up-to-date list handle.
    ///
    /// # Panics
    /// Panics if `list` is a stale handle.
    pub fn append(&mut self, list: Option<NodeRef>, value: T) -> NodeRef {
        let Some(anchor) = list else {
            let key = self.nodes.insert(Node {
                value,
                prev: None,
                next: None,
            });
            return NodeRef::new(key);
        };

        assert!(
            self.nodes.contains_key(anchor.raw()),
            "append: stale list handle"
        );

        let mut tail = anchor.raw();
        while let Some(next) = self.nodes[tail].next {
            tail = next;
        }

        let key = self.nodes.insert(Node {
            value,
            prev: Some(tail),
            next: None,
        });
        self.nodes[tail].next = Some(key);
        anchor
    }

    /// Rewinds via `prev` links from `node` to the true head. Tolerant of
    /// being passed any node of the chain, not just the current head.
    /// Returns `None` iff the handle is stale.
    pub fn first(&self, node: NodeRef) -> Option<NodeRef> {
        let mut cur = node.raw();
        self.nodes.get(cur)?;
        while let Some(prev) = self.nodes[cur].prev {
            cur = prev;
        }
        Some(NodeRef::new(cur))
    }

    /// Unlinks `node` from its chain, repairing its neighbors' links, and
    /// frees the node. Returns the new head (the former `next` if `node`
    /// was the passed head, otherwise `list` unchanged) together with the
    /// value the node held.
    ///
    /// `node == None` is a no-op returning `(Some(list), None)`; a stale
    /// `node` is treated as already absent the same way.
    ///
    /// # Panics
    /// Panics if `list` is a stale handle.
    pub fn delete_link(
        &mut self,
        list: NodeRef,
        node: Option<NodeRef>,
    ) -> (Option<NodeRef>, Option<T>) {
        assert!(
            self.nodes.contains_key(list.raw()),
            "delete_link: stale list handle"
        );

        let Some(target) = node else {
            return (Some(list), None);
        };
        let Some(removed) = self.nodes.remove(target.raw()) else {
            return (Some(list), None);
        };

        if let Some(prev) = removed.prev {
            self.nodes[prev].next = removed.next;
        }
        if let Some(next) = removed.next {
            self.nodes[next].prev = removed.prev;
        }

        let head = if target == list {
            removed.next.map(NodeRef::new)
        } else {
            Some(list)
        };
        (head, Some(removed.value))
    }

    pub fn get(&self, node: NodeRef) -> Option<&T> {
        self.nodes.get(node.raw()).map(|n| &n.value)
    }

    pub fn get_mut(&mut self, node: NodeRef) -> Option<&mut T> {
        self.nodes.get_mut(node.raw()).map(|n| &mut n.value)
    }

    /// Handle of the node after `node`, if both exist.
    pub fn next(&self, node: NodeRef) -> Option<NodeRef> {
        self.nodes.get(node.raw())?.next.map(NodeRef::new)
    }

    /// Handle of the node before `node`, if both exist.
    pub fn prev(&self, node: NodeRef) -> Option<NodeRef> {
        self.nodes.get(node.raw())?.prev.map(NodeRef::new)
    }

    /// Walks `next` links from `list`, yielding each value. `None` or a
    /// stale starting handle yields an empty iterator.
    pub fn iter(&self, list: Option<NodeRef>) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cur: list.map(NodeRef::raw),
        }
    }
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        NodeList::new()
    }
}

/// Iterator over the values of one chain, front to back.
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<DefaultKey, Node<T>>,
    cur: Option<DefaultKey>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let key = self.cur?;
        let node = self.nodes.get(key)?;
        self.cur = node.next;
        Some(&node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &NodeList<i32>, head: Option<NodeRef>) -> Vec<i32> {
        list.iter(head).copied().collect()
    }

    /// Invariant: appending to an empty list returns the new head and the
    /// head handle stays stable across later appends.
    #[test]
    fn append_threads_head() {
        let mut list = NodeList::new();
        let head = list.append(None, 1);
        let head2 = list.append(Some(head), 2);
        let head3 = list.append(Some(head2), 3);
        assert_eq!(head, head2);
        assert_eq!(head, head3);
        assert_eq!(collect(&list, Some(head)), [1, 2, 3]);
        assert_eq!(list.len(), 3);
    }

    /// Invariant: append walks to the tail from any node it is given.
    #[test]
    fn append_from_mid_node_reaches_tail() {
        let mut list = NodeList::new();
        let head = list.append(None, 1);
        list.append(Some(head), 2);
        let mid = list.next(head).unwrap();
        let ret = list.append(Some(mid), 3);
        assert_eq!(ret, mid);
        assert_eq!(collect(&list, Some(head)), [1, 2, 3]);
    }

    /// Invariant: `first` rewinds to the head from any live node.
    #[test]
    fn first_rewinds_from_anywhere() {
        let mut list = NodeList::new();
        let head = list.append(None, 10);
        list.append(Some(head), 20);
        list.append(Some(head), 30);
        let second = list.next(head).unwrap();
        let third = list.next(second).unwrap();
        assert_eq!(list.first(head), Some(head));
        assert_eq!(list.first(second), Some(head));
        assert_eq!(list.first(third), Some(head));
    }

    /// Invariant: unlinking a middle node repairs both neighbor links and
    /// returns the owned value.
    #[test]
    fn delete_mid_repairs_links() {
        let mut list = NodeList::new();
        let head = list.append(None, 1);
        list.append(Some(head), 2);
        list.append(Some(head), 3);
        let second = list.next(head).unwrap();

        let (new_head, value) = list.delete_link(head, Some(second));
        assert_eq!(new_head, Some(head));
        assert_eq!(value, Some(2));
        assert_eq!(collect(&list, new_head), [1, 3]);

        // Back-links are consistent after the repair.
        let third = list.next(head).unwrap();
        assert_eq!(list.prev(third), Some(head));
        assert_eq!(list.prev(head), None);
        assert_eq!(list.next(third), None);
    }

    /// Invariant: deleting the head hands back its former `next` as the
    /// new head; deleting the last node yields `None`.
    #[test]
    fn delete_head_returns_next() {
        let mut list = NodeList::new();
        let head = list.append(None, 1);
        list.append(Some(head), 2);

        let (new_head, value) = list.delete_link(head, Some(head));
        let new_head = new_head.expect("one node left");
        assert_eq!(value, Some(1));
        assert_eq!(list.get(new_head), Some(&2));
        assert_eq!(list.prev(new_head), None);

        let (empty, value) = list.delete_link(new_head, Some(new_head));
        assert_eq!(empty, None);
        assert_eq!(value, Some(2));
        assert!(list.is_empty());
    }

    /// Invariant: a `None` node is a no-op; a stale node is treated as
    /// already absent and never aliases a reused slot.
    #[test]
    fn delete_absent_is_noop() {
        let mut list = NodeList::new();
        let head = list.append(None, 1);
        list.append(Some(head), 2);

        assert_eq!(list.delete_link(head, None), (Some(head), None));

        let second = list.next(head).unwrap();
        let (_, removed) = list.delete_link(head, Some(second));
        assert_eq!(removed, Some(2));

        // `second` is now stale: deleting it again is the defined no-op.
        assert_eq!(list.delete_link(head, Some(second)), (Some(head), None));
        assert_eq!(list.get(second), None);

        // A later append may reuse the slot; the stale handle must not
        // resolve to the new node.
        list.append(Some(head), 9);
        assert_eq!(list.get(second), None);
        assert_eq!(collect(&list, Some(head)), [1, 9]);
    }

    /// Invariant: a stale list anchor is a reported precondition
    /// violation.
    #[test]
    #[should_panic(expected = "stale list handle")]
    fn stale_anchor_panics() {
        let mut list = NodeList::new();
        let head = list.append(None, 1);
        let (_, _) = list.delete_link(head, Some(head));
        list.append(Some(head), 2);
    }

    /// Invariant: accessors on stale handles return `None`.
    #[test]
    fn stale_accessors_return_none() {
        let mut list = NodeList::new();
        let head = list.append(None, 5);
        let (_, _) = list.delete_link(head, Some(head));
        assert_eq!(list.get(head), None);
        assert_eq!(list.next(head), None);
        assert_eq!(list.prev(head), None);
        assert_eq!(list.first(head), None);
        assert_eq!(list.iter(Some(head)).count(), 0);
    }
}
