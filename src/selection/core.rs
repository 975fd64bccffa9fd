use std::collections::HashMap;
use std::fmt;

use blake3::{Hash, Hasher};

use crate::container::GroupId;
use crate::element::Word;

/// Content hash identifying a selectable span by its first and last word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHash(Hash);

impl NodeHash {
    pub fn of(start: &str, end: &str) -> Self {
        let mut hasher = Hasher::new();
        hasher.update(start.as_bytes());
        hasher.update(end.as_bytes());
        Self(hasher.finalize())
    }

    /// Hex form, usable as a container group tag.
    pub fn to_group(&self) -> GroupId {
        self.0.to_hex().to_string()
    }
}

impl fmt::Display for NodeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

/// One selectable span, linked to its neighbours in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    hash: NodeHash,
    start: String,
    end: String,
    prev: Option<NodeHash>,
    next: Option<NodeHash>,
    selected: bool,
}

impl Node {
    pub fn hash(&self) -> NodeHash {
        self.hash
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn prev(&self) -> Option<NodeHash> {
        self.prev
    }

    pub fn next(&self) -> Option<NodeHash> {
        self.next
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// Hash-deduplicated, insertion-ordered list of selectable spans with a
/// selection cursor. At most one node is selected at a time.
#[derive(Debug, Default)]
pub struct SelectionRegistry {
    nodes: HashMap<NodeHash, Node>,
    head: Option<NodeHash>,
    tail: Option<NodeHash>,
    cursor: Option<NodeHash>,
}

impl SelectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the span running from `start` to `end`.
    pub fn register(&mut self, start: &Word, end: &Word) -> NodeHash {
        self.register_span(start.text(), end.text())
    }

    /// Register a span by its boundary texts. Re-registering an existing span
    /// changes nothing and returns the same hash.
    pub fn register_span(&mut self, start: &str, end: &str) -> NodeHash {
        let hash = NodeHash::of(start, end);
        if self.nodes.contains_key(&hash) {
            return hash;
        }

        match self.tail.and_then(|tail| self.nodes.get_mut(&tail)) {
            Some(tail) => tail.next = Some(hash),
            None => self.head = Some(hash),
        }

        self.nodes.insert(
            hash,
            Node {
                hash,
                start: start.to_string(),
                end: end.to_string(),
                prev: self.tail,
                next: None,
                selected: false,
            },
        );
        self.tail = Some(hash);
        hash
    }

    /// Unlink a span. When it held the selection, the selection moves to the
    /// following span, or the preceding one at the end of the list.
    pub fn remove(&mut self, hash: NodeHash) -> Option<Node> {
        let node = self.nodes.remove(&hash)?;

        match node.prev.and_then(|prev| self.nodes.get_mut(&prev)) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match node.next.and_then(|next| self.nodes.get_mut(&next)) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }

        if self.cursor == Some(hash) {
            self.cursor = None;
            if let Some(fallback) = node.next.or(node.prev) {
                self.select(fallback);
            }
        }

        Some(node)
    }

    pub fn contains(&self, hash: NodeHash) -> bool {
        self.nodes.contains_key(&hash)
    }

    pub fn get(&self, hash: NodeHash) -> Option<&Node> {
        self.nodes.get(&hash)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn head(&self) -> Option<NodeHash> {
        self.head
    }

    pub fn tail(&self) -> Option<NodeHash> {
        self.tail
    }

    /// Nodes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> + '_ {
        std::iter::successors(self.head.and_then(|hash| self.nodes.get(&hash)), |node| {
            node.next.and_then(|next| self.nodes.get(&next))
        })
    }

    pub fn selected(&self) -> Option<&Node> {
        self.cursor.and_then(|hash| self.nodes.get(&hash))
    }

    /// Move the selection to `hash`. Returns false for unknown spans.
    pub fn select(&mut self, hash: NodeHash) -> bool {
        if !self.nodes.contains_key(&hash) {
            return false;
        }
        self.clear_selection();
        if let Some(node) = self.nodes.get_mut(&hash) {
            node.selected = true;
        }
        self.cursor = Some(hash);
        true
    }

    pub fn clear_selection(&mut self) {
        if let Some(node) = self.cursor.take().and_then(|hash| self.nodes.get_mut(&hash)) {
            node.selected = false;
        }
    }

    /// Select the span after the current one (the first span when nothing is
    /// selected). Stays put at the end of the list.
    pub fn select_next(&mut self) -> Option<NodeHash> {
        let target = match self.selected() {
            Some(node) => node.next.or(Some(node.hash)),
            None => self.head,
        }?;
        self.select(target);
        Some(target)
    }

    /// Select the span before the current one (the last span when nothing is
    /// selected). Stays put at the start of the list.
    pub fn select_prev(&mut self) -> Option<NodeHash> {
        let target = match self.selected() {
            Some(node) => node.prev.or(Some(node.hash)),
            None => self.tail,
        }?;
        self.select(target);
        Some(target)
    }
}
