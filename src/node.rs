use std::cell::Cell;

/// The forest bookkeeping for one identifier in a `UnionFind`.
///
/// For each identifier ever handed out we store a `Node`.
#[derive(Clone, Debug, Default)]
pub(crate) struct Node {
    /// The parent of the identifier in the tree of its set.
    /// These form an upside down tree where each child holds the identifier
    /// of its parent; a root is its own parent.
    parent: Cell<usize>,
    /// A maximum to the height of the tree below this node.
    /// Only read while the node is a root.
    rank: Cell<usize>,
}

impl Node {
    /// Create a new `Node` for the element with the given identifier.
    pub(crate) fn new(id: usize) -> Self {
        Self {
            parent: Cell::new(id),
            rank: Cell::new(0),
        }
    }

    /// Return the `parent` variable.
    pub(crate) fn parent(&self) -> usize {
        self.parent.get()
    }

    /// Set the `parent` variable.
    pub(crate) fn set_parent(&self, value: usize) {
        self.parent.set(value);
    }

    /// Return the `rank` variable.
    pub(crate) fn rank(&self) -> usize {
        self.rank.get()
    }

    /// Set the `rank` variable.
    pub(crate) fn set_rank(&self, value: usize) {
        self.rank.set(value);
    }
}
