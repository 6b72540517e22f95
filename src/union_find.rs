//! A [disjoint-sets/union-find] implementation keyed by the elements
//! themselves, with support for deletion.
//!
//! See [`UnionFind<T>`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`UnionFind<T>`]: struct.UnionFind.html

use {
    std::{
        borrow::Borrow,
        cmp::Ordering,
        collections::{hash_map, HashMap},
        fmt,
        hash::Hash,
        iter::{FromIterator, FusedIterator},
        mem,
    },
    bit_vec::BitVec,
    crate::node::Node,
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// A [disjoint-sets/union-find] implementation keyed by the elements
/// themselves, with support for deletion.
///
/// Elements are never registered up front; the first `union` that mentions
/// an element admits it.
/// Each element starts in its own set and sets can be joined with the
/// `union` method.
/// Whether two elements share a set is answered by `same_set` and the
/// members of a set are iterated with the `set` method.
///
/// Elements can also be taken out of the partition again.
/// `make_singleton` splits one element out of its set while the remaining
/// members stay together, `remove` deletes an element, and `remove_set`
/// deletes an element together with every other member of its set.
/// The first two leave the deleted element's node behind in the forest
/// because cutting it out eagerly would mean restructuring its whole tree.
/// Instead the structure counts those stale nodes and rebuilds itself from
/// the live partition once they hold at least half of the forest, which
/// keeps the forest within a constant factor of the live size.
///
/// This implementation chooses not to expose the `find` method and instead
/// has a `same_set` method.
/// This is so that the representative of the set stays an implementation
/// detail which gives us more freedom to change it behind the scenes for
/// improved performance.
///
/// # Examples
///
/// ```
/// let mut union_find = regroup::UnionFind::new();
/// union_find.union(1, 2);
/// union_find.union(2, 3);
///
/// assert!(union_find.same_set(&1, &3));
///
/// union_find.make_singleton(&2);
///
/// assert!(union_find.same_set(&1, &3));
/// assert!(!union_find.same_set(&1, &2));
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
pub struct UnionFind<T> {
    /// Maps each live element to its identifier in `nodes`.
    indices: HashMap<T, usize>,
    /// The forest.
    /// Every identifier handed out since the last rebuild has a node here,
    /// including identifiers whose element has been removed since.
    nodes: HashMap<usize, Node>,
    /// The next identifier to hand out; only reset by a rebuild.
    next_id: usize,
    /// The sets of the current partition, grouped by root identifier.
    /// Cleared by every operation that changes the partition; path
    /// compression does not, the root reached from an element stays the
    /// same.
    memo: Option<HashMap<usize, Vec<T>>>,
}

/// Resolves `id` to the root of its tree and returns the root together with
/// its rank, pointing every node on the traversed path directly at the root.
///
/// The ranks of the repointed nodes are left alone; only root ranks are
/// ever read.
fn resolve(nodes: &HashMap<usize, Node>, id: usize) -> (usize, usize) {
    debug_assert!(nodes.contains_key(&id));

    let mut current = id;
    loop {
        let parent = nodes[&current].parent();
        if parent == current {
            break;
        }
        current = parent;
    }

    let root = current;
    let rank = nodes[&root].rank();

    let mut current = id;
    while current != root {
        let node = &nodes[&current];
        current = node.parent();
        node.set_parent(root);
    }

    (root, rank)
}

impl<T> UnionFind<T> {
    /// Constructs a new, empty `UnionFind<T>`.
    ///
    /// The `UnionFind<T>` will not allocate until elements are added to it.
    ///
    /// # Examples
    ///
    /// ```
    /// # #![allow(unused_mut)]
    /// use regroup::UnionFind;
    ///
    /// let mut union_find: UnionFind<u32> = UnionFind::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            indices: HashMap::new(),
            nodes: HashMap::new(),
            next_id: 0,
            memo: None,
        }
    }

    /// Constructs a new, empty `UnionFind<T>` with the specified capacity.
    ///
    /// The `UnionFind<T>` will be able to hold at least `capacity` elements
    /// without reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use regroup::UnionFind;
    ///
    /// let mut union_find = UnionFind::with_capacity(10);
    ///
    /// assert!(union_find.is_empty());
    ///
    /// union_find.union(1, 2);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: HashMap::with_capacity(capacity),
            nodes: HashMap::with_capacity(capacity),
            next_id: 0,
            memo: None,
        }
    }

    /// Returns the number of live elements in the `UnionFind<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut union_find = regroup::UnionFind::new();
    /// union_find.union('a', 'b');
    /// union_find.union('c', 'd');
    ///
    /// assert!(union_find.len() == 4);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if the `UnionFind<T>` contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut union_find = regroup::UnionFind::new();
    /// assert!(union_find.is_empty());
    ///
    /// union_find.union(1, 2);
    /// assert!(!union_find.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the number of sets in the `UnionFind<T>`.
    ///
    /// This method will be executed in `O(n α(n))` where `α` is the inverse
    /// Ackermann function.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut union_find = regroup::union_find![
    ///     8 => 0,
    ///     3 => 1,
    ///     4 => 0,
    ///     5 => 1,
    ///     7 => 2,
    /// ];
    ///
    /// assert!(union_find.set_count() == 3);
    ///
    /// union_find.union(8, 7);
    ///
    /// assert!(union_find.set_count() == 2);
    /// ```
    pub fn set_count(&self) -> usize {
        let mut done = BitVec::from_elem(self.next_id, false);
        let mut count = 0;

        for &id in self.indices.values() {
            let (root, _) = resolve(&self.nodes, id);

            if !done.get(root).unwrap() {
                done.set(root, true);
                count += 1;
            }
        }

        count
    }

    /// Clears the `UnionFind<T>`, removing all elements and all stale nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut union_find = regroup::union_find![1, 2, 3];
    /// assert!(!union_find.is_empty());
    ///
    /// union_find.clear();
    /// assert!(union_find.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.indices.clear();
        self.nodes.clear();
        self.next_id = 0;
        self.memo = None;
    }
}

impl<T> UnionFind<T> where
    T: Hash + Eq + Clone,
{
    /// Joins the sets of `first` and `second`.
    ///
    /// An element that was not part of the structure yet is admitted as a
    /// new singleton set before the join.
    ///
    /// This method will be executed in an amortized `O(α(n))` hash-map
    /// operations where `α` is the inverse Ackermann function. The inverse
    /// Ackermann function has value below 5 for any value of `n` that can
    /// be written in the physical universe.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut union_find = regroup::UnionFind::new();
    ///
    /// union_find.union(1, 2);
    /// union_find.union(2, 3);
    ///
    /// assert!(union_find.same_set(&1, &3));
    /// assert!(union_find.len() == 3);
    ///
    /// // Joining elements that already share a set changes nothing.
    /// union_find.union(1, 3);
    /// assert!(union_find.len() == 3);
    /// ```
    pub fn union(&mut self, first: T, second: T) {
        self.memo = None;

        let (first_root, first_rank) = self.find_or_insert(first);
        let (second_root, second_rank) = self.find_or_insert(second);

        if first_root == second_root {
            return;
        }

        self.link((first_root, first_rank), (second_root, second_rank));
        self.recycle();
    }

    /// Joins the sets of every element yielded by `keys` into one set.
    ///
    /// The first element is unioned with each subsequent one.
    /// If `keys` yields fewer than two elements nothing happens; an element
    /// only enters the structure when it takes part in an actual union.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut union_find = regroup::UnionFind::new();
    ///
    /// union_find.union_all(vec![1, 2, 3, 4]);
    /// union_find.union_all(vec![11, 22]);
    ///
    /// assert!(union_find.same_set(&1, &4));
    /// assert!(union_find.same_set(&11, &22));
    /// assert!(!union_find.same_set(&1, &11));
    /// ```
    pub fn union_all<I>(&mut self, keys: I) where
        I: IntoIterator<Item = T>,
    {
        let mut keys = keys.into_iter();

        let first = match keys.next() {
            Some(first) => first,
            None => return,
        };

        for key in keys {
            self.union(first.clone(), key);
        }
    }

    /// Returns `true` if `first` and `second` are in the same set.
    ///
    /// Keys that compare equal always share a set, whether they are part of
    /// the structure or not; a key that is absent shares a set with nothing
    /// else.
    ///
    /// This method will be executed in an amortized `O(α(n))` hash-map
    /// operations where `α` is the inverse Ackermann function.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut union_find = regroup::UnionFind::new();
    /// union_find.union(String::from("foo"), String::from("bar"));
    ///
    /// assert!(union_find.same_set("foo", "bar"));
    /// assert!(!union_find.same_set("foo", "baz"));
    ///
    /// // Equal keys need no lookup, known or not.
    /// assert!(union_find.same_set("baz", "baz"));
    /// ```
    pub fn same_set<Q>(&self, first: &Q, second: &Q) -> bool where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if first == second {
            return true;
        }

        let first_root = match self.find(first) {
            Some((root, _)) => root,
            None => return false,
        };
        let second_root = match self.find(second) {
            Some((root, _)) => root,
            None => return false,
        };

        first_root == second_root
    }

    /// Returns `true` if `first` and `second` are in different sets.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut union_find = regroup::UnionFind::new();
    /// union_find.union(1, 3);
    /// union_find.union(0, 1);
    ///
    /// assert!(!union_find.other_sets(&0, &3));
    /// assert!(union_find.other_sets(&0, &2));
    /// ```
    #[inline]
    pub fn other_sets<Q>(&self, first: &Q, second: &Q) -> bool where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        !self.same_set(first, second)
    }

    /// Returns `true` if `key` is an element of the structure.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut union_find = regroup::UnionFind::new();
    /// union_find.union(1, 2);
    ///
    /// assert!(union_find.contains(&1));
    /// assert!(!union_find.contains(&3));
    /// ```
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.indices.contains_key(key)
    }

    /// Will remove `key` from its set while leaving the other members in
    /// it, and returns whether `key` was present.
    ///
    /// After this `key` is the only element of its set.
    /// The other members of its old set are not touched at all; only the
    /// forest node of `key` is abandoned and a fresh singleton takes its
    /// place.
    /// A key that is not present is left out of the structure.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut union_find = regroup::UnionFind::new();
    /// union_find.union_all(vec![1, 2, 3]);
    ///
    /// assert!(union_find.make_singleton(&2));
    ///
    /// assert!(!union_find.same_set(&1, &2));
    /// assert!(union_find.same_set(&1, &3));
    /// assert!(union_find.contains(&2));
    ///
    /// assert!(!union_find.make_singleton(&4));
    /// ```
    pub fn make_singleton<Q>(&mut self, key: &Q) -> bool where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let isolated = self.isolate(key);
        self.recycle();

        isolated
    }

    /// Will remove each key yielded by `keys` from its set, leaving all
    /// other members where they are.
    ///
    /// Keys that are not present are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut union_find = regroup::UnionFind::new();
    /// union_find.union_all(vec![1, 2, 3, 4]);
    ///
    /// union_find.make_singletons(&[1, 2, 7]);
    ///
    /// assert!(!union_find.same_set(&1, &2));
    /// assert!(!union_find.same_set(&2, &3));
    /// assert!(union_find.same_set(&3, &4));
    /// assert!(!union_find.contains(&7));
    /// ```
    pub fn make_singletons<'a, Q, I>(&mut self, keys: I) where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        for key in keys {
            self.isolate(key);
        }

        self.recycle();
    }

    /// Removes `key` from the structure and returns whether it was present.
    ///
    /// The other members of its set are not touched.
    /// The forest node of `key` stays behind as a stale node until the next
    /// rebuild.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut union_find = regroup::UnionFind::new();
    /// union_find.union_all(vec![1, 2, 3]);
    ///
    /// assert!(union_find.remove(&2));
    ///
    /// assert!(union_find.len() == 2);
    /// assert!(!union_find.contains(&2));
    /// assert!(union_find.same_set(&1, &3));
    ///
    /// assert!(!union_find.remove(&2));
    /// assert!(union_find.len() == 2);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.indices.remove(key).is_some();

        if removed {
            self.memo = None;
        }
        self.recycle();

        removed
    }

    /// Removes `key` and every other member of its set from the structure.
    ///
    /// The whole set disappears at once, nodes included; unlike `remove`
    /// this leaves no stale nodes behind.
    /// A key that is not present is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut union_find = regroup::UnionFind::new();
    /// union_find.union_all(vec![1, 2, 3]);
    /// union_find.union_all(vec![11, 22]);
    ///
    /// union_find.remove_set(&2);
    ///
    /// assert!(!union_find.contains(&1));
    /// assert!(!union_find.contains(&2));
    /// assert!(!union_find.contains(&3));
    /// assert!(union_find.same_set(&11, &22));
    /// ```
    #[inline]
    pub fn remove_set<Q>(&mut self, key: &Q) where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove_sets(Some(key));
    }

    /// Removes, for each key yielded by `keys`, the key and every other
    /// member of its set from the structure.
    ///
    /// Keys that are not present, including members of a set that an
    /// earlier key of the same batch already removed, are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut union_find = regroup::UnionFind::new();
    /// union_find.union_all(vec![1, 2]);
    /// union_find.union_all(vec![11, 22]);
    /// union_find.union_all(vec![111, 222]);
    ///
    /// union_find.remove_sets(&[1, 111]);
    ///
    /// assert!(union_find.len() == 2);
    /// assert!(union_find.same_set(&11, &22));
    /// ```
    pub fn remove_sets<'a, Q, I>(&mut self, keys: I) where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        let mut removed = false;

        for key in keys {
            // Whole sets disappear at once, so the memoized sets that
            // survive a removal stay exact for the rest of the batch.
            let members: Vec<T> = self.set(key).cloned().collect();

            for member in &members {
                if let Some(id) = self.indices.remove::<T>(member) {
                    self.nodes.remove(&id);
                    removed = true;
                }
            }
        }

        if removed {
            self.memo = None;
        }
        self.recycle();
    }

    /// Returns an iterator over the elements of the set that `key` belongs
    /// to, or an empty iterator if `key` is not present.
    ///
    /// The order the elements are returned in is not specified.
    ///
    /// The sets of the partition are gathered once and reused by every call
    /// to `set` and `all_sets` until the structure is changed again.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut union_find = regroup::UnionFind::new();
    /// union_find.union_all(vec![1, 2, 3]);
    ///
    /// let mut members: Vec<u32> = union_find.set(&2).cloned().collect();
    /// members.sort();
    ///
    /// assert!(members == vec![1, 2, 3]);
    /// assert!(union_find.set(&7).next().is_none());
    /// ```
    pub fn set<Q>(&mut self, key: &Q) -> Set<'_, T> where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let root = match self.find(key) {
            Some((root, _)) => root,
            None => return Set { iter: None },
        };

        Set {
            iter: self.memoized().get(&root).map(|members| members.iter()),
        }
    }

    /// Returns an iterator over all sets of the `UnionFind<T>`.
    ///
    /// The iterator returned yields `Set` iterators, one for every set of
    /// the partition.
    /// Neither the order of the sets nor the order of the elements of a
    /// `Set` is specified.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut union_find = regroup::UnionFind::new();
    /// union_find.union_all(vec![1, 2, 3, 4]);
    /// union_find.union_all(vec![11, 22]);
    ///
    /// let mut sizes: Vec<usize> = union_find.all_sets().map(|set| set.len()).collect();
    /// sizes.sort();
    ///
    /// assert!(sizes == vec![2, 4]);
    /// ```
    pub fn all_sets(&mut self) -> AllSets<'_, T> {
        AllSets {
            iter: self.memoized().values(),
        }
    }

    /// Gives the root identifier and root rank of the set that `key`
    /// belongs to, or `None` if `key` was never admitted.
    fn find<Q>(&self, key: &Q) -> Option<(usize, usize)> where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let &id = self.indices.get(key)?;

        Some(resolve(&self.nodes, id))
    }

    /// As `find`, but a key that was never admitted enters the structure as
    /// a fresh singleton set.
    fn find_or_insert(&mut self, key: T) -> (usize, usize) {
        match self.indices.get(&key) {
            Some(&id) => resolve(&self.nodes, id),
            None => self.insert_singleton(key),
        }
    }

    /// Admits `key` under a brand-new identifier as a set of one.
    fn insert_singleton(&mut self, key: T) -> (usize, usize) {
        debug_assert!(!self.indices.contains_key(&key));

        self.memo = None;

        let id = self.next_id;
        self.next_id += 1;
        self.indices.insert(key, id);
        self.nodes.insert(id, Node::new(id));

        (id, 0)
    }

    /// Hangs the tree of one root under the other.
    ///
    /// Both arguments must be distinct roots paired with their rank.
    fn link(&mut self, first: (usize, usize), second: (usize, usize)) {
        let (first_root, first_rank) = first;
        let (second_root, second_rank) = second;
        debug_assert!(first_root != second_root);

        // We add to the tree with the highest rank.
        match Ord::cmp(&first_rank, &second_rank) {
            Ordering::Less => {
                self.nodes[&first_root].set_parent(second_root);
            },
            Ordering::Equal => {
                // We add the first tree to the second tree.
                self.nodes[&first_root].set_parent(second_root);
                // The second tree becomes larger.
                self.nodes[&second_root].set_rank(second_rank + 1);
            },
            Ordering::Greater => {
                self.nodes[&second_root].set_parent(first_root);
            },
        }
    }

    /// Takes `key` out of its set and admits it again as a set of one.
    ///
    /// Unlike `make_singleton` this does not consider a rebuild; batch
    /// operations check once at the end.
    fn isolate<Q>(&mut self, key: &Q) -> bool where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.indices.remove_entry(key) {
            Some((key, _)) => {
                // The old node stays behind in the forest as a stale node.
                self.memo = None;
                self.insert_singleton(key);

                true
            },
            None => false,
        }
    }

    /// Rebuilds the forest from the live partition once the stale nodes
    /// hold at least half of it.
    ///
    /// Every mutating operation ends with this check, which bounds the
    /// forest at twice the number of live elements.
    fn recycle(&mut self) {
        if self.indices.is_empty() || self.nodes.len() < 2 * self.indices.len() {
            return;
        }

        self.memo = None;

        let indices = mem::take(&mut self.indices);
        let nodes = mem::take(&mut self.nodes);
        self.next_id = 0;

        // The first element seen of every old set becomes the
        // representative that the rest of the set is unioned with.
        let mut representatives = HashMap::new();

        for (key, id) in indices {
            let (old_root, _) = resolve(&nodes, id);
            let (new_id, new_rank) = self.insert_singleton(key);

            match representatives.entry(old_root) {
                hash_map::Entry::Occupied(occupied) => {
                    let root = resolve(&self.nodes, *occupied.get());
                    self.link(root, (new_id, new_rank));
                },
                hash_map::Entry::Vacant(vacant) => {
                    vacant.insert(new_id);
                },
            }
        }
    }

    /// Gathers the live partition, grouped by root identifier.
    fn aggregate(&self) -> HashMap<usize, Vec<T>> {
        let mut sets: HashMap<usize, Vec<T>> = HashMap::new();

        for (key, &id) in &self.indices {
            let (root, _) = resolve(&self.nodes, id);
            sets.entry(root).or_insert_with(Vec::new).push(key.clone());
        }

        sets
    }

    /// Returns the memoized partition, gathering it first if the last
    /// mutation cleared it.
    fn memoized(&mut self) -> &HashMap<usize, Vec<T>> {
        let sets = match self.memo.take() {
            Some(sets) => sets,
            None => self.aggregate(),
        };

        self.memo.get_or_insert(sets)
    }
}

impl<T> Default for UnionFind<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for UnionFind<T> where
    T: Clone,
{
    fn clone(&self) -> Self {
        // A clone starts out without the memoized partition.
        Self {
            indices: self.indices.clone(),
            nodes: self.nodes.clone(),
            next_id: self.next_id,
            memo: None,
        }
    }
}

impl<T> fmt::Debug for UnionFind<T> where
    T: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        // We map the roots to `usize` names.
        let mut map = HashMap::with_capacity(self.indices.len());
        let mut builder = formatter.debug_list();
        let mut names = 0;

        for (key, &id) in &self.indices {
            let (root, _) = resolve(&self.nodes, id);

            let name = if let Some(&name) = map.get(&root) {
                // If we already have a name we use it.
                name
            } else {
                // If we don't we make a new name.
                let new_name = names;
                map.insert(root, new_name);
                names += 1;

                new_name
            };

            builder.entry(&format_args!("{:?} => {}", key, name));
        }

        builder.finish()
    }
}

impl<T> PartialEq for UnionFind<T> where
    T: Hash + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        if self.indices.len() != other.indices.len() {
            return false;
        }

        // We pair the roots of `self` with the roots of `other`; the
        // pairing has to be one-to-one in both directions.
        let mut forward = HashMap::with_capacity(self.indices.len());
        let mut backward = HashMap::with_capacity(self.indices.len());

        for (key, &id) in &self.indices {
            let other_id = match other.indices.get(key) {
                Some(&other_id) => other_id,
                None => return false,
            };

            let (self_root, _) = resolve(&self.nodes, id);
            let (other_root, _) = resolve(&other.nodes, other_id);

            if *forward.entry(self_root).or_insert(other_root) != other_root {
                return false;
            }
            if *backward.entry(other_root).or_insert(self_root) != self_root {
                return false;
            }
        }

        true
    }
}

impl<T> Eq for UnionFind<T> where T: Eq + Hash {}

impl<T> FromIterator<T> for UnionFind<T> where
    T: Hash + Eq + Clone,
{
    fn from_iter<I>(iter: I) -> Self where
        I: IntoIterator<Item = T>,
    {
        let mut union_find = Self::new();
        union_find.extend(iter);

        union_find
    }
}

impl<'a, T> FromIterator<&'a T> for UnionFind<T> where
    T: Hash + Eq + Copy + 'a,
{
    fn from_iter<I>(iter: I) -> Self where
        I: IntoIterator<Item = &'a T>,
    {
        Self::from_iter(iter.into_iter().cloned())
    }
}

impl<T> Extend<T> for UnionFind<T> where
    T: Hash + Eq + Clone,
{
    /// Admits each new element as its own singleton set; elements that are
    /// already present keep the set they are in.
    fn extend<I>(&mut self, iter: I) where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.find_or_insert(key);
        }
    }
}

impl<'a, T> Extend<&'a T> for UnionFind<T> where
    T: Hash + Eq + Copy + 'a,
{
    fn extend<I>(&mut self, iter: I) where
        I: IntoIterator<Item = &'a T>,
    {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> IntoIterator for UnionFind<T> where
    T: Hash + Eq + Clone,
{
    type Item = Vec<T>;
    type IntoIter = IntoSets<T>;

    /// Consumes the structure and yields each set as an owned `Vec<T>`.
    fn into_iter(mut self) -> IntoSets<T> {
        let mut sets: HashMap<usize, Vec<T>> = HashMap::new();

        for (key, id) in mem::take(&mut self.indices) {
            let (root, _) = resolve(&self.nodes, id);
            sets.entry(root).or_insert_with(Vec::new).push(key);
        }

        IntoSets {
            iter: sets.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a mut UnionFind<T> where
    T: Hash + Eq + Clone,
{
    type Item = Set<'a, T>;
    type IntoIter = AllSets<'a, T>;

    fn into_iter(self) -> AllSets<'a, T> {
        self.all_sets()
    }
}

#[cfg(feature = "rayon")]
impl<T> FromParallelIterator<T> for UnionFind<T> where
    T: Hash + Eq + Clone + Send,
{
    fn from_par_iter<I>(par_iter: I) -> Self where
        I: IntoParallelIterator<Item = T>,
    {
        let par_iter = par_iter.into_par_iter();

        let mut union_find = if let Some(len) = par_iter.opt_len() {
            Self::with_capacity(len)
        } else {
            Self::new()
        };

        union_find.par_extend(par_iter);

        union_find
    }
}

#[cfg(feature = "rayon")]
impl<T> ParallelExtend<T> for UnionFind<T> where
    T: Hash + Eq + Clone + Send,
{
    /// The elements are collected in parallel; admission into the hash
    /// tables stays sequential.
    fn par_extend<I>(&mut self, par_iter: I) where
        I: IntoParallelIterator<Item = T>,
    {
        let keys: Vec<T> = par_iter.into_par_iter().collect();

        self.extend(keys);
    }
}

#[cfg(feature = "proptest")]
impl<T> Arbitrary for UnionFind<T> where
    T: Arbitrary + Hash + Eq + Clone,
    T::Strategy: 'static,
{
    type Parameters = (proptest::collection::SizeRange, T::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
        let (size_range, params) = params;
        let params = (size_range, (params, ()));

        (Vec::<(T, usize)>::arbitrary_with(params)).prop_map(|vec| {
            let mut union_find = Self::with_capacity(vec.len());

            // We map a `set_number` to an element of that set.
            let mut map = hash_map::HashMap::with_capacity(vec.len());

            for (key, set_number) in vec {
                let set_number = set_number.trailing_zeros();

                match map.entry(set_number) {
                    hash_map::Entry::Occupied(occupied) => {
                        union_find.union(T::clone(occupied.get()), key);
                    },
                    hash_map::Entry::Vacant(vacant) => {
                        union_find.extend(Some(key.clone()));
                        vacant.insert(key);
                    },
                }
            }

            union_find
        }).boxed()
    }
}

/// An iterator over a set in a `UnionFind<T>`.
///
/// This struct is created by the [`set`] method on [`UnionFind<T>`].
/// See its documentation for more.
///
/// [`set`]: struct.UnionFind.html#method.set
/// [`UnionFind<T>`]: struct.UnionFind.html
#[derive(Clone, Debug)]
pub struct Set<'a, T: 'a> {
    iter: Option<std::slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for Set<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.iter {
            Some(iter) => iter.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl<'a, T> ExactSizeIterator for Set<'a, T> {
    #[inline]
    fn len(&self) -> usize {
        match &self.iter {
            Some(iter) => iter.len(),
            None => 0,
        }
    }
}

impl<'a, T> FusedIterator for Set<'a, T> {}

/// An iterator over all sets in a `UnionFind<T>`.
///
/// This struct is created by the [`all_sets`] method on [`UnionFind<T>`].
/// See its documentation for more information.
///
/// [`all_sets`]: struct.UnionFind.html#method.all_sets
/// [`UnionFind<T>`]: struct.UnionFind.html
#[derive(Clone, Debug)]
pub struct AllSets<'a, T: 'a> {
    iter: hash_map::Values<'a, usize, Vec<T>>,
}

impl<'a, T> Iterator for AllSets<'a, T> {
    type Item = Set<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Set<'a, T>> {
        Some(Set {
            iter: Some(self.iter.next()?.iter()),
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for AllSets<'a, T> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<'a, T> FusedIterator for AllSets<'a, T> {}

/// An owning iterator over all sets in a `UnionFind<T>`.
///
/// This struct is created by the `into_iter` method on [`UnionFind<T>`].
///
/// [`UnionFind<T>`]: struct.UnionFind.html
#[derive(Debug)]
pub struct IntoSets<T> {
    iter: hash_map::IntoIter<usize, Vec<T>>,
}

impl<T> Iterator for IntoSets<T> {
    type Item = Vec<T>;

    #[inline]
    fn next(&mut self) -> Option<Vec<T>> {
        Some(self.iter.next()?.1)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoSets<T> {
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<T> FusedIterator for IntoSets<T> {}


#[cfg(all(test, feature = "proptest"))]
mod properties {
    use super::*;
    use proptest::prelude::any;
    use proptest::{proptest, proptest_helper, prop_assert};

    proptest! {
        #[test]
        fn same_set_is_symmetric(
            union_find in any::<UnionFind<u8>>(),
            a in any::<u8>(),
            b in any::<u8>(),
        ) {
            prop_assert!(union_find.same_set(&a, &b) == union_find.same_set(&b, &a));
        }

        #[test]
        fn union_is_idempotent(
            mut union_find in any::<UnionFind<u8>>(),
            a in any::<u8>(),
            b in any::<u8>(),
        ) {
            union_find.union(a, b);
            let len = union_find.len();
            let sets = union_find.set_count();

            union_find.union(a, b);

            prop_assert!(union_find.same_set(&a, &b));
            prop_assert!(union_find.len() == len);
            prop_assert!(union_find.set_count() == sets);
        }

        #[test]
        fn sets_agree_with_same_set(mut union_find in any::<UnionFind<u8>>()) {
            let elements: Vec<u8> = union_find.all_sets().flatten().cloned().collect();

            for &x in &elements {
                let mut from_set: Vec<u8> = union_find.set(&x).cloned().collect();
                from_set.sort();

                let mut from_queries: Vec<u8> = elements
                    .iter()
                    .cloned()
                    .filter(|y| union_find.same_set(&x, y))
                    .collect();
                from_queries.sort();

                prop_assert!(from_set == from_queries);
            }
        }

        #[test]
        fn churn_keeps_garbage_bounded(
            ops in proptest::collection::vec(
                (0u8..4, any::<u8>(), any::<u8>()),
                0..64,
            ),
        ) {
            let mut union_find = UnionFind::new();

            for (op, a, b) in ops {
                match op {
                    0 => union_find.union(a, b),
                    1 => {
                        union_find.make_singleton(&a);
                    },
                    2 => {
                        union_find.remove(&a);
                    },
                    _ => union_find.remove_sets(&[a, b]),
                }

                prop_assert!(
                    union_find.is_empty()
                        || union_find.nodes.len() <= 2 * union_find.indices.len()
                );
            }

            // The partition is still queryable after the churn.
            let elements: Vec<u8> = union_find.all_sets().flatten().cloned().collect();

            for &x in &elements {
                let mut from_set: Vec<u8> = union_find.set(&x).cloned().collect();
                from_set.sort();

                let mut from_queries: Vec<u8> = elements
                    .iter()
                    .cloned()
                    .filter(|y| union_find.same_set(&x, y))
                    .collect();
                from_queries.sort();

                prop_assert!(from_set == from_queries);
            }
        }
    }
}
