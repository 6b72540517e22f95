//! A [disjoint-sets/union-find] implementation keyed by arbitrary hashable
//! elements that supports deleting elements and iterating over the elements
//! of a set.
//!
//! The main struct of this crate is [`UnionFind<T>`] which keeps a dynamic
//! partition of a universe of elements into disjoint sets.
//! Elements enter the structure the first time they are mentioned and each
//! starts in its own set; sets are joined with the `union` method.
//! You can check if elements share a set with the `same_set` method and
//! iterate on the elements of a set with the `set` method.
//! The `union` and `same_set` methods have an amortized complexity of
//! `O(α(n))` hash-map operations where `α` is the inverse Ackermann function
//! and `n` the number of live elements.
//! The `α(n)` has value below 5 for any `n` that can be written in the
//! observable universe.
//!
//! Unlike the textbook structure, elements can also leave the partition
//! again: `remove` deletes a single element, `make_singleton` splits an
//! element out of its set without touching the other members, and
//! `remove_set` deletes a whole set at once.
//! Deleted elements leave a stale node behind in the forest; the structure
//! rebuilds itself whenever those stale nodes outnumber the live elements,
//! so the cost of deletion is amortized over the following operations.
//!
//! This can be used for example to keep track of the connected components of
//! an undirected graph whose vertex set changes over time.
//! The struct can then be used to determine whether two vertices belong to
//! the same component, or whether adding an edge between them would result
//! in a cycle, which makes it a key component in implementing Kruskal's
//! algorithm to find the minimum spanning tree of a graph.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`UnionFind<T>`]: struct.UnionFind.html

/// Creates a [`UnionFind`] containing the arguments.
///
/// There are two forms of the `union_find!` macro:
///
/// - Create a [`UnionFind`] containing a given list of elements all in
///   distinct sets:
///
/// ```
/// let union_find = regroup::union_find!['a', 'b', 'c'];
///
/// assert!(union_find.len() == 3);
/// assert!(!union_find.same_set(&'a', &'b'));
/// assert!(!union_find.same_set(&'b', &'c'));
/// ```
///
/// - Create a [`UnionFind`] containing a given list of elements in the sets
///   specified:
///
/// ```
/// let union_find = regroup::union_find![
///     'a' => 0,
///     'b' => 1,
///     'c' => 2,
///     'd' => 1,
///     'e' => 0,
/// ];
///
/// assert!(union_find.same_set(&'a', &'e'));
/// assert!(union_find.same_set(&'b', &'d'));
/// assert!(!union_find.same_set(&'a', &'c'));
/// ```
///
/// You can use any identifiers that implement `Hash` and `Eq`.
/// Elements with the same set identifiers will be placed in the same set.
/// These identifiers will only be used when constructing a [`UnionFind`]
/// and will not be stored further.
///
/// [`UnionFind`]: union_find/struct.UnionFind.html
#[macro_export]
macro_rules! union_find {
    ($($key: expr),*) => {
        {
            let mut union_find = $crate::UnionFind::new();

            $(
                union_find.extend(::std::iter::once($key));
            )*

            union_find
        }
    };
    ($($key: expr,)*) => {
        $crate::union_find![$($key),*];
    };
    ($($key: expr => $set: expr),*) => {
        {
            let mut union_find = $crate::UnionFind::new();
            let mut map = ::std::collections::HashMap::new();

            $(
                let key = $key;

                if let Some(first) = map.get(&$set) {
                    union_find.union(::std::clone::Clone::clone(first), key);
                } else {
                    map.insert($set, ::std::clone::Clone::clone(&key));
                    union_find.extend(::std::iter::once(key));
                }
            )*

            union_find
        }
    };
    ($($key: expr => $set: expr,)*) => {
        $crate::union_find![$($key => $set),*];
    };
}

mod node;
pub mod union_find;

pub use crate::union_find::UnionFind;
