//! Ordered, keyed collection with functional combinators.
//!
//! This module provides [`Collection`], an insertion-ordered container of
//! unique-keyed entries, and [`Sequence`], its list-mode alias with dense
//! sequential integer keys.
//!
//! # Overview
//!
//! A `Collection<K, V>` stores `(key, value)` entries in insertion order.
//! Keys are unique; assigning an existing key replaces the value while the
//! entry keeps its original position. All transformations consume the
//! receiver and build a new collection, so pipelines read as chains of
//! moves:
//!
//! ```rust
//! use collectra::collection::Sequence;
//!
//! let total: i32 = Sequence::from_values([1, 2, 3, 4])
//!     .map(|x| x * 10)
//!     .filter(|x| *x >= 20)
//!     .fold(0, |sum, x| sum + x);
//!
//! assert_eq!(total, 90);
//! ```
//!
//! # Key preservation
//!
//! `filter` and `partition` keep each surviving entry's key; `map` and its
//! variants keep the position-to-key correspondence; `concat`, `collapse`,
//! `flat_map` and `zip` discard keys and re-key sequentially. `sort` and
//! `sort_desc` reorder entries but leave each value's key attached.

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;

use num_traits::{ToPrimitive, Zero};
use rand::seq::IndexedRandom;

use super::error::CollectionError;

// =============================================================================
// Collection Definition
// =============================================================================

/// An ordered collection of unique-keyed entries.
///
/// Entries iterate in insertion order. Keys are either dense sequential
/// integers (list mode, see [`Sequence`]) or caller-supplied values of any
/// `PartialEq` type (associative mode). Key lookup is a linear scan, which
/// keeps the key bound at `PartialEq` and the entry layout flat.
///
/// # Time Complexity
///
/// | Operation          | Complexity |
/// |--------------------|------------|
/// | `new`              | O(1)       |
/// | `push` / `pop`     | O(1)       |
/// | `get` / `insert`   | O(N)       |
/// | `map` / `filter`   | O(N)       |
/// | `sort`             | O(N log N) |
/// | `map_to_groups`    | O(N × G) for G groups |
///
/// # Equality
///
/// Two collections are equal when their entry sequences are equal: same
/// keys, same values, same order. A re-keyed or reordered collection is a
/// different value.
///
/// # Examples
///
/// ```rust
/// use collectra::collection::{Collection, Sequence};
///
/// let sequence: Sequence<i32> = (1..=3).collect();
/// assert_eq!(sequence.into_entries(), vec![(0, 1), (1, 2), (2, 3)]);
///
/// let keyed = Collection::from_entries([("name", "Adi"), ("country", "Indonesia")]);
/// assert_eq!(keyed.get(&"name"), Some(&"Adi"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Collection<K, V> {
    /// Entries in insertion order; keys are unique.
    entries: Vec<(K, V)>,
}

/// A list-mode collection: dense sequential `usize` keys.
pub type Sequence<V> = Collection<usize, V>;

// =============================================================================
// Construction & Basic Access
// =============================================================================

impl<K, V> Collection<K, V> {
    /// Creates a new empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Collection;
    ///
    /// let collection: Collection<&str, i32> = Collection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of entries in the collection.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection contains no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let empty: Sequence<i32> = Sequence::new();
    /// assert!(empty.is_empty());
    /// assert!(!Sequence::from_values([1]).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the collection contains at least one entry.
    #[inline]
    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Consumes the collection and returns its entries in insertion order.
    ///
    /// Round-trip law: [`Collection::from_entries`] over the returned pairs
    /// reproduces the collection, keys and order included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Collection;
    ///
    /// let collection = Collection::from_entries([("a", 1), ("b", 2)]);
    /// assert_eq!(collection.into_entries(), vec![("a", 1), ("b", 2)]);
    /// ```
    #[must_use]
    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }

    /// Consumes the collection and returns its values in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let sequence = Sequence::from_values([1, 2, 3]);
    /// assert_eq!(sequence.into_values(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn into_values(self) -> Vec<V> {
        self.entries.into_iter().map(|(_, value)| value).collect()
    }

    /// Removes and returns the last entry's value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection has no entries;
    /// nothing is mutated in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let mut sequence = Sequence::from_values([1, 2, 3]);
    /// assert_eq!(sequence.pop(), Ok(3));
    /// assert_eq!(sequence.into_values(), vec![1, 2]);
    /// ```
    pub fn pop(&mut self) -> Result<V, CollectionError> {
        self.entries
            .pop()
            .map(|(_, value)| value)
            .ok_or(CollectionError::Empty { operation: "pop" })
    }

    /// Returns an iterator over references to the values in insertion order.
    #[must_use]
    pub fn iter(&self) -> CollectionIterator<'_, K, V> {
        CollectionIterator {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over `(key, value)` reference pairs in insertion
    /// order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Collection;
    ///
    /// let collection = Collection::from_entries([("a", 1), ("b", 2)]);
    /// let pairs: Vec<(&&str, &i32)> = collection.entries().collect();
    /// assert_eq!(pairs, vec![(&"a", &1), (&"b", &2)]);
    /// ```
    #[must_use]
    pub fn entries(&self) -> CollectionEntries<'_, K, V> {
        CollectionEntries {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over references to the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }
}

impl<V> Collection<usize, V> {
    /// Builds a list-mode collection from an ordered source of values,
    /// assigning the dense sequential keys `0..n`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let sequence = Sequence::from_values(["Eko", "Kurniawan"]);
    /// assert_eq!(sequence.into_entries(), vec![(0, "Eko"), (1, "Kurniawan")]);
    /// ```
    pub fn from_values<I: IntoIterator<Item = V>>(values: I) -> Self {
        Self {
            entries: values.into_iter().enumerate().collect(),
        }
    }

    /// Appends a value under the next sequential integer key and returns the
    /// receiver for chaining.
    ///
    /// The next key is one past the largest existing key (`0` when empty),
    /// so pushing after `filter` or `sort_desc` never reuses a key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let mut sequence = Sequence::new();
    /// sequence.push(1).push(2).push(3);
    /// assert_eq!(sequence.into_values(), vec![1, 2, 3]);
    /// ```
    pub fn push(&mut self, value: V) -> &mut Self {
        let next_key = self.next_sequential_key();
        self.entries.push((next_key, value));
        self
    }

    /// One past the largest key currently present.
    fn next_sequential_key(&self) -> usize {
        self.entries
            .iter()
            .map(|(key, _)| *key)
            .max()
            .map_or(0, |largest| largest + 1)
    }
}

// =============================================================================
// Keyed Access
// =============================================================================

impl<K: PartialEq, V> Collection<K, V> {
    /// Builds an associative collection from an ordered source of
    /// `(key, value)` entries.
    ///
    /// A key that appears more than once keeps its first position but takes
    /// its last value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Collection;
    ///
    /// let collection = Collection::from_entries([("a", 1), ("b", 2), ("a", 3)]);
    /// assert_eq!(collection.into_entries(), vec![("a", 3), ("b", 2)]);
    /// ```
    pub fn from_entries<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        let mut collection = Self::new();
        for (key, value) in entries {
            collection.insert(key, value);
        }
        collection
    }

    /// Returns a reference to the value stored under `key`, if any.
    ///
    /// # Complexity
    ///
    /// O(N) — key lookup is a linear scan.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Stores `value` under `key`, returning the previously stored value if
    /// the key was already present. A replaced entry keeps its position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Collection;
    ///
    /// let mut collection = Collection::from_entries([("a", 1)]);
    /// assert_eq!(collection.insert("a", 10), Some(1));
    /// assert_eq!(collection.insert("b", 2), None);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| *existing == key)
        {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }
}

// =============================================================================
// Elementwise Transformation
// =============================================================================

impl<K, V> Collection<K, V> {
    /// Transforms every value through `function`, keeping each entry's key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let doubled = Sequence::from_values([1, 2, 3]).map(|x| x * 2);
    /// assert_eq!(doubled.into_values(), vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn map<V2, F: FnMut(V) -> V2>(self, mut function: F) -> Collection<K, V2> {
        Collection {
            entries: self
                .entries
                .into_iter()
                .map(|(key, value)| (key, function(value)))
                .collect(),
        }
    }

    /// Wraps every value into `V2` through its `From` conversion, keeping
    /// each entry's key.
    ///
    /// The target type's single-argument constructor contract is `From<V>`;
    /// value equality of the wrapped type carries over to the collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Person {
    ///     name: String,
    /// }
    ///
    /// impl From<&str> for Person {
    ///     fn from(name: &str) -> Self {
    ///         Self { name: name.to_string() }
    ///     }
    /// }
    ///
    /// let people = Sequence::from_values(["Eko"]).map_into::<Person>();
    /// assert_eq!(people.into_values(), vec![Person { name: "Eko".to_string() }]);
    /// ```
    #[must_use]
    pub fn map_into<V2: From<V>>(self) -> Collection<K, V2> {
        self.map(V2::from)
    }

    /// Groups values by the key returned from `function`.
    ///
    /// `function` maps each value to one `(group key, group value)` pair.
    /// Original entry keys are discarded: the result is an associative
    /// collection keyed by group, each group a [`Sequence`] of collected
    /// values in encounter order. A group's position is fixed by its first
    /// occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let people = Sequence::from_values([("Adi", "IT"), ("Eko", "Design"), ("Salafudin", "IT")]);
    /// let groups = people.map_to_groups(|(name, department)| (department, name));
    ///
    /// assert_eq!(
    ///     groups.get(&"IT").map(|group| group.clone().into_values()),
    ///     Some(vec!["Adi", "Salafudin"])
    /// );
    /// ```
    #[must_use]
    pub fn map_to_groups<K2, V2, F>(self, mut function: F) -> Collection<K2, Sequence<V2>>
    where
        K2: PartialEq,
        F: FnMut(V) -> (K2, V2),
    {
        let mut groups: Collection<K2, Sequence<V2>> = Collection::new();
        for (_, value) in self.entries {
            let (group_key, group_value) = function(value);
            match groups
                .entries
                .iter_mut()
                .find(|(existing, _)| *existing == group_key)
            {
                Some((_, group)) => {
                    group.push(group_value);
                }
                None => {
                    groups
                        .entries
                        .push((group_key, Sequence::from_values([group_value])));
                }
            }
        }
        groups
    }

    /// Maps every value to a sequence and flattens the results one level,
    /// re-keying sequentially.
    ///
    /// Equivalent to `map(function)` followed by [`collapse`](Collection::collapse).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let hobbies = Sequence::from_values([
    ///     ("Adi", vec!["Coding", "Gaming"]),
    ///     ("Eko", vec!["Reading", "Writing"]),
    /// ])
    /// .flat_map(|(_, hobbies)| hobbies);
    ///
    /// assert_eq!(hobbies.into_values(), vec!["Coding", "Gaming", "Reading", "Writing"]);
    /// ```
    #[must_use]
    pub fn flat_map<I, F>(self, mut function: F) -> Sequence<I::Item>
    where
        I: IntoIterator,
        F: FnMut(V) -> I,
    {
        Sequence::from_values(
            self.entries
                .into_iter()
                .flat_map(|(_, value)| function(value)),
        )
    }
}

impl<K, T> Collection<K, Vec<T>> {
    /// Destructures every value tuple positionally into a fixed-arity array
    /// and maps it through `function`, keeping each entry's key.
    ///
    /// A tuple with more than `N` elements is truncated; the callback sees
    /// the first `N` positions.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Arity`] if any value tuple holds fewer
    /// than `N` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let names = Sequence::from_values([
    ///     vec!["Adi", "Salafudin"],
    ///     vec!["Ida", "Lafudin"],
    /// ]);
    /// let full_names = names
    ///     .map_spread(|[first, last]: [&str; 2]| format!("{first} {last}"))
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     full_names.into_values(),
    ///     vec!["Adi Salafudin".to_string(), "Ida Lafudin".to_string()]
    /// );
    /// ```
    pub fn map_spread<const N: usize, V2, F>(
        self,
        mut function: F,
    ) -> Result<Collection<K, V2>, CollectionError>
    where
        F: FnMut([T; N]) -> V2,
    {
        let mut entries = Vec::with_capacity(self.entries.len());
        for (key, mut tuple) in self.entries {
            let found = tuple.len();
            if found < N {
                return Err(CollectionError::Arity { expected: N, found });
            }
            tuple.truncate(N);
            let Ok(positional) = <[T; N]>::try_from(tuple) else {
                return Err(CollectionError::Arity { expected: N, found });
            };
            entries.push((key, function(positional)));
        }
        Ok(Collection { entries })
    }
}

// =============================================================================
// Filtering & Partitioning
// =============================================================================

impl<K, V> Collection<K, V> {
    /// Keeps the entries whose value satisfies `predicate`.
    ///
    /// Surviving entries retain their original keys and relative order; no
    /// re-indexing happens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let even = Sequence::from_values([1, 2, 3, 4]).filter(|x| x % 2 == 0);
    /// assert_eq!(even.into_entries(), vec![(1, 2), (3, 4)]);
    /// ```
    #[must_use]
    pub fn filter<F: FnMut(&V) -> bool>(self, mut predicate: F) -> Self {
        Self {
            entries: self
                .entries
                .into_iter()
                .filter(|(_, value)| predicate(value))
                .collect(),
        }
    }

    /// Keeps the entries satisfying a predicate over key and value.
    ///
    /// Same key-preservation rule as [`filter`](Collection::filter).
    #[must_use]
    pub fn filter_with_keys<F: FnMut(&K, &V) -> bool>(self, mut predicate: F) -> Self {
        Self {
            entries: self
                .entries
                .into_iter()
                .filter(|(key, value)| predicate(key, value))
                .collect(),
        }
    }

    /// Splits the collection into `(matched, unmatched)` by value predicate.
    ///
    /// Every entry lands in exactly one side; both sides follow
    /// [`filter`](Collection::filter)'s key-preservation rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Collection;
    ///
    /// let scores = Collection::from_entries([("Adi", 100), ("Budi", 80), ("Joko", 90)]);
    /// let (passing, failing) = scores.partition(|score| *score >= 90);
    ///
    /// assert_eq!(passing.into_entries(), vec![("Adi", 100), ("Joko", 90)]);
    /// assert_eq!(failing.into_entries(), vec![("Budi", 80)]);
    /// ```
    #[must_use]
    pub fn partition<F: FnMut(&V) -> bool>(self, mut predicate: F) -> (Self, Self) {
        let (matched, unmatched): (Vec<_>, Vec<_>) = self
            .entries
            .into_iter()
            .partition(|(_, value)| predicate(value));
        (Self { entries: matched }, Self { entries: unmatched })
    }

    /// Splits the collection into `(matched, unmatched)` by a predicate over
    /// key and value.
    #[must_use]
    pub fn partition_with_keys<F: FnMut(&K, &V) -> bool>(self, mut predicate: F) -> (Self, Self) {
        let (matched, unmatched): (Vec<_>, Vec<_>) = self
            .entries
            .into_iter()
            .partition(|(key, value)| predicate(key, value));
        (Self { entries: matched }, Self { entries: unmatched })
    }
}

// =============================================================================
// Combination
// =============================================================================

impl<K, V> Collection<K, V> {
    /// Pairs this collection's values with `other`'s, position by position.
    ///
    /// The result is sequentially keyed and as long as the shorter operand;
    /// extra elements of the longer operand are dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let zipped = Sequence::from_values([1, 2, 3]).zip([4, 5, 6]);
    /// assert_eq!(zipped.into_values(), vec![(1, 4), (2, 5), (3, 6)]);
    /// ```
    #[must_use]
    pub fn zip<U, I: IntoIterator<Item = U>>(self, other: I) -> Sequence<(V, U)> {
        Sequence::from_values(
            self.entries
                .into_iter()
                .map(|(_, value)| value)
                .zip(other),
        )
    }

    /// Appends `other`'s values after this collection's and re-keys the
    /// whole result sequentially, whatever either operand's keys were.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let combined = Sequence::from_values([1, 2, 3]).concat([4, 5, 6]);
    /// assert_eq!(combined.into_entries(), vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6)]);
    /// ```
    #[must_use]
    pub fn concat<I: IntoIterator<Item = V>>(self, other: I) -> Sequence<V> {
        Sequence::from_values(
            self.entries
                .into_iter()
                .map(|(_, value)| value)
                .chain(other),
        )
    }

    /// Builds an associative collection pairing this collection's values
    /// (as keys) with `values`, position by position.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::LengthMismatch`] if the operands differ in
    /// length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::{Collection, Sequence};
    ///
    /// let keyed = Sequence::from_values(["name", "country"])
    ///     .combine(["Adi", "Indonesia"])
    ///     .unwrap();
    ///
    /// assert_eq!(keyed, Collection::from_entries([("name", "Adi"), ("country", "Indonesia")]));
    /// ```
    pub fn combine<W, I>(self, values: I) -> Result<Collection<V, W>, CollectionError>
    where
        V: PartialEq,
        I: IntoIterator<Item = W>,
    {
        let values: Vec<W> = values.into_iter().collect();
        if values.len() != self.entries.len() {
            return Err(CollectionError::LengthMismatch {
                expected: self.entries.len(),
                actual: values.len(),
            });
        }
        Ok(Collection::from_entries(
            self.entries
                .into_iter()
                .map(|(_, value)| value)
                .zip(values),
        ))
    }
}

impl<K, I: IntoIterator> Collection<K, I> {
    /// Flattens a collection of sequences by exactly one level, re-keying
    /// sequentially.
    ///
    /// Inner elements keep their depth-first, left-to-right order. Deeper
    /// nesting is left intact: the inner elements of the inner sequences
    /// are not flattened recursively.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let flat = Sequence::from_values([vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).collapse();
    /// assert_eq!(flat.into_values(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// ```
    #[must_use]
    pub fn collapse(self) -> Sequence<I::Item> {
        Sequence::from_values(self.entries.into_iter().flat_map(|(_, nested)| nested))
    }
}

// =============================================================================
// Aggregation & Ordering
// =============================================================================

impl<K, V> Collection<K, V> {
    /// Folds the values left to right, seeding the accumulator with
    /// `initial`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let sum = Sequence::from_values([1, 2, 3]).fold(0, |accumulator, x| accumulator + x);
    /// assert_eq!(sum, 6);
    /// ```
    pub fn fold<A, F: FnMut(A, V) -> A>(self, initial: A, mut function: F) -> A {
        self.entries
            .into_iter()
            .fold(initial, |accumulator, (_, value)| {
                function(accumulator, value)
            })
    }

    /// Folds the values left to right with the first value seeding the
    /// accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection has no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let total = Sequence::from_values([60, 61, 50, 49]).reduce(|accumulator, x| accumulator + x);
    /// assert_eq!(total, Ok(220));
    /// ```
    pub fn reduce<F: FnMut(V, V) -> V>(self, function: F) -> Result<V, CollectionError> {
        let mut values = self.entries.into_iter().map(|(_, value)| value);
        let Some(first) = values.next() else {
            return Err(CollectionError::Empty {
                operation: "reduce",
            });
        };
        Ok(values.fold(first, function))
    }

    /// Sums the values, returning the additive identity for an empty
    /// collection.
    ///
    /// Non-numeric element types are rejected at compile time by the
    /// [`Zero`] bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let sequence: Sequence<i32> = (1..=9).collect();
    /// assert_eq!(sequence.sum(), 45);
    /// ```
    #[must_use]
    pub fn sum(&self) -> V
    where
        V: Zero + Clone,
    {
        self.entries
            .iter()
            .fold(V::zero(), |accumulator, (_, value)| {
                accumulator + value.clone()
            })
    }

    /// Averages the values as `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] for an empty collection, or
    /// [`CollectionError::TypeMismatch`] if a value cannot be represented
    /// as `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let sequence: Sequence<i32> = (1..=9).collect();
    /// assert_eq!(sequence.avg(), Ok(5.0));
    /// ```
    pub fn avg(&self) -> Result<f64, CollectionError>
    where
        V: ToPrimitive,
    {
        if self.entries.is_empty() {
            return Err(CollectionError::Empty { operation: "avg" });
        }
        let mut total = 0.0_f64;
        for (_, value) in &self.entries {
            total += value
                .to_f64()
                .ok_or(CollectionError::TypeMismatch { operation: "avg" })?;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = self.entries.len() as f64;
        Ok(total / count)
    }

    /// Returns a reference to the smallest value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] for an empty collection, or
    /// [`CollectionError::NotComparable`] when a compared pair has no
    /// defined ordering (for example a NaN float).
    pub fn min(&self) -> Result<&V, CollectionError>
    where
        V: PartialOrd,
    {
        self.extremum("min", Ordering::Less)
    }

    /// Returns a reference to the largest value.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`min`](Collection::min).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let sequence: Sequence<i32> = (1..=9).collect();
    /// assert_eq!(sequence.max(), Ok(&9));
    /// ```
    pub fn max(&self) -> Result<&V, CollectionError>
    where
        V: PartialOrd,
    {
        self.extremum("max", Ordering::Greater)
    }

    /// Scans the values for the one comparing `keep` against the running
    /// candidate.
    fn extremum(&self, operation: &'static str, keep: Ordering) -> Result<&V, CollectionError>
    where
        V: PartialOrd,
    {
        let mut values = self.entries.iter().map(|(_, value)| value);
        let Some(mut candidate) = values.next() else {
            return Err(CollectionError::Empty { operation });
        };
        for value in values {
            match value.partial_cmp(candidate) {
                Some(ordering) if ordering == keep => candidate = value,
                Some(_) => {}
                None => return Err(CollectionError::NotComparable { operation }),
            }
        }
        Ok(candidate)
    }

    /// Returns a new collection with the values in ascending order, each
    /// value keeping its original key.
    ///
    /// The sort is stable: equal values keep their insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NotComparable`] if a compared pair has no
    /// defined ordering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let sorted = Sequence::from_values([3, 1, 2]).sort().unwrap();
    /// assert_eq!(sorted.into_entries(), vec![(1, 1), (2, 2), (0, 3)]);
    /// ```
    pub fn sort(self) -> Result<Self, CollectionError>
    where
        V: PartialOrd,
    {
        self.sort_by_comparison("sort", |left, right| left.partial_cmp(right))
    }

    /// Returns a new collection with the values in descending order, each
    /// value keeping its original key.
    ///
    /// # Errors
    ///
    /// Same failure mode as [`sort`](Collection::sort).
    pub fn sort_desc(self) -> Result<Self, CollectionError>
    where
        V: PartialOrd,
    {
        self.sort_by_comparison("sort_desc", |left, right| right.partial_cmp(left))
    }

    /// Stable sort through a partial comparison, poisoning on the first
    /// incomparable pair.
    fn sort_by_comparison<F>(
        mut self,
        operation: &'static str,
        comparison: F,
    ) -> Result<Self, CollectionError>
    where
        F: Fn(&V, &V) -> Option<Ordering>,
    {
        let incomparable = Cell::new(false);
        self.entries.sort_by(|(_, left), (_, right)| {
            comparison(left, right).unwrap_or_else(|| {
                incomparable.set(true);
                Ordering::Equal
            })
        });
        if incomparable.get() {
            return Err(CollectionError::NotComparable { operation });
        }
        Ok(self)
    }
}

// =============================================================================
// Query & Rendering
// =============================================================================

impl<K, V> Collection<K, V> {
    /// Returns a reference to the first value in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection has no entries.
    pub fn first(&self) -> Result<&V, CollectionError> {
        self.entries
            .first()
            .map(|(_, value)| value)
            .ok_or(CollectionError::Empty { operation: "first" })
    }

    /// Returns a reference to the last value in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection has no entries.
    pub fn last(&self) -> Result<&V, CollectionError> {
        self.entries
            .last()
            .map(|(_, value)| value)
            .ok_or(CollectionError::Empty { operation: "last" })
    }

    /// Returns a reference to the first value satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NotFound`] when no value qualifies —
    /// distinguishable from [`first`](Collection::first)'s `Empty` on an
    /// empty collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let sequence = Sequence::from_values([1, 2, 3, 4]);
    /// assert_eq!(sequence.first_where(|x| x % 2 == 0), Ok(&2));
    /// ```
    pub fn first_where<F: FnMut(&V) -> bool>(
        &self,
        mut predicate: F,
    ) -> Result<&V, CollectionError> {
        self.entries
            .iter()
            .map(|(_, value)| value)
            .find(|&value| predicate(value))
            .ok_or(CollectionError::NotFound {
                operation: "first_where",
            })
    }

    /// Returns a reference to the last value satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::NotFound`] when no value qualifies.
    pub fn last_where<F: FnMut(&V) -> bool>(
        &self,
        mut predicate: F,
    ) -> Result<&V, CollectionError> {
        self.entries
            .iter()
            .rev()
            .map(|(_, value)| value)
            .find(|&value| predicate(value))
            .ok_or(CollectionError::NotFound {
                operation: "last_where",
            })
    }

    /// Returns `true` if any value equals `target`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let names = Sequence::from_values(["Eko", "Kurniawan", "Khannedy"]);
    /// assert!(names.contains(&"Eko"));
    /// assert!(!names.contains(&"Adi"));
    /// ```
    #[must_use]
    pub fn contains(&self, target: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries.iter().any(|(_, value)| value == target)
    }

    /// Returns `true` if any value satisfies `predicate`.
    #[must_use]
    pub fn contains_where<F: FnMut(&V) -> bool>(&self, mut predicate: F) -> bool {
        self.entries.iter().any(|(_, value)| predicate(value))
    }

    /// Returns a reference to one value chosen uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Empty`] if the collection has no entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let names = Sequence::from_values(["Eko", "Kurniawan"]);
    /// let chosen = names.random().unwrap();
    /// assert!(names.contains(chosen));
    /// ```
    pub fn random(&self) -> Result<&V, CollectionError> {
        self.entries
            .as_slice()
            .choose(&mut rand::rng())
            .map(|(_, value)| value)
            .ok_or(CollectionError::Empty {
                operation: "random",
            })
    }

    /// Renders the values as strings concatenated with `separator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let names = Sequence::from_values(["Eko", "Kurniawan", "Khannedy"]);
    /// assert_eq!(names.join("-"), "Eko-Kurniawan-Khannedy");
    /// ```
    #[must_use]
    pub fn join(&self, separator: &str) -> String
    where
        V: fmt::Display,
    {
        self.join_final(separator, separator)
    }

    /// Renders the values as strings, joining consecutive pairs with
    /// `separator` and the final pair with `final_separator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use collectra::collection::Sequence;
    ///
    /// let names = Sequence::from_values(["Eko", "Kurniawan", "Khannedy"]);
    /// assert_eq!(names.join_final(", ", " and "), "Eko, Kurniawan and Khannedy");
    /// ```
    #[must_use]
    pub fn join_final(&self, separator: &str, final_separator: &str) -> String
    where
        V: fmt::Display,
    {
        let last_position = self.entries.len().saturating_sub(1);
        let mut rendered = String::new();
        for (position, (_, value)) in self.entries.iter().enumerate() {
            if position > 0 {
                rendered.push_str(if position == last_position {
                    final_separator
                } else {
                    separator
                });
            }
            rendered.push_str(&value.to_string());
        }
        rendered
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to a collection's values, in insertion order.
pub struct CollectionIterator<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for CollectionIterator<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for CollectionIterator<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for CollectionIterator<'_, K, V> {}

/// Iterator over `(key, value)` reference pairs, in insertion order.
pub struct CollectionEntries<'a, K, V> {
    inner: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for CollectionEntries<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for CollectionEntries<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for CollectionEntries<'_, K, V> {}

/// Owning iterator over a collection's values, in insertion order.
pub struct CollectionIntoIterator<K, V> {
    inner: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for CollectionIntoIterator<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for CollectionIntoIterator<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for CollectionIntoIterator<K, V> {}

impl<K, V> IntoIterator for Collection<K, V> {
    type Item = V;
    type IntoIter = CollectionIntoIterator<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        CollectionIntoIterator {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a Collection<K, V> {
    type Item = &'a V;
    type IntoIter = CollectionIterator<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<K, V> Default for Collection<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<V> for Collection<usize, V> {
    fn from_iter<I: IntoIterator<Item = V>>(values: I) -> Self {
        Self::from_values(values)
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for Collection<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Self::from_entries(entries)
    }
}

impl<V> From<Vec<V>> for Collection<usize, V> {
    fn from(values: Vec<V>) -> Self {
        Self::from_values(values)
    }
}

impl<V, const N: usize> From<[V; N]> for Collection<usize, V> {
    fn from(values: [V; N]) -> Self {
        Self::from_values(values)
    }
}

impl<K: PartialEq, V> From<Vec<(K, V)>> for Collection<K, V> {
    fn from(entries: Vec<(K, V)>) -> Self {
        Self::from_entries(entries)
    }
}

impl<K: PartialEq, V, const N: usize> From<[(K, V); N]> for Collection<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        Self::from_entries(entries)
    }
}

impl<V> Extend<V> for Collection<usize, V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, values: I) {
        let mut next_key = self.next_sequential_key();
        for value in values {
            self.entries.push((next_key, value));
            next_key += 1;
        }
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for Collection<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, entries: I) {
        for (key, value) in entries {
            self.insert(key, value);
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Collection<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries()).finish()
    }
}

impl<K, V: fmt::Display> fmt::Display for Collection<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for (_, value) in &self.entries {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{value}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize> serde::Serialize for Collection<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.entries() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct CollectionVisitor<K, V> {
    marker: std::marker::PhantomData<(K, V)>,
}

#[cfg(feature = "serde")]
impl<K, V> CollectionVisitor<K, V> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for CollectionVisitor<K, V>
where
    K: serde::Deserialize<'de> + PartialEq,
    V: serde::Deserialize<'de>,
{
    type Value = Collection<K, V>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a map of entries")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut collection = Collection {
            entries: Vec::with_capacity(capacity),
        };
        while let Some((key, value)) = access.next_entry()? {
            collection.insert(key, value);
        }
        Ok(collection)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Collection<K, V>
where
    K: serde::Deserialize<'de> + PartialEq,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(CollectionVisitor::new())
    }
}

// =============================================================================
// Thread Safety
// =============================================================================

static_assertions::assert_impl_all!(Collection<usize, i32>: Send, Sync);
static_assertions::assert_impl_all!(Collection<String, String>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
