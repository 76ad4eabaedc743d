// Copyright 2016 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An open-addressed hash table that resolves collisions by Robin Hood
//! displacement: on every insertion, the entry that has travelled
//! farthest from its ideal bucket keeps the slot, and whichever entry
//! would otherwise have to travel farther is evicted and carried
//! forward instead. This bounds the variance of probe lengths far
//! below plain linear probing, at the cost of touching more entries
//! per insertion.
//!
//! [`HashMap`] is deliberately shaped like `std::collections::HashMap`:
//! same entry API, same `Borrow`-generic lookups, same iterator
//! family. The probing scheme underneath is the entire reason this
//! crate exists; everything above it should feel unsurprising.

mod entry;
mod error;
mod internal_entry;
mod iter;
mod primes;
mod table;

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};
use std::iter::FromIterator;
use std::ops::Index;

pub use crate::entry::{Entry, OccupiedEntry, VacantEntry};
pub use crate::error::RobinMapError;
pub use crate::iter::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};

use crate::internal_entry::InternalEntry;
use crate::table::{RawTable, SafeHash};

/// A hash map using Robin Hood open addressing.
///
/// ```
/// use robin_map::HashMap;
///
/// let mut book_reviews = HashMap::new();
/// book_reviews.insert("Adventures of Huckleberry Finn", "My favorite book.");
/// book_reviews.insert("Grimms' Fairy Tales", "Masterpiece.");
/// assert_eq!(book_reviews.len(), 2);
/// assert_eq!(book_reviews.get("Grimms' Fairy Tales"), Some(&"Masterpiece."));
/// ```
pub struct HashMap<K, V, S = RandomState> {
    hash_builder: S,
    table: RawTable<K, V>,
}

impl<K: Hash + Eq, V> HashMap<K, V, RandomState> {
    /// Creates an empty map. No storage is allocated until the first
    /// insertion.
    pub fn new() -> Self {
        HashMap {
            hash_builder: RandomState::new(),
            table: RawTable::new(),
        }
    }

    /// Creates an empty map with room for at least `capacity` elements
    /// without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut map = HashMap::new();
        map.table.reserve(capacity);
        map
    }
}

impl<K, V, S> Default for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        HashMap::with_hasher(S::default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> HashMap<K, V, S> {
    /// Creates an empty map that hashes keys with `hash_builder`
    /// instead of the default `RandomState`.
    pub fn with_hasher(hash_builder: S) -> Self {
        HashMap {
            hash_builder,
            table: RawTable::new(),
        }
    }

    /// Creates an empty map with room for `capacity` elements, hashing
    /// keys with `hash_builder`.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        let mut map = HashMap::with_hasher(hash_builder);
        map.table.reserve(capacity);
        map
    }

    /// Returns a reference to the map's `BuildHasher`.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// The number of key-value pairs stored.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The number of buckets currently allocated. Always `0` or prime.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// The current `len() / capacity()` ratio, or `0.0` for an
    /// unallocated table.
    pub fn load_factor(&self) -> f32 {
        self.table.load_factor()
    }

    /// The load factor past which an insertion triggers growth.
    pub fn max_load_factor(&self) -> f32 {
        self.table.max_load_factor()
    }

    /// Sets the max load factor. Must lie in `[0.01, 1.0]`; does not
    /// itself reallocate, only changes when the *next* insertion will.
    pub fn set_max_load_factor(&mut self, factor: f32) -> Result<(), RobinMapError> {
        self.table.set_max_load_factor(factor)
    }

    fn make_hash<Q>(&self, key: &Q) -> SafeHash
    where
        Q: Hash + ?Sized,
    {
        let mut hasher = self.hash_builder.build_hasher();
        key.hash(&mut hasher);
        SafeHash::new(hasher.finish())
    }

    /// Removes every entry, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Reserves capacity for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.table.reserve(additional);
    }

    /// Grows the table to at least `buckets` buckets (rounded up to the
    /// next prime), and to whatever `len()` requires under the current
    /// load factor, whichever is larger. Never shrinks.
    pub fn rehash(&mut self, buckets: usize) {
        self.table.rehash(buckets);
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.make_hash(key);
        self.table.contains(hash, key)
    }

    /// Returns a reference to the value for `key`, if present.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.make_hash(key);
        self.table.get(hash, key)
    }

    /// Returns the stored key and value for `key`, if present. Useful
    /// when `K` carries data beyond what `Q` compares, since the
    /// returned `&K` is the one actually stored in the map.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.make_hash(key);
        self.table.get_key_value(hash, key)
    }

    /// Returns a mutable reference to the value for `key`, if present.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.make_hash(key);
        self.table.get_mut(hash, key)
    }

    /// Inserts `key` and `value`. Returns the value previously stored
    /// under `key`, if any; on return the map holds `value`, not the
    /// old one.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.make_hash(&key);
        let (_, old) = self.table.insert_or_replace(hash, key, value);
        old
    }

    /// Removes `key`, returning its value if present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.make_hash(key);
        self.table.remove(hash, key).map(|(_, v)| v)
    }

    /// Removes `key`, returning its stored key and value if present.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.make_hash(key);
        self.table.remove(hash, key)
    }

    /// Removes whatever is stored at raw slot `index` (which must be
    /// occupied) and backward-shifts its probe chain. Returns the index
    /// iteration should resume from. Exposed for callers walking the
    /// map by slot index (e.g. an external iterator that erases as it
    /// goes); `index` values come from [`HashMap::iter`]/[`HashMap::keys`]
    /// only up to the next mutation, same as any other reference into
    /// the map.
    pub fn remove_at(&mut self, index: usize) -> usize {
        self.table.erase_at(index)
    }

    /// Removes every occupied slot in the wrap-aware range
    /// `[first, last)` and backward-shifts the survivors, returning
    /// `first` as the iteration resumption point.
    pub fn remove_range(&mut self, first: usize, last: usize) -> usize {
        self.table.erase_range(first, last)
    }

    /// Gets the given key's entry for in-place manipulation.
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        let hash = self.make_hash(&key);
        match self.table.entry_point(hash, key) {
            InternalEntry::Occupied(index) => Entry::Occupied(OccupiedEntry::new(&mut self.table, index)),
            InternalEntry::Vacant(hash, key) => Entry::Vacant(VacantEntry::new(&mut self.table, hash, key)),
        }
    }

    /// An iterator over `(&K, &V)` pairs, in arbitrary order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.table)
    }

    /// An iterator over `(&K, &mut V)` pairs, in arbitrary order.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&mut self.table)
    }

    /// An iterator over the map's keys, in arbitrary order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(&self.table)
    }

    /// An iterator over the map's values, in arbitrary order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(&self.table)
    }

    /// An iterator over mutable references to the map's values, in
    /// arbitrary order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut::new(&mut self.table)
    }
}

impl<K, V, S> IntoIterator for HashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> IntoIter<K, V> {
        IntoIter::new(self.table)
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

impl<K, V, S> FromIterator<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut map = HashMap::with_capacity_and_hasher(lower, S::default());
        map.extend(iter);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V, S> Extend<(&'a K, &'a V)> for HashMap<K, V, S>
where
    K: Hash + Eq + Copy,
    V: Copy,
    S: BuildHasher,
{
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(*k, *v);
        }
    }
}

impl<K, V, S> Clone for HashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn clone(&self) -> Self {
        let mut map = HashMap::with_capacity_and_hasher(self.len(), self.hash_builder.clone());
        for (k, v) in self.iter() {
            map.insert(k.clone(), v.clone());
        }
        map
    }
}

impl<K, V, S> fmt::Debug for HashMap<K, V, S>
where
    K: Hash + Eq + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, Q, V, S> Index<&Q> for HashMap<K, V, S>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// Panics if `key` is not present, exactly like
    /// `std::collections::HashMap`'s `Index` impl.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, S> PartialEq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .all(|(k, v)| other.get(k).map_or(false, |v2| v == v2))
    }
}

impl<K, V, S> Eq for HashMap<K, V, S>
where
    K: Hash + Eq,
    V: Eq,
    S: BuildHasher,
{
}
