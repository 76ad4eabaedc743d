// Copyright 2016 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::mem;

use crate::table::{RawTable, SafeHash};

pub use self::Entry::*;

/// A view into a single location in a map, which may be vacant or occupied.
pub enum Entry<'a, K, V> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
}

/// A view into a single occupied location in a [`crate::HashMap`].
pub struct OccupiedEntry<'a, K, V> {
    table: &'a mut RawTable<K, V>,
    index: usize,
}

/// A view into a single empty location in a [`crate::HashMap`].
pub struct VacantEntry<'a, K, V> {
    table: &'a mut RawTable<K, V>,
    hash: SafeHash,
    key: K,
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        match *self {
            Occupied(ref entry) => entry.key(),
            Vacant(ref entry) => entry.key(),
        }
    }

    /// Ensures a value is in the entry by inserting `default` if empty,
    /// and returns a mutable reference to the value in the entry.
    pub fn or_insert(self, default: V) -> &'a mut V
    where
        K: Eq,
    {
        match self {
            Occupied(entry) => entry.into_mut(),
            Vacant(entry) => entry.insert(default),
        }
    }

    /// Ensures a value is in the entry by inserting the result of
    /// `default` if empty, and returns a mutable reference to the value
    /// in the entry.
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V
    where
        K: Eq,
    {
        match self {
            Occupied(entry) => entry.into_mut(),
            Vacant(entry) => entry.insert(default()),
        }
    }

    /// Applies `f` to the value in place if the entry is occupied, then
    /// returns the (possibly still-vacant) entry for further chaining.
    pub fn and_modify<F: FnOnce(&mut V)>(self, f: F) -> Self {
        match self {
            Occupied(mut entry) => {
                f(entry.get_mut());
                Occupied(entry)
            }
            Vacant(entry) => Vacant(entry),
        }
    }
}

impl<'a, K: Eq, V: Default> Entry<'a, K, V> {
    /// Ensures a value is in the entry by inserting `V::default()` if
    /// empty, and returns a mutable reference to the value in the entry.
    pub fn or_default(self) -> &'a mut V {
        match self {
            Occupied(entry) => entry.into_mut(),
            Vacant(entry) => entry.insert(V::default()),
        }
    }
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    pub(crate) fn new(table: &'a mut RawTable<K, V>, index: usize) -> Self {
        OccupiedEntry { table, index }
    }

    /// Gets a reference to the entry's key.
    pub fn key(&self) -> &K {
        unsafe { self.table.key_at(self.index) }
    }

    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        unsafe { self.table.value_at(self.index) }
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        unsafe { self.table.value_at_mut(self.index) }
    }

    /// Converts the entry into a mutable reference bound to the map's
    /// own lifetime.
    pub fn into_mut(self) -> &'a mut V {
        unsafe { self.table.value_at_mut(self.index) }
    }

    /// Sets the value of the entry, returning the entry's old value.
    pub fn insert(&mut self, mut value: V) -> V {
        mem::swap(&mut value, self.get_mut());
        value
    }

    /// Takes the value out of the entry, removing it from the map.
    pub fn remove(self) -> V {
        let (_, value) = self.table.erase_at_owned(self.index);
        value
    }

    /// Takes the key and value out of the entry, removing it from the map.
    pub fn remove_entry(self) -> (K, V) {
        self.table.erase_at_owned(self.index)
    }
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    pub(crate) fn new(table: &'a mut RawTable<K, V>, hash: SafeHash, key: K) -> Self {
        VacantEntry { table, hash, key }
    }

    /// Gets a reference to the entry's key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Takes ownership of the entry's key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Sets the value of the entry with this vacant entry's key, and
    /// returns a mutable reference to it.
    pub fn insert(self, value: V) -> &'a mut V
    where
        K: Eq,
    {
        let VacantEntry { table, hash, key } = self;
        let (index, inserted) = table.insert(hash, key, value);
        debug_assert!(inserted, "vacant entry found occupied on insert");
        unsafe { table.value_at_mut(index) }
    }
}
