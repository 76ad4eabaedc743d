// Copyright 2016 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bridges a raw probe result into the public [`crate::entry::Entry`]
//! view. `HashMap::entry` is the only caller, and it only ever holds a
//! `&mut RawTable`, so this carries just enough to build an
//! [`crate::entry::OccupiedEntry`] or [`crate::entry::VacantEntry`]
//! from afterward.

use crate::table::SafeHash;

pub(crate) enum InternalEntry<K> {
    Occupied(usize),
    Vacant(SafeHash, K),
}
