// Copyright 2016 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

/// Errors raised by fallible, non-panicking operations on [`HashMap`](crate::HashMap).
///
/// Lookup and indexing failures (a missing key under `Index` or `Entry`) are
/// not represented here: they follow the same convention as
/// `std::collections::HashMap`, returning `Option` or panicking, since this
/// crate's public surface is deliberately modeled on the standard map API.
#[derive(Debug, Error, PartialEq)]
pub enum RobinMapError {
    /// `set_max_load_factor` was called with a value outside `[0.01, 1.0]`.
    #[error("max load factor {0} is outside the valid range [0.01, 1.0]")]
    InvalidLoadFactor(f32),

    /// The allocator could not supply storage for the requested capacity.
    #[error("failed to allocate storage for {requested} buckets")]
    AllocationFailure {
        /// The bucket count the table attempted to allocate.
        requested: usize,
    },
}
