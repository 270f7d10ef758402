// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for duovec.
use thiserror::Error;

/// Errors that can occur when working with a [`DuoVec`](crate::DuoVec).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DuoVecError {
    /// A requested initial capacity was zero.
    #[error("capacity must be greater than zero")]
    ZeroCapacity,

    /// The allocator could not satisfy a requested allocation.
    #[error("allocation failed")]
    AllocationFailed,

    /// An index was outside the logical length of the container.
    #[error("index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The logical length at the time of the access.
        len: usize,
    },

    /// A mutation required growth, but the container cannot grow.
    ///
    /// Returned when the container is in static mode, or when the growth
    /// allocation itself fails in dynamic mode. Either way the container
    /// is left exactly as it was.
    #[error("capacity exceeded")]
    CapacityExceeded,
}
