// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bounds-checked sequence container over owned or caller-supplied storage.
//!
//! [`DuoVec`] is an ordered, homogeneous container with two mutually
//! exclusive ownership modes:
//!
//! - **Dynamic**: the container owns a heap buffer and doubles its
//!   capacity when a mutation runs out of room.
//! - **Static**: the container fills a caller-supplied `&mut [T]` it
//!   never reallocates or frees. A full static container rejects the
//!   triggering operation instead of silently failing partway.
//!
//! Every access is bounds-checked against the logical length, every
//! mutation is atomic with respect to failure, and a buffer is never
//! shared between two containers: `Clone` is not implemented, moves
//! transfer ownership, and [`DuoVec::try_clone`] is the explicit deep
//! copy.
//!
//! # Example: dynamic mode
//!
//! ```rust
//! use duovec::{DuoVec, DuoVecError};
//!
//! fn example() -> Result<(), DuoVecError> {
//!     let mut vec = DuoVec::with_capacity(2)?;
//!     vec.push(10)?;
//!     vec.push(20)?;
//!
//!     // Full: the next push doubles the capacity
//!     vec.push(30)?;
//!     assert_eq!(vec.len(), 3);
//!     assert_eq!(vec.capacity(), 4);
//!     assert_eq!(vec.as_slice(), &[10, 20, 30]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: static mode
//!
//! ```rust
//! use duovec::{DuoVec, DuoVecError};
//!
//! let mut slots = [0i32; 3];
//! let mut vec = DuoVec::from_slots(&mut slots);
//!
//! vec.push(1).unwrap();
//! vec.push(2).unwrap();
//! vec.push(3).unwrap();
//!
//! // The caller's buffer is full and will not be reallocated
//! assert_eq!(vec.push(4), Err(DuoVecError::CapacityExceeded));
//! assert_eq!(vec.len(), 3);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod duo_vec;
mod error;
mod storage;

pub use duo_vec::{DuoVec, Mode};
pub use error::DuoVecError;
