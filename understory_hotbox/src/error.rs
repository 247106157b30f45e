// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.
//!
//! Pointer handling never fails; misses, stale notifications, and cancelled
//! gestures are ordinary states. Only building a menu from an inconsistent
//! element list is rejected.

use core::fmt;

/// Reasons a [`Menu`](crate::menu::Menu) cannot be built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuError<K> {
    /// Two elements share an identifier.
    DuplicateElement(K),
    /// More than one element is a center control.
    MultipleCenters {
        /// The first center declared.
        first: K,
        /// The offending second center.
        second: K,
    },
}

impl<K: fmt::Debug> fmt::Display for MenuError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateElement(id) => write!(f, "duplicate element id {id:?}"),
            Self::MultipleCenters { first, second } => {
                write!(f, "element {second:?} is a second center (first: {first:?})")
            }
        }
    }
}

impl<K: fmt::Debug> core::error::Error for MenuError<K> {}
