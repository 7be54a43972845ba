// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for model construction.

use crate::graph::{ElementKey, StoreyKey};

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the model graph.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A dimensional input was zero or negative.
    #[error("invalid parameter {name}: {value} (must be positive)")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A category name outside the closed set reached the model boundary.
    /// In-process dispatch is exhaustive over enums and cannot hit this.
    #[error("unsupported element category: {0}")]
    UnsupportedCategory(String),

    /// A storey index outside the stack was referenced. Fatal to the whole
    /// build; hierarchy integrity cannot be guaranteed after a partial
    /// construction.
    #[error("storey index {index} out of range: stack has {len} storeys")]
    StoreyOutOfRange { index: usize, len: usize },

    /// A storey key that does not belong to this model's arena.
    #[error("storey not found: {0:?}")]
    StoreyNotFound(StoreyKey),

    /// An element was assigned to a storey a second time.
    #[error("element {0:?} is already contained in a storey")]
    DuplicateContainment(ElementKey),

    /// A storey was pushed at or below the current top of the stack.
    #[error("storey elevation {elevation} does not rise above the stack top at {top}")]
    NonIncreasingElevation { elevation: f64, top: f64 },
}
