// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error type for generation runs.

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a generation run. There is no partial-result
/// recovery; a failed run leaves nothing usable behind.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("model error: {0}")]
    Model(#[from] brownstone_model::Error),

    #[error("geometry error: {0}")]
    Geometry(#[from] brownstone_geometry::Error),
}
