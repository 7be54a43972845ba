// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Brownstone Generator
//!
//! Parametric construction of a hierarchical brownstone model from a small
//! set of dimensional inputs.
//!
//! Generation is one linear, synchronous pass: the spatial hierarchy is
//! built first, then the element generators (walls, slabs, openings, the
//! stoop, fixtures, MEP units) each run read-only over the finished storey
//! stack and merge their elements into containment. No generator reads
//! another's output.
//!
//! ```rust,ignore
//! use brownstone_generator::{generate, GenerateOptions};
//! use brownstone_model::{BuildingParameters, UuidIdSource};
//!
//! let params = BuildingParameters::default();
//! let mut ids = UuidIdSource::default();
//! let model = generate(&params, &mut ids, GenerateOptions::default())?;
//! ```

pub mod error;
pub mod fixtures;
pub mod hierarchy;
pub mod mep;
pub mod openings;
pub mod report;
pub mod slabs;
pub mod stoop;
pub mod walls;

mod metric;

pub use error::{Error, Result};
pub use report::{BuildingReport, CategoryCount, ModelBounds, StoreyReport};
pub use walls::DegeneratePolicy;

use brownstone_model::{BuildingModel, BuildingParameters, IdSource};

/// Options controlling a generation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// How zero-length wall requests are treated.
    pub degenerate_walls: DegeneratePolicy,
}

/// Build the complete model in one pass.
///
/// The identifier source is injected so callers choose between random
/// production ids and reproducible test ids; everything else about the run
/// is a pure function of the parameters.
pub fn generate(
    params: &BuildingParameters,
    ids: &mut dyn IdSource,
    options: GenerateOptions,
) -> Result<BuildingModel> {
    let mut model = hierarchy::build_hierarchy(params, ids)?;

    let walls = walls::generate_walls(&mut model, params, ids, options.degenerate_walls)?;
    tracing::info!(count = walls, "generated walls");

    let slabs = slabs::generate_slabs(&mut model, params, ids)?;
    tracing::info!(count = slabs, "generated slabs");

    let windows = openings::generate_windows(&mut model, params, ids)?;
    let doors = openings::generate_doors(&mut model, params, ids)?;
    tracing::info!(windows, doors, "generated openings");

    stoop::generate_stoop(&mut model, params, ids)?;

    let fixtures = fixtures::generate_fixtures(&mut model, params, ids)?;
    let mep = mep::generate_mep_units(&mut model, params, ids)?;
    tracing::info!(fixtures, mep, "generated contents");

    Ok(model)
}
