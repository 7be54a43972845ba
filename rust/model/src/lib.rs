// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Brownstone Model
//!
//! Spatial containers, building elements, materials and the arena-based
//! model graph the generator produces.
//!
//! Storeys and elements live in slot maps with stable generational keys;
//! the Project -> Site -> Building -> Storeys aggregation chain and the
//! storey -> element containment relation are explicit indices over those
//! keys rather than nested ownership. The finished graph is handed
//! read-only to the persistence collaborator; nothing here writes files.

pub mod element;
pub mod error;
pub mod graph;
pub mod ids;
pub mod material;
pub mod parameters;
pub mod storey;

pub use element::{CategoryFamily, Element, ElementCategory, FixtureKind, MepKind, SlabRole};
pub use error::{Error, Result};
pub use graph::{BuildingModel, ElementKey, StoreyKey};
pub use ids::{GlobalId, IdSource, SequentialIdSource, UuidIdSource};
pub use material::{
    DirectionSense, LayerSetAxis, MaterialLayer, MaterialLayerSet, MaterialLayerSetUsage,
};
pub use parameters::BuildingParameters;
pub use storey::{Building, Project, Site, Storey};
