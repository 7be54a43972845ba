// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serializable summary of a generated model.
//!
//! The report carries counts and bounds only; the full graph goes to the
//! persistence collaborator, not through here.

use brownstone_geometry::Point3;
use brownstone_model::{BuildingModel, CategoryFamily, Element};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds of the generated geometry, metres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelBounds {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl ModelBounds {
    fn empty() -> Self {
        Self {
            min: [f64::MAX; 3],
            max: [f64::MIN; 3],
        }
    }

    fn include(&mut self, p: Point3<f64>) {
        let coords = [p.x, p.y, p.z];
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(coords[axis]);
            self.max[axis] = self.max[axis].max(coords[axis]);
        }
    }

    fn or_origin(self) -> Self {
        if self.min[0] > self.max[0] {
            Self {
                min: [0.0; 3],
                max: [0.0; 3],
            }
        } else {
            self
        }
    }
}

/// Element count for one category family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: CategoryFamily,
    pub count: usize,
}

/// Per-storey element summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreyReport {
    pub name: String,
    /// Elevation above the ground datum, metres.
    pub elevation: f64,
    pub element_count: usize,
    pub by_category: Vec<CategoryCount>,
}

/// Whole-model summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingReport {
    pub project: String,
    pub building: String,
    pub element_count: usize,
    pub bounds: ModelBounds,
    pub storeys: Vec<StoreyReport>,
}

impl BuildingReport {
    /// Summarize a finished model.
    pub fn from_model(model: &BuildingModel) -> Self {
        let mut bounds = ModelBounds::empty();
        for (_, element) in model.elements() {
            sweep_bounds(&mut bounds, element);
        }

        let storeys = model
            .storeys()
            .map(|(key, storey)| {
                let members = model.elements_in(key);
                let mut counts: FxHashMap<CategoryFamily, usize> = FxHashMap::default();
                for &member in members {
                    if let Some(element) = model.element(member) {
                        *counts.entry(element.category.family()).or_default() += 1;
                    }
                }
                let by_category = CategoryFamily::ALL
                    .iter()
                    .filter_map(|family| {
                        counts.get(family).map(|&count| CategoryCount {
                            category: *family,
                            count,
                        })
                    })
                    .collect();

                StoreyReport {
                    name: storey.name.clone(),
                    elevation: storey.elevation,
                    element_count: members.len(),
                    by_category,
                }
            })
            .collect();

        Self {
            project: model.project().name.clone(),
            building: model.building().name.clone(),
            element_count: model.element_count(),
            bounds: bounds.or_origin(),
            storeys,
        }
    }

    /// Elements in one category family across the whole model.
    pub fn count_of(&self, family: CategoryFamily) -> usize {
        self.storeys
            .iter()
            .flat_map(|s| &s.by_category)
            .filter(|c| c.category == family)
            .map(|c| c.count)
            .sum()
    }
}

/// Sweep an element's profile corners through its frame and extrusion;
/// the same data the viewer collaborator tessellates from.
fn sweep_bounds(bounds: &mut ModelBounds, element: &Element) {
    let sweep =
        element.placement.direction_to_world(element.solid.direction) * element.solid.depth;
    for corner in element.solid.profile.points() {
        let base = element.placement.project(*corner);
        bounds.include(base);
        bounds.include(base + sweep);
    }
}
