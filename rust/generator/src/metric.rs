// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Footprint and thickness parameters converted to metres, once per run.

use brownstone_geometry::feet;
use brownstone_model::BuildingParameters;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Metric {
    pub width: f64,
    pub depth: f64,
    pub wall_thickness: f64,
    pub floor_thickness: f64,
    pub roof_thickness: f64,
}

impl Metric {
    pub fn new(params: &BuildingParameters) -> Self {
        Self {
            width: feet(params.building_width),
            depth: feet(params.building_depth),
            wall_thickness: feet(params.wall_thickness),
            floor_thickness: feet(params.floor_thickness),
            roof_thickness: feet(params.roof_thickness),
        }
    }
}
