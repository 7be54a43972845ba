// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spatial hierarchy: the aggregation chain and the ordered storey stack.

use brownstone_geometry::feet;
use brownstone_model::{
    Building, BuildingModel, BuildingParameters, IdSource, Project, Site, Storey,
};

use crate::error::Result;

/// Storey names, bottom to top. The final entry is the roof sentinel.
const STOREY_NAMES: [&str; 6] = [
    "Basement",
    "First Floor",
    "Second Floor",
    "Third Floor",
    "Fourth Floor",
    "Roof",
];

/// Stack position of the ground (first) floor.
pub const GROUND_STOREY: usize = 1;

/// Build the Project -> Site -> Building chain and the ordered storey
/// stack from the floor-height parameters.
///
/// Elevations are a running sum: the basement sits a basement-height below
/// the ground datum, the ground floor at zero, and each later storey at
/// the previous elevation plus the previous floor's height. The final
/// "Roof" storey marks the top of the last occupied floor; it owns the
/// roof cap but no walls.
pub fn build_hierarchy(
    params: &BuildingParameters,
    ids: &mut dyn IdSource,
) -> Result<BuildingModel> {
    params.validate()?;

    let project = Project {
        id: ids.next_id(),
        name: "New York Brownstone".into(),
        description: "Brownstone on a 50' x 100' lot".into(),
    };
    let site = Site {
        id: ids.next_id(),
        name: "Brownstone Site".into(),
        description: "Site for brownstone building".into(),
    };
    let building = Building {
        id: ids.next_id(),
        name: "New York Brownstone".into(),
        description: "Classic brownstone building".into(),
    };
    let mut model = BuildingModel::new(project, site, building);

    let heights = params.floor_heights();
    let mut elevations = Vec::with_capacity(STOREY_NAMES.len());
    elevations.push(-feet(params.basement_height));
    let mut top = 0.0;
    elevations.push(top);
    for height in &heights[GROUND_STOREY..] {
        top += feet(*height);
        elevations.push(top);
    }

    for (index, (name, &elevation)) in STOREY_NAMES.iter().zip(&elevations).enumerate() {
        tracing::debug!(name, elevation, "storey");
        model.push_storey(Storey {
            id: ids.next_id(),
            name: (*name).to_string(),
            description: format!("{name} of the brownstone"),
            elevation,
            index,
        })?;
    }

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use brownstone_model::SequentialIdSource;

    fn build_default() -> BuildingModel {
        let params = BuildingParameters::default();
        let mut ids = SequentialIdSource::default();
        build_hierarchy(&params, &mut ids).unwrap()
    }

    #[test]
    fn test_storey_names_bottom_to_top() {
        let model = build_default();
        let names: Vec<_> = model.storeys().map(|(_, s)| s.name.clone()).collect();
        assert_eq!(
            names,
            ["Basement", "First Floor", "Second Floor", "Third Floor", "Fourth Floor", "Roof"]
        );
    }

    #[test]
    fn test_elevation_differences_equal_nominal_heights() {
        let params = BuildingParameters::default();
        let mut ids = SequentialIdSource::default();
        let model = build_hierarchy(&params, &mut ids).unwrap();

        let elevations: Vec<f64> = model.storeys().map(|(_, s)| s.elevation).collect();
        let heights = params.floor_heights();
        for i in 0..heights.len() {
            assert_relative_eq!(
                elevations[i + 1] - elevations[i],
                feet(heights[i]),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_basement_below_ground_datum() {
        let model = build_default();
        let (_, basement) = model.storeys().next().unwrap();
        assert_relative_eq!(basement.elevation, -feet(9.0), epsilon = 1e-12);

        let ground = model.storey_entry(GROUND_STOREY).unwrap().1;
        assert_relative_eq!(ground.elevation, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sentinel_marks_top_of_last_floor() {
        let model = build_default();
        let (_, sentinel) = model.storeys().last().unwrap();
        assert_eq!(sentinel.name, "Roof");
        // 10 + 14 + 12 + 12 ft of occupied floors above the datum.
        assert_relative_eq!(sentinel.elevation, feet(48.0), epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_parameters_abort_before_construction() {
        let mut params = BuildingParameters::default();
        params.building_depth = -80.0;
        let mut ids = SequentialIdSource::default();
        assert!(build_hierarchy(&params, &mut ids).is_err());
    }
}
