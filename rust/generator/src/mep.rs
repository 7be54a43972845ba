// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mechanical, electrical and plumbing units in the basement.

use brownstone_model::{
    BuildingModel, BuildingParameters, ElementCategory, IdSource, MepKind,
};

use crate::error::Result;
use crate::fixtures::contents_element;
use crate::metric::Metric;

/// Stack position of the plant floor.
const BASEMENT: usize = 0;

/// Mounting height above the basement floor, feet.
const MOUNT: f64 = 1.0;

/// All MEP housings carry the same sheet-metal tag.
const MEP_MATERIAL: &str = "Metal";

struct MepSpec {
    name: &'static str,
    kind: MepKind,
    /// Solid dimensions in feet: width, depth, height.
    size: (f64, f64, f64),
    /// Position as fractions of footprint width and depth.
    at: (f64, f64),
}

/// The fixed plant catalog.
fn catalog() -> [MepSpec; 3] {
    [
        MepSpec {
            name: "HVAC System",
            kind: MepKind::AirHandler,
            size: (6.0, 4.0, 2.0),
            at: (0.2, 0.2),
        },
        MepSpec {
            name: "Electrical Panel",
            kind: MepKind::Switchboard,
            size: (2.0, 0.5, 3.0),
            at: (0.8, 0.1),
        },
        MepSpec {
            name: "Water Heater",
            kind: MepKind::WaterHeater,
            size: (2.0, 2.0, 2.0),
            at: (0.5, 0.1),
        },
    ]
}

/// Generate the basement plant; returns the unit count.
pub fn generate_mep_units(
    model: &mut BuildingModel,
    params: &BuildingParameters,
    ids: &mut dyn IdSource,
) -> Result<usize> {
    let m = Metric::new(params);
    let (key, storey) = model.storey_entry(BASEMENT)?;
    let storey_placement = storey.placement();

    let mut batch = Vec::new();
    for spec in catalog() {
        let element = contents_element(
            ids,
            spec.name.to_string(),
            ElementCategory::MepUnit(spec.kind),
            spec.size,
            spec.at,
            MOUNT,
            MEP_MATERIAL,
            &m,
            &storey_placement,
        )?;
        batch.push(model.add_element(element));
    }
    model.assign_to_storey(key, &batch)?;

    Ok(batch.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::build_hierarchy;
    use approx::assert_relative_eq;
    use brownstone_geometry::feet;
    use brownstone_model::SequentialIdSource;

    #[test]
    fn test_plant_lives_in_the_basement() {
        let params = BuildingParameters::default();
        let mut ids = SequentialIdSource::default();
        let mut model = build_hierarchy(&params, &mut ids).unwrap();
        let count = generate_mep_units(&mut model, &params, &mut ids).unwrap();
        assert_eq!(count, 3);

        let basement_key = model.storey_entry(BASEMENT).unwrap().0;
        assert_eq!(model.elements_in(basement_key).len(), 3);

        let heater = model
            .elements()
            .map(|(_, e)| e)
            .find(|e| e.name == "Water Heater")
            .unwrap();
        assert_eq!(heater.category, ElementCategory::MepUnit(MepKind::WaterHeater));
        // One foot above the basement floor.
        assert_relative_eq!(
            heater.placement.origin.z,
            -feet(9.0) + feet(1.0),
            epsilon = 1e-9
        );
        assert_eq!(
            heater.material.as_ref().unwrap().primary_material(),
            Some("Metal")
        );
    }
}
