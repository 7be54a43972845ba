// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The front stoop.

use brownstone_geometry::{feet, Placement, Point3, Profile, Solid};
use brownstone_model::{
    BuildingModel, BuildingParameters, Element, ElementCategory, ElementKey, IdSource,
    MaterialLayerSet, MaterialLayerSetUsage,
};

use crate::error::Result;
use crate::hierarchy::GROUND_STOREY;
use crate::metric::Metric;

/// Stoop dimensions in feet: width, depth, height.
const STOOP: (f64, f64, f64) = (12.0, 8.0, 5.0);

/// Brownstone facing thickness on the stoop, metres.
const STOOP_LAYER_THICKNESS: f64 = 0.2;

/// Generate the stoop: one stair-category solid centered on the front
/// facade, extending outward from the building line at ground elevation.
pub fn generate_stoop(
    model: &mut BuildingModel,
    params: &BuildingParameters,
    ids: &mut dyn IdSource,
) -> Result<ElementKey> {
    let m = Metric::new(params);
    let (ground_key, ground) = model.storey_entry(GROUND_STOREY)?;
    let ground_placement = ground.placement();

    let width = feet(STOOP.0);
    let depth = feet(STOOP.1);
    let height = feet(STOOP.2);

    // Centered on the front facade, projecting outward (negative depth).
    let placement = Placement::axis_aligned(Point3::new(
        m.width / 2.0 - width / 2.0,
        -depth,
        0.0,
    ))
    .relative_to(&ground_placement);
    let solid = Solid::extrude_up(Profile::footprint(width, depth), height)?;
    let usage =
        MaterialLayerSetUsage::shared(MaterialLayerSet::single("Brownstone", STOOP_LAYER_THICKNESS));

    let element = Element::new(
        ids.next_id(),
        "Front Stoop",
        ElementCategory::Stair,
        placement,
        solid,
    )
    .with_material(usage);
    let key = model.add_element(element);
    model.assign_to_storey(ground_key, &[key])?;

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::build_hierarchy;
    use approx::assert_relative_eq;
    use brownstone_model::SequentialIdSource;

    #[test]
    fn test_stoop_projects_from_front_facade() {
        let params = BuildingParameters::default();
        let mut ids = SequentialIdSource::default();
        let mut model = build_hierarchy(&params, &mut ids).unwrap();
        let key = generate_stoop(&mut model, &params, &mut ids).unwrap();

        let stoop = model.element(key).unwrap();
        assert_eq!(stoop.category, ElementCategory::Stair);
        // Centered: (40 - 12) / 2 ft from the left edge.
        assert_relative_eq!(stoop.placement.origin.x, feet(14.0), epsilon = 1e-9);
        // Entirely outside the building line.
        assert_relative_eq!(stoop.placement.origin.y, -feet(8.0), epsilon = 1e-9);
        assert_relative_eq!(stoop.placement.origin.z, 0.0, epsilon = 1e-12);

        let ground_key = model.storey_entry(GROUND_STOREY).unwrap().0;
        assert_eq!(model.container_of(key), Some(ground_key));
    }
}
