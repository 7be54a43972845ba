// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor and roof slab generation.
//!
//! Interior slabs are the floors the upper storey stands on: one per
//! storey boundary, extruded by the floor thickness and placed so the top
//! face is flush with the upper storey's elevation. The roof cap at the
//! sentinel's own elevation is the one slab with nothing above it, so it
//! is not offset downward. The asymmetry is intentional.

use brownstone_geometry::{Placement, Point3, Profile, Solid};
use brownstone_model::{
    BuildingModel, BuildingParameters, Element, ElementCategory, IdSource, MaterialLayerSet,
    MaterialLayerSetUsage, SlabRole,
};

use crate::error::Result;
use crate::metric::Metric;

/// Generate one slab per storey boundary plus the roof cap; returns the
/// slab count.
pub fn generate_slabs(
    model: &mut BuildingModel,
    params: &BuildingParameters,
    ids: &mut dyn IdSource,
) -> Result<usize> {
    let m = Metric::new(params);
    let stack: Vec<_> = model
        .storeys()
        .map(|(key, storey)| (key, storey.placement()))
        .collect();
    let occupied = stack.len().saturating_sub(1);

    let mut total = 0;
    for index in 0..occupied {
        let (upper_key, upper_placement) = &stack[index + 1];

        // The last interior slab sits directly under the sentinel and is
        // classified as roof; the geometry rule does not change.
        let role = if index == occupied - 1 {
            SlabRole::Roof
        } else {
            SlabRole::Floor
        };
        let name = match role {
            SlabRole::Roof => "Roof".to_string(),
            SlabRole::Floor => format!("Floor {}", index + 1),
        };
        let material = if index == 0 { "Concrete" } else { "Wood Floor" };

        // Top flush with the upper storey: one floor thickness below its
        // frame.
        let placement = Placement::axis_aligned(Point3::new(0.0, 0.0, -m.floor_thickness))
            .relative_to(upper_placement);
        let solid = Solid::extrude_up(Profile::footprint(m.width, m.depth), m.floor_thickness)?;
        let usage =
            MaterialLayerSetUsage::shared(MaterialLayerSet::single(material, m.floor_thickness));

        let element = Element::new(
            ids.next_id(),
            name,
            ElementCategory::Slab(role),
            placement,
            solid,
        )
        .with_material(usage);
        let key = model.add_element(element);
        model.assign_to_storey(*upper_key, &[key])?;
        total += 1;
    }

    // The cap: a second, independent roof slab at the sentinel's own
    // elevation with its own membrane material.
    if let Some((sentinel_key, sentinel_placement)) = stack.last() {
        let placement =
            Placement::axis_aligned(Point3::new(0.0, 0.0, 0.0)).relative_to(sentinel_placement);
        let solid = Solid::extrude_up(Profile::footprint(m.width, m.depth), m.roof_thickness)?;
        let usage = MaterialLayerSetUsage::shared(MaterialLayerSet::single(
            "Roof Membrane",
            m.roof_thickness,
        ));
        let element = Element::new(
            ids.next_id(),
            "Roof Slab",
            ElementCategory::Slab(SlabRole::Roof),
            placement,
            solid,
        )
        .with_material(usage);
        let key = model.add_element(element);
        model.assign_to_storey(*sentinel_key, &[key])?;
        total += 1;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::build_hierarchy;
    use approx::assert_relative_eq;
    use brownstone_geometry::feet;
    use brownstone_model::SequentialIdSource;

    fn model_with_slabs() -> BuildingModel {
        let params = BuildingParameters::default();
        let mut ids = SequentialIdSource::default();
        let mut model = build_hierarchy(&params, &mut ids).unwrap();
        generate_slabs(&mut model, &params, &mut ids).unwrap();
        model
    }

    fn find<'a>(model: &'a BuildingModel, name: &str) -> &'a Element {
        model
            .elements()
            .map(|(_, e)| e)
            .find(|e| e.name == name)
            .unwrap()
    }

    #[test]
    fn test_five_boundaries_plus_cap() {
        let params = BuildingParameters::default();
        let mut ids = SequentialIdSource::default();
        let mut model = build_hierarchy(&params, &mut ids).unwrap();
        let count = generate_slabs(&mut model, &params, &mut ids).unwrap();
        assert_eq!(count, 6);
    }

    #[test]
    fn test_slab_top_flush_with_upper_storey() {
        let model = model_with_slabs();
        // Floor 1 supports the First Floor at the ground datum.
        let slab = find(&model, "Floor 1");
        assert_relative_eq!(slab.placement.origin.z, -feet(1.0), epsilon = 1e-9);
        assert_relative_eq!(slab.solid.depth, feet(1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_materials_by_level() {
        let model = model_with_slabs();
        let concrete = find(&model, "Floor 1");
        assert_eq!(
            concrete.material.as_ref().unwrap().primary_material(),
            Some("Concrete")
        );
        let wood = find(&model, "Floor 2");
        assert_eq!(
            wood.material.as_ref().unwrap().primary_material(),
            Some("Wood Floor")
        );
    }

    #[test]
    fn test_roof_tagged_slab_under_sentinel() {
        let model = model_with_slabs();
        let roof = find(&model, "Roof");
        assert!(matches!(roof.category, ElementCategory::Slab(SlabRole::Roof)));
        // Its top is flush with the sentinel elevation.
        assert_relative_eq!(
            roof.placement.origin.z + roof.solid.depth,
            feet(48.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_cap_sits_at_sentinel_elevation() {
        let model = model_with_slabs();
        let cap = find(&model, "Roof Slab");
        assert_relative_eq!(cap.placement.origin.z, feet(48.0), epsilon = 1e-9);
        assert_relative_eq!(cap.solid.depth, feet(1.5), epsilon = 1e-12);
        assert_eq!(
            cap.material.as_ref().unwrap().primary_material(),
            Some("Roof Membrane")
        );
    }

    #[test]
    fn test_interior_slabs_belong_to_the_storey_above() {
        let model = model_with_slabs();
        let ground_key = model.storey_entry(1).unwrap().0;
        let members = model.elements_in(ground_key);
        assert_eq!(members.len(), 1);
        let slab = model.element(members[0]).unwrap();
        assert_eq!(slab.name, "Floor 1");
    }
}
