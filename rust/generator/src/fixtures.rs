// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sanitary fixtures, placed from a fixed catalog.
//!
//! Contents are purely additive: they are positioned at parameter-fraction
//! coordinates of the footprint and take part in no other generator's
//! layout decisions.

use brownstone_geometry::{feet, Placement, Point3, Profile, Solid};
use brownstone_model::{
    BuildingModel, BuildingParameters, Element, ElementCategory, FixtureKind, IdSource,
    MaterialLayerSet, MaterialLayerSetUsage,
};

use crate::error::Result;
use crate::hierarchy::GROUND_STOREY;
use crate::metric::Metric;

/// Casing/material layer thickness for fixtures and MEP units, metres.
pub(crate) const LAYER_THICKNESS: f64 = 0.05;

/// One catalog entry: a box at footprint-fraction coordinates.
struct FixtureSpec {
    name: String,
    kind: FixtureKind,
    /// Solid dimensions in feet: width, depth, height.
    size: (f64, f64, f64),
    /// Position as fractions of footprint width and depth.
    at: (f64, f64),
    /// Mounting height above the storey, feet.
    mount: f64,
}

/// The fixture plan: kitchen sink on the ground floor, toilet and
/// bathroom sink on each of the floors above the parlor.
fn catalog() -> Vec<(usize, Vec<FixtureSpec>)> {
    let mut plan = vec![(
        GROUND_STOREY,
        vec![FixtureSpec {
            name: "Kitchen Sink".into(),
            kind: FixtureKind::Sink,
            size: (3.0, 2.0, 0.5),
            at: (0.25, 0.3),
            mount: 3.0,
        }],
    )];

    for storey in 2..5 {
        plan.push((
            storey,
            vec![
                FixtureSpec {
                    name: format!("Toilet Floor {storey}"),
                    kind: FixtureKind::Toilet,
                    size: (1.5, 2.0, 1.0),
                    at: (0.75, 0.25),
                    mount: 0.0,
                },
                FixtureSpec {
                    name: format!("Bathroom Sink Floor {storey}"),
                    kind: FixtureKind::Sink,
                    size: (2.0, 1.5, 0.5),
                    at: (0.75, 0.35),
                    mount: 3.0,
                },
            ],
        ));
    }

    plan
}

/// Build one catalog solid: a box extruded up from its mounting height at
/// footprint-fraction coordinates. MEP units reuse this shape.
pub(crate) fn contents_element(
    ids: &mut dyn IdSource,
    name: String,
    category: ElementCategory,
    size_ft: (f64, f64, f64),
    at: (f64, f64),
    mount_ft: f64,
    material: &str,
    m: &Metric,
    storey_placement: &Placement,
) -> Result<Element> {
    let (width, depth, height) = (feet(size_ft.0), feet(size_ft.1), feet(size_ft.2));
    let placement = Placement::axis_aligned(Point3::new(
        m.width * at.0,
        m.depth * at.1,
        feet(mount_ft),
    ))
    .relative_to(storey_placement);
    let solid = Solid::extrude_up(Profile::footprint(width, depth), height)?;
    let usage = MaterialLayerSetUsage::shared(MaterialLayerSet::single(material, LAYER_THICKNESS));

    Ok(Element::new(ids.next_id(), name, category, placement, solid).with_material(usage))
}

/// Generate the fixture catalog; returns the fixture count.
pub fn generate_fixtures(
    model: &mut BuildingModel,
    params: &BuildingParameters,
    ids: &mut dyn IdSource,
) -> Result<usize> {
    let m = Metric::new(params);

    let mut total = 0;
    for (storey_index, specs) in catalog() {
        let (key, storey) = model.storey_entry(storey_index)?;
        let storey_placement = storey.placement();

        let mut batch = Vec::new();
        for spec in specs {
            let element = contents_element(
                ids,
                spec.name,
                ElementCategory::SanitaryFixture(spec.kind),
                spec.size,
                spec.at,
                spec.mount,
                spec.kind.material(),
                &m,
                &storey_placement,
            )?;
            batch.push(model.add_element(element));
        }
        model.assign_to_storey(key, &batch)?;
        total += batch.len();
    }

    Ok(total)
}
