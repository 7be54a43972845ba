// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Door and window generation.
//!
//! Every opening follows one placement rule: N openings of width w on a
//! facade of length L sit at `L * (j + 1) / (N + 1) - w / 2`. Opening
//! faces are origin-anchored rectangles swept horizontally through the
//! wall thickness.

use brownstone_geometry::{feet, Placement, Point3, Profile, Solid};
use brownstone_model::{
    BuildingModel, BuildingParameters, Element, ElementCategory, IdSource,
};

use crate::error::Result;
use crate::hierarchy::GROUND_STOREY;
use crate::metric::Metric;

/// Evenly distribute `count` openings of width `width` along a facade of
/// `length`. Returns the left edge of each opening.
pub fn evenly_spaced(length: f64, count: usize, width: f64) -> Vec<f64> {
    (0..count)
        .map(|j| length * (j + 1) as f64 / (count + 1) as f64 - width / 2.0)
        .collect()
}

/// Window dimensions by storey tier, in feet (width, height). The parlor
/// floor gets the tallest sashes, the basement the smallest.
fn window_tier(storey_index: usize) -> (f64, f64) {
    match storey_index {
        0 => (3.0, 3.0),
        1 => (3.5, 6.0),
        2 => (4.0, 8.0),
        _ => (3.5, 6.0),
    }
}

/// Windows per facade: fewer at the basement tier.
fn windows_per_facade(storey_index: usize) -> usize {
    if storey_index == 0 {
        2
    } else {
        3
    }
}

/// Window sill height above the storey, feet.
const SILL_HEIGHT: f64 = 3.0;

/// Front door leaf, feet (width, height).
const FRONT_DOOR: (f64, f64) = (4.0, 8.0);

/// Interior door leaf, feet (width, height).
const INTERIOR_DOOR: (f64, f64) = (3.0, 7.0);

/// Build one opening: a face rectangle at a storey-local position, swept
/// through the wall.
fn opening_element(
    ids: &mut dyn IdSource,
    name: String,
    category: ElementCategory,
    local: Point3<f64>,
    storey_placement: &Placement,
    width: f64,
    height: f64,
    wall_thickness: f64,
) -> Result<Element> {
    let placement = Placement::axis_aligned(local).relative_to(storey_placement);
    let solid = Solid::extrude_through(Profile::footprint(width, height), wall_thickness)?;
    Ok(Element::new(ids.next_id(), name, category, placement, solid))
}

/// Generate front and back facade windows for every occupied storey;
/// returns the window count.
pub fn generate_windows(
    model: &mut BuildingModel,
    params: &BuildingParameters,
    ids: &mut dyn IdSource,
) -> Result<usize> {
    let m = Metric::new(params);
    let stack: Vec<_> = model
        .occupied_storeys()
        .map(|(key, storey)| (key, storey.placement()))
        .collect();

    let mut total = 0;
    for (index, (key, storey_placement)) in stack.iter().enumerate() {
        let (width_ft, height_ft) = window_tier(index);
        let width = feet(width_ft);
        let height = feet(height_ft);
        let count = windows_per_facade(index);
        let sill = feet(SILL_HEIGHT);

        let mut batch = Vec::new();
        for (facade, y) in [("Front", 0.0), ("Back", m.depth)] {
            for (j, x) in evenly_spaced(m.width, count, width).into_iter().enumerate() {
                let element = opening_element(
                    ids,
                    format!("{facade} Window {index}-{j}"),
                    ElementCategory::Window,
                    Point3::new(x, y, sill),
                    storey_placement,
                    width,
                    height,
                    m.wall_thickness,
                )?;
                batch.push(model.add_element(element));
            }
        }
        model.assign_to_storey(*key, &batch)?;
        total += batch.len();
    }

    Ok(total)
}

/// Generate the front entrance and the corridor doors; returns the door
/// count.
pub fn generate_doors(
    model: &mut BuildingModel,
    params: &BuildingParameters,
    ids: &mut dyn IdSource,
) -> Result<usize> {
    let m = Metric::new(params);
    let stack: Vec<_> = model
        .occupied_storeys()
        .map(|(key, storey)| (key, storey.placement()))
        .collect();

    let mut total = 0;

    // One entrance at the footprint's horizontal midpoint, on the ground
    // storey's front facade.
    let (ground_key, ground_placement) =
        stack
            .get(GROUND_STOREY)
            .ok_or(brownstone_model::Error::StoreyOutOfRange {
                index: GROUND_STOREY,
                len: stack.len(),
            })?;
    let width = feet(FRONT_DOOR.0);
    let height = feet(FRONT_DOOR.1);
    let element = opening_element(
        ids,
        "Front Door".to_string(),
        ElementCategory::Door,
        Point3::new(m.width / 2.0 - width / 2.0, 0.0, 0.0),
        ground_placement,
        width,
        height,
        m.wall_thickness,
    )?;
    let key = model.add_element(element);
    model.assign_to_storey(*ground_key, &[key])?;
    total += 1;

    // Two corridor doors per storey above the basement, at width thirds
    // on the corridor centerline.
    let width = feet(INTERIOR_DOOR.0);
    let height = feet(INTERIOR_DOOR.1);
    for (index, (key, storey_placement)) in stack.iter().enumerate().skip(1) {
        let mut batch = Vec::new();
        for j in 0..2usize {
            let x = m.width / 3.0 * (j + 1) as f64;
            let element = opening_element(
                ids,
                format!("Interior Door {index}-{j}"),
                ElementCategory::Door,
                Point3::new(x, m.depth / 2.0, 0.0),
                storey_placement,
                width,
                height,
                m.wall_thickness,
            )?;
            batch.push(model.add_element(element));
        }
        model.assign_to_storey(*key, &batch)?;
        total += batch.len();
    }

    Ok(total)
}
