// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Perimeter and interior wall generation.
//!
//! Walls are the only elements placed from centerline segments. Every
//! occupied storey gets the four perimeter walls; storeys above the
//! basement additionally get a corridor wall bisecting the depth and two
//! cross walls at footprint-width thirds.

use std::sync::Arc;

use brownstone_geometry::{feet, Placement, Point2, Profile, Solid};
use brownstone_model::{
    BuildingModel, BuildingParameters, Element, ElementCategory, IdSource, MaterialLayerSet,
    MaterialLayerSetUsage,
};

use crate::error::Result;
use crate::metric::Metric;

/// Policy for zero-length wall requests.
///
/// A degenerate request produces no element and no containment entry
/// either way; `Warn` makes the skip observable in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Drop the wall without a trace.
    #[default]
    Silent,
    /// Drop the wall and log a warning.
    Warn,
}

/// A single wall request: a named centerline segment at some storey.
#[derive(Debug, Clone)]
pub struct WallRequest {
    pub name: String,
    pub start: Point2<f64>,
    pub end: Point2<f64>,
}

impl WallRequest {
    fn new(name: impl Into<String>, start: Point2<f64>, end: Point2<f64>) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }
}

/// Build one wall element from a request, or skip a degenerate segment.
///
/// The cross-section is a rectangle running the segment's length, offset
/// half a wall thickness to each side of the centerline, extruded
/// vertically by the storey's wall height.
pub fn wall_element(
    request: &WallRequest,
    elevation: f64,
    thickness: f64,
    height: f64,
    material: &Arc<MaterialLayerSetUsage>,
    policy: DegeneratePolicy,
    ids: &mut dyn IdSource,
) -> Result<Option<Element>> {
    let Some(frame) = Placement::from_segment(request.start, request.end, elevation) else {
        if policy == DegeneratePolicy::Warn {
            tracing::warn!(name = %request.name, "skipping zero-length wall request");
        }
        return Ok(None);
    };

    let profile = Profile::wall_band(frame.length, thickness);
    let solid = Solid::extrude_up(profile, height)?;
    let element = Element::new(
        ids.next_id(),
        request.name.clone(),
        ElementCategory::Wall,
        frame.placement,
        solid,
    )
    .with_material(Arc::clone(material));

    Ok(Some(element))
}

/// Wall material tier by storey position in the stack.
fn material_for(storey_index: usize) -> &'static str {
    match storey_index {
        0 => "Concrete",
        1 | 2 => "Brownstone",
        _ => "Brick",
    }
}

/// Centerline layout for one storey.
fn wall_layout(storey_index: usize, width: f64, depth: f64) -> Vec<WallRequest> {
    let mut layout = vec![
        WallRequest::new("Front Wall", Point2::new(0.0, 0.0), Point2::new(width, 0.0)),
        WallRequest::new("Back Wall", Point2::new(0.0, depth), Point2::new(width, depth)),
        WallRequest::new("Left Wall", Point2::new(0.0, 0.0), Point2::new(0.0, depth)),
        WallRequest::new("Right Wall", Point2::new(width, 0.0), Point2::new(width, depth)),
    ];

    // The basement is open plan; everything above it gets the corridor
    // partition and two cross walls at width thirds.
    if storey_index > 0 {
        layout.push(WallRequest::new(
            "Corridor Wall",
            Point2::new(0.0, depth / 2.0),
            Point2::new(width, depth / 2.0),
        ));
        for j in 1..3 {
            let x = width / 3.0 * j as f64;
            layout.push(WallRequest::new(
                format!("Cross Wall {j}"),
                Point2::new(x, 0.0),
                Point2::new(x, depth),
            ));
        }
    }

    layout
}

/// Generate every wall for every occupied storey; returns the wall count.
///
/// Each storey's walls share one material usage and are registered in its
/// containment set as one batch.
pub fn generate_walls(
    model: &mut BuildingModel,
    params: &BuildingParameters,
    ids: &mut dyn IdSource,
    policy: DegeneratePolicy,
) -> Result<usize> {
    let m = Metric::new(params);
    let heights = params.floor_heights();
    let stack: Vec<_> = model
        .occupied_storeys()
        .map(|(key, storey)| (key, storey.elevation))
        .collect();

    let mut total = 0;
    for (index, (key, elevation)) in stack.into_iter().enumerate() {
        let height_ft = heights
            .get(index)
            .copied()
            .ok_or(brownstone_model::Error::StoreyOutOfRange {
                index,
                len: heights.len(),
            })?;
        let height = feet(height_ft);

        let material = MaterialLayerSetUsage::shared(MaterialLayerSet::single(
            material_for(index),
            m.wall_thickness,
        ));

        let mut batch = Vec::new();
        for request in wall_layout(index, m.width, m.depth) {
            if let Some(element) = wall_element(
                &request,
                elevation,
                m.wall_thickness,
                height,
                &material,
                policy,
                ids,
            )? {
                batch.push(model.add_element(element));
            }
        }
        model.assign_to_storey(key, &batch)?;
        total += batch.len();
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use brownstone_model::SequentialIdSource;

    fn test_material() -> Arc<MaterialLayerSetUsage> {
        MaterialLayerSetUsage::shared(MaterialLayerSet::single("Concrete", 0.3048))
    }

    #[test]
    fn test_material_tiers() {
        assert_eq!(material_for(0), "Concrete");
        assert_eq!(material_for(1), "Brownstone");
        assert_eq!(material_for(2), "Brownstone");
        assert_eq!(material_for(3), "Brick");
        assert_eq!(material_for(4), "Brick");
    }

    #[test]
    fn test_layout_counts() {
        assert_eq!(wall_layout(0, 12.0, 24.0).len(), 4);
        assert_eq!(wall_layout(1, 12.0, 24.0).len(), 7);
        assert_eq!(wall_layout(4, 12.0, 24.0).len(), 7);
    }

    #[test]
    fn test_cross_walls_at_width_thirds() {
        let layout = wall_layout(2, 12.0, 24.0);
        let cross: Vec<_> = layout
            .iter()
            .filter(|r| r.name.starts_with("Cross Wall"))
            .collect();
        assert_eq!(cross.len(), 2);
        assert_relative_eq!(cross[0].start.x, 4.0, epsilon = 1e-12);
        assert_relative_eq!(cross[1].start.x, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wall_element_geometry() {
        let mut ids = SequentialIdSource::default();
        let request = WallRequest::new(
            "Front Wall",
            Point2::new(0.0, 0.0),
            Point2::new(12.192, 0.0),
        );
        let element = wall_element(
            &request,
            -2.7432,
            0.3048,
            3.048,
            &test_material(),
            DegeneratePolicy::Silent,
            &mut ids,
        )
        .unwrap()
        .unwrap();

        assert_eq!(element.placement.origin.z, -2.7432);
        let (length, thickness) = element.solid.profile.extent();
        assert_relative_eq!(length, 12.192, epsilon = 1e-12);
        assert_relative_eq!(thickness, 0.3048, epsilon = 1e-12);
        assert_eq!(element.solid.depth, 3.048);
    }

    #[test]
    fn test_degenerate_request_is_skipped() {
        let mut ids = SequentialIdSource::default();
        let request = WallRequest::new("Null Wall", Point2::new(3.0, 3.0), Point2::new(3.0, 3.0));
        let result = wall_element(
            &request,
            0.0,
            0.3048,
            3.0,
            &test_material(),
            DegeneratePolicy::Silent,
            &mut ids,
        )
        .unwrap();
        assert!(result.is_none());

        // Same outcome under the warning policy; only observability differs.
        let result = wall_element(
            &request,
            0.0,
            0.3048,
            3.0,
            &test_material(),
            DegeneratePolicy::Warn,
            &mut ids,
        )
        .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_storey_walls_share_one_material_usage() {
        let mut ids = SequentialIdSource::default();
        let material = test_material();
        let layout = wall_layout(1, 12.0, 24.0);
        let elements: Vec<_> = layout
            .iter()
            .map(|r| {
                wall_element(r, 0.0, 0.3, 3.0, &material, DegeneratePolicy::Silent, &mut ids)
                    .unwrap()
                    .unwrap()
            })
            .collect();

        for pair in elements.windows(2) {
            assert!(Arc::ptr_eq(
                pair[0].material.as_ref().unwrap(),
                pair[1].material.as_ref().unwrap()
            ));
        }
    }
}
