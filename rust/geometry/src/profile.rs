// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Closed 2D profiles used as swept-solid cross-sections.

use crate::error::{Error, Result};
use nalgebra::Point2;

/// A closed, ordered 2D boundary (first point == last point).
///
/// Two rectangle constructors cover every element kind in the model; the
/// general constructor exists for callers that lay out their own loops.
/// A zero-extent profile is a valid value, but encloses nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    points: Vec<Point2<f64>>,
}

impl Profile {
    /// Build a profile from an ordered, explicitly closed point loop.
    pub fn closed(points: Vec<Point2<f64>>) -> Result<Self> {
        if points.len() < 4 {
            return Err(Error::InvalidProfile(format!(
                "closed loop needs at least 4 points, got {}",
                points.len()
            )));
        }
        if points.first() != points.last() {
            return Err(Error::InvalidProfile(
                "first and last point must coincide".to_string(),
            ));
        }
        Ok(Self { points })
    }

    /// Rectangle spanning `[0, length]` along X, centered on the thickness
    /// axis (`[-thickness/2, thickness/2]` along Y). Wall cross-sections use
    /// this band so the wall body straddles its centerline.
    pub fn wall_band(length: f64, thickness: f64) -> Self {
        let half = thickness / 2.0;
        Self {
            points: vec![
                Point2::new(0.0, -half),
                Point2::new(length, -half),
                Point2::new(length, half),
                Point2::new(0.0, half),
                Point2::new(0.0, -half),
            ],
        }
    }

    /// Rectangle anchored at the origin spanning `[0, width] x [0, depth]`.
    ///
    /// Footprint-shaped solids (slabs, the stoop, fixtures) and opening
    /// faces use this form.
    pub fn footprint(width: f64, depth: f64) -> Self {
        Self {
            points: vec![
                Point2::new(0.0, 0.0),
                Point2::new(width, 0.0),
                Point2::new(width, depth),
                Point2::new(0.0, depth),
                Point2::new(0.0, 0.0),
            ],
        }
    }

    /// The boundary loop, closed (first == last).
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// Axis-aligned extent of the boundary along local X and Y.
    pub fn extent(&self) -> (f64, f64) {
        let (mut min_x, mut max_x) = (f64::MAX, f64::MIN);
        let (mut min_y, mut max_y) = (f64::MAX, f64::MIN);
        for p in &self.points {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        (max_x - min_x, max_y - min_y)
    }

    /// A degenerate profile has zero extent on at least one axis.
    pub fn is_degenerate(&self) -> bool {
        let (w, h) = self.extent();
        w == 0.0 || h == 0.0
    }
}
