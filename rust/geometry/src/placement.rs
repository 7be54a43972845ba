// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Placement frames locating elements in world space.
//!
//! A placement is an origin plus an up axis and an in-plane reference axis,
//! the frame an Axis2Placement3D carries in exchange schemas. Two
//! constructors cover every element in this model: axis-aligned frames for
//! slab-like elements, and segment-derived frames for walls.

use nalgebra::{Point2, Point3, Vector3};

/// A 3D frame: origin, up axis, and reference axis.
///
/// Up is always world vertical in this model (walls do not lean); only the
/// reference axis rotates, and only in the horizontal plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Frame origin in world metres.
    pub origin: Point3<f64>,
    /// Local Z direction.
    pub axis: Vector3<f64>,
    /// Local X direction; profiles are laid out along it.
    pub ref_direction: Vector3<f64>,
}

impl Placement {
    /// Translation-only frame: up = world Z, reference = world X.
    ///
    /// Used for slabs, openings, fixtures, MEP units and the stoop.
    pub fn axis_aligned(origin: Point3<f64>) -> Self {
        Self {
            origin,
            axis: Vector3::new(0.0, 0.0, 1.0),
            ref_direction: Vector3::new(1.0, 0.0, 0.0),
        }
    }

    /// Frame derived from a 2D segment at a fixed elevation.
    ///
    /// The normalized segment direction becomes the reference axis. A
    /// zero-length segment has no direction and therefore no frame; callers
    /// treat `None` as a skip condition, not a failure.
    pub fn from_segment(
        start: Point2<f64>,
        end: Point2<f64>,
        elevation: f64,
    ) -> Option<SegmentFrame> {
        let direction = Vector3::new(end.x - start.x, end.y - start.y, 0.0);
        let length = direction.norm();
        if length == 0.0 {
            return None;
        }

        let ref_direction = direction / length;
        // Rotate 90 degrees in the horizontal plane; wall profiles are
        // offset by half their thickness along this vector.
        let perpendicular = Vector3::new(-ref_direction.y, ref_direction.x, 0.0);

        Some(SegmentFrame {
            placement: Placement {
                origin: Point3::new(start.x, start.y, elevation),
                axis: Vector3::new(0.0, 0.0, 1.0),
                ref_direction,
            },
            length,
            perpendicular,
        })
    }

    /// Compose with a parent frame one level up (storey -> element).
    ///
    /// Spatial containers in this model are never rotated, so composition is
    /// translation-only and never chains deeper than one level.
    pub fn relative_to(mut self, parent: &Placement) -> Self {
        self.origin += parent.origin.coords;
        self
    }

    /// Local Y direction, completing the right-handed frame.
    pub fn cross_direction(&self) -> Vector3<f64> {
        self.axis.cross(&self.ref_direction)
    }

    /// Map a profile-plane point into world space.
    pub fn project(&self, p: Point2<f64>) -> Point3<f64> {
        self.origin + self.ref_direction * p.x + self.cross_direction() * p.y
    }

    /// Map a frame-local direction into world space.
    pub fn direction_to_world(&self, v: Vector3<f64>) -> Vector3<f64> {
        self.ref_direction * v.x + self.cross_direction() * v.y + self.axis * v.z
    }
}

/// A segment-derived placement plus the quantities wall layout needs.
#[derive(Debug, Clone)]
pub struct SegmentFrame {
    pub placement: Placement,
    /// Segment length in metres.
    pub length: f64,
    /// Unit in-plane perpendicular to the reference axis.
    pub perpendicular: Vector3<f64>,
}
