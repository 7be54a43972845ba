// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Swept solids - the only geometric primitive in this model.

use crate::error::{Error, Result};
use crate::profile::Profile;
use nalgebra::Vector3;

/// A profile extruded along an axis by a depth.
///
/// The solid stays a sweep definition; together with an element's
/// [`Placement`](crate::Placement) it is everything an external
/// tessellation/viewer subsystem needs. It is never a general polyhedron.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    pub profile: Profile,
    /// Extrusion direction in frame-local coordinates.
    pub direction: Vector3<f64>,
    /// Extrusion depth in metres.
    pub depth: f64,
}

impl Solid {
    /// Extrude `profile` along `direction` by `depth`.
    pub fn extrude(profile: Profile, direction: Vector3<f64>, depth: f64) -> Result<Self> {
        if depth <= 0.0 {
            return Err(Error::InvalidExtrusion(
                "Depth must be positive".to_string(),
            ));
        }
        Ok(Self {
            profile,
            direction,
            depth,
        })
    }

    /// Extrude vertically (local +Z), the common case for walls, slabs and
    /// footprint-shaped solids.
    pub fn extrude_up(profile: Profile, depth: f64) -> Result<Self> {
        Self::extrude(profile, Vector3::new(0.0, 0.0, 1.0), depth)
    }

    /// Extrude horizontally (local +Y); door and window faces sweep through
    /// their wall this way.
    pub fn extrude_through(profile: Profile, depth: f64) -> Result<Self> {
        Self::extrude(profile, Vector3::new(0.0, 1.0, 0.0), depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extrude_up() {
        let solid = Solid::extrude_up(Profile::footprint(12.0, 24.0), 0.3).unwrap();
        assert_eq!(solid.direction, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(solid.depth, 0.3);
    }

    #[test]
    fn test_extrude_through() {
        let solid = Solid::extrude_through(Profile::footprint(1.2, 2.4), 0.3).unwrap();
        assert_eq!(solid.direction, Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_invalid_depth() {
        let result = Solid::extrude_up(Profile::footprint(1.0, 1.0), 0.0);
        assert!(result.is_err());

        let result = Solid::extrude_up(Profile::footprint(1.0, 1.0), -1.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_shared_by_every_element_kind() {
        // The same extrusion routine serves walls and slab-like solids;
        // only the profile shape and axis differ.
        let wall = Solid::extrude_up(Profile::wall_band(12.192, 0.3048), 3.048).unwrap();
        let slab = Solid::extrude_up(Profile::footprint(12.192, 24.384), 0.3048).unwrap();
        assert_eq!(wall.direction, slab.direction);
    }
}
