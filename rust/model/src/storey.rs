// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spatial containers: project, site, building and storey.

use brownstone_geometry::{Placement, Point3};

use crate::ids::GlobalId;

/// Root of the aggregation chain. Owns exactly one site.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: GlobalId,
    pub name: String,
    pub description: String,
}

/// The site; owns exactly one building.
#[derive(Debug, Clone)]
pub struct Site {
    pub id: GlobalId,
    pub name: String,
    pub description: String,
}

/// The building; owns the ordered storey stack.
#[derive(Debug, Clone)]
pub struct Building {
    pub id: GlobalId,
    pub name: String,
    pub description: String,
}

/// A horizontal spatial container at a fixed, signed elevation.
///
/// The topmost storey of a stack is a sentinel marking the top of the last
/// occupied floor; it owns the roof cap but no structural walls.
#[derive(Debug, Clone)]
pub struct Storey {
    pub id: GlobalId,
    pub name: String,
    pub description: String,
    /// Elevation above the ground datum, metres.
    pub elevation: f64,
    /// Position in the building's bottom-to-top stack.
    pub index: usize,
}

impl Storey {
    /// The storey's world frame: a translation to its elevation. Element
    /// placements compose against this one level deep.
    pub fn placement(&self) -> Placement {
        Placement::axis_aligned(Point3::new(0.0, 0.0, self.elevation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storey_placement_sits_at_elevation() {
        let storey = Storey {
            id: GlobalId::from_u128(1),
            name: "Second Floor".into(),
            description: "Second Floor of the brownstone".into(),
            elevation: 3.048,
            index: 2,
        };
        assert_eq!(storey.placement().origin, Point3::new(0.0, 0.0, 3.048));
    }
}
