// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dimensional inputs for the brownstone, declared in feet.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Immutable dimensional inputs, all positive scalars in feet.
///
/// Passed explicitly into every generator; there are no global constants.
/// The defaults reproduce the classic lot: 40 ft x 80 ft footprint, five
/// occupied storeys from basement to fourth floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildingParameters {
    pub building_width: f64,
    pub building_depth: f64,
    pub basement_height: f64,
    pub first_floor_height: f64,
    pub second_floor_height: f64,
    pub third_floor_height: f64,
    pub fourth_floor_height: f64,
    pub wall_thickness: f64,
    pub floor_thickness: f64,
    pub roof_thickness: f64,
}

impl Default for BuildingParameters {
    fn default() -> Self {
        Self {
            building_width: 40.0,
            building_depth: 80.0,
            basement_height: 9.0,
            first_floor_height: 10.0,
            second_floor_height: 14.0,
            third_floor_height: 12.0,
            fourth_floor_height: 12.0,
            wall_thickness: 1.0,
            floor_thickness: 1.0,
            roof_thickness: 1.5,
        }
    }
}

impl BuildingParameters {
    /// Check that every dimension is positive. Fatal before any
    /// construction starts.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.fields() {
            if value <= 0.0 {
                return Err(Error::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    /// Nominal heights of the occupied storeys, bottom to top, in feet.
    pub fn floor_heights(&self) -> [f64; 5] {
        [
            self.basement_height,
            self.first_floor_height,
            self.second_floor_height,
            self.third_floor_height,
            self.fourth_floor_height,
        ]
    }

    fn fields(&self) -> [(&'static str, f64); 10] {
        [
            ("building_width", self.building_width),
            ("building_depth", self.building_depth),
            ("basement_height", self.basement_height),
            ("first_floor_height", self.first_floor_height),
            ("second_floor_height", self.second_floor_height),
            ("third_floor_height", self.third_floor_height),
            ("fourth_floor_height", self.fourth_floor_height),
            ("wall_thickness", self.wall_thickness),
            ("floor_thickness", self.floor_thickness),
            ("roof_thickness", self.roof_thickness),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(BuildingParameters::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive() {
        let mut params = BuildingParameters::default();
        params.wall_thickness = 0.0;
        let err = params.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidParameter {
                name: "wall_thickness",
                ..
            }
        ));

        params.wall_thickness = -1.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_floor_heights_order() {
        let params = BuildingParameters::default();
        assert_eq!(params.floor_heights(), [9.0, 10.0, 14.0, 12.0, 12.0]);
    }

    #[test]
    fn test_parameter_file_round_trip() {
        let json = r#"{ "building_width": 30.0, "building_depth": 60.0 }"#;
        let params: BuildingParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.building_width, 30.0);
        // Unspecified fields fall back to the defaults.
        assert_eq!(params.basement_height, 9.0);
    }
}
