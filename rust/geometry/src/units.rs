// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Imperial to metric length conversion.
//!
//! Building parameters are authored in feet (US rowhouse practice) while the
//! produced graph is metric throughout. Conversion happens once, at
//! generation time, with fixed multipliers.

/// Metres per foot.
pub const FOOT_TO_METER: f64 = 0.3048;

/// Metres per inch.
pub const INCH_TO_METER: f64 = 0.0254;

/// Units a dimensional input may be declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Foot,
    Inch,
}

impl LengthUnit {
    /// Metres per one of this unit.
    #[inline]
    pub fn scale(&self) -> f64 {
        match self {
            LengthUnit::Foot => FOOT_TO_METER,
            LengthUnit::Inch => INCH_TO_METER,
        }
    }
}

/// A scalar length tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Convert to metres. Total over all finite inputs; there is no error
    /// case.
    #[inline]
    pub fn to_meters(&self) -> f64 {
        self.value * self.unit.scale()
    }
}

/// Convert a value in feet to metres.
#[inline]
pub fn feet(value: f64) -> f64 {
    value * FOOT_TO_METER
}

/// Convert a value in inches to metres.
#[inline]
pub fn inches(value: f64) -> f64 {
    value * INCH_TO_METER
}
