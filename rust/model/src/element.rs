// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building elements and their closed category set.

use std::sync::Arc;

use brownstone_geometry::{Placement, Solid};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ids::GlobalId;
use crate::material::MaterialLayerSetUsage;

/// Closed set of element categories this model can produce.
///
/// Categories that need a finer role carry it as a payload, mirroring the
/// predefined-type attribute of the exchange schema. Dispatch over this
/// enum is exhaustive; an unsupported category cannot exist in-process,
/// only as a name arriving from outside (see [`CategoryFamily::from_name`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementCategory {
    Wall,
    Slab(SlabRole),
    Door,
    Window,
    Stair,
    SanitaryFixture(FixtureKind),
    MepUnit(MepKind),
}

impl ElementCategory {
    /// The category family, with roles stripped.
    pub fn family(&self) -> CategoryFamily {
        match self {
            ElementCategory::Wall => CategoryFamily::Wall,
            ElementCategory::Slab(_) => CategoryFamily::Slab,
            ElementCategory::Door => CategoryFamily::Door,
            ElementCategory::Window => CategoryFamily::Window,
            ElementCategory::Stair => CategoryFamily::Stair,
            ElementCategory::SanitaryFixture(_) => CategoryFamily::SanitaryFixture,
            ElementCategory::MepUnit(_) => CategoryFamily::MepUnit,
        }
    }
}

/// Distinguishes floor plates from roof-tagged slabs. Geometry is
/// identical; only naming and classification differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlabRole {
    Floor,
    Roof,
}

/// Sanitary fixture catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureKind {
    Sink,
    Toilet,
}

impl FixtureKind {
    /// Material tag for this fixture kind.
    pub fn material(&self) -> &'static str {
        match self {
            FixtureKind::Sink => "Porcelain",
            FixtureKind::Toilet => "Ceramic",
        }
    }
}

/// MEP unit catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MepKind {
    AirHandler,
    Switchboard,
    WaterHeater,
}

/// Category family names, used where a category crosses the serde/CLI
/// boundary as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoryFamily {
    Wall,
    Slab,
    Door,
    Window,
    Stair,
    SanitaryFixture,
    MepUnit,
}

impl CategoryFamily {
    /// All families, in report order.
    pub const ALL: [CategoryFamily; 7] = [
        CategoryFamily::Wall,
        CategoryFamily::Slab,
        CategoryFamily::Door,
        CategoryFamily::Window,
        CategoryFamily::Stair,
        CategoryFamily::SanitaryFixture,
        CategoryFamily::MepUnit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFamily::Wall => "Wall",
            CategoryFamily::Slab => "Slab",
            CategoryFamily::Door => "Door",
            CategoryFamily::Window => "Window",
            CategoryFamily::Stair => "Stair",
            CategoryFamily::SanitaryFixture => "SanitaryFixture",
            CategoryFamily::MepUnit => "MepUnit",
        }
    }

    /// Parse a family name arriving from outside the process.
    pub fn from_name(name: &str) -> Result<Self> {
        CategoryFamily::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == name)
            .ok_or_else(|| Error::UnsupportedCategory(name.to_string()))
    }
}

impl std::fmt::Display for CategoryFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placed building element.
///
/// Elements are created by exactly one generator call and immutable
/// afterwards: placement, solid and material are fixed at construction.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: GlobalId,
    pub name: String,
    pub category: ElementCategory,
    pub placement: Placement,
    pub solid: Solid,
    /// Shared material usage; `None` for opening faces.
    pub material: Option<Arc<MaterialLayerSetUsage>>,
}

impl Element {
    pub fn new(
        id: GlobalId,
        name: impl Into<String>,
        category: ElementCategory,
        placement: Placement,
        solid: Solid,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            placement,
            solid,
            material: None,
        }
    }

    /// Attach a shared material usage at construction time.
    pub fn with_material(mut self, material: Arc<MaterialLayerSetUsage>) -> Self {
        self.material = Some(material);
        self
    }
}
