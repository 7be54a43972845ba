// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Layered material descriptors shared across elements.
//!
//! A layer set usage is built once per material tier and referenced, not
//! copied: every element that uses it holds the same `Arc`. Usages are
//! never mutated after construction; a regenerated building gets fresh
//! instances.

use std::sync::Arc;

/// One (material name, thickness) layer.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialLayer {
    pub material: String,
    /// Layer thickness in metres.
    pub thickness: f64,
}

/// Ordered sequence of layers, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialLayerSet {
    layers: Vec<MaterialLayer>,
}

impl MaterialLayerSet {
    pub fn new(layers: Vec<MaterialLayer>) -> Self {
        Self { layers }
    }

    /// Single-layer set, the common case in this model.
    pub fn single(material: impl Into<String>, thickness: f64) -> Self {
        Self {
            layers: vec![MaterialLayer {
                material: material.into(),
                thickness,
            }],
        }
    }

    pub fn layers(&self) -> &[MaterialLayer] {
        &self.layers
    }

    pub fn total_thickness(&self) -> f64 {
        self.layers.iter().map(|l| l.thickness).sum()
    }
}

/// Local axis a layer set is measured along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerSetAxis {
    Axis1,
    Axis2,
    Axis3,
}

/// Which side of the reference axis the layers stack toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionSense {
    Positive,
    Negative,
}

/// A layer set bound to an axis, a direction sense and an offset.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialLayerSetUsage {
    pub layer_set: MaterialLayerSet,
    pub axis: LayerSetAxis,
    pub sense: DirectionSense,
    pub offset: f64,
}

impl MaterialLayerSetUsage {
    /// The usage every element in this model carries: measured along the
    /// second local axis, positive sense, zero offset.
    pub fn shared(layer_set: MaterialLayerSet) -> Arc<Self> {
        Arc::new(Self {
            layer_set,
            axis: LayerSetAxis::Axis2,
            sense: DirectionSense::Positive,
            offset: 0.0,
        })
    }

    /// Name of the first layer's material, for summaries and lookups.
    pub fn primary_material(&self) -> Option<&str> {
        self.layer_set.layers().first().map(|l| l.material.as_str())
    }
}
