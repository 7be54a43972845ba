// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based building model graph.
//!
//! Storeys and elements live in slot maps with stable generational keys.
//! The aggregation chain (Project -> Site -> Building -> Storeys) and the
//! containment relation (storey -> elements) are indices over those keys,
//! so generator passes can read the storey stack without touching any
//! owning reference. Containment merges: a storey accumulates elements
//! from multiple independent passes, and each element is assigned exactly
//! once, ever.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::element::Element;
use crate::error::{Error, Result};
use crate::storey::{Building, Project, Site, Storey};

new_key_type! {
    /// Key for a storey in the model arena.
    pub struct StoreyKey;

    /// Key for an element in the model arena.
    pub struct ElementKey;
}

/// The complete generated model: aggregation chain, storey stack, elements
/// and containment. Discarded and rebuilt whole on regeneration.
#[derive(Debug)]
pub struct BuildingModel {
    project: Project,
    site: Site,
    building: Building,
    storeys: SlotMap<StoreyKey, Storey>,
    /// Bottom-to-top storey order (the building's aggregation list).
    storey_order: Vec<StoreyKey>,
    elements: SlotMap<ElementKey, Element>,
    /// Containment: storey -> owned elements, insertion-ordered.
    contained: FxHashMap<StoreyKey, Vec<ElementKey>>,
    /// Reverse containment: element -> its unique storey.
    container_of: FxHashMap<ElementKey, StoreyKey>,
}

impl BuildingModel {
    /// Seed the model with its fixed-arity aggregation chain.
    pub fn new(project: Project, site: Site, building: Building) -> Self {
        Self {
            project,
            site,
            building,
            storeys: SlotMap::with_key(),
            storey_order: Vec::new(),
            elements: SlotMap::with_key(),
            contained: FxHashMap::default(),
            container_of: FxHashMap::default(),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    // --- Storey stack ---

    /// Append a storey to the top of the stack. Elevations must strictly
    /// increase bottom to top.
    pub fn push_storey(&mut self, storey: Storey) -> Result<StoreyKey> {
        if let Some(&top_key) = self.storey_order.last() {
            let top = self.storeys[top_key].elevation;
            if storey.elevation <= top {
                return Err(Error::NonIncreasingElevation {
                    elevation: storey.elevation,
                    top,
                });
            }
        }
        let key = self.storeys.insert(storey);
        self.storey_order.push(key);
        Ok(key)
    }

    /// Number of storeys, including the roof sentinel.
    pub fn storey_count(&self) -> usize {
        self.storey_order.len()
    }

    /// Key of the storey at stack position `index` (0 = basement).
    ///
    /// An out-of-range index is fatal to the whole build: the spatial
    /// hierarchy cannot be trusted after a partial construction, so there
    /// is no recovery path.
    pub fn storey_at(&self, index: usize) -> Result<StoreyKey> {
        self.storey_order
            .get(index)
            .copied()
            .ok_or(Error::StoreyOutOfRange {
                index,
                len: self.storey_order.len(),
            })
    }

    /// Returns the storey data for the given key, or `None` if not found.
    pub fn storey(&self, key: StoreyKey) -> Option<&Storey> {
        self.storeys.get(key)
    }

    /// Storey at stack position `index`, with its key.
    pub fn storey_entry(&self, index: usize) -> Result<(StoreyKey, &Storey)> {
        let key = self.storey_at(index)?;
        self.storeys
            .get(key)
            .map(|s| (key, s))
            .ok_or(Error::StoreyNotFound(key))
    }

    /// Storeys in stack order, bottom to top.
    pub fn storeys(&self) -> impl Iterator<Item = (StoreyKey, &Storey)> {
        self.storey_order.iter().map(|&k| (k, &self.storeys[k]))
    }

    /// Storeys that carry structural walls: all but the roof sentinel.
    pub fn occupied_storeys(&self) -> impl Iterator<Item = (StoreyKey, &Storey)> {
        let occupied = self.storey_order.len().saturating_sub(1);
        self.storeys().take(occupied)
    }

    // --- Elements ---

    /// Insert an element into the arena. The element is not contained
    /// anywhere until a generator assigns it.
    pub fn add_element(&mut self, element: Element) -> ElementKey {
        self.elements.insert(element)
    }

    /// Returns the element data for the given key, or `None` if not found.
    pub fn element(&self, key: ElementKey) -> Option<&Element> {
        self.elements.get(key)
    }

    /// All elements, in arena order.
    pub fn elements(&self) -> impl Iterator<Item = (ElementKey, &Element)> {
        self.elements.iter()
    }

    /// Returns the number of elements in the arena.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    // --- Containment ---

    /// Merge a batch of elements into a storey's membership set.
    ///
    /// Merging is additive across generator passes; assigning any element a
    /// second time (to this or any other storey) is a contract violation.
    pub fn assign_to_storey(&mut self, storey: StoreyKey, elements: &[ElementKey]) -> Result<()> {
        if !self.storeys.contains_key(storey) {
            return Err(Error::StoreyNotFound(storey));
        }
        for &element in elements {
            if self.container_of.contains_key(&element) {
                return Err(Error::DuplicateContainment(element));
            }
            self.container_of.insert(element, storey);
            self.contained.entry(storey).or_default().push(element);
        }
        Ok(())
    }

    /// Elements contained in a storey, in assignment order.
    pub fn elements_in(&self, storey: StoreyKey) -> &[ElementKey] {
        self.contained.get(&storey).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The unique storey containing an element, if it has been assigned.
    pub fn container_of(&self, element: ElementKey) -> Option<StoreyKey> {
        self.container_of.get(&element).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementCategory;
    use crate::ids::{GlobalId, IdSource, SequentialIdSource};
    use brownstone_geometry::{Placement, Point3, Profile, Solid};

    fn empty_model(ids: &mut SequentialIdSource) -> BuildingModel {
        BuildingModel::new(
            Project {
                id: ids.next_id(),
                name: "Test Project".into(),
                description: String::new(),
            },
            Site {
                id: ids.next_id(),
                name: "Test Site".into(),
                description: String::new(),
            },
            Building {
                id: ids.next_id(),
                name: "Test Building".into(),
                description: String::new(),
            },
        )
    }

    fn storey(ids: &mut SequentialIdSource, name: &str, elevation: f64, index: usize) -> Storey {
        Storey {
            id: ids.next_id(),
            name: name.into(),
            description: String::new(),
            elevation,
            index,
        }
    }

    fn element(id: GlobalId) -> Element {
        Element::new(
            id,
            "Test Wall",
            ElementCategory::Wall,
            Placement::axis_aligned(Point3::new(0.0, 0.0, 0.0)),
            Solid::extrude_up(Profile::footprint(1.0, 1.0), 1.0).unwrap(),
        )
    }

    #[test]
    fn test_storey_stack_order() {
        let mut ids = SequentialIdSource::default();
        let mut model = empty_model(&mut ids);

        let b = storey(&mut ids, "Basement", -2.7432, 0);
        let g = storey(&mut ids, "First Floor", 0.0, 1);
        model.push_storey(b).unwrap();
        model.push_storey(g).unwrap();

        assert_eq!(model.storey_count(), 2);
        let names: Vec<_> = model.storeys().map(|(_, s)| s.name.as_str()).collect();
        assert_eq!(names, ["Basement", "First Floor"]);
    }

    #[test]
    fn test_elevations_must_increase() {
        let mut ids = SequentialIdSource::default();
        let mut model = empty_model(&mut ids);

        model.push_storey(storey(&mut ids, "Basement", -2.7, 0)).unwrap();
        let err = model
            .push_storey(storey(&mut ids, "Sub-basement", -5.0, 1))
            .unwrap_err();
        assert!(matches!(err, Error::NonIncreasingElevation { .. }));
    }

    #[test]
    fn test_storey_index_out_of_range_is_fatal() {
        let mut ids = SequentialIdSource::default();
        let mut model = empty_model(&mut ids);
        model.push_storey(storey(&mut ids, "Basement", -2.7, 0)).unwrap();

        let err = model.storey_at(5).unwrap_err();
        assert!(matches!(
            err,
            Error::StoreyOutOfRange { index: 5, len: 1 }
        ));
    }

    #[test]
    fn test_containment_merges_across_batches() {
        let mut ids = SequentialIdSource::default();
        let mut model = empty_model(&mut ids);
        let s = model.push_storey(storey(&mut ids, "First Floor", 0.0, 0)).unwrap();

        let a = model.add_element(element(ids.next_id()));
        let b = model.add_element(element(ids.next_id()));
        let c = model.add_element(element(ids.next_id()));

        // Two independent passes over the same storey must merge.
        model.assign_to_storey(s, &[a, b]).unwrap();
        model.assign_to_storey(s, &[c]).unwrap();

        assert_eq!(model.elements_in(s), &[a, b, c]);
        assert_eq!(model.container_of(a), Some(s));
        assert_eq!(model.container_of(c), Some(s));
    }

    #[test]
    fn test_double_assignment_is_a_contract_violation() {
        let mut ids = SequentialIdSource::default();
        let mut model = empty_model(&mut ids);
        let s0 = model.push_storey(storey(&mut ids, "Basement", -2.7, 0)).unwrap();
        let s1 = model.push_storey(storey(&mut ids, "First Floor", 0.0, 1)).unwrap();

        let a = model.add_element(element(ids.next_id()));
        model.assign_to_storey(s0, &[a]).unwrap();

        // Same storey again.
        let err = model.assign_to_storey(s0, &[a]).unwrap_err();
        assert!(matches!(err, Error::DuplicateContainment(k) if k == a));

        // A different storey is no better.
        let err = model.assign_to_storey(s1, &[a]).unwrap_err();
        assert!(matches!(err, Error::DuplicateContainment(_)));
    }

    #[test]
    fn test_unassigned_element_has_no_container() {
        let mut ids = SequentialIdSource::default();
        let mut model = empty_model(&mut ids);
        let a = model.add_element(element(ids.next_id()));
        assert_eq!(model.container_of(a), None);
    }

    #[test]
    fn test_occupied_storeys_exclude_sentinel() {
        let mut ids = SequentialIdSource::default();
        let mut model = empty_model(&mut ids);
        model.push_storey(storey(&mut ids, "Basement", -2.7, 0)).unwrap();
        model.push_storey(storey(&mut ids, "First Floor", 0.0, 1)).unwrap();
        model.push_storey(storey(&mut ids, "Roof", 3.0, 2)).unwrap();

        let names: Vec<_> = model
            .occupied_storeys()
            .map(|(_, s)| s.name.as_str())
            .collect();
        assert_eq!(names, ["Basement", "First Floor"]);
    }
}
