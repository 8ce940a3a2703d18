use std::collections::HashMap;

use crate::{consulate::ConsulateId, style::VisualState};

use super::{Region, RegionId};

/// The loaded regions of a session, plus the visual state of each rendered
/// layer.
#[derive(Debug, Default)]
pub struct RegionSet {
    regions: Vec<Region>,
    index: HashMap<String, RegionId>, // Map between region names and contiguous indices.
    visual: Vec<VisualState>,
}

impl RegionSet {
    /// Names must already be unique; the GeoJSON reader enforces this.
    pub(crate) fn from_regions(regions: Vec<Region>) -> Self {
        let index = regions.iter()
            .enumerate()
            .map(|(i, r)| (r.name.to_string(), RegionId(i as u32)))
            .collect();
        let visual = vec![VisualState::Default; regions.len()];
        Self { regions, index, visual }
    }

    pub fn len(&self) -> usize { self.regions.len() }

    pub fn is_empty(&self) -> bool { self.regions.is_empty() }

    pub fn get(&self, id: RegionId) -> &Region { &self.regions[id.index()] }

    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &Region)> {
        self.regions.iter().enumerate().map(|(i, r)| (RegionId(i as u32), r))
    }

    pub fn ids(&self) -> impl Iterator<Item = RegionId> + use<> {
        (0..self.regions.len() as u32).map(RegionId)
    }

    pub fn find_by_name(&self, name: &str) -> Option<RegionId> {
        self.index.get(name).copied()
    }

    /// All regions served by a consulate, in load order.
    pub fn find_by_consulate(&self, consulate: ConsulateId) -> Vec<RegionId> {
        self.iter()
            .filter(|(_, r)| r.consulate == Some(consulate))
            .map(|(id, _)| id)
            .collect()
    }

    pub fn visual_state(&self, id: RegionId) -> VisualState { self.visual[id.index()] }

    pub(crate) fn set_visual_state(&mut self, id: RegionId, state: VisualState) {
        self.visual[id.index()] = state;
    }

    /// Regions currently in [`VisualState::Highlighted`], in load order.
    pub fn highlighted(&self) -> Vec<RegionId> {
        self.ids().filter(|&id| self.visual_state(id) == VisualState::Highlighted).collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::style::Rgb;

    fn region(name: &str, consulate: Option<u32>) -> Region {
        Region {
            name: name.into(),
            consulate_label: "x".into(),
            consulate: consulate.map(ConsulateId),
            fill_color: Rgb::NEUTRAL,
            geometry: Value::Null,
        }
    }

    #[test]
    fn lookup_by_name_and_consulate() {
        let set = RegionSet::from_regions(vec![
            region("Texas", Some(6)),
            region("Oklahoma", Some(6)),
            region("Florida", Some(2)),
            region("Nowhere", None),
        ]);

        assert_eq!(set.len(), 4);
        assert_eq!(set.find_by_name("Florida"), Some(RegionId(2)));
        assert_eq!(set.find_by_name("florida"), None);
        assert_eq!(set.find_by_consulate(ConsulateId(6)), vec![RegionId(0), RegionId(1)]);
        assert!(set.find_by_consulate(ConsulateId(0)).is_empty());
    }

    #[test]
    fn visual_state_starts_default() {
        let mut set = RegionSet::from_regions(vec![region("Texas", Some(6)), region("Ohio", Some(3))]);
        assert!(set.highlighted().is_empty());

        set.set_visual_state(RegionId(1), VisualState::Highlighted);
        assert_eq!(set.highlighted(), vec![RegionId(1)]);
        assert_eq!(set.visual_state(RegionId(0)), VisualState::Default);
    }
}
