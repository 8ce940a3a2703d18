use crate::{
    consulate::ConsulateId,
    region::{RegionId, RegionSet},
    style::{StylePatch, VisualState},
};

use super::RenderBackend;

/// What is currently emphasized on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    /// A single region under the pointer.
    Region(RegionId),
    /// Every region served by one consulate (legend hover).
    Group(ConsulateId),
}

/// Moves regions between Default, Highlighted and Dimmed in response to
/// pointer events. The only state kept between events is the current
/// emphasis; everything else is derived from the event and the region set.
#[derive(Debug, Default)]
pub struct HighlightController {
    emphasized: Option<Emphasis>,
}

impl HighlightController {
    pub fn new() -> Self { Self::default() }

    pub fn emphasized(&self) -> Option<Emphasis> { self.emphasized }

    /// Pointer entered `region`. Any other emphasis still in place (a missed
    /// leave, or a group) is cleared first so at most one region is lit.
    pub fn enter<B: RenderBackend + ?Sized>(&mut self, region: RegionId, regions: &mut RegionSet, backend: &mut B) {
        match self.emphasized {
            Some(Emphasis::Region(prev)) if prev != region => restore(prev, regions, backend),
            Some(Emphasis::Group(_)) => reset_all(regions, backend),
            _ => {}
        }

        backend.set_style(region, &StylePatch::HIGHLIGHT);
        if backend.supports_z_order() {
            backend.bring_to_front(region);
        }
        regions.set_visual_state(region, VisualState::Highlighted);
        self.emphasized = Some(Emphasis::Region(region));
    }

    /// Pointer left `region`. Always restores exactly this region; a group
    /// emphasis still active at this point is dropped as a whole.
    pub fn leave<B: RenderBackend + ?Sized>(&mut self, region: RegionId, regions: &mut RegionSet, backend: &mut B) {
        match self.emphasized {
            Some(Emphasis::Group(_)) => {
                reset_all(regions, backend);
                self.emphasized = None;
            }
            Some(Emphasis::Region(current)) if current == region => {
                restore(region, regions, backend);
                self.emphasized = None;
            }
            _ => restore(region, regions, backend),
        }
    }

    /// Emphasize every region served by `consulate` and dim the rest.
    pub fn enter_group<B: RenderBackend + ?Sized>(&mut self, consulate: ConsulateId, regions: &mut RegionSet, backend: &mut B) {
        if self.emphasized == Some(Emphasis::Group(consulate)) { return }

        match self.emphasized {
            Some(Emphasis::Region(prev)) if regions.get(prev).consulate != Some(consulate) => {
                backend.reset_style(prev);
            }
            // A missed legend leave: the old group still carries its border.
            Some(Emphasis::Group(_)) => reset_all(regions, backend),
            _ => {}
        }

        let z_order = backend.supports_z_order();
        for id in regions.ids() {
            if regions.get(id).consulate == Some(consulate) {
                backend.set_style(id, &StylePatch::GROUP_HIGHLIGHT);
                if z_order { backend.bring_to_front(id) }
                regions.set_visual_state(id, VisualState::Highlighted);
            } else {
                backend.set_style(id, &StylePatch::DIMMED);
                regions.set_visual_state(id, VisualState::Dimmed);
            }
        }
        self.emphasized = Some(Emphasis::Group(consulate));
    }

    /// Legend hover ended: every region back to Default.
    pub fn leave_group<B: RenderBackend + ?Sized>(&mut self, regions: &mut RegionSet, backend: &mut B) {
        reset_all(regions, backend);
        self.emphasized = None;
    }
}

fn restore<B: RenderBackend + ?Sized>(region: RegionId, regions: &mut RegionSet, backend: &mut B) {
    backend.reset_style(region);
    regions.set_visual_state(region, VisualState::Default);
}

fn reset_all<B: RenderBackend + ?Sized>(regions: &mut RegionSet, backend: &mut B) {
    for id in regions.ids() {
        restore(id, regions, backend);
    }
}
