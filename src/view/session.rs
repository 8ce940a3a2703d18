use serde::{Deserialize, Serialize};

use crate::{
    config::ViewConfig,
    consulate::ConsulateTable,
    diag,
    error::LoadError,
    region::{RegionId, RegionSet, RegionSource},
};

use super::{
    tooltip_html, Basemap, BasemapSwitcher, HighlightController, Legend, PopupContent,
    RenderBackend, TooltipOverlay,
};

/// Input events as delivered by the host page, regions named as in the data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MapEvent {
    PointerEnter { region: String, x: f64, y: f64 },
    PointerMove { region: String, x: f64, y: f64 },
    PointerLeave { region: String },
    SelectBasemap { basemap: Basemap },
    LegendEnter { consulate: String },
    LegendLeave,
    LegendToggle,
}

/// Regions plus the per-region content rendered for them at bind time.
#[derive(Debug)]
struct BoundRegions {
    regions: RegionSet,
    popups: Vec<PopupContent>,
    tooltips: Vec<String>,
}

/// Everything one page view owns: one map, one tooltip, one set of regions.
///
/// Handlers run to completion one at a time (`&mut self`), so events are
/// totally ordered as delivered.
#[derive(Debug)]
pub struct ViewSession<B: RenderBackend> {
    config: ViewConfig,
    consulates: ConsulateTable,
    bound: Option<BoundRegions>,
    highlight: HighlightController,
    tooltip: TooltipOverlay,
    basemap: BasemapSwitcher,
    legend: Legend,
    backend: B,
}

impl<B: RenderBackend> ViewSession<B> {
    pub fn new(config: ViewConfig, backend: B) -> Self {
        Self::with_consulates(config, ConsulateTable::builtin(), backend)
    }

    pub fn with_consulates(config: ViewConfig, consulates: ConsulateTable, mut backend: B) -> Self {
        let basemap = BasemapSwitcher::attach(config.basemap, &mut backend);
        let legend = Legend::from_table(&consulates);
        Self {
            config,
            consulates,
            bound: None,
            highlight: HighlightController::new(),
            tooltip: TooltipOverlay::new(),
            basemap,
            legend,
            backend,
        }
    }

    /// Read and bind the region source. Failures are reported and leave the
    /// session without regions; there is no retry.
    pub fn load_from(&mut self, source: &RegionSource) -> Result<usize, LoadError> {
        let text = source.read().inspect_err(diag::report_load_error)?;
        self.load_regions(&text)
    }

    /// Parse a feature collection and bind one layer (with popup) per region.
    pub fn load_regions(&mut self, geojson: &str) -> Result<usize, LoadError> {
        if self.bound.is_some() {
            let err = LoadError::AlreadyLoaded;
            diag::report_load_error(&err);
            return Err(err);
        }
        let regions = RegionSet::from_geojson_str(geojson, &self.consulates)
            .inspect_err(diag::report_load_error)?;

        let popups: Vec<_> = regions.iter()
            .map(|(_, r)| PopupContent::for_region(r, &self.consulates))
            .collect();
        let tooltips = regions.iter()
            .map(|(_, r)| tooltip_html(r, &self.consulates))
            .collect();
        let layers: Vec<_> = regions.iter()
            .zip(&popups)
            .map(|((id, r), popup)| (id, r.default_style(), popup.clone()))
            .collect();
        self.backend.add_region_layer(&layers);

        let count = regions.len();
        tracing::info!(regions = count, "bound region layer");
        self.bound = Some(BoundRegions { regions, popups, tooltips });
        Ok(count)
    }

    /// Dispatch one host event. Returns false when the event was ignored
    /// (unknown region or consulate, no regions loaded, disabled feature).
    pub fn handle(&mut self, event: MapEvent) -> bool {
        tracing::trace!(?event, "map event");
        match event {
            MapEvent::PointerEnter { region, x, y } => self.lookup(&region).map(|id| self.pointer_enter(id, x, y)).is_some(),
            MapEvent::PointerMove { region, x, y } => self.lookup(&region).map(|_| self.pointer_move(x, y)).is_some(),
            MapEvent::PointerLeave { region } => self.lookup(&region).map(|id| self.pointer_leave(id)).is_some(),
            MapEvent::SelectBasemap { basemap } => self.select_basemap(basemap),
            MapEvent::LegendEnter { consulate } => self.legend_enter(&consulate),
            MapEvent::LegendLeave => self.legend_leave(),
            MapEvent::LegendToggle => {
                self.legend.toggle();
                true
            }
        }
    }

    fn lookup(&self, name: &str) -> Option<RegionId> {
        let id = self.bound.as_ref()?.regions.find_by_name(name);
        if id.is_none() {
            tracing::debug!(region = name, "event for unknown region ignored");
        }
        id
    }

    /// Ids from another session's region set are ignored.
    pub fn pointer_enter(&mut self, region: RegionId, x: f64, y: f64) {
        let Some(bound) = self.bound.as_mut() else { return };
        let Some(content) = bound.tooltips.get(region.index()).cloned() else {
            tracing::debug!(?region, "pointer enter for unbound region ignored");
            return;
        };
        self.highlight.enter(region, &mut bound.regions, &mut self.backend);
        self.tooltip.show(content, x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.tooltip.move_to(x, y);
    }

    /// Unconditional: whatever came before, the region is restored and the
    /// tooltip hidden.
    pub fn pointer_leave(&mut self, region: RegionId) {
        if let Some(bound) = self.bound.as_mut().filter(|b| region.index() < b.regions.len()) {
            self.highlight.leave(region, &mut bound.regions, &mut self.backend);
        }
        self.tooltip.hide();
    }

    pub fn select_basemap(&mut self, basemap: Basemap) -> bool {
        let regions_bound = self.bound.is_some();
        self.basemap.select(basemap, &mut self.backend, regions_bound)
    }

    /// Emphasize a consulate's regions from the legend. Only active when
    /// `legend_group_highlight` is enabled.
    pub fn legend_enter(&mut self, consulate: &str) -> bool {
        if !self.config.legend_group_highlight { return false }
        let Some(bound) = self.bound.as_mut() else { return false };
        match self.consulates.resolve(consulate) {
            Ok(id) => {
                self.highlight.enter_group(id, &mut bound.regions, &mut self.backend);
                true
            }
            Err(err) => {
                tracing::warn!(%err, "legend hover for unknown consulate ignored");
                false
            }
        }
    }

    pub fn legend_leave(&mut self) -> bool {
        if !self.config.legend_group_highlight { return false }
        let Some(bound) = self.bound.as_mut() else { return false };
        self.highlight.leave_group(&mut bound.regions, &mut self.backend);
        true
    }

    pub fn config(&self) -> &ViewConfig { &self.config }

    pub fn consulates(&self) -> &ConsulateTable { &self.consulates }

    /// `None` until a load succeeds.
    pub fn regions(&self) -> Option<&RegionSet> { self.bound.as_ref().map(|b| &b.regions) }

    pub fn popup(&self, region: RegionId) -> Option<&PopupContent> {
        self.bound.as_ref()?.popups.get(region.index())
    }

    pub fn tooltip(&self) -> &TooltipOverlay { &self.tooltip }

    pub fn highlight(&self) -> &HighlightController { &self.highlight }

    pub fn basemap(&self) -> Basemap { self.basemap.active() }

    pub fn legend(&self) -> &Legend { &self.legend }

    pub fn backend(&self) -> &B { &self.backend }

    pub fn backend_mut(&mut self) -> &mut B { &mut self.backend }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::view::{CommandQueue, TooltipState};

    fn geojson() -> String {
        json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": { "name": "Texas", "consulate": "Houston" }, "geometry": null },
                { "type": "Feature", "properties": { "name": "Florida", "consulate": "Miami" }, "geometry": null },
            ],
        }).to_string()
    }

    #[test]
    fn events_before_load_are_ignored() {
        let mut session = ViewSession::new(ViewConfig::default(), CommandQueue::new());
        assert!(!session.handle(MapEvent::PointerEnter { region: "Texas".into(), x: 0.0, y: 0.0 }));
        assert_eq!(session.tooltip().state(), TooltipState::Hidden);
    }

    #[test]
    fn failed_load_leaves_no_regions() {
        let mut session = ViewSession::new(ViewConfig::default(), CommandQueue::new());
        assert!(session.load_regions("<html>404</html>").is_err());
        assert!(session.regions().is_none());

        // Basemap switching still works without regions, and never raises a
        // region layer that does not exist.
        assert!(session.select_basemap(Basemap::Satellite));
        assert!(!session.backend().commands().iter().any(|c| matches!(c, crate::view::RenderCommand::RaiseRegionLayer)));
    }

    #[test]
    fn second_load_is_rejected() {
        let mut session = ViewSession::new(ViewConfig::default(), CommandQueue::new());
        assert_eq!(session.load_regions(&geojson()).unwrap(), 2);
        assert!(matches!(session.load_regions(&geojson()), Err(LoadError::AlreadyLoaded)));
        assert_eq!(session.regions().unwrap().len(), 2);
    }

    #[test]
    fn legend_hover_is_off_by_default() {
        let mut session = ViewSession::new(ViewConfig::default(), CommandQueue::new());
        session.load_regions(&geojson()).unwrap();
        assert!(!session.handle(MapEvent::LegendEnter { consulate: "Miami".into() }));
        assert_eq!(session.highlight().emphasized(), None);

        assert!(session.handle(MapEvent::LegendToggle));
        assert!(session.legend().is_collapsed());
    }

    #[test]
    fn foreign_region_ids_are_ignored() {
        let mut session = ViewSession::new(ViewConfig::default(), CommandQueue::new());
        session.load_regions(&geojson()).unwrap();
        session.backend_mut().drain();
        let foreign = RegionId(7);

        session.pointer_enter(foreign, 5.0, 5.0);
        assert_eq!(session.tooltip().state(), TooltipState::Hidden);
        assert!(session.backend().commands().is_empty());

        let texas = session.regions().unwrap().find_by_name("Texas").unwrap();
        session.pointer_enter(texas, 5.0, 5.0);
        session.pointer_leave(foreign);
        assert_eq!(session.tooltip().state(), TooltipState::Hidden);
        assert_eq!(session.regions().unwrap().highlighted(), vec![texas]);
    }

    #[test]
    fn events_parse_from_json() {
        let event: MapEvent = serde_json::from_value(json!({ "type": "pointerEnter", "region": "Ohio", "x": 1.0, "y": 2.0 })).unwrap();
        assert_eq!(event, MapEvent::PointerEnter { region: "Ohio".into(), x: 1.0, y: 2.0 });

        let event: MapEvent = serde_json::from_value(json!({ "type": "selectBasemap", "basemap": "dark" })).unwrap();
        assert_eq!(event, MapEvent::SelectBasemap { basemap: Basemap::Dark });
    }
}
