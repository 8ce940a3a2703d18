//! A render backend that records what it is told to do.
//!
//! The wasm binding drains the queue and replays it against Leaflet; the CLI
//! prints it. Alongside the log, the queue keeps a mirror of the scene
//! (current style per region, draw order, layer stack) so callers can ask
//! what is on screen without a real renderer.

use serde::Serialize;

use crate::{region::RegionId, style::{Style, StylePatch}};

use super::{Basemap, PopupContent, RenderBackend, TileSource};

/// One bound region layer as announced to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoundLayer {
    pub region: RegionId,
    pub name: String,
    pub style: Style,
    pub popup_html: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum RenderCommand {
    AddRegionLayer { layers: Vec<BoundLayer> },
    SetStyle { region: RegionId, style: StylePatch },
    ResetStyle { region: RegionId, style: Style },
    BringToFront { region: RegionId },
    AttachTiles { basemap: Basemap, url: String, attribution: String },
    DetachTiles { basemap: Basemap },
    RaiseRegionLayer,
}

/// Entries of the viewport's layer stack, bottom first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneLayer {
    Tiles(Basemap),
    Regions,
}

#[derive(Debug)]
pub struct CommandQueue {
    commands: Vec<RenderCommand>,
    z_order: bool,

    // Scene mirror.
    defaults: Vec<Style>,
    styles: Vec<Style>,
    draw_order: Vec<RegionId>, // Bottom to top.
    stack: Vec<SceneLayer>,    // Bottom to top.
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            z_order: true,
            defaults: Vec::new(),
            styles: Vec::new(),
            draw_order: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// A backend that cannot reorder individual region layers.
    pub fn without_z_order() -> Self {
        Self { z_order: false, ..Self::new() }
    }

    pub fn commands(&self) -> &[RenderCommand] { &self.commands }

    /// Take every command recorded since the last drain.
    pub fn drain(&mut self) -> Vec<RenderCommand> { std::mem::take(&mut self.commands) }

    /// Current rendered style of a region, if its layer is bound.
    pub fn style(&self, region: RegionId) -> Option<Style> { self.styles.get(region.index()).copied() }

    /// Topmost region layer.
    pub fn top_region(&self) -> Option<RegionId> { self.draw_order.last().copied() }

    pub fn stack(&self) -> &[SceneLayer] { &self.stack }

    pub fn attached_tiles(&self) -> Vec<Basemap> {
        self.stack.iter()
            .filter_map(|l| match l { SceneLayer::Tiles(b) => Some(*b), SceneLayer::Regions => None })
            .collect()
    }

    /// True when the region layer sits above every attached tile layer.
    pub fn regions_above_tiles(&self) -> bool {
        let Some(regions) = self.stack.iter().position(|&l| l == SceneLayer::Regions) else {
            return false;
        };
        self.stack.iter()
            .enumerate()
            .all(|(i, l)| !matches!(l, SceneLayer::Tiles(_)) || i < regions)
    }
}

impl Default for CommandQueue {
    fn default() -> Self { Self::new() }
}

impl RenderBackend for CommandQueue {
    fn add_region_layer(&mut self, layers: &[(RegionId, Style, PopupContent)]) {
        self.defaults = layers.iter().map(|(_, style, _)| *style).collect();
        self.styles = self.defaults.clone();
        self.draw_order = layers.iter().map(|(id, _, _)| *id).collect();
        self.stack.retain(|&l| l != SceneLayer::Regions);
        self.stack.push(SceneLayer::Regions);

        let layers = layers.iter()
            .map(|(region, style, popup)| BoundLayer {
                region: *region,
                name: popup.region_name.clone(),
                style: *style,
                popup_html: popup.html.clone(),
            })
            .collect();
        self.commands.push(RenderCommand::AddRegionLayer { layers });
    }

    fn set_style(&mut self, region: RegionId, patch: &StylePatch) {
        if let Some(style) = self.styles.get_mut(region.index()) {
            style.apply(patch);
        }
        self.commands.push(RenderCommand::SetStyle { region, style: *patch });
    }

    fn reset_style(&mut self, region: RegionId) {
        let Some(&default) = self.defaults.get(region.index()) else { return };
        self.styles[region.index()] = default;
        self.commands.push(RenderCommand::ResetStyle { region, style: default });
    }

    fn supports_z_order(&self) -> bool { self.z_order }

    fn bring_to_front(&mut self, region: RegionId) {
        self.draw_order.retain(|&r| r != region);
        self.draw_order.push(region);
        self.commands.push(RenderCommand::BringToFront { region });
    }

    fn attach_tiles(&mut self, basemap: Basemap, source: &TileSource) {
        self.stack.push(SceneLayer::Tiles(basemap));
        self.commands.push(RenderCommand::AttachTiles {
            basemap,
            url: source.url_template.to_string(),
            attribution: source.attribution.to_string(),
        });
    }

    fn detach_tiles(&mut self, basemap: Basemap) {
        self.stack.retain(|&l| l != SceneLayer::Tiles(basemap));
        self.commands.push(RenderCommand::DetachTiles { basemap });
    }

    fn raise_region_layer(&mut self) {
        if let Some(pos) = self.stack.iter().position(|&l| l == SceneLayer::Regions) {
            self.stack.remove(pos);
            self.stack.push(SceneLayer::Regions);
        }
        self.commands.push(RenderCommand::RaiseRegionLayer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attaching_tiles_after_regions_buries_them_until_raised() {
        let mut queue = CommandQueue::new();
        queue.add_region_layer(&[]);
        queue.attach_tiles(Basemap::Dark, &Basemap::Dark.source());
        assert!(!queue.regions_above_tiles());

        queue.raise_region_layer();
        assert!(queue.regions_above_tiles());
        assert_eq!(queue.stack(), &[SceneLayer::Tiles(Basemap::Dark), SceneLayer::Regions]);
    }

    #[test]
    fn commands_serialize_with_op_tag() {
        let mut queue = CommandQueue::new();
        queue.detach_tiles(Basemap::Light);
        queue.raise_region_layer();

        let json = serde_json::to_value(queue.drain()).unwrap();
        assert_eq!(json, serde_json::json!([
            { "op": "detachTiles", "basemap": "light" },
            { "op": "raiseRegionLayer" },
        ]));
        assert!(queue.commands().is_empty());
    }
}
