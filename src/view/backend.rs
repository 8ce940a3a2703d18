use crate::{region::RegionId, style::{Style, StylePatch}};

use super::{Basemap, PopupContent, TileSource};

/// The rendering collaborator: everything the interaction core asks of the
/// map widget. Geometry, projection and hit-testing all live behind it.
pub trait RenderBackend {
    /// Bind one layer per region with its resting style and popup content.
    /// The combined region layer goes on top of whatever tiles are attached.
    fn add_region_layer(&mut self, layers: &[(RegionId, Style, PopupContent)]);

    fn set_style(&mut self, region: RegionId, patch: &StylePatch);

    /// Restore one region to the style it was bound with.
    fn reset_style(&mut self, region: RegionId);

    /// Whether per-region draw order can be changed at all.
    fn supports_z_order(&self) -> bool { true }

    /// Raise a region above its siblings. Only called when
    /// [`RenderBackend::supports_z_order`] is true.
    fn bring_to_front(&mut self, region: RegionId);

    fn attach_tiles(&mut self, basemap: Basemap, source: &TileSource);

    fn detach_tiles(&mut self, basemap: Basemap);

    /// Put the combined region layer back above the tile layer.
    fn raise_region_layer(&mut self);
}
