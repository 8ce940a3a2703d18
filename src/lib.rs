#![doc = "Interaction and view-state core for the Panama consulate map"]
mod config;
mod consulate;
mod copy;
mod diag;
mod error;
mod region;
mod style;
mod view;

#[doc(inline)]
pub use config::ViewConfig;

#[doc(inline)]
pub use consulate::{Consulate, ConsulateId, ConsulateLink, ConsulateTable, FALLBACK_URL};

#[doc(inline)]
pub use copy::{copy_with_fallback, CopyOutcome, CopyStrategy};

#[doc(inline)]
pub use error::{ClipboardError, ConfigError, LoadError, ResolutionError};

#[doc(inline)]
pub use region::{Region, RegionId, RegionSet, RegionSource};

#[doc(inline)]
pub use style::{Rgb, Style, StylePatch, VisualState};

#[doc(inline)]
pub use view::{
    tooltip_html, Basemap, BasemapSwitcher, BoundLayer, CommandQueue, Emphasis, HighlightController,
    Legend, LegendEntry, MapEvent, PopupContent, RenderBackend, RenderCommand, SceneLayer,
    TileSource, TooltipNode, TooltipOverlay, TooltipState, ViewSession, TOOLTIP_OFFSET,
};
