mod backend;
mod basemap;
mod commands;
mod highlight;
mod legend;
mod popup;
mod session;
mod tooltip;

pub use backend::RenderBackend;
pub use basemap::{Basemap, BasemapSwitcher, TileSource};
pub use commands::{BoundLayer, CommandQueue, RenderCommand, SceneLayer};
pub use highlight::{Emphasis, HighlightController};
pub use legend::{Legend, LegendEntry};
pub use popup::PopupContent;
pub use session::{MapEvent, ViewSession};
pub use tooltip::{tooltip_html, TooltipNode, TooltipOverlay, TooltipState, TOOLTIP_OFFSET};
