use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::{consulate::ConsulateId, style::{Rgb, Style}};

/// Contiguous index of a region within its [`super::RegionSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RegionId(pub(crate) u32);

impl RegionId {
    pub fn index(self) -> usize { self.0 as usize }
}

/// One state polygon, validated at load time. Attributes never change after
/// construction; only the rendered style does.
#[derive(Clone, Debug)]
pub struct Region {
    pub name: Arc<str>,
    /// Consulate label exactly as it appears in the source data.
    pub consulate_label: Arc<str>,
    /// `None` when the label failed to resolve against the consulate table.
    pub consulate: Option<ConsulateId>,
    pub fill_color: Rgb,
    /// Opaque GeoJSON geometry, handed through to the renderer untouched.
    pub geometry: Value,
}

impl Region {
    pub fn default_style(&self) -> Style { Style::default_for(self.fill_color) }
}
