use std::path::Path;

use geo::{Coord, Point, Rect};
use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, view::Basemap};

/// Startup configuration for one map view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Initial center as `[lat, lon]`.
    pub center: [f64; 2],
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
    /// Optional pan limit as `[[south, west], [north, east]]`.
    pub bounding_box: Option<[[f64; 2]; 2]>,
    /// How hard the bounding box resists dragging, 0.0 to 1.0.
    pub bounds_viscosity: Option<f64>,
    pub basemap: Basemap,
    /// Location of the region feature collection (path or URL).
    pub data_url: String,
    pub contact_email: String,
    /// Let legend hover emphasize a consulate's regions.
    pub legend_group_highlight: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center: [37.5, -96.0],
            zoom: 4,
            min_zoom: 2,
            max_zoom: 18,
            bounding_box: None,
            bounds_viscosity: None,
            basemap: Basemap::Light,
            data_url: "data/us-states.geojson".to_string(),
            contact_email: "contact@example.com".to_string(),
            legend_group_highlight: false,
        }
    }
}

impl ViewConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_zoom <= self.zoom && self.zoom <= self.max_zoom) {
            return Err(ConfigError::ZoomRange { min: self.min_zoom, zoom: self.zoom, max: self.max_zoom });
        }
        if let Some(v) = self.bounds_viscosity {
            if !(0.0..=1.0).contains(&v) { return Err(ConfigError::Viscosity(v)) }
        }
        if let Some([[south, west], [north, east]]) = self.bounding_box {
            if south > north || west > east { return Err(ConfigError::BoundingBox) }
        }
        Ok(())
    }

    /// Center as a lon/lat point.
    pub fn center_point(&self) -> Point<f64> {
        let [lat, lon] = self.center;
        Point::new(lon, lat)
    }

    /// Pan limit as a lon/lat rectangle.
    pub fn max_bounds(&self) -> Option<Rect<f64>> {
        self.bounding_box.map(|[[south, west], [north, east]]| {
            Rect::new(Coord { x: west, y: south }, Coord { x: east, y: north })
        })
    }
}
