use std::collections::HashSet;

use serde_json::Value;

use crate::{consulate::ConsulateTable, error::LoadError, style::Rgb};

use super::{Region, RegionSet};

impl RegionSet {
    /// Parse a GeoJSON FeatureCollection from text.
    pub fn from_geojson_str(text: &str, consulates: &ConsulateTable) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_geojson(&value, consulates)
    }

    /// Build regions from a parsed GeoJSON FeatureCollection.
    ///
    /// Every feature must carry string `name` and `consulate` properties.
    /// Consulate labels that do not resolve are kept (the region renders with
    /// its own `color` property, or neutral gray) and logged.
    pub fn from_geojson(value: &Value, consulates: &ConsulateTable) -> Result<Self, LoadError> {
        if value.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
            return Err(LoadError::NotFeatureCollection);
        }
        let features = value.get("features")
            .and_then(Value::as_array)
            .ok_or(LoadError::NotFeatureCollection)?;

        let mut seen = HashSet::with_capacity(features.len());
        let mut regions = Vec::with_capacity(features.len());

        for (index, feature) in features.iter().enumerate() {
            let props = feature.get("properties");
            let string_prop = |key: &'static str| {
                props.and_then(|p| p.get(key))
                    .and_then(Value::as_str)
                    .ok_or(LoadError::MissingProperty { index, key })
            };

            let name = string_prop("name")?.trim();
            let label = string_prop("consulate")?;
            if !seen.insert(name.to_string()) {
                return Err(LoadError::DuplicateRegion(name.to_string()));
            }

            let feature_color = props.and_then(|p| p.get("color"))
                .and_then(Value::as_str)
                .and_then(Rgb::from_hex);

            let (consulate, fill_color) = match consulates.resolve(label) {
                Ok(id) => {
                    let color = consulates.get(id).color;
                    if feature_color.is_some_and(|c| c != color) {
                        tracing::warn!(region = name, consulate = label, "feature color differs from consulate color; using consulate color");
                    }
                    (Some(id), color)
                }
                Err(err) => {
                    tracing::warn!(region = name, %err, "region has no matching consulate");
                    (None, feature_color.unwrap_or(Rgb::NEUTRAL))
                }
            };

            regions.push(Region {
                name: name.into(),
                consulate_label: label.into(),
                consulate,
                fill_color,
                geometry: feature.get("geometry").cloned().unwrap_or(Value::Null),
            });
        }

        tracing::debug!(regions = regions.len(), "loaded region feature collection");
        Ok(RegionSet::from_regions(regions))
    }
}
