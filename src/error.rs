use thiserror::Error;

/// The region feature collection could not be fetched or parsed.
///
/// Fatal to the map's interactive layer for the session, never to the page:
/// the session keeps running with no regions bound.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read region source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch region source {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("region source is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("region source is not a GeoJSON FeatureCollection")]
    NotFeatureCollection,

    #[error("feature {index} is missing string property {key:?}")]
    MissingProperty { index: usize, key: &'static str },

    #[error("region name {0:?} appears more than once")]
    DuplicateRegion(String),

    #[error("region sources must be loaded once per session")]
    AlreadyLoaded,
}

/// A consulate label did not match any entry in the reference table.
/// Always recovered locally with a placeholder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no consulate matches {label:?}")]
pub struct ResolutionError {
    pub label: String,
}

/// A single copy strategy failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{strategy} copy failed: {reason}")]
pub struct ClipboardError {
    pub strategy: &'static str,
    pub reason: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("zoom levels must satisfy min_zoom <= zoom <= max_zoom (got {min} <= {zoom} <= {max})")]
    ZoomRange { min: u8, zoom: u8, max: u8 },

    #[error("bounds_viscosity must lie in [0, 1], got {0}")]
    Viscosity(f64),

    #[error("bounding box corners are out of order")]
    BoundingBox,

    #[error("unknown basemap {0:?}, expected one of: light, dark, satellite")]
    UnknownBasemap(String),
}
