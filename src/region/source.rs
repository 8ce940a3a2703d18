use std::path::{Path, PathBuf};

use crate::error::LoadError;

/// Where the region feature collection comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegionSource {
    Text(String),
    Path(PathBuf),
    Url(String),
}

impl RegionSource {
    /// Interpret a command-line or config value: `http(s)://` locations are
    /// URLs, everything else is a filesystem path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url(location.to_string())
        } else {
            Self::Path(PathBuf::from(location))
        }
    }

    /// Read the source once. There is no retry; a failure is terminal for the
    /// session.
    pub fn read(&self) -> Result<String, LoadError> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Path(path) => read_path(path),
            Self::Url(url) => fetch(url),
        }
    }
}

fn read_path(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.display().to_string(), source })
}

#[cfg(feature = "download")]
fn fetch(url: &str) -> Result<String, LoadError> {
    let fail = |reason: String| LoadError::Fetch { url: url.to_string(), reason };

    tracing::debug!(url, "fetching region source");
    let response = reqwest::blocking::get(url).map_err(|e| fail(e.to_string()))?;
    let response = response.error_for_status().map_err(|e| fail(e.to_string()))?;
    response.text().map_err(|e| fail(e.to_string()))
}

#[cfg(not(feature = "download"))]
fn fetch(url: &str) -> Result<String, LoadError> {
    Err(LoadError::Fetch {
        url: url.to_string(),
        reason: "built without the `download` feature".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parse_distinguishes_urls_from_paths() {
        assert_eq!(
            RegionSource::parse("https://example.org/us-states.geojson"),
            RegionSource::Url("https://example.org/us-states.geojson".to_string())
        );
        assert_eq!(
            RegionSource::parse("data/us-states.geojson"),
            RegionSource::Path(PathBuf::from("data/us-states.geojson"))
        );
    }

    #[test]
    fn reads_file_and_reports_missing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"type\":\"FeatureCollection\",\"features\":[]}}").unwrap();

        let text = RegionSource::Path(file.path().to_path_buf()).read().unwrap();
        assert!(text.contains("FeatureCollection"));

        let dir = tempfile::tempdir().unwrap();
        let err = RegionSource::Path(dir.path().join("absent.geojson")).read().unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
