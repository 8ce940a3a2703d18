use std::{fmt, str::FromStr, sync::LazyLock};

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::RenderBackend;

/// Background tile imagery choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Basemap {
    #[default]
    Light,
    Dark,
    Satellite,
}

impl Basemap {
    pub const ALL: [Basemap; 3] = [Basemap::Light, Basemap::Dark, Basemap::Satellite];

    pub fn to_str(self) -> &'static str {
        match self {
            Basemap::Light => "light",
            Basemap::Dark => "dark",
            Basemap::Satellite => "satellite",
        }
    }

    pub fn source(self) -> TileSource {
        match self {
            Basemap::Light => TileSource {
                url_template: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
                attribution: "&copy; OpenStreetMap &copy; CARTO",
            },
            Basemap::Dark => TileSource {
                url_template: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
                attribution: "&copy; OpenStreetMap &copy; CARTO",
            },
            Basemap::Satellite => TileSource {
                url_template: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
                attribution: "&copy; Esri",
            },
        }
    }
}

impl fmt::Display for Basemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.to_str()) }
}

impl FromStr for Basemap {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Basemap::ALL.into_iter()
            .find(|b| b.to_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownBasemap(s.to_string()))
    }
}

/// A tile provider: URL template plus the attribution it requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TileSource {
    pub url_template: &'static str,
    pub attribution: &'static str,
}

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([szxyr])\}").expect("placeholder pattern is valid")
});

const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

impl TileSource {
    /// Expand the URL template for one tile. Subdomains rotate on `x + y`;
    /// `{r}` expands to nothing (no retina tiles).
    pub fn tile_url(&self, z: u8, x: u32, y: u32) -> String {
        PLACEHOLDER.replace_all(self.url_template, |caps: &Captures| match &caps[1] {
            "s" => SUBDOMAINS[((x as usize) + (y as usize)) % SUBDOMAINS.len()].to_string(),
            "z" => z.to_string(),
            "x" => x.to_string(),
            "y" => y.to_string(),
            _ => String::new(),
        }).into_owned()
    }
}

/// Keeps exactly one basemap attached and the region layer drawn above it.
#[derive(Debug)]
pub struct BasemapSwitcher {
    active: Basemap,
}

impl BasemapSwitcher {
    /// Attach the initial basemap.
    pub fn attach<B: RenderBackend + ?Sized>(initial: Basemap, backend: &mut B) -> Self {
        backend.attach_tiles(initial, &initial.source());
        Self { active: initial }
    }

    pub fn active(&self) -> Basemap { self.active }

    /// Swap to `next`: detach the current tiles, attach the new ones, then
    /// raise the region layer back over them. Returns false (and touches
    /// nothing) when `next` is already active.
    pub fn select<B: RenderBackend + ?Sized>(&mut self, next: Basemap, backend: &mut B, regions_bound: bool) -> bool {
        if next == self.active {
            tracing::debug!(basemap = %next, "basemap already active");
            return false;
        }

        backend.detach_tiles(self.active);
        backend.attach_tiles(next, &next.source());
        self.active = next;
        if regions_bound {
            backend.raise_region_layer();
        }

        tracing::debug!(basemap = %next, "switched basemap");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Dark".parse::<Basemap>().unwrap(), Basemap::Dark);
        assert_eq!(" satellite ".parse::<Basemap>().unwrap(), Basemap::Satellite);
        assert!(matches!("terrain".parse::<Basemap>(), Err(ConfigError::UnknownBasemap(_))));
    }

    #[test]
    fn expands_carto_template() {
        let url = Basemap::Light.source().tile_url(4, 3, 6);
        assert_eq!(url, "https://a.basemaps.cartocdn.com/light_all/4/3/6.png");
        let url = Basemap::Dark.source().tile_url(4, 3, 5);
        assert_eq!(url, "https://c.basemaps.cartocdn.com/dark_all/4/3/5.png");
    }

    #[test]
    fn expands_esri_template_in_zyx_order() {
        let url = Basemap::Satellite.source().tile_url(5, 7, 12);
        assert!(url.ends_with("/tile/5/12/7"));
    }
}
