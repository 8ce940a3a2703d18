use serde::{Deserialize, Serialize};

use crate::{error::ResolutionError, style::Rgb};

/// Link target substituted when a consulate label cannot be resolved.
pub const FALLBACK_URL: &str = "#";

/// Index of a consulate within its [`ConsulateTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ConsulateId(pub(crate) u32);

impl ConsulateId {
    pub fn index(self) -> usize { self.0 as usize }
}

/// A consulate office, resolving regions to a color and an outbound link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Consulate {
    pub id: String,
    pub display_name: String,
    pub color: Rgb,
    pub website_url: String,
}

/// Resolved (or placeholder) outbound link for a consulate label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConsulateLink {
    pub label: String,
    pub url: String,
    pub resolved: bool,
}

/// Static reference table of consulates, defined once at startup.
#[derive(Clone, Debug)]
pub struct ConsulateTable {
    entries: Vec<Consulate>,
}

const BUILTIN: [(&str, &str, Rgb, &str); 8] = [
    ("new-orleans", "New Orleans", Rgb::new(0x61, 0x33, 0x1C), "https://www.embassyofpanama.org/consulado-en-new-orleans-louisiana"),
    ("los-angeles", "Los Angeles", Rgb::new(0xF0, 0x54, 0x4F), "https://www.embassyofpanama.org/consulado-en-los-angeles-california"),
    ("miami", "Miami", Rgb::new(0xF7, 0xB3, 0x2B), "https://www.embassyofpanama.org/consulado-miami-florida"),
    ("washington-dc", "Washington, DC", Rgb::new(0x5F, 0xA2, 0x75), "https://www.embassyofpanama.org/consulado-en-washington-dc"),
    ("new-york", "New York City", Rgb::new(0x45, 0x7B, 0x9D), "https://www.embassyofpanama.org/consulado-en-nueva-york-nueva-york"),
    ("tampa", "Tampa", Rgb::new(0xA7, 0xDA, 0xDC), "https://www.embassyofpanama.org/consulado-en-tampa-florida"),
    ("houston", "Houston", Rgb::new(0xE2, 0xB7, 0x86), "https://www.embassyofpanama.org/consulado-en-houston-texas"),
    ("philadelphia", "Philadelphia", Rgb::new(0x1D, 0x35, 0x57), "https://www.embassyofpanama.org/consulado-en-philadelphia-penssylvania"),
];

impl ConsulateTable {
    /// The eight Panama consulates serving the United States.
    pub fn builtin() -> Self {
        let entries = BUILTIN.iter()
            .map(|&(id, display_name, color, url)| Consulate {
                id: id.to_string(),
                display_name: display_name.to_string(),
                color,
                website_url: url.to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Build a table from explicit entries.
    pub fn from_entries(entries: Vec<Consulate>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn get(&self, id: ConsulateId) -> &Consulate { &self.entries[id.index()] }

    pub fn iter(&self) -> impl Iterator<Item = (ConsulateId, &Consulate)> {
        self.entries.iter().enumerate().map(|(i, c)| (ConsulateId(i as u32), c))
    }

    /// Match a label against ids and display names, ignoring case and
    /// surrounding whitespace.
    pub fn resolve(&self, label: &str) -> Result<ConsulateId, ResolutionError> {
        let needle = label.trim();
        self.iter()
            .find(|(_, c)| c.id.eq_ignore_ascii_case(needle) || c.display_name.eq_ignore_ascii_case(needle))
            .map(|(id, _)| id)
            .ok_or_else(|| ResolutionError { label: label.to_string() })
    }

    /// Resolve a label to its outbound link, substituting [`FALLBACK_URL`]
    /// and the raw label when no consulate matches.
    pub fn resolve_link(&self, label: &str) -> ConsulateLink {
        match self.resolve(label) {
            Ok(id) => {
                let consulate = self.get(id);
                ConsulateLink {
                    label: consulate.display_name.clone(),
                    url: consulate.website_url.clone(),
                    resolved: true,
                }
            }
            Err(err) => {
                tracing::warn!(%err, "using placeholder consulate link");
                ConsulateLink { label: label.to_string(), url: FALLBACK_URL.to_string(), resolved: false }
            }
        }
    }
}

impl Default for ConsulateTable {
    fn default() -> Self { Self::builtin() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_eight_distinct_consulates() {
        let table = ConsulateTable::builtin();
        assert_eq!(table.len(), 8);
        let mut colors: Vec<_> = table.iter().map(|(_, c)| c.color).collect();
        colors.sort_by_key(|c| (c.r, c.g, c.b));
        colors.dedup();
        assert_eq!(colors.len(), 8);
    }

    #[test]
    fn resolves_by_id_or_display_name() {
        let table = ConsulateTable::builtin();
        let by_name = table.resolve("Washington, DC").unwrap();
        let by_id = table.resolve("washington-dc").unwrap();
        assert_eq!(by_name, by_id);
        assert_eq!(table.resolve("  new york city ").unwrap(), table.resolve("new-york").unwrap());
    }

    #[test]
    fn unknown_label_falls_back_to_placeholder() {
        let table = ConsulateTable::builtin();
        assert!(table.resolve("Atlantis").is_err());

        let link = table.resolve_link("Atlantis");
        assert_eq!(link.url, FALLBACK_URL);
        assert_eq!(link.label, "Atlantis");
        assert!(!link.resolved);
    }

    #[test]
    fn custom_table_resolves_its_own_entries() {
        let table = ConsulateTable::from_entries(vec![Consulate {
            id: "san-juan".to_string(),
            display_name: "San Juan".to_string(),
            color: Rgb::new(0x22, 0x22, 0x22),
            website_url: "https://example.org/san-juan".to_string(),
        }]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.resolve("San Juan").unwrap().index(), 0);
        assert!(table.resolve("Miami").is_err());
    }

    #[test]
    fn large_custom_table_keeps_ids_distinct() {
        let entries = (0..300)
            .map(|i| Consulate {
                id: format!("c{i}"),
                display_name: format!("Office {i}"),
                color: Rgb::new(0x10, 0x20, 0x30),
                website_url: format!("https://example.org/{i}"),
            })
            .collect();
        let table = ConsulateTable::from_entries(entries);

        let last = table.resolve("c299").unwrap();
        assert_eq!(last.index(), 299);
        assert_ne!(last, table.resolve("c43").unwrap());
        assert_eq!(table.get(last).display_name, "Office 299");
    }

    #[test]
    fn known_label_resolves_to_website() {
        let link = ConsulateTable::builtin().resolve_link("Houston");
        assert!(link.resolved);
        assert_eq!(link.url, "https://www.embassyofpanama.org/consulado-en-houston-texas");
    }
}
