use serde::Serialize;

use crate::{consulate::{ConsulateId, ConsulateTable}, style::Rgb};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub consulate: ConsulateId,
    pub label: String,
    pub color: Rgb,
    pub url: String,
}

/// Collapsible list of consulate swatches, one per table entry.
#[derive(Clone, Debug, Serialize)]
pub struct Legend {
    entries: Vec<LegendEntry>,
    collapsed: bool,
}

impl Legend {
    pub fn from_table(consulates: &ConsulateTable) -> Self {
        let entries = consulates.iter()
            .map(|(id, c)| LegendEntry {
                consulate: id,
                label: c.display_name.clone(),
                color: c.color,
                url: c.website_url.clone(),
            })
            .collect();
        Self { entries, collapsed: false }
    }

    pub fn entries(&self) -> &[LegendEntry] { &self.entries }

    pub fn is_collapsed(&self) -> bool { self.collapsed }

    /// Flip collapsed state; returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_follow_table_order() {
        let legend = Legend::from_table(&ConsulateTable::builtin());
        let labels: Vec<_> = legend.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels.first(), Some(&"New Orleans"));
        assert_eq!(labels.last(), Some(&"Philadelphia"));
        assert_eq!(labels.len(), 8);
    }

    #[test]
    fn toggle_flips_collapsed() {
        let mut legend = Legend::from_table(&ConsulateTable::builtin());
        assert!(!legend.is_collapsed());
        assert!(legend.toggle());
        assert!(!legend.toggle());
    }
}
