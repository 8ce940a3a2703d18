use serde::Serialize;

use crate::{consulate::ConsulateTable, region::Region};

/// Click-activated detail panel for one region. Rendered once at bind time;
/// opening and closing belong to the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PopupContent {
    pub region_name: String,
    pub consulate_label: String,
    pub url: String,
    pub html: String,
}

impl PopupContent {
    pub fn for_region(region: &Region, consulates: &ConsulateTable) -> Self {
        let (consulate_label, url) = match region.consulate {
            Some(id) => {
                let consulate = consulates.get(id);
                (consulate.display_name.clone(), consulate.website_url.clone())
            }
            None => {
                let link = consulates.resolve_link(&region.consulate_label);
                (link.label, link.url)
            }
        };

        let html = format!(
            "<div class=\"state-popup\"><strong>{}</strong><br>Consulate: {}<br>\
             <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Visit consulate website</a></div>",
            escape_html(&region.name),
            escape_html(&consulate_label),
            escape_html(&url),
        );

        Self { region_name: region.name.to_string(), consulate_label, url, html }
    }
}

/// Escape text for inclusion in HTML element content or quoted attributes.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
