use serde::Serialize;

use crate::{consulate::ConsulateTable, region::Region};

use super::popup::escape_html;

/// Screen-pixel offset between the pointer and the tooltip's top-left corner.
pub const TOOLTIP_OFFSET: f64 = 10.0;

/// The floating element itself. Exactly one exists per session, created on
/// first use.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipNode {
    pub class_name: &'static str,
    pub content: String,
    pub visible: bool,
    pub left: f64,
    pub top: f64,
}

/// Observable tooltip state.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum TooltipState {
    Hidden,
    Visible { content: String, x: f64, y: f64 },
}

#[derive(Debug, Default)]
pub struct TooltipOverlay {
    node: Option<TooltipNode>,
}

impl TooltipOverlay {
    pub fn new() -> Self { Self::default() }

    /// Create the node on first call; later calls return the same node.
    pub fn ensure(&mut self) -> &mut TooltipNode {
        self.node.get_or_insert_with(|| TooltipNode {
            class_name: "custom-map-tooltip",
            content: String::new(),
            visible: false,
            left: 0.0,
            top: 0.0,
        })
    }

    pub fn is_created(&self) -> bool { self.node.is_some() }

    pub fn is_visible(&self) -> bool { self.node.as_ref().is_some_and(|n| n.visible) }

    pub fn node(&self) -> Option<&TooltipNode> { self.node.as_ref() }

    pub fn show(&mut self, content: String, pointer_x: f64, pointer_y: f64) {
        let node = self.ensure();
        node.content = content;
        node.visible = true;
        node.left = pointer_x + TOOLTIP_OFFSET;
        node.top = pointer_y + TOOLTIP_OFFSET;
    }

    /// Follow the pointer. Does nothing while hidden.
    pub fn move_to(&mut self, pointer_x: f64, pointer_y: f64) {
        if let Some(node) = self.node.as_mut().filter(|n| n.visible) {
            node.left = pointer_x + TOOLTIP_OFFSET;
            node.top = pointer_y + TOOLTIP_OFFSET;
        }
    }

    /// Hide without clearing content.
    pub fn hide(&mut self) {
        if let Some(node) = self.node.as_mut() {
            node.visible = false;
        }
    }

    pub fn state(&self) -> TooltipState {
        match &self.node {
            Some(node) if node.visible => TooltipState::Visible {
                content: node.content.clone(),
                x: node.left,
                y: node.top,
            },
            _ => TooltipState::Hidden,
        }
    }
}

/// Hover text for a region: its name and the consulate that serves it.
pub fn tooltip_html(region: &Region, consulates: &ConsulateTable) -> String {
    let consulate = match region.consulate {
        Some(id) => consulates.get(id).display_name.clone(),
        None => region.consulate_label.to_string(),
    };
    let name = escape_html(&region.name);
    format!(
        "<div class=\"tooltip-body\"><span class=\"tooltip-title\">{name}</span>\
         <span class=\"tooltip-text\">Docs from <strong>{name}</strong> can be authenticated by the Panama consulate in \
         <span class=\"tooltip-consulate\">{}</span>.</span></div>",
        escape_html(&consulate),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_creates_a_single_node() {
        let mut overlay = TooltipOverlay::new();
        assert!(!overlay.is_created());

        overlay.ensure().content = "first".to_string();
        assert_eq!(overlay.ensure().content, "first");
        assert!(!overlay.is_visible());
    }

    #[test]
    fn show_offsets_from_pointer() {
        let mut overlay = TooltipOverlay::new();
        overlay.show("Ohio".to_string(), 100.0, 40.0);
        assert_eq!(overlay.state(), TooltipState::Visible { content: "Ohio".to_string(), x: 110.0, y: 50.0 });

        overlay.move_to(120.0, 60.0);
        assert_eq!(overlay.state(), TooltipState::Visible { content: "Ohio".to_string(), x: 130.0, y: 70.0 });
    }

    #[test]
    fn move_while_hidden_is_ignored() {
        let mut overlay = TooltipOverlay::new();
        overlay.move_to(5.0, 5.0);
        assert!(!overlay.is_created());

        overlay.show("Iowa".to_string(), 0.0, 0.0);
        overlay.hide();
        overlay.move_to(300.0, 300.0);

        let node = overlay.node().unwrap();
        assert_eq!((node.left, node.top), (10.0, 10.0));
        assert_eq!(node.content, "Iowa");
        assert_eq!(overlay.state(), TooltipState::Hidden);
    }

    #[test]
    fn hide_before_any_show_is_harmless() {
        let mut overlay = TooltipOverlay::new();
        overlay.hide();
        assert_eq!(overlay.state(), TooltipState::Hidden);
    }
}
