use serde::Serialize;

use super::Rgb;

/// Fully resolved path style of one region layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub fill_color: Rgb,
    pub fill_opacity: f64,
    /// Border width in pixels.
    pub weight: f64,
    /// Border opacity.
    pub opacity: f64,
    /// Border color.
    pub color: Rgb,
}

impl Style {
    pub const DEFAULT_FILL_OPACITY: f64 = 0.75;

    /// The per-region style function: what a region looks like at rest.
    pub fn default_for(fill_color: Rgb) -> Self {
        Self {
            fill_color,
            fill_opacity: Self::DEFAULT_FILL_OPACITY,
            weight: 1.0,
            opacity: 1.0,
            color: Rgb::WHITE,
        }
    }

    /// Apply the fields a patch sets, leaving the rest untouched.
    pub fn apply(&mut self, patch: &StylePatch) {
        if let Some(weight) = patch.weight { self.weight = weight }
        if let Some(color) = patch.color { self.color = color }
        if let Some(fill_opacity) = patch.fill_opacity { self.fill_opacity = fill_opacity }
    }

    pub fn patched(mut self, patch: &StylePatch) -> Self {
        self.apply(patch);
        self
    }
}

/// Partial style update, mirroring `setStyle` semantics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
}

impl StylePatch {
    /// Single region under the pointer.
    pub const HIGHLIGHT: StylePatch = StylePatch {
        weight: Some(2.0),
        color: Some(Rgb::EMPHASIS),
        fill_opacity: Some(0.9),
    };

    /// Member of the emphasized consulate group.
    pub const GROUP_HIGHLIGHT: StylePatch = StylePatch {
        weight: Some(2.0),
        color: Some(Rgb::EMPHASIS),
        fill_opacity: Some(0.95),
    };

    /// Region outside the emphasized consulate group.
    pub const DIMMED: StylePatch = StylePatch {
        weight: None,
        color: None,
        fill_opacity: Some(0.25),
    };
}

/// Style classification of a region at a point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualState {
    #[default]
    Default,
    Highlighted,
    Dimmed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_matches_resting_look() {
        let style = Style::default_for(Rgb::new(0x45, 0x7B, 0x9D));
        assert_eq!(style.fill_opacity, 0.75);
        assert_eq!(style.weight, 1.0);
        assert_eq!(style.color, Rgb::WHITE);
    }

    #[test]
    fn dimmed_patch_only_touches_fill_opacity() {
        let base = Style::default_for(Rgb::NEUTRAL);
        let dimmed = base.patched(&StylePatch::DIMMED);
        assert_eq!(dimmed.fill_opacity, 0.25);
        assert_eq!(dimmed.weight, base.weight);
        assert_eq!(dimmed.color, base.color);
        assert_eq!(dimmed.fill_color, base.fill_color);
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let json = serde_json::to_value(StylePatch::DIMMED).unwrap();
        assert_eq!(json, serde_json::json!({ "fillOpacity": 0.25 }));
    }
}
