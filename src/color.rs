use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: table key → Color32
// ---------------------------------------------------------------------------

/// Assigns each loaded table key a distinct colour so the scatter keeps a
/// stable colour per dataset while the user switches between them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl KeyColors {
    /// Build a colour per key, in iteration order.
    pub fn new<'a>(keys: impl ExactSizeIterator<Item = &'a String>) -> Self {
        let palette = generate_palette(keys.len());
        let mapping: BTreeMap<String, Color32> = keys
            .zip(palette.into_iter())
            .map(|(k, c)| (k.clone(), c))
            .collect();

        KeyColors {
            mapping,
            default_color: Color32::LIGHT_BLUE,
        }
    }

    pub fn color_for(&self, key: &str) -> Color32 {
        self.mapping
            .get(key)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_distinct() {
        let palette = generate_palette(6);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_keys_fall_back_to_the_default() {
        let keys = vec!["a".to_string(), "b".to_string()];
        let colors = KeyColors::new(keys.iter());
        assert_ne!(colors.color_for("a"), colors.color_for("b"));
        assert_eq!(colors.color_for("zzz"), Color32::LIGHT_BLUE);
    }
}
