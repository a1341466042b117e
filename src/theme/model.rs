//! Theme data: color palette, typography, spacing, and shadow presets.
//!
//! A [`Theme`] is immutable once attached to a compile pass. Two built-in
//! presets ship with the crate (`light` and `dark`); callers can also supply
//! a fully inline theme through the generator config.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ColorPalette
// ---------------------------------------------------------------------------

/// The fixed semantic color slots plus an ordered neutral scale.
///
/// The neutral scale runs light to dark; index 0 is the page background
/// tint, the last index is the darkest text color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub success: String,
    pub warning: String,
    pub danger: String,
    pub neutral: Vec<String>,
}

impl ColorPalette {
    /// Neutral color at `index`, clamped to the scale's last entry.
    ///
    /// The scale is never empty for built-in presets; an empty scale falls
    /// back to mid gray.
    pub fn neutral(&self, index: usize) -> &str {
        self.neutral
            .get(index.min(self.neutral.len().saturating_sub(1)))
            .map(String::as_str)
            .unwrap_or("#808080")
    }
}

// ---------------------------------------------------------------------------
// Typography
// ---------------------------------------------------------------------------

/// Font family and ordered size/weight/line-height scales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub font_family: String,
    /// Ordered font sizes in pixels, smallest first.
    pub font_sizes: Vec<f64>,
    /// Ordered weight names, lightest first.
    pub font_weights: Vec<String>,
    /// Ordered unitless line heights, tightest first.
    pub line_heights: Vec<f64>,
}

impl Typography {
    /// Font size at `index`, clamped to the last entry of the scale.
    pub fn size(&self, index: usize) -> f64 {
        self.font_sizes
            .get(index.min(self.font_sizes.len().saturating_sub(1)))
            .copied()
            .unwrap_or(16.0)
    }
}

// ---------------------------------------------------------------------------
// SpacingScale
// ---------------------------------------------------------------------------

/// Base spacing unit with an ordered multiplier scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacingScale {
    /// Base unit in pixels.
    pub base: f64,
    /// Ordered multipliers, smallest first.
    pub scale: Vec<f64>,
}

impl SpacingScale {
    /// Spacing step at `index` in pixels (`base * scale[index]`), clamped to
    /// the last entry.
    pub fn step(&self, index: usize) -> f64 {
        let mult = self
            .scale
            .get(index.min(self.scale.len().saturating_sub(1)))
            .copied()
            .unwrap_or(1.0);
        self.base * mult
    }
}

// ---------------------------------------------------------------------------
// Shadows
// ---------------------------------------------------------------------------

/// One shadow description: offset, blur radius, and color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub color: String,
}

/// The three named shadow presets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowPresets {
    pub small: Shadow,
    pub medium: Shadow,
    pub large: Shadow,
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// A complete theme: the named set of color/typography/spacing/shadow
/// defaults a module draws from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub colors: ColorPalette,
    pub typography: Typography,
    pub spacing: SpacingScale,
    pub shadows: ShadowPresets,
}

impl Theme {
    /// Look up a built-in preset by name.
    ///
    /// Recognized names: `"light"` and `"dark"`. Returns `None` for anything
    /// else; the caller reports the configuration error.
    pub fn preset(name: &str) -> Option<Theme> {
        match name {
            "light" => Some(Theme::light()),
            "dark" => Some(Theme::dark()),
            _ => None,
        }
    }

    /// The default light preset.
    pub fn light() -> Theme {
        Theme {
            colors: ColorPalette {
                primary: "#0d6efd".to_string(),
                secondary: "#6c757d".to_string(),
                success: "#198754".to_string(),
                warning: "#ffc107".to_string(),
                danger: "#dc3545".to_string(),
                neutral: vec![
                    "#f8f9fa".to_string(),
                    "#e9ecef".to_string(),
                    "#ced4da".to_string(),
                    "#6c757d".to_string(),
                    "#495057".to_string(),
                    "#212529".to_string(),
                ],
            },
            typography: Typography {
                font_family: "Inter, system-ui, sans-serif".to_string(),
                font_sizes: vec![12.0, 14.0, 16.0, 20.0, 24.0, 32.0],
                font_weights: vec![
                    "regular".to_string(),
                    "medium".to_string(),
                    "semibold".to_string(),
                    "bold".to_string(),
                ],
                line_heights: vec![1.2, 1.4, 1.6],
            },
            spacing: SpacingScale {
                base: 4.0,
                scale: vec![1.0, 2.0, 3.0, 4.0, 6.0, 8.0],
            },
            shadows: ShadowPresets {
                small: Shadow {
                    offset_x: 0.0,
                    offset_y: 1.0,
                    blur: 2.0,
                    color: "#00000026".to_string(),
                },
                medium: Shadow {
                    offset_x: 0.0,
                    offset_y: 4.0,
                    blur: 8.0,
                    color: "#00000033".to_string(),
                },
                large: Shadow {
                    offset_x: 0.0,
                    offset_y: 12.0,
                    blur: 24.0,
                    color: "#00000040".to_string(),
                },
            },
        }
    }

    /// The dark preset: same scales as light, inverted neutrals.
    pub fn dark() -> Theme {
        let mut theme = Theme::light();
        theme.colors.primary = "#3d8bfd".to_string();
        theme.colors.neutral = vec![
            "#212529".to_string(),
            "#343a40".to_string(),
            "#495057".to_string(),
            "#adb5bd".to_string(),
            "#dee2e6".to_string(),
            "#f8f9fa".to_string(),
        ];
        theme
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}
