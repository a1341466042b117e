//! Theme system: palette/typography/spacing/shadow records and style resolution.

pub mod model;
pub mod resolve;

pub use model::{ColorPalette, Shadow, ShadowPresets, SpacingScale, Theme, Typography};
pub use resolve::{resolve, ResolvedStyle, StyleOverride};
