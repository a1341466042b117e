//! Generator configuration: theme source, layout, export, responsive,
//! naming.
//!
//! A [`GeneratorConfig`] is built once per session and validated up front by
//! [`GeneratorConfig::validate`]; every configuration error is raised before
//! any compile work starts.

use serde::{Deserialize, Serialize};

use crate::geometry::Size;
use crate::naming::NamingConfig;
use crate::theme::Theme;

/// The only container format this crate emits.
pub const FORMAT_CONTAINER_V1: &str = "container-v1";

/// Configuration errors. Always fatal, raised before any work starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported export format: {0:?}")]
    UnsupportedFormat(String),
    #[error("grid layout requires at least one column")]
    NoColumns,
    #[error("unknown theme preset: {0:?}")]
    UnknownThemePreset(String),
    #[error("responsive mode is enabled but no breakpoints are defined")]
    EmptyBreakpoints,
    #[error("duplicate breakpoint name: {0}")]
    DuplicateBreakpoint(String),
    #[error("breakpoints must be sorted ascending by width")]
    UnsortedBreakpoints,
    #[error("breakpoint {name} has non-positive size {width}x{height}")]
    InvalidBreakpoint { name: String, width: f64, height: f64 },
    #[error("canvas size must be positive, got {width}x{height}")]
    InvalidCanvas { width: f64, height: f64 },
}

// ---------------------------------------------------------------------------
// LayoutConfig
// ---------------------------------------------------------------------------

/// Layout strategy plus its type-specific parameters.
///
/// Gutters and column counts are integers per the configuration surface;
/// layout math converts to f64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutConfig {
    /// Equal-width column tracks separated by a gutter; components occupy
    /// declared spans in source order.
    Grid { columns: u32, gutter: u32 },
    /// Left-to-right placement wrapping at the artboard edge.
    Flow { gutter: u32 },
    /// Caller supplies explicit geometry per component.
    Absolute,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig::Grid {
            columns: 12,
            gutter: 16,
        }
    }
}

// ---------------------------------------------------------------------------
// Responsive
// ---------------------------------------------------------------------------

/// A named viewport size used to re-run layout for responsive output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub name: String,
    pub width: f64,
    pub height: f64,
}

impl Breakpoint {
    /// Create a breakpoint.
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// The breakpoint's size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Responsive output configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponsiveConfig {
    pub enabled: bool,
    /// Unique by name, sorted ascending by width.
    pub breakpoints: Vec<Breakpoint>,
}

// ---------------------------------------------------------------------------
// ExportOptions / ThemeSource
// ---------------------------------------------------------------------------

/// Target container format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub format: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: FORMAT_CONTAINER_V1.to_string(),
        }
    }
}

/// Where the compile pass takes its theme from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSource {
    /// A built-in preset name ("light" or "dark").
    Preset(String),
    /// A fully inline theme.
    Inline(Theme),
}

impl Default for ThemeSource {
    fn default() -> Self {
        ThemeSource::Preset("light".to_string())
    }
}

// ---------------------------------------------------------------------------
// GeneratorConfig
// ---------------------------------------------------------------------------

/// Process-wide configuration for one compiler instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default)]
    pub theme: ThemeSource,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub export: ExportOptions,
    #[serde(default)]
    pub responsive: Option<ResponsiveConfig>,
    #[serde(default)]
    pub naming: Option<NamingConfig>,
    /// Base artboard size used when responsive mode is off.
    #[serde(default = "default_canvas")]
    pub canvas: Size,
}

fn default_canvas() -> Size {
    Size::new(1440.0, 1024.0)
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            theme: ThemeSource::default(),
            layout: LayoutConfig::default(),
            export: ExportOptions::default(),
            responsive: None,
            naming: None,
            canvas: default_canvas(),
        }
    }
}

impl GeneratorConfig {
    /// Create a default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme preset by name (builder).
    pub fn with_theme_preset(mut self, name: impl Into<String>) -> Self {
        self.theme = ThemeSource::Preset(name.into());
        self
    }

    /// Set an inline theme (builder).
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = ThemeSource::Inline(theme);
        self
    }

    /// Set the layout (builder).
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Enable responsive output with the given breakpoints (builder).
    pub fn with_breakpoints(mut self, breakpoints: Vec<Breakpoint>) -> Self {
        self.responsive = Some(ResponsiveConfig {
            enabled: true,
            breakpoints,
        });
        self
    }

    /// Set the naming conventions (builder).
    pub fn with_naming(mut self, naming: NamingConfig) -> Self {
        self.naming = Some(naming);
        self
    }

    /// Set the base canvas size (builder).
    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas = Size::new(width, height);
        self
    }

    /// Whether responsive output is in effect.
    pub fn responsive_enabled(&self) -> bool {
        self.responsive
            .as_ref()
            .map(|r| r.enabled && !r.breakpoints.is_empty())
            .unwrap_or(false)
    }

    /// The breakpoints in effect, empty when responsive mode is off.
    pub fn breakpoints(&self) -> &[Breakpoint] {
        match &self.responsive {
            Some(r) if r.enabled => &r.breakpoints,
            _ => &[],
        }
    }

    /// The naming conventions in effect.
    pub fn naming(&self) -> NamingConfig {
        self.naming.unwrap_or_default()
    }

    /// Validate the whole config and resolve the theme.
    ///
    /// Checks the export format, layout parameters, breakpoint invariants
    /// (unique names, ascending widths, positive sizes), and canvas size.
    /// Returns the concrete theme on success so the compile pass never
    /// touches the preset table again.
    pub fn validate(&self) -> Result<Theme, ConfigError> {
        if self.export.format != FORMAT_CONTAINER_V1 {
            return Err(ConfigError::UnsupportedFormat(self.export.format.clone()));
        }

        if let LayoutConfig::Grid { columns, .. } = self.layout {
            if columns == 0 {
                return Err(ConfigError::NoColumns);
            }
        }

        if !self.canvas.is_positive() {
            return Err(ConfigError::InvalidCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }

        if let Some(responsive) = &self.responsive {
            if responsive.enabled {
                if responsive.breakpoints.is_empty() {
                    return Err(ConfigError::EmptyBreakpoints);
                }
                let mut names = std::collections::HashSet::new();
                for bp in &responsive.breakpoints {
                    if !names.insert(bp.name.as_str()) {
                        return Err(ConfigError::DuplicateBreakpoint(bp.name.clone()));
                    }
                    if !bp.size().is_positive() {
                        return Err(ConfigError::InvalidBreakpoint {
                            name: bp.name.clone(),
                            width: bp.width,
                            height: bp.height,
                        });
                    }
                }
                for pair in responsive.breakpoints.windows(2) {
                    if pair[0].width >= pair[1].width {
                        return Err(ConfigError::UnsortedBreakpoints);
                    }
                }
            }
        }

        match &self.theme {
            ThemeSource::Preset(name) => {
                Theme::preset(name).ok_or_else(|| ConfigError::UnknownThemePreset(name.clone()))
            }
            ThemeSource::Inline(theme) => Ok(theme.clone()),
        }
    }
}
