//! Design module model: modules, components, props, and placement hints.
//!
//! A [`DesignModule`] is the compiler's input: an ordered list of typed
//! [`Component`]s plus optional module-level style and layout overrides.
//! Component order is significant — it determines layer stacking order in
//! the compiled document.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::theme::resolve::StyleOverride;

/// Validation failures for a module. Fatal for the affected compile call;
/// the caller may fix the input and retry.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("duplicate component id: {0}")]
    DuplicateComponentId(String),
    #[error("component {id} has non-positive dimensions {width}x{height}")]
    InvalidDimensions { id: String, width: f64, height: f64 },
    #[error("component {0} uses absolute layout but has no x/y position")]
    MissingPlacement(String),
    #[error("component {0} has no placement (width/height required)")]
    MissingDimensions(String),
}

// ---------------------------------------------------------------------------
// ComponentKind
// ---------------------------------------------------------------------------

/// The fixed, extensible set of component types.
///
/// Known kinds get type-specific theme slot mappings during style
/// resolution; `Other` kinds fall back to the neutral default style and
/// produce a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Button,
    Input,
    Card,
    Text,
    Image,
    #[serde(untagged)]
    Other(String),
}

impl ComponentKind {
    /// The lowercase name written into compiled layers and containers.
    pub fn name(&self) -> &str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::Input => "input",
            ComponentKind::Card => "card",
            ComponentKind::Text => "text",
            ComponentKind::Image => "image",
            ComponentKind::Other(name) => name,
        }
    }
}

// ---------------------------------------------------------------------------
// Props
// ---------------------------------------------------------------------------

/// Semantic color role for button-like components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Danger,
}

/// Type-specific display data attached to a component.
///
/// Known kinds carry a typed schema; anything else travels as `Opaque` JSON
/// and is passed through to the container untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Props {
    Button {
        label: String,
        #[serde(default)]
        variant: Variant,
    },
    Input {
        placeholder: String,
    },
    Card {
        title: String,
        body: String,
    },
    Text {
        content: String,
    },
    Image {
        src: String,
        alt: String,
    },
    Opaque(serde_json::Value),
}

impl Props {
    /// An empty opaque payload, for components with no display data.
    pub fn none() -> Props {
        Props::Opaque(serde_json::Value::Null)
    }

    /// The button variant, if these are button props.
    pub fn variant(&self) -> Option<Variant> {
        match self {
            Props::Button { variant, .. } => Some(*variant),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

/// Author-supplied placement hint.
///
/// Width and height are always required and must be positive. `x`/`y` are
/// required for absolute layout and ignored by grid/flow. `span` is the grid
/// column span (defaults to 1, ignored outside grid layout).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_span")]
    pub span: u32,
}

fn default_span() -> u32 {
    1
}

impl Placement {
    /// A sized placement with no explicit position (grid/flow layout).
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            x: None,
            y: None,
            width,
            height,
            span: 1,
        }
    }

    /// An absolutely positioned placement.
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width,
            height,
            span: 1,
        }
    }

    /// Set the grid column span (builder).
    pub fn with_span(mut self, span: u32) -> Self {
        self.span = span;
        self
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// One component instance within a module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Caller-supplied id, unique within the module.
    pub id: String,
    pub name: String,
    pub kind: ComponentKind,
    #[serde(default = "Props::none")]
    pub props: Props,
    /// Partial style override, merged over the theme.
    #[serde(default)]
    pub styles: Option<StyleOverride>,
    #[serde(default)]
    pub placement: Option<Placement>,
}

impl Component {
    /// Create a component with the given id, name, and kind.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            props: Props::none(),
            styles: None,
            placement: None,
        }
    }

    /// Set the props (builder).
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Set the style override (builder).
    pub fn with_styles(mut self, styles: StyleOverride) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Set the placement hint (builder).
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }
}

// ---------------------------------------------------------------------------
// DesignModule
// ---------------------------------------------------------------------------

/// A named collection of components: the unit of compilation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignModule {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub components: Vec<Component>,
    /// Module-level style override applied under per-component overrides.
    #[serde(default)]
    pub styles: Option<StyleOverride>,
    /// Overrides the generator config's layout for this module.
    #[serde(default)]
    pub layout: Option<LayoutConfig>,
}

impl DesignModule {
    /// Create an empty module.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            components: Vec::new(),
            styles: None,
            layout: None,
        }
    }

    /// Append a component (builder).
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.push(component);
        self
    }

    /// Set the module-level style override (builder).
    pub fn with_styles(mut self, styles: StyleOverride) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Validate the module against `layout`, before any layout work starts.
    ///
    /// Checks, in order: duplicate component ids, presence of a placement
    /// with positive dimensions, and explicit x/y when the layout is
    /// absolute. The first violation is returned.
    pub fn validate(&self, layout: &LayoutConfig) -> Result<(), ValidationError> {
        let mut seen = std::collections::HashSet::new();
        for component in &self.components {
            if !seen.insert(component.id.as_str()) {
                return Err(ValidationError::DuplicateComponentId(component.id.clone()));
            }
        }

        for component in &self.components {
            let placement = component
                .placement
                .as_ref()
                .ok_or_else(|| ValidationError::MissingDimensions(component.id.clone()))?;
            if placement.width <= 0.0 || placement.height <= 0.0 {
                return Err(ValidationError::InvalidDimensions {
                    id: component.id.clone(),
                    width: placement.width,
                    height: placement.height,
                });
            }
            if matches!(layout, LayoutConfig::Absolute)
                && (placement.x.is_none() || placement.y.is_none())
            {
                return Err(ValidationError::MissingPlacement(component.id.clone()));
            }
        }
        Ok(())
    }

    /// The layout in effect for this module, falling back to `config_layout`.
    pub fn effective_layout<'a>(&'a self, config_layout: &'a LayoutConfig) -> &'a LayoutConfig {
        self.layout.as_ref().unwrap_or(config_layout)
    }
}
