//! Style resolution: theme slots per component kind, merged with overrides.
//!
//! For each style channel the resolved value is the component's own override
//! if present, else the module-level override, else the theme slot mapped by
//! the component's kind. Resolution never fails; unknown kinds fall back to
//! the neutral default style and emit a diagnostic.

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;
use crate::module::{Component, ComponentKind, Variant};
use crate::theme::model::{Shadow, Theme};

// ---------------------------------------------------------------------------
// ResolvedStyle
// ---------------------------------------------------------------------------

/// The concrete style record attached to every compiled layer.
///
/// Every channel holds a final value; nothing is optional except the shadow,
/// which many kinds legitimately lack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub background: String,
    pub border_color: String,
    pub text_color: String,
    /// Inner spacing in pixels, uniform on all sides.
    pub padding: f64,
    /// Outer spacing in pixels, uniform on all sides.
    pub margin: f64,
    pub shadow: Option<Shadow>,
}

// ---------------------------------------------------------------------------
// StyleOverride
// ---------------------------------------------------------------------------

/// Named shadow preset selector used by overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowSize {
    Small,
    Medium,
    Large,
}

/// A partial style record. `None` means "not set"; set fields win over the
/// theme mapping when merged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOverride {
    pub background: Option<String>,
    pub border_color: Option<String>,
    pub text_color: Option<String>,
    pub padding: Option<f64>,
    pub margin: Option<f64>,
    pub shadow: Option<ShadowSize>,
}

impl StyleOverride {
    /// Create an empty override.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no channel is set.
    pub fn is_empty(&self) -> bool {
        self.background.is_none()
            && self.border_color.is_none()
            && self.text_color.is_none()
            && self.padding.is_none()
            && self.margin.is_none()
            && self.shadow.is_none()
    }

    /// Merge `other` on top of `self`: for each channel, `other` wins when
    /// set. Lower-priority overrides are `self`, higher-priority are
    /// `other`.
    pub fn merge(&self, other: &StyleOverride) -> StyleOverride {
        fn merge_opt<T: Clone>(base: &Option<T>, other: &Option<T>) -> Option<T> {
            if other.is_some() {
                other.clone()
            } else {
                base.clone()
            }
        }

        StyleOverride {
            background: merge_opt(&self.background, &other.background),
            border_color: merge_opt(&self.border_color, &other.border_color),
            text_color: merge_opt(&self.text_color, &other.text_color),
            padding: merge_opt(&self.padding, &other.padding),
            margin: merge_opt(&self.margin, &other.margin),
            shadow: merge_opt(&self.shadow, &other.shadow),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve the final style for one component.
///
/// Cascade order, lowest to highest: theme slot mapping for the component's
/// kind, the module-level override, the component's own override. Returns a
/// diagnostic when the kind is outside the known set.
pub fn resolve(
    theme: &Theme,
    module_styles: Option<&StyleOverride>,
    component: &Component,
) -> (ResolvedStyle, Option<Diagnostic>) {
    let (base, diagnostic) = base_style(theme, component);

    let mut cascade = StyleOverride::default();
    if let Some(module_override) = module_styles {
        cascade = cascade.merge(module_override);
    }
    if let Some(component_override) = &component.styles {
        cascade = cascade.merge(component_override);
    }

    (apply_override(theme, base, &cascade), diagnostic)
}

/// The theme slot mapping per component kind.
fn base_style(theme: &Theme, component: &Component) -> (ResolvedStyle, Option<Diagnostic>) {
    let colors = &theme.colors;
    let spacing = &theme.spacing;

    match &component.kind {
        ComponentKind::Button => {
            let accent = variant_color(theme, component.props.variant().unwrap_or_default());
            (
                ResolvedStyle {
                    background: accent.clone(),
                    border_color: accent,
                    text_color: colors.neutral(0).to_string(),
                    padding: spacing.step(2),
                    margin: spacing.step(1),
                    shadow: Some(theme.shadows.small.clone()),
                },
                None,
            )
        }
        ComponentKind::Input => (
            ResolvedStyle {
                background: colors.neutral(0).to_string(),
                border_color: colors.neutral(2).to_string(),
                text_color: colors.neutral(5).to_string(),
                padding: spacing.step(2),
                margin: spacing.step(1),
                shadow: None,
            },
            None,
        ),
        ComponentKind::Card => (
            ResolvedStyle {
                background: colors.neutral(0).to_string(),
                border_color: colors.neutral(1).to_string(),
                text_color: colors.neutral(4).to_string(),
                padding: spacing.step(4),
                margin: spacing.step(2),
                shadow: Some(theme.shadows.medium.clone()),
            },
            None,
        ),
        ComponentKind::Text => (
            ResolvedStyle {
                background: "transparent".to_string(),
                border_color: "transparent".to_string(),
                text_color: colors.neutral(5).to_string(),
                padding: 0.0,
                margin: spacing.step(1),
                shadow: None,
            },
            None,
        ),
        ComponentKind::Image => (
            ResolvedStyle {
                background: colors.neutral(1).to_string(),
                border_color: colors.neutral(2).to_string(),
                text_color: colors.neutral(5).to_string(),
                padding: 0.0,
                margin: spacing.step(1),
                shadow: None,
            },
            None,
        ),
        ComponentKind::Other(kind) => (
            neutral_default(theme),
            Some(Diagnostic::UnknownComponentType {
                component_id: component.id.clone(),
                type_name: kind.clone(),
            }),
        ),
    }
}

/// The documented built-in default for unrecognized kinds.
fn neutral_default(theme: &Theme) -> ResolvedStyle {
    ResolvedStyle {
        background: theme.colors.neutral(0).to_string(),
        border_color: theme.colors.neutral(2).to_string(),
        text_color: theme.colors.neutral(5).to_string(),
        padding: theme.spacing.step(2),
        margin: theme.spacing.step(1),
        shadow: None,
    }
}

/// Map a button variant to its semantic palette slot.
fn variant_color(theme: &Theme, variant: Variant) -> String {
    match variant {
        Variant::Primary => theme.colors.primary.clone(),
        Variant::Secondary => theme.colors.secondary.clone(),
        Variant::Success => theme.colors.success.clone(),
        Variant::Warning => theme.colors.warning.clone(),
        Variant::Danger => theme.colors.danger.clone(),
    }
}

/// Apply a merged override on top of a base style.
fn apply_override(theme: &Theme, base: ResolvedStyle, cascade: &StyleOverride) -> ResolvedStyle {
    ResolvedStyle {
        background: cascade.background.clone().unwrap_or(base.background),
        border_color: cascade.border_color.clone().unwrap_or(base.border_color),
        text_color: cascade.text_color.clone().unwrap_or(base.text_color),
        padding: cascade.padding.unwrap_or(base.padding),
        margin: cascade.margin.unwrap_or(base.margin),
        shadow: match cascade.shadow {
            Some(ShadowSize::Small) => Some(theme.shadows.small.clone()),
            Some(ShadowSize::Medium) => Some(theme.shadows.medium.clone()),
            Some(ShadowSize::Large) => Some(theme.shadows.large.clone()),
            None => base.shadow,
        },
    }
}
