//! Document assembly: one page per module, one artboard per viewport, one
//! layer per component.
//!
//! The builder runs after style resolution and drives the layout engine once
//! per artboard. Layer identifiers are content-derived (SHA-256 over the
//! module id, component id, and artboard name) so the same input always
//! yields the same identifier — random ids would break reproducibility and
//! the byte-identical export guarantee.

use std::fmt::Write as _;

use sha2::{Digest, Sha256};

use crate::config::GeneratorConfig;
use crate::diagnostics::Diagnostic;
use crate::document::model::{Artboard, Document, Layer, Page};
use crate::geometry::Size;
use crate::layout::LayoutEngine;
use crate::module::{DesignModule, ValidationError};
use crate::theme::resolve::{self, ResolvedStyle};
use crate::theme::Theme;

/// A built document plus the non-fatal diagnostics collected on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildOutput {
    pub document: Document,
    pub warnings: Vec<Diagnostic>,
}

/// One artboard's viewport: display name, size, and the scale factor applied
/// to absolute placements.
struct Viewport {
    name: String,
    size: Size,
    scale: f64,
}

/// Compile a module into a document.
///
/// Validates the module first (duplicate ids, placement dimensions), then
/// resolves styles, computes layout per artboard, and assembles the tree.
/// Component source order is preserved as layer order in every artboard.
pub fn build(
    module: &DesignModule,
    theme: &Theme,
    config: &GeneratorConfig,
) -> Result<BuildOutput, ValidationError> {
    let layout = module.effective_layout(&config.layout).clone();
    module.validate(&layout)?;

    let naming = config.naming();
    let mut warnings = Vec::new();

    // Styles do not vary per artboard; resolve once per component.
    let mut styles: Vec<ResolvedStyle> = Vec::with_capacity(module.components.len());
    for component in &module.components {
        let (style, diagnostic) = resolve::resolve(theme, module.styles.as_ref(), component);
        styles.push(style);
        warnings.extend(diagnostic);
    }

    let engine = LayoutEngine::new(layout);
    let mut artboards = Vec::new();
    for viewport in viewports(config) {
        let result = engine.compute_scaled(
            &module.components,
            viewport.size,
            &viewport.name,
            viewport.scale,
        )?;
        warnings.extend(result.warnings.iter().cloned());

        let mut layers = Vec::with_capacity(module.components.len());
        for (component, style) in module.components.iter().zip(&styles) {
            let geometry = result
                .get(&component.id)
                .ok_or_else(|| ValidationError::MissingDimensions(component.id.clone()))?;
            layers.push(Layer {
                id: layer_id(&module.id, &component.id, &viewport.name),
                name: naming.layers.apply(&component.name),
                kind: component.kind.clone(),
                geometry,
                style: style.clone(),
                props: serde_json::to_value(&component.props)
                    .unwrap_or(serde_json::Value::Null),
            });
        }

        artboards.push(Artboard {
            name: viewport.name,
            width: viewport.size.width,
            height: viewport.size.height,
            layers,
        });
    }

    let document = Document {
        module_id: module.id.clone(),
        module_name: module.name.clone(),
        pages: vec![Page {
            name: naming.entries.apply(&module.name),
            artboards,
        }],
    };

    Ok(BuildOutput { document, warnings })
}

/// The artboard viewports for this config: one per breakpoint when
/// responsive, else the base canvas.
///
/// Absolute placements scale by the ratio of the breakpoint width to the
/// base (widest) breakpoint width; grid and flow recompute from scratch, so
/// their scale stays 1.
fn viewports(config: &GeneratorConfig) -> Vec<Viewport> {
    let naming = config.naming();
    let breakpoints = config.breakpoints();
    if breakpoints.is_empty() {
        return vec![Viewport {
            name: naming.artboards.apply("default"),
            size: config.canvas,
            scale: 1.0,
        }];
    }

    // Breakpoints are validated ascending by width; the widest is the base.
    let base_width = breakpoints
        .last()
        .map(|bp| bp.width)
        .unwrap_or(config.canvas.width);

    breakpoints
        .iter()
        .map(|bp| Viewport {
            name: naming.artboards.apply(&bp.name),
            size: bp.size(),
            scale: bp.width / base_width,
        })
        .collect()
}

/// Derive the stable layer id for `(module, component, artboard)`.
fn layer_id(module_id: &str, component_id: &str, artboard: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(module_id.as_bytes());
    hasher.update([0u8]);
    hasher.update(component_id.as_bytes());
    hasher.update([0u8]);
    hasher.update(artboard.as_bytes());
    let digest = hasher.finalize();

    let mut id = String::with_capacity(6 + 16);
    id.push_str("layer-");
    for byte in &digest[..8] {
        // Writing hex into a String cannot fail.
        let _ = write!(id, "{byte:02x}");
    }
    id
}
