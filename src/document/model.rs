//! The compiled document tree: pages, artboards, layers.
//!
//! Documents are immutable once built — there is no mutating API, so a
//! document produced by one compile call can be exported repeatedly and
//! concurrently. Field names and nesting are part of the container format's
//! compatibility surface; changing them requires a format version bump.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::module::ComponentKind;
use crate::theme::resolve::ResolvedStyle;

/// The compiled, positioned, styled representation of one component within
/// an artboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// Stable object identifier, derived deterministically from the module
    /// id, component id, and artboard name.
    pub id: String,
    pub name: String,
    /// The originating component's type name.
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub geometry: Rect,
    pub style: ResolvedStyle,
    /// The originating component's props, passed through untouched.
    pub props: serde_json::Value,
}

/// A fixed-size canvas within a page, one per responsive breakpoint.
///
/// Layer order equals component source order and determines paint/stacking
/// order in downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artboard {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub layers: Vec<Layer>,
}

/// The top-level grouping of artboards for one compiled module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub name: String,
    pub artboards: Vec<Artboard>,
}

/// A fully compiled module: the output of a compile pass and the input to
/// the container serializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub module_id: String,
    pub module_name: String,
    pub pages: Vec<Page>,
}

impl Document {
    /// Total number of layers across all pages and artboards.
    pub fn layer_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|p| &p.artboards)
            .map(|a| a.layers.len())
            .sum()
    }

    /// Total number of artboards across all pages.
    pub fn artboard_count(&self) -> usize {
        self.pages.iter().map(|p| p.artboards.len()).sum()
    }
}
