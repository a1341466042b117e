//! Placement computation for one artboard viewport.
//!
//! [`LayoutEngine`] turns a component list and a layout configuration into
//! absolute pixel geometry, one rect per component in source order. All
//! computation is synchronous and pure; the only fatal condition is a
//! component with non-positive declared dimensions. Geometry that falls
//! outside the viewport is clamped and reported as a diagnostic, never an
//! error.

use crate::config::LayoutConfig;
use crate::diagnostics::Diagnostic;
use crate::geometry::{Rect, Size};
use crate::module::{Component, ValidationError};

// ---------------------------------------------------------------------------
// LayoutResult
// ---------------------------------------------------------------------------

/// Computed geometry for every component of one artboard.
///
/// `geometry` preserves component source order — it feeds layer stacking
/// order downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub geometry: Vec<(String, Rect)>,
    pub warnings: Vec<Diagnostic>,
}

impl LayoutResult {
    /// Look up the rect for a component id.
    pub fn get(&self, component_id: &str) -> Option<Rect> {
        self.geometry
            .iter()
            .find(|(id, _)| id == component_id)
            .map(|(_, rect)| *rect)
    }
}

// ---------------------------------------------------------------------------
// LayoutEngine
// ---------------------------------------------------------------------------

/// Computes placement for one layout configuration.
///
/// Responsive output calls `compute` once per breakpoint viewport; absolute
/// placements additionally take a uniform scale factor through
/// `compute_scaled` (the ratio of the breakpoint width to the base width).
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine for the given layout configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Compute geometry for `viewport`, unscaled.
    pub fn compute(
        &self,
        components: &[Component],
        viewport: Size,
        artboard: &str,
    ) -> Result<LayoutResult, ValidationError> {
        self.compute_scaled(components, viewport, artboard, 1.0)
    }

    /// Compute geometry for `viewport`.
    ///
    /// `scale` applies only to absolute placements; grid and flow are always
    /// recomputed from scratch against the viewport width.
    pub fn compute_scaled(
        &self,
        components: &[Component],
        viewport: Size,
        artboard: &str,
        scale: f64,
    ) -> Result<LayoutResult, ValidationError> {
        let placed = match self.config {
            LayoutConfig::Absolute => absolute_pass(components, scale)?,
            LayoutConfig::Grid { columns, gutter } => {
                grid_pass(components, viewport, columns, f64::from(gutter))?
            }
            LayoutConfig::Flow { gutter } => flow_pass(components, viewport, f64::from(gutter))?,
        };

        let mut geometry = Vec::with_capacity(placed.len());
        let mut warnings = Vec::new();
        for (id, rect) in placed {
            let (clamped, changed) = rect.clamp_within(viewport);
            if changed {
                warnings.push(Diagnostic::GeometryClamped {
                    component_id: id.clone(),
                    artboard: artboard.to_string(),
                });
            }
            geometry.push((id, clamped));
        }

        Ok(LayoutResult { geometry, warnings })
    }
}

/// Declared size of a component, rejecting non-positive dimensions.
fn declared_size(component: &Component) -> Result<(f64, f64), ValidationError> {
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
    Ok((placement.width, placement.height))
}

/// Absolute mode: pass author geometry through, scaled uniformly.
fn absolute_pass(
    components: &[Component],
    scale: f64,
) -> Result<Vec<(String, Rect)>, ValidationError> {
    let mut placed = Vec::with_capacity(components.len());
    for component in components {
        let (width, height) = declared_size(component)?;
        // Module validation guarantees x/y for absolute layout; missing
        // coordinates here place at the origin rather than panicking.
        let placement = component.placement.as_ref();
        let x = placement.and_then(|p| p.x).unwrap_or(0.0);
        let y = placement.and_then(|p| p.y).unwrap_or(0.0);
        placed.push((
            component.id.clone(),
            Rect::new(x, y, width, height).scale(scale),
        ));
    }
    Ok(placed)
}

/// Grid mode: equal tracks, span placement in source order, row wrap.
fn grid_pass(
    components: &[Component],
    viewport: Size,
    columns: u32,
    gutter: f64,
) -> Result<Vec<(String, Rect)>, ValidationError> {
    let columns = columns.max(1);
    let track = (viewport.width - f64::from(columns - 1) * gutter) / f64::from(columns);

    let mut placed = Vec::with_capacity(components.len());
    let mut cursor = 0u32;
    let mut row_y = 0.0;
    let mut row_height: f64 = 0.0;

    for component in components {
        let (_, height) = declared_size(component)?;
        let span = component
            .placement
            .as_ref()
            .map(|p| p.span)
            .unwrap_or(1)
            .clamp(1, columns);

        // Wrap when the span no longer fits in the current row.
        if cursor + span > columns && cursor > 0 {
            row_y += row_height + gutter;
            cursor = 0;
            row_height = 0.0;
        }

        let x = f64::from(cursor) * (track + gutter);
        let width = f64::from(span) * track + f64::from(span - 1) * gutter;
        placed.push((component.id.clone(), Rect::new(x, row_y, width, height)));

        row_height = row_height.max(height);
        cursor += span;
    }

    Ok(placed)
}

/// Flow mode: left-to-right with gutter spacing, wrapping at the viewport
/// edge.
fn flow_pass(
    components: &[Component],
    viewport: Size,
    gutter: f64,
) -> Result<Vec<(String, Rect)>, ValidationError> {
    let mut placed = Vec::with_capacity(components.len());
    let mut x = 0.0;
    let mut y = 0.0;
    let mut row_height: f64 = 0.0;

    for component in components {
        let (width, height) = declared_size(component)?;

        if x > 0.0 && x + width > viewport.width {
            x = 0.0;
            y += row_height + gutter;
            row_height = 0.0;
        }

        placed.push((component.id.clone(), Rect::new(x, y, width, height)));
        x += width + gutter;
        row_height = row_height.max(height);
    }

    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::{ComponentKind, Placement};

    const VIEWPORT: Size = Size::new(1440.0, 1024.0);

    fn sized(id: &str, width: f64, height: f64) -> Component {
        Component::new(id, id, ComponentKind::Card)
            .with_placement(Placement::sized(width, height))
    }

    fn spanning(id: &str, height: f64, span: u32) -> Component {
        Component::new(id, id, ComponentKind::Card)
            .with_placement(Placement::sized(10.0, height).with_span(span))
    }

    // -----------------------------------------------------------------------
    // Absolute
    // -----------------------------------------------------------------------

    #[test]
    fn absolute_passes_geometry_through() {
        let engine = LayoutEngine::new(LayoutConfig::Absolute);
        let c = Component::new("a", "A", ComponentKind::Button)
            .with_placement(Placement::at(100.0, 200.0, 120.0, 40.0));
        let result = engine.compute(&[c], VIEWPORT, "default").unwrap();
        assert_eq!(result.get("a"), Some(Rect::new(100.0, 200.0, 120.0, 40.0)));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn absolute_clamps_out_of_bounds_and_warns() {
        let engine = LayoutEngine::new(LayoutConfig::Absolute);
        let c = Component::new("a", "A", ComponentKind::Button)
            .with_placement(Placement::at(1400.0, 0.0, 120.0, 40.0));
        let result = engine.compute(&[c], VIEWPORT, "default").unwrap();
        let rect = result.get("a").unwrap();
        assert_eq!(rect.right(), VIEWPORT.width);
        assert_eq!(
            result.warnings,
            vec![Diagnostic::GeometryClamped {
                component_id: "a".to_string(),
                artboard: "default".to_string(),
            }]
        );
    }

    #[test]
    fn absolute_scaling_is_uniform() {
        let engine = LayoutEngine::new(LayoutConfig::Absolute);
        let c = Component::new("a", "A", ComponentKind::Button)
            .with_placement(Placement::at(100.0, 200.0, 120.0, 40.0));
        let result = engine
            .compute_scaled(&[c], Size::new(720.0, 512.0), "mobile", 0.5)
            .unwrap();
        assert_eq!(result.get("a"), Some(Rect::new(50.0, 100.0, 60.0, 20.0)));
    }

    #[test]
    fn non_positive_dimensions_rejected() {
        let engine = LayoutEngine::new(LayoutConfig::Absolute);
        let c = Component::new("bad", "Bad", ComponentKind::Button)
            .with_placement(Placement::at(0.0, 0.0, -5.0, 40.0));
        let err = engine.compute(&[c], VIEWPORT, "default").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidDimensions { ref id, .. } if id == "bad"
        ));
    }

    // -----------------------------------------------------------------------
    // Grid
    // -----------------------------------------------------------------------

    #[test]
    fn grid_three_components_share_row_zero() {
        // Scenario: 12 columns, 16px gutter, three span-1 components.
        let engine = LayoutEngine::new(LayoutConfig::Grid {
            columns: 12,
            gutter: 16,
        });
        let components = [
            spanning("button", 40.0, 1),
            spanning("input", 40.0, 1),
            spanning("card", 120.0, 1),
        ];
        let result = engine.compute(&components, VIEWPORT, "default").unwrap();

        let track = (VIEWPORT.width - 11.0 * 16.0) / 12.0;
        let a = result.get("button").unwrap();
        let b = result.get("input").unwrap();
        let c = result.get("card").unwrap();

        for rect in [a, b, c] {
            assert_eq!(rect.y, 0.0);
            assert!((rect.width - track).abs() < 1e-9);
        }
        assert_eq!(a.x, 0.0);
        assert!((b.x - (track + 16.0)).abs() < 1e-9);
        assert!((c.x - 2.0 * (track + 16.0)).abs() < 1e-9);

        assert!(!a.overlaps(b));
        assert!(!b.overlaps(c));
        assert!(!a.overlaps(c));
    }

    #[test]
    fn grid_span_width_includes_inner_gutters() {
        let engine = LayoutEngine::new(LayoutConfig::Grid {
            columns: 12,
            gutter: 16,
        });
        let result = engine
            .compute(&[spanning("wide", 50.0, 4)], VIEWPORT, "default")
            .unwrap();
        let track = (VIEWPORT.width - 11.0 * 16.0) / 12.0;
        let rect = result.get("wide").unwrap();
        assert!((rect.width - (4.0 * track + 3.0 * 16.0)).abs() < 1e-9);
    }

    #[test]
    fn grid_wraps_when_row_is_full() {
        let engine = LayoutEngine::new(LayoutConfig::Grid {
            columns: 12,
            gutter: 16,
        });
        let components = [
            spanning("a", 40.0, 8),
            spanning("b", 60.0, 8), // does not fit next to a
        ];
        let result = engine.compute(&components, VIEWPORT, "default").unwrap();
        let a = result.get("a").unwrap();
        let b = result.get("b").unwrap();
        assert_eq!(a.y, 0.0);
        // Row height is the max height in the row plus one gutter.
        assert_eq!(b.y, 40.0 + 16.0);
        assert_eq!(b.x, 0.0);
    }

    #[test]
    fn grid_row_height_uses_tallest_component() {
        let engine = LayoutEngine::new(LayoutConfig::Grid {
            columns: 2,
            gutter: 10,
        });
        let components = [
            spanning("short", 30.0, 1),
            spanning("tall", 90.0, 1),
            spanning("next-row", 20.0, 1),
        ];
        let result = engine.compute(&components, VIEWPORT, "default").unwrap();
        assert_eq!(result.get("next-row").unwrap().y, 90.0 + 10.0);
    }

    #[test]
    fn grid_span_larger_than_columns_is_clamped() {
        let engine = LayoutEngine::new(LayoutConfig::Grid {
            columns: 4,
            gutter: 8,
        });
        let result = engine
            .compute(&[spanning("huge", 40.0, 99)], VIEWPORT, "default")
            .unwrap();
        let rect = result.get("huge").unwrap();
        assert!((rect.right() - VIEWPORT.width).abs() < 1e-9);
    }

    #[test]
    fn grid_narrower_than_its_gutters_clamps_and_warns() {
        // 11 gutters of 16px exceed a 100px viewport; the track width goes
        // negative and must be clamped to zero, not emitted as-is.
        let engine = LayoutEngine::new(LayoutConfig::Grid {
            columns: 12,
            gutter: 16,
        });
        let viewport = Size::new(100.0, 400.0);
        let result = engine
            .compute(&[spanning("a", 40.0, 1)], viewport, "narrow")
            .unwrap();
        let rect = result.get("a").unwrap();
        assert_eq!(rect.width, 0.0);
        assert!(rect.right() <= viewport.width);
        assert_eq!(
            result.warnings,
            vec![Diagnostic::GeometryClamped {
                component_id: "a".to_string(),
                artboard: "narrow".to_string(),
            }]
        );
    }

    #[test]
    fn grid_preserves_source_order() {
        let engine = LayoutEngine::new(LayoutConfig::Grid {
            columns: 12,
            gutter: 16,
        });
        let components = [
            spanning("z", 40.0, 1),
            spanning("a", 40.0, 1),
            spanning("m", 40.0, 1),
        ];
        let result = engine.compute(&components, VIEWPORT, "default").unwrap();
        let ids: Vec<&str> = result.geometry.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    // -----------------------------------------------------------------------
    // Flow
    // -----------------------------------------------------------------------

    #[test]
    fn flow_places_left_to_right_with_gutter() {
        let engine = LayoutEngine::new(LayoutConfig::Flow { gutter: 10 });
        let components = [sized("a", 100.0, 40.0), sized("b", 100.0, 40.0)];
        let result = engine.compute(&components, VIEWPORT, "default").unwrap();
        assert_eq!(result.get("a").unwrap().x, 0.0);
        assert_eq!(result.get("b").unwrap().x, 110.0);
    }

    #[test]
    fn flow_wraps_at_viewport_edge() {
        let engine = LayoutEngine::new(LayoutConfig::Flow { gutter: 10 });
        let viewport = Size::new(250.0, 500.0);
        let components = [
            sized("a", 100.0, 40.0),
            sized("b", 100.0, 60.0),
            sized("c", 100.0, 40.0), // 220 + 100 > 250, wraps
        ];
        let result = engine.compute(&components, viewport, "default").unwrap();
        let c = result.get("c").unwrap();
        assert_eq!(c.x, 0.0);
        // New row starts below the tallest item of the previous row.
        assert_eq!(c.y, 60.0 + 10.0);
    }

    #[test]
    fn flow_item_wider_than_viewport_is_clamped() {
        let engine = LayoutEngine::new(LayoutConfig::Flow { gutter: 10 });
        let viewport = Size::new(200.0, 500.0);
        let result = engine
            .compute(&[sized("wide", 300.0, 40.0)], viewport, "default")
            .unwrap();
        let rect = result.get("wide").unwrap();
        assert_eq!(rect.width, 200.0);
        assert_eq!(result.warnings.len(), 1);
    }

    // -----------------------------------------------------------------------
    // Bounds invariant
    // -----------------------------------------------------------------------

    #[test]
    fn all_modes_satisfy_bounds_invariant() {
        let viewport = Size::new(375.0, 667.0);
        let engines = [
            LayoutEngine::new(LayoutConfig::Grid {
                columns: 3,
                gutter: 12,
            }),
            LayoutEngine::new(LayoutConfig::Flow { gutter: 12 }),
        ];
        let components = [
            sized("a", 200.0, 700.0),
            sized("b", 400.0, 50.0),
            sized("c", 50.0, 50.0),
        ];
        for engine in engines {
            let result = engine.compute(&components, viewport, "mobile").unwrap();
            for (_, rect) in &result.geometry {
                assert!(rect.x >= 0.0);
                assert!(rect.y >= 0.0);
                assert!(rect.right() <= viewport.width + 1e-9);
                assert!(rect.bottom() <= viewport.height + 1e-9);
            }
        }
    }
}
