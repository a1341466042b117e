//! Non-fatal diagnostics collected during a compile pass.
//!
//! Diagnostics are returned alongside a successful result so callers can
//! surface them without aborting; they never fail a compile.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-fatal warning produced while resolving styles or computing layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Diagnostic {
    /// A component's geometry fell outside its artboard and was clamped.
    GeometryClamped {
        component_id: String,
        artboard: String,
    },
    /// A component type outside the known set was given the default style.
    UnknownComponentType {
        component_id: String,
        type_name: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::GeometryClamped {
                component_id,
                artboard,
            } => write!(
                f,
                "geometry of component {component_id} clamped to fit artboard {artboard}"
            ),
            Diagnostic::UnknownComponentType {
                component_id,
                type_name,
            } => write!(
                f,
                "component {component_id} has unknown type {type_name:?}; using default style"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_carry_context() {
        let clamped = Diagnostic::GeometryClamped {
            component_id: "hero".to_string(),
            artboard: "mobile".to_string(),
        };
        let msg = clamped.to_string();
        assert!(msg.contains("hero"));
        assert!(msg.contains("mobile"));

        let unknown = Diagnostic::UnknownComponentType {
            component_id: "c1".to_string(),
            type_name: "chart".to_string(),
        };
        assert!(unknown.to_string().contains("chart"));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let d = Diagnostic::UnknownComponentType {
            component_id: "c1".to_string(),
            type_name: "chart".to_string(),
        };
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["kind"], "unknown-component-type");
        assert_eq!(json["type_name"], "chart");
    }

    #[test]
    fn round_trips_through_json() {
        let d = Diagnostic::UnknownComponentType {
            component_id: "c1".to_string(),
            type_name: "chart".to_string(),
        };
        let json = serde_json::to_string(&d).unwrap();
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
