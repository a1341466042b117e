//! # slicedoc
//!
//! A design-to-document compiler: declarative UI module descriptions in,
//! editor-ready design documents out.
//!
//! slicedoc takes a [`DesignModule`](module::DesignModule) — typed
//! components with placement hints — plus a theme and layout configuration,
//! and compiles it into a [`Document`](document::Document) tree of pages,
//! artboards, and fully styled, pixel-positioned layers. Documents serialize
//! to a deterministic compressed container: the same input always produces
//! byte-identical output.
//!
//! ## Core Systems
//!
//! - **[`module`]** — The input model: components, props, placement, validation
//! - **[`theme`]** — Theme presets and the style cascade (theme → module → component)
//! - **[`layout`]** — Grid, flow, and absolute placement with viewport clamping
//! - **[`document`]** — The compiled tree and its builder
//! - **[`container`]** — Deterministic `container-v1` archive writer and reader
//! - **[`compiler`]** — The facade tying compile and export together
//! - **[`config`]** — Generator configuration and up-front validation
//! - **[`geometry`]** — Size and Rect primitives
//! - **[`naming`]** — Case conventions for artboard, layer, and entry names

// Foundation
pub mod diagnostics;
pub mod geometry;
pub mod naming;

// Input model
pub mod config;
pub mod module;
pub mod theme;

// Compilation
pub mod document;
pub mod layout;

// Output
pub mod container;

// Facade
pub mod compiler;

pub use compiler::{export_document, CompileError, Compiler, ExportError};
pub use config::{
    Breakpoint, ConfigError, ExportOptions, GeneratorConfig, LayoutConfig, ResponsiveConfig,
    ThemeSource, FORMAT_CONTAINER_V1,
};
pub use diagnostics::Diagnostic;
pub use document::{BuildOutput, Document};
pub use module::{Component, ComponentKind, DesignModule, Placement, Props, ValidationError, Variant};
pub use theme::{ResolvedStyle, StyleOverride, Theme};
