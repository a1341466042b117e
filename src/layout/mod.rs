//! Layout engine: grid, flow, and absolute placement with bounds clamping.

pub mod engine;

pub use engine::{LayoutEngine, LayoutResult};
