//! Compiled document model and the builder that assembles it.

pub mod builder;
pub mod model;

pub use builder::{build, BuildOutput};
pub use model::{Artboard, Document, Layer, Page};
