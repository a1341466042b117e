//! Record types shared by the container writer and reader.
//!
//! Field names and nesting are the format's compatibility surface; any
//! change requires bumping [`FORMAT_VERSION`]. Page records are the document
//! model's [`Page`](crate::document::Page) serialized directly — the
//! document tree is the wire shape.

use serde::{Deserialize, Serialize};

/// Version written into every `container-v1` manifest.
pub const FORMAT_VERSION: u32 = 1;

/// The archive's `manifest` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub format_version: u32,
    pub module_id: String,
    pub module_name: String,
    pub page_count: usize,
}
