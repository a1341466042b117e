//! Container serialization: document tree to compressed archive bytes.
//!
//! Serialization is a pure function of the document and export options —
//! identical inputs produce byte-identical archives. Determinism rests on
//! three choices: a fixed entry order (`manifest`, `page/<i>`…, `index`), a
//! fixed epoch timestamp on every entry, and JSON records whose field order
//! follows struct declaration order.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::config::{ExportOptions, FORMAT_CONTAINER_V1};
use crate::container::records::{Manifest, FORMAT_VERSION};
use crate::document::Document;

/// Failures while producing an archive. All I/O-layer failures are
/// retryable; the document is unaffected and no partial output escapes.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("unsupported export format: {0:?}")]
    UnsupportedFormat(String),
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("archive i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize a document into `container-v1` archive bytes.
///
/// The format check runs before any encoding work; an unknown format fails
/// immediately with a configuration-level error.
pub fn serialize(document: &Document, options: &ExportOptions) -> Result<Vec<u8>, ContainerError> {
    if options.format != FORMAT_CONTAINER_V1 {
        return Err(ContainerError::UnsupportedFormat(options.format.clone()));
    }

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    // Epoch timestamp keeps the archive byte-identical across runs.
    let entry_options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    let manifest = Manifest {
        format_version: FORMAT_VERSION,
        module_id: document.module_id.clone(),
        module_name: document.module_name.clone(),
        page_count: document.pages.len(),
    };
    writer.start_file("manifest", entry_options)?;
    writer.write_all(&serde_json::to_vec(&manifest)?)?;

    let mut index = Vec::with_capacity(document.pages.len());
    for (i, page) in document.pages.iter().enumerate() {
        let entry_name = format!("page/{i}");
        writer.start_file(entry_name.as_str(), entry_options)?;
        writer.write_all(&serde_json::to_vec(page)?)?;
        index.push(entry_name);
    }

    writer.start_file("index", entry_options)?;
    writer.write_all(&serde_json::to_vec(&index)?)?;

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeneratorConfig, LayoutConfig};
    use crate::document::builder;
    use crate::module::{Component, ComponentKind, DesignModule, Placement};
    use crate::theme::Theme;

    fn document() -> Document {
        let module = DesignModule::new("mod-1", "Checkout").with_component(
            Component::new("c1", "Hero", ComponentKind::Card)
                .with_placement(Placement::sized(200.0, 100.0)),
        );
        let config = GeneratorConfig::default().with_layout(LayoutConfig::Flow { gutter: 8 });
        builder::build(&module, &Theme::light(), &config)
            .unwrap()
            .document
    }

    #[test]
    fn produces_non_empty_buffer() {
        let bytes = serialize(&document(), &ExportOptions::default()).unwrap();
        assert!(!bytes.is_empty());
        // Zip local file header magic.
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }

    #[test]
    fn identical_inputs_produce_identical_bytes() {
        let doc = document();
        let first = serialize(&doc, &ExportOptions::default()).unwrap();
        let second = serialize(&doc, &ExportOptions::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_format_fails_before_encoding() {
        let options = ExportOptions {
            format: "sketch-99".to_string(),
        };
        let err = serialize(&document(), &options).unwrap_err();
        assert!(matches!(
            err,
            ContainerError::UnsupportedFormat(f) if f == "sketch-99"
        ));
    }
}
