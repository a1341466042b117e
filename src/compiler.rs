//! The compiler facade: configuration in, compiled documents and archive
//! bytes out.
//!
//! [`Compiler::compile`] returns the built document to the caller instead of
//! squirreling it away, so export is an explicit function of an explicit
//! value — [`export_document`] is pure and callable from anywhere. The
//! facade still remembers the most recent compile so the convenience method
//! [`Compiler::export_to_buffer`] can serialize "whatever was last built";
//! calling it before any compile is a state error, not a panic.

use crate::config::{ConfigError, ExportOptions, GeneratorConfig};
use crate::container::{self, ContainerError};
use crate::document::{builder, BuildOutput, Document};
use crate::module::{DesignModule, ValidationError};
use crate::theme::Theme;

/// Failures of a compile pass. The compiler's retained document is left
/// untouched when compile fails.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid module: {0}")]
    Validation(#[from] ValidationError),
}

/// Failures of an export pass.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("nothing to export: no module has been compiled")]
    NothingCompiled,
    #[error(transparent)]
    Container(#[from] ContainerError),
    #[error("export task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Serialize a compiled document into container bytes.
///
/// Pure and synchronous; any compiled document can be exported any number of
/// times, by any number of threads, without touching a compiler instance.
pub fn export_document(
    document: &Document,
    options: &ExportOptions,
) -> Result<Vec<u8>, ContainerError> {
    container::serialize(document, options)
}

/// One configured compilation session.
///
/// The configuration is validated at construction; a `Compiler` that exists
/// has a well-formed config and a resolved theme.
pub struct Compiler {
    config: GeneratorConfig,
    theme: Theme,
    last: Option<Document>,
}

impl Compiler {
    /// Validate `config` and build a compiler for it.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        let theme = config.validate()?;
        Ok(Self {
            config,
            theme,
            last: None,
        })
    }

    /// A compiler with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: GeneratorConfig::default(),
            theme: Theme::light(),
            last: None,
        }
    }

    /// The configuration this compiler was built with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The most recently compiled document, if any.
    pub fn last_document(&self) -> Option<&Document> {
        self.last.as_ref()
    }

    /// Compile a module into a document.
    ///
    /// Returns the document (with any layout warnings) and retains a copy as
    /// the compiler's "last compiled" document for [`export_to_buffer`].
    /// Each call replaces the previous document; a failed compile replaces
    /// nothing.
    ///
    /// [`export_to_buffer`]: Compiler::export_to_buffer
    pub fn compile(&mut self, module: &DesignModule) -> Result<BuildOutput, CompileError> {
        let output = builder::build(module, &self.theme, &self.config)?;
        self.last = Some(output.document.clone());
        Ok(output)
    }

    /// Serialize the most recently compiled document into container bytes.
    ///
    /// Serialization runs on a blocking worker so a large document does not
    /// stall the async runtime. Fails with [`ExportError::NothingCompiled`]
    /// when no compile has succeeded yet.
    pub async fn export_to_buffer(&self) -> Result<Vec<u8>, ExportError> {
        let document = self.last.clone().ok_or(ExportError::NothingCompiled)?;
        let options = self.config.export.clone();
        let bytes =
            tokio::task::spawn_blocking(move || container::serialize(&document, &options))
                .await??;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::container::ContainerReader;
    use crate::module::{Component, ComponentKind, Placement};

    fn module() -> DesignModule {
        DesignModule::new("mod-1", "Checkout")
            .with_component(
                Component::new("c1", "Hero", ComponentKind::Card)
                    .with_placement(Placement::sized(200.0, 100.0)),
            )
            .with_component(
                Component::new("c2", "CTA", ComponentKind::Button)
                    .with_placement(Placement::sized(120.0, 40.0)),
            )
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let config = GeneratorConfig::default().with_theme_preset("solarized");
        assert!(matches!(
            Compiler::new(config),
            Err(ConfigError::UnknownThemePreset(_))
        ));
    }

    #[test]
    fn compile_returns_and_retains_the_document() {
        let mut compiler = Compiler::with_defaults();
        assert!(compiler.last_document().is_none());

        let output = compiler.compile(&module()).unwrap();
        assert_eq!(output.document.module_id, "mod-1");
        assert_eq!(compiler.last_document(), Some(&output.document));
    }

    #[test]
    fn failed_compile_keeps_the_previous_document() {
        let mut compiler = Compiler::with_defaults();
        compiler.compile(&module()).unwrap();

        let bad = DesignModule::new("mod-2", "Bad").with_component(Component::new(
            "c1",
            "No Placement",
            ComponentKind::Card,
        ));
        assert!(compiler.compile(&bad).is_err());
        assert_eq!(compiler.last_document().map(|d| d.module_id.as_str()), Some("mod-1"));
    }

    #[tokio::test]
    async fn export_before_compile_is_a_state_error() {
        let compiler = Compiler::with_defaults();
        let err = compiler.export_to_buffer().await.unwrap_err();
        assert!(matches!(err, ExportError::NothingCompiled));
    }

    #[tokio::test]
    async fn export_after_compile_yields_a_readable_archive() {
        let mut compiler = Compiler::with_defaults();
        compiler.compile(&module()).unwrap();

        let bytes = compiler.export_to_buffer().await.unwrap();
        let mut reader = ContainerReader::open(bytes).unwrap();
        assert_eq!(reader.manifest().unwrap().module_name, "Checkout");
    }

    #[tokio::test]
    async fn repeated_export_is_byte_identical() {
        let config =
            GeneratorConfig::default().with_layout(LayoutConfig::Flow { gutter: 8 });
        let mut compiler = Compiler::new(config).unwrap();
        compiler.compile(&module()).unwrap();

        let first = compiler.export_to_buffer().await.unwrap();
        let second = compiler.export_to_buffer().await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn export_document_is_pure() {
        let mut compiler = Compiler::with_defaults();
        let output = compiler.compile(&module()).unwrap();
        let bytes = export_document(&output.document, &ExportOptions::default()).unwrap();
        assert!(!bytes.is_empty());
    }
}
