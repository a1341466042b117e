//! Binary container: deterministic compressed archive of document records.

pub mod reader;
pub mod records;
pub mod writer;

pub use reader::{ContainerReader, ReadError};
pub use records::{Manifest, FORMAT_VERSION};
pub use writer::{serialize, ContainerError};
