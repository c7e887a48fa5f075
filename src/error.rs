use thiserror::Error;

use crate::dataset::DatasetError;
use crate::providers::GenerationError;
use crate::report::chart::ChartError;
use crate::report::export::ExportError;
use crate::store::StoreError;

/// Errors that can surface from assistant operations.
///
/// Per-entry parse failures are absorbed inside the response parser and never
/// appear here; what remains is external-collaborator failure plus local
/// rendering/packaging.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// LLM call failure or malformed service envelope
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// Read/write failure against the user-record store
    #[error("store operation failed: {0}")]
    Store(#[from] StoreError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Recipe dataset could not be loaded
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Comparison chart could not be rendered
    #[error("chart rendering failed: {0}")]
    Chart(#[from] ChartError),

    /// Report archive could not be written
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}
