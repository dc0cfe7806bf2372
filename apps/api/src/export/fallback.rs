//! Ordered degradation across export strategies.
//!
//! Each strategy is tried at most once per request, in order, until one
//! produces output. Strategy failures are logged here and never surface.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{error, info, warn};

use crate::export::error::{ExportError, RenderError};
use crate::pagination::ExportMode;
use crate::render::RenderedDocument;

/// What a successful strategy hands back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutput {
    Pdf(Bytes),
    /// Unrasterized document; the client is expected to capture it.
    Html(RenderedDocument),
}

impl ExportOutput {
    pub fn is_pdf(&self) -> bool {
        matches!(self, ExportOutput::Pdf(_))
    }
}

#[async_trait]
pub trait ExportStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    async fn export(
        &self,
        document: &RenderedDocument,
        mode: ExportMode,
    ) -> Result<ExportOutput, RenderError>;
}

/// Terminal stage: returns the document as-is.
pub struct HtmlPassthrough;

#[async_trait]
impl ExportStrategy for HtmlPassthrough {
    fn name(&self) -> &'static str {
        "html"
    }

    async fn export(
        &self,
        document: &RenderedDocument,
        _mode: ExportMode,
    ) -> Result<ExportOutput, RenderError> {
        if document.is_empty() {
            return Err(RenderError::EmptyContent);
        }
        Ok(ExportOutput::Html(document.clone()))
    }
}

#[derive(Clone)]
pub struct FallbackChain {
    strategies: Vec<Arc<dyn ExportStrategy>>,
}

impl FallbackChain {
    pub fn new(strategies: Vec<Arc<dyn ExportStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub async fn export(
        &self,
        document: &RenderedDocument,
        mode: ExportMode,
    ) -> Result<ExportOutput, ExportError> {
        for strategy in &self.strategies {
            match strategy.export(document, mode).await {
                Ok(output) => {
                    info!(
                        "Export succeeded via '{}' stage (mode={}, pdf={})",
                        strategy.name(),
                        mode,
                        output.is_pdf()
                    );
                    return Ok(output);
                }
                Err(e) => {
                    warn!("Export stage '{}' failed: {e}", strategy.name());
                }
            }
        }

        error!(
            "All export stages failed ({})",
            self.stage_names().join(" -> ")
        );
        Err(ExportError::ExportFailed)
    }
}
