use thiserror::Error;

/// Failures inside a single export strategy.
///
/// Only `ResourceTimeout` is recoverable; every other variant aborts the
/// current strategy and hands over to the next fallback stage.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Rendered document has no export root container")]
    StructuralRender,

    #[error("Rendered document contains no sections")]
    EmptyContent,

    #[error("Timed out after {waited_ms}ms waiting for {resource}")]
    ResourceTimeout {
        resource: &'static str,
        waited_ms: u128,
    },

    #[error("Browser failed to launch: {0}")]
    OrchestratorLaunch(String),

    #[error("Browser automation error: {0}")]
    Browser(String),

    #[error("Content measurement failed: {0}")]
    Measurement(String),

    #[error("PDF capture failed: {0}")]
    Capture(String),

    #[error("External rendering service failed: {0}")]
    ExternalService(String),

    #[error("Render task failed: {0}")]
    Task(String),
}

impl RenderError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, RenderError::ResourceTimeout { .. })
    }
}

/// The only error a caller of the fallback chain can observe.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export failed")]
    ExportFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_timeouts_are_recoverable() {
        assert!(RenderError::ResourceTimeout {
            resource: "fonts",
            waited_ms: 10
        }
        .is_recoverable());
        assert!(!RenderError::EmptyContent.is_recoverable());
        assert!(!RenderError::Capture("x".to_string()).is_recoverable());
    }

    #[test]
    fn test_messages() {
        let err = RenderError::ResourceTimeout {
            resource: "images",
            waited_ms: 3000,
        };
        assert_eq!(err.to_string(), "Timed out after 3000ms waiting for images");
        assert_eq!(ExportError::ExportFailed.to_string(), "export failed");
    }
}
