//! Second fallback stage: a third-party HTML-to-PDF HTTP service.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::config::ExternalServiceConfig;
use crate::export::error::RenderError;
use crate::export::{ExportOutput, ExportStrategy};
use crate::pagination::{ExportMode, PageGeometry, NEVER_BREAK_CSS};
use crate::render::RenderedDocument;

const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderRequest<'a> {
    html: &'a str,
    options: RenderOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RenderOptions {
    /// `"A4"` for paginated output; absent for a single continuous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
    single_page: bool,
    print_background: bool,
    margin: MarginOptions,
}

#[derive(Debug, Serialize)]
struct MarginOptions {
    top: String,
    right: String,
    bottom: String,
    left: String,
}

impl RenderOptions {
    fn for_mode(mode: ExportMode) -> Self {
        let geometry = match mode {
            ExportMode::A4 => PageGeometry::a4(),
            ExportMode::LongScroll => PageGeometry::continuous(0.0),
        };
        let m = geometry.margins;
        Self {
            format: (!mode.is_continuous()).then_some("A4"),
            single_page: mode.is_continuous(),
            print_background: true,
            margin: MarginOptions {
                top: format!("{}pt", m.top),
                right: format!("{}pt", m.right),
                bottom: format!("{}pt", m.bottom),
                left: format!("{}pt", m.left),
            },
        }
    }
}

#[derive(Clone)]
pub struct ExternalApiStrategy {
    client: Client,
    url: Option<String>,
    api_key: Option<String>,
}

impl ExternalApiStrategy {
    pub fn new(config: &ExternalServiceConfig) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl ExportStrategy for ExternalApiStrategy {
    fn name(&self) -> &'static str {
        "external"
    }

    async fn export(
        &self,
        document: &RenderedDocument,
        mode: ExportMode,
    ) -> Result<ExportOutput, RenderError> {
        let url = self
            .url
            .as_deref()
            .ok_or_else(|| RenderError::ExternalService("no service URL configured".to_string()))?;

        let html = document.with_head_style(NEVER_BREAK_CSS);
        let body = RenderRequest {
            html: &html,
            options: RenderOptions::for_mode(mode),
        };

        let mut request = self.client.post(url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RenderError::ExternalService(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(RenderError::ExternalService(format!(
                "service returned {status}: {}",
                text.chars().take(200).collect::<String>()
            )));
        }

        let pdf: Bytes = response
            .bytes()
            .await
            .map_err(|e| RenderError::ExternalService(e.to_string()))?;
        if !pdf.starts_with(PDF_MAGIC) {
            return Err(RenderError::ExternalService(format!(
                "response is not a PDF ({} bytes)",
                pdf.len()
            )));
        }

        debug!("External service returned {} byte PDF", pdf.len());
        Ok(ExportOutput::Pdf(pdf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
    use serde_json::Value;

    type Seen = Arc<Mutex<Option<(Option<String>, Value)>>>;

    async fn spawn_service(status: StatusCode, body: &'static [u8]) -> (String, Seen) {
        let seen: Seen = Arc::new(Mutex::new(None));
        let captured = Arc::clone(&seen);
        let app = Router::new().route(
            "/render",
            post(move |headers: HeaderMap, Json(payload): Json<Value>| {
                let captured = Arc::clone(&captured);
                async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    *captured.lock().unwrap() = Some((auth, payload));
                    (status, body)
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}/render"), seen)
    }

    fn strategy(url: Option<String>) -> ExternalApiStrategy {
        ExternalApiStrategy::new(&ExternalServiceConfig {
            url,
            api_key: Some("secret".to_string()),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    fn doc() -> RenderedDocument {
        RenderedDocument::new("<html><head><title>x</title></head><body>hi</body></html>".to_string())
    }

    #[tokio::test]
    async fn test_success_returns_service_pdf() {
        let (url, seen) = spawn_service(StatusCode::OK, b"%PDF-1.4 remote").await;

        let out = strategy(Some(url)).export(&doc(), ExportMode::LongScroll).await.unwrap();
        assert_eq!(out, ExportOutput::Pdf(Bytes::from_static(b"%PDF-1.4 remote")));

        let (auth, payload) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(auth.as_deref(), Some("Bearer secret"));
        let html = payload["html"].as_str().unwrap();
        assert!(html.contains("<style data-export-override>"));
        assert!(html.contains("break-inside: avoid"));
        assert_eq!(payload["options"]["singlePage"], Value::Bool(true));
        assert!(payload["options"].get("format").is_none());
    }

    #[tokio::test]
    async fn test_a4_request_asks_for_a4_format() {
        let (url, seen) = spawn_service(StatusCode::OK, b"%PDF-1.4").await;

        strategy(Some(url)).export(&doc(), ExportMode::A4).await.unwrap();

        let (_, payload) = seen.lock().unwrap().clone().unwrap();
        assert_eq!(payload["options"]["format"], "A4");
        assert_eq!(payload["options"]["margin"]["top"], "40pt");
    }

    #[tokio::test]
    async fn test_error_status_is_external_service_error() {
        let (url, _) = spawn_service(StatusCode::BAD_GATEWAY, b"upstream down").await;

        let err = strategy(Some(url)).export(&doc(), ExportMode::A4).await.unwrap_err();
        assert!(matches!(err, RenderError::ExternalService(msg) if msg.contains("502")));
    }

    #[tokio::test]
    async fn test_non_pdf_body_is_rejected() {
        let (url, _) = spawn_service(StatusCode::OK, b"").await;

        let err = strategy(Some(url)).export(&doc(), ExportMode::A4).await.unwrap_err();
        assert!(matches!(err, RenderError::ExternalService(_)));
    }

    #[tokio::test]
    async fn test_unconfigured_service_fails_fast() {
        let err = strategy(None).export(&doc(), ExportMode::A4).await.unwrap_err();
        assert!(matches!(err, RenderError::ExternalService(_)));
    }
}
