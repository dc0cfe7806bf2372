use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use crate::export::ExportOutput;
use crate::pagination::ExportMode;
use crate::render::RenderedDocument;

/// The HTTP-ready result of an export: a named PDF, or the HTML document
/// when every rasterizing stage failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportArtifact {
    Pdf { bytes: Bytes, filename: String },
    Html(RenderedDocument),
}

impl ExportArtifact {
    pub fn from_output(output: ExportOutput, title: &str, fallback_name: &str, mode: ExportMode) -> Self {
        match output {
            ExportOutput::Pdf(bytes) => ExportArtifact::Pdf {
                bytes,
                filename: export_filename(title, fallback_name, mode),
            },
            ExportOutput::Html(doc) => ExportArtifact::Html(doc),
        }
    }
}

/// `<slug>-<mode>.pdf`, e.g. `senior-analyst-long-scroll.pdf`.
pub fn export_filename(title: &str, fallback_name: &str, mode: ExportMode) -> String {
    let slug = slugify(title);
    let stem = if slug.is_empty() { fallback_name } else { slug.as_str() };
    format!("{stem}-{}.pdf", mode.as_str())
}

/// Lowercase ASCII alphanumerics joined by single dashes. Anything else
/// either separates words or is dropped.
fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || matches!(c, '-' | '_' | '.' | '/' | ',' | '|' | ':') {
            pending_dash = true;
        }
    }
    slug
}

impl IntoResponse for ExportArtifact {
    fn into_response(self) -> Response {
        match self {
            ExportArtifact::Pdf { bytes, filename } => {
                let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
                    .unwrap_or_else(|_| HeaderValue::from_static("attachment"));
                (
                    [
                        (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
                        (header::CONTENT_DISPOSITION, disposition),
                    ],
                    bytes,
                )
                    .into_response()
            }
            ExportArtifact::Html(doc) => html_response(&doc),
        }
    }
}

/// `text/html` response for previews and the terminal fallback.
pub fn html_response(doc: &RenderedDocument) -> Response {
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8"))],
        doc.as_str().to_string(),
    )
        .into_response()
}
