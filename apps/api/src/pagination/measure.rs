//! Content-height measurement for continuous (long-scroll) export.
//!
//! No single DOM metric reliably reports the full rendered height across
//! layouts: floats, absolutely positioned decorations, margins collapsing out of
//! the container and print-media reflow each fool a different metric. The
//! measurement therefore reads several candidates and keeps the largest.

use serde::{Deserialize, Serialize};

/// Multiplicative safety buffer applied to the largest candidate.
///
/// "Measured height" always means that pre-buffer maximum. The buffered,
/// rounded value from `resolved_height_px` is what `PageGeometry::continuous`
/// receives, so a page sized for 4000 measured px is built from 4080 px.
pub const HEIGHT_BUFFER: f64 = 1.02;

/// In-page script returning every height candidate as a JSON object.
pub const MEASURE_SCRIPT: &str = r#"(() => {
  const root = document.querySelector('[data-export-root]');
  const body = document.body;
  const html = document.documentElement;
  const rect = root ? root.getBoundingClientRect() : null;
  return {
    containerScrollHeight: root ? root.scrollHeight : 0,
    containerOffsetHeight: root ? root.offsetHeight : 0,
    containerRectHeight: rect ? rect.height : 0,
    containerBottom: rect ? rect.bottom + window.scrollY : 0,
    bodyScrollHeight: body ? body.scrollHeight : 0,
    bodyOffsetHeight: body ? body.offsetHeight : 0,
    documentScrollHeight: html ? html.scrollHeight : 0,
    documentOffsetHeight: html ? html.offsetHeight : 0
  };
})()"#;

/// Raw height candidates in CSS px as reported by the browser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeightCandidates {
    pub container_scroll_height: f64,
    pub container_offset_height: f64,
    pub container_rect_height: f64,
    pub container_bottom: f64,
    pub body_scroll_height: f64,
    pub body_offset_height: f64,
    pub document_scroll_height: f64,
    pub document_offset_height: f64,
}

impl HeightCandidates {
    fn all(&self) -> [f64; 8] {
        [
            self.container_scroll_height,
            self.container_offset_height,
            self.container_rect_height,
            self.container_bottom,
            self.body_scroll_height,
            self.body_offset_height,
            self.document_scroll_height,
            self.document_offset_height,
        ]
    }

    /// The largest finite, positive candidate.
    pub fn max_candidate(&self) -> Option<f64> {
        self.all()
            .into_iter()
            .filter(|h| h.is_finite() && *h > 0.0)
            .fold(None, |best, h| match best {
                Some(b) if b >= h => Some(b),
                _ => Some(h),
            })
    }

    /// Buffered content height in whole CSS px, or `None` when nothing
    /// measurable was rendered.
    pub fn resolved_height_px(&self) -> Option<f64> {
        self.max_candidate().map(|h| (h * HEIGHT_BUFFER).ceil())
    }
}
