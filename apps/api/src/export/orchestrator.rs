//! Headless-browser PDF export.
//!
//! One browser per export, driven through a fixed sequence of stages. The
//! browser is closed on every exit path, and the whole run lives in its own
//! task so a dropped HTTP request cannot skip that cleanup.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::RenderTimeouts;
use crate::export::browser::{BrowserLauncher, BrowserPage, BrowserSession};
use crate::export::error::RenderError;
use crate::export::{ExportOutput, ExportStrategy};
use crate::export::scripts::{
    images_ready_script, inject_style_script, ContentCheck, FONTS_READY_SCRIPT,
    READY_STATE_SCRIPT, VERIFY_CONTENT_SCRIPT,
};
use crate::pagination::{measure::MEASURE_SCRIPT, page_geometry, ExportMode, HeightCandidates, PageGeometry};
use crate::render::RenderedDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStage {
    Idle,
    BrowserLaunched,
    PageLoaded,
    ReadinessConfirmed,
    ContentVerified,
    Measured,
    Captured,
    Closed,
    Aborted,
}

/// Records the current stage and logs each transition.
struct StageTracker {
    stage: RenderStage,
    mode: ExportMode,
}

impl StageTracker {
    fn new(mode: ExportMode) -> Self {
        Self {
            stage: RenderStage::Idle,
            mode,
        }
    }

    fn advance(&mut self, next: RenderStage) {
        debug!("Export ({}): {:?} -> {:?}", self.mode, self.stage, next);
        self.stage = next;
    }

    fn abort(&mut self, err: &RenderError) {
        warn!("Export ({}) aborted during {:?}: {err}", self.mode, self.stage);
        self.stage = RenderStage::Aborted;
    }
}

pub struct BrowserStrategy {
    launcher: Arc<dyn BrowserLauncher>,
    timeouts: RenderTimeouts,
}

impl BrowserStrategy {
    pub fn new(launcher: Arc<dyn BrowserLauncher>, timeouts: RenderTimeouts) -> Self {
        Self { launcher, timeouts }
    }

    /// Renders `document` to PDF bytes in a detached task.
    pub async fn render_pdf(
        &self,
        document: &RenderedDocument,
        mode: ExportMode,
    ) -> Result<Vec<u8>, RenderError> {
        let launcher = Arc::clone(&self.launcher);
        let timeouts = self.timeouts;
        let document = document.clone();

        tokio::spawn(async move { run_export(launcher.as_ref(), &timeouts, &document, mode).await })
            .await
            .map_err(|e| RenderError::Task(e.to_string()))?
    }
}

#[async_trait]
impl ExportStrategy for BrowserStrategy {
    fn name(&self) -> &'static str {
        "browser"
    }

    async fn export(
        &self,
        document: &RenderedDocument,
        mode: ExportMode,
    ) -> Result<ExportOutput, RenderError> {
        let pdf = self.render_pdf(document, mode).await?;
        Ok(ExportOutput::Pdf(Bytes::from(pdf)))
    }
}

async fn run_export(
    launcher: &dyn BrowserLauncher,
    timeouts: &RenderTimeouts,
    document: &RenderedDocument,
    mode: ExportMode,
) -> Result<Vec<u8>, RenderError> {
    let mut tracker = StageTracker::new(mode);

    let mut session = match launcher.launch().await {
        Ok(session) => session,
        Err(e) => {
            tracker.abort(&e);
            return Err(e);
        }
    };
    tracker.advance(RenderStage::BrowserLaunched);

    let result = drive_page(session.as_mut(), timeouts, document, mode, &mut tracker).await;

    if let Err(e) = session.close().await {
        warn!("Browser did not close cleanly: {e}");
    }

    match &result {
        Ok(pdf) => {
            tracker.advance(RenderStage::Closed);
            info!("Captured {} byte PDF (mode={mode})", pdf.len());
        }
        Err(e) => tracker.abort(e),
    }
    result
}

async fn drive_page(
    session: &mut dyn BrowserSession,
    timeouts: &RenderTimeouts,
    document: &RenderedDocument,
    mode: ExportMode,
    tracker: &mut StageTracker,
) -> Result<Vec<u8>, RenderError> {
    let page = session.new_page().await?;
    let page = page.as_ref();

    page.set_content(&document.with_head_style(&mode.override_css()))
        .await?;
    absorb_timeout(page.wait_for_network_idle(timeouts.network_idle).await)?;
    tracker.advance(RenderStage::PageLoaded);

    wait_bounded(page, READY_STATE_SCRIPT, "document ready state", timeouts.ready_state).await?;
    wait_bounded(page, FONTS_READY_SCRIPT, "web fonts", timeouts.fonts).await?;
    let images_script = images_ready_script(timeouts.per_image.as_millis() as u64);
    if let Some(stalled) = wait_bounded(page, &images_script, "images", timeouts.images).await? {
        let stalled = stalled.as_u64().unwrap_or(0);
        if stalled > 0 {
            warn!("{stalled} image(s) still loading after {}ms; exporting without them", timeouts.per_image.as_millis());
        }
    }
    if !timeouts.settle.is_zero() {
        tokio::time::sleep(timeouts.settle).await;
    }
    tracker.advance(RenderStage::ReadinessConfirmed);

    verify_content(page).await?;
    tracker.advance(RenderStage::ContentVerified);

    let geometry = if mode.is_continuous() {
        let geometry = measure_continuous(page, mode).await?;
        tracker.advance(RenderStage::Measured);
        geometry
    } else {
        page_geometry(mode, None)?
    };

    let pdf = tokio::time::timeout(timeouts.capture, page.print_pdf(&geometry))
        .await
        .map_err(|_| {
            RenderError::Capture(format!(
                "no PDF after {}ms",
                timeouts.capture.as_millis()
            ))
        })??;
    if pdf.is_empty() {
        return Err(RenderError::Capture("browser returned an empty PDF".to_string()));
    }
    tracker.advance(RenderStage::Captured);
    Ok(pdf)
}

async fn verify_content(page: &dyn BrowserPage) -> Result<(), RenderError> {
    let raw = page.evaluate(VERIFY_CONTENT_SCRIPT).await?;
    let check: ContentCheck = serde_json::from_value(raw)
        .map_err(|e| RenderError::Browser(format!("content check returned unexpected value: {e}")))?;

    if !check.has_root {
        return Err(RenderError::StructuralRender);
    }
    if check.section_count == 0 {
        return Err(RenderError::EmptyContent);
    }
    debug!("Verified {} rendered section(s)", check.section_count);
    Ok(())
}

/// Lays the page out at print width, measures it and sizes a single page to fit.
async fn measure_continuous(page: &dyn BrowserPage, mode: ExportMode) -> Result<PageGeometry, RenderError> {
    let layout = PageGeometry::continuous(0.0);
    let a4 = PageGeometry::a4();
    page.set_viewport(layout.printable_width_px(), a4.printable_height_px())
        .await?;

    let raw = page.evaluate(MEASURE_SCRIPT).await?;
    let candidates: HeightCandidates = serde_json::from_value(raw)
        .map_err(|e| RenderError::Measurement(format!("unreadable height candidates: {e}")))?;
    let geometry = page_geometry(mode, Some(&candidates))?;
    debug!(
        "Measured candidates {:?}; page height {:.2}pt",
        candidates, geometry.height
    );

    page.evaluate(&inject_style_script(&geometry.page_css()))
        .await?;
    Ok(geometry)
}

/// Runs a readiness script under `limit`. A timeout is logged and swallowed.
async fn wait_bounded(
    page: &dyn BrowserPage,
    script: &str,
    resource: &'static str,
    limit: Duration,
) -> Result<Option<Value>, RenderError> {
    match tokio::time::timeout(limit, page.evaluate(script)).await {
        Ok(result) => result.map(Some),
        Err(_) => {
            absorb_timeout(Err(RenderError::ResourceTimeout {
                resource,
                waited_ms: limit.as_millis(),
            }))?;
            Ok(None)
        }
    }
}

fn absorb_timeout(result: Result<(), RenderError>) -> Result<(), RenderError> {
    match result {
        Err(e) if e.is_recoverable() => {
            warn!("{e}; continuing with partial assets");
            Ok(())
        }
        other => other,
    }
}
