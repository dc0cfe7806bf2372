//! Headless Chromium implementation of the browser seam (chromiumoxide).

use std::path::PathBuf;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::emulation::SetDeviceMetricsOverrideParams;
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::cdp::js_protocol::runtime::EvaluateParams;
use chromiumoxide::Page;
use futures::StreamExt;
use serde_json::Value;
use tempfile::TempDir;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::export::browser::{BrowserLauncher, BrowserPage, BrowserSession};
use crate::export::error::RenderError;
use crate::pagination::PageGeometry;

/// Flags for running inside a container without a display or a full /dev/shm.
const SERVER_ARGS: &[&str] = &[
    "--disable-dev-shm-usage",
    "--disable-gpu",
    "--disable-extensions",
    "--font-render-hinting=none",
    "--hide-scrollbars",
    "--mute-audio",
];

/// Network counts as idle once no new resource entry appeared for this long.
const NETWORK_QUIET_WINDOW: Duration = Duration::from_millis(500);
const NETWORK_POLL_INTERVAL: Duration = Duration::from_millis(100);

const RESOURCE_COUNT_SCRIPT: &str =
    "performance.getEntriesByType('resource').length + (document.readyState === 'loading' ? 1e6 : 0)";

pub struct ChromiumLauncher {
    chrome_executable: Option<PathBuf>,
    launch_timeout: Duration,
}

impl ChromiumLauncher {
    pub fn new(chrome_executable: Option<PathBuf>, launch_timeout: Duration) -> Self {
        Self {
            chrome_executable,
            launch_timeout,
        }
    }
}

#[async_trait]
impl BrowserLauncher for ChromiumLauncher {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, RenderError> {
        // Fresh profile per request; removed when the session is dropped.
        let profile = tempfile::Builder::new()
            .prefix("resume-export-")
            .tempdir()
            .map_err(|e| RenderError::OrchestratorLaunch(format!("profile dir: {e}")))?;

        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .user_data_dir(profile.path())
            .launch_timeout(self.launch_timeout)
            .args(SERVER_ARGS.iter().copied());
        if let Some(path) = &self.chrome_executable {
            builder = builder.chrome_executable(path);
        }
        let config = builder.build().map_err(RenderError::OrchestratorLaunch)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| RenderError::OrchestratorLaunch(e.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Browser handler event error: {e}");
                }
            }
        });

        Ok(Box::new(ChromiumSession {
            browser,
            handler_task,
            _profile: profile,
        }))
    }
}

struct ChromiumSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
    _profile: TempDir,
}

#[async_trait]
impl BrowserSession for ChromiumSession {
    async fn new_page(&mut self) -> Result<Box<dyn BrowserPage>, RenderError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| RenderError::Browser(format!("new page: {e}")))?;
        Ok(Box::new(ChromiumPage { page }))
    }

    async fn close(mut self: Box<Self>) -> Result<(), RenderError> {
        let closed = self.browser.close().await;
        if closed.is_err() {
            let _ = self.browser.kill().await;
        }
        let _ = self.browser.wait().await;
        self.handler_task.abort();
        closed
            .map(|_| ())
            .map_err(|e| RenderError::Browser(format!("close: {e}")))
    }
}

struct ChromiumPage {
    page: Page,
}

#[async_trait]
impl BrowserPage for ChromiumPage {
    async fn set_content(&self, html: &str) -> Result<(), RenderError> {
        self.page
            .set_content(html)
            .await
            .map(|_| ())
            .map_err(|e| RenderError::Browser(format!("set content: {e}")))
    }

    async fn wait_for_network_idle(&self, limit: Duration) -> Result<(), RenderError> {
        let started = Instant::now();
        let mut last_count: Option<u64> = None;
        let mut quiet_since = Instant::now();

        while started.elapsed() < limit {
            let count = self.evaluate(RESOURCE_COUNT_SCRIPT).await?.as_f64().unwrap_or(0.0) as u64;
            if last_count != Some(count) {
                last_count = Some(count);
                quiet_since = Instant::now();
            } else if quiet_since.elapsed() >= NETWORK_QUIET_WINDOW {
                return Ok(());
            }
            tokio::time::sleep(NETWORK_POLL_INTERVAL).await;
        }

        Err(RenderError::ResourceTimeout {
            resource: "network idle",
            waited_ms: limit.as_millis(),
        })
    }

    async fn evaluate(&self, script: &str) -> Result<Value, RenderError> {
        let params = EvaluateParams::builder()
            .expression(script)
            .await_promise(true)
            .return_by_value(true)
            .build()
            .map_err(RenderError::Browser)?;
        let result = self
            .page
            .evaluate_expression(params)
            .await
            .map_err(|e| RenderError::Browser(format!("evaluate: {e}")))?;
        Ok(result.value().cloned().unwrap_or(Value::Null))
    }

    async fn set_viewport(&self, width_px: u32, height_px: u32) -> Result<(), RenderError> {
        let params = SetDeviceMetricsOverrideParams::new(
            i64::from(width_px),
            i64::from(height_px.max(1)),
            1.0,
            false,
        );
        self.page
            .execute(params)
            .await
            .map(|_| ())
            .map_err(|e| RenderError::Browser(format!("viewport: {e}")))
    }

    async fn print_pdf(&self, geometry: &PageGeometry) -> Result<Vec<u8>, RenderError> {
        let (top, right, bottom, left) = geometry.margins_in();
        let params = PrintToPdfParams {
            print_background: Some(true),
            paper_width: Some(geometry.width_in()),
            paper_height: Some(geometry.height_in()),
            margin_top: Some(top),
            margin_right: Some(right),
            margin_bottom: Some(bottom),
            margin_left: Some(left),
            prefer_css_page_size: Some(true),
            ..Default::default()
        };
        self.page
            .pdf(params)
            .await
            .map_err(|e| RenderError::Capture(e.to_string()))
    }
}
