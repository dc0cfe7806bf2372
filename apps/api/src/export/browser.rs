//! Browser automation seam.
//!
//! The orchestrator drives these traits; `chromium` provides the headless
//! Chromium implementation and tests provide scripted in-memory pages.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::export::error::RenderError;
use crate::pagination::PageGeometry;

/// Starts one isolated browser process per call.
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, RenderError>;
}

/// A running browser process. Must be closed exactly once.
#[async_trait]
pub trait BrowserSession: Send {
    async fn new_page(&mut self) -> Result<Box<dyn BrowserPage>, RenderError>;

    /// Terminates the process. Called on success and failure paths alike.
    async fn close(self: Box<Self>) -> Result<(), RenderError>;
}

/// A single page context inside a session.
#[async_trait]
pub trait BrowserPage: Send + Sync {
    /// Replaces the page document with `html`.
    async fn set_content(&self, html: &str) -> Result<(), RenderError>;

    /// Resolves once the page reports no in-flight network activity, or fails
    /// with `ResourceTimeout` after `limit`.
    async fn wait_for_network_idle(&self, limit: Duration) -> Result<(), RenderError>;

    /// Evaluates `script` in the page, awaiting a returned promise, and yields
    /// the JSON-serialised result.
    async fn evaluate(&self, script: &str) -> Result<Value, RenderError>;

    async fn set_viewport(&self, width_px: u32, height_px: u32) -> Result<(), RenderError>;

    async fn print_pdf(&self, geometry: &PageGeometry) -> Result<Vec<u8>, RenderError>;
}
