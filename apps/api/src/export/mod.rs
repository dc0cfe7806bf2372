// PDF export: headless-browser orchestrator plus the fallback stages behind it.

pub mod artifact;
pub mod browser;
pub mod chromium;
pub mod error;
pub mod external;
pub mod fallback;
pub mod handlers;
pub mod orchestrator;
pub mod scripts;

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

pub use artifact::ExportArtifact;
pub use fallback::{ExportOutput, ExportStrategy, FallbackChain};

use crate::config::Config;
use chromium::ChromiumLauncher;
use external::ExternalApiStrategy;
use fallback::HtmlPassthrough;
use orchestrator::BrowserStrategy;

/// Browser first, then the external service, then raw HTML.
pub fn build_fallback_chain(config: &Config) -> Result<FallbackChain> {
    let launcher = Arc::new(ChromiumLauncher::new(
        config.chrome_executable.clone(),
        config.render.launch,
    ));
    let browser = BrowserStrategy::new(launcher, config.render);
    let external = ExternalApiStrategy::new(&config.fallback)?;

    if config.fallback.url.is_none() {
        warn!("PDF_FALLBACK_URL not set; the external render stage will always be skipped");
    }

    let stages: Vec<Arc<dyn ExportStrategy>> = vec![
        Arc::new(browser),
        Arc::new(external),
        Arc::new(HtmlPassthrough),
    ];
    let chain = FallbackChain::new(stages);
    info!("Export chain: {}", chain.stage_names().join(" -> "));
    Ok(chain)
}
