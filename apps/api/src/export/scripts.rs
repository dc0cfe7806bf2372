//! In-page scripts evaluated by the orchestrator.
//!
//! Every script resolves to a JSON value; waits resolve even on failure so the
//! only way a readiness step stalls is the orchestrator's own timeout.

use serde::Deserialize;

pub const READY_STATE_SCRIPT: &str = r#"new Promise((resolve) => {
  if (document.readyState === 'complete') { resolve(true); return; }
  window.addEventListener('load', () => resolve(true), { once: true });
})"#;

pub const FONTS_READY_SCRIPT: &str = r#"(async () => {
  if (!document.fonts || !document.fonts.ready) { return true; }
  try { await document.fonts.ready; } catch (_) {}
  return true;
})()"#;

pub const VERIFY_CONTENT_SCRIPT: &str = r#"(() => {
  const root = document.querySelector('[data-export-root]');
  return {
    hasRoot: root !== null,
    sectionCount: root ? root.querySelectorAll('[data-export-section]').length : 0
  };
})()"#;

/// Waits for every `<img>` to load or error, giving up on each after
/// `per_image_ms`. Resolves to the number of images that never completed.
pub fn images_ready_script(per_image_ms: u64) -> String {
    format!(
        r#"(async () => {{
  const images = Array.from(document.images);
  const settle = (img) => new Promise((resolve) => {{
    if (img.complete) {{ resolve(true); return; }}
    const timer = setTimeout(() => resolve(false), {per_image_ms});
    const done = (ok) => () => {{ clearTimeout(timer); resolve(ok); }};
    img.addEventListener('load', done(true), {{ once: true }});
    img.addEventListener('error', done(true), {{ once: true }});
  }});
  const results = await Promise.all(images.map(settle));
  return results.filter((ok) => !ok).length;
}})()"#
    )
}

/// Appends a `<style>` element carrying `css` to the document head.
pub fn inject_style_script(css: &str) -> String {
    // A JSON string literal is a valid JS string literal.
    let literal = serde_json::to_string(css).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"(() => {{
  const style = document.createElement('style');
  style.setAttribute('data-export-page', '');
  style.textContent = {literal};
  (document.head || document.documentElement).appendChild(style);
  return true;
}})()"#
    )
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentCheck {
    pub has_root: bool,
    pub section_count: u32,
}
