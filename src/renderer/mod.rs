//! Renderer abstraction for browser-based page rendering.
//!
//! Defines the `Renderer` and `RenderContext` traits that abstract over
//! the browser engine (currently Chromium via chromiumoxide), so the
//! pipeline logic can run against a fake implementation in tests.

pub mod chromium;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the browser layer.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No Chromium executable could be found on this machine.
    #[error(
        "Chromium not found — install google-chrome or chromium, or set PRICEWATCH_CHROMIUM_PATH"
    )]
    BrowserNotFound,
    /// The browser process failed to start.
    #[error("failed to launch browser: {0}")]
    Launch(String),
    /// Navigation failed before the timeout elapsed.
    #[error("navigation failed: {0}")]
    Navigation(String),
    /// Navigation did not settle within the timeout.
    #[error("navigation timed out after {0}ms")]
    NavigationTimeout(u64),
    /// In-page script evaluation failed.
    #[error("script evaluation failed: {0}")]
    Evaluate(String),
}

/// Launches browser sessions.
///
/// The pipeline opens one independent session per source category, so a
/// launch failure for one source does not prevent attempting the other.
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    /// Start a fresh browser process and return a handle to it.
    async fn launch(&self) -> Result<Box<dyn Renderer>, RenderError>;
}

/// A running browser session that can create rendering contexts (tabs).
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Create a new browser context with a realistic client identity.
    async fn new_context(&self) -> Result<Box<dyn RenderContext>, RenderError>;
    /// Shut down the browser session.
    async fn shutdown(&self) -> Result<(), RenderError>;
}

/// A single browser context (tab) for rendering pages.
#[async_trait]
pub trait RenderContext: Send + Sync {
    /// Navigate to a URL and wait for the page to settle, bounded by a timeout.
    async fn navigate(&mut self, url: &str, timeout_ms: u64) -> Result<(), RenderError>;
    /// Execute JavaScript in the page context and return its JSON result.
    async fn evaluate(&self, script: &str) -> Result<serde_json::Value, RenderError>;
    /// Close this context.
    async fn close(self: Box<Self>) -> Result<(), RenderError>;
}
