//! Chromium-based renderer using chromiumoxide.

use super::{BrowserLauncher, RenderContext, RenderError, Renderer};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::path::PathBuf;

/// Desktop Chrome identity presented to both sources.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
                          AppleWebKit/537.36 (KHTML, like Gecko) \
                          Chrome/131.0.0.0 Safari/537.36";

/// Find the Chromium binary path.
pub fn find_chromium() -> Option<PathBuf> {
    // 1. PRICEWATCH_CHROMIUM_PATH env
    if let Ok(p) = std::env::var("PRICEWATCH_CHROMIUM_PATH") {
        let path = PathBuf::from(&p);
        if path.exists() {
            return Some(path);
        }
    }

    // 2. System PATH
    if let Ok(path) = which::which("google-chrome") {
        return Some(path);
    }
    if let Ok(path) = which::which("chromium") {
        return Some(path);
    }
    if let Ok(path) = which::which("chromium-browser") {
        return Some(path);
    }

    // 3. Common install locations
    let common = if cfg!(target_os = "macos") {
        vec![PathBuf::from(
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
        )]
    } else {
        vec![
            PathBuf::from("/usr/bin/google-chrome"),
            PathBuf::from("/usr/bin/chromium"),
        ]
    };
    common.into_iter().find(|p| p.exists())
}

/// Launches one headless Chromium process per call.
pub struct ChromiumLauncher;

#[async_trait]
impl BrowserLauncher for ChromiumLauncher {
    async fn launch(&self) -> Result<Box<dyn Renderer>, RenderError> {
        let renderer = ChromiumRenderer::new().await?;
        Ok(Box::new(renderer))
    }
}

/// Chromium-based renderer.
pub struct ChromiumRenderer {
    browser: Browser,
}

impl ChromiumRenderer {
    /// Create a new ChromiumRenderer, launching a headless Chromium instance.
    pub async fn new() -> Result<Self, RenderError> {
        let chrome_path = find_chromium().ok_or(RenderError::BrowserNotFound)?;

        let config = BrowserConfig::builder()
            .chrome_executable(chrome_path)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-setuid-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--window-size=1280,800")
            .build()
            .map_err(RenderError::Launch)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| RenderError::Launch(e.to_string()))?;

        // Spawn the CDP event handler task
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        Ok(Self { browser })
    }
}

#[async_trait]
impl Renderer for ChromiumRenderer {
    async fn new_context(&self) -> Result<Box<dyn RenderContext>, RenderError> {
        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| RenderError::Launch(format!("failed to create new page: {e}")))?;

        page.set_user_agent(USER_AGENT)
            .await
            .map_err(|e| RenderError::Launch(format!("failed to set user agent: {e}")))?;

        Ok(Box::new(ChromiumContext { page }))
    }

    async fn shutdown(&self) -> Result<(), RenderError> {
        // Browser process exits when the Browser handle is dropped
        Ok(())
    }
}

/// A single Chromium page context.
pub struct ChromiumContext {
    page: Page,
}

#[async_trait]
impl RenderContext for ChromiumContext {
    async fn navigate(&mut self, url: &str, timeout_ms: u64) -> Result<(), RenderError> {
        let result = tokio::time::timeout(
            std::time::Duration::from_millis(timeout_ms),
            self.page.goto(url),
        )
        .await;

        match result {
            Ok(Ok(_response)) => {
                // Let in-flight network activity settle before extraction
                let _ = self.page.wait_for_navigation().await;
                Ok(())
            }
            Ok(Err(e)) => Err(RenderError::Navigation(e.to_string())),
            Err(_) => Err(RenderError::NavigationTimeout(timeout_ms)),
        }
    }

    async fn evaluate(&self, script: &str) -> Result<serde_json::Value, RenderError> {
        let result = self
            .page
            .evaluate(script)
            .await
            .map_err(|e| RenderError::Evaluate(e.to_string()))?;

        result
            .into_value()
            .map_err(|e| RenderError::Evaluate(format!("failed to convert JS result: {e:?}")))
    }

    async fn close(self: Box<Self>) -> Result<(), RenderError> {
        let _ = self.page.close().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires Chromium to be installed
    async fn navigate_and_evaluate_on_data_url() {
        let renderer = ChromiumRenderer::new()
            .await
            .expect("failed to create renderer");
        let mut ctx = renderer
            .new_context()
            .await
            .expect("failed to create context");

        ctx.navigate("data:text/html,<h3>5,165.70</h3>", 10000)
            .await
            .expect("navigation failed");

        let result = ctx
            .evaluate("document.querySelector('h3').textContent")
            .await
            .expect("evaluation failed");
        assert_eq!(result.as_str().unwrap(), "5,165.70");

        ctx.close().await.expect("close failed");
        renderer.shutdown().await.expect("shutdown failed");
    }
}
