//! Run the price-fetch pipeline and print the report to stdout.

use crate::config::PipelineConfig;
use crate::pipeline::Pipeline;
use crate::renderer::chromium::{find_chromium, ChromiumLauncher};
use crate::renderer::RenderError;
use anyhow::Result;
use std::sync::Arc;

/// Execute one pipeline run with optional timeout/delay overrides.
///
/// A missing browser executable is the one unrecoverable startup failure;
/// it propagates out and the binary exits non-zero. Everything past that
/// point degrades per item instead of failing the run.
pub async fn run(timeout_ms: Option<u64>, delay_ms: Option<u64>) -> Result<()> {
    if find_chromium().is_none() {
        return Err(RenderError::BrowserNotFound.into());
    }

    let mut config = PipelineConfig::default();
    if let Some(timeout) = timeout_ms {
        config.primary_timeout_ms = timeout;
        config.reference_timeout_ms = timeout;
    }
    if let Some(delay) = delay_ms {
        config.delay_ms = delay;
    }

    let pipeline = Pipeline::new(config, Arc::new(ChromiumLauncher));
    let report = pipeline.run().await;

    println!("{}", report.render());
    Ok(())
}
