//! The pipeline orchestrator: drives both source passes and assembles
//! the final report.
//!
//! Execution is strictly sequential. Each source category gets its own
//! browser session; each item fetch is isolated so one bad page degrades
//! only its own report line. A politeness delay follows every page fetch,
//! success or not, to avoid tripping upstream anti-automation defenses.

use crate::config::{PipelineConfig, ReferenceItem, TrackedItem};
use crate::extract::{primary, reference, FetchResult};
use crate::normalize::parse_price;
use crate::renderer::{BrowserLauncher, RenderError, Renderer};
use crate::report::{AssetReport, PriceReport, ReferenceCheck};
use crate::validate::validate;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub struct Pipeline {
    config: PipelineConfig,
    launcher: Arc<dyn BrowserLauncher>,
}

impl Pipeline {
    pub fn new(config: PipelineConfig, launcher: Arc<dyn BrowserLauncher>) -> Self {
        Self { config, launcher }
    }

    /// Execute one full run: primary pass, reference pass, validation,
    /// report assembly.
    ///
    /// Every tracked item yields exactly one [`FetchResult`] and every
    /// reference item exactly one price entry, even when its fetch fails.
    pub async fn run(&self) -> PriceReport {
        info!(
            tracked = self.config.tracked.len(),
            references = self.config.references.len(),
            "starting price fetch"
        );

        let fetches = self.fetch_primary_pass().await;
        let reference_prices = self.fetch_reference_pass().await;

        let assets = self
            .config
            .tracked
            .iter()
            .zip(fetches)
            .map(|(item, fetch)| self.assemble(item, fetch, &reference_prices))
            .collect();

        PriceReport { assets }
    }

    /// Fetch all tracked items from the primary source in one session.
    async fn fetch_primary_pass(&self) -> Vec<FetchResult> {
        let browser = match self.launcher.launch().await {
            Ok(b) => b,
            Err(e) => {
                warn!("primary session launch failed, degrading all primary results: {e}");
                return vec![FetchResult::default(); self.config.tracked.len()];
            }
        };

        let mut results = Vec::with_capacity(self.config.tracked.len());
        for item in &self.config.tracked {
            let result = match self.fetch_quote(browser.as_ref(), item).await {
                Ok(r) => r,
                Err(e) => {
                    warn!("error fetching {}: {e}", item.ticker);
                    FetchResult::default()
                }
            };
            results.push(result);
            self.politeness_delay().await;
        }

        if let Err(e) = browser.shutdown().await {
            warn!("primary session shutdown failed: {e}");
        }
        results
    }

    /// Fetch all reference prices in a second, independent session.
    async fn fetch_reference_pass(&self) -> HashMap<String, Option<f64>> {
        let mut prices: HashMap<String, Option<f64>> = self
            .config
            .references
            .iter()
            .map(|r| (r.display_name.clone(), None))
            .collect();

        let browser = match self.launcher.launch().await {
            Ok(b) => b,
            Err(e) => {
                warn!("reference session launch failed, degrading all reference results: {e}");
                return prices;
            }
        };

        for item in &self.config.references {
            match self.fetch_reference(browser.as_ref(), item).await {
                Ok(price) => {
                    prices.insert(item.display_name.clone(), price);
                }
                Err(e) => {
                    warn!("reference fetch failed for {}: {e}", item.display_name);
                }
            }
            self.politeness_delay().await;
        }

        if let Err(e) = browser.shutdown().await {
            warn!("reference session shutdown failed: {e}");
        }
        prices
    }

    /// Load one primary quote page and extract its raw figures.
    /// The page context is closed on every exit path.
    async fn fetch_quote(
        &self,
        browser: &dyn Renderer,
        item: &TrackedItem,
    ) -> Result<FetchResult, RenderError> {
        let mut ctx = browser.new_context().await?;
        let result = match ctx
            .navigate(&item.source_url, self.config.primary_timeout_ms)
            .await
        {
            Ok(()) => primary::extract(ctx.as_ref()).await,
            Err(e) => Err(e),
        };
        if let Err(e) = ctx.close().await {
            warn!("failed to close page for {}: {e}", item.ticker);
        }
        result
    }

    /// Load one reference page and extract its spot price.
    async fn fetch_reference(
        &self,
        browser: &dyn Renderer,
        item: &ReferenceItem,
    ) -> Result<Option<f64>, RenderError> {
        let mut ctx = browser.new_context().await?;
        let result = match ctx
            .navigate(&item.source_url, self.config.reference_timeout_ms)
            .await
        {
            Ok(()) => reference::extract(ctx.as_ref()).await,
            Err(e) => Err(e),
        };
        if let Err(e) = ctx.close().await {
            warn!("failed to close page for {}: {e}", item.display_name);
        }
        result
    }

    /// Build the report entry for one tracked item, cross-validating it
    /// when a reference source is configured for it.
    fn assemble(
        &self,
        item: &TrackedItem,
        fetch: FetchResult,
        reference_prices: &HashMap<String, Option<f64>>,
    ) -> AssetReport {
        let reference = self
            .config
            .references
            .iter()
            .any(|r| r.display_name == item.display_name)
            .then(|| {
                let price = reference_prices
                    .get(&item.display_name)
                    .copied()
                    .flatten();
                let outcome = validate(parse_price(fetch.raw_price.as_deref()), price);
                ReferenceCheck { price, outcome }
            });

        AssetReport {
            emoji: item.emoji.clone(),
            name: item.display_name.clone(),
            fetch,
            reference,
        }
    }

    async fn politeness_delay(&self) {
        if self.config.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;
        }
    }
}
