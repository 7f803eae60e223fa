// Copyright 2026 Pricewatch Contributors
// SPDX-License-Identifier: Apache-2.0

//! Pricewatch library — multi-source live price ingestion pipeline.
//!
//! Drives a headless browser to pull live quotes from the primary source,
//! cross-checks precious metals against an independent reference source,
//! and renders a per-asset report. Exposed as a library so integration
//! tests can run the pipeline against a fake renderer.

pub mod cli;
pub mod config;
pub mod extract;
pub mod normalize;
pub mod pipeline;
pub mod renderer;
pub mod report;
pub mod validate;
