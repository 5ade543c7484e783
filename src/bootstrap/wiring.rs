//! Wires infrastructure adapters into the review use cases.

use anyhow::Context;
use std::sync::Arc;

use cr_app::{AppDeps, ReviewUseCases};
use cr_core::ReviewConfig;
use cr_infra::fs::collections_dir;
use cr_infra::{JsonFileSubmissionStore, RandomMetricsGenerator, SystemClock};
use tracing::info;

/// Build the use cases for `config`, backed by JSON files on disk.
///
/// An empty `data_dir` resolves to the platform data directory.
pub fn wire_review_app(config: &ReviewConfig) -> anyhow::Result<ReviewUseCases> {
    let data_dir = if config.data_dir.as_os_str().is_empty() {
        collections_dir().context("Failed to resolve collections directory")?
    } else {
        config.data_dir.clone()
    };

    info!(
        data_dir = %data_dir.display(),
        tracked = config.tracked_collections.len(),
        review = %config.review_collection,
        editor = %config.editor_collection,
        "Wiring review use cases"
    );

    let deps = AppDeps {
        store: Arc::new(JsonFileSubmissionStore::new(data_dir)),
        metrics: Arc::new(RandomMetricsGenerator::new(
            config.max_views,
            config.max_earnings,
        )),
        clock: Arc::new(SystemClock),
    };

    Ok(ReviewUseCases::new(deps, config))
}
