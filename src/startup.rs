use std::sync::Arc;

use anyhow::{bail, Context};

use crate::{
    configuration::Settings,
    services::{
        read_product_ids, write_report, BatchReport, BatchRunner, Extractor, Fetcher,
        HttpTransport, RetryPolicy, Transport,
    },
};

pub fn build_runner(settings: &Settings, transport: Arc<dyn Transport>) -> anyhow::Result<BatchRunner> {
    let extractor = Extractor::new(&settings.extraction).context("Invalid extraction profile")?;
    let fetcher = Fetcher::new(
        transport,
        settings.application.url_template.clone(),
        RetryPolicy::from(&settings.fetcher),
    );

    Ok(BatchRunner::new(
        Arc::new(fetcher),
        Arc::new(extractor),
        settings.pacing.clone(),
    ))
}

pub async fn run(settings: Settings) -> anyhow::Result<BatchReport> {
    let ids = read_product_ids(&settings.application.input_path).await?;
    if ids.is_empty() {
        bail!(
            "No product ids found in {}",
            settings.application.input_path.display()
        );
    }

    let transport = HttpTransport::new(settings.fetcher.timeout())
        .context("Failed to build the HTTP client")?;
    let runner = build_runner(&settings, Arc::new(transport))?;

    let report = runner.run(ids).await;

    log::info!(
        "Writing results to {}",
        settings.application.output_path.display()
    );
    write_report(&settings.application.output_path, &report).await?;

    Ok(report)
}
