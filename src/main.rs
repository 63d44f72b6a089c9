use env_logger::Env;
use pdp_scraper::{configuration::get_configuration, startup::run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration()?;

    let report = run(configuration).await?;
    let summary = report.summary();
    log::info!(
        "Done: {} products, {} complete, {} partial, {} empty, {} failed",
        summary.total(),
        summary.complete,
        summary.partial,
        summary.empty,
        summary.failed
    );

    Ok(())
}
