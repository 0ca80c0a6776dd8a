use std::sync::Arc;
use std::time::Instant;

use crate::config::{Config, SampleFormat};
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::parsers::{self, TableParser};
use crate::pool::{self, Job};

/// Run one timed batch per selected parser variant, printing an ad-hoc
/// sample table after each.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let fetcher: Arc<dyn PageFetcher> = Arc::new(HttpFetcher::new()?);

    for name in config.parser.variant_names() {
        let parser = parsers::get_parser(name)
            .ok_or_else(|| anyhow::anyhow!("unknown parser variant: {name}"))?;

        run_batch(config, Arc::clone(&fetcher), Arc::clone(&parser)).await;
        print_sample(config, fetcher.as_ref(), parser.as_ref()).await;
    }

    Ok(())
}

/// Build the job list: one URL per season in the configured range,
/// repeated to synthesize load when benchmarking.
pub fn build_jobs(config: &Config) -> Vec<Job> {
    let seasons: Vec<Job> = (config.season_start..=config.season_end)
        .map(|season| Job {
            season,
            url: schedule_url(config, season),
        })
        .collect();

    let repeat = config.repeat.max(1);
    let mut jobs = Vec::with_capacity(seasons.len() * repeat);
    for _ in 0..repeat {
        jobs.extend(seasons.iter().cloned());
    }
    jobs
}

fn schedule_url(config: &Config, season: u16) -> String {
    format!("{}/{}/season/{}", config.base_url, config.team, season)
}

/// Time one batch through the pool. Batch results are discarded after
/// counting; the batch measures throughput, not output retention.
async fn run_batch(config: &Config, fetcher: Arc<dyn PageFetcher>, parser: Arc<dyn TableParser>) {
    let jobs = build_jobs(config);
    let variant = parser.name().to_string();
    tracing::info!(
        "running {} jobs with {} workers ({variant} parser)",
        jobs.len(),
        config.workers
    );

    let started = Instant::now();
    match pool::run_all(jobs, config.workers, fetcher, parser).await {
        Ok(outcomes) => {
            let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
            tracing::info!(
                "{variant} batch finished in {:.2?}: {} ok, {failed} failed",
                started.elapsed(),
                outcomes.len() - failed
            );
        }
        Err(e) => {
            tracing::error!("{variant} batch aborted: {e}");
        }
    }
}

/// Fetch and print one schedule outside the batch for inspection.
async fn print_sample(config: &Config, fetcher: &dyn PageFetcher, parser: &dyn TableParser) {
    let job = Job {
        season: config.sample_season,
        url: schedule_url(config, config.sample_season),
    };

    match pool::scrape_one(fetcher, parser, &job).await {
        Ok(table) => match config.format {
            SampleFormat::Text => print!("{table}"),
            SampleFormat::Json => match serde_json::to_string_pretty(&table) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::error!("failed to serialize sample table: {e}"),
            },
        },
        Err(e) => tracing::warn!("sample fetch for season {} failed: {e}", job.season),
    }
}
