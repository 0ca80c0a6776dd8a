use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;

use crate::error::{PoolError, ScrapeError};
use crate::fetch::PageFetcher;
use crate::parsers::TableParser;
use crate::table::Table;

/// One unit of work: a single team-season schedule page. The season
/// year rides along because the parsed table itself rarely carries it.
#[derive(Debug, Clone)]
pub struct Job {
    pub season: u16,
    pub url: String,
}

/// Outcome of one job. Failures are data here, not control flow.
#[derive(Debug)]
pub struct JobOutcome {
    pub job: Job,
    pub result: Result<Table, ScrapeError>,
}

/// Run every job's fetch -> parse pipeline under a fixed-size worker
/// pool. At most `concurrency` jobs are in flight at any instant, and
/// outcomes come back in completion order.
pub async fn run_all(
    jobs: Vec<Job>,
    concurrency: usize,
    fetcher: Arc<dyn PageFetcher>,
    parser: Arc<dyn TableParser>,
) -> Result<Vec<JobOutcome>, PoolError> {
    let total = jobs.len();
    let worker_count = concurrency.clamp(1, total.max(1));

    let (tx, rx) = mpsc::unbounded_channel();
    for job in jobs {
        tx.send(job).expect("job receiver still held locally");
    }
    drop(tx);

    let rx = Arc::new(Mutex::new(rx));

    let mut workers = JoinSet::new();
    for _ in 0..worker_count {
        let rx = Arc::clone(&rx);
        let fetcher = Arc::clone(&fetcher);
        let parser = Arc::clone(&parser);

        workers.spawn(async move {
            let mut outcomes = Vec::new();
            loop {
                // Hold the lock only long enough to pull the next job.
                let next = { rx.lock().await.recv().await };
                let Some(job) = next else {
                    break;
                };

                let result = scrape_one(fetcher.as_ref(), parser.as_ref(), &job).await;
                if let Err(e) = &result {
                    tracing::debug!("season {} job failed: {e}", job.season);
                }
                outcomes.push(JobOutcome { job, result });
            }
            outcomes
        });
    }

    let mut all = Vec::with_capacity(total);
    while let Some(joined) = workers.join_next().await {
        all.extend(joined?);
    }
    Ok(all)
}

/// Fetch one page and parse it into a table.
pub async fn scrape_one(
    fetcher: &dyn PageFetcher,
    parser: &dyn TableParser,
    job: &Job,
) -> Result<Table, ScrapeError> {
    let html = fetcher.fetch(&job.url).await?;
    Ok(parser.parse(&html)?)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::error::{FetchError, ParseError};

    /// Stub fetcher that tracks how many fetches run at once and can
    /// fail a single configured URL.
    struct CountingFetcher {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
        fail_url: Option<String>,
    }

    impl CountingFetcher {
        fn new(fail_url: Option<String>) -> Self {
            Self {
                in_flight: AtomicUsize::new(0),
                peak: AtomicUsize::new(0),
                fail_url,
            }
        }
    }

    #[async_trait]
    impl PageFetcher for CountingFetcher {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(10)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            if self.fail_url.as_deref() == Some(url) {
                return Err(FetchError::HttpStatus(500));
            }
            Ok("<html></html>".to_string())
        }
    }

    /// Stub parser returning a fixed single-row table.
    struct FixedParser;

    impl TableParser for FixedParser {
        fn name(&self) -> &str {
            "fixed"
        }

        fn parse(&self, _html: &str) -> Result<Table, ParseError> {
            Ok(Table::assemble(
                "stub".to_string(),
                2,
                vec![vec!["a".to_string(), "b".to_string()]],
            ))
        }
    }

    fn jobs(n: usize) -> Vec<Job> {
        (0..n)
            .map(|i| Job {
                season: 2003 + i as u16,
                url: format!("https://example.test/season/{i}"),
            })
            .collect()
    }

    #[tokio::test]
    async fn every_job_reports_and_concurrency_stays_bounded() {
        let fetcher = Arc::new(CountingFetcher::new(None));
        let outcomes = run_all(jobs(19), 10, fetcher.clone(), Arc::new(FixedParser))
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 19);
        assert!(outcomes.iter().all(|o| o.result.is_ok()));
        assert!(fetcher.peak.load(Ordering::SeqCst) <= 10);
    }

    #[tokio::test]
    async fn one_failure_does_not_poison_the_batch() {
        let fail_url = "https://example.test/season/7".to_string();
        let fetcher = Arc::new(CountingFetcher::new(Some(fail_url.clone())));
        let outcomes = run_all(jobs(19), 10, fetcher, Arc::new(FixedParser))
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 19);

        let failed: Vec<_> = outcomes.iter().filter(|o| o.result.is_err()).collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(failed[0].job.url, fail_url);
        assert!(matches!(
            failed[0].result,
            Err(ScrapeError::Fetch(FetchError::HttpStatus(500)))
        ));
    }

    #[tokio::test]
    async fn zero_concurrency_still_makes_progress() {
        let fetcher = Arc::new(CountingFetcher::new(None));
        let outcomes = run_all(jobs(3), 0, fetcher.clone(), Arc::new(FixedParser))
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(fetcher.peak.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_job_list_yields_an_empty_result_set() {
        let fetcher = Arc::new(CountingFetcher::new(None));
        let outcomes = run_all(Vec::new(), 10, fetcher, Arc::new(FixedParser))
            .await
            .unwrap();
        assert!(outcomes.is_empty());
    }
}
