use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use serde::{ser::SerializeMap, Serialize, Serializer};
use tokio::sync::mpsc;

use crate::{
    configuration::PacingSettings,
    domain::{
        product_id::ProductId,
        record::{Record, RecordStatus},
    },
};

use super::{Extractor, FetchOutcome, Fetcher, PacingGate};

/// Upper bound on simultaneous in-flight fetches against the storefront.
pub const MAX_WORKERS: usize = 4;

/// Fetches and extracts one product. Never fails: a page that could not be
/// retrieved becomes [`Record::FetchFailed`].
pub async fn scrape_product(fetcher: &Fetcher, extractor: &Extractor, id: &ProductId) -> Record {
    log::info!("Fetching {} ...", id);

    match fetcher.fetch(id).await {
        FetchOutcome::Success(doc) => {
            let trace = extractor.resolve(&doc);
            log::debug!("Strategies for {}: {:?}", id, trace);
            Record::Extracted(trace.into())
        }
        FetchOutcome::Failure(e) => {
            log::error!("Product {}: page fetch failed: {}", id, e);
            Record::FetchFailed
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub complete: usize,
    pub partial: usize,
    pub empty: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.complete + self.partial + self.empty + self.failed
    }
}

/// Every submitted identifier with its record, in submission order.
#[derive(Debug)]
pub struct BatchReport {
    records: Vec<(ProductId, Record)>,
}

impl BatchReport {
    pub fn records(&self) -> &[(ProductId, Record)] {
        &self.records
    }

    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for (_, record) in &self.records {
            match record.status() {
                RecordStatus::Complete => summary.complete += 1,
                RecordStatus::Partial => summary.partial += 1,
                RecordStatus::Empty => summary.empty += 1,
                RecordStatus::Failed => summary.failed += 1,
            }
        }
        summary
    }

    /// Keyed view; for duplicated identifiers the last record wins.
    pub fn into_map(self) -> HashMap<ProductId, Record> {
        self.records.into_iter().collect()
    }

    /// One entry per identifier at its first position, holding its last record.
    fn deduplicated(&self) -> Vec<(&ProductId, &Record)> {
        let mut positions: HashMap<&ProductId, usize> = HashMap::new();
        let mut entries: Vec<(&ProductId, &Record)> = vec![];

        for (id, record) in &self.records {
            match positions.get(id) {
                Some(&i) => entries[i].1 = record,
                None => {
                    positions.insert(id, entries.len());
                    entries.push((id, record));
                }
            }
        }
        entries
    }
}

impl Serialize for BatchReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.deduplicated();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (id, record) in entries {
            map.serialize_entry(id, record)?;
        }
        map.end()
    }
}

pub struct BatchRunner {
    fetcher: Arc<Fetcher>,
    extractor: Arc<Extractor>,
    pacing: PacingSettings,
}

impl BatchRunner {
    pub fn new(fetcher: Arc<Fetcher>, extractor: Arc<Extractor>, pacing: PacingSettings) -> Self {
        BatchRunner {
            fetcher,
            extractor,
            pacing,
        }
    }

    pub fn worker_count(&self, items: usize) -> usize {
        self.pacing.workers.clamp(1, MAX_WORKERS).min(items.max(1))
    }

    /// Scrapes every identifier and returns once all of them have a record.
    ///
    /// Workers pull the next identifier from a shared index and each paces
    /// its own requests; with a single worker the batch is strictly sequential.
    pub async fn run(&self, ids: Vec<ProductId>) -> BatchReport {
        let total = ids.len();
        let ids = Arc::new(ids);
        let next = Arc::new(AtomicUsize::new(0));
        let (result_sender, mut result_receiver) = mpsc::unbounded_channel::<(usize, Record)>();

        let workers = self.worker_count(total);
        log::info!("Scraping {} products with {} worker(s)", total, workers);

        let mut handles = Vec::with_capacity(workers);
        for worker in 0..workers {
            let ids = Arc::clone(&ids);
            let next = Arc::clone(&next);
            let fetcher = Arc::clone(&self.fetcher);
            let extractor = Arc::clone(&self.extractor);
            let result_sender = result_sender.clone();
            let mut gate = PacingGate::from_settings(&self.pacing);

            handles.push(tokio::spawn(async move {
                loop {
                    let i = next.fetch_add(1, Ordering::Relaxed);
                    let Some(id) = ids.get(i) else {
                        break;
                    };

                    gate.wait_turn().await;
                    let record = scrape_product(&fetcher, &extractor, id).await;
                    gate.mark_done();
                    if result_sender.send((i, record)).is_err() {
                        log::error!("Worker {} lost its result channel", worker);
                        break;
                    }
                }
            }));
        }
        drop(result_sender);

        let mut slots: Vec<Option<Record>> = vec![None; total];
        let mut done = 0;
        while let Some((i, record)) = result_receiver.recv().await {
            done += 1;
            match &record {
                Record::Extracted(fields) => log::info!(
                    "[{}/{}] Done {} ({}/4 fields)",
                    done,
                    total,
                    ids[i],
                    fields.found_count()
                ),
                Record::FetchFailed => {
                    log::error!("[{}/{}] Failed {}", done, total, ids[i])
                }
            }
            slots[i] = Some(record);
        }

        for handle in handles {
            if let Err(e) = handle.await {
                log::error!("Scrape worker stopped abnormally: {:?}", e);
            }
        }

        let records = ids
            .iter()
            .cloned()
            .zip(slots)
            .map(|(id, slot)| {
                let record = slot.unwrap_or_else(|| {
                    log::error!("No record produced for {}, marking it as failed", id);
                    Record::FetchFailed
                });
                (id, record)
            })
            .collect();

        let report = BatchReport { records };
        let summary = report.summary();
        log::info!(
            "Batch finished: {} complete, {} partial, {} empty, {} failed (of {})",
            summary.complete,
            summary.partial,
            summary.empty,
            summary.failed,
            summary.total()
        );
        report
    }
}
