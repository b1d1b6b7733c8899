//! Background matching of freshly shortened links.
//!
//! Handlers push a [`MatchJob`] onto a bounded [`MatchQueue`] right after the
//! short link is saved. [`run_match_worker`] drains the queue, runs the
//! [`MatchOrchestrator`] for each job with at most `concurrency` jobs in
//! flight, and writes the outcome back onto the link.

use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, error, info, warn};

use crate::application::matching::MatchOrchestrator;
use crate::application::services::LinkService;
use crate::domain::match_job::MatchJob;

/// Producer side of the match queue.
#[derive(Clone)]
pub struct MatchQueue {
    tx: mpsc::Sender<MatchJob>,
}

impl MatchQueue {
    /// Creates a queue holding at most `capacity` pending jobs.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<MatchJob>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    /// Enqueues a job without waiting.
    ///
    /// A full or closed queue drops the job: the link simply keeps no book.
    /// Returns whether the job was accepted.
    pub fn enqueue(&self, job: MatchJob) -> bool {
        match self.tx.try_send(job) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(job)) => {
                metrics::counter!("booklink_match_jobs_dropped_total", "reason" => "full")
                    .increment(1);
                warn!(code = %job.code, "Match queue full, dropping job");
                false
            }
            Err(mpsc::error::TrySendError::Closed(job)) => {
                metrics::counter!("booklink_match_jobs_dropped_total", "reason" => "closed")
                    .increment(1);
                warn!(code = %job.code, "Match queue closed, dropping job");
                false
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// Free slots left in the queue.
    pub fn capacity(&self) -> usize {
        self.tx.capacity()
    }
}

/// Consumes match jobs until every [`MatchQueue`] handle is dropped.
///
/// Jobs already in flight when the channel closes are awaited before the
/// function returns.
pub async fn run_match_worker(
    mut rx: mpsc::Receiver<MatchJob>,
    orchestrator: Arc<MatchOrchestrator>,
    link_service: Arc<LinkService>,
    concurrency: usize,
) {
    let permits = concurrency.max(1);
    let semaphore = Arc::new(Semaphore::new(permits));

    info!(concurrency = permits, "Match worker started");

    while let Some(job) = rx.recv().await {
        let permit = match semaphore.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => break,
        };

        let orchestrator = orchestrator.clone();
        let link_service = link_service.clone();

        tokio::spawn(async move {
            process_job(&orchestrator, &link_service, job).await;
            drop(permit);
        });
    }

    // wait for in-flight jobs
    if let Ok(all) = semaphore.acquire_many(permits as u32).await {
        drop(all);
    }

    info!("Match worker stopped");
}

/// Matches a single job and stores the result on its link.
pub async fn process_job(orchestrator: &MatchOrchestrator, link_service: &LinkService, job: MatchJob) {
    debug!(code = %job.code, url = %job.url, "Matching link");

    let book = orchestrator.match_book(&job.url, &job.keywords).await;
    let book_id = book.as_ref().map(|b| b.id.clone());

    match link_service.attach_book(&job.code, book).await {
        Ok(true) => info!(code = %job.code, book = ?book_id, "Match stored"),
        Ok(false) => warn!(code = %job.code, "Link vanished before match was stored"),
        Err(e) => error!(code = %job.code, error = %e, "Failed to store match"),
    }
}
