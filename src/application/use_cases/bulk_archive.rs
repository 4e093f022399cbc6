use std::io::{self, Write};
use std::sync::Arc;

use bytes::Bytes;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::application::dto::{AdminContext, BatchSummary, SkippedSubmission};
use crate::application::ports::{RepositoryError, SortSpec, SubmissionRepository};
use crate::domain::entities::Submission;
use crate::infrastructure::archive::{ArchiveStreamer, ChannelSink, EntryError, FinalizeError};
use crate::infrastructure::pdf::{ComposedDocument, DocumentComposer, RenderError};

/// File name the bulk archive is served under
pub const ARCHIVE_FILE_NAME: &str = "submissions.zip";

/// Chunks buffered between the pipeline thread and the HTTP response.
/// Bounds memory and lets the consumer apply backpressure.
const CHANNEL_DEPTH: usize = 16;

#[derive(Debug, Error)]
pub enum BulkArchiveError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("No submissions to archive")]
    Empty,
}

/// Sink-level failure that aborts the in-progress batch. Not retried:
/// partial output may already be visible to the client.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Archive entry error: {0}")]
    Entry(#[from] EntryError),

    #[error("Archive finalize error: {0}")]
    Finalize(#[from] FinalizeError),
}

/// Drive the batch: compose each record in order, stream it into the
/// archive, and skip records whose composition fails. One bad record never
/// aborts the batch; a sink failure does.
pub fn stream_archive<W, F>(
    records: &[Submission],
    compose: F,
    sink: W,
) -> Result<BatchSummary, PipelineError>
where
    W: Write,
    F: Fn(&Submission) -> Result<ComposedDocument, RenderError>,
{
    let mut streamer = ArchiveStreamer::open(sink);
    let mut summary = BatchSummary::default();

    for record in records {
        match compose(record) {
            Ok(document) => {
                streamer.add_entry(&document.file_name, document.bytes.as_ref())?;
                summary.succeeded += 1;
            }
            Err(e) => {
                tracing::warn!(
                    submission_id = %record.id(),
                    error = %e,
                    "Skipping submission in bulk archive"
                );
                summary.skipped.push(SkippedSubmission {
                    id: record.id().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    streamer.finalize()?;
    Ok(summary)
}

/// Use case: stream every submission as one compressed archive.
pub struct BulkArchiveUseCase {
    submission_repo: Arc<dyn SubmissionRepository>,
}

impl BulkArchiveUseCase {
    pub fn new(submission_repo: Arc<dyn SubmissionRepository>) -> Self {
        Self { submission_repo }
    }

    /// List all submissions (most recent first) and return a byte stream of
    /// the resulting archive. Failures after the first chunk cannot reach
    /// the client; the batch summary is logged when the pipeline finishes.
    pub async fn execute(
        &self,
        ctx: &AdminContext,
    ) -> Result<ReceiverStream<Result<Bytes, io::Error>>, BulkArchiveError> {
        let records = self
            .submission_repo
            .list_all(SortSpec::SubmittedAtDesc)
            .await?;

        if records.is_empty() {
            return Err(BulkArchiveError::Empty);
        }

        tracing::info!(
            admin = %ctx.subject,
            records = records.len(),
            "Starting bulk archive"
        );

        let (tx, rx) = mpsc::channel(CHANNEL_DEPTH);
        let admin = ctx.subject.clone();

        tokio::task::spawn_blocking(move || {
            let sink = ChannelSink::new(tx);
            match stream_archive(&records, DocumentComposer::compose, sink) {
                Ok(summary) => {
                    let detail = serde_json::to_string(&summary).unwrap_or_default();
                    tracing::info!(
                        admin = %admin,
                        succeeded = summary.succeeded,
                        skipped = summary.skipped.len(),
                        summary = %detail,
                        "Bulk archive complete"
                    );
                }
                Err(e) => {
                    tracing::warn!(admin = %admin, error = %e, "Bulk archive aborted mid-stream");
                }
            }
        });

        Ok(ReceiverStream::new(rx))
    }
}
