//! Producer task and ordered row hand-off.

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, trace};

use super::error::SourceError;
use super::source::{RowSource, SourceRow};

/// Consumer end of a row producer.
///
/// Rows arrive in exactly the order the source yielded them. The producer's
/// outcome is held separately and read with [`finish`](Self::finish) once the
/// rows are drained, so rows produced before a failure are never lost.
pub struct RowStream {
    rows: mpsc::UnboundedReceiver<SourceRow>,
    done: oneshot::Receiver<Result<(), SourceError>>,
}

impl RowStream {
    /// Start a producer reading `source` on the blocking thread pool.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn<S: RowSource>(source: S) -> Self {
        let (row_tx, rows) = mpsc::unbounded_channel();
        let (done_tx, done) = oneshot::channel();

        tokio::task::spawn_blocking(move || {
            let outcome = produce(source, &row_tx);
            // Close the queue before publishing the outcome
            drop(row_tx);
            if done_tx.send(outcome).is_err() {
                debug!("row stream dropped before producer finished");
            }
        });

        Self { rows, done }
    }

    /// Next row, or `None` once the producer has stopped and the queue is empty.
    pub async fn next_row(&mut self) -> Option<SourceRow> {
        self.rows.recv().await
    }

    /// Producer outcome: `Ok` on clean end of input, otherwise its first error.
    ///
    /// A producer that panicked reports [`SourceError::ProducerLost`]. Rows
    /// still queued are discarded, so call this after
    /// [`next_row`](Self::next_row) has returned `None`.
    pub async fn finish(self) -> Result<(), SourceError> {
        self.done.await.unwrap_or(Err(SourceError::ProducerLost))
    }

    /// Stop the producer from queueing further rows and wait for it to exit.
    pub async fn cancel(mut self) -> Result<(), SourceError> {
        self.rows.close();
        self.finish().await
    }
}

fn produce<S: RowSource>(
    source: S,
    rows: &mpsc::UnboundedSender<SourceRow>,
) -> Result<(), SourceError> {
    let origin = source.origin();
    debug!(%origin, "opening row source");
    let iter = source.open()?;

    let mut sent = 0usize;
    for row in iter {
        let row = row?;
        trace!(line = row.line, fields = row.fields.len(), "row read");
        if rows.send(row).is_err() {
            debug!(sent, "row consumer gone, stopping producer");
            return Ok(());
        }
        sent += 1;
    }

    debug!(%origin, sent, "row source exhausted");
    Ok(())
}
