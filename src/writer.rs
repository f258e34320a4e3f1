use crate::record::Record;
use anyhow::{Context, Result};
use log::{debug, warn};
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

/// Writes one `<path>:::<content>` line per record.
pub struct RecordWriter<W: AsyncWrite + Unpin> {
    writer: BufWriter<W>,
}

impl<W: AsyncWrite + Unpin> RecordWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
        }
    }

    pub async fn write_record(&mut self, record: &Record) -> Result<()> {
        if record.is_ambiguous() {
            warn!(
                "Path {} contains the record delimiter; its line cannot be split reliably",
                record.path.display()
            );
        }
        if record.has_lossy_path() {
            warn!(
                "Path {} is not valid Unicode; its line names it with replacement characters",
                record.path.display()
            );
        }

        debug!(
            "Writing record: {} ({} bytes)",
            record.path.display(),
            record.content.len()
        );

        self.writer
            .write_all(format!("{record}\n").as_bytes())
            .await
            .with_context(|| format!("Failed to write record for {}", record.path.display()))
    }

    pub async fn flush(&mut self) -> Result<()> {
        self.writer.flush().await.context("Failed to flush output")
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}
