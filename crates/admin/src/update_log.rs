//! Append-only log of description updates.
//!
//! Each line is `<ISO-8601 UTC timestamp> - <message>`. Writing is best
//! effort: a failed write is reported through `tracing` and otherwise
//! ignored, so a read-only working directory never aborts an update run.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use tokio::io::AsyncWriteExt;

/// Handle to the update log file.
#[derive(Debug, Clone)]
pub struct UpdateLog {
    path: PathBuf,
}

impl UpdateLog {
    /// Create a handle for the log at `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line stamped with the current time.
    pub async fn append(&self, message: &str) {
        self.append_at(Utc::now(), message).await;
    }

    /// Append one line stamped with `timestamp`.
    pub async fn append_at(&self, timestamp: DateTime<Utc>, message: &str) {
        let line = format_line(timestamp, message);
        if let Err(e) = self.write(&line).await {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "Failed to write to log file"
            );
        }
    }

    async fn write(&self, line: &str) -> std::io::Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await
    }
}

/// Render a log line, including the trailing newline.
#[must_use]
pub fn format_line(timestamp: DateTime<Utc>, message: &str) -> String {
    format!(
        "{} - {message}\n",
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_line() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
        assert_eq!(
            format_line(ts, "Product description for Collagen is blank!"),
            "2025-01-15T09:30:00.000Z - Product description for Collagen is blank!\n"
        );
    }

    #[tokio::test]
    async fn test_append_preserves_existing_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("update.log");
        tokio::fs::write(&path, "earlier line\n").await.unwrap();

        let log = UpdateLog::new(&path);
        let ts = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
        log.append_at(ts, "first").await;
        log.append_at(ts, "second").await;

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(
            contents,
            "earlier line\n\
             2025-01-15T09:30:00.000Z - first\n\
             2025-01-15T09:30:00.000Z - second\n"
        );
    }

    #[tokio::test]
    async fn test_append_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.log");

        UpdateLog::new(&path).append("hello").await;

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(contents.ends_with(" - hello\n"));
    }

    #[tokio::test]
    async fn test_append_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending.
        let log = UpdateLog::new(dir.path());
        log.append("ignored").await;
    }
}
