//! Log viewer: bounded tail and unbounded follow.
//!
//! Thin I/O over the daemon's application log. `tail` is a one-shot
//! read; `follow` is a lazy stream that blocks between appends and ends
//! only when the consumer drops it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_stream::try_stream;
use futures_core::Stream;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncSeekExt, BufReader};
use tokio::time::sleep;

use nifictl_core::error::LogError;

/// Pause between polls of a quiescent log file.
const FOLLOW_POLL: Duration = Duration::from_millis(500);

/// Return the last `n` lines of the log file.
///
/// A missing file is reported as `LogError::NotFound`, which callers
/// treat as "no logs yet" rather than a failure.
pub fn tail(path: &Path, n: usize) -> Result<Vec<String>, LogError> {
    if !path.exists() {
        return Err(LogError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(n);
    Ok(lines[start..].iter().map(|line| (*line).to_string()).collect())
}

/// Follow the log file from its current end, yielding lines as they are
/// appended.
///
/// The stream never terminates on its own; cancellation is cooperative
/// (stop consuming). The handle stays on the original file, so a rotated
/// log is not re-opened.
pub fn follow(path: PathBuf) -> impl Stream<Item = Result<String, LogError>> {
    try_stream! {
        let file = File::open(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LogError::NotFound(path.clone())
            } else {
                LogError::Io(e)
            }
        })?;
        let mut reader = BufReader::new(file);
        reader.seek(std::io::SeekFrom::End(0)).await?;

        let mut line = String::new();
        loop {
            line.clear();
            let read = reader.read_line(&mut line).await?;
            if read == 0 {
                sleep(FOLLOW_POLL).await;
                continue;
            }
            yield line.trim_end_matches(['\n', '\r']).to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use futures_util::{StreamExt, pin_mut};
    use tokio::time::timeout;

    #[test]
    fn tail_returns_last_n_lines() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("nifi-app.log");
        std::fs::write(&path, "one\ntwo\nthree\nfour\n").expect("write");

        let lines = tail(&path, 2).expect("tail");
        assert_eq!(lines, vec!["three".to_string(), "four".to_string()]);
    }

    #[test]
    fn tail_with_oversized_n_returns_everything() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("nifi-app.log");
        std::fs::write(&path, "only\n").expect("write");

        let lines = tail(&path, 500).expect("tail");
        assert_eq!(lines, vec!["only".to_string()]);
    }

    #[test]
    fn tail_on_missing_file_signals_not_found() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let err = tail(&tmp.path().join("absent.log"), 10).expect_err("should signal");
        assert!(matches!(err, LogError::NotFound(_)));
    }

    #[tokio::test]
    async fn follow_yields_appended_lines_only() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("nifi-app.log");
        std::fs::write(&path, "old line\n").expect("write");

        let stream = follow(path.clone());
        pin_mut!(stream);

        // Append after the stream has had time to seek to the end
        let writer = tokio::spawn(async move {
            sleep(Duration::from_millis(200)).await;
            let mut file = std::fs::OpenOptions::new()
                .append(true)
                .open(&path)
                .expect("open");
            writeln!(file, "fresh one").expect("append");
            writeln!(file, "fresh two").expect("append");
        });

        let first = timeout(Duration::from_secs(5), stream.next())
            .await
            .expect("no hang")
            .expect("stream alive")
            .expect("no error");
        let second = timeout(Duration::from_secs(5), stream.next())
            .await
            .expect("no hang")
            .expect("stream alive")
            .expect("no error");

        writer.await.expect("writer");
        assert_eq!(first, "fresh one");
        assert_eq!(second, "fresh two");
    }

    #[tokio::test]
    async fn follow_on_missing_file_signals_not_found() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let stream = follow(tmp.path().join("absent.log"));
        pin_mut!(stream);

        let item = stream.next().await.expect("one item");
        assert!(matches!(item, Err(LogError::NotFound(_))));
    }
}
