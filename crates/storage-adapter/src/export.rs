//! Export port: renders a recording to a transportable file artifact.

use std::path::PathBuf;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::info;

use crate::errors::StorageError;

/// Opaque proof of a completed export (a path, a platform download id...).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExportHandle(pub String);

#[async_trait]
pub trait ExportSink: Send + Sync {
    async fn export_file(&self, filename: &str, content: &str)
        -> Result<ExportHandle, StorageError>;
}

/// Writes artifacts into a directory; the handle is the final path.
pub struct DirExportSink {
    dir: PathBuf,
}

impl DirExportSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ExportSink for DirExportSink {
    async fn export_file(
        &self,
        filename: &str,
        content: &str,
    ) -> Result<ExportHandle, StorageError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(filename);
        tokio::fs::write(&path, content).await?;
        info!(path = %path.display(), "exported recording");
        Ok(ExportHandle(path.display().to_string()))
    }
}

/// Captures exports in memory for assertions.
#[derive(Default)]
pub struct MemoryExportSink {
    files: Mutex<Vec<(String, String)>>,
}

impl MemoryExportSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> Vec<(String, String)> {
        self.files.lock().clone()
    }
}

#[async_trait]
impl ExportSink for MemoryExportSink {
    async fn export_file(
        &self,
        filename: &str,
        content: &str,
    ) -> Result<ExportHandle, StorageError> {
        self.files
            .lock()
            .push((filename.to_string(), content.to_string()));
        Ok(ExportHandle(format!("mem:{filename}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dir_sink_writes_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirExportSink::new(dir.path());
        let handle = sink.export_file("flow.json", "{}").await.unwrap();
        assert!(handle.0.ends_with("flow.json"));
        let written = std::fs::read_to_string(dir.path().join("flow.json")).unwrap();
        assert_eq!(written, "{}");
    }
}
