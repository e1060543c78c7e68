use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A pre-stored media file served in place of real inference output.
#[derive(Debug, Clone)]
pub struct DemoAsset {
    path: PathBuf,
}

impl DemoAsset {
    pub fn new(dir: &Path, file_name: &str) -> Self {
        DemoAsset {
            path: dir.join(file_name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base64 of the file, or `None` when it does not exist.
    pub async fn load_base64(&self) -> std::io::Result<Option<String>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(STANDARD.encode(bytes))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
