use crate::domain::provider::DocumentProvider;
use crate::error::Result;
use std::path::PathBuf;
use tracing::info;

/// A games page saved to disk, e.g. from the browser.
#[derive(Debug, Clone)]
pub struct LocalDocument {
    path: PathBuf,
}

impl LocalDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentProvider for LocalDocument {
    async fn fetch_document(&self) -> Result<String> {
        info!("Reading games page from {:?}", self.path);
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IdleError;
    use tempfile::tempdir;

    #[tokio::test]
    async fn reads_saved_page() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("games.html");
        std::fs::write(&path, "<html></html>").unwrap();

        let document = LocalDocument::new(&path).fetch_document().await.unwrap();
        assert_eq!(document, "<html></html>");
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let result = LocalDocument::new(dir.path().join("missing.html"))
            .fetch_document()
            .await;
        assert!(matches!(result, Err(IdleError::Io(_))));
    }
}
