use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Handle to an image picked on the editing machine that has not been uploaded yet.
///
/// Only the path is kept; bytes are read by whoever performs the upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    id: Uuid,
    path: PathBuf,
    content_type: Option<String>,
}

impl SourceFile {
    /// Create a handle for a local file, guessing the content type from its extension
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let content_type = guess_content_type(&path).map(str::to_string);
        Self {
            id: Uuid::new_v4(),
            path,
            content_type,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name sent in the multipart part header
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("upload")
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

fn guess_content_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}
