use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FileStatus {
    Active,
    Inactive,
}

/// Media category counted against upload limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Image => write!(f, "images"),
            MediaKind::Video => write!(f, "videos"),
        }
    }
}

/// An attachment as shown in an upload field.
///
/// Files with an `id` are known to the server. Files without one were picked
/// locally and carry their bytes in `content` until uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<FileStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip)]
    pub content: Option<Vec<u8>>,
}

impl UploadFile {
    /// A file picked on this machine that the server has not seen yet.
    pub fn local(name: impl Into<String>, mime_type: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            id: None,
            name: name.into(),
            file_url: None,
            status: None,
            mime_type: Some(mime_type.into()),
            content: Some(content),
        }
    }

    /// A file record confirmed by the server.
    pub fn remote(id: impl Into<String>, name: impl Into<String>, file_url: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            file_url: Some(file_url.into()),
            status: Some(FileStatus::Active),
            mime_type: None,
            content: None,
        }
    }

    pub fn with_status(mut self, status: FileStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// An empty id counts as no id.
    pub fn server_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn is_inactive(&self) -> bool {
        self.status == Some(FileStatus::Inactive)
    }

    pub fn is_active(&self) -> bool {
        !self.is_inactive()
    }

    /// Key used for per-file caches: the id when known, the name otherwise.
    pub fn cache_key(&self) -> &str {
        self.server_id().unwrap_or(&self.name)
    }

    /// True when `file_url` already points at the server.
    pub fn has_remote_url(&self) -> bool {
        self.file_url
            .as_deref()
            .is_some_and(|url| url.starts_with("http"))
    }

    /// Declared MIME type, or one guessed from the name or the URL path.
    /// Server records usually arrive without a declared type.
    pub fn effective_mime_type(&self) -> Option<String> {
        if let Some(mime) = self.mime_type.as_deref().filter(|mime| !mime.is_empty()) {
            return Some(mime.to_string());
        }

        let url_path = self
            .file_url
            .as_deref()
            .map(|url| url.split(['?', '#']).next().unwrap_or(url));

        std::iter::once(self.name.as_str())
            .chain(url_path)
            .find_map(|path| mime_guess::from_path(path).first_raw())
            .map(str::to_string)
    }

    pub fn media_kind(&self) -> Option<MediaKind> {
        let mime = self.effective_mime_type()?;
        if mime.starts_with("image/") {
            Some(MediaKind::Image)
        } else if mime.starts_with("video/") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}
