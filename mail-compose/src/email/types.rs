use std::path::PathBuf;

/// Where the content of an attachment comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentSource {
    /// Read by the transport when the mail is sent
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// A file attached to or embedded in an email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub source: AttachmentSource,
    /// Filename shown to the recipient
    pub name: Option<String>,
    /// Content-Type header value (e.g., "application/pdf")
    pub content_type: Option<String>,
    /// Inline parts are referenced from the html body via `cid:`
    pub inline: bool,
    pub content_id: Option<String>,
}

impl Attachment {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        Attachment {
            source: AttachmentSource::Path(path),
            name,
            content_type: None,
            inline: false,
            content_id: None,
        }
    }

    pub fn from_bytes(data: impl Into<Vec<u8>>, name: impl Into<String>) -> Self {
        Attachment {
            source: AttachmentSource::Bytes(data.into()),
            name: Some(name.into()),
            content_type: None,
            inline: false,
            content_id: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Mark as inline; the content id defaults to the filename
    pub fn inline(mut self, content_id: Option<String>) -> Self {
        self.inline = true;
        self.content_id = content_id.or_else(|| self.name.clone());
        self
    }
}

/// X-Priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Highest = 1,
    High = 2,
    Normal = 3,
    Low = 4,
    Lowest = 5,
}

impl Priority {
    /// Value for the X-Priority header, e.g. "1 (Highest)"
    pub fn header_value(&self) -> String {
        let label = match self {
            Priority::Highest => "Highest",
            Priority::High => "High",
            Priority::Normal => "Normal",
            Priority::Low => "Low",
            Priority::Lowest => "Lowest",
        };
        format!("{} ({})", *self as u8, label)
    }
}
