use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Business category the uploaded document is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentCategory {
    Invoice,
    Warranty,
    ExtendedWarranty,
}

impl DocumentCategory {
    pub const ALL: [DocumentCategory; 3] = [
        DocumentCategory::Invoice,
        DocumentCategory::Warranty,
        DocumentCategory::ExtendedWarranty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentCategory::Invoice => "Invoice",
            DocumentCategory::Warranty => "Warranty",
            DocumentCategory::ExtendedWarranty => "Extended Warranty",
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "document category",
                value: s.to_string(),
            })
    }
}

/// Coarse file classification. Declared by the user, derived from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Image,
}

impl FileKind {
    pub const ALL: [FileKind; 2] = [FileKind::Pdf, FileKind::Image];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Pdf => "PDF",
            FileKind::Image => "Image",
        }
    }

    /// Classifies an already allow-listed, lowercased extension.
    pub fn from_extension(ext: &str) -> Self {
        if ext == "pdf" {
            FileKind::Pdf
        } else {
            FileKind::Image
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Case-sensitive on purpose: "pdf" is not a declared kind.
impl FromStr for FileKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "file kind",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub category: DocumentCategory,
    pub expected: FileKind,
    pub actual: FileKind,
    pub file_name: String,
    pub is_verified: bool,
}

impl VerificationOutcome {
    pub fn new(
        category: DocumentCategory,
        expected: FileKind,
        actual: FileKind,
        file_name: String,
    ) -> Self {
        Self {
            category,
            expected,
            actual,
            file_name,
            is_verified: expected.as_str() == actual.as_str(),
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_verified {
            "VERIFIED"
        } else {
            "NOT VERIFIED"
        }
    }
}
