use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub upload_dir: PathBuf,
    pub allowed_extensions: &'static [&'static str],
    pub max_file_size_bytes: u64,
    pub max_field_bytes: usize,
    pub max_file_name_len: usize,
}

impl UploadPolicy {
    pub const DEFAULT_UPLOAD_DIR: &'static str = "uploads";
    pub const DEFAULT_ALLOWED_EXTENSIONS: &'static [&'static str] =
        &["pdf", "png", "jpg", "jpeg", "gif"];
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 16 * 1024 * 1024; // 16MB
    /// Text parts only carry a short enum label.
    pub const DEFAULT_MAX_FIELD_BYTES: usize = 1024;
    /// NAME_MAX on common filesystems.
    pub const DEFAULT_MAX_FILE_NAME_LEN: usize = 255;

    /// Load policy with `upload_dir` from `UPLOAD_DIR`, fallback to "uploads".
    ///
    /// `MAX_UPLOAD_BYTES` overrides the file size limit; unparsable values are ignored.
    pub fn from_env() -> Self {
        let upload_dir = std::env::var("UPLOAD_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_UPLOAD_DIR.to_string());

        let max_file_size_bytes = std::env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(Self::DEFAULT_MAX_FILE_SIZE_BYTES);

        Self {
            max_file_size_bytes,
            ..Self::new(upload_dir)
        }
    }

    /// Handy for unit tests or custom wiring (no env reads).
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            allowed_extensions: Self::DEFAULT_ALLOWED_EXTENSIONS,
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            max_field_bytes: Self::DEFAULT_MAX_FIELD_BYTES,
            max_file_name_len: Self::DEFAULT_MAX_FILE_NAME_LEN,
        }
    }

    /// Returns the lowercased suffix after the last dot when it is allow-listed.
    pub fn allowed_extension(&self, file_name: &str) -> Option<String> {
        let (_, ext) = file_name.rsplit_once('.')?;
        let ext = ext.to_lowercase();

        self.allowed_extensions
            .contains(&ext.as_str())
            .then_some(ext)
    }

    /// Client-side hint for the file input, e.g. `.pdf,.png`.
    pub fn accept_attribute(&self) -> String {
        self.allowed_extensions
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}
