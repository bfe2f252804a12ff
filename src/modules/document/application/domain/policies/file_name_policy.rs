//! Turns an untrusted client filename into a safe basename for local storage.
//!
//! Rules, applied in order:
//! - `/` and `\` become spaces, so directory components collapse into the name
//! - NFKD decomposition, then non-ASCII characters are dropped (`é` keeps its `e`)
//! - whitespace runs become a single `_`
//! - anything outside `[A-Za-z0-9_.-]` is dropped
//! - leading and trailing `.` / `_` are trimmed
//!
//! The result never contains a path separator and never starts with a dot,
//! so it cannot address anything outside the directory it is joined onto.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("file name pattern is valid"));

const FALLBACK_STEM: &str = "upload";

pub fn sanitize_file_name(file_name: &str) -> String {
    let ascii: String = file_name
        .nfkd()
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .filter(char::is_ascii)
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let stripped = UNSAFE_CHARS.replace_all(&joined, "");

    stripped.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Sanitized name that is guaranteed to keep its validated extension and to
/// fit in `max_len` bytes.
///
/// Names like `.png` or `日本.pdf` sanitize to a bare `png` / `pdf`; those, and
/// names that sanitize to nothing, are stored as `upload.<ext>` instead. Long
/// names lose the end of their stem, never the extension.
pub fn storage_file_name(file_name: &str, ext: &str, max_len: usize) -> String {
    let sanitized = sanitize_file_name(file_name);
    let suffix_len = ext.len() + 1;

    // Sanitized names are pure ASCII, so byte offsets are char boundaries.
    let suffix = format!(".{ext}");
    let (stem, suffix) = match sanitized.len().checked_sub(suffix_len) {
        Some(split) if split > 0 && sanitized[split..].eq_ignore_ascii_case(&suffix) => {
            (&sanitized[..split], &sanitized[split..])
        }
        _ => (FALLBACK_STEM, suffix.as_str()),
    };

    let budget = max_len.saturating_sub(suffix_len);
    let stem = stem[..stem.len().min(budget)].trim_end_matches(['.', '_']);
    let stem = if stem.is_empty() { FALLBACK_STEM } else { stem };

    format!("{stem}{suffix}")
}
