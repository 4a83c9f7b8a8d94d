//! String and file system helpers shared across the pipeline.

use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};
use unicode_normalization::UnicodeNormalization;

/// Transliterate accented characters to their closest ASCII equivalent.
///
/// NFKD-decomposes the input and keeps only the ASCII scalar values, so
/// diacritics are stripped (`ç` -> `c`, `á` -> `a`) and characters with no
/// ASCII decomposition are dropped.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(remove_accents("açúcar"), "acucar");
/// ```
pub fn remove_accents(input: &str) -> String {
    input.nfkd().filter(char::is_ascii).collect()
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to at most `max` bytes with an ellipsis and
/// byte count indicator appended. The cut lands on a char boundary, so a
/// multi-byte character straddling `max` is dropped rather than split.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test
/// by creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable
/// (permission denied, read-only filesystem, etc.).
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
