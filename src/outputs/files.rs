//! File emission: naming, writing, deleting.
//!
//! The file stem comes from the rendered document's first level-1 heading.
//! Two articles with the same title produce the same stem and the later
//! write wins; there is no collision handling.

use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

use crate::utils::remove_accents;

/// Derive a filesystem-safe stem from a rendered document.
///
/// Takes the text between the first level-1 heading markers (`<h1>…</h1>`
/// for HTML, a leading `# ` line for Markdown), replaces spaces with
/// underscores, drops commas, colons and apostrophes, lowercases, and
/// strips accents to ASCII. Returns `None` when the document carries no
/// level-1 heading.
pub fn derive_file_name(rendered: &str) -> Option<String> {
    let heading = extract_h1(rendered)?;
    let stem = heading
        .replace(' ', "_")
        .replace([',', ':', '\''], "")
        .to_lowercase();
    Some(remove_accents(&stem))
}

fn extract_h1(rendered: &str) -> Option<&str> {
    if let Some(start) = rendered.find("<h1>") {
        let rest = &rendered[start + "<h1>".len()..];
        let end = rest.find("</h1>")?;
        return Some(&rest[..end]);
    }
    rendered
        .lines()
        .find_map(|line| line.strip_prefix("# "))
}

/// Write a document to `{dir}/{stem}.{ext}`, overwriting any existing file.
///
/// I/O errors here are fatal to the pipeline and propagate to the caller.
#[instrument(level = "info", skip(content), fields(%stem, %ext))]
pub async fn save(
    dir: &str,
    stem: &str,
    ext: &str,
    content: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = Path::new(dir).join(format!("{stem}.{ext}"));
    fs::write(&path, content).await?;
    info!(path = %path.display(), "Wrote article file");
    Ok(path)
}

/// Remove an emitted file.
///
/// Deleting a file that does not exist is an error, not a no-op; the
/// `NotFound` I/O error propagates.
#[instrument(level = "info", fields(path = %path.display()))]
pub async fn delete(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::remove_file(path).await?;
    info!("Deleted article file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_file_name_html() {
        assert_eq!(
            derive_file_name("<h1>Café com Açúcar, ok:</h1>"),
            Some("cafe_com_acucar_ok".to_string())
        );
    }

    #[test]
    fn test_derive_file_name_uses_first_h1() {
        let doc = "<style>p {}</style>\n\n<h1>Primeiro</h1>\n\n<h1>Segundo</h1>";
        assert_eq!(derive_file_name(doc), Some("primeiro".to_string()));
    }

    #[test]
    fn test_derive_file_name_markdown() {
        let doc = "# Café com Açúcar, ok:\n\n### desc\n\ncorpo";
        assert_eq!(derive_file_name(doc), Some("cafe_com_acucar_ok".to_string()));
    }

    #[test]
    fn test_derive_file_name_apostrophes_dropped() {
        assert_eq!(
            derive_file_name("<h1>D'Agua: a volta</h1>"),
            Some("dagua_a_volta".to_string())
        );
    }

    #[test]
    fn test_derive_file_name_without_heading() {
        assert_eq!(derive_file_name("<p>sem título</p>"), None);
        assert_eq!(derive_file_name(""), None);
    }

    #[tokio::test]
    async fn test_save_writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();

        let path = save(dir_str, "jogo", "html", "<h1>v1</h1>").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<h1>v1</h1>");

        let path = save(dir_str, "jogo", "html", "<h1>v2</h1>").await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<h1>v2</h1>");
    }

    #[tokio::test]
    async fn test_save_fails_on_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let missing = missing.to_str().unwrap();
        assert!(save(missing, "jogo", "html", "x").await.is_err());
    }

    #[tokio::test]
    async fn test_delete_removes_file_and_errors_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();

        let path = save(dir_str, "jogo", "md", "# t").await.unwrap();
        delete(&path).await.unwrap();
        assert!(!path.exists());
        assert!(delete(&path).await.is_err());
    }
}
