// ABOUTME: Export surface: clipboard copy and markdown file download

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::concept::ConceptDocument;
use crate::summary;

/// Write the plain-text digest to the system clipboard
pub fn copy_to_clipboard(doc: &ConceptDocument) -> Result<()> {
    let text = summary::plain_text(doc);
    let mut clipboard = arboard::Clipboard::new().context("Failed to open clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to write summary to clipboard")?;
    info!("Copied concept summary to clipboard");
    Ok(())
}

/// Write the markdown rendering into `dir`, named from the title slug.
/// Returns the path of the written file.
pub fn write_markdown(doc: &ConceptDocument, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(summary::export_file_name(&doc.title));
    write_markdown_to(doc, &path)?;
    Ok(path)
}

/// Write the markdown rendering to an explicit path
pub fn write_markdown_to(doc: &ConceptDocument, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create export directory: {}", parent.display())
            })?;
        }
    }
    fs::write(path, summary::markdown(doc))
        .with_context(|| format!("Failed to write export to {}", path.display()))?;
    info!("Exported concept to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_markdown_uses_slug_filename() {
        let dir = TempDir::new().unwrap();
        let mut doc = ConceptDocument::default();
        doc.title = "Ocean Futures".to_string();

        let path = write_markdown(&doc, dir.path()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "ocean-futures-concept.md"
        );
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Museum Genesis Lab: Ocean Futures"));
    }

    #[test]
    fn test_repeated_export_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let doc = ConceptDocument::default();

        let first = write_markdown(&doc, dir.path()).unwrap();
        let second = write_markdown(&doc, dir.path()).unwrap();
        assert_eq!(first, second);
        assert!(first.exists());
    }
}
