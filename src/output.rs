use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

/// Writes `text` to `{dir}/{title}.txt`, replacing any existing file. The directory must exist.
pub fn write_article(dir: &Path, title: &str, text: &str) -> Result<PathBuf> {
    check_target(dir, title)?;
    let path = article_path(dir, title);
    fs::write(&path, text)
        .with_context(|| format!("Failed to write article to {}", path.display()))?;
    info!(path = %path.display(), bytes = text.len(), "article written");
    Ok(path)
}

pub fn article_path(dir: &Path, title: &str) -> PathBuf {
    dir.join(format!("{title}.txt"))
}

/// Fails when `{title}.txt` cannot be created directly inside `dir`: the title names a path
/// rather than a file, or `dir` is not an existing directory.
pub fn check_target(dir: &Path, title: &str) -> Result<()> {
    if title.trim().is_empty() || title == "." || title == ".." {
        bail!("Article title '{title}' cannot be used as a file name");
    }
    if let Some(bad) = title.chars().find(|ch| matches!(ch, '/' | '\\' | '\0')) {
        bail!("Article title '{title}' contains '{bad}', which cannot appear in a file name");
    }
    if !dir.is_dir() {
        bail!("Output directory {} does not exist", dir.display());
    }
    Ok(())
}
