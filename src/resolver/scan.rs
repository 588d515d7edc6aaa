use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// List every file with the given extension (no dot) below `root`, hidden
/// files included, no ignore-file semantics. Returns a newly built list per
/// call, sorted lexicographically by full path so that first-match-wins
/// lookups downstream are deterministic.
pub fn locate_files(root: &Path, ext: &str) -> Result<Vec<PathBuf>> {
    // A missing or unreadable root is an error, never an empty result.
    fs::read_dir(root).with_context(|| format!("read directory {}", root.display()))?;

    let walker = WalkBuilder::new(root)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .hidden(false)
        .follow_links(false)
        .build();

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(value) => value,
            Err(err) => {
                eprintln!("walk error: {err}");
                continue;
            }
        };
        if !entry.file_type().map(|ft| ft.is_file()).unwrap_or(false) {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(ext) {
            continue;
        }
        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}
