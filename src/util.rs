use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::Config;

pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Whether a path looks like a route-declaration file: it carries the
/// configured source extension and lives below a directory whose name is the
/// configured routes directory's final segment.
pub fn is_route_file(path: &Path) -> bool {
    let config = Config::get();
    let Some(routes_segment) = Path::new(&config.routes_dir).file_name() else {
        return false;
    };
    if path.extension().and_then(|ext| ext.to_str()) != Some(config.source_ext.as_str()) {
        return false;
    }
    path.parent()
        .map(|dir| dir.components().any(|comp| comp.as_os_str() == routes_segment))
        .unwrap_or(false)
}

/// Return the 1-based `line` of `content`, or `None` when out of range.
pub fn line_at(content: &str, line: usize) -> Option<&str> {
    if line == 0 {
        return None;
    }
    content.lines().nth(line - 1)
}
