use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Sentinel value emitted when a declared controller has no matching file.
pub const NOT_FOUND: &str = "not found";

/// Outcome of resolving a controller name against the controllers subtree.
///
/// `NotFound` means resolution was attempted and came up empty, which is a
/// valid result and never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerFile {
    Found(PathBuf),
    NotFound,
}

impl ControllerFile {
    pub fn is_found(&self) -> bool {
        matches!(self, ControllerFile::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ControllerFile::Found(path) => Some(path),
            ControllerFile::NotFound => None,
        }
    }
}

impl Serialize for ControllerFile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ControllerFile::Found(path) => serializer.serialize_str(&path.to_string_lossy()),
            ControllerFile::NotFound => serializer.serialize_str(NOT_FOUND),
        }
    }
}

/// One resolved route declaration. Constructed fresh on every scan, never
/// mutated after construction.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    /// Declared alias when a `->name(...)` binding is present, otherwise the
    /// literal route path.
    pub route_name: String,
    pub controller_name: String,
    pub method_name: String,
    pub route_file_path: PathBuf,
    pub controller_file_path: ControllerFile,
    /// 1-based line of the method definition. Absent whenever the controller
    /// file did not resolve, was unreadable, or contains no matching method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_method_line: Option<usize>,
}

/// Where to move the cursor for a single-line lookup.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub file_path: PathBuf,
    /// 1-based, as printed for humans.
    pub line: usize,
}

impl NavigationTarget {
    /// 0-based counterpart of `line`, for editor cursor placement.
    pub fn editor_line(&self) -> usize {
        self.line - 1
    }
}

/// Outcome of a single-line lookup. `NoMatch` is returned before any
/// filesystem work happens; the two miss variants carry what the caller
/// needs to word its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineResolution {
    NoMatch,
    ControllerNotFound {
        controller_name: String,
    },
    MethodNotFound {
        controller_name: String,
        method_name: String,
        controller_file_path: PathBuf,
    },
    Target(NavigationTarget),
}
