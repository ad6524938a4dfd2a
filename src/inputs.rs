use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::ConfigError;
use crate::events::{Event, EventSink};

/// Where the files to scan come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSelection {
    File(PathBuf),
    Directory(PathBuf),
}

impl InputSelection {
    /// Exactly one of `file` or `directory` must be given.
    pub fn from_options(
        file: Option<PathBuf>,
        directory: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        match (file, directory) {
            (Some(file), None) => Ok(Self::File(file)),
            (None, Some(directory)) => Ok(Self::Directory(directory)),
            (None, None) => Err(ConfigError::NoInput),
            (Some(_), Some(_)) => Err(ConfigError::ConflictingInputs),
        }
    }
}

/// Ordered list of files for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    paths: Vec<PathBuf>,
}

impl FileSet {
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Checks the selection exists on disk and lists the files to scan.
///
/// Directories are walked recursively with entries sorted by name, so the
/// order is stable between runs. Every regular file is included regardless
/// of extension.
pub fn resolve_file_set(
    selection: &InputSelection,
    sink: &mut dyn EventSink,
) -> Result<FileSet, ConfigError> {
    match selection {
        InputSelection::File(path) => {
            if !path.is_file() {
                sink.emit(&Event::InputMissing { kind: "file", path });
                return Err(if path.exists() {
                    ConfigError::NotAFile(path.clone())
                } else {
                    ConfigError::FileNotFound(path.clone())
                });
            }
            Ok(FileSet {
                paths: vec![path.clone()],
            })
        }
        InputSelection::Directory(root) => {
            if !root.is_dir() {
                sink.emit(&Event::InputMissing {
                    kind: "directory",
                    path: root,
                });
                return Err(ConfigError::DirectoryNotFound(root.clone()));
            }
            let paths = list_files(root, sink);
            sink.emit(&Event::FilesResolved {
                root,
                file_count: paths.len(),
            });
            Ok(FileSet { paths })
        }
    }
}

fn list_files(root: &Path, sink: &mut dyn EventSink) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() => paths.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => sink.emit(&Event::EntrySkipped {
                path: e.path(),
                reason: e.to_string(),
            }),
        }
    }

    paths
}
