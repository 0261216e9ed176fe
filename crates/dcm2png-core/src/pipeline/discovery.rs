//! File discovery for finding DICOM files in directories.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Discovers DICOM files in directories.
pub struct FileDiscovery {
    extension: String,
}

/// Information about a discovered source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Full path to the file
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
}

impl FileDiscovery {
    /// Create a new file discovery instance matching the given extension
    /// (case-insensitive, leading dot tolerated).
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.trim_start_matches('.').to_lowercase(),
        }
    }

    /// Discover all matching files at a path.
    ///
    /// If path is a file, returns it if it matches the extension.
    /// If path is a directory, recursively finds all matching files.
    pub fn discover(&self, path: &Path) -> Vec<SourceFile> {
        if path.is_file() {
            if self.matches(path) {
                if let Ok(meta) = std::fs::metadata(path) {
                    return vec![SourceFile {
                        path: path.to_path_buf(),
                        size: meta.len(),
                    }];
                }
            }
            return vec![];
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let entry_path = entry.path();
            if entry_path.is_file() && self.matches(entry_path) {
                if let Ok(meta) = entry.metadata() {
                    files.push(SourceFile {
                        path: entry_path.to_path_buf(),
                        size: meta.len(),
                    });
                }
            }
        }

        // Sort by path so enumeration order is deterministic across runs
        files.sort_by(|a, b| a.path.cmp(&b.path));
        files
    }

    /// Check if a file has the expected extension.
    fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase() == self.extension)
            .unwrap_or(false)
    }

    /// Get total size of all discovered files.
    pub fn total_size(files: &[SourceFile]) -> u64 {
        files.iter().map(|f| f.size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_extension_case_insensitively() {
        let discovery = FileDiscovery::new("dcm");

        assert!(discovery.matches(Path::new("scan.dcm")));
        assert!(discovery.matches(Path::new("scan.DCM")));
        assert!(discovery.matches(Path::new("scan.Dcm")));
        assert!(!discovery.matches(Path::new("scan.png")));
        assert!(!discovery.matches(Path::new("scan")));
        assert!(!discovery.matches(Path::new("dcm")));
    }

    #[test]
    fn test_new_tolerates_leading_dot() {
        let discovery = FileDiscovery::new(".dcm");
        assert!(discovery.matches(Path::new("scan.dcm")));
    }

    #[test]
    fn test_discover_recurses_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("series1");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(dir.path().join("b.dcm"), b"x").unwrap();
        std::fs::write(nested.join("a.dcm"), b"x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let discovery = FileDiscovery::new("dcm");
        let files = discovery.discover(dir.path());

        assert_eq!(files.len(), 2);
        // Sorted by full path: <dir>/b.dcm before <dir>/series1/a.dcm
        assert!(files[0].path.ends_with("b.dcm"));
        assert!(files[1].path.ends_with("series1/a.dcm"));
    }

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let discovery = FileDiscovery::new("dcm");
        assert!(discovery.discover(dir.path()).is_empty());
    }

    #[test]
    fn test_discover_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.dcm");
        std::fs::write(&path, b"x").unwrap();

        let discovery = FileDiscovery::new("dcm");
        let files = discovery.discover(&path);
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, path);
    }

    #[test]
    fn test_total_size() {
        let files = vec![
            SourceFile {
                path: PathBuf::from("a.dcm"),
                size: 100,
            },
            SourceFile {
                path: PathBuf::from("b.dcm"),
                size: 200,
            },
        ];

        assert_eq!(FileDiscovery::total_size(&files), 300);
    }
}
