//! Directory scanning.
//!
//! Lists the regular files of one folder, drops the folder settings file and
//! files whose extension is not wanted, and hands the remaining names to the
//! analyzer.

use std::fs;
use std::path::Path;

use crate::config::FOLDER_CONFIG_NAME;
use crate::error::{FramecheckError, Result};
use crate::sequence::{analyze, AnalyzeOptions, Grouping, ScanResult};

/// Image formats accepted when no explicit list is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["exr", "png", "jpg", "jpeg", "tif", "tiff", "bmp"];

/// Which file extensions take part in a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionFilter {
    /// Every file is considered.
    Any,
    /// Only these extensions (lowercase, without the dot).
    Only(Vec<String>),
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::only(DEFAULT_EXTENSIONS)
    }
}

impl ExtensionFilter {
    /// Build a filter from extension names. Dots and case are normalized.
    ///
    /// An empty list means every file is considered.
    pub fn only<S: AsRef<str>>(extensions: &[S]) -> Self {
        let normalized: Vec<String> = extensions
            .iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        if normalized.is_empty() {
            Self::Any
        } else {
            Self::Only(normalized)
        }
    }

    /// Check whether a filename passes the filter.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Only(allowed) => Path::new(name)
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| allowed.iter().any(|a| a.eq_ignore_ascii_case(e)))
                .unwrap_or(false),
        }
    }
}

/// Options for [`scan_directory`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOptions {
    pub extensions: ExtensionFilter,
    pub grouping: Grouping,
}

/// List the names of the regular files in a directory, sorted.
///
/// Symlinks are followed. Names that are not valid UTF-8 are skipped.
///
/// # Errors
///
/// Returns `DirectoryUnreadable` if the path does not exist, is not a
/// directory, or cannot be listed.
pub fn list_file_names(dir: &Path) -> Result<Vec<String>> {
    let unreadable = |message: String| FramecheckError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        message,
    };

    if !dir.is_dir() {
        let message = if dir.exists() {
            "not a directory".to_string()
        } else {
            "no such directory".to_string()
        };
        return Err(unreadable(message));
    }

    let entries = fs::read_dir(dir).map_err(|e| unreadable(e.to_string()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| unreadable(e.to_string()))?;
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::warn!("Skipping non UTF-8 file name {:?}", raw),
        }
    }
    names.sort();

    Ok(names)
}

/// Scan a directory for a frame sequence.
///
/// Each call re-reads the directory; nothing is cached between scans.
///
/// # Example
///
/// ```
/// use framecheck::scan::{scan_directory, ScanOptions};
/// use std::fs;
/// use tempfile::TempDir;
///
/// let temp = TempDir::new().unwrap();
/// for n in [1, 2, 4] {
///     fs::write(temp.path().join(format!("shot_{:03}.png", n)), b"").unwrap();
/// }
///
/// let result = scan_directory(temp.path(), &ScanOptions::default()).unwrap();
/// assert_eq!(result.missing_frames(), &[3]);
/// ```
pub fn scan_directory(dir: &Path, options: &ScanOptions) -> Result<ScanResult> {
    let names = list_file_names(dir)?;
    let total = names.len();
    let wanted: Vec<String> = names
        .into_iter()
        .filter(|n| n != FOLDER_CONFIG_NAME && options.extensions.matches(n))
        .collect();

    tracing::debug!(
        "Scanning {}: {} files, {} after extension filter",
        dir.display(),
        total,
        wanted.len()
    );

    let analyze_options = AnalyzeOptions {
        grouping: options.grouping,
    };
    Ok(analyze(&wanted, &analyze_options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, names: &[&str]) {
        for name in names {
            fs::write(dir.join(name), b"").unwrap();
        }
    }

    #[test]
    fn default_filter_accepts_image_formats() {
        let filter = ExtensionFilter::default();
        assert!(filter.matches("a_0001.exr"));
        assert!(filter.matches("a_0001.PNG"));
        assert!(filter.matches("a_0001.jpeg"));
        assert!(!filter.matches("a_0001.txt"));
        assert!(!filter.matches("a_0001"));
    }

    #[test]
    fn only_normalizes_dots_and_case() {
        let filter = ExtensionFilter::only(&[".PNG", " exr "]);
        assert_eq!(
            filter,
            ExtensionFilter::Only(vec!["png".to_string(), "exr".to_string()])
        );
    }

    #[test]
    fn empty_list_means_any() {
        let empty: [&str; 0] = [];
        assert_eq!(ExtensionFilter::only(&empty), ExtensionFilter::Any);
        assert!(ExtensionFilter::Any.matches("whatever.xyz"));
    }

    #[test]
    fn lists_only_files_sorted() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), &["b_2.png", "a_1.png"]);
        fs::create_dir(temp.path().join("sub_3.png")).unwrap();

        let names = list_file_names(temp.path()).unwrap();
        assert_eq!(names, vec!["a_1.png".to_string(), "b_2.png".to_string()]);
    }

    #[test]
    fn missing_directory_is_unreadable() {
        let temp = TempDir::new().unwrap();
        let err = list_file_names(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, FramecheckError::DirectoryUnreadable { .. }));
        assert!(err.to_string().contains("no such directory"));
    }

    #[test]
    fn file_path_is_unreadable() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), &["a_1.png"]);
        let err = scan_directory(&temp.path().join("a_1.png"), &ScanOptions::default())
            .unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn scan_finds_gap() {
        let temp = TempDir::new().unwrap();
        touch(
            temp.path(),
            &["shot_001.png", "shot_002.png", "shot_004.png"],
        );

        let r = scan_directory(temp.path(), &ScanOptions::default()).unwrap();
        assert_eq!(r.prefix(), Some("shot_"));
        assert_eq!(r.missing_frames(), &[3]);
    }

    #[test]
    fn filtered_files_are_not_unrecognized() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), &["r_1.png", "r_2.png", "render.log", "r_3.txt"]);

        let r = scan_directory(temp.path(), &ScanOptions::default()).unwrap();
        assert_eq!(r.frame_count(), 2);
        assert!(r.unrecognized().is_empty());
    }

    #[test]
    fn any_filter_reports_other_files() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), &["r_1.png", "r_2.png", "render.log"]);

        let options = ScanOptions {
            extensions: ExtensionFilter::Any,
            ..Default::default()
        };
        let r = scan_directory(temp.path(), &options).unwrap();
        assert_eq!(r.unrecognized(), &["render.log".to_string()]);
    }

    #[test]
    fn folder_settings_file_is_not_scanned() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), &["r_1.png", FOLDER_CONFIG_NAME]);

        let options = ScanOptions {
            extensions: ExtensionFilter::Any,
            ..Default::default()
        };
        let r = scan_directory(temp.path(), &options).unwrap();
        assert!(r.unrecognized().is_empty());
    }

    #[test]
    fn empty_directory_is_empty_result() {
        let temp = TempDir::new().unwrap();
        let r = scan_directory(temp.path(), &ScanOptions::default()).unwrap();
        assert!(r.is_empty());
    }

    #[test]
    fn rescanning_is_idempotent() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), &["x_1.tga", "x_2.tga", "y_1.tga"]);
        let options = ScanOptions {
            extensions: ExtensionFilter::only(&["tga"]),
            ..Default::default()
        };

        let first = scan_directory(temp.path(), &options).unwrap();
        let second = scan_directory(temp.path(), &options).unwrap();
        assert_eq!(first, second);
    }
}
