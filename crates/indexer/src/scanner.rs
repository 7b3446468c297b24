use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Which files an index build considers.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory names skipped wherever they occur (build artifacts,
    /// dependency caches, VCS metadata, generated docs)
    pub excluded_dirs: Vec<String>,

    /// Extension allow-list; files with any other extension are ignored
    pub extensions: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            excluded_dirs: EXCLUDED_DIRS.iter().map(|s| (*s).to_string()).collect(),
            extensions: SOURCE_EXTENSIONS.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Scanner for finding indexable source files under a root.
///
/// The walk is best-effort: unreadable directories and broken symlinks are
/// logged and skipped, and whatever could be enumerated is returned. Output
/// order is stable within one run but otherwise not meaningful.
pub struct FileScanner {
    root: PathBuf,
    options: ScanOptions,
}

impl FileScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_options(root, ScanOptions::default())
    }

    pub fn with_options(root: impl AsRef<Path>, options: ScanOptions) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            options,
        }
    }

    /// Scan the root for candidate files
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let excluded = self.options.excluded_dirs.clone();
        let mut builder = WalkBuilder::new(&self.root);
        // Exclusion is purely by directory name; gitignore and hidden-file
        // heuristics are not part of the contract.
        builder.standard_filters(false);
        builder.filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            !(is_dir && Self::name_matches(entry.path(), &excluded))
        });

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    if !file_type.is_file() {
                        continue;
                    }

                    let path = entry.path();
                    if self.is_source_file(path) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        log::info!("Found {} source files", files.len());
        files
    }

    fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .is_some_and(|ext| {
                self.options
                    .extensions
                    .iter()
                    .any(|candidate| candidate == &ext)
            })
    }

    fn name_matches(path: &Path, excluded: &[String]) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| excluded.iter().any(|candidate| candidate == name))
    }
}

const EXCLUDED_DIRS: &[&str] = &[
    // VCS / tooling
    ".git",
    // caches / builds
    "node_modules",
    "dist",
    "build",
    ".next",
    ".storybook",
    "coverage",
    "target",
    "__pycache__",
];

const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "rs", "py", "go", "java"];
