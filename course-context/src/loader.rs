//! Context-document loading: one file, or one directory aggregated.
//!
//! Aggregation policy: a file that fails to read is logged and skipped so a
//! single corrupt upload cannot deny service for the whole section; the load
//! fails as a whole only when the directory cannot be listed or nothing
//! readable remains.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{ContextError, MaterialsConfig, Mode};

/// Grounding text resolved for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextDocument {
    /// Which materials category this body came from.
    pub label: &'static str,
    /// Full text the model is restricted to. Never empty.
    pub body: String,
}

/// Filesystem capability used by the loader.
///
/// Injected so tests can simulate unreadable files and empty directories
/// deterministically.
pub trait FileStore: Send + Sync {
    /// Read a file's full text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// List the regular files directly inside `dir`.
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// [`FileStore`] over the real filesystem.
///
/// `list_files` skips non-file entries and sorts the result so aggregation
/// order is stable across runs.
pub struct OsFileStore;

impl FileStore for OsFileStore {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Resolve `mode` to its grounding document.
///
/// # Errors
/// - [`ContextError::Unreadable`] when the designated file/directory cannot
///   be read or listed
/// - [`ContextError::Empty`] when nothing readable produced content
pub fn load_context(
    store: &dyn FileStore,
    cfg: &MaterialsConfig,
    mode: Mode,
) -> Result<ContextDocument, ContextError> {
    match mode {
        Mode::Syllabus => load_file(store, &cfg.syllabus_file, mode.label()),
        Mode::Midterm => load_folder(store, &cfg.midterm_dir, mode.label()),
        Mode::Final => load_folder(store, &cfg.final_dir, mode.label()),
    }
}

fn load_file(
    store: &dyn FileStore,
    path: &Path,
    label: &'static str,
) -> Result<ContextDocument, ContextError> {
    let body = store
        .read_to_string(path)
        .map_err(|source| ContextError::Unreadable { label, source })?;

    if body.trim().is_empty() {
        return Err(ContextError::Empty { label });
    }

    debug!(%label, path = %path.display(), bytes = body.len(), "loaded context file");
    Ok(ContextDocument { label, body })
}

fn load_folder(
    store: &dyn FileStore,
    dir: &Path,
    label: &'static str,
) -> Result<ContextDocument, ContextError> {
    let files = store
        .list_files(dir)
        .map_err(|source| ContextError::Unreadable { label, source })?;

    let mut body = String::new();
    let mut loaded = 0usize;

    for path in &files {
        let content = match store.read_to_string(path) {
            Ok(c) => c,
            Err(err) => {
                // Skip this file instead of failing the whole section.
                warn!(%label, path = %path.display(), %err, "failed to read file, skipping");
                continue;
            }
        };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        body.push_str(&format!("\n\n===== {name} =====\n\n"));
        body.push_str(&content);
        loaded += 1;
    }

    if body.trim().is_empty() {
        return Err(ContextError::Empty { label });
    }

    debug!(%label, dir = %dir.display(), files = loaded, "aggregated context folder");
    Ok(ContextDocument { label, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::io::Write as _;

    /// In-memory store: `Err` entries simulate unreadable files.
    #[derive(Default)]
    struct MemStore {
        files: BTreeMap<PathBuf, Result<String, io::ErrorKind>>,
        missing_dirs: bool,
    }

    impl MemStore {
        fn with(mut self, path: &str, content: Result<&str, io::ErrorKind>) -> Self {
            self.files
                .insert(PathBuf::from(path), content.map(str::to_string));
            self
        }
    }

    impl FileStore for MemStore {
        fn read_to_string(&self, path: &Path) -> io::Result<String> {
            match self.files.get(path) {
                Some(Ok(c)) => Ok(c.clone()),
                Some(Err(kind)) => Err(io::Error::new(*kind, "simulated read failure")),
                None => Err(io::Error::new(io::ErrorKind::NotFound, "no such file")),
            }
        }

        fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
            if self.missing_dirs {
                return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
            }
            Ok(self
                .files
                .keys()
                .filter(|p| p.parent() == Some(dir))
                .cloned()
                .collect())
        }
    }

    fn cfg() -> MaterialsConfig {
        MaterialsConfig {
            syllabus_file: "syllabus.md".into(),
            midterm_dir: "midterm".into(),
            final_dir: "final".into(),
        }
    }

    #[test]
    fn syllabus_loads_single_file() {
        let store = MemStore::default().with("syllabus.md", Ok("Midterm: Oct 26."));
        let doc = load_context(&store, &cfg(), Mode::Syllabus).unwrap();
        assert_eq!(doc.label, "syllabus file");
        assert_eq!(doc.body, "Midterm: Oct 26.");
    }

    #[test]
    fn missing_syllabus_is_unreadable() {
        let store = MemStore::default();
        let err = load_context(&store, &cfg(), Mode::Syllabus).unwrap_err();
        assert!(matches!(err, ContextError::Unreadable { label, .. } if label == "syllabus file"));
    }

    #[test]
    fn whitespace_only_syllabus_is_empty() {
        let store = MemStore::default().with("syllabus.md", Ok("  \n\t "));
        let err = load_context(&store, &cfg(), Mode::Syllabus).unwrap_err();
        assert!(matches!(err, ContextError::Empty { .. }));
    }

    #[test]
    fn folder_aggregates_under_section_markers() {
        let store = MemStore::default()
            .with("final/review.md", Ok("Chapters 1-9."))
            .with("final/schedule.md", Ok("Final: Dec 12."));
        let doc = load_context(&store, &cfg(), Mode::Final).unwrap();
        assert_eq!(doc.label, "final exam materials");
        assert!(doc.body.contains("===== review.md ====="));
        assert!(doc.body.contains("Chapters 1-9."));
        assert!(doc.body.contains("===== schedule.md ====="));
        assert!(doc.body.contains("Final: Dec 12."));
    }

    #[test]
    fn unreadable_file_is_skipped_not_fatal() {
        let store = MemStore::default()
            .with("midterm/a.md", Err(io::ErrorKind::PermissionDenied))
            .with("midterm/b.md", Ok("Practice problems."));
        let doc = load_context(&store, &cfg(), Mode::Midterm).unwrap();
        assert!(doc.body.contains("Practice problems."));
        assert!(!doc.body.contains("===== a.md ====="));
    }

    #[test]
    fn all_files_unreadable_fails_whole_load() {
        let store = MemStore::default()
            .with("midterm/a.md", Err(io::ErrorKind::PermissionDenied))
            .with("midterm/b.md", Err(io::ErrorKind::PermissionDenied));
        let err = load_context(&store, &cfg(), Mode::Midterm).unwrap_err();
        assert!(matches!(err, ContextError::Empty { label } if label == "midterm materials"));
    }

    #[test]
    fn empty_directory_fails_like_missing_directory() {
        let empty = MemStore::default();
        let missing = MemStore {
            missing_dirs: true,
            ..Default::default()
        };
        // Both surface as a content-load failure for the same category.
        let e1 = load_context(&empty, &cfg(), Mode::Final).unwrap_err();
        let e2 = load_context(&missing, &cfg(), Mode::Final).unwrap_err();
        assert_eq!(e1.label(), "final exam materials");
        assert_eq!(e2.label(), "final exam materials");
    }

    #[test]
    fn os_store_lists_only_regular_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        for name in ["b.md", "a.md"] {
            let mut f = std::fs::File::create(dir.path().join(name)).unwrap();
            writeln!(f, "content of {name}").unwrap();
        }

        let files = OsFileStore.list_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.md", "b.md"]);
    }

    #[test]
    fn os_store_aggregates_real_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.md"), "Bring a calculator.").unwrap();
        let cfg = MaterialsConfig {
            syllabus_file: "unused".into(),
            midterm_dir: dir.path().to_path_buf(),
            final_dir: "unused".into(),
        };
        let doc = load_context(&OsFileStore, &cfg, Mode::Midterm).unwrap();
        assert!(doc.body.contains("===== notes.md ====="));
        assert!(doc.body.contains("Bring a calculator."));
    }
}
