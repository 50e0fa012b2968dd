//! Filesystem document source
//!
//! Search order, which is also merge order:
//! 1. For each module path, every module's `SIMP/compliance_profiles/` and
//!    `data/compliance_profiles/`, modules in name order
//! 2. The compliance data directory
//! 3. Extra paths, in the order given
//!
//! Within a root, files load in sorted path order. Files that fail to read or
//! parse are logged and skipped.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::ComplianceDocument;
use crate::domain::ports::{DocumentLoadError, DocumentSource};

use super::parse::{is_document_file, parse_document};

/// Environment variable overriding the compliance data directory
pub const COMPLIANCE_DATA_DIR_ENV: &str = "COMPLIANCE_MARKUP_COMPLIANCE_DATA_DIR";

/// Per-module directories that may hold compliance documents
pub const PROFILE_SUBDIRS: [&str; 2] = ["SIMP/compliance_profiles", "data/compliance_profiles"];

#[derive(Debug, Clone, Default)]
pub struct FsDocumentSource {
    module_paths: Vec<PathBuf>,
    compliance_data_dir: Option<PathBuf>,
    extra_paths: Vec<PathBuf>,
}

impl FsDocumentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.module_paths = paths;
        self
    }

    pub fn with_compliance_data_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.compliance_data_dir = dir;
        self
    }

    pub fn with_extra_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.extra_paths = paths;
        self
    }

    /// Every directory or file searched, in merge order
    pub fn search_roots(&self) -> Result<Vec<PathBuf>, DocumentLoadError> {
        let mut roots = Vec::new();

        for module_path in &self.module_paths {
            for module_dir in sorted_subdirs(module_path)? {
                for subdir in PROFILE_SUBDIRS {
                    let root = module_dir.join(subdir);
                    if root.is_dir() {
                        roots.push(root);
                    }
                }
            }
        }

        if let Some(dir) = &self.compliance_data_dir {
            roots.push(dir.clone());
        }
        roots.extend(self.extra_paths.iter().cloned());

        Ok(roots)
    }
}

impl DocumentSource for FsDocumentSource {
    fn documents(&self) -> Result<Vec<ComplianceDocument>, DocumentLoadError> {
        let mut documents = Vec::new();

        for root in self.search_roots()? {
            if !root.exists() {
                tracing::warn!(path = %root.display(), "compliance data path not found");
                continue;
            }

            let mut files = Vec::new();
            collect_files(&root, &mut files);
            files.sort();

            for file in files {
                match parse_document(&file) {
                    Ok(document) => documents.push(document),
                    Err(e) => {
                        tracing::warn!(path = %file.display(), error = %e, "skipping compliance document");
                    }
                }
            }
        }

        tracing::debug!(count = documents.len(), "discovered compliance documents");
        Ok(documents)
    }
}

fn sorted_subdirs(path: &Path) -> Result<Vec<PathBuf>, DocumentLoadError> {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "module path not found");
            return Ok(Vec::new());
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            return Err(DocumentLoadError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(DocumentLoadError::LoadFailed {
                message: format!("{}: {}", path.display(), e),
            });
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|p| p.is_dir() && !is_hidden(p))
        .collect();
    dirs.sort();
    Ok(dirs)
}

/// A root may be a single file or a directory tree
fn collect_files(path: &Path, files: &mut Vec<PathBuf>) {
    if path.is_file() {
        if is_document_file(path) {
            files.push(path.to_path_buf());
        }
        return;
    }

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "cannot read compliance directory");
            return;
        }
    };

    for entry in entries.filter_map(Result::ok) {
        let child = entry.path();
        if child.is_dir() {
            if !is_hidden(&child) {
                collect_files(&child, files);
            }
        } else if is_document_file(&child) {
            files.push(child);
        }
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn discovers_module_and_data_dir_documents_in_order() {
        let dir = tempdir().unwrap();
        let modules = dir.path().join("modules");
        write(
            &modules.join("zeta/SIMP/compliance_profiles/z.yaml"),
            "version: 2.0.0\nprofiles: {z: {}}\n",
        );
        write(
            &modules.join("alpha/data/compliance_profiles/nested/a.json"),
            r#"{"version": "2.0.0", "profiles": {"a": {}}}"#,
        );
        let data_dir = dir.path().join("data");
        write(&data_dir.join("local.yml"), "version: 2.0.0\nprofiles: {local: {}}\n");

        let source = FsDocumentSource::new()
            .with_module_paths(vec![modules])
            .with_compliance_data_dir(Some(data_dir));
        let docs = source.documents().unwrap();

        let ids: Vec<&str> = docs
            .iter()
            .map(|d| d.source_id().rsplit('/').next().unwrap())
            .collect();
        assert_eq!(ids, vec!["a.json", "z.yaml", "local.yml"]);
    }

    #[test]
    fn broken_and_foreign_files_are_skipped() {
        let dir = tempdir().unwrap();
        write(&dir.path().join("good.yaml"), "version: 2.0.0\n");
        write(&dir.path().join("bad.yaml"), "version: [unclosed\n");
        write(&dir.path().join("README.md"), "# docs\n");
        write(&dir.path().join(".hidden/skip.yaml"), "version: 2.0.0\n");

        let source = FsDocumentSource::new().with_extra_paths(vec![dir.path().to_path_buf()]);
        let docs = source.documents().unwrap();

        assert_eq!(docs.len(), 1);
        assert!(docs[0].source_id().ends_with("good.yaml"));
    }

    #[test]
    fn missing_roots_are_not_errors() {
        let dir = tempdir().unwrap();
        let source = FsDocumentSource::new()
            .with_module_paths(vec![dir.path().join("no-modules")])
            .with_compliance_data_dir(Some(dir.path().join("no-data")));
        assert!(source.documents().unwrap().is_empty());
    }

    #[test]
    fn extra_path_may_be_a_single_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("one.json");
        write(&file, r#"{"version": "2.0.0"}"#);
        let source = FsDocumentSource::new().with_extra_paths(vec![file]);
        assert_eq!(source.documents().unwrap().len(), 1);
    }
}
