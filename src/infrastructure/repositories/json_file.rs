//! JSON Directory Repository
//!
//! Persists the employee directory as a single JSON document. Reads take a
//! shared advisory lock and writes an exclusive one, both on a sibling
//! `.lock` file, so several `roster` processes can share a directory.

use std::fs;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::document::DirectoryDocument;
use crate::domain::entities::{Compensation, Employee};
use crate::domain::ports::{CompensationRepository, EmployeeRepository, EmployeeStore, StoreError};
use crate::domain::value_objects::EmployeeId;

/// Directory stored as one JSON file.
///
/// Nothing is cached between calls: every lookup re-reads and re-parses the
/// whole document, so resolving a reporting structure over N employees reads
/// the file N + 1 times.
pub struct JsonFileDirectory {
    path: PathBuf,
}

impl JsonFileDirectory {
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `path` with `suffix` appended to its full file name, so the sibling
    /// never collides with the data file whatever its extension.
    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn lock_path(&self) -> PathBuf {
        self.sibling(".lock")
    }

    fn open_lock(&self) -> Result<fs::File, StoreError> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(access)?;
        }
        fs::OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(access)
    }

    fn load(&self) -> Result<DirectoryDocument, StoreError> {
        // Reads of a directory that was never written leave nothing on disk.
        if !self.path.exists() {
            return Ok(DirectoryDocument::default());
        }

        let lock_file = self.open_lock()?;
        FileExt::lock_shared(&lock_file).map_err(access)?;
        let result = self.load_from_disk();
        let _ = FileExt::unlock(&lock_file);
        result
    }

    /// Load, apply `change`, and save under one exclusive lock.
    fn update<T>(
        &self,
        change: impl FnOnce(&mut DirectoryDocument) -> T,
    ) -> Result<T, StoreError> {
        let lock_file = self.open_lock()?;
        FileExt::lock_exclusive(&lock_file).map_err(access)?;

        let result = self.load_from_disk().and_then(|mut document| {
            let value = change(&mut document);
            self.save_to_disk(&document)?;
            Ok(value)
        });

        let _ = FileExt::unlock(&lock_file);
        result
    }

    fn load_from_disk(&self) -> Result<DirectoryDocument, StoreError> {
        if !self.path.exists() {
            return Ok(DirectoryDocument::default());
        }

        let content = fs::read_to_string(&self.path).map_err(access)?;
        let document: DirectoryDocument =
            serde_json::from_str(&content).map_err(|e| StoreError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            path = %self.path.display(),
            employees = document.employees.len(),
            compensations = document.compensations.len(),
            "loaded directory"
        );
        Ok(document)
    }

    fn save_to_disk(&self, document: &DirectoryDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(access)?;
        }

        let content =
            serde_json::to_string_pretty(document).map_err(|e| StoreError::Serialization {
                message: e.to_string(),
            })?;

        // Write beside the target and rename so readers never see a torn file.
        let tmp_path = self.sibling(".tmp");
        fs::write(&tmp_path, content).map_err(access)?;
        fs::rename(&tmp_path, &self.path).map_err(access)?;

        tracing::debug!(path = %self.path.display(), "saved directory");
        Ok(())
    }
}

fn access(e: std::io::Error) -> StoreError {
    StoreError::Access {
        message: e.to_string(),
    }
}

impl EmployeeStore for JsonFileDirectory {
    fn lookup_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, StoreError> {
        Ok(self.load()?.find(id).cloned())
    }
}

impl EmployeeRepository for JsonFileDirectory {
    fn insert_new(&self, employee: Employee) -> Result<bool, StoreError> {
        self.update(|document| document.insert_new(employee))
    }

    fn replace(&self, employee: Employee) -> Result<bool, StoreError> {
        self.update(|document| document.replace(employee))
    }

    fn save_all(&self, employees: Vec<Employee>) -> Result<usize, StoreError> {
        self.update(|document| {
            employees
                .into_iter()
                .map(|e| document.upsert(e))
                .filter(|replaced| *replaced)
                .count()
        })
    }
}

impl CompensationRepository for JsonFileDirectory {
    fn append(&self, compensation: Compensation) -> Result<(), StoreError> {
        self.update(|document| document.compensations.push(compensation))
    }

    fn list_for(&self, id: &EmployeeId) -> Result<Vec<Compensation>, StoreError> {
        Ok(self.load()?.compensations_for(id))
    }
}
