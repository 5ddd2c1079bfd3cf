//! In-memory credential directory.
//!
//! The demo's "backend": a concurrent map of credential records keyed by
//! lowercased email. Records are validated at this boundary, so a
//! malformed record surfaces as `DirectoryError::InvalidRecord` instead
//! of leaking stringly-typed garbage into the core.

use dashmap::DashMap;
use scoutline_core::directory::CredentialDirectory;
use scoutline_types::error::DirectoryError;
use scoutline_types::record::CredentialRecord;
use tracing::debug;

/// DashMap-backed implementation of [`CredentialDirectory`].
///
/// Values are cloned on read -- no map guard outlives a lookup.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    records: DashMap<String, CredentialRecord>,
}

impl InMemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Create a directory pre-populated with validated records.
    pub fn with_records(
        records: impl IntoIterator<Item = CredentialRecord>,
    ) -> Result<Self, DirectoryError> {
        let dir = Self::new();
        for record in records {
            record.validate()?;
            dir.records
                .insert(record.email().to_lowercase(), record);
        }
        Ok(dir)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CredentialDirectory for InMemoryDirectory {
    async fn lookup(&self, email: &str) -> Result<Option<CredentialRecord>, DirectoryError> {
        let record = self
            .records
            .get(&email.to_lowercase())
            .map(|r| r.value().clone());
        match record {
            Some(record) => {
                record.validate()?;
                Ok(Some(record))
            }
            None => {
                debug!(email, "no credential record");
                Ok(None)
            }
        }
    }

    async fn provision(&self, record: CredentialRecord) -> Result<(), DirectoryError> {
        record.validate()?;
        self.records
            .insert(record.email().to_lowercase(), record);
        Ok(())
    }
}
