//! CredentialDirectory trait definition.
//!
//! The credential-lookup collaborator behind login. "Not found" is a
//! normal outcome (it triggers demo auto-provisioning), never an error.
//! Implementations live in scoutline-infra (e.g. `InMemoryDirectory`).
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use scoutline_types::error::DirectoryError;
use scoutline_types::record::CredentialRecord;

/// Lookup and provisioning interface for user credential records.
pub trait CredentialDirectory: Send + Sync {
    /// Find the record for an email address, if one exists.
    ///
    /// Lookup is case-insensitive on the email. A malformed stored record
    /// is reported as `DirectoryError::InvalidRecord`.
    fn lookup(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<CredentialRecord>, DirectoryError>> + Send;

    /// Store a newly provisioned record so later lookups find it.
    fn provision(
        &self,
        record: CredentialRecord,
    ) -> impl std::future::Future<Output = Result<(), DirectoryError>> + Send;
}
