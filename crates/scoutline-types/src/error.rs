use thiserror::Error;

/// Errors surfaced by login and auto-provisioning.
///
/// Messaging store mutations never error -- missing chats are tolerated
/// as no-ops -- so the auth path is the only error surface in the core.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The directory returned a record that failed boundary validation.
    #[error("invalid credential record: {0}")]
    InvalidRecord(String),

    /// Credential lookup or provisioning failed.
    #[error("directory error: {0}")]
    Directory(String),

    /// A login attempt was rejected because one is already in flight.
    #[error("a login attempt is already in progress")]
    LoginInProgress,
}

/// Errors from the credential-lookup collaborator.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("malformed record: {0}")]
    InvalidRecord(String),

    #[error("lookup failed: {0}")]
    Lookup(String),
}

impl From<DirectoryError> for AuthError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::InvalidRecord(msg) => AuthError::InvalidRecord(msg),
            DirectoryError::Lookup(msg) => AuthError::Directory(msg),
        }
    }
}
