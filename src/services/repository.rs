use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Donor, DonorFilter, NewDonor};

/// Errors that can occur when interacting with donor storage
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("A donor with email {0} already exists")]
    DuplicateEmail(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Storage interface for donor records.
///
/// Handlers depend on this trait rather than a concrete database client, so
/// the Postgres-backed store and the in-memory store used in tests are
/// interchangeable. Implementations must apply the same match policies:
/// exact blood group, case-insensitive district, listing in insertion order.
#[async_trait]
pub trait DonorStore: Send + Sync {
    /// Persist a new donor and return the stored record with its id.
    async fn insert(&self, donor: NewDonor) -> Result<Donor, StoreError>;

    /// Look up a donor by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Donor>, StoreError>;

    /// List donors matching the given attribute filter, in insertion order.
    async fn search(&self, filter: &DonorFilter) -> Result<Vec<Donor>, StoreError>;

    /// Probe the backing store.
    async fn health_check(&self) -> Result<bool, StoreError>;
}
