use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

use crate::models::{Donor, DonorFilter, NewDonor};
use crate::services::repository::{DonorStore, StoreError};

/// PostgreSQL-backed donor store.
///
/// Owns the connection pool and runs the embedded migrations on startup.
pub struct PostgresDonorStore {
    pool: PgPool,
}

impl PostgresDonorStore {
    /// Create a new store from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new store from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }
}

#[async_trait]
impl DonorStore for PostgresDonorStore {
    async fn insert(&self, donor: NewDonor) -> Result<Donor, StoreError> {
        let query = r#"
            INSERT INTO donors (name, email, phone, blood_group, district, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, email, phone, blood_group, district,
                      latitude, longitude, created_at, updated_at
        "#;

        let stored = sqlx::query_as::<_, Donor>(query)
            .bind(&donor.name)
            .bind(&donor.email)
            .bind(&donor.phone)
            .bind(&donor.blood_group)
            .bind(&donor.district)
            .bind(donor.latitude)
            .bind(donor.longitude)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    StoreError::DuplicateEmail(donor.email.clone())
                }
                other => StoreError::SqlxError(other),
            })?;

        tracing::debug!("Registered donor {} ({})", stored.id, stored.email);

        Ok(stored)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Donor>, StoreError> {
        let query = r#"
            SELECT id, name, email, phone, blood_group, district,
                   latitude, longitude, created_at, updated_at
            FROM donors
            WHERE email = $1
        "#;

        let donor = sqlx::query_as::<_, Donor>(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        Ok(donor)
    }

    async fn search(&self, filter: &DonorFilter) -> Result<Vec<Donor>, StoreError> {
        // Blood group is an exact match, district case-insensitive.
        // ORDER BY id keeps listings in insertion order.
        let query = r#"
            SELECT id, name, email, phone, blood_group, district,
                   latitude, longitude, created_at, updated_at
            FROM donors
            WHERE ($1::text IS NULL OR blood_group = $1)
              AND ($2::text IS NULL OR LOWER(district) = LOWER($2))
            ORDER BY id
        "#;

        let donors = sqlx::query_as::<_, Donor>(query)
            .bind(filter.blood_group.as_deref())
            .bind(filter.district.as_deref())
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("Found {} donors for filter {:?}", donors.len(), filter);

        Ok(donors)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
