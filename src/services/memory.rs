use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use crate::models::{Donor, DonorFilter, NewDonor};
use crate::services::repository::{DonorStore, StoreError};

/// In-memory donor store.
///
/// Backs the HTTP integration tests. Applies the same match policies as
/// the Postgres store: exact blood group, case-insensitive district,
/// listing in insertion order.
pub struct InMemoryDonorStore {
    donors: RwLock<Vec<Donor>>,
    next_id: AtomicI64,
}

impl InMemoryDonorStore {
    pub fn new() -> Self {
        Self {
            donors: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryDonorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DonorStore for InMemoryDonorStore {
    async fn insert(&self, donor: NewDonor) -> Result<Donor, StoreError> {
        let mut donors = self.donors.write().expect("donor store lock poisoned");

        if donors.iter().any(|d| d.email == donor.email) {
            return Err(StoreError::DuplicateEmail(donor.email));
        }

        let now = chrono::Utc::now();
        let stored = Donor {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: donor.name,
            email: donor.email,
            phone: donor.phone,
            blood_group: donor.blood_group,
            district: donor.district,
            latitude: donor.latitude,
            longitude: donor.longitude,
            created_at: Some(now),
            updated_at: Some(now),
        };
        donors.push(stored.clone());

        Ok(stored)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Donor>, StoreError> {
        let donors = self.donors.read().expect("donor store lock poisoned");
        Ok(donors.iter().find(|d| d.email == email).cloned())
    }

    async fn search(&self, filter: &DonorFilter) -> Result<Vec<Donor>, StoreError> {
        let donors = self.donors.read().expect("donor store lock poisoned");

        let matches = donors
            .iter()
            .filter(|d| match &filter.blood_group {
                Some(group) => d.blood_group == *group,
                None => true,
            })
            .filter(|d| match &filter.district {
                Some(district) => d.district.eq_ignore_ascii_case(district),
                None => true,
            })
            .cloned()
            .collect();

        Ok(matches)
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
