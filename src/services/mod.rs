// Service exports
pub mod memory;
pub mod postgres;
pub mod repository;

pub use memory::InMemoryDonorStore;
pub use postgres::PostgresDonorStore;
pub use repository::{DonorStore, StoreError};
