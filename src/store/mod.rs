//! In-memory record stores.
//!
//! Each store is a plain owned value with `&mut self` mutators. Sharing
//! across request handlers (and the locking that requires) belongs to
//! `CoreState`, so a test can build a fresh store with `::new()`.

pub mod appointments;
pub mod exams;
pub mod identities;

pub use appointments::AppointmentStore;
pub use exams::ExamStore;
pub use identities::IdentityStore;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("{0} already exists")]
    Conflict(String),

    #[error("Invalid credentials")]
    Unauthorized,
}

impl StoreError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        StoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
