//! Shared service state.
//!
//! `CoreState` owns one instance of each record store. It is built once
//! at startup, wrapped in `Arc` and handed to the HTTP layer, so every
//! handler sees the same stores while tests can build their own.
//!
//! The tokio runtime runs handlers in parallel. Each store sits behind
//! its own `RwLock`; a mutation holds the write lock for its whole
//! duration, which keeps id assignment and insertion atomic.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{Appointment, AppointmentInput, Exam, ExamInput, User, UserProfile};
use crate::stats::{self, Statistics};
use crate::store::{AppointmentStore, ExamStore, IdentityStore, StoreError};

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

pub struct CoreState {
    appointments: RwLock<AppointmentStore>,
    identities: RwLock<IdentityStore>,
    exams: RwLock<ExamStore>,
}

impl CoreState {
    /// Empty stores, no identities.
    pub fn new() -> Self {
        Self::from_stores(AppointmentStore::new(), IdentityStore::new(), ExamStore::new())
    }

    /// Empty appointment and exam stores, default identities seeded.
    pub fn with_fixtures() -> Self {
        Self::from_stores(
            AppointmentStore::new(),
            IdentityStore::with_fixtures(),
            ExamStore::new(),
        )
    }

    pub fn from_stores(
        appointments: AppointmentStore,
        identities: IdentityStore,
        exams: ExamStore,
    ) -> Self {
        Self {
            appointments: RwLock::new(appointments),
            identities: RwLock::new(identities),
            exams: RwLock::new(exams),
        }
    }

    // ── Lock access ─────────────────────────────────────────

    pub fn read_appointments(
        &self,
    ) -> Result<RwLockReadGuard<'_, AppointmentStore>, CoreError> {
        self.appointments.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_appointments(
        &self,
    ) -> Result<RwLockWriteGuard<'_, AppointmentStore>, CoreError> {
        self.appointments.write().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn read_identities(&self) -> Result<RwLockReadGuard<'_, IdentityStore>, CoreError> {
        self.identities.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_identities(
        &self,
    ) -> Result<RwLockWriteGuard<'_, IdentityStore>, CoreError> {
        self.identities.write().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn read_exams(&self) -> Result<RwLockReadGuard<'_, ExamStore>, CoreError> {
        self.exams.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_exams(&self) -> Result<RwLockWriteGuard<'_, ExamStore>, CoreError> {
        self.exams.write().map_err(|_| CoreError::LockPoisoned)
    }

    // ── Appointments ────────────────────────────────────────

    pub fn create_appointment(&self, input: AppointmentInput) -> Result<Appointment, CoreError> {
        Ok(self.write_appointments()?.create(input))
    }

    pub fn get_appointment(&self, id: u64) -> Result<Appointment, CoreError> {
        Ok(self.read_appointments()?.get(id)?.clone())
    }

    pub fn list_appointments(&self, owner_id: Option<&str>) -> Result<Vec<Appointment>, CoreError> {
        Ok(self.read_appointments()?.list(owner_id))
    }

    pub fn update_appointment(
        &self,
        id: u64,
        input: AppointmentInput,
    ) -> Result<Appointment, CoreError> {
        Ok(self.write_appointments()?.update(id, input)?)
    }

    pub fn confirm_appointment(&self, id: u64) -> Result<Appointment, CoreError> {
        Ok(self.write_appointments()?.confirm(id)?)
    }

    pub fn delete_appointment(&self, id: u64) -> Result<Appointment, CoreError> {
        Ok(self.write_appointments()?.delete(id)?)
    }

    /// Breakdowns over all appointments, or over one owner's.
    pub fn statistics(&self, owner_id: Option<&str>) -> Result<Statistics, CoreError> {
        let subset = self.list_appointments(owner_id)?;
        Ok(stats::aggregate(&subset))
    }

    // ── Identities ──────────────────────────────────────────

    pub fn register(&self, user: User) -> Result<UserProfile, CoreError> {
        Ok(self.write_identities()?.register(user)?)
    }

    pub fn authenticate(&self, id: &str, password: &str) -> Result<UserProfile, CoreError> {
        Ok(self.read_identities()?.authenticate(id, password)?)
    }

    pub fn list_users(&self) -> Result<Vec<UserProfile>, CoreError> {
        Ok(self.read_identities()?.list())
    }

    // ── Exams ───────────────────────────────────────────────

    pub fn create_exam(&self, input: ExamInput) -> Result<Exam, CoreError> {
        Ok(self.write_exams()?.create(input))
    }

    pub fn list_exams(&self, owner_id: &str) -> Result<Vec<Exam>, CoreError> {
        Ok(self.read_exams()?.list_by_owner(owner_id))
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn booking(owner: &str) -> AppointmentInput {
        AppointmentInput {
            id: None,
            patient_name: "Juan Pérez".into(),
            owner_id: Some(owner.into()),
            phone: "3009876543".into(),
            center: "Clínica Santa María".into(),
            specialty: "Traumatología".into(),
            date: "2025-06-12".into(),
            time: "14:00".into(),
            reason: "Esguince".into(),
            status: None,
        }
    }

    #[test]
    fn fixtures_seed_only_identities() {
        let state = CoreState::with_fixtures();
        assert_eq!(state.list_users().unwrap().len(), 3);
        assert!(state.list_appointments(None).unwrap().is_empty());
        assert!(state.list_exams("1234567890").unwrap().is_empty());
    }

    #[test]
    fn states_are_isolated() {
        let first = CoreState::new();
        let second = CoreState::new();
        first.create_appointment(booking("111")).unwrap();
        assert!(second.list_appointments(None).unwrap().is_empty());
        assert_eq!(second.create_appointment(booking("111")).unwrap().id, 1);
    }

    #[test]
    fn store_errors_pass_through() {
        let state = CoreState::new();
        let err = state.get_appointment(42).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Store(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn statistics_filter_by_owner() {
        let state = CoreState::new();
        state.create_appointment(booking("111")).unwrap();
        state.create_appointment(booking("222")).unwrap();
        state.create_appointment(booking("111")).unwrap();

        assert_eq!(state.statistics(None).unwrap().total, 3);
        let own = state.statistics(Some("111")).unwrap();
        assert_eq!(own.total, 2);
        assert_eq!(own.by_specialty.get("Traumatología"), 2);
    }

    #[test]
    fn concurrent_creates_get_unique_ids() {
        let state = Arc::new(CoreState::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = Arc::clone(&state);
                std::thread::spawn(move || {
                    (0..50)
                        .map(|_| state.create_appointment(booking("111")).unwrap().id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        let expected: Vec<u64> = (1..=400).collect();
        assert_eq!(ids, expected);
    }
}
