use crate::models::{Appointment, AppointmentInput, AppointmentStatus};

use super::StoreError;

const ENTITY: &str = "Appointment";

/// Ordered appointment records with a monotonic id counter.
///
/// Ids start at 1 and are never handed out twice, deleted or not.
#[derive(Debug)]
pub struct AppointmentStore {
    records: Vec<Appointment>,
    next_id: u64,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Store a submission under the next id. Status defaults to Pending.
    pub fn create(&mut self, input: AppointmentInput) -> Appointment {
        let id = self.next_id;
        self.next_id += 1;

        let appointment = input.into_appointment(id);
        self.records.push(appointment.clone());
        tracing::debug!(id, status = %appointment.status, "Appointment created");
        appointment
    }

    pub fn get(&self, id: u64) -> Result<&Appointment, StoreError> {
        self.records
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    /// All appointments, or those owned by `owner_id`, in insertion order.
    /// An empty filter means no filter.
    pub fn list(&self, owner_id: Option<&str>) -> Vec<Appointment> {
        match owner_id.filter(|o| !o.is_empty()) {
            Some(owner) => self
                .records
                .iter()
                .filter(|a| a.owner_id.as_deref() == Some(owner))
                .cloned()
                .collect(),
            None => self.records.clone(),
        }
    }

    /// Replace every field except the id.
    pub fn update(&mut self, id: u64, input: AppointmentInput) -> Result<Appointment, StoreError> {
        let slot = self
            .records
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))?;

        *slot = input.into_appointment(id);
        tracing::debug!(id, "Appointment replaced");
        Ok(slot.clone())
    }

    pub fn confirm(&mut self, id: u64) -> Result<Appointment, StoreError> {
        let slot = self
            .records
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))?;

        slot.status = AppointmentStatus::Confirmed;
        tracing::debug!(id, "Appointment confirmed");
        Ok(slot.clone())
    }

    /// Hard delete. This is also how an appointment is cancelled.
    pub fn delete(&mut self, id: u64) -> Result<Appointment, StoreError> {
        let index = self
            .records
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))?;

        let removed = self.records.remove(index);
        tracing::debug!(id, "Appointment deleted");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for AppointmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(owner: Option<&str>, specialty: &str) -> AppointmentInput {
        AppointmentInput {
            id: None,
            patient_name: "Paciente".into(),
            owner_id: owner.map(String::from),
            phone: "3000000000".into(),
            center: "Hospital Central".into(),
            specialty: specialty.into(),
            date: "2025-05-02".into(),
            time: "08:00".into(),
            reason: "Consulta".into(),
            status: None,
        }
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut store = AppointmentStore::new();
        let ids: Vec<u64> = (0..4)
            .map(|_| store.create(input(None, "Pediatría")).id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = AppointmentStore::new();
        let a = store.create(input(None, "Pediatría"));
        let b = store.create(input(None, "Pediatría"));
        store.delete(b.id).unwrap();
        store.delete(a.id).unwrap();

        let c = store.create(input(None, "Pediatría"));
        assert_eq!(c.id, 3);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn client_supplied_id_is_ignored() {
        let mut store = AppointmentStore::new();
        let mut submitted = input(None, "Pediatría");
        submitted.id = Some(99);
        assert_eq!(store.create(submitted).id, 1);
    }

    #[test]
    fn get_returns_submitted_fields() {
        let mut store = AppointmentStore::new();
        let submitted = input(Some("111"), "Cardiología");
        let created = store.create(submitted.clone());

        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched, &submitted.into_appointment(created.id));
        assert_eq!(fetched.status, AppointmentStatus::Pending);
    }

    #[test]
    fn explicit_status_is_kept_on_create() {
        let mut store = AppointmentStore::new();
        let mut submitted = input(None, "Pediatría");
        submitted.status = Some(AppointmentStatus::Confirmed);
        assert_eq!(store.create(submitted).status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn custom_status_survives_until_confirmed() {
        let mut store = AppointmentStore::new();
        let mut submitted = input(None, "Pediatría");
        submitted.status = Some(AppointmentStatus::from("Completada"));
        let created = store.create(submitted);
        assert_eq!(created.status.as_str(), "Completada");

        let confirmed = store.confirm(created.id).unwrap();
        assert_eq!(confirmed.status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn get_missing_is_not_found() {
        let store = AppointmentStore::new();
        assert!(matches!(
            store.get(1),
            Err(StoreError::NotFound { entity: "Appointment", .. })
        ));
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let mut store = AppointmentStore::new();
        let created = store.create(input(None, "Pediatría"));
        store.delete(created.id).unwrap();
        assert!(store.get(created.id).is_err());
        assert!(store.delete(created.id).is_err());
    }

    #[test]
    fn list_filters_by_owner_in_order() {
        let mut store = AppointmentStore::new();
        let a = store.create(input(Some("111"), "Pediatría"));
        let _b = store.create(input(Some("222"), "Pediatría"));
        let c = store.create(input(Some("111"), "Cardiología"));
        let _d = store.create(input(None, "Cardiología"));

        let owned = store.list(Some("111"));
        assert_eq!(owned, vec![a, c]);
        assert_eq!(store.list(None).len(), 4);
        assert_eq!(store.list(Some("")).len(), 4);
        assert!(store.list(Some("333")).is_empty());
    }

    #[test]
    fn update_replaces_everything_but_id() {
        let mut store = AppointmentStore::new();
        let created = store.create(input(Some("111"), "Pediatría"));
        store.confirm(created.id).unwrap();

        let mut replacement = input(Some("222"), "Dermatología");
        replacement.id = Some(50);
        let updated = store.update(created.id, replacement).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.owner_id.as_deref(), Some("222"));
        assert_eq!(updated.specialty, "Dermatología");
        // Full replace: an omitted status resets to Pending.
        assert_eq!(updated.status, AppointmentStatus::Pending);
        assert_eq!(store.get(created.id).unwrap(), &updated);
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut store = AppointmentStore::new();
        assert!(store.update(3, input(None, "Pediatría")).is_err());
    }

    #[test]
    fn confirm_changes_only_status() {
        let mut store = AppointmentStore::new();
        let created = store.create(input(Some("111"), "Pediatría"));

        let confirmed = store.confirm(created.id).unwrap();
        assert_eq!(confirmed.status, AppointmentStatus::Confirmed);
        assert_eq!(
            Appointment {
                status: AppointmentStatus::Pending,
                ..confirmed
            },
            created
        );
    }

    #[test]
    fn confirm_missing_is_not_found() {
        let mut store = AppointmentStore::new();
        assert!(store.confirm(1).is_err());
    }
}
