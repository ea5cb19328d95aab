use serde::{Deserialize, Serialize};

use super::enums::AppointmentStatus;

/// A stored appointment. Field names on the wire are the public API's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    #[serde(rename = "paciente")]
    pub patient_name: String,
    /// National ID of the owning patient, when the booking is linked to one.
    #[serde(rename = "cedula", default)]
    pub owner_id: Option<String>,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "centro_salud")]
    pub center: String,
    #[serde(rename = "especialidad")]
    pub specialty: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "motivo")]
    pub reason: String,
    #[serde(rename = "estado")]
    pub status: AppointmentStatus,
}

/// Submission body for create and full update. Any `id` sent by the
/// client is accepted and discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "paciente")]
    pub patient_name: String,
    #[serde(rename = "cedula", default)]
    pub owner_id: Option<String>,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "centro_salud")]
    pub center: String,
    #[serde(rename = "especialidad")]
    pub specialty: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(rename = "motivo")]
    pub reason: String,
    #[serde(rename = "estado", default)]
    pub status: Option<AppointmentStatus>,
}

impl AppointmentInput {
    /// Materialize the submission under `id`, defaulting the status to Pending.
    pub fn into_appointment(self, id: u64) -> Appointment {
        Appointment {
            id,
            patient_name: self.patient_name,
            owner_id: self.owner_id,
            phone: self.phone,
            center: self.center,
            specialty: self.specialty,
            date: self.date,
            time: self.time,
            reason: self.reason,
            status: self.status.unwrap_or_default(),
        }
    }
}
