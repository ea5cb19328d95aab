use serde::{Deserialize, Serialize};

use super::enums::Role;

/// A registered identity. The password is kept verbatim and compared
/// verbatim; nothing here hashes it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    #[serde(rename = "cedula")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    pub password: String,
    #[serde(rename = "tipo")]
    pub role: Role,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// Public view of the identity, without the password.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            role: self.role,
            phone: self.phone.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "cedula")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub role: Role,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "cedula")]
    pub id: String,
    pub password: String,
}
