use crate::models::{Role, User, UserProfile};

use super::StoreError;

/// Registered identities keyed by national ID.
///
/// Credentials are stored and compared as plaintext.
#[derive(Debug, Default)]
pub struct IdentityStore {
    users: Vec<User>,
}

impl IdentityStore {
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Store seeded with the default administrator and two patients.
    pub fn with_fixtures() -> Self {
        Self {
            users: default_users(),
        }
    }

    pub fn register(&mut self, user: User) -> Result<UserProfile, StoreError> {
        if self.users.iter().any(|u| u.id == user.id) {
            tracing::info!(id = %user.id, "Registration rejected: identity exists");
            return Err(StoreError::Conflict(format!("User {}", user.id)));
        }

        let profile = user.profile();
        self.users.push(user);
        tracing::info!(id = %profile.id, role = %profile.role, "Identity registered");
        Ok(profile)
    }

    pub fn authenticate(&self, id: &str, password: &str) -> Result<UserProfile, StoreError> {
        self.users
            .iter()
            .find(|u| u.id == id && u.password == password)
            .map(User::profile)
            .ok_or(StoreError::Unauthorized)
    }

    pub fn list(&self) -> Vec<UserProfile> {
        self.users.iter().map(User::profile).collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

fn default_users() -> Vec<User> {
    vec![
        User {
            id: "admin".into(),
            name: "Administrador".into(),
            password: "admin123".into(),
            role: Role::Administrator,
            phone: Some("3001234567".into()),
            email: Some("admin@medicitas.com".into()),
        },
        User {
            id: "1234567890".into(),
            name: "Juan Pérez".into(),
            password: "1234".into(),
            role: Role::Patient,
            phone: Some("3009876543".into()),
            email: Some("juan@email.com".into()),
        },
        User {
            id: "9876543210".into(),
            name: "María López".into(),
            password: "1234".into(),
            role: Role::Patient,
            phone: Some("3001112233".into()),
            email: Some("maria@email.com".into()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(id: &str, password: &str) -> User {
        User {
            id: id.into(),
            name: "Carlos Gómez".into(),
            password: password.into(),
            role: Role::Patient,
            phone: None,
            email: None,
        }
    }

    #[test]
    fn fixtures_hold_admin_and_two_patients() {
        let store = IdentityStore::with_fixtures();
        let users = store.list();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0].role, Role::Administrator);
        assert_eq!(
            users.iter().filter(|u| u.role == Role::Patient).count(),
            2
        );
    }

    #[test]
    fn fixture_admin_can_log_in() {
        let store = IdentityStore::with_fixtures();
        let profile = store.authenticate("admin", "admin123").unwrap();
        assert_eq!(profile.name, "Administrador");
    }

    #[test]
    fn duplicate_registration_conflicts() {
        let mut store = IdentityStore::new();
        store.register(patient("999", "pw")).unwrap();
        let err = store.register(patient("999", "other")).unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn wrong_password_is_unauthorized() {
        let mut store = IdentityStore::new();
        store.register(patient("999", "pw")).unwrap();
        assert_eq!(
            store.authenticate("999", "wrongpw"),
            Err(StoreError::Unauthorized)
        );
        assert_eq!(
            store.authenticate("998", "pw"),
            Err(StoreError::Unauthorized)
        );
    }

    #[test]
    fn password_match_is_exact() {
        let mut store = IdentityStore::new();
        store.register(patient("999", "Secret")).unwrap();
        assert!(store.authenticate("999", "secret").is_err());
        assert!(store.authenticate("999", "Secret ").is_err());
        assert_eq!(store.authenticate("999", "Secret").unwrap().id, "999");
    }
}
