//! Shared types for the HTTP layer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core_state::CoreState;

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>) -> Self {
        Self { core }
    }
}

/// Body of responses that only carry a confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub mensaje: &'static str,
}

/// `?cedula=` filter accepted by list and statistics routes.
#[derive(Debug, Default, Deserialize)]
pub struct OwnerFilter {
    pub cedula: Option<String>,
}

impl OwnerFilter {
    pub fn owner(&self) -> Option<&str> {
        self.cedula.as_deref()
    }
}
