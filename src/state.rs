// src/state.rs

use std::sync::Arc;

use crate::orchestrator::Orchestrator;

/// Shared application state handed to every handler. The orchestrator is the
/// only service; it owns the collaborator clients.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
}
