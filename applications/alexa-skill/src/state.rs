/// Shared application state
use crate::handler::SkillHandler;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<SkillHandler>,
}

impl AppState {
    pub fn new(handler: Arc<SkillHandler>) -> Self {
        Self { handler }
    }
}
