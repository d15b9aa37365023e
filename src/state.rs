//! Shared application state for all routes.

use crate::service::FormationService;
use crate::store::FormationStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub formations: FormationService,
}

impl AppState {
    pub fn new(store: Arc<dyn FormationStore>) -> Self {
        AppState {
            formations: FormationService::new(store),
        }
    }
}
