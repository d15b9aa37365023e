//! certiGen backend: REST API over formation (training course) records stored in Supabase.

pub mod config;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod model;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError, StoreError};
pub use model::{Formation, FormationPatch, FormationPayload};
pub use routes::app;
pub use seed::{default_formations, seed_formations};
pub use service::FormationService;
pub use state::AppState;
pub use store::{connect_store, FormationStore, MemoryFormationStore};
