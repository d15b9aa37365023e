//! FormationService: record operations over an injected store.

mod formation;
mod validation;
pub use formation::FormationService;
pub use validation::RequestValidator;
