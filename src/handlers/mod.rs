//! HTTP handlers for formation CRUD and health checks.

pub mod formation;
pub mod health;
