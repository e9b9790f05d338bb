/// Basic application code
pub mod app;
/// Session state for the newsletter collection
pub mod composer;
/// Controllers for REST endpoints
pub mod controller;
/// Domain objects
pub mod domain;
/// Error enums
pub mod error;
/// Repositories
pub mod repo;
/// Application settings
pub mod settings;
/// Application telemetry for tracing and logging
pub mod telemetry;
/// Email template catalog and renderers
pub mod templates;
