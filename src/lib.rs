// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app_dirs;
pub mod arrow;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod game;
pub mod referee;
pub mod runtime;
pub mod session;
pub mod signal;
pub mod telemetry;
pub mod timer;
pub mod ui;
