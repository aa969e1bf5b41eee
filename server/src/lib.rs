//! Portfolio site server: site configuration, contact inbox and media
//! uploads behind a small JSON API.

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod server;
pub mod services;

pub use bootstrap::init_foundation;
