// Infrastructure layer module
// Contains database adapters and runtime configuration
// Follows Hexagonal Architecture

pub mod config;
pub mod repositories;
