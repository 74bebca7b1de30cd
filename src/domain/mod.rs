// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod player;
pub mod query;
pub mod repositories;
pub mod team;
