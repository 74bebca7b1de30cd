// Repository ports
// Adapters in `infrastructure::repositories` implement these traits

pub mod errors;
pub mod player_query_repository;
pub mod player_repository;
pub mod team_repository;

pub use errors::{RepositoryError, RepositoryResult};
pub use player_query_repository::PlayerQueryRepository;
pub use player_repository::PlayerRepository;
pub use team_repository::TeamRepository;
