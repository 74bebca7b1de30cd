use async_trait::async_trait;
use uuid::Uuid;

use super::errors::RepositoryResult;
use crate::domain::player::Player;

/// Repository trait for Player aggregate
///
/// Saving a player whose team id is not stored is a constraint violation.
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Save a player (insert or update)
    async fn save(&self, player: &Player) -> RepositoryResult<()>;

    /// Save several players in order, stopping at the first failure
    async fn save_all(&self, players: &[Player]) -> RepositoryResult<()> {
        for player in players {
            self.save(player).await?;
        }
        Ok(())
    }

    /// Find a player by its ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Player>>;

    async fn find_all(&self) -> RepositoryResult<Vec<Player>>;

    /// Find all players with exactly this name
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Vec<Player>>;

    /// Find the roster of a team: every player referencing `team_id`
    async fn find_by_team(&self, team_id: Uuid) -> RepositoryResult<Vec<Player>>;
}
