use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::player::{PlayerDetails, PlayerWithTeam};
use crate::domain::query::{Page, PageRequest, PlayerQueryParam};

/// Dynamic player searches over players left-joined to teams
///
/// Players without a team are always included, with no team name, unless the
/// filter constrains the team name.
#[async_trait]
pub trait PlayerQueryRepository: Send + Sync {
    /// Every matching row, unpaged
    async fn find_filtered(
        &self,
        param: &PlayerQueryParam,
    ) -> RepositoryResult<Vec<PlayerDetails>>;

    /// Every matching row in the narrow name/age/team projection
    async fn find_player_team_by(
        &self,
        param: &PlayerQueryParam,
    ) -> RepositoryResult<Vec<PlayerWithTeam>> {
        let details = self.find_filtered(param).await?;
        Ok(details.into_iter().map(PlayerWithTeam::from).collect())
    }

    /// One page of matching rows; the total is computed together with the
    /// fetch
    async fn find_filtered_page(
        &self,
        param: &PlayerQueryParam,
        request: &PageRequest,
    ) -> RepositoryResult<Page<PlayerDetails>>;

    /// One page of matching rows; the total comes from a separate count that
    /// is skipped when the fetched page already implies it
    async fn find_filtered_page_optimized(
        &self,
        param: &PlayerQueryParam,
        request: &PageRequest,
    ) -> RepositoryResult<Page<PlayerDetails>>;
}
