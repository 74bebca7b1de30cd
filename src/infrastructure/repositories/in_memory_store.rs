use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::player::{Player, PlayerDetails, PlayerTeamRow};
use crate::domain::query::predicate::compose;
use crate::domain::query::sort::sort_rows;
use crate::domain::query::{Page, PageRequest, PlayerQueryParam, Predicate};
use crate::domain::repositories::{
    PlayerQueryRepository, PlayerRepository, RepositoryError, RepositoryResult, TeamRepository,
};
use crate::domain::team::Team;

/// In-process store implementing every repository port
///
/// Rows keep insertion order. Predicates are evaluated with the same NULL
/// semantics as the PostgreSQL adapter, and the left join is emulated by a
/// team-name lookup per player.
#[derive(Default)]
pub struct InMemoryStore {
    teams: RwLock<Vec<Team>>,
    players: RwLock<Vec<Player>>,
    count_queries: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of separate count queries executed so far
    pub fn count_queries(&self) -> usize {
        self.count_queries.load(Ordering::SeqCst)
    }

    fn joined_rows(&self, predicate: Option<&Predicate>) -> RepositoryResult<Vec<PlayerTeamRow>> {
        let teams = self.teams.read().map_err(|_| RepositoryError::LockPoisoned)?;
        let players = self.players.read().map_err(|_| RepositoryError::LockPoisoned)?;

        let team_names: HashMap<Uuid, &str> =
            teams.iter().map(|team| (team.id(), team.name())).collect();

        Ok(players
            .iter()
            .map(|player| PlayerTeamRow {
                id: player.id(),
                name: player.name().to_string(),
                age: player.age(),
                in_season: player.in_season(),
                weekly_salary: player.weekly_salary(),
                team_name: player
                    .team_id()
                    .and_then(|id| team_names.get(&id))
                    .map(|name| name.to_string()),
            })
            .filter(|row| predicate.map_or(true, |p| p.matches(row)))
            .collect())
    }

    fn count(&self, predicate: Option<&Predicate>) -> RepositoryResult<u64> {
        self.count_queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.joined_rows(predicate)?.len() as u64)
    }

    /// Sorted rows of the requested page plus the unpaged total
    fn slice(
        &self,
        predicate: Option<&Predicate>,
        request: &PageRequest,
    ) -> RepositoryResult<(Vec<PlayerDetails>, u64)> {
        let orders = request.sort().resolve()?;
        let mut rows = self.joined_rows(predicate)?;
        sort_rows(&mut rows, &orders);

        let total = rows.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let content = rows
            .into_iter()
            .skip(offset)
            .take(request.size() as usize)
            .map(PlayerDetails::from)
            .collect();

        Ok((content, total))
    }

    fn select_players(&self, keep: impl Fn(&Player) -> bool) -> RepositoryResult<Vec<Player>> {
        let players = self.players.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(players.iter().filter(|p| keep(p)).cloned().collect())
    }
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn save(&self, team: &Team) -> RepositoryResult<()> {
        let mut teams = self.teams.write().map_err(|_| RepositoryError::LockPoisoned)?;
        match teams.iter_mut().find(|t| t.id() == team.id()) {
            Some(existing) => *existing = team.clone(),
            None => teams.push(team.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Team>> {
        let teams = self.teams.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(teams.iter().find(|t| t.id() == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Vec<Team>> {
        let teams = self.teams.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(teams.iter().filter(|t| t.name() == name).cloned().collect())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Team>> {
        let teams = self.teams.read().map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(teams.clone())
    }
}

#[async_trait]
impl PlayerRepository for InMemoryStore {
    async fn save(&self, player: &Player) -> RepositoryResult<()> {
        if let Some(team_id) = player.team_id() {
            let teams = self.teams.read().map_err(|_| RepositoryError::LockPoisoned)?;
            if !teams.iter().any(|t| t.id() == team_id) {
                return Err(RepositoryError::Constraint(format!(
                    "Player {} references unknown team {}",
                    player.id(),
                    team_id
                )));
            }
        }

        let mut players = self.players.write().map_err(|_| RepositoryError::LockPoisoned)?;
        match players.iter_mut().find(|p| p.id() == player.id()) {
            Some(existing) => *existing = player.clone(),
            None => players.push(player.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Player>> {
        Ok(self.select_players(|p| p.id() == id)?.into_iter().next())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Player>> {
        self.select_players(|_| true)
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Vec<Player>> {
        self.select_players(|p| p.name() == name)
    }

    async fn find_by_team(&self, team_id: Uuid) -> RepositoryResult<Vec<Player>> {
        self.select_players(|p| p.team_id() == Some(team_id))
    }
}

#[async_trait]
impl PlayerQueryRepository for InMemoryStore {
    async fn find_filtered(
        &self,
        param: &PlayerQueryParam,
    ) -> RepositoryResult<Vec<PlayerDetails>> {
        let rows = self.joined_rows(compose(param).as_ref())?;
        Ok(rows.into_iter().map(PlayerDetails::from).collect())
    }

    async fn find_filtered_page(
        &self,
        param: &PlayerQueryParam,
        request: &PageRequest,
    ) -> RepositoryResult<Page<PlayerDetails>> {
        let (content, total) = self.slice(compose(param).as_ref(), request)?;
        Ok(Page::new(content, request, total))
    }

    async fn find_filtered_page_optimized(
        &self,
        param: &PlayerQueryParam,
        request: &PageRequest,
    ) -> RepositoryResult<Page<PlayerDetails>> {
        let predicate = compose(param);
        let (content, _) = self.slice(predicate.as_ref(), request)?;

        Page::with_count(content, request, || async { self.count(predicate.as_ref()) }).await
    }
}
