use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::player::{Player, PlayerDetails, PlayerTeamRow};
use crate::domain::query::predicate::{compose, push_where};
use crate::domain::query::sort::push_order_by;
use crate::domain::query::{Page, PageRequest, PlayerQueryParam, Predicate, ResolvedOrder};
use crate::domain::repositories::{
    PlayerQueryRepository, PlayerRepository, RepositoryError, RepositoryResult,
};

const PLAYER_TEAM_COLUMNS: &str =
    "SELECT p.id, p.name, p.age, p.in_season, p.weekly_salary, t.name AS team_name";
const PLAYER_TEAM_JOIN: &str = " FROM players p LEFT JOIN teams t ON t.id = p.team_id";

#[derive(Debug, sqlx::FromRow)]
struct PlayerRow {
    id: Uuid,
    name: String,
    age: i32,
    team_id: Option<Uuid>,
    in_season: bool,
    weekly_salary: i32,
}

impl From<PlayerRow> for Player {
    fn from(r: PlayerRow) -> Self {
        Player::from_persistence(r.id, r.name, r.age, r.team_id, r.in_season, r.weekly_salary)
    }
}

#[derive(Debug, sqlx::FromRow)]
struct CountedPlayerTeamRow {
    #[sqlx(flatten)]
    player: PlayerTeamRow,
    total_count: i64,
}

impl From<CountedPlayerTeamRow> for PlayerDetails {
    fn from(counted: CountedPlayerTeamRow) -> Self {
        PlayerDetails::from(counted.player)
    }
}

/// `SELECT <projection> FROM players LEFT JOIN teams [WHERE ...]`
pub(crate) fn select_from_where(predicate: Option<&Predicate>) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(PLAYER_TEAM_COLUMNS);
    builder.push(PLAYER_TEAM_JOIN);
    push_where(&mut builder, predicate);
    builder
}

/// Paged variant of `select_from_where`
///
/// With `with_total` the statement also carries the unpaged row count in a
/// `total_count` column.
pub(crate) fn paged_select(
    predicate: Option<&Predicate>,
    orders: &[ResolvedOrder],
    limit: i64,
    offset: i64,
    with_total: bool,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(PLAYER_TEAM_COLUMNS);
    if with_total {
        builder.push(", COUNT(*) OVER () AS total_count");
    }
    builder.push(PLAYER_TEAM_JOIN);
    push_where(&mut builder, predicate);
    push_order_by(&mut builder, orders);
    builder.push(" LIMIT ").push_bind(limit);
    builder.push(" OFFSET ").push_bind(offset);
    builder
}

/// `SELECT COUNT(*)` over the same join and predicate
pub(crate) fn count_select(predicate: Option<&Predicate>) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*)");
    builder.push(PLAYER_TEAM_JOIN);
    push_where(&mut builder, predicate);
    builder
}

fn limit_and_offset(request: &PageRequest) -> RepositoryResult<(i64, i64)> {
    let offset = i64::try_from(request.offset()).map_err(|_| {
        RepositoryError::InvalidPageRequest(format!("Offset {} is out of range", request.offset()))
    })?;
    Ok((request.size() as i64, offset))
}

/// PostgreSQL implementation of the player repositories
///
/// Filter SQL is generated at runtime with `sqlx::QueryBuilder`; every filter
/// value travels as a bound parameter.
#[derive(Clone)]
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    /// Creates a new PostgresPlayerRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count(&self, predicate: Option<&Predicate>) -> RepositoryResult<u64> {
        let mut builder = count_select(predicate);
        tracing::debug!(sql = builder.sql(), "Counting filtered players");

        let total: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;
        Ok(total.max(0) as u64)
    }

    async fn fetch_page(
        &self,
        predicate: Option<&Predicate>,
        request: &PageRequest,
    ) -> RepositoryResult<Vec<PlayerDetails>> {
        let orders = request.sort().resolve()?;
        let (limit, offset) = limit_and_offset(request)?;

        let mut builder = paged_select(predicate, &orders, limit, offset, false);
        tracing::debug!(sql = builder.sql(), "Fetching player page");

        let rows = builder
            .build_query_as::<PlayerTeamRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(PlayerDetails::from).collect())
    }
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    async fn save(&self, player: &Player) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO players (
                id, name, age, team_id, in_season, weekly_salary
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                age = EXCLUDED.age,
                team_id = EXCLUDED.team_id,
                in_season = EXCLUDED.in_season,
                weekly_salary = EXCLUDED.weekly_salary
            "#,
        )
        .bind(player.id())
        .bind(player.name())
        .bind(player.age())
        .bind(player.team_id())
        .bind(player.in_season())
        .bind(player.weekly_salary())
        .execute(&self.pool)
        .await?;

        tracing::debug!(player_id = %player.id(), "Saved player");
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Player>> {
        let row = sqlx::query_as::<_, PlayerRow>(
            r#"
            SELECT id, name, age, team_id, in_season, weekly_salary
            FROM players
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Player::from))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Player>> {
        let rows = sqlx::query_as::<_, PlayerRow>(
            r#"
            SELECT id, name, age, team_id, in_season, weekly_salary
            FROM players
            ORDER BY name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Vec<Player>> {
        let rows = sqlx::query_as::<_, PlayerRow>(
            r#"
            SELECT id, name, age, team_id, in_season, weekly_salary
            FROM players
            WHERE name = $1
            ORDER BY id
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Player::from).collect())
    }

    async fn find_by_team(&self, team_id: Uuid) -> RepositoryResult<Vec<Player>> {
        let rows = sqlx::query_as::<_, PlayerRow>(
            r#"
            SELECT id, name, age, team_id, in_season, weekly_salary
            FROM players
            WHERE team_id = $1
            ORDER BY name, id
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Player::from).collect())
    }
}

#[async_trait]
impl PlayerQueryRepository for PostgresPlayerRepository {
    #[tracing::instrument(skip(self))]
    async fn find_filtered(
        &self,
        param: &PlayerQueryParam,
    ) -> RepositoryResult<Vec<PlayerDetails>> {
        let predicate = compose(param);
        let mut builder = select_from_where(predicate.as_ref());
        tracing::debug!(sql = builder.sql(), "Fetching filtered players");

        let rows = builder
            .build_query_as::<PlayerTeamRow>()
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(rows = rows.len(), "Fetched filtered players");
        Ok(rows.into_iter().map(PlayerDetails::from).collect())
    }

    #[tracing::instrument(skip(self))]
    async fn find_filtered_page(
        &self,
        param: &PlayerQueryParam,
        request: &PageRequest,
    ) -> RepositoryResult<Page<PlayerDetails>> {
        let predicate = compose(param);
        let orders = request.sort().resolve()?;
        let (limit, offset) = limit_and_offset(request)?;

        let mut builder = paged_select(predicate.as_ref(), &orders, limit, offset, true);
        tracing::debug!(sql = builder.sql(), "Fetching player page with total");

        let rows = builder
            .build_query_as::<CountedPlayerTeamRow>()
            .fetch_all(&self.pool)
            .await?;

        // An empty page past the end carries no window count.
        let total = match rows.first() {
            Some(first) => first.total_count.max(0) as u64,
            None if offset == 0 => 0,
            None => self.count(predicate.as_ref()).await?,
        };

        let content = rows.into_iter().map(PlayerDetails::from).collect();

        Ok(Page::new(content, request, total))
    }

    #[tracing::instrument(skip(self))]
    async fn find_filtered_page_optimized(
        &self,
        param: &PlayerQueryParam,
        request: &PageRequest,
    ) -> RepositoryResult<Page<PlayerDetails>> {
        let predicate = compose(param);
        let content = self.fetch_page(predicate.as_ref(), request).await?;

        Page::with_count(content, request, || self.count(predicate.as_ref())).await
    }
}
