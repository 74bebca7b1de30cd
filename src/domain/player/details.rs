use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the players-left-join-teams relation
///
/// `team_name` is `None` for players without a team.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PlayerTeamRow {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub in_season: bool,
    pub weekly_salary: i32,
    pub team_name: Option<String>,
}

/// Flat, read-only view of a player joined with its team's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetails {
    pub name: String,
    pub age: i32,
    pub in_season: bool,
    pub weekly_salary: i32,
    pub team_name: Option<String>,
}

impl From<PlayerTeamRow> for PlayerDetails {
    fn from(row: PlayerTeamRow) -> Self {
        Self {
            name: row.name,
            age: row.age,
            in_season: row.in_season,
            weekly_salary: row.weekly_salary,
            team_name: row.team_name,
        }
    }
}

/// Narrow projection: name, age and team name only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerWithTeam {
    pub name: String,
    pub age: i32,
    pub team_name: Option<String>,
}

impl From<PlayerDetails> for PlayerWithTeam {
    fn from(details: PlayerDetails) -> Self {
        Self {
            name: details.name,
            age: details.age,
            team_name: details.team_name,
        }
    }
}
