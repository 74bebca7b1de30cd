use crate::domain::player::PlayerTeamRow;

/// Addressable columns of the players-left-join-teams relation
///
/// Players are aliased `p` and teams `t` in every generated statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    PlayerId,
    PlayerName,
    PlayerAge,
    PlayerInSeason,
    PlayerWeeklySalary,
    TeamName,
}

impl Column {
    /// Qualified SQL name of the column
    pub fn sql(&self) -> &'static str {
        match self {
            Column::PlayerId => "p.id",
            Column::PlayerName => "p.name",
            Column::PlayerAge => "p.age",
            Column::PlayerInSeason => "p.in_season",
            Column::PlayerWeeklySalary => "p.weekly_salary",
            Column::TeamName => "t.name",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Column::PlayerName | Column::TeamName)
    }

    /// Resolves a property name to a column of the driving (player) relation
    ///
    /// Accepts both the camelCase names of the serialized projection and the
    /// snake_case column names. Team columns are not sortable.
    pub fn from_player_property(property: &str) -> Option<Self> {
        match property {
            "id" => Some(Column::PlayerId),
            "name" => Some(Column::PlayerName),
            "age" => Some(Column::PlayerAge),
            "inSeason" | "in_season" => Some(Column::PlayerInSeason),
            "weeklySalary" | "weekly_salary" => Some(Column::PlayerWeeklySalary),
            _ => None,
        }
    }

    /// Reads the column out of a joined row; `None` stands for SQL NULL
    pub fn value_of(&self, row: &PlayerTeamRow) -> Option<Value> {
        match self {
            Column::PlayerId => Some(Value::Uuid(row.id)),
            Column::PlayerName => Some(Value::Text(row.name.clone())),
            Column::PlayerAge => Some(Value::Int(row.age)),
            Column::PlayerInSeason => Some(Value::Bool(row.in_season)),
            Column::PlayerWeeklySalary => Some(Value::Int(row.weekly_salary)),
            Column::TeamName => row.team_name.clone().map(Value::Text),
        }
    }
}

/// A typed scalar compared against a column
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Value {
    Bool(bool),
    Int(i32),
    Text(String),
    Uuid(uuid::Uuid),
}
