use serde::Deserialize;

/// A single filter field
///
/// `Any` places no constraint on the attribute. `Equals` constrains it by
/// equality. For nullable attributes `Equals(None)` selects rows where the
/// attribute is absent, which is not the same thing as `Any`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Criterion<T> {
    #[default]
    Any,
    Equals(T),
}

impl<T> Criterion<T> {
    /// Returns the constrained value, or `None` for `Any`
    pub fn value(&self) -> Option<&T> {
        match self {
            Criterion::Any => None,
            Criterion::Equals(value) => Some(value),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Criterion::Any)
    }
}

impl<T> From<Option<T>> for Criterion<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Criterion::Any, Criterion::Equals)
    }
}

/// Filter descriptor for player searches
///
/// # Example
/// ```
/// use roster_query_api::domain::query::PlayerQueryParam;
///
/// let param = PlayerQueryParam::new()
///     .name("Heungmin Son")
///     .age(29)
///     .team_name("Tottenham Hotspur F.C.");
///
/// assert!(!param.is_unconstrained());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerQueryParam {
    pub name: Criterion<String>,
    pub age: Criterion<i32>,
    pub team_name: Criterion<Option<String>>,
}

impl PlayerQueryParam {
    /// Creates a filter that matches every player
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Criterion::Equals(name.into());
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = Criterion::Equals(age);
        self
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Criterion::Equals(Some(team_name.into()));
        self
    }

    /// Restricts the search to players that have no team
    pub fn without_team(mut self) -> Self {
        self.team_name = Criterion::Equals(None);
        self
    }

    /// True when no field is constrained
    pub fn is_unconstrained(&self) -> bool {
        self.name.is_any() && self.age.is_any() && self.team_name.is_any()
    }
}

/// Loosely-typed filter as it arrives from a query string or environment
///
/// Absent fields become `Criterion::Any`. There is no way to express
/// "no team" here; build a `PlayerQueryParam` directly for that.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerQueryInput {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub team_name: Option<String>,
}

impl From<PlayerQueryInput> for PlayerQueryParam {
    fn from(input: PlayerQueryInput) -> Self {
        Self {
            name: input.name.into(),
            age: input.age.into(),
            team_name: input.team_name.map(Some).into(),
        }
    }
}
