use uuid::Uuid;

/// Team aggregate root
///
/// A team owns no collection of players. Its roster is whatever set of
/// players currently reference its id, and is read through
/// `PlayerRepository::find_by_team`.
///
/// # Invariants
/// - Name cannot be empty
///
/// # Example
/// ```
/// use roster_query_api::domain::team::Team;
///
/// let team = Team::new("Tottenham Hotspur F.C.").expect("valid team");
/// assert_eq!(team.name(), "Tottenham Hotspur F.C.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Uuid,
    name: String,
}

impl Team {
    /// Creates a new Team aggregate
    ///
    /// # Returns
    /// * `Ok(Team)` - New team with a fresh id
    /// * `Err(String)` - If the name is empty
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
        })
    }

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Only to be used by repository implementations.
    pub fn from_persistence(id: Uuid, name: String) -> Self {
        Self { id, name }
    }
}
