use uuid::Uuid;

use crate::domain::team::Team;

/// Player aggregate root
///
/// The player is the owning side of the player/team association: it holds
/// the team reference and nothing on the team side mirrors it.
///
/// # Invariants
/// - Name cannot be empty
/// - Age and weekly salary are never negative
/// - A player references at most one team at a time
///
/// # Example
/// ```
/// use roster_query_api::domain::player::Player;
/// use roster_query_api::domain::team::Team;
///
/// let spurs = Team::new("Tottenham Hotspur F.C.").expect("valid team");
/// let mut son = Player::new("Heungmin Son", 29, Some(&spurs)).expect("valid player");
/// son.contract_salary(140_000).expect("valid salary");
/// son.begin_season();
///
/// assert_eq!(son.team_id(), Some(spurs.id()));
/// assert!(son.in_season());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: Uuid,
    name: String,
    age: i32,
    team_id: Option<Uuid>,
    in_season: bool,
    weekly_salary: i32,
}

impl Player {
    /// Creates a new Player aggregate
    ///
    /// # Arguments
    /// * `name` - The player's name (cannot be empty)
    /// * `age` - The player's age (cannot be negative)
    /// * `team` - Optional team the player joins on creation
    ///
    /// # Business Rules Enforced
    /// - Initial season state is off
    /// - Initial weekly salary is zero
    pub fn new(name: impl Into<String>, age: i32, team: Option<&Team>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Player name cannot be empty".to_string());
        }

        if age < 0 {
            return Err(format!("Player age cannot be negative: {}", age));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            age,
            team_id: team.map(Team::id),
            in_season: false,
            weekly_salary: 0,
        })
    }

    /// Moves the player to `team`, replacing any previous team
    pub fn change_team(&mut self, team: &Team) {
        self.team_id = Some(team.id());
    }

    /// Detaches the player from its current team, if any
    pub fn leave_team(&mut self) {
        self.team_id = None;
    }

    pub fn begin_season(&mut self) {
        self.in_season = true;
    }

    pub fn end_season(&mut self) {
        self.in_season = false;
    }

    /// Sets the weekly salary
    ///
    /// # Returns
    /// * `Err(String)` - If the salary is negative
    pub fn contract_salary(&mut self, weekly_salary: i32) -> Result<(), String> {
        if weekly_salary < 0 {
            return Err(format!("Weekly salary cannot be negative: {}", weekly_salary));
        }

        self.weekly_salary = weekly_salary;
        Ok(())
    }

    /// Raises the weekly salary by `rate` (0.1 is a ten percent raise)
    ///
    /// The result is truncated toward zero. A rate that would push the salary
    /// below zero is rejected.
    pub fn raise_salary(&mut self, rate: f32) -> Result<(), String> {
        if !rate.is_finite() {
            return Err(format!("Salary raise rate must be finite: {}", rate));
        }
        let current = self.weekly_salary as f64;
        let raised = (current + current * rate as f64).trunc();
        if raised < 0.0 || raised > i32::MAX as f64 {
            return Err(format!("Salary raise out of range: rate {}", rate));
        }

        self.weekly_salary = raised as i32;
        Ok(())
    }

    // ===== Getters =====

    /// Returns the player's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    /// Returns the referenced team's ID, if the player has a team
    pub fn team_id(&self) -> Option<Uuid> {
        self.team_id
    }

    pub fn in_season(&self) -> bool {
        self.in_season
    }

    pub fn weekly_salary(&self) -> i32 {
        self.weekly_salary
    }

    /// Reconstructs a Player from persistence layer data
    ///
    /// Bypasses validation since stored rows were validated on the way in.
    /// Only to be used by repository implementations.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        age: i32,
        team_id: Option<Uuid>,
        in_season: bool,
        weekly_salary: i32,
    ) -> Self {
        Self {
            id,
            name,
            age,
            team_id,
            in_season,
            weekly_salary,
        }
    }
}
