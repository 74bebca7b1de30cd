//! Shared fixtures for integration tests

#![allow(dead_code)]

use roster_query_api::domain::player::Player;
use roster_query_api::domain::repositories::{PlayerRepository, TeamRepository};
use roster_query_api::domain::team::Team;

pub const TOTTENHAM: &str = "Tottenham Hotspur F.C.";
pub const MANCHESTER_CITY: &str = "Manchester City F.C.";

/// Teams and players saved by `seed_league`
pub struct League {
    pub tottenham: Team,
    pub manchester_city: Team,
    pub players: Vec<Player>,
}

impl League {
    pub fn tottenham_name(&self) -> &str {
        self.tottenham.name()
    }
}

/// Saves two teams and ten in-season players, eight of them at Tottenham
///
/// `suffix` is appended to both team names so that concurrent runs against a
/// shared database do not see each other's rows.
pub async fn seed_league<R>(repo: &R, suffix: &str) -> League
where
    R: TeamRepository + PlayerRepository,
{
    let tottenham = Team::new(format!("{}{}", TOTTENHAM, suffix)).expect("valid team");
    let manchester_city = Team::new(format!("{}{}", MANCHESTER_CITY, suffix)).expect("valid team");
    TeamRepository::save(repo, &tottenham)
        .await
        .expect("Failed to save Tottenham");
    TeamRepository::save(repo, &manchester_city)
        .await
        .expect("Failed to save Manchester City");

    let roster = [
        ("Harry Kane", 27, &tottenham, 200_000),
        ("Heungmin Son", 29, &tottenham, 140_000),
        ("Kevin De Bruyne", 30, &manchester_city, 350_000),
        ("Raheem Shaquille Sterling", 26, &manchester_city, 300_000),
        ("Dele Alli", 25, &tottenham, 100_000),
        ("Hugo Lloris", 34, &tottenham, 10_000),
        ("Toby Alderweireld", 32, &tottenham, 80_000),
        ("Moussa Sissoko", 31, &tottenham, 80_000),
        ("Erik Lamela", 29, &tottenham, 80_000),
        ("Lukas Moura", 28, &tottenham, 80_000),
    ];

    let mut players = Vec::with_capacity(roster.len());
    for (name, age, team, salary) in roster {
        let mut player = Player::new(name, age, Some(team)).expect("valid player");
        player.contract_salary(salary).expect("valid salary");
        player.begin_season();
        players.push(player);
    }

    repo.save_all(&players)
        .await
        .expect("Failed to save players");

    League {
        tottenham,
        manchester_city,
        players,
    }
}
