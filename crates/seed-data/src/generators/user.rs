//! Superhero users.

use rand::Rng;

use octofit::models::User;

use super::{random_id, team::TeamRoster};

/// A fixed email/name pair for a seeded user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hero {
    pub email: &'static str,
    pub name: &'static str,
}

const fn hero(email: &'static str, name: &'static str) -> Hero {
    Hero { email, name }
}

pub const MARVEL_HEROES: &[Hero] = &[
    hero("tony.stark@avengers.com", "Tony Stark"),
    hero("steve.rogers@avengers.com", "Steve Rogers"),
    hero("natasha.romanoff@avengers.com", "Natasha Romanoff"),
    hero("bruce.banner@avengers.com", "Bruce Banner"),
    hero("thor.odinson@asgard.com", "Thor Odinson"),
    hero("peter.parker@spiderman.com", "Peter Parker"),
];

pub const DC_HEROES: &[Hero] = &[
    hero("clark.kent@dailyplanet.com", "Clark Kent"),
    hero("bruce.wayne@wayneenterprises.com", "Bruce Wayne"),
    hero("diana.prince@themyscira.com", "Diana Prince"),
    hero("barry.allen@ccpd.com", "Barry Allen"),
    hero("arthur.curry@atlantis.com", "Arthur Curry"),
    hero("hal.jordan@greenlantern.com", "Hal Jordan"),
];

/// Turns rosters into users tagged with their team's name.
pub struct UserGenerator {
    rosters: &'static [TeamRoster],
}

impl UserGenerator {
    pub fn new(rosters: &'static [TeamRoster]) -> Self {
        Self { rosters }
    }

    /// Generates every rostered user, team by team in roster order.
    pub fn generate(&self, rng: &mut impl Rng) -> Vec<User> {
        self.rosters
            .iter()
            .flat_map(|roster| roster.heroes.iter().map(move |h| (roster.name, h)))
            .map(|(team_name, hero)| User::new(random_id(rng), hero.email, hero.name, team_name))
            .collect()
    }
}
