//! Team generation for seeding.

use rand::Rng;

use octofit::models::Team;

use super::{
    random_id,
    user::{DC_HEROES, Hero, MARVEL_HEROES},
};

pub const TEAM_MARVEL: &str = "Team Marvel";
pub const TEAM_DC: &str = "Team DC";

/// A team name together with the heroes who belong to it.
#[derive(Debug, Clone, Copy)]
pub struct TeamRoster {
    pub name: &'static str,
    pub heroes: &'static [Hero],
}

pub const ROSTERS: &[TeamRoster] = &[
    TeamRoster {
        name: TEAM_MARVEL,
        heroes: MARVEL_HEROES,
    },
    TeamRoster {
        name: TEAM_DC,
        heroes: DC_HEROES,
    },
];

/// Generates one team per roster.
pub struct TeamGenerator {
    rosters: &'static [TeamRoster],
}

impl TeamGenerator {
    pub fn new(rosters: &'static [TeamRoster]) -> Self {
        Self { rosters }
    }

    pub fn generate(&self, rng: &mut impl Rng) -> Vec<Team> {
        self.rosters
            .iter()
            .map(|roster| Team::new(random_id(rng), roster.name))
            .collect()
    }
}

impl Default for TeamGenerator {
    fn default() -> Self {
        Self::new(ROSTERS)
    }
}
