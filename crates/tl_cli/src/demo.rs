//! Seeded demo squads for running without team files.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use tl_core::{Attributes, Position, SquadPlayer, Team};

struct Club {
    id: &'static str,
    name: &'static str,
    short_name: &'static str,
    primary_color: &'static str,
    stadium: &'static str,
}

const CLUBS: [Club; 4] = [
    Club { id: "harbour", name: "Harbour Athletic", short_name: "HAR", primary_color: "#1d4ed8", stadium: "Quayside Ground" },
    Club { id: "millbrook", name: "Millbrook Rovers", short_name: "MIL", primary_color: "#b91c1c", stadium: "The Mill" },
    Club { id: "eastgate", name: "Eastgate United", short_name: "EGU", primary_color: "#15803d", stadium: "Eastgate Park" },
    Club { id: "northcliff", name: "Northcliff Town", short_name: "NCT", primary_color: "#a16207", stadium: "Cliff Road" },
];

/// Starting XI in 4-3-3 slot order, then substitutes.
const SQUAD_SHAPE: [Position; 16] = [
    Position::GK,
    Position::DEF,
    Position::DEF,
    Position::DEF,
    Position::DEF,
    Position::MID,
    Position::MID,
    Position::MID,
    Position::FWD,
    Position::FWD,
    Position::FWD,
    Position::GK,
    Position::DEF,
    Position::MID,
    Position::MID,
    Position::FWD,
];

const SURNAMES: [&str; 16] = [
    "Ashby", "Brennan", "Calloway", "Dunmore", "Ellery", "Fairbank", "Garside", "Hollins",
    "Iverson", "Jessop", "Kettley", "Lomax", "Marwood", "Norcott", "Oakes", "Pendle",
];

pub fn club_count() -> usize {
    CLUBS.len()
}

/// Squad for club `index` (wrapping). Same seed, same squad.
pub fn demo_team(index: usize, seed: u64) -> Team {
    let club = &CLUBS[index % CLUBS.len()];
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ ((index as u64 + 1) << 32));

    let squad = SQUAD_SHAPE
        .iter()
        .enumerate()
        .map(|(i, &position)| {
            let rating: u8 = rng.gen_range(70..=88);
            let surname = SURNAMES[(i + index * 5) % SURNAMES.len()];
            demo_player(&mut rng, format!("{}{}", club.id, i + 1), format!("{} {}", surname, i + 1), position, rating)
        })
        .collect();

    Team {
        id: club.id.to_string(),
        name: club.name.to_string(),
        short_name: club.short_name.to_string(),
        primary_color: club.primary_color.to_string(),
        secondary_color: "#ffffff".to_string(),
        stadium: club.stadium.to_string(),
        squad,
    }
}

fn demo_player<R: Rng>(rng: &mut R, id: String, name: String, position: Position, rating: u8) -> SquadPlayer {
    let base = rating as f32;
    let scaled = |factor: f32| (base * factor).floor().min(99.0) as u8;

    let (sho, pas, dri, def) = match position {
        Position::FWD => (0.9, 0.7, 0.85, 0.4),
        Position::MID => (0.6, 0.9, 0.85, 0.4),
        Position::DEF => (0.6, 0.7, 0.6, 0.9),
        Position::GK => (0.6, 0.7, 0.6, 0.4),
    };
    let traits = match position {
        Position::FWD => ["Clinical", "Fast"],
        Position::MID => ["Vision", "Passer"],
        Position::DEF => ["Strong", "Tackle"],
        Position::GK => ["Reflexes", "Agile"],
    };

    SquadPlayer {
        id,
        name,
        position,
        rating,
        morale: 80,
        fitness: 100,
        traits: traits.iter().map(|t| t.to_string()).collect(),
        attributes: Attributes {
            pac: scaled(0.8 + rng.gen::<f32>() * 0.3),
            sho: scaled(sho),
            pas: scaled(pas),
            dri: scaled(dri),
            def: scaled(def),
            phy: scaled(0.7 + rng.gen::<f32>() * 0.3),
        },
    }
}
