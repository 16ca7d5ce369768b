//! Wildlife components: species templates, rarity, and per-creature state.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::common::{Color, Size, Vec2};

/// How hard a species is to catch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
}

impl Rarity {
    /// Probability that a single capture attempt succeeds
    pub fn success_rate(self) -> f32 {
        match self {
            Rarity::Common => 0.7,
            Rarity::Uncommon => 0.5,
            Rarity::Rare => 0.3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
        }
    }
}

/// Immutable per-species data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreatureTemplate {
    pub name: &'static str,
    pub color: Color,
    pub size: Size,
    /// Multiplier applied to velocity each frame
    pub speed: f32,
    pub health: u32,
    pub rarity: Rarity,
}

/// The five species that roam the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureKind {
    Deer,
    Wolf,
    Eagle,
    Bear,
    Rabbit,
}

static TEMPLATES: [CreatureTemplate; 5] = [
    CreatureTemplate {
        name: "Deer",
        color: Color::hex(0x8b4513),
        size: Size::new(40.0, 25.0),
        speed: 1.5,
        health: 30,
        rarity: Rarity::Common,
    },
    CreatureTemplate {
        name: "Wolf",
        color: Color::hex(0x696969),
        size: Size::new(35.0, 20.0),
        speed: 2.0,
        health: 50,
        rarity: Rarity::Uncommon,
    },
    CreatureTemplate {
        name: "Eagle",
        color: Color::hex(0x8b4513),
        size: Size::new(30.0, 35.0),
        speed: 3.0,
        health: 25,
        rarity: Rarity::Uncommon,
    },
    CreatureTemplate {
        name: "Bear",
        color: Color::hex(0x5c4033),
        size: Size::new(50.0, 40.0),
        speed: 1.2,
        health: 80,
        rarity: Rarity::Rare,
    },
    CreatureTemplate {
        name: "Rabbit",
        color: Color::hex(0xd2b48c),
        size: Size::new(20.0, 15.0),
        speed: 2.5,
        health: 15,
        rarity: Rarity::Common,
    },
];

impl CreatureKind {
    pub const ALL: [CreatureKind; 5] = [
        CreatureKind::Deer,
        CreatureKind::Wolf,
        CreatureKind::Eagle,
        CreatureKind::Bear,
        CreatureKind::Rabbit,
    ];

    pub fn template(self) -> &'static CreatureTemplate {
        &TEMPLATES[self as usize]
    }

    /// Pick a species uniformly at random
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Marker + species for a wildlife entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    pub kind: CreatureKind,
}

impl Creature {
    pub fn new(kind: CreatureKind) -> Self {
        Self { kind }
    }

    pub fn template(&self) -> &'static CreatureTemplate {
        self.kind.template()
    }
}

/// Spawn point a creature drifts back towards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Home {
    pub origin: Vec2,
    /// Distance beyond which homing bias kicks in
    pub roam_radius: f32,
}

impl Home {
    pub fn new(origin: Vec2, roam_radius: f32) -> Self {
        Self {
            origin,
            roam_radius,
        }
    }
}

/// Position of a creature in the population list.
///
/// hecs reorders archetype storage on despawn, so scans that care about
/// population order sort by this instead of trusting query order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpawnOrder(pub u32);
