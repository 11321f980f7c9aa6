//! Data-driven game balance
//!
//! Per-difficulty and per-biome parameter tables. Everything the simulation
//! needs to know about a difficulty or biome is looked up here.

use serde::{Deserialize, Serialize};

/// Difficulty selected when a session is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Insane,
    Expert,
    Masochist,
}

/// Parameters for one difficulty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyConfig {
    pub label: &'static str,
    /// Vertical size of the gap band (px)
    pub gap_size: f32,
    /// Scroll speed (px per reference frame)
    pub speed: f32,
    /// Horizontal spacing between obstacles (px)
    pub obstacle_spacing: f32,
    /// Lets the hazard spawner run even in hazard-free biomes
    pub rockets_enabled: bool,
    /// Obstacles periodically fade out
    pub invisible_mode: bool,
    /// Host shakes the playfield while playing
    pub screen_shake: bool,
}

const EASY: DifficultyConfig = DifficultyConfig {
    label: "Easy",
    gap_size: 200.0,
    speed: 3.0,
    obstacle_spacing: 500.0,
    rockets_enabled: false,
    invisible_mode: false,
    screen_shake: false,
};

const NORMAL: DifficultyConfig = DifficultyConfig {
    label: "Normal",
    gap_size: 170.0,
    speed: 4.0,
    obstacle_spacing: 400.0,
    rockets_enabled: false,
    invisible_mode: false,
    screen_shake: false,
};

const HARD: DifficultyConfig = DifficultyConfig {
    label: "Hard",
    gap_size: 150.0,
    speed: 5.0,
    obstacle_spacing: 350.0,
    rockets_enabled: false,
    invisible_mode: false,
    screen_shake: false,
};

const INSANE: DifficultyConfig = DifficultyConfig {
    label: "Insane",
    gap_size: 140.0,
    speed: 6.0,
    obstacle_spacing: 300.0,
    rockets_enabled: true,
    invisible_mode: false,
    screen_shake: false,
};

const EXPERT: DifficultyConfig = DifficultyConfig {
    label: "Expert",
    gap_size: 120.0,
    speed: 7.0,
    obstacle_spacing: 280.0,
    rockets_enabled: true,
    invisible_mode: false,
    screen_shake: false,
};

const MASOCHIST: DifficultyConfig = DifficultyConfig {
    label: "Masochist",
    gap_size: 110.0,
    speed: 8.0,
    obstacle_spacing: 250.0,
    rockets_enabled: true,
    invisible_mode: true,
    screen_shake: true,
};

impl Difficulty {
    pub const ALL: [Difficulty; 6] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Insane,
        Difficulty::Expert,
        Difficulty::Masochist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Insane => "insane",
            Difficulty::Expert => "expert",
            Difficulty::Masochist => "masochist",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }

    pub fn config(&self) -> &'static DifficultyConfig {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Normal => &NORMAL,
            Difficulty::Hard => &HARD,
            Difficulty::Insane => &INSANE,
            Difficulty::Expert => &EXPERT,
            Difficulty::Masochist => &MASOCHIST,
        }
    }
}

/// Hazard types a biome can throw at the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardKind {
    /// Falling spike
    Spike,
    /// Pillar of fire drifting up or down
    FirePillar,
    /// Full-width beam
    Laser,
    /// Fast projectile flying toward the player
    Rocket,
}

impl HazardKind {
    /// Default (width, height)
    pub fn size(&self) -> (f32, f32) {
        match self {
            HazardKind::Spike => (40.0, 60.0),
            HazardKind::FirePillar => (50.0, 120.0),
            HazardKind::Laser => (crate::consts::GAME_WIDTH, 8.0),
            HazardKind::Rocket => (40.0, 20.0),
        }
    }

    /// Pillars and spikes bounce between the top and bottom edges
    pub fn oscillates(&self) -> bool {
        matches!(self, HazardKind::Spike | HazardKind::FirePillar)
    }
}

/// Score-derived theme bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Biome {
    #[default]
    Forest,
    Ice,
    Magma,
    Void,
}

/// Parameters for one biome
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiomeConfig {
    pub name: &'static str,
    /// Multiplier on base gravity
    pub gravity: f32,
    pub hazards: &'static [HazardKind],
}

const FOREST: BiomeConfig = BiomeConfig {
    name: "Forest",
    gravity: 1.0,
    hazards: &[],
};

const ICE: BiomeConfig = BiomeConfig {
    name: "Ice Cavern",
    gravity: 1.0,
    hazards: &[HazardKind::Spike],
};

const MAGMA: BiomeConfig = BiomeConfig {
    name: "Magma Core",
    gravity: 1.1,
    hazards: &[HazardKind::FirePillar],
};

const VOID: BiomeConfig = BiomeConfig {
    name: "Cyber Void",
    gravity: 1.0,
    hazards: &[HazardKind::Laser, HazardKind::Rocket],
};

impl Biome {
    /// Biome order as the score climbs
    pub const ORDER: [Biome; 4] = [Biome::Forest, Biome::Ice, Biome::Magma, Biome::Void];

    /// Biome for a score. Pure: equal scores always map to the same biome.
    pub fn for_score(score: u64) -> Self {
        match score {
            0..10 => Biome::Forest,
            10..25 => Biome::Ice,
            25..45 => Biome::Magma,
            _ => Biome::Void,
        }
    }

    pub fn config(&self) -> &'static BiomeConfig {
        match self {
            Biome::Forest => &FOREST,
            Biome::Ice => &ICE,
            Biome::Magma => &MAGMA,
            Biome::Void => &VOID,
        }
    }
}
