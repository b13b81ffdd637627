//! Fixed genre and platform catalogs with their sampling weights and
//! the cross-field factors the generator applies per category.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    #[serde(rename = "RPG")]
    Rpg,
    Strategy,
    Simulation,
    Sports,
    Racing,
    Indie,
    Puzzle,
    Horror,
}

impl Genre {
    /// Catalog order; sampling walks this order, so it is part of the
    /// seed-compatibility contract.
    pub const ALL: [Self; 10] = [
        Self::Action,
        Self::Adventure,
        Self::Rpg,
        Self::Strategy,
        Self::Simulation,
        Self::Sports,
        Self::Racing,
        Self::Indie,
        Self::Puzzle,
        Self::Horror,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Rpg => "RPG",
            Self::Strategy => "Strategy",
            Self::Simulation => "Simulation",
            Self::Sports => "Sports",
            Self::Racing => "Racing",
            Self::Indie => "Indie",
            Self::Puzzle => "Puzzle",
            Self::Horror => "Horror",
        }
    }

    /// Sampling weight; the full catalog sums to 1.0.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::Action => 0.18,
            Self::Adventure => 0.10,
            Self::Rpg => 0.15,
            Self::Strategy => 0.08,
            Self::Simulation => 0.08,
            Self::Sports => 0.10,
            Self::Racing => 0.07,
            Self::Indie => 0.14,
            Self::Puzzle => 0.06,
            Self::Horror => 0.04,
        }
    }

    /// Additive metascore bonus applied on top of the base score.
    #[must_use]
    pub const fn score_bonus(self) -> f64 {
        match self {
            Self::Indie => 5.0,
            Self::Rpg => 3.0,
            _ => 0.0,
        }
    }

    /// Multiplier applied to the raw hours-played draw.
    #[must_use]
    pub const fn hours_factor(self) -> f64 {
        match self {
            Self::Rpg => 1.8,
            Self::Strategy => 1.3,
            _ => 1.0,
        }
    }

    /// Additive term in the multiplayer probability. Genre is
    /// single-valued, so the total probability stays within [0.15, 1.0].
    #[must_use]
    pub const fn multiplayer_boost(self) -> f64 {
        match self {
            Self::Action => 0.65,
            Self::Sports => 0.35,
            _ => 0.0,
        }
    }

    /// Draw one genre from the weighted catalog distribution.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let mut roll: f64 = rng.r#gen();
        for genre in Self::ALL {
            let weight = genre.weight();
            if roll < weight {
                return genre;
            }
            roll -= weight;
        }
        Self::Horror
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "PC")]
    Pc,
    PlayStation,
    Xbox,
    Switch,
    Mobile,
}

impl Platform {
    /// Catalog order; part of the seed-compatibility contract.
    pub const ALL: [Self; 5] = [
        Self::Pc,
        Self::PlayStation,
        Self::Xbox,
        Self::Switch,
        Self::Mobile,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::PlayStation => "PlayStation",
            Self::Xbox => "Xbox",
            Self::Switch => "Switch",
            Self::Mobile => "Mobile",
        }
    }

    /// Sampling weight; the full catalog sums to 1.0.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::Pc => 0.45,
            Self::PlayStation => 0.20,
            Self::Xbox => 0.18,
            Self::Switch => 0.12,
            Self::Mobile => 0.05,
        }
    }

    /// Launch-price baseline before noise and the year trend.
    #[must_use]
    pub const fn base_price(self) -> f64 {
        match self {
            Self::Pc => 40.0,
            Self::PlayStation => 55.0,
            Self::Xbox => 55.0,
            Self::Switch => 50.0,
            Self::Mobile => 5.0,
        }
    }

    /// Draw one platform from the weighted catalog distribution.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let mut roll: f64 = rng.r#gen();
        for platform in Self::ALL {
            let weight = platform.weight();
            if roll < weight {
                return platform;
            }
            roll -= weight;
        }
        Self::Mobile
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
