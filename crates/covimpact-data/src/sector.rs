//! Economic sector definitions for the business universe.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Economic sectors covered by the impact analysis (5 sectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    /// Retail
    Retail,

    /// Hospitality
    Hospitality,

    /// Manufacturing
    Manufacturing,

    /// Services
    Services,

    /// Healthcare
    Healthcare,
}

impl Sector {
    /// Returns all sectors.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Retail,
            Self::Hospitality,
            Self::Manufacturing,
            Self::Services,
            Self::Healthcare,
        ]
    }

    /// Returns the sector code (2-digit).
    pub const fn code(&self) -> u8 {
        match self {
            Self::Retail => 10,
            Self::Hospitality => 20,
            Self::Manufacturing => 30,
            Self::Services => 40,
            Self::Healthcare => 50,
        }
    }

    /// Returns the sector name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Retail => "Retail",
            Self::Hospitality => "Hospitality",
            Self::Manufacturing => "Manufacturing",
            Self::Services => "Services",
            Self::Healthcare => "Healthcare",
        }
    }

    /// Parse a sector from its code.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            10 => Some(Self::Retail),
            20 => Some(Self::Hospitality),
            30 => Some(Self::Manufacturing),
            40 => Some(Self::Services),
            50 => Some(Self::Healthcare),
            _ => None,
        }
    }

    /// Parse a sector from its name (case insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "retail" => Some(Self::Retail),
            "hospitality" => Some(Self::Hospitality),
            "manufacturing" => Some(Self::Manufacturing),
            "services" => Some(Self::Services),
            "healthcare" => Some(Self::Healthcare),
            _ => None,
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
