use crate::constants::{
    HAKI_PER_LEVEL, RESISTANCE_BASE, RESISTANCE_FIRST_LEVEL, RESISTANCE_PER_LEVEL,
    STAMINA_PER_LEVEL,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EnergyType {
    Stamina,
    Haki,
    Resistance,
}

impl EnergyType {
    pub fn all() -> [EnergyType; 3] {
        [EnergyType::Stamina, EnergyType::Haki, EnergyType::Resistance]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EnergyType::Stamina => "Stamina",
            EnergyType::Haki => "Haki",
            EnergyType::Resistance => "Resistência",
        }
    }

    /// Maximum energy for a skill level in this energy type.
    pub fn max_for_level(&self, level: u32) -> u64 {
        match self {
            EnergyType::Stamina => stamina_max(level),
            EnergyType::Haki => haki_max(level),
            EnergyType::Resistance => resistance_max(level),
        }
    }
}

pub fn stamina_max(level: u32) -> u64 {
    level as u64 * STAMINA_PER_LEVEL
}

pub fn haki_max(level: u32) -> u64 {
    level as u64 * HAKI_PER_LEVEL
}

/// Resistance is HP, so level 0 still grants a base pool. Level 1 jumps
/// by 90,000 from there; every level after adds 100,000.
pub fn resistance_max(level: u32) -> u64 {
    match level {
        0 => RESISTANCE_BASE,
        1 => RESISTANCE_FIRST_LEVEL,
        _ => RESISTANCE_FIRST_LEVEL + (level as u64 - 1) * RESISTANCE_PER_LEVEL,
    }
}

/// Current/max pair for one energy type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnergyPool {
    pub current: u64,
    pub max: u64,
}

impl EnergyPool {
    pub fn new(current: u64, max: u64) -> Self {
        Self { current, max }
    }

    /// Fill ratio as a percentage, capped at 100.
    pub fn percent(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        (self.current as f64 / self.max as f64 * 100.0).min(100.0)
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Pool with `current` clamped to `max`.
    pub fn clamped(&self) -> Self {
        Self {
            current: self.current.min(self.max),
            max: self.max,
        }
    }
}
