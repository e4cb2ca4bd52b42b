//! Reference lists for character creation: races, fighting styles and
//! organization positions.

use serde::{Deserialize, Serialize};

pub const FIGHTING_STYLES: [&str; 10] = [
    "Estilo Perna Negra",
    "Arte do Tempo",
    "Estilo Três Espadas",
    "Rokushiki",
    "Seiman Kikan",
    "Estilo Livre",
    "Boxe",
    "Karatê do Homem-Peixe",
    "Newkama Kenpo",
    "Hasshoken",
];

pub const RACES: [&str; 10] = [
    "Humano",
    "Homem-Peixe",
    "Tritão",
    "Gigante",
    "Anão Tontatta",
    "Mink",
    "Longarm",
    "Longleg",
    "Três Olhos",
    "Lunário",
];

pub const PIRATE_CREWS: [&str; 8] = [
    "Piratas do Chapéu de Palha",
    "Piratas do Barba Branca",
    "Piratas das Feras",
    "Piratas Big Mom",
    "Piratas do Ruivo",
    "Piratas Heart",
    "Piratas Kid",
    "Tripulação Independente",
];

pub const PIRATE_POSITIONS: [&str; 8] = [
    "Rei Pirata",
    "Grande Frota",
    "Yonkou",
    "Shichibukai",
    "Capitão",
    "Comandante",
    "Tripulante",
    "Aprendiz Pirata",
];

pub const MARINE_RANKS: [&str; 7] = [
    "Goroussei",
    "Almirante da Frota",
    "Almirante",
    "Vice-Almirante",
    "Capitão",
    "Marinheiro",
    "Aprendiz de Marinheiro",
];

pub const REVOLUTIONARY_POSITIONS: [&str; 3] = ["Líder", "Comandante", "Soldado"];

pub const JOURNALIST_AGENCIES: [&str; 3] = [
    "World Economy News Paper",
    "Agência Independente",
    "Correspondente Freelancer",
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationKind {
    PirateCrew,
    MarineRank,
    RevolutionaryArmy,
    JournalistAgency,
}

impl OrganizationKind {
    pub fn all() -> [OrganizationKind; 4] {
        [
            OrganizationKind::PirateCrew,
            OrganizationKind::MarineRank,
            OrganizationKind::RevolutionaryArmy,
            OrganizationKind::JournalistAgency,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrganizationKind::PirateCrew => "Piratas",
            OrganizationKind::MarineRank => "Marinha",
            OrganizationKind::RevolutionaryArmy => "Revolucionários",
            OrganizationKind::JournalistAgency => "Jornalistas",
        }
    }

    /// Ranked positions, highest first. Agencies have no fixed ladder.
    pub fn positions(&self) -> &'static [&'static str] {
        match self {
            OrganizationKind::PirateCrew => &PIRATE_POSITIONS,
            OrganizationKind::MarineRank => &MARINE_RANKS,
            OrganizationKind::RevolutionaryArmy => &REVOLUTIONARY_POSITIONS,
            OrganizationKind::JournalistAgency => &[],
        }
    }

    /// Whether `position` is valid for this kind of organization.
    pub fn accepts_position(&self, position: &str) -> bool {
        let ladder = self.positions();
        ladder.is_empty() || ladder.contains(&position)
    }

    /// Seniority of a position, 0 being the top. `None` if not on the ladder.
    pub fn rank_of(&self, position: &str) -> Option<usize> {
        self.positions().iter().position(|p| *p == position)
    }
}

pub fn is_known_race(race: &str) -> bool {
    RACES.contains(&race)
}

pub fn is_known_fighting_style(style: &str) -> bool {
    FIGHTING_STYLES.contains(&style)
}
