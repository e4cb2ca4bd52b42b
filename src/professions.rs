//! The closed profession catalog and bonus lookups.
//!
//! Bonus tables are sparse and mix numeric multipliers with descriptive perks,
//! so lookups return a [`BonusValue`] rather than a number.

use crate::constants::DEFAULT_PROFESSION_BONUS;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Profession {
    #[serde(rename = "Cozinheiro")]
    Cook,
    #[serde(rename = "Médico")]
    Doctor,
    #[serde(rename = "Músico")]
    Musician,
    #[serde(rename = "Carpinteiro")]
    Carpenter,
    #[serde(rename = "Ferreiro")]
    Blacksmith,
    #[serde(rename = "Arqueólogo")]
    Archaeologist,
    #[serde(rename = "Navegador")]
    Navigator,
    #[serde(rename = "Timoneiro")]
    Helmsman,
}

/// A profession bonus: either a multiplier or a perk description.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(untagged)]
pub enum BonusValue {
    Numeric(f64),
    Text(&'static str),
}

impl BonusValue {
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            BonusValue::Numeric(value) => Some(*value),
            BonusValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&'static str> {
        match self {
            BonusValue::Numeric(_) => None,
            BonusValue::Text(text) => Some(*text),
        }
    }
}

impl Default for BonusValue {
    fn default() -> Self {
        BonusValue::Numeric(DEFAULT_PROFESSION_BONUS)
    }
}

impl fmt::Display for BonusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BonusValue::Numeric(value) => write!(f, "{}", value),
            BonusValue::Text(text) => f.write_str(text),
        }
    }
}

/// Static catalog entry for a profession.
#[derive(Debug, Clone, Copy)]
pub struct ProfessionInfo {
    pub profession: Profession,
    pub description: &'static str,
    /// Sorted by level. Levels not listed have no bonus entry.
    pub bonuses: &'static [(u32, BonusValue)],
    pub bonus_type: &'static str,
    pub task: &'static str,
    pub icon: &'static str,
}

impl ProfessionInfo {
    /// Exact-key lookup; `None` when the level has no entry.
    pub fn bonus_at(&self, level: u32) -> Option<BonusValue> {
        self.bonuses
            .iter()
            .find(|(lvl, _)| *lvl == level)
            .map(|(_, bonus)| *bonus)
    }
}

use BonusValue::{Numeric, Text};

const FOOD_BONUSES: [(u32, BonusValue); 6] = [
    (0, Numeric(1.2)),
    (1, Numeric(1.5)),
    (2, Numeric(2.0)),
    (3, Numeric(3.0)),
    (4, Numeric(4.0)),
    (5, Numeric(5.0)),
];

const MUSIC_BONUSES: [(u32, BonusValue); 6] = [
    (0, Numeric(1.0)),
    (1, Numeric(1.2)),
    (2, Numeric(1.4)),
    (3, Numeric(1.6)),
    (4, Numeric(1.8)),
    (5, Numeric(2.0)),
];

const SHIPBUILDING_BONUSES: [(u32, BonusValue); 5] = [
    (1, Text("Construção de Navios (LvL 1)")),
    (2, Text("Construção de Navios (LvL 2)")),
    (3, Text("Construção de Navios (LvL 3)")),
    (4, Text("Construção de Navios (LvL 4)")),
    (5, Text("Construção de Navios (LvL 5)")),
];

const WEAPONSMITH_BONUSES: [(u32, BonusValue); 5] = [
    (1, Text("Fabricação de Armas (LvL 1)")),
    (2, Text("Fabricação de Armas (LvL 2)")),
    (3, Text("Fabricação de Armas (LvL 3)")),
    (4, Text("Fabricação de Armas (LvL 4)")),
    (5, Text("Fabricação de Armas (LvL 5)")),
];

// No level 4 entry.
const TREASURE_BONUSES: [(u32, BonusValue); 4] = [
    (1, Text("2.500¥ Belly")),
    (2, Text("5.000¥ Belly")),
    (3, Text("10.000¥ Belly")),
    (5, Text("Leitura de Poneglyph")),
];

const SPEED_BONUSES: [(u32, BonusValue); 5] = [
    (1, Text("+1x")),
    (2, Text("+2x")),
    (3, Text("+3x")),
    (4, Text("+4x")),
    (5, Text("+5x")),
];

static CATALOG: [ProfessionInfo; 8] = [
    ProfessionInfo {
        profession: Profession::Cook,
        description: "A função do Cozinheiro é cozinhar a comida estocada no armazém do navio, tornando o alimento mais nutritivo para o consumo.",
        bonuses: &FOOD_BONUSES,
        bonus_type: "Alimento",
        task: "Cozinhe um total de 5 vezes no decorrer da semana",
        icon: "👨‍🍳",
    },
    ProfessionInfo {
        profession: Profession::Doctor,
        description: "A função do médico é recuperar a força dos companheiros igual ao cozinheiro, mas o médico faz isso através da medicina. O médico também é capaz de curar os ferimentos de seus aliados.",
        bonuses: &FOOD_BONUSES,
        bonus_type: "Cura",
        task: "Cure 5 vezes no decorrer da semana",
        icon: "⚕️",
    },
    ProfessionInfo {
        profession: Profession::Musician,
        description: "O Músico é um suporte de combate, sendo o único recuperador capaz de recuperar energias durante um combate.",
        bonuses: &MUSIC_BONUSES,
        bonus_type: "Música",
        task: "Toque para o bando (Três Vezes)",
        icon: "🎵",
    },
    ProfessionInfo {
        profession: Profession::Carpenter,
        description: "É responsável pela construção de navios e também pela manutenção do navio, sendo um cargo extremamente importante dentro de qualquer organização.",
        bonuses: &SHIPBUILDING_BONUSES,
        bonus_type: "Construção de Navios",
        task: "Colete Madeira para o estoque do navio (5 vezes)",
        icon: "🔨",
    },
    ProfessionInfo {
        profession: Profession::Blacksmith,
        description: "É responsável pela fabricação de armas no geral, sendo o armeiro do grupo.",
        bonuses: &WEAPONSMITH_BONUSES,
        bonus_type: "Fabricação de Armas",
        task: "Colete Minério para o estoque do navio (5 vezes)",
        icon: "⚒️",
    },
    ProfessionInfo {
        profession: Profession::Archaeologist,
        description: "Estudar ruínas antigas das ilhas, sendo possível encontrar um tesouro especial ao explorar qualquer ilha. A Arqueóloga também é a única capaz de ler os Poneglyph.",
        bonuses: &TREASURE_BONUSES,
        bonus_type: "Tesouro Arqueológico",
        task: "Pise em duas diferentes ilhas no decorrer da semana",
        icon: "📜",
    },
    ProfessionInfo {
        profession: Profession::Navigator,
        description: "A Navegadora conhece na palma de sua mão as correntes marítimas e as alterações no clima, sendo capaz de sempre buscar a melhor rota marítima possível.",
        bonuses: &SPEED_BONUSES,
        bonus_type: "Velocidade (Navegação)",
        task: "Navegue com o Navio, faça duas viagens de Navio no decorrer da semana",
        icon: "🧭",
    },
    ProfessionInfo {
        profession: Profession::Helmsman,
        description: "É responsável por controlar o leme (volante) do navio, sendo útil em situações que o navio está sendo atacado e alguém precisa controlar o leme para realizar manobras evasivas.",
        bonuses: &SPEED_BONUSES,
        bonus_type: "Velocidade (Manobras Evasivas)",
        task: "Treine manobras com o navio (2 vezes)",
        icon: "⚓",
    },
];

pub const UNKNOWN_PROFESSION_DESCRIPTION: &str = "Profissão não encontrada";
pub const UNKNOWN_PROFESSION_TASK: &str = "Tarefa não definida";

impl Profession {
    pub fn all() -> [Profession; 8] {
        [
            Profession::Cook,
            Profession::Doctor,
            Profession::Musician,
            Profession::Carpenter,
            Profession::Blacksmith,
            Profession::Archaeologist,
            Profession::Navigator,
            Profession::Helmsman,
        ]
    }

    /// Display name, as stored on character records.
    pub fn name(&self) -> &'static str {
        match self {
            Profession::Cook => "Cozinheiro",
            Profession::Doctor => "Médico",
            Profession::Musician => "Músico",
            Profession::Carpenter => "Carpinteiro",
            Profession::Blacksmith => "Ferreiro",
            Profession::Archaeologist => "Arqueólogo",
            Profession::Navigator => "Navegador",
            Profession::Helmsman => "Timoneiro",
        }
    }

    pub fn from_name(name: &str) -> Option<Profession> {
        Profession::all().into_iter().find(|p| p.name() == name)
    }

    pub fn info(&self) -> &'static ProfessionInfo {
        &CATALOG[*self as usize]
    }

    pub fn bonus(&self, level: u32) -> BonusValue {
        self.info().bonus_at(level).unwrap_or_default()
    }
}

/// Bonus for a profession name at an exact skill level.
///
/// Unknown professions and levels without an entry both yield the neutral
/// `Numeric(1.0)`; there is no interpolation between defined levels.
pub fn profession_bonus(profession: &str, level: u32) -> BonusValue {
    Profession::from_name(profession)
        .map(|p| p.bonus(level))
        .unwrap_or_default()
}

pub fn profession_description(profession: &str) -> &'static str {
    Profession::from_name(profession)
        .map(|p| p.info().description)
        .unwrap_or(UNKNOWN_PROFESSION_DESCRIPTION)
}

pub fn profession_task(profession: &str) -> &'static str {
    Profession::from_name(profession)
        .map(|p| p.info().task)
        .unwrap_or(UNKNOWN_PROFESSION_TASK)
}
