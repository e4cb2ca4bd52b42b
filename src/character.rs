use crate::catalog::OrganizationKind;
use crate::constants::NUM_SKILLS;
use crate::energy::{EnergyPool, EnergyType};
use crate::professions::{profession_bonus, BonusValue, Profession};
use crate::progression;
use crate::weekly_tasks::WeeklyTaskProgress;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Skill levels a character has invested points into.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillLevels {
    pub stamina: u32,
    pub haki: u32,
    pub resistance: u32,
    pub haki_armament: u32,
    pub haki_observation: u32,
    pub fighting_style: u32,
    pub weapon: u32,
    pub devil_fruit: u32,
    pub profession: u32,
    pub race: u32,
}

impl SkillLevels {
    pub fn values(&self) -> [u32; NUM_SKILLS] {
        [
            self.stamina,
            self.haki,
            self.resistance,
            self.haki_armament,
            self.haki_observation,
            self.fighting_style,
            self.weapon,
            self.devil_fruit,
            self.profession,
            self.race,
        ]
    }

    /// Points spent across all skills.
    pub fn total(&self) -> u32 {
        self.values().iter().fold(0u32, |acc, v| acc.saturating_add(*v))
    }

    pub fn for_energy(&self, energy: EnergyType) -> u32 {
        match energy {
            EnergyType::Stamina => self.stamina,
            EnergyType::Haki => self.haki,
            EnergyType::Resistance => self.resistance,
        }
    }
}

/// Current energy values. Maxima are derived from skill levels.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CurrentEnergies {
    pub stamina: u64,
    pub haki: u64,
    pub resistance: u64,
}

impl CurrentEnergies {
    pub fn get(&self, energy: EnergyType) -> u64 {
        match energy {
            EnergyType::Stamina => self.stamina,
            EnergyType::Haki => self.haki,
            EnergyType::Resistance => self.resistance,
        }
    }

    pub fn set(&mut self, energy: EnergyType, value: u64) {
        match energy {
            EnergyType::Stamina => self.stamina = value,
            EnergyType::Haki => self.haki = value,
            EnergyType::Resistance => self.resistance = value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Organization {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: OrganizationKind,
    pub position: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryItem {
    pub item: String,
    pub quantity: u32,
}

/// Islands visited, by island tier.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Islands {
    pub level1: u32,
    pub level2: u32,
    pub level3: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BattlePass {
    pub bronze: u32,
    pub gold: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DailyMissions {
    pub scenes: u32,
    pub combat: u32,
}

/// EXP granted outside the level table.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExpBonus {
    pub initial: u64,
    pub tutorial: u64,
    pub punishments: u64,
}

/// A character sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub nickname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<NaiveDate>,
    #[serde(default)]
    pub xp: u64,
    pub level: u32,
    #[serde(default)]
    pub bounty: u64,
    #[serde(default)]
    pub energies: CurrentEnergies,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub diary: String,
    #[serde(default)]
    pub devil_fruit: String,
    #[serde(default)]
    pub haki: String,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    #[serde(default)]
    pub fighting_style: Vec<String>,
    #[serde(default)]
    pub victories: u32,
    #[serde(default)]
    pub defeats: u32,
    #[serde(default)]
    pub islands: Islands,
    #[serde(default)]
    pub tasks: u32,
    #[serde(default)]
    pub skill_points: u32,
    #[serde(default)]
    pub skill_levels: SkillLevels,
    #[serde(default)]
    pub battle_pass: BattlePass,
    #[serde(default)]
    pub daily_missions: DailyMissions,
    #[serde(default)]
    pub exp_bonus: ExpBonus,
    #[serde(default)]
    pub weekly_tasks: WeeklyTaskProgress,
}

impl Character {
    /// Creates a level 1 character with a fresh id.
    pub fn new(user_id: String, name: String, nickname: String) -> Self {
        use uuid::Uuid;

        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            name,
            nickname,
            race: None,
            profession: None,
            appearance: None,
            age: None,
            creation_date: None,
            xp: 0,
            level: 1,
            bounty: 0,
            energies: CurrentEnergies::default(),
            background: String::new(),
            diary: String::new(),
            devil_fruit: String::new(),
            haki: String::new(),
            inventory: Vec::new(),
            organization: None,
            fighting_style: Vec::new(),
            victories: 0,
            defeats: 0,
            islands: Islands::default(),
            tasks: 0,
            skill_points: 1,
            skill_levels: SkillLevels::default(),
            battle_pass: BattlePass::default(),
            daily_missions: DailyMissions::default(),
            exp_bonus: ExpBonus::default(),
            weekly_tasks: WeeklyTaskProgress::default(),
        }
    }

    pub fn energy(&self, energy: EnergyType) -> EnergyPool {
        EnergyPool::new(
            self.energies.get(energy),
            energy.max_for_level(self.skill_levels.for_energy(energy)),
        )
    }

    pub fn energies(&self) -> [(EnergyType, EnergyPool); 3] {
        EnergyType::all().map(|e| (e, self.energy(e)))
    }

    /// Sum of the three energy maxima, used for the strength ranking.
    pub fn total_power(&self) -> u64 {
        EnergyType::all()
            .iter()
            .map(|e| self.energy(*e).max)
            .sum()
    }

    /// Level implied by accumulated experience.
    pub fn derived_level(&self) -> u32 {
        progression::level_from_experience(self.xp)
    }

    pub fn next_level_threshold(&self) -> u64 {
        progression::next_level_threshold(self.level)
    }

    pub fn level_progress_percent(&self) -> f64 {
        progression::level_progress_percent(self.xp, self.level)
    }

    pub fn used_skill_points(&self) -> u32 {
        self.skill_levels.total()
    }

    pub fn available_skill_points(&self) -> u32 {
        progression::available_skill_points(self.level, self.used_skill_points())
    }

    pub fn profession_kind(&self) -> Option<Profession> {
        self.profession.as_deref().and_then(Profession::from_name)
    }

    /// Bonus at the character's profession skill level; 1 without a profession.
    pub fn profession_bonus(&self) -> BonusValue {
        match &self.profession {
            Some(name) => profession_bonus(name, self.skill_levels.profession),
            None => BonusValue::default(),
        }
    }

    pub fn organization_kind(&self) -> Option<OrganizationKind> {
        self.organization.as_ref().map(|o| o.kind)
    }

    /// Pirates are crew members or anyone carrying a bounty.
    pub fn is_pirate(&self) -> bool {
        self.organization_kind() == Some(OrganizationKind::PirateCrew) || self.bounty > 0
    }

    /// Adds experience and syncs the level with the experience table.
    /// Returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: u64) -> u32 {
        self.xp = self.xp.saturating_add(amount);
        let level = self.derived_level();
        let gained = level.saturating_sub(self.level);
        if gained > 0 {
            self.level = level;
        }
        gained
    }

    /// Records a completed profession task and credits the awarded EXP.
    pub fn complete_weekly_task(&mut self, today: NaiveDate) -> u64 {
        let awarded = self.weekly_tasks.record_task(today);
        self.tasks = self.tasks.saturating_add(1);
        self.gain_experience(awarded);
        awarded
    }

    pub fn win_rate(&self) -> f64 {
        let fights = self.victories as u64 + self.defeats as u64;
        if fights == 0 {
            return 0.0;
        }
        self.victories as f64 / fights as f64 * 100.0
    }
}
