//! Two Piece ON - character progression engine.
//!
//! Experience and level tables, energy maxima, profession bonuses and weekly
//! task rewards, plus the in-memory character, news and interview stores
//! that feed them.

pub mod build_info;
pub mod bulletin;
pub mod catalog;
pub mod character;
pub mod constants;
pub mod energy;
pub mod error;
pub mod professions;
pub mod progression;
pub mod rankings;
pub mod store;
pub mod weekly_tasks;

pub use character::Character;
pub use energy::{haki_max, resistance_max, stamina_max, EnergyPool, EnergyType};
pub use error::{Error, Result};
pub use professions::{profession_bonus, BonusValue, Profession};
pub use progression::{level_from_experience, next_level_threshold};
pub use store::{CharacterStore, World};
pub use weekly_tasks::{current_week_start, monthly_task_exp, weekly_task_exp, WeeklyTaskProgress};
