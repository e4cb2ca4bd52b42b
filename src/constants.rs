// Experience table: cumulative EXP (in %) required to reach each level.
// Index 0 is level 1.
pub const EXPERIENCE_TABLE: [u64; MAX_TABLE_LEVEL as usize] = [
    25_000, 50_000, 75_000, 100_000, 125_000, 150_000, 175_000, 200_000, 225_000, 250_000, // 1-10
    300_000, 350_000, 400_000, 450_000, 500_000, 550_000, 600_000, 650_000,
    750_000, // 19: jumps by 100k, kept as shipped
    800_000, // 20
    900_000, 1_000_000, 1_100_000, 1_200_000, 1_300_000, 1_400_000, 1_500_000, 1_600_000,
    1_700_000, 1_800_000, // 21-30
    1_950_000, 2_100_000, 2_250_000, 2_400_000, 2_550_000, 2_700_000, 2_850_000, 3_000_000,
    3_150_000, 3_300_000, // 31-40
];

// Progression constants
pub const MIN_LEVEL: u32 = 1;
pub const MAX_TABLE_LEVEL: u32 = 40;
pub const EXP_PER_LEVEL_BEYOND_TABLE: u64 = 200_000;

// Energy constants
pub const STAMINA_PER_LEVEL: u64 = 50_000;
pub const HAKI_PER_LEVEL: u64 = 50_000;
pub const RESISTANCE_BASE: u64 = 10_000; // level 0, resistance is HP so never zero
pub const RESISTANCE_FIRST_LEVEL: u64 = 100_000;
pub const RESISTANCE_PER_LEVEL: u64 = 100_000;

// Profession task constants
pub const MAX_COUNTED_TASKS: u32 = 4;
pub const EXP_PER_TASK: u64 = 5_000;
pub const MAX_MONTHLY_TASK_EXP: u64 = MAX_COUNTED_TASKS as u64 * EXP_PER_TASK;

// Neutral profession bonus for unknown professions or missing levels
pub const DEFAULT_PROFESSION_BONUS: f64 = 1.0;

// Number of tracked skills in a character's skill levels
pub const NUM_SKILLS: usize = 10;
