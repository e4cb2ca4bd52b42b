//! In-memory stores for characters and the bulletin, seeded from the bundled
//! fixture. Nothing is written back; state lives as long as the store does.

use crate::bulletin::{Interview, InterviewDesk, News, NewsBoard};
use crate::character::Character;
use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;

const SEED_JSON: &str = include_str!("../data/seed.json");

#[derive(Debug, Deserialize)]
struct Seed {
    characters: Vec<Character>,
    #[serde(default)]
    news: Vec<News>,
    #[serde(default)]
    interviews: Vec<Interview>,
}

/// Character records keyed by id, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct CharacterStore {
    characters: Vec<Character>,
}

impl CharacterStore {
    pub fn new(characters: Vec<Character>) -> Result<Self> {
        let mut store = Self::default();
        for character in characters {
            store.insert(character)?;
        }
        Ok(store)
    }

    /// Parses a JSON array of character records.
    pub fn from_json(json: &str) -> Result<Self> {
        let characters: Vec<Character> = serde_json::from_str(json)?;
        Self::new(characters)
    }

    pub fn get(&self, id: &str) -> Result<&Character> {
        self.characters
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::CharacterNotFound(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut Character> {
        self.characters
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::CharacterNotFound(id.to_string()))
    }

    pub fn find_by_user(&self, user_id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.user_id == user_id)
    }

    pub fn all(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn insert(&mut self, character: Character) -> Result<()> {
        if self.characters.iter().any(|c| c.id == character.id) {
            return Err(Error::DuplicateId(character.id));
        }
        tracing::debug!(id = %character.id, name = %character.name, "character added");
        self.characters.push(character);
        Ok(())
    }

    /// Replaces the stored record with the same id.
    pub fn update(&mut self, character: Character) -> Result<()> {
        let slot = self.get_mut(&character.id)?;
        *slot = character;
        tracing::debug!(id = %slot.id, "character updated");
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<Character> {
        let index = self
            .characters
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| Error::CharacterNotFound(id.to_string()))?;
        tracing::info!(id, "character removed");
        Ok(self.characters.remove(index))
    }

    /// Moves every character's weekly task counters to the week of `today`.
    /// Returns how many characters rolled over.
    pub fn refresh_weeks(&mut self, today: NaiveDate) -> usize {
        let rolled = self
            .characters
            .iter_mut()
            .map(|c| c.weekly_tasks.roll_over(today))
            .filter(|rolled| *rolled)
            .count();
        if rolled > 0 {
            tracing::info!(rolled, %today, "weekly task counters rolled over");
        }
        rolled
    }
}

/// Everything a session works with: characters, news and interviews.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub characters: CharacterStore,
    pub news: NewsBoard,
    pub interviews: InterviewDesk,
}

impl World {
    /// Loads the bundled seed fixture.
    pub fn seeded() -> Result<Self> {
        Self::from_json(SEED_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let seed: Seed = serde_json::from_str(json)?;
        tracing::debug!(
            characters = seed.characters.len(),
            news = seed.news.len(),
            interviews = seed.interviews.len(),
            "seed loaded"
        );
        Ok(Self {
            characters: CharacterStore::new(seed.characters)?,
            news: NewsBoard::new(seed.news),
            interviews: InterviewDesk::new(seed.interviews),
        })
    }
}
